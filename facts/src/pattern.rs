//! Tuple patterns for fact queries.

use quire_core::{ObjectId, Term};

/// One position of a query pattern: a bound value or a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pat {
    /// Position must equal this term.
    Is(Term),
    /// Position matches anything.
    Any,
}

impl Pat {
    /// Bound object-reference position.
    pub fn obj(id: ObjectId) -> Self {
        Pat::Is(Term::Obj(id))
    }

    /// Bound integer position.
    pub fn int(i: i64) -> Self {
        Pat::Is(Term::Int(i))
    }

    /// Bound symbolic-name position.
    pub fn name(s: &str) -> Self {
        Pat::Is(Term::Name(s.to_string()))
    }

    /// Check a single term against this pattern position.
    pub fn matches(&self, term: &Term) -> bool {
        match self {
            Pat::Is(t) => t == term,
            Pat::Any => true,
        }
    }
}

impl From<Term> for Pat {
    fn from(t: Term) -> Self {
        Pat::Is(t)
    }
}
