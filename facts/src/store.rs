//! The in-memory fact store.

use crate::Pat;
use quire_core::{RelId, Term};
use std::collections::HashMap;

/// Facts of a single relation: tuples in insertion order plus a
/// first-argument index into them.
#[derive(Debug, Default)]
struct RelTable {
    name: String,
    tuples: Vec<Vec<Term>>,
    /// First argument -> tuple indices, in insertion order.
    by_first: HashMap<Term, Vec<usize>>,
}

/// The in-memory fact store.
///
/// Facts are asserted in a batch load and are immutable for the duration of
/// a query session; `reset` clears the whole store. All relation functions
/// take the store as an explicit parameter — there is no ambient global.
#[derive(Debug, Default)]
pub struct FactStore {
    tables: Vec<RelTable>,
    names: HashMap<String, RelId>,
}

impl FactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a relation name, allocating an id on first use.
    pub fn rel(&mut self, name: &str) -> RelId {
        if let Some(id) = self.names.get(name) {
            return *id;
        }
        let id = RelId::new(self.tables.len() as u32);
        self.tables.push(RelTable {
            name: name.to_string(),
            tuples: Vec::new(),
            by_first: HashMap::new(),
        });
        self.names.insert(name.to_string(), id);
        id
    }

    /// Look up an already-interned relation.
    pub fn rel_id(&self, name: &str) -> Option<RelId> {
        self.names.get(name).copied()
    }

    /// Get the name of an interned relation.
    pub fn rel_name(&self, rel: RelId) -> Option<&str> {
        self.tables.get(rel.raw() as usize).map(|t| t.name.as_str())
    }

    /// Add a ground fact. Duplicate tuples are stored once.
    pub fn assert_fact(&mut self, rel: RelId, tuple: Vec<Term>) {
        let table = &mut self.tables[rel.raw() as usize];
        if table.tuples.contains(&tuple) {
            return;
        }
        let idx = table.tuples.len();
        if let Some(first) = tuple.first() {
            table.by_first.entry(first.clone()).or_default().push(idx);
        }
        table.tuples.push(tuple);
    }

    /// All tuples of a relation, in insertion order.
    pub fn facts(&self, rel: RelId) -> &[Vec<Term>] {
        &self.tables[rel.raw() as usize].tuples
    }

    /// The lazy sequence of tuples matching the pattern, in insertion order.
    ///
    /// When the first pattern position is bound, matching goes through the
    /// first-argument index instead of scanning the relation.
    pub fn query<'s, 'p>(
        &'s self,
        rel: RelId,
        pattern: &'p [Pat],
    ) -> Box<dyn Iterator<Item = &'s [Term]> + 'p>
    where
        's: 'p,
    {
        let table = &self.tables[rel.raw() as usize];
        match pattern.first() {
            Some(Pat::Is(first)) => {
                let indices = table
                    .by_first
                    .get(first)
                    .map(|v| v.as_slice())
                    .unwrap_or(&[]);
                Box::new(
                    indices
                        .iter()
                        .map(move |&i| table.tuples[i].as_slice())
                        .filter(move |tuple| Self::matches(tuple, pattern)),
                )
            }
            _ => Box::new(
                table
                    .tuples
                    .iter()
                    .map(|t| t.as_slice())
                    .filter(move |tuple| Self::matches(tuple, pattern)),
            ),
        }
    }

    /// First tuple matching the pattern, if any.
    pub fn first<'s>(&'s self, rel: RelId, pattern: &[Pat]) -> Option<&'s [Term]> {
        self.query(rel, pattern).next()
    }

    /// Check whether an exact tuple is present.
    pub fn contains_fact(&self, rel: RelId, tuple: &[Term]) -> bool {
        let table = &self.tables[rel.raw() as usize];
        if let Some(first) = tuple.first() {
            table
                .by_first
                .get(first)
                .map(|indices| indices.iter().any(|&i| table.tuples[i] == tuple))
                .unwrap_or(false)
        } else {
            table.tuples.iter().any(|t| t.is_empty())
        }
    }

    /// Number of facts in a relation.
    pub fn fact_count(&self, rel: RelId) -> usize {
        self.tables[rel.raw() as usize].tuples.len()
    }

    /// Total number of facts across all relations.
    pub fn len(&self) -> usize {
        self.tables.iter().map(|t| t.tuples.len()).sum()
    }

    /// True if no facts are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear everything: facts, indexes, and interned relation names.
    pub fn reset(&mut self) {
        self.tables.clear();
        self.names.clear();
    }

    fn matches(tuple: &[Term], pattern: &[Pat]) -> bool {
        tuple.len() == pattern.len() && pattern.iter().zip(tuple).all(|(p, t)| p.matches(t))
    }
}
