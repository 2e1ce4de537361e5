//! Query solution types.

use quire_core::ObjectId;

/// One satisfying assignment: entity bindings and fixed numeric values,
/// each in first-mention order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    entities: Vec<(String, ObjectId)>,
    numbers: Vec<(String, i64)>,
}

impl Solution {
    pub(crate) fn new(entities: Vec<(String, ObjectId)>, numbers: Vec<(String, i64)>) -> Self {
        Self { entities, numbers }
    }

    /// Entity bound to a variable name.
    pub fn entity(&self, name: &str) -> Option<ObjectId> {
        self.entities
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, obj)| *obj)
    }

    /// Value fixed for a numeric variable name.
    pub fn number(&self, name: &str) -> Option<i64> {
        self.numbers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// All entity bindings in first-mention order.
    pub fn entities(&self) -> &[(String, ObjectId)] {
        &self.entities
    }

    /// All numeric bindings in first-mention order.
    pub fn numbers(&self) -> &[(String, i64)] {
        &self.numbers
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.numbers.is_empty()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (name, obj) in &self.entities {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", name, obj)?;
            first = false;
        }
        for (name, value) in &self.numbers {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", name, value)?;
            first = false;
        }
        Ok(())
    }
}
