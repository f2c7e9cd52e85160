// src/roster.rs
use indexmap::IndexSet;

/// Ordered, unique character names in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    names: IndexSet<String>,
}

// Order matters: IndexSet's own equality is set equality.
impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        self.names.iter().eq(other.names.iter())
    }
}

impl Eq for Roster {}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless already present (exact, case-sensitive). Returns whether it was added.
    pub fn push(&mut self, name: String) -> bool {
        self.names.insert(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
