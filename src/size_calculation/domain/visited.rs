use std::collections::HashMap;

/// Packages recorded during one traversal, keyed by name, with their artifact size in bytes
///
/// Serves as memoization cache, cycle guard and result of a traversal.
/// Insertion order is remembered so reports list packages in the order they
/// were reached.
#[derive(Debug, Clone, Default)]
pub struct VisitedPackages {
    sizes: HashMap<String, u64>,
    order: Vec<String>,
}

impl VisitedPackages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sizes.contains_key(name)
    }

    /// Records `name` once. Returns false, leaving the first size in place,
    /// when the name was already recorded.
    pub fn insert(&mut self, name: String, size: u64) -> bool {
        if self.sizes.contains_key(&name) {
            return false;
        }
        self.sizes.insert(name.clone(), size);
        self.order.push(name);
        true
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.sizes.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.sizes.values().sum()
    }

    /// Number of recorded packages other than the root.
    pub fn dependency_count(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Iterates `(name, size)` in the order packages were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.sizes[name]))
    }
}
