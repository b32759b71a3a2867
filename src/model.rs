//! The shared migration model: symbol table and dependency graph.
//!
//! Both structures are built by the discovery phase and frozen before any
//! unit is rewritten. Entries are only ever added or left unchanged, never
//! removed, so a later stage can rely on everything an earlier stage saw.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// A named class-like or function-like entity tracked across the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// Single inheritance parent. The first concrete registration wins and
    /// is never overwritten.
    pub parent: Option<String>,
    /// Capability-merge sources in observation order. Kept separate from
    /// `parent` so the two legacy relations stay distinguishable in reports.
    pub merges_from: Vec<String>,
    /// Set once any class evidence is observed: an inheritance link, a
    /// method attachment, or a tagged constructor.
    pub is_class: bool,
}

/// Outcome of offering a parent registration to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentRegistration {
    Recorded,
    AlreadySame,
    /// The symbol already had a different parent; the offer was ignored.
    Conflict { kept: String },
}

/// Registry of every symbol mentioned anywhere in the corpus, keyed by name
/// in first-mention order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, name: &str) -> &mut Symbol {
        self.entries.entry(name.to_string()).or_default()
    }

    /// Creates the symbol if it is not yet known. No other effect.
    pub fn observe(&mut self, name: &str) {
        self.entry(name);
    }

    /// Marks a symbol as a class. Idempotent.
    pub fn mark_class(&mut self, name: &str) {
        self.entry(name).is_class = true;
    }

    /// Offers `parent` as `child`'s single inheritance parent.
    ///
    /// First registration wins; a later, divergent offer leaves the table
    /// unchanged and reports the conflict back to the caller.
    pub fn register_parent(&mut self, child: &str, parent: &str) -> ParentRegistration {
        let entry = self.entry(child);
        match &entry.parent {
            None => {
                entry.parent = Some(parent.to_string());
                ParentRegistration::Recorded
            }
            Some(existing) if existing == parent => ParentRegistration::AlreadySame,
            Some(existing) => ParentRegistration::Conflict {
                kept: existing.clone(),
            },
        }
    }

    /// Records a capability-merge source for `child`, preserving observation
    /// order and skipping duplicates.
    pub fn record_merge(&mut self, child: &str, source: &str) {
        let entry = self.entry(child);
        if !entry.merges_from.iter().any(|s| s == source) {
            entry.merges_from.push(source.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.entries.get(name)
    }

    pub fn is_class(&self, name: &str) -> bool {
        self.get(name).is_some_and(|s| s.is_class)
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|s| s.parent.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.entries.iter().map(|(name, sym)| (name.as_str(), sym))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which symbols each source unit references, in observation order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: IndexMap<String, IndexSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the edge (unit -> symbol). Set semantics: re-recording an
    /// existing edge is a no-op.
    pub fn record(&mut self, unit: &str, symbol: &str) {
        self.edges
            .entry(unit.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    pub fn contains(&self, unit: &str, symbol: &str) -> bool {
        self.edges.get(unit).is_some_and(|set| set.contains(symbol))
    }

    pub fn references(&self, unit: &str) -> Vec<&str> {
        self.edges
            .get(unit)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.edges.iter().map(|(unit, set)| (unit.as_str(), set))
    }
}

/// The symbol table and dependency graph together, as the stages see them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Model {
    pub symbols: SymbolTable,
    pub dependencies: DependencyGraph,
}
