//! Requires graph between catalog extensions.
//!
//! Edges point from an extension to the extensions it requires. The catalog
//! self-check sorts the graph once to prove it is acyclic before any
//! resolution runs.
//!
//! # Example
//!
//! ```
//! use launchpad_core::graph::RequiresGraph;
//!
//! let mut graph = RequiresGraph::new();
//! graph.add_node("regExodus");
//! graph.add_node("typingLabel");
//! graph.add_edge("typingLabel", "regExodus");
//!
//! let order = graph.topological_sort().unwrap();
//! assert_eq!(order, vec!["regExodus", "typingLabel"]);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::ExtensionCatalog;
use crate::error::{Error, Result};

/// Directed graph of "requires" edges keyed by extension id.
#[derive(Debug, Clone, Default)]
pub struct RequiresGraph {
    nodes: BTreeSet<String>,
    /// Adjacency list: key requires each value.
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl RequiresGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph of every extension in a catalog.
    pub fn from_catalog(catalog: &ExtensionCatalog) -> Self {
        let mut graph = Self::new();
        for extension in catalog.iter() {
            graph.add_node(&extension.id);
            for required in &extension.requires {
                graph.add_edge(&extension.id, required);
            }
        }
        graph
    }

    pub fn add_node(&mut self, id: &str) {
        self.nodes.insert(id.to_string());
        self.edges.entry(id.to_string()).or_default();
    }

    /// Declare that `from` requires `to`.
    ///
    /// Edges to ids that never become nodes are ignored by the sort; the
    /// catalog reports them separately as unknown requirements.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Direct requirements of a node.
    pub fn requirements_of(&self, id: &str) -> Vec<&str> {
        self.edges
            .get(id)
            .map(|deps| deps.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Sort with Kahn's algorithm, requirements first.
    ///
    /// Ties are broken alphabetically so the order is deterministic.
    ///
    /// # Errors
    ///
    /// Returns `Error::RequiresCycle` naming every node left unsorted.
    pub fn topological_sort(&self) -> Result<Vec<String>> {
        let mut pending: BTreeMap<&str, usize> = BTreeMap::new();
        let mut dependents: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for id in &self.nodes {
            let requirements = self
                .edges
                .get(id)
                .into_iter()
                .flatten()
                .filter(|dep| self.nodes.contains(*dep));
            let mut count = 0;
            for dep in requirements {
                dependents.entry(dep.as_str()).or_default().push(id.as_str());
                count += 1;
            }
            pending.insert(id.as_str(), count);
        }

        let mut ready: BTreeSet<&str> = pending
            .iter()
            .filter(|&(_, &count)| count == 0)
            .map(|(&id, _)| id)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(current) = ready.pop_first() {
            order.push(current.to_string());
            for &dependent in dependents.get(current).into_iter().flatten() {
                if let Some(count) = pending.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(dependent);
                    }
                }
            }
        }

        if order.len() != self.nodes.len() {
            let sorted: BTreeSet<&str> = order.iter().map(String::as_str).collect();
            let participants = self
                .nodes
                .iter()
                .filter(|id| !sorted.contains(id.as_str()))
                .cloned()
                .collect();
            return Err(Error::RequiresCycle { participants });
        }

        Ok(order)
    }
}
