//! Simple directed graph keyed by author handle.
//!
//! Nodes keep first-seen order and parallel edges collapse into one, so the
//! graph only records *that* an interaction happened between two handles.

use ahash::AHashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    graph: DiGraph<String, ()>,
    index: AHashMap<String, NodeIndex>,
}

impl InteractionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, handle: &str) -> NodeIndex {
        if let Some(&ix) = self.index.get(handle) {
            return ix;
        }
        let ix = self.graph.add_node(handle.to_string());
        self.index.insert(handle.to_string(), ix);
        ix
    }

    /// Add `from -> to`. Returns false when the edge was already present.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let a = self.node(from);
        let b = self.node(to);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Handles in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(move |ix| self.graph[ix].as_str())
    }

    /// `(source, target)` pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph
            .edge_references()
            .map(move |e| (self.graph[e.source()].as_str(), self.graph[e.target()].as_str()))
    }

    /// Direct successors of `handle`, oldest edge first.
    pub fn successors(&self, handle: &str) -> Vec<&str> {
        let Some(&ix) = self.index.get(handle) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self.graph.neighbors(ix).map(|n| self.graph[n].as_str()).collect();
        // petgraph yields neighbors newest-first
        out.reverse();
        out
    }
}
