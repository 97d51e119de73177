//! Topology — the lattice as a directed weighted graph.
//!
//! The lattice itself stores flat arrays for speed. This module builds a
//! `petgraph` view of the same structure for diagnostics: which states a
//! plasticity direction can reach, and which edges leave a given state.

use crate::lattice::Lattice;
use crate::types::{Plasticity, SynapseState, Transition};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{EdgeFiltered, EdgeRef};
use petgraph::Direction;

/// Node payload: a state and its population when the view was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateNode {
    pub state: SynapseState,
    pub count: u64,
}

/// Edge payload: a transition and its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionEdge {
    pub transition: Transition,
    pub weight: f64,
}

/// Directed graph view of a lattice.
pub struct LatticeGraph {
    graph: DiGraph<StateNode, TransitionEdge>,
    nodes: [NodeIndex; SynapseState::COUNT],
}

impl LatticeGraph {
    /// View with all twenty transitions.
    pub fn from_lattice(lattice: &Lattice) -> Self {
        Self::build(lattice, |_| true)
    }

    /// View restricted to one plasticity direction.
    pub fn for_plasticity(lattice: &Lattice, plasticity: Plasticity) -> Self {
        Self::build(lattice, |t| t.plasticity() == plasticity)
    }

    fn build(lattice: &Lattice, keep: impl Fn(Transition) -> bool) -> Self {
        let mut graph = DiGraph::with_capacity(SynapseState::COUNT, Transition::COUNT);
        let mut nodes = [NodeIndex::new(0); SynapseState::COUNT];
        for state in SynapseState::ALL {
            nodes[state.index()] = graph.add_node(StateNode {
                state,
                count: lattice.count(state),
            });
        }
        for t in Transition::ALL.into_iter().filter(|t| keep(*t)) {
            let (src, dst) = t.endpoints();
            graph.add_edge(
                nodes[src.index()],
                nodes[dst.index()],
                TransitionEdge {
                    transition: t,
                    weight: lattice.weight(t),
                },
            );
        }
        Self { graph, nodes }
    }

    pub fn graph(&self) -> &DiGraph<StateNode, TransitionEdge> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether units at `from` can eventually reach `to` through edges with
    /// non-zero weight.
    pub fn can_reach(&self, from: SynapseState, to: SynapseState) -> bool {
        let live = EdgeFiltered::from_fn(&self.graph, |e| e.weight().weight > 0.0);
        has_path_connecting(&live, self.nodes[from.index()], self.nodes[to.index()], None)
    }

    /// Outgoing transitions of a state, heaviest first.
    pub fn outgoing(&self, state: SynapseState) -> Vec<TransitionEdge> {
        let mut edges: Vec<TransitionEdge> = self
            .graph
            .edges_directed(self.nodes[state.index()], Direction::Outgoing)
            .map(|e| *e.weight())
            .collect();
        edges.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
        edges
    }

    /// Total probability mass leaving a state in one application of each
    /// outgoing edge, ignoring cascade effects.
    pub fn outflow(&self, state: SynapseState) -> f64 {
        self.outgoing(state).iter().map(|e| e.weight).sum()
    }
}
