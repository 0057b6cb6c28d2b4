use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use crate::core::Tower;

pub type NodeId = usize;

#[derive(Clone)]
pub struct StateGraph {
    pub(crate) disk_count: usize,
    pub(crate) rod_count: usize,
    // map from tower to node id
    pub(crate) nodes: bimap::BiMap<Tower, NodeId>,
    pub(crate) metadata: HashMap<NodeId, NodeMeta>,
    pub(crate) edges: HashSet<Edge>,
    // nodes discovered by the last layer, expanded by the next one
    pub(crate) frontier: Vec<NodeId>,
    pub(crate) next_id: NodeId,
    pub(crate) layer: usize,
    pub(crate) phase: GraphPhase,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphPhase {
    #[default]
    Empty,
    Seeded,
    Expanding,
    Saturated,
}

#[derive(Clone, Debug, Default)]
pub struct NodeMeta {
    pub edges: HashSet<Edge>,
    /// Layer in which the node was discovered, the origin being layer 0.
    pub layer: usize,
}

/// A node of the graph: one distinct tower and its bookkeeping.
///
/// Two nodes are equal when their towers are equal.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    pub id: NodeId,
    pub tower: &'a Tower,
    pub meta: &'a NodeMeta,
}

/// One legal move between two towers. The pair is unordered: `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerStats {
    pub layer: usize,
    pub expanded: usize,
    pub nodes_added: usize,
    pub edges_added: usize,
}

pub enum PopulateResult {
    Unseeded,
    Saturated,
    Expanded(LayerStats),
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Edge { from, to }
    }

    /// Endpoints with the lower id first.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }

    pub fn touches(&self, node_id: NodeId) -> bool {
        self.from == node_id || self.to == node_id
    }

    pub fn other(&self, node_id: NodeId) -> Option<NodeId> {
        if self.from == node_id {
            Some(self.to)
        } else if self.to == node_id {
            Some(self.from)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

impl NodeMeta {
    pub fn new(layer: usize) -> Self {
        NodeMeta {
            edges: HashSet::new(),
            layer,
        }
    }

    /// Returns false when the edge was already registered.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }
}

impl Node<'_> {
    pub fn label(&self) -> String {
        self.tower.to_string()
    }

    pub fn degree(&self) -> usize {
        self.meta.edges.len()
    }

    pub fn neighbour_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        let id = self.id;
        self.meta.edges.iter().filter_map(move |edge| edge.other(id))
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.tower == other.tower
    }
}

impl Eq for Node<'_> {}

impl Hash for Node<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tower.hash(state);
    }
}

impl LayerStats {
    pub fn changed(&self) -> bool {
        self.nodes_added > 0 || self.edges_added > 0
    }
}
