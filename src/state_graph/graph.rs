use crate::core::Tower;
use crate::state_graph::models::{Edge, GraphPhase, Node, NodeId, NodeMeta, StateGraph};
use crate::state_graph::populate::populate_layer;
use crate::state_graph::PopulateResult;
use std::collections::{HashMap, HashSet};

impl StateGraph {
    pub fn new(disk_count: usize, rod_count: usize) -> Self {
        StateGraph {
            disk_count,
            rod_count,
            nodes: bimap::BiMap::new(),
            metadata: HashMap::new(),
            edges: HashSet::new(),
            frontier: Vec::new(),
            next_id: 0,
            layer: 0,
            phase: GraphPhase::Empty,
        }
    }

    /// Resets the graph to the single origin node and queues it for expansion.
    pub fn add_origin(&mut self) -> NodeId {
        self.nodes.clear();
        self.metadata.clear();
        self.edges.clear();
        self.frontier.clear();
        self.next_id = 0;
        self.layer = 0;

        let origin = Tower::origin(self.disk_count, self.rod_count);
        let (origin_id, _) = self.upsert_state(origin, 0);
        self.frontier.push(origin_id);
        self.phase = GraphPhase::Seeded;
        origin_id
    }

    /// Expands one breadth layer. Returns whether any node or edge was added.
    ///
    /// Call it until it returns false; from then on it keeps returning false.
    pub fn step(&mut self) -> bool {
        matches!(populate_layer(self), PopulateResult::Expanded(_))
    }

    /// Returns the id of the tower and whether it was new to the graph.
    pub(crate) fn upsert_state(&mut self, state: Tower, layer: usize) -> (NodeId, bool) {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            (id, false)
        } else {
            let id = self.next_id;
            self.next_id += 1;
            self.nodes.insert(state, id);
            self.metadata.insert(id, NodeMeta::new(layer));
            (id, true)
        }
    }

    /// Returns false when the edge, in either direction, is already known.
    ///
    /// Panics if either endpoint was never added to the graph.
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        for node_id in [edge.from, edge.to] {
            assert!(
                self.metadata.contains_key(&node_id),
                "edge {:?} touches unknown node {}",
                edge,
                node_id
            );
        }
        if !self.edges.insert(edge) {
            return false;
        }
        for node_id in [edge.from, edge.to] {
            if let Some(meta) = self.get_node_meta_mut(node_id) {
                meta.add_edge(edge);
            }
        }
        true
    }

    pub(crate) fn get_node_meta_mut(&mut self, node_id: NodeId) -> Option<&mut NodeMeta> {
        self.metadata.get_mut(&node_id)
    }

    pub fn get_state(&self, id: NodeId) -> Option<&Tower> {
        self.nodes.get_by_right(&id)
    }

    pub fn node_id(&self, tower: &Tower) -> Option<NodeId> {
        self.nodes.get_by_left(tower).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        let tower = self.get_state(id)?;
        let meta = self.metadata.get(&id)?;
        Some(Node { id, tower, meta })
    }

    /// Nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> + '_ {
        (0..self.next_id).filter_map(move |id| self.node(id))
    }

    /// Edges sorted by their endpoint ids.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges.iter().copied().collect();
        edges.sort_by_key(Edge::endpoints);
        edges
    }

    pub fn node_labels(&self) -> Vec<String> {
        self.nodes().map(|node| node.label()).collect()
    }

    pub fn edge_labels(&self) -> Vec<(String, String)> {
        self.edges()
            .into_iter()
            .filter_map(|edge| {
                let from = self.get_state(edge.from)?;
                let to = self.get_state(edge.to)?;
                Some((from.to_string(), to.to_string()))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of `step` calls that expanded a seeded graph.
    pub fn layer_count(&self) -> usize {
        self.layer
    }

    pub fn phase(&self) -> GraphPhase {
        self.phase
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    pub fn rod_count(&self) -> usize {
        self.rod_count
    }
}
