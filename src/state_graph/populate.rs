use log::{debug, info, trace};

use crate::state_graph::models::{Edge, GraphPhase, LayerStats, NodeId, PopulateResult, StateGraph};

pub fn populate_node(
    graph: &mut StateGraph,
    from_id: NodeId,
    next_frontier: &mut Vec<NodeId>,
    stats: &mut LayerStats,
) {
    let Some(from_state) = graph.get_state(from_id) else {
        return;
    };
    let neighbours = from_state.neighbours();

    for neighbour in neighbours {
        let (to_id, node_added) = graph.upsert_state(neighbour, stats.layer);
        if graph.insert_edge(Edge::new(from_id, to_id)) {
            stats.edges_added += 1;
        }
        if node_added {
            trace!("discovered node {} from {}", to_id, from_id);
            stats.nodes_added += 1;
            next_frontier.push(to_id);
        }
    }
}

/// Expands every node of the current frontier. The whole layer is merged into the graph before
/// this returns, so the next call sees all of its nodes and edges.
pub fn populate_layer(graph: &mut StateGraph) -> PopulateResult {
    match graph.phase {
        GraphPhase::Empty => return PopulateResult::Unseeded,
        GraphPhase::Saturated => return PopulateResult::Saturated,
        GraphPhase::Seeded | GraphPhase::Expanding => {}
    }

    graph.layer += 1;
    info!("layer {} begun", graph.layer);

    let frontier = std::mem::take(&mut graph.frontier);
    let mut stats = LayerStats {
        layer: graph.layer,
        expanded: frontier.len(),
        ..LayerStats::default()
    };
    let mut next_frontier = Vec::new();
    for node_id in frontier {
        populate_node(graph, node_id, &mut next_frontier, &mut stats);
    }
    graph.frontier = next_frontier;

    if stats.changed() {
        debug!(
            "layer {} expanded {} nodes: {} new nodes, {} new edges",
            stats.layer, stats.expanded, stats.nodes_added, stats.edges_added
        );
        graph.phase = GraphPhase::Expanding;
        PopulateResult::Expanded(stats)
    } else {
        info!(
            "saturated after {} layers: {} nodes, {} edges",
            graph.layer,
            graph.node_count(),
            graph.edge_count()
        );
        graph.phase = GraphPhase::Saturated;
        PopulateResult::Saturated
    }
}
