use crate::state_graph::StateGraph;
use grapher::renderer::Renderer;
use grapher::simulator::SimulatorBuilder;
use petgraph::{Directed, EdgeType};
use std::collections::HashMap;

pub fn render_interactive_graph(graph: &StateGraph) {
    // the simulator only needs the shape of the graph
    let graph: petgraph::Graph<(), (), Directed> =
        convert_to_petgraph::<Directed>(graph).map(|_, _| (), |_, _| ());

    // Configure the simulator
    let simulator = SimulatorBuilder::new()
        .delta_time(0.01)
        .freeze_threshold(-1.0)
        .build(graph.into());

    // Start the renderer
    let renderer = Renderer::new(simulator);
    renderer.create_window();
}

/// Node weights are the tower labels. Each undirected edge is added once.
pub fn convert_to_petgraph<Ty: EdgeType>(graph: &StateGraph) -> petgraph::Graph<String, (), Ty> {
    let mut petgraph = petgraph::Graph::default();

    let node_map: HashMap<usize, petgraph::graph::NodeIndex> = graph
        .nodes()
        .map(|node| {
            let index = petgraph.add_node(node.label());
            (node.id, index)
        })
        .collect();

    for edge in graph.edges() {
        if let (Some(&from_index), Some(&to_index)) =
            (node_map.get(&edge.from), node_map.get(&edge.to))
        {
            petgraph.add_edge(from_index, to_index, ());
        }
    }

    petgraph
}
