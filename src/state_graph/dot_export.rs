use petgraph::dot::{Config, Dot};
use petgraph::Undirected;

use crate::state_graph::fdg_interface::convert_to_petgraph;
use crate::state_graph::StateGraph;

/// Graphviz source for the saturated graph: every tower is a point labelled with its tower label.
pub fn get_dot_data(graph: &StateGraph) -> String {
    let petgraph = convert_to_petgraph::<Undirected>(graph);
    let content = Dot::with_attr_getters(
        &petgraph,
        &[Config::NodeNoLabel, Config::EdgeNoLabel, Config::GraphContentOnly],
        &|_, _| String::new(),
        &|_, (_, label)| format!("label = \"{}\" shape = point ", label),
    );

    format!(
        "graph {{\n    layout = neato\n    comment = \"hanoi tower graph, {} disks on {} rods\"\n{:?}}}\n",
        graph.disk_count(),
        graph.rod_count(),
        content
    )
}
