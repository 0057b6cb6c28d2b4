use serde::{Deserialize, Serialize};
use crate::state_graph::StateGraph;

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    disks: usize,
    rods: usize,
    nodes: Vec<JsonNode>,
    links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonNode {
    id: usize,
    label: String,
    layer: usize,
    degree: usize,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEdge {
    source: usize,
    target: usize,
}

pub fn get_json_data(graph: &StateGraph) -> serde_json::Result<String> {
    let nodes: Vec<JsonNode> = graph.nodes().map(|node| {
        JsonNode {
            id: node.id,
            label: node.label(),
            layer: node.meta.layer,
            degree: node.degree(),
        }
    }).collect();

    let links: Vec<JsonEdge> = graph.edges().into_iter().map(|edge| {
        JsonEdge {
            source: edge.from,
            target: edge.to,
        }
    })
    .collect();

    let json_data = JsonData {
        disks: graph.disk_count(),
        rods: graph.rod_count(),
        nodes,
        links,
    };
    serde_json::to_string_pretty(&json_data)
}
