mod console_interface;
mod dot_export;
mod fdg_interface;
mod graph;
mod json_export;
mod models;
mod populate;

pub use console_interface::*;
pub use dot_export::get_dot_data;
pub use fdg_interface::{convert_to_petgraph, render_interactive_graph};
pub use json_export::get_json_data;
pub use models::{Edge, GraphPhase, LayerStats, Node, NodeId, NodeMeta, PopulateResult, StateGraph};
pub use populate::{populate_layer, populate_node};
