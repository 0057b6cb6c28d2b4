use crate::state_graph::{GraphPhase, LayerStats, StateGraph};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::*;
use std::io;
use std::io::Write;

pub struct GraphRenderState<'a> {
    pub graph: &'a StateGraph,
    pub last_layer: Option<LayerStats>,
    pub layers_since_last_render: usize,
    pub start_time: std::time::Instant,
    pub last_render_time: std::time::Instant,
    pub current_time: std::time::Instant,
}

pub fn render_graph(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    log_out: &mut impl Write,
    render: GraphRenderState,
) -> Result<(), Box<dyn std::error::Error>> {

    let graph_info = GraphInfo::new(render.graph);

    let nodes_per_second = if render.start_time == render.current_time {
        0.0
    } else {
        graph_info.nodes as f64 / (render.current_time - render.start_time).as_secs_f64()
    };
    let time_description = format!(
        "Expanded {} layers since last render, {:?} since. Total {:.1} nodes/sec.",
        render.layers_since_last_render,
        render.current_time - render.last_render_time,
        nodes_per_second
    );
    let layer_description = match render.last_layer {
        Some(stats) => format!(
            "Layer {} expanded {} nodes: +{} nodes, +{} edges.",
            stats.layer, stats.expanded, stats.nodes_added, stats.edges_added
        ),
        None => "No layer expanded yet.".to_string(),
    };

    log_out.write_all(graph_info.to_log_string().as_bytes())?;

    let description = format!(
        "{}\n{}\n{}",
        graph_info.to_human_string(),
        layer_description,
        time_description
    );

    terminal.draw(|f| {
        let size = f.area();

        let paragraph = Paragraph::new(description)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(
                        "Hanoi State Graph ({} disks, {} rods)",
                        render.graph.disk_count(),
                        render.graph.rod_count()
                    )),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);

        f.render_widget(paragraph, size);
    })?;
    Ok(())
}

pub struct GraphInfo {
    pub nodes: usize,
    pub edges: usize,
    pub layers: usize,
    pub frontier: usize,
    pub phase: GraphPhase,
}

impl GraphInfo {
    pub fn new(graph: &StateGraph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            layers: graph.layer_count(),
            frontier: graph.frontier_len(),
            phase: graph.phase(),
        }
    }

    pub fn to_human_string(&self) -> String {
        format!(
            "Graph has {} nodes, {} edges after {} layers, {} nodes waiting ({:?}).",
            self.nodes, self.edges, self.layers, self.frontier, self.phase
        )
    }

    pub fn to_log_string(&self) -> String {
        format!(
            "nodes: {}, edges: {}, layers: {}, frontier: {}\n",
            self.nodes, self.edges, self.layers, self.frontier
        )
    }
}

pub fn get_graph_info(graph: &StateGraph) -> String {
    GraphInfo::new(graph).to_human_string()
}

/// One tower label per line, then one `a -- b` line per edge.
pub fn render_labels_to_string(graph: &StateGraph) -> String {
    let mut result = String::new();
    for label in graph.node_labels() {
        result.push_str(&label);
        result.push('\n');
    }
    for (from, to) in graph.edge_labels() {
        result.push_str(&format!("{} -- {}\n", from, to));
    }
    result
}
