// Hanoi tower state graph.
// Builds every tower reachable from "all disks on rod 0" and every move between them, then
// prints a summary or exports the graph (Graphviz, JSON or plain labels).

mod cli_options;

use crate::cli_options::{Args, OutputFormat};
use clap::Parser;
use hanoi_graph::console_interface::{cleanup_terminal, finish_terminal, setup_terminal};
use hanoi_graph::core::PROGRESS_RENDER_INTERVAL_MS;
use hanoi_graph::state_graph::{
    get_dot_data, get_graph_info, get_json_data, populate_layer, render_graph,
    render_interactive_graph, render_labels_to_string, GraphRenderState, PopulateResult,
    StateGraph,
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Write;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    cli_options::init_logging(args.debug);

    let mut state_graph = StateGraph::new(args.disks, args.rods);
    state_graph.add_origin();

    if args.tui {
        run_with_progress_panel(&mut state_graph, args.progress_log.as_deref())?;
    } else {
        while state_graph.step() {}
    }

    let output = match args.format {
        OutputFormat::Summary => format!("{}\n", get_graph_info(&state_graph)),
        OutputFormat::Dot => get_dot_data(&state_graph),
        OutputFormat::Json => get_json_data(&state_graph)?,
        OutputFormat::Labels => render_labels_to_string(&state_graph),
    };
    write_output(args.output.as_deref(), &output)?;

    if args.view {
        info!("launching interactive graph viewer");
        render_interactive_graph(&state_graph);
    }

    Ok(())
}

fn run_with_progress_panel(
    state_graph: &mut StateGraph,
    progress_log: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut log_out: Box<dyn Write> = match progress_log {
        Some(path) => Box::new(
            std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)?,
        ),
        None => Box::new(std::io::sink()),
    };

    let mut terminal = setup_terminal()?;
    let result = drive_progress_panel(&mut terminal, &mut log_out, state_graph);
    finish_terminal(result, cleanup_terminal)
}

fn drive_progress_panel(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    log_out: &mut impl Write,
    state_graph: &mut StateGraph,
) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = std::time::Instant::now();
    let mut last_render_time = start_time;
    let mut layers_since_last_render = 0;
    let mut last_layer = None;
    let render_interval = std::time::Duration::from_millis(PROGRESS_RENDER_INTERVAL_MS);

    render_graph(terminal, log_out, GraphRenderState {
        graph: state_graph,
        last_layer,
        layers_since_last_render,
        start_time,
        last_render_time,
        current_time: last_render_time,
    })?;

    loop {
        let PopulateResult::Expanded(stats) = populate_layer(state_graph) else {
            break;
        };
        last_layer = Some(stats);
        layers_since_last_render += 1;

        let current_time = std::time::Instant::now();
        if current_time - last_render_time < render_interval {
            continue;
        }
        render_graph(terminal, log_out, GraphRenderState {
            graph: state_graph,
            last_layer,
            layers_since_last_render,
            start_time,
            last_render_time,
            current_time,
        })?;
        last_render_time = current_time;
        layers_since_last_render = 0;
    }

    render_graph(terminal, log_out, GraphRenderState {
        graph: state_graph,
        last_layer,
        layers_since_last_render,
        start_time,
        last_render_time,
        current_time: std::time::Instant::now(),
    })
}

fn write_output(path: Option<&Path>, output: &str) -> std::io::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)?;
            info!("graph written to {}", path.display());
            Ok(())
        }
        None => std::io::stdout().write_all(output.as_bytes()),
    }
}
