use anyhow::Context;
use glam::Vec2;
use graph_canvas::prelude::*;
use log::{error, info};

const DEFAULT_CONFIG_PATH: &str = "canvas.yaml";

fn main() -> anyhow::Result<()> {
    let _logger = common::setup_logging("info")?;

    let mut args = std::env::args().skip(1);
    let session_path = args
        .next()
        .context("usage: graph_canvas <session.yaml> [config.yaml]")?;
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = CanvasConfig::load_or_default(&config_path);
    let session = Session::load(&session_path)
        .with_context(|| format!("failed to load session {session_path}"))?;

    // screen space is the canvas drawn 1:1 with its top-left corner at the origin
    let transform = CanvasTransform::from_screen_rect(Vec2::ZERO, config.canvas_size, 1.0);
    let mut interaction = Interaction::new(Graph::new(&config), &config, transform);
    let mut router = PointerRouter::new(config.drag_threshold);

    let summary = session.replay(&mut router, &mut interaction);

    if let Err(err) = interaction.validate() {
        error!("Graph invariants violated after replay: {err:#}");
        return Err(err);
    }

    for node in interaction.graph().nodes() {
        info!(
            "node {} at {} with {} edges",
            node.id(),
            node.pos(),
            node.edge_count()
        );
    }
    info!(
        "{} notifications, {} nodes, {} edges",
        summary.events.len(),
        summary.nodes,
        summary.edges
    );

    Ok(())
}
