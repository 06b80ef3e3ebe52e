use anyhow::{Result, anyhow};
use clap::Parser;
use zest_graph::app::ZestGraphApp;
use zest_graph::config::Args;
use zest_graph::logging;
use zest_graph::model::DemoGraph;
use zest_graph::model::snapshot::{self, GraphSnapshot};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let graph = match &args.load {
        Some(path) => snapshot::load::<GraphSnapshot>(path)?.into_graph()?,
        None => DemoGraph::with_root(),
    };
    let rng = args.rng();
    let settings = args.layout_settings();
    let save_path = args.save_path_or("zest-graph.json");
    tracing::info!(nodes = graph.node_count(), seed = ?args.seed, "starting Zest Graph");

    eframe::run_native(
        "Zest Graph",
        args.native_options(),
        Box::new(move |cc| Ok(Box::new(ZestGraphApp::new(cc, graph, rng, settings, save_path)))),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}
