use anyhow::{Result, anyhow};
use clap::Parser;
use zest_graph::app::ZestGraphViewerApp;
use zest_graph::config::Args;
use zest_graph::logging;
use zest_graph::model::ContentList;
use zest_graph::model::snapshot::{self, ContentSnapshot};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let content = match &args.load {
        Some(path) => snapshot::load::<ContentSnapshot>(path)?.into_content()?,
        None => ContentList::default(),
    };
    let settings = args.layout_settings();
    let save_path = args.save_path_or("zest-graph-viewer.json");
    tracing::info!(elements = content.len(), "starting Zest GraphViewer");

    eframe::run_native(
        "Zest GraphViewer",
        args.native_options(),
        Box::new(move |cc| Ok(Box::new(ZestGraphViewerApp::new(cc, content, settings, save_path)))),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}
