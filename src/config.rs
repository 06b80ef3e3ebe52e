use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::LayoutSettings;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Initial window width in points.
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Seed for the random node connections; OS entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Snapshot to start from instead of the built-in initial graph.
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Where the Save button writes its snapshot.
    #[arg(long)]
    pub save_path: Option<PathBuf>,

    /// Upper bound on simulation steps for one layout pass.
    #[arg(long, default_value_t = 600)]
    pub layout_iterations: usize,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width.max(200.0), self.height.max(200.0)]),
            ..Default::default()
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    pub fn save_path_or(&self, default_file: &str) -> PathBuf {
        self.save_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_file))
    }

    pub fn layout_settings(&self) -> LayoutSettings {
        LayoutSettings {
            max_iterations: self.layout_iterations.max(1),
            ..LayoutSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use rand::Rng;

    use super::Args;

    #[test]
    fn defaults_match_the_demo_window() {
        let args = Args::try_parse_from(["zest-graph"]).unwrap();
        assert_eq!(args.width, 800.0);
        assert_eq!(args.height, 800.0);
        assert_eq!(args.seed, None);
        assert_eq!(args.layout_iterations, 600);
        assert_eq!(args.log_level, "info");
        assert_eq!(
            args.save_path_or("zest-graph.json"),
            PathBuf::from("zest-graph.json")
        );
    }

    #[test]
    fn seeded_runs_share_a_random_stream() {
        let args = Args::try_parse_from(["zest-graph", "--seed", "17"]).unwrap();
        let first = args.rng().random::<u64>();
        let second = args.rng().random::<u64>();
        assert_eq!(first, second);
    }

    #[test]
    fn layout_iterations_never_drop_to_zero() {
        let args = Args::try_parse_from(["zest-graph", "--layout-iterations", "0"]).unwrap();
        assert_eq!(args.layout_settings().max_iterations, 1);
    }

    #[test]
    fn explicit_save_path_wins() {
        let args =
            Args::try_parse_from(["zest-graph-viewer", "--save-path", "/tmp/out.json"]).unwrap();
        assert_eq!(
            args.save_path_or("zest-graph-viewer.json"),
            PathBuf::from("/tmp/out.json")
        );
    }
}
