use anyhow::Context;
use clap::Parser;
use eframe::egui;

use matching::Catalog;

mod ui;

use ui::app::{GameSettings, MatchingGameApp, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
struct Args {
    /// Seed for the right-pool shuffle; omit for a fresh pool each run.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of right-column candidates to sample.
    #[arg(long, default_value_t = matching::DEFAULT_POOL_SIZE)]
    pairs: usize,
    /// JSON catalog file; the built-in five-senses set when omitted.
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::five_senses(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Matching Exercise")
            .with_inner_size([960.0, 1020.0])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Matching Exercise",
        options,
        Box::new(move |cc| {
            let settings = cc
                .storage
                .and_then(|storage| {
                    storage
                        .get_string(SETTINGS_STORAGE_KEY)
                        .and_then(|text| serde_json::from_str::<GameSettings>(&text).ok())
                })
                .unwrap_or_default();
            Ok(Box::new(MatchingGameApp::new(
                catalog, args.pairs, args.seed, settings,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("eframe terminated with error: {err}"))
}
