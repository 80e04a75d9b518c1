//! Fantasy Trends - season fantasy football regression charts
//!
//! Loads a season stat export, derives running back metrics and renders
//! scatterplots with least squares trendlines.

use anyhow::{Context, Result};
use clap::Parser;
use fantasy_trends::charts::StaticChartRenderer;
use fantasy_trends::data::{DataLoader, Position};
use fantasy_trends::gui::TrendsApp;
use fantasy_trends::stats::{FormulaMode, ScoringPreset};
use fantasy_trends::{pipeline, AnalysisConfig, AnalysisReport};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Season stats CSV export
    #[arg(value_name = "CSV")]
    file: PathBuf,

    /// JSON file with analysis settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for rendered PNG figures
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    #[arg(long, value_enum)]
    scoring: Option<ScoringPreset>,

    /// Score only rushing and receptions, dropping the receiving and fumble terms
    #[arg(long)]
    truncated_formula: bool,

    /// Minimum games for a quarterback to count as a starter
    #[arg(long)]
    min_games: Option<u32>,

    /// Running backs need more carries than this for the efficiency chart
    #[arg(long)]
    min_carries: Option<u32>,

    /// Print the first N rows of each position table
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// Open the interactive chart viewer
    #[arg(long)]
    view: bool,

    /// Open the rendered PNGs with the system image viewer
    #[arg(long)]
    open: bool,
}

impl Args {
    fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };

        if let Some(dir) = &self.out_dir {
            config.out_dir = dir.clone();
        }
        if let Some(preset) = self.scoring {
            config.scoring = preset.scoring();
        }
        if self.truncated_formula {
            config.formula = FormulaMode::Truncated;
        }
        if let Some(games) = self.min_games {
            config.min_qb_games = games;
        }
        if let Some(carries) = self.min_carries {
            config.min_rb_carries = carries;
        }
        Ok(config)
    }
}

fn preview(report: &AnalysisReport, rows: usize) {
    for position in Position::ALL {
        println!("{}:\n{}", position, report.tables.get(position).head(Some(rows)));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.analysis_config()?;

    let raw = DataLoader::load_csv(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;
    let report = pipeline::analyze(raw.clone(), &config)?;

    if let Some(rows) = args.preview {
        preview(&report, rows);
    }

    let paths = StaticChartRenderer::render_all(
        &report.charts,
        &config.out_dir,
        config.figure_width,
        config.figure_height,
    )
    .with_context(|| format!("rendering charts into {}", config.out_dir.display()))?;
    info!(count = paths.len(), dir = %config.out_dir.display(), "charts written");

    if args.open {
        for path in &paths {
            open::that(path).with_context(|| format!("opening {}", path.display()))?;
        }
    }

    if args.view {
        TrendsApp::new(raw, report, config, Some(args.file.clone()))
            .launch()
            .map_err(|e| anyhow::anyhow!("viewer failed: {}", e))?;
    }

    Ok(())
}
