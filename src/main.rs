#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gantt_chart_maker::config::Settings;
use gantt_chart_maker::{io, render};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gantt-chart-maker", version, about = "Project task list and Gantt chart maker")]
struct Cli {
    /// Settings file (defaults to the OS config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render a chart from a CSV task file without opening the editor
    Render {
        /// CSV file with Task, Start_Date, End_Date, Status, Remark columns
        csv: PathBuf,
        /// Output HTML file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Chart title
        #[arg(short, long)]
        title: Option<String>,
        /// Show task names only, without date ranges
        #[arg(long)]
        compact: bool,
        /// Do not open the chart in a browser
        #[arg(long)]
        no_open: bool,
    },
}

fn init_tracing() {
    // Opt-in via RUST_LOG; a bad filter falls back to warnings only.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_render(
    settings: Settings,
    csv: PathBuf,
    output: Option<PathBuf>,
    title: Option<String>,
    compact: bool,
    no_open: bool,
) -> gantt_chart_maker::Result<()> {
    let mut settings = settings;
    if let Some(output) = output {
        settings.output_file = output;
    }
    if let Some(title) = title {
        settings.chart_title = title;
    }
    if compact {
        settings.show_date_range = false;
    }
    if no_open {
        settings.open_in_browser = false;
    }

    let outcome = io::import_csv(&csv)?;
    if outcome.skipped > 0 {
        eprintln!("Skipped {} incomplete rows", outcome.skipped);
    }
    let model = render::generate_chart(&outcome.tasks, &settings)?;
    println!(
        "Wrote {} tasks to {}",
        model.rows.len(),
        settings.output_file.display()
    );
    Ok(())
}

fn run_gui(settings: Settings, settings_path: PathBuf) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([900.0, 480.0])
            .with_title("Gantt Chart Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Gantt Chart Generator",
        options,
        Box::new(|cc| Ok(Box::new(app::GanttApp::new(cc, settings, settings_path)))),
    )
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let settings_path = cli.settings.unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path);

    match cli.command {
        Some(Command::Render {
            csv,
            output,
            title,
            compact,
            no_open,
        }) => {
            if let Err(e) = run_render(settings, csv, output, title, compact, no_open) {
                eprintln!("{}: {}", e.title(), e);
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = run_gui(settings, settings_path) {
                tracing::error!(error = %e, "failed to start the editor");
                std::process::exit(1);
            }
        }
    }
}
