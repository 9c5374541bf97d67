//! druidscope - An interactive terminal diagram of Apache Druid on AWS
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;
use druidscope_app::config::{self, IconMode};
use druidscope_core::{catalog, logging, ViewMode};

/// druidscope - An interactive terminal diagram of Apache Druid on AWS
#[derive(Parser, Debug)]
#[command(name = "druidscope", version)]
#[command(about = "An interactive terminal diagram of Apache Druid on AWS", long_about = None)]
struct Args {
    /// View to open on (infrastructure, druid-cluster, data-flow, deployment)
    #[arg(long, value_name = "ID")]
    view: Option<ViewMode>,

    /// Path to a config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Icon set
    #[arg(long, value_enum)]
    icons: Option<IconArg>,

    /// Show everything at once, without the entrance sequence
    #[arg(long)]
    no_animations: bool,

    /// Print the catalog instead of starting the TUI
    #[arg(long, value_enum, value_name = "FORMAT")]
    export: Option<ExportFormat>,

    /// Compact output for --export
    #[arg(long, requires = "export")]
    compact: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IconArg {
    Unicode,
    #[value(name = "nerd_fonts", alias = "nerd-fonts")]
    NerdFonts,
}

impl From<IconArg> for IconMode {
    fn from(arg: IconArg) -> Self {
        match arg {
            IconArg::Unicode => IconMode::Unicode,
            IconArg::NerdFonts => IconMode::NerdFonts,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    catalog::validate()?;

    // Export writes to stdout and never touches the terminal or the log dir
    if let Some(ExportFormat::Json) = args.export {
        println!("{}", druidscope_app::export::export_catalog_json(!args.compact)?);
        return Ok(());
    }

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(config::default_config_path)
            .ok_or_else(|| eyre!("no config directory on this platform, pass --config"))?;
        if config::init_config_file(&path)? {
            eprintln!("Wrote {}", path.display());
        } else {
            eprintln!("{} already exists, leaving it alone", path.display());
        }
        return Ok(());
    }

    logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(view) = args.view {
        settings.ui.initial_view = view;
    }
    if let Some(icons) = args.icons {
        settings.ui.icons = icons.into();
    }
    if args.no_animations {
        settings.ui.animations = false;
    }

    druidscope_tui::run(settings).await?;
    Ok(())
}
