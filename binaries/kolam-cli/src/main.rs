//! KolamAI CLI
//!
//! Runs the web service and exposes the catalog and SVG export offline.
//!
//! ```bash
//! kolam serve                          # http://0.0.0.0:5000
//! kolam serve --bind 127.0.0.1:8080
//! kolam analyze photo.png              # AnalysisResult JSON
//! kolam render request.json -o out.svg
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kolam_config::WebConfig;
use kolam_core::{AnalysisResult, PatternCatalog, SvgRequest};
use kolam_web::AppState;

#[derive(Parser)]
#[command(name = "kolam")]
#[command(about = "KolamAI - kolam pattern analysis and SVG export")]
#[command(version)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to listen on
        #[arg(short, long)]
        bind: Option<String>,

        /// Directory of static assets
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Directory for uploaded images
        #[arg(long)]
        upload_dir: Option<PathBuf>,

        /// YAML pattern catalog replacing the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the analysis the server would return for a filename
    Analyze {
        filename: String,

        /// YAML pattern catalog replacing the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the selected pattern as SVG instead of JSON
        #[arg(long)]
        svg: bool,
    },

    /// Render an export request (`{paths, grid_dots}` JSON) to SVG
    Render {
        request: PathBuf,

        /// Output SVG file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List catalog entries in selection order
    Catalog {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Serve {
            config,
            bind,
            static_dir,
            upload_dir,
            catalog,
        } => {
            let mut config = WebConfig::load(config.as_deref())?;
            if let Some(bind) = bind {
                config.bind = bind;
            }
            if let Some(dir) = static_dir {
                config.static_dir = dir;
            }
            if let Some(dir) = upload_dir {
                config.upload_dir = dir;
            }
            if catalog.is_some() {
                config.catalog_path = catalog;
            }

            let state = AppState::from_config(config).context("failed to load pattern catalog")?;
            kolam_web::serve(Arc::new(state)).await?;
        }

        Commands::Analyze {
            filename,
            catalog,
            svg,
        } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let pattern = catalog.select(&filename);
            if svg {
                println!("{}", SvgRequest::from_pattern(&pattern).render());
            } else {
                let result = AnalysisResult::stamp(pattern, filename);
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }

        Commands::Render { request, output } => {
            let bytes = std::fs::read(&request)
                .with_context(|| format!("failed to read {}", request.display()))?;
            let svg = SvgRequest::from_slice(&bytes)?.render();
            match output {
                Some(path) => {
                    std::fs::write(&path, &svg)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "wrote svg");
                }
                None => println!("{svg}"),
            }
        }

        Commands::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            for (i, p) in catalog.records().iter().enumerate() {
                println!(
                    "{i}  {:<8} {:<14} {:<7} {}",
                    p.id,
                    p.kind,
                    format!("{:?}", p.complexity),
                    p.symmetry
                );
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<PatternCatalog> {
    match path {
        Some(p) => PatternCatalog::load(p)
            .with_context(|| format!("failed to load catalog {}", p.display())),
        None => Ok(PatternCatalog::builtin()),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kolam=info,kolam_web=info,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output; logs go to stderr
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
