use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser};
use shaper_config::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
use shaper_core::{
    catalog::default_registry,
    library::{CourseLibrary, PageLimits},
};
use shaper_server::{AppState, create_app};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "shaper-server")]
#[command(about = "Course library API with sortable, shaped and paged listings")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a shaper.toml configuration file
    #[arg(short, long, env = "SHAPER_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_server(cli.serve).await
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let ConfigLoad { config, warnings } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: args.config,
        env_file: args.env_file,
        ..Default::default()
    })
    .with_server_overrides(args.host, args.port)
    .load()
    .context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shaper_core=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let registry = default_registry()
        .context("failed to build property mappings")?
        .install()
        .context("failed to install property mappings")?;

    let limits = PageLimits {
        default_page_size: config.paging.default_page_size,
        max_page_size: config.paging.max_page_size,
    };
    let library = CourseLibrary::seeded(registry).with_limits(limits);

    let addr = config.server.bind_address();
    let public_url = config.server.public_url.clone();
    let router = create_app(AppState::new(library, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, %public_url, "Starting Shaper server");
    axum::serve(listener, router).await?;

    Ok(())
}
