use super::args::{Cli, Commands};
use super::handlers;
use crate::logging::{self, LogTarget};
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;
use catview_runtime::{Config, resolve_config_path};
use tokio::runtime::Runtime;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::View);
    let interactive = matches!(command, Commands::View);

    logging::init(
        cli.log_level,
        LogTarget::for_command(interactive, cli.log_file),
    )?;

    let config_path = resolve_config_path(cli.config.as_deref())?;
    debug!(path = %config_path.display(), "loading config");
    let config = Config::load_from(&config_path)?.with_overrides(cli.catalog, cli.metadata);

    let runtime = build_runtime(interactive)?;
    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json);

    match command {
        Commands::View => handlers::view::handle(&runtime, &config),
        Commands::List { query, category } => {
            handlers::list::handle(&runtime, &config, query, category, &renderer)
        }
        Commands::Categories { top } => {
            handlers::categories::handle(&runtime, &config, top, &renderer)
        }
        Commands::Meta => handlers::meta::handle(&runtime, &config, &renderer),
    }
}

/// The viewer keeps fetches off the UI thread; one-shot commands just block.
fn build_runtime(interactive: bool) -> Result<Runtime> {
    let mut builder = if interactive {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        builder.worker_threads(2);
        builder
    } else {
        tokio::runtime::Builder::new_current_thread()
    };
    Ok(builder.enable_all().build()?)
}
