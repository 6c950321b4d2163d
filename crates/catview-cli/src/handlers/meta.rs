use anyhow::Result;
use catview_runtime::{CatalogSession, Config};
use tokio::runtime::Runtime;

use crate::presentation::presenters::{metadata_badge, metadata_suggestions, present_metadata};
use crate::presentation::{CommandOutput, Renderer};

pub fn handle(runtime: &Runtime, config: &Config, renderer: &impl Renderer) -> Result<()> {
    let session = CatalogSession::from_config(config)?;
    let reader = session.metadata_reader();
    let metadata = runtime.block_on(reader.fetch())?;

    let view_model = present_metadata(
        &metadata,
        &config.markers,
        reader.location().to_string(),
        chrono::Local::now().naive_local(),
    );
    let output = CommandOutput::new(view_model)
        .with_badge(metadata_badge(&metadata))
        .with_suggestions(metadata_suggestions(&metadata));
    renderer.render(output)
}
