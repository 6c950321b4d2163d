use anyhow::{Result, bail};
use catview_runtime::{CatalogSession, Config, Controller};
use tokio::runtime::Runtime;

use crate::presentation::presenters::{list_suggestions, present_product_list};
use crate::presentation::{CommandOutput, Renderer};

pub fn handle(
    runtime: &Runtime,
    config: &Config,
    query: String,
    category: Option<String>,
    renderer: &impl Renderer,
) -> Result<()> {
    let controller = load(runtime, config)?;
    let controller = apply_filter(controller, query, category)?;

    let output = CommandOutput::new(present_product_list(&controller))
        .with_suggestions(list_suggestions(&controller));
    renderer.render(output)
}

/// Run one full load through a fresh controller; a catalog failure is fatal.
pub(crate) fn load(runtime: &Runtime, config: &Config) -> Result<Controller> {
    let session = CatalogSession::from_config(config)?;
    let mut controller = Controller::from_config(config);

    runtime.block_on(session.refresh(&mut controller));

    if let Some(message) = controller.phase().error_message() {
        bail!("{}: {}", controller.labels().load_error, message);
    }
    Ok(controller)
}

fn apply_filter(
    mut controller: Controller,
    query: String,
    category: Option<String>,
) -> Result<Controller> {
    if let Some(category) = category.as_deref()
        && !controller.select_category(Some(category))
    {
        bail!(
            "Unknown category '{}'. Run `catview categories` to list them.",
            category
        );
    }
    controller.set_query(query);
    Ok(controller)
}
