use anyhow::Result;
use catview_runtime::Config;
use tokio::runtime::Runtime;

use crate::presentation::presenters::present_categories;
use crate::presentation::{CommandOutput, Renderer};

pub fn handle(
    runtime: &Runtime,
    config: &Config,
    top: Option<usize>,
    renderer: &impl Renderer,
) -> Result<()> {
    let controller = super::list::load(runtime, config)?;
    let view_model = present_categories(&controller, top);
    renderer.render(CommandOutput::new(view_model))
}
