pub mod catalog;
pub mod screen;
pub mod status;

pub use catalog::{present_categories, present_metadata, present_product_list};
pub use screen::present_screen;
pub use status::{list_suggestions, metadata_badge, metadata_suggestions, phase_badge};
