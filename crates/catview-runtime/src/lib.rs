pub mod catalog_loader;
pub mod config;
pub mod controller;
pub mod error;
pub mod metadata_reader;
pub mod session;
pub mod source;

pub use catalog_loader::CatalogLoader;
pub use config::{Config, resolve_config_path};
pub use controller::{Controller, IgnoreReason, LoadEvent, LoadTicket, Phase, StartOutcome};
pub use error::{Error, Result};
pub use metadata_reader::MetadataReader;
pub use session::CatalogSession;
pub use source::{ResourceClient, ResourceLocation};
