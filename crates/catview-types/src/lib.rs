pub mod metadata;
pub mod record;
pub mod value;

pub use metadata::{BuildMetadata, METADATA_TIMESTAMP_FORMAT};
pub use record::{ProductRecord, RawRecord, field};
pub use value::FieldValue;
