pub mod table;
pub mod time;

pub use table::format_columns;
pub use time::format_age;
