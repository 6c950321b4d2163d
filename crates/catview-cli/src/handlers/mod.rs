pub mod categories;
pub mod list;
pub mod meta;
pub mod view;
