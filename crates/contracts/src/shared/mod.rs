pub mod config;
pub mod item_description;
