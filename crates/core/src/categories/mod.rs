//! Category tables mapping item category keys to display metadata.

mod categories_model;

pub use categories_model::{CategoryInfo, CategoryRegistry};
