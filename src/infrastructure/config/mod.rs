//! Config infrastructure module

mod json_store;

pub use json_store::{JsonConfigStore, CONFIG_DIR_ENV, CONFIG_FILE_NAME};
