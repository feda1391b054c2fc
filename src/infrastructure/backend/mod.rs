//! Backend infrastructure module

mod http;

pub use http::{HttpBackend, IMAGE_FILE_NAME};
