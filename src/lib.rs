//! Sharify desktop - clipboard uploader for the Sharify services
//!
//! Reads the system clipboard, uploads images to the file host, text to
//! the paste host or a URL to the link shortener, and puts the resulting
//! URL back on the clipboard.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Config, clipboard classification, trigger phases and errors
//! - **Application**: Use cases, the trigger dispatcher and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP backend, arboard, notify-rust, zenity)
//! - **CLI**: Command-line interface, daemon runner, IPC and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
