//! registrar-cli library
//!
//! Console front end for registrar-api: an HTTP client, a line-oriented
//! console over any reader/writer pair, and one menu per entity.

pub mod client;
pub mod console;
pub mod menu;
pub mod views;

pub use client::{ApiClient, ClientError};
pub use console::Console;
pub use menu::run_main_menu;
