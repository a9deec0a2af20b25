pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::http::HttpBlogApi;
pub use crate::core::page::{Event, Page, PageSetup};
pub use crate::utils::error::{Result, UiError};
