pub mod carousel;
pub mod contact;
pub mod filter;
pub mod modal;
pub mod navigator;
pub mod notify;
pub mod page;
pub mod post;
pub mod render;
pub mod search;

pub use crate::domain::model::Timings;
pub use crate::domain::ports::{BlogApi, ConfigProvider, Surface};
pub use crate::domain::view::Patch;
pub use crate::utils::error::Result;
