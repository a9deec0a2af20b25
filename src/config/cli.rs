use crate::domain::model::Timings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "blog-ui")]
#[command(about = "Headless driver for the blog front-end engine")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Raw Cookie header (must contain csrftoken for writes).
    #[arg(long)]
    pub cookie: Option<String>,

    /// Optional TOML config file; overrides the flags above.
    #[arg(long)]
    pub config: Option<String>,

    /// Run a search query and print the rendered results.
    #[arg(long)]
    pub search: Option<String>,

    /// Open a post and print the rendered modal regions.
    #[arg(long)]
    pub post: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn cookie_header(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    fn timings(&self) -> Timings {
        Timings::default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}
