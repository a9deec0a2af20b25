use blog_ui::core::filter::Card;
use blog_ui::domain::model::Timings;
use blog_ui::domain::ports::{ConfigProvider, Surface};
use blog_ui::domain::view::Patch;
use blog_ui::utils::{logger, validation::Validate};
use blog_ui::{CliConfig, Event, HttpBlogApi, Page, PageSetup, TomlConfig};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

/// Logs every patch the engine emits; rendered regions are printed in
/// full so the driver doubles as a smoke test against a live server.
struct TraceSurface;

impl Surface for TraceSurface {
    fn apply(&self, patch: Patch) {
        match patch {
            Patch::ReplaceHtml { region, html } => {
                tracing::info!(?region, "render\n{html}");
            }
            other => tracing::info!(patch = ?other, "apply"),
        }
    }
}

fn exit_on_invalid(result: blog_ui::Result<()>) {
    if let Err(e) = result {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting blog-ui headless driver");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let (api, timings): (HttpBlogApi, Timings) = if let Some(path) = &cli.config {
        let config = TomlConfig::from_file(path)?;
        exit_on_invalid(config.validate());
        let timings = config.timings();
        (HttpBlogApi::new(&config)?, timings)
    } else {
        exit_on_invalid(cli.validate());
        (HttpBlogApi::new(&cli)?, cli.timings())
    };

    let setup = PageSetup {
        sections: 4,
        cards: cli
            .post
            .map(|id| {
                vec![Card {
                    post_id: id,
                    categories: String::new(),
                }]
            })
            .unwrap_or_default(),
        ..PageSetup::default()
    };

    let mut page = Page::new(Arc::new(api), Arc::new(TraceSurface), setup, timings);
    page.bootstrap();

    if let Some(query) = &cli.search {
        tracing::info!(%query, "🔍 running search");
        page.handle(Event::SearchInput(query.clone())).await;
        // Wait out the debounce window plus the round trip before moving on.
        tokio::time::sleep(timings.search_debounce + Duration::from_millis(500)).await;
    }

    if cli.post.is_some() {
        tracing::info!("📄 opening post");
        page.handle(Event::CardActivated(0)).await;
    }

    tracing::info!("✅ Done");
    Ok(())
}
