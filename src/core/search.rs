use crate::core::render;
use crate::domain::model::Timings;
use crate::domain::ports::{BlogApi, Surface};
use crate::domain::view::{Patch, Region};
use crate::utils::debounce::Debouncer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Search-as-you-type. Input is debounced; queries shorter than two
/// characters clear the panel without touching the server. Responses
/// carry a generation number so a slow, stale response can never
/// overwrite a newer rendered one.
///
/// Cancelling the debounce aborts the pending trigger only; once a
/// request is on the wire it runs to completion and the generation guard
/// decides whether its result still matters.
pub struct SearchController<A: BlogApi + 'static> {
    api: Arc<A>,
    surface: Arc<dyn Surface>,
    debouncer: Debouncer,
    quiet: Duration,
    generation: Arc<AtomicU64>,
    rendered: Arc<AtomicU64>,
}

impl<A: BlogApi + 'static> SearchController<A> {
    pub fn new(api: Arc<A>, surface: Arc<dyn Surface>, timings: &Timings) -> Self {
        Self {
            api,
            surface,
            debouncer: Debouncer::new(),
            quiet: timings.search_debounce,
            generation: Arc::new(AtomicU64::new(0)),
            rendered: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn input(&mut self, raw: &str) {
        let query = raw.trim().to_string();

        if query.chars().count() < 2 {
            self.debouncer.cancel();
            // Invalidate anything still in flight before clearing.
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            self.rendered.fetch_max(generation, Ordering::SeqCst);
            self.surface.apply(Patch::ReplaceHtml {
                region: Region::SearchResults,
                html: String::new(),
            });
            self.surface.apply(Patch::SearchPanel { visible: false });
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let api = Arc::clone(&self.api);
        let surface = Arc::clone(&self.surface);
        let rendered = Arc::clone(&self.rendered);

        self.debouncer.schedule(self.quiet, async move {
            // Detached so a later keystroke cancels only the trigger, not
            // a request already on the wire.
            tokio::spawn(async move {
                match api.search(&query).await {
                    Ok(data) => {
                        let previous = rendered.fetch_max(generation, Ordering::SeqCst);
                        if previous > generation {
                            tracing::debug!(%query, "dropping stale search response");
                            return;
                        }
                        let html = if data.results.is_empty() {
                            render::no_results()
                        } else {
                            render::search_results(&data.results)
                        };
                        surface.apply(Patch::ReplaceHtml {
                            region: Region::SearchResults,
                            html,
                        });
                        surface.apply(Patch::SearchPanel { visible: true });
                    }
                    // Transport failures keep whatever was on screen.
                    Err(e) => tracing::warn!(error = %e, %query, "search request failed"),
                }
            });
        });
    }

    /// Outside click: hide the panel, keep its contents.
    pub fn dismiss(&self) {
        self.surface.apply(Patch::SearchPanel { visible: false });
    }
}
