#![allow(dead_code)]

use blog_ui::domain::ports::Surface;
use blog_ui::domain::view::{Patch, Region, ToastKind};
use std::sync::Mutex;

/// Records every patch the engine emits so scenarios can assert on the
/// exact render stream.
#[derive(Default)]
pub struct RecordingSurface {
    patches: Mutex<Vec<Patch>>,
}

impl Surface for RecordingSurface {
    fn apply(&self, patch: Patch) {
        self.patches.lock().unwrap().push(patch);
    }
}

impl RecordingSurface {
    pub fn patches(&self) -> Vec<Patch> {
        self.patches.lock().unwrap().clone()
    }

    /// Every html rendered into a region, in order.
    pub fn html_history(&self, region: Region) -> Vec<String> {
        self.patches
            .lock()
            .unwrap()
            .iter()
            .filter_map(|p| match p {
                Patch::ReplaceHtml { region: r, html } if *r == region => Some(html.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_html(&self, region: Region) -> Option<String> {
        self.html_history(region).pop()
    }

    pub fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.patches
            .lock()
            .unwrap()
            .iter()
            .filter_map(|p| match p {
                Patch::Toast { message, kind, .. } => Some((message.clone(), *kind)),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, patch: &Patch) -> bool {
        self.patches.lock().unwrap().contains(patch)
    }
}
