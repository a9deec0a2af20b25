use crate::domain::view::{ModalKind, Patch};

/// Backdrop dialog controller. Opening any modal locks page scroll;
/// closing always closes every open modal and restores scroll, which is
/// how the page's close buttons and Escape both behave.
#[derive(Default)]
pub struct ModalController {
    open: Vec<ModalKind>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, modal: ModalKind) -> bool {
        self.open.contains(&modal)
    }

    pub fn open(&mut self, modal: ModalKind) -> Vec<Patch> {
        if !self.open.contains(&modal) {
            self.open.push(modal);
        }
        vec![
            Patch::ModalVisible {
                modal,
                visible: true,
            },
            Patch::ScrollLock(true),
        ]
    }

    pub fn close_all(&mut self) -> Vec<Patch> {
        let mut patches: Vec<Patch> = self
            .open
            .drain(..)
            .map(|modal| Patch::ModalVisible {
                modal,
                visible: false,
            })
            .collect();
        // Scroll is restored even when nothing was open, matching the
        // unconditional reset on the page.
        patches.push(Patch::ScrollLock(false));
        patches
    }
}
