use crate::domain::ports::Surface;
use crate::domain::view::{Patch, ToastKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Transient toast messages. Each toast is shown immediately and
/// dismissed after the TTL; dismissal is fire-and-forget on the runtime.
pub struct Notifier {
    surface: Arc<dyn Surface>,
    ttl: Duration,
    seq: AtomicU64,
}

impl Notifier {
    pub fn new(surface: Arc<dyn Surface>, ttl: Duration) -> Self {
        Self {
            surface,
            ttl,
            seq: AtomicU64::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&self, message: String, kind: ToastKind) {
        let id = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.surface.apply(Patch::Toast { id, message, kind });

        let surface = Arc::clone(&self.surface);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            surface.apply(Patch::ToastDismiss { id });
        });
    }
}
