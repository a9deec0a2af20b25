use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delays an action until input stops arriving for a quiet period. Each
/// `schedule` aborts the previously pending trigger; an action that has
/// already started running is not cancelled.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule<F>(&mut self, quiet: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            action.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
