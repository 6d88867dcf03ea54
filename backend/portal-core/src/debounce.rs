//! Last-value-wins debounce for search input.
//!
//! Every new value restarts the quiet period; only the value standing at the
//! end of it is emitted. Superseded values are dropped, not queued.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Sending side, held by whatever reads keystrokes or lines.
#[derive(Debug, Clone)]
pub struct DebounceHandle<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> DebounceHandle<T> {
    /// Push a new value. Returns `false` once the receiving side is gone.
    pub fn push(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    rx: mpsc::UnboundedReceiver<T>,
}

pub fn debounce<T>(delay: Duration) -> (DebounceHandle<T>, Debouncer<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DebounceHandle { tx }, Debouncer { delay, rx })
}

impl<T> Debouncer<T> {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the next settled value.
    ///
    /// When every handle is dropped the pending value is flushed right away;
    /// after that `None` is returned.
    pub async fn next(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;
        let mut superseded = 0usize;

        loop {
            match timeout(self.delay, self.rx.recv()).await {
                Ok(Some(value)) => {
                    latest = value;
                    superseded += 1;
                }
                Ok(None) | Err(_) => break,
            }
        }

        if superseded > 0 {
            debug!("Debounce settled after dropping {superseded} superseded value(s)");
        }
        Some(latest)
    }
}
