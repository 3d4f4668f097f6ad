//! Settle timer for free-text search input.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::debug;

use careerhub_core::AppError;

enum Signal<T> {
    Push(T),
    Cancel,
}

/// Emits the last pushed value once no new value has arrived for `delay`.
///
/// There is at most one pending timer: every push restarts it and replaces
/// the pending value. Rapid pushes therefore produce a single emission
/// carrying only the final value.
#[derive(Debug)]
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<Signal<T>>,
    output: mpsc::UnboundedReceiver<T>,
    task: JoinHandle<()>,
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push(_) => f.write_str("Push"),
            Self::Cancel => f.write_str("Cancel"),
        }
    }
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the timer task. Must be called inside a Tokio runtime.
    pub fn new(delay: Duration) -> Self {
        let (input, mut signals) = mpsc::unbounded_channel::<Signal<T>>();
        let (emit, output) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            let timer = sleep(delay);
            tokio::pin!(timer);

            loop {
                tokio::select! {
                    signal = signals.recv() => match signal {
                        Some(Signal::Push(value)) => {
                            pending = Some(value);
                            timer.as_mut().reset(Instant::now() + delay);
                        }
                        Some(Signal::Cancel) => pending = None,
                        None => break,
                    },
                    () = &mut timer, if pending.is_some() => {
                        if let Some(value) = pending.take() {
                            debug!(delay_ms = delay.as_millis() as u64, "Debounced value settled");
                            if emit.send(value).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self {
            input,
            output,
            task,
        }
    }

    /// Debouncer with a delay in milliseconds.
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Record a new value and restart the timer.
    pub fn push(&self, value: T) -> Result<(), AppError> {
        self.input
            .send(Signal::Push(value))
            .map_err(|_| AppError::internal("Debouncer task has stopped"))
    }

    /// Drop the pending value, if any, without emitting it.
    pub fn cancel(&self) -> Result<(), AppError> {
        self.input
            .send(Signal::Cancel)
            .map_err(|_| AppError::internal("Debouncer task has stopped"))
    }

    /// Wait for the next settled value.
    pub async fn next(&mut self) -> Option<T> {
        self.output.recv().await
    }

    /// A settled value, if one is ready.
    pub fn try_next(&mut self) -> Option<T> {
        self.output.try_recv().ok()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
