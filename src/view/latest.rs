use std::future::Future;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Counter deciding which request is allowed to update state.
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Makes every ticket issued so far stale.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current == ticket.0
    }
}

/// Runs at most one fetch at a time; starting a new one aborts the old
/// task and stale completions still sitting in the channel are dropped.
pub struct Latest<T> {
    generation: Generation,
    pending: Option<(Ticket, JoinHandle<()>)>,
    sender: UnboundedSender<(Ticket, T)>,
    receiver: UnboundedReceiver<(Ticket, T)>,
}

impl<T: Send + 'static> Default for Latest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Latest<T> {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            generation: Generation::default(),
            pending: None,
            sender,
            receiver,
        }
    }

    /// Supersedes whatever is in flight with `fetch`.
    pub fn spawn<F>(&mut self, fetch: F) -> Ticket
    where
        F: Future<Output = T> + Send + 'static,
    {
        self.cancel();
        let ticket = self.generation.issue();
        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            let value = fetch.await;
            // The receiver lives as long as `self`.
            let _ = sender.send((ticket, value));
        });
        self.pending = Some((ticket, task));
        ticket
    }

    pub fn cancel(&mut self) {
        if let Some((ticket, task)) = self.pending.take() {
            debug!(?ticket, "superseding in-flight request");
            task.abort();
        }
        self.generation.invalidate();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.is_current(ticket)
    }

    /// Waits for the in-flight request. Returns `None` when nothing is in
    /// flight or the task died without reporting.
    pub async fn settle(&mut self) -> Option<T> {
        loop {
            let (_, task) = self.pending.as_mut()?;

            tokio::select! {
                biased;
                Some((ticket, value)) = self.receiver.recv() => {
                    if self.generation.is_current(ticket) {
                        self.pending = None;
                        return Some(value);
                    }
                    debug!(?ticket, "dropping stale response");
                }
                joined = task => {
                    // Completed tasks send before finishing.
                    while let Ok((ticket, value)) = self.receiver.try_recv() {
                        if self.generation.is_current(ticket) {
                            self.pending = None;
                            return Some(value);
                        }
                    }
                    if let Err(error) = joined {
                        warn!(%error, "fetch task failed");
                    }
                    self.pending = None;
                    return None;
                }
            }
        }
    }
}
