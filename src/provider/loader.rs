//! Background puzzle fetching
//!
//! Each request runs on the rayon pool and answers over a channel, tagged with
//! the ticket that asked for it. The session decides whether the answer is
//! still wanted.

use super::{ContentFetchError, PuzzleProvider};
use crate::core::PuzzleContent;
use crate::session::LoadTicket;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

/// A finished fetch
#[derive(Debug)]
pub struct LoadResponse {
    pub ticket: LoadTicket,
    pub result: Result<PuzzleContent, ContentFetchError>,
}

pub struct PuzzleLoader {
    provider: Arc<dyn PuzzleProvider>,
    tx: Sender<LoadResponse>,
    rx: Receiver<LoadResponse>,
}

impl PuzzleLoader {
    #[must_use]
    pub fn new(provider: Arc<dyn PuzzleProvider>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { provider, tx, rx }
    }

    #[must_use]
    pub fn provider(&self) -> &dyn PuzzleProvider {
        self.provider.as_ref()
    }

    /// Start fetching a puzzle for `ticket`
    pub fn request(&self, ticket: LoadTicket) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        log::info!("fetching puzzle from {}", provider.describe());

        rayon::spawn(move || {
            let result = provider.fetch();
            // The receiver only goes away when the loader is dropped
            let _ = tx.send(LoadResponse { ticket, result });
        });
    }

    /// A finished fetch, if any is waiting
    #[must_use]
    pub fn try_next(&self) -> Option<LoadResponse> {
        match self.rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the next fetch finishes, or `None` once `timeout` passes
    #[must_use]
    pub fn wait(&self, timeout: Duration) -> Option<LoadResponse> {
        self.rx.recv_timeout(timeout).ok()
    }
}
