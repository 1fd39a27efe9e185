use std::sync::Arc;
use std::thread::{self, JoinHandle};

use async_channel::{Receiver, TryRecvError};

use crate::algorithm::board::Board;
use crate::algorithm::generator::{BoardGenerator, GeneratorConfig};
use crate::io::error::{GenerationError, Result};
use crate::lexicon::VocabularyIndex;

/// Board generation running on a worker thread
///
/// Generation can take a while when the retry ladders escalate, so callers
/// that own an interactive loop poll [`GenerationTask::try_outcome`] and show
/// a busy state instead of blocking.
pub struct GenerationTask {
    receiver: Receiver<Result<Board>>,
    handle: Option<JoinHandle<()>>,
}

/// Start a generation on a new worker thread
///
/// The worker sends exactly one outcome and exits.
pub fn spawn_generation(
    index: Arc<VocabularyIndex>,
    config: GeneratorConfig,
    seed: u64,
) -> GenerationTask {
    let (sender, receiver) = async_channel::bounded::<Result<Board>>(1);

    let handle = thread::spawn(move || {
        let outcome = BoardGenerator::new(&index, config, seed).generate();
        // The receiver may already be gone if the caller gave up waiting
        let _ = sender.send_blocking(outcome);
    });

    GenerationTask {
        receiver,
        handle: Some(handle),
    }
}

impl GenerationTask {
    /// Non-blocking check for the outcome
    ///
    /// Returns `None` while the worker is still running.
    pub fn try_outcome(&mut self) -> Option<Result<Board>> {
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.join();
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.join();
                Some(Err(GenerationError::WorkerDisconnected))
            }
        }
    }

    /// Test if the worker has finished
    pub fn is_finished(&self) -> bool {
        !self.receiver.is_empty()
            || self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Block until the worker reports
    ///
    /// # Errors
    ///
    /// Returns the generation error, or `WorkerDisconnected` if the worker
    /// died without reporting.
    pub fn wait(mut self) -> Result<Board> {
        let outcome = self
            .receiver
            .recv_blocking()
            .unwrap_or(Err(GenerationError::WorkerDisconnected));
        self.join();
        outcome
    }

    /// Await the outcome from an async context
    ///
    /// # Errors
    ///
    /// Same as [`GenerationTask::wait`].
    pub async fn outcome(self) -> Result<Board> {
        self.receiver
            .recv()
            .await
            .unwrap_or(Err(GenerationError::WorkerDisconnected))
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("Generation worker panicked");
        }
    }
}
