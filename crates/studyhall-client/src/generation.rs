//! The quiz generation driver: one long request, a simulated progress feed,
//! and deterministic cancellation.
//!
//! [`QuizGenerator::start`] validates the request, then spawns a single task
//! that races the `POST /generate` call against an interval ticker. Each
//! tick publishes a fresh [`ProgressState`] snapshot on a watch channel;
//! the server's response terminates the run with exactly one final state
//! (100 on success, 0 on failure).
//!
//! Cancellation aborts the driver task, which stops the ticker and the
//! request together; dropping the [`GenerationTask`] does the same, so a
//! ticker can never outlive the run it reports on.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, instrument, warn};
use validator::Validate;

use studyhall_config::GenerationEstimates;
use studyhall_core::progress::{ProgressEstimator, ProgressState};
use studyhall_core::{ApiError, ErrorKind};
use studyhall_models::generation::{GenerateQuestionsRequest, GenerationResponse};

use crate::http::ApiClient;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub struct QuizGenerator {
    client: Arc<ApiClient>,
    estimates: GenerationEstimates,
}

impl QuizGenerator {
    pub fn new(client: Arc<ApiClient>, estimates: GenerationEstimates) -> Self {
        Self { client, estimates }
    }

    /// Starts a generation run. Validation happens here, before any task is
    /// spawned or any request sent; an invalid request never reaches the
    /// network.
    #[instrument(skip(self, request), fields(source = %request.source_id, count = request.question_count))]
    pub fn start(&self, request: GenerateQuestionsRequest) -> Result<GenerationTask, ApiError> {
        request.validate()?;

        let estimator = ProgressEstimator::new(
            request.question_count,
            self.estimates.setup(),
            self.estimates.per_question(),
        );
        let (tx, rx) = watch::channel(estimator.snapshot(Duration::ZERO));

        let client = self.client.clone();
        let handle = tokio::spawn(drive(client, request, estimator, tx));

        Ok(GenerationTask { rx, handle: Some(handle) })
    }
}

async fn drive(
    client: Arc<ApiClient>,
    request: GenerateQuestionsRequest,
    estimator: ProgressEstimator,
    tx: watch::Sender<ProgressState>,
) -> Result<GenerationResponse, ApiError> {
    let started = Instant::now();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let call = client.generate(&request);
    tokio::pin!(call);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let _ = tx.send(estimator.snapshot(started.elapsed()));
            }
            result = &mut call => {
                return match result {
                    Ok(response) => {
                        info!(count = response.questions.len(), "generation finished");
                        let _ = tx.send(estimator.complete());
                        Ok(response)
                    }
                    Err(err) => {
                        warn!(error = %err, "generation failed");
                        let _ = tx.send(estimator.fail());
                        Err(err)
                    }
                };
            }
        }
    }
}

/// Handle to an in-flight generation run.
///
/// Dropping the task cancels the run; the driver, its ticker, and the HTTP
/// call all stop together and the progress channel closes.
#[derive(Debug)]
pub struct GenerationTask {
    rx: watch::Receiver<ProgressState>,
    handle: Option<JoinHandle<Result<GenerationResponse, ApiError>>>,
}

impl GenerationTask {
    /// A receiver for progress snapshots. Closes when the run terminates or
    /// is cancelled.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ProgressState> {
        self.rx.clone()
    }

    /// The most recently published progress state.
    #[must_use]
    pub fn progress(&self) -> ProgressState {
        self.rx.borrow().clone()
    }

    /// Cancels the run immediately. No further progress states are
    /// published and no result is delivered.
    pub fn abort(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Waits for the run to finish and returns the server's response.
    pub async fn wait(mut self) -> Result<GenerationResponse, ApiError> {
        let Some(handle) = self.handle.take() else {
            return Err(ApiError::new(
                ErrorKind::Network,
                anyhow::anyhow!("generation task already consumed"),
            ));
        };

        match handle.await {
            Ok(result) => result,
            Err(err) => Err(ApiError::new(
                ErrorKind::Network,
                anyhow::anyhow!("generation task did not finish: {err}"),
            )),
        }
    }
}

impl Drop for GenerationTask {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
