use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use serde::Deserialize;
use threadpool::ThreadPool;

use crate::errors::error_types::ErrorTypes;

use super::variant::VariantInput;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URL of the classifier service, overridable with `CLASSIFIER_URL`.
pub fn classifier_url() -> String {
    std::env::var("CLASSIFIER_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

#[derive(Debug, Deserialize)]
struct PredictReply {
    predicted_phenotype: Option<String>,
    error: Option<String>,
}

/// Sends the variant to the classifier and returns the predicted phenotype.
///
/// Blocks on the HTTP round trip; call it from a worker thread (see
/// `spawn_prediction`).
pub fn predict(base_url: &str, variant: &VariantInput) -> Result<String, ErrorTypes> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ErrorTypes::new(301, format!("Error building HTTP client: {}", e)))?;

    let response = client
        .post(format!("{}/predict", base_url))
        .json(variant)
        .send()
        .map_err(|e| ErrorTypes::new(301, format!("Error reaching the classifier: {}", e)))?;

    let reply: PredictReply = response
        .json()
        .map_err(|e| ErrorTypes::new(302, format!("Error decoding classifier reply: {}", e)))?;

    if let Some(error) = reply.error {
        return Err(ErrorTypes::new(303, error));
    }
    reply.predicted_phenotype.ok_or_else(|| {
        ErrorTypes::new(
            304,
            "Classifier reply had neither a phenotype nor an error".to_string(),
        )
    })
}

/// An in-flight prediction request. Poll `try_result` once per frame.
pub struct PredictionRequest {
    rx: Receiver<Result<String, ErrorTypes>>,
}

impl PredictionRequest {
    /// Returns the outcome once the worker has finished, `None` while the
    /// request is still in flight.
    pub fn try_result(&self) -> Option<Result<String, ErrorTypes>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ErrorTypes::new(
                305,
                "Prediction worker stopped before replying".to_string(),
            ))),
        }
    }
}

/// Runs `predict` on the worker pool and hands back a pollable request.
pub fn spawn_prediction(
    pool: &ThreadPool,
    base_url: String,
    variant: VariantInput,
) -> PredictionRequest {
    let (tx, rx) = mpsc::channel();
    pool.execute(move || {
        let _ = tx.send(predict(&base_url, &variant));
    });
    PredictionRequest { rx }
}
