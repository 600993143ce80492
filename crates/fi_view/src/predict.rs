//! Classifier form: input text, model selector, pending flag and latest result.

use fi_core::{ClassificationResult, ModelKind, Result};
use fi_inference::Classifier;
use tracing::{debug, warn};

pub const SAMPLE_TEXTS: [&str; 5] = [
    "Apple announces new iPhone with revolutionary AI chip and advanced camera technology",
    "Stock market reaches all-time high as tech companies report strong earnings",
    "Lakers win championship in thrilling overtime game against rivals",
    "New Marvel movie breaks box office records in opening weekend",
    "Senate passes historic climate change legislation with bipartisan support",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
}

/// What to send once `submit` accepts the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub text: String,
    pub model: ModelKind,
}

#[derive(Debug, Clone, Default)]
pub struct PredictView {
    text: String,
    model: ModelKind,
    status: RequestStatus,
    last_result: Option<ClassificationResult>,
    last_error: Option<String>,
}

impl PredictView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Fill the input with one of `SAMPLE_TEXTS`.
    pub fn use_sample(&mut self, index: usize) -> bool {
        match SAMPLE_TEXTS.get(index) {
            Some(sample) => {
                self.set_text(sample);
                true
            }
            None => false,
        }
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn select_model(&mut self, model: ModelKind) {
        self.model = model;
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn last_result(&self) -> Option<&ClassificationResult> {
        self.last_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.text.trim().is_empty()
    }

    /// Idle -> Pending. Rejected (None) for blank text or while a request is outstanding.
    pub fn submit(&mut self) -> Option<PredictionRequest> {
        if !self.can_submit() {
            debug!("Rejected classification submit (status={:?})", self.status);
            return None;
        }
        self.status = RequestStatus::Pending;
        self.last_error = None;
        Some(PredictionRequest {
            text: self.text.clone(),
            model: self.model,
        })
    }

    /// Pending -> Idle. A failure keeps the previous result.
    pub fn settle(&mut self, outcome: Result<ClassificationResult>) {
        if !self.is_pending() {
            warn!("Ignoring classification outcome with no request outstanding");
            return;
        }
        self.status = RequestStatus::Idle;
        match outcome {
            Ok(result) => self.last_result = Some(result),
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    /// Submit, call the classifier, settle. Returns false when the submit was rejected.
    ///
    /// The view stays borrowed until the call settles, so a renderer never sees
    /// `Pending` through this method; drive `submit`/`settle` directly for that.
    /// Dropping the future mid-request puts the form back to `Idle`.
    pub async fn classify_with(&mut self, classifier: &dyn Classifier) -> bool {
        let Some(request) = self.submit() else {
            return false;
        };
        let mut guard = PendingGuard { view: self };
        let outcome = classifier.classify(&request.text, request.model).await;
        guard.view.settle(outcome);
        true
    }

    pub fn clear_result(&mut self) {
        self.last_result = None;
        self.last_error = None;
    }
}

/// Resets a request that was abandoned before `settle` ran.
struct PendingGuard<'a> {
    view: &'a mut PredictView,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.view.is_pending() {
            warn!("Classification request dropped before it settled");
            self.view.status = RequestStatus::Idle;
        }
    }
}
