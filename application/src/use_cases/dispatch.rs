//! Request dispatcher
//!
//! Builds tokenize requests and runs each one on its own tokio task.
//! Finished requests are posted as [`Completion`]s on an unbounded channel
//! that the UI loop drains; the dispatcher itself never touches the display.
//!
//! ```text
//! dispatch(query, mode) ──> seq = tracker.issue()
//!                           tokio::spawn ── gateway.tokenize() ──> completion_tx.send((seq, result))
//! UI loop ── completion_rx.recv() ──> resolve(completion) ──> Render | Failed | Stale
//! ```

use crate::config::DispatchParams;
use crate::ports::tokenizer_gateway::{GatewayError, TokenizeRequest, TokenizerGateway};
use std::sync::Arc;
use tokenscope_domain::{
    AnalysisMode, Completion, CompletionOutcome, DispatchSeq, ResultSet, SequenceTracker,
    util::truncate_chars,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Receiving end of the completion channel
pub type CompletionReceiver = mpsc::UnboundedReceiver<Completion<GatewayError>>;

/// Issues tokenize requests and tracks their sequence numbers
pub struct RequestDispatcher<G: TokenizerGateway + 'static> {
    gateway: Arc<G>,
    params: DispatchParams,
    sequences: SequenceTracker,
    completion_tx: mpsc::UnboundedSender<Completion<GatewayError>>,
    cancellation: CancellationToken,
}

impl<G: TokenizerGateway + 'static> RequestDispatcher<G> {
    /// Create a dispatcher and the receiver its completions arrive on
    pub fn new(gateway: Arc<G>, params: DispatchParams) -> (Self, CompletionReceiver) {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            gateway,
            params,
            sequences: SequenceTracker::new(),
            completion_tx,
            cancellation: CancellationToken::new(),
        };
        (dispatcher, completion_rx)
    }

    /// Use an externally owned cancellation token (e.g. the app's shutdown token)
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn params(&self) -> &DispatchParams {
        &self.params
    }

    /// Build the request for `query`, trimming overlong input
    pub fn prepare_request(&self, query: &str, mode: AnalysisMode) -> TokenizeRequest {
        let max = self.params.max_input_chars;
        let text = truncate_chars(query, max);
        if text.len() < query.len() {
            warn!(
                "Input length {} exceeds max length. Trimming to {} characters",
                query.chars().count(),
                max
            );
        }
        TokenizeRequest::new(text, mode)
    }

    /// Fire a request in the background and return its sequence number.
    ///
    /// The returned sequence becomes the latest one; completions of earlier
    /// sequences will resolve as stale. Must be called inside a tokio runtime.
    pub fn dispatch(&mut self, query: &str, mode: AnalysisMode) -> DispatchSeq {
        let request = self.prepare_request(query, mode);
        let seq = self.sequences.issue();
        info!("Dispatch {} (mode: {}, {} chars)", seq, mode, request.text.chars().count());

        let gateway = Arc::clone(&self.gateway);
        let completion_tx = self.completion_tx.clone();
        let cancellation = self.cancellation.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancellation.cancelled() => {
                    debug!("Dispatch {} cancelled before completion", seq);
                }
                result = gateway.tokenize(&request) => {
                    // Receiver gone means the UI loop has exited
                    let _ = completion_tx.send(Completion::new(seq, result));
                }
            }
        });

        seq
    }

    /// Run a single request to completion without sequencing.
    pub async fn fetch(&self, query: &str, mode: AnalysisMode) -> Result<ResultSet, GatewayError> {
        let request = self.prepare_request(query, mode);
        self.gateway.tokenize(&request).await
    }

    /// Resolve a completion against the latest issued sequence
    pub fn resolve(
        &mut self,
        completion: Completion<GatewayError>,
    ) -> CompletionOutcome<GatewayError> {
        self.sequences.resolve(completion)
    }

    /// Make every in-flight completion stale without sending a request
    pub fn invalidate(&mut self) -> DispatchSeq {
        let seq = self.sequences.invalidate();
        debug!("Invalidated in-flight requests at {}", seq);
        seq
    }

    pub fn latest(&self) -> Option<DispatchSeq> {
        self.sequences.latest()
    }

    /// True while the latest dispatch is still in flight
    pub fn is_pending(&self) -> bool {
        self.sequences.is_pending()
    }

    /// Cancel every in-flight request
    pub fn shutdown(&self) {
        self.cancellation.cancel();
    }
}
