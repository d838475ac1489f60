//! Fire-and-forget dispatch of center requests
//!
//! Each request runs on its own tokio task. Completions are queued on a
//! bounded channel and applied by whoever owns the persisted state, on its
//! own thread, in arrival order.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::host::PickerHost;
use crate::types::{CenterRequest, CentersResponse, FilterSpec};

use super::CenterBackend;

const CHANNEL_CAPACITY: usize = 100;

/// A finished request and what the backend said about it
#[derive(Debug)]
pub struct CenterOutcome {
    pub request: CenterRequest,
    pub result: Result<CentersResponse>,
}

#[derive(Clone)]
pub struct CenterDispatcher {
    backend: Arc<dyn CenterBackend>,
    tx: mpsc::Sender<CenterOutcome>,
}

impl CenterDispatcher {
    /// Create a dispatcher and the receiving end of its completion queue
    pub fn new(backend: Arc<dyn CenterBackend>) -> (Self, mpsc::Receiver<CenterOutcome>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (Self { backend, tx }, rx)
    }

    /// Start `request` and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, request: CenterRequest) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = backend.fetch_centers(&request).await;
            match &result {
                Ok(response) => info!(
                    centers = response.centers.len(),
                    offset = ?request.offset,
                    "center request completed"
                ),
                Err(e) => warn!("center request failed: {e}"),
            }
            if tx.send(CenterOutcome { request, result }).await.is_err() {
                debug!("completion queue closed, dropping center outcome");
            }
        });
    }
}

/// Host for a standalone picker: requests go to the dispatcher and the
/// derived restrictions are whatever the view currently applies.
pub struct DispatchingHost {
    dispatcher: CenterDispatcher,
    pub restrictions: Vec<FilterSpec>,
}

impl DispatchingHost {
    pub fn new(dispatcher: CenterDispatcher) -> Self {
        Self {
            dispatcher,
            restrictions: Vec::new(),
        }
    }
}

impl PickerHost for DispatchingHost {
    fn send_center_request(&mut self, params: CenterRequest) {
        self.dispatcher.dispatch(params);
    }

    fn non_empty_vertex_filter_names(&self) -> Vec<FilterSpec> {
        self.restrictions
            .iter()
            .filter(|f| f.is_complete() && !f.value_spec.is_empty())
            .cloned()
            .collect()
    }
}
