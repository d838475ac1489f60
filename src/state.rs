//! Persisted center state and its change notifications
//!
//! This is the layer that survives a reload and travels with a saved
//! visualization. Only the host mutates it; every mutator reports which of
//! the watched fields it touched so the caller can deliver the changes to
//! the picker synchronously.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{CenterRequest, CentersResponse, GraphMode};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCenterState {
    /// The last successful centers request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_centers_request: Option<CenterRequest>,

    /// Response to `last_centers_request`; kept in memory only
    #[serde(skip)]
    pub last_centers_response: Option<CentersResponse>,

    /// Centers shown in the view, from the last request or set by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centers: Option<Vec<String>>,

    #[serde(default)]
    pub custom_visualization_filters: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_mode: Option<GraphMode>,
}

impl PersistedCenterState {
    /// Read state from a JSON file, or return the empty state if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// A watched field of [`PersistedCenterState`] was replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    LastCentersRequest,
    GraphMode,
}

#[derive(Debug, Clone, Default)]
pub struct CenterStateStore {
    state: PersistedCenterState,
}

impl CenterStateStore {
    pub fn new(state: PersistedCenterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PersistedCenterState {
        &self.state
    }

    pub fn into_state(self) -> PersistedCenterState {
        self.state
    }

    /// Record a successful send. The request is always reported as
    /// replaced, even when equal to the previous one.
    pub fn apply_response(
        &mut self,
        request: CenterRequest,
        response: CentersResponse,
    ) -> Vec<StateChange> {
        debug!(centers = response.centers.len(), "storing center response");
        self.state.centers = Some(response.centers.clone());
        self.state.last_centers_response = Some(response);
        self.state.last_centers_request = Some(request);
        vec![StateChange::LastCentersRequest]
    }

    /// Replace the whole state, as when loading a saved visualization or
    /// rehydrating after a reload.
    pub fn load(&mut self, state: PersistedCenterState) -> Vec<StateChange> {
        let mut changes = Vec::new();
        if state.last_centers_request.is_some() || self.state.last_centers_request.is_some() {
            changes.push(StateChange::LastCentersRequest);
        }
        if state.graph_mode != self.state.graph_mode {
            changes.push(StateChange::GraphMode);
        }
        self.state = state;
        changes
    }

    pub fn set_graph_mode(&mut self, mode: Option<GraphMode>) -> Vec<StateChange> {
        if self.state.graph_mode == mode {
            return Vec::new();
        }
        self.state.graph_mode = mode;
        vec![StateChange::GraphMode]
    }

    /// User override of the centers; not a watched field
    pub fn set_centers(&mut self, centers: Option<Vec<String>>) -> Vec<StateChange> {
        self.state.centers = centers;
        Vec::new()
    }

    pub fn set_custom_visualization_filters(&mut self, custom: bool) -> Vec<StateChange> {
        self.state.custom_visualization_filters = custom;
        Vec::new()
    }
}
