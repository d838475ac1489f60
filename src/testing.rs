//! Test doubles shared by unit tests

use crate::host::PickerHost;
use crate::types::{CenterRequest, FilterSpec, ResolvedParameters};

/// Host that records every dispatched request instead of sending it
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub sent: Vec<CenterRequest>,
    pub restrictions: Vec<FilterSpec>,
    /// Resolve every count to the same value
    pub ignore_count_in_resolution: bool,
}

impl RecordingHost {
    pub fn with_restrictions(restrictions: Vec<FilterSpec>) -> Self {
        Self {
            restrictions,
            ..Default::default()
        }
    }
}

impl PickerHost for RecordingHost {
    fn send_center_request(&mut self, params: CenterRequest) {
        self.sent.push(params);
    }

    fn resolve_center_request_params(&self, params: &CenterRequest) -> ResolvedParameters {
        if self.ignore_count_in_resolution {
            ResolvedParameters::of(&CenterRequest {
                count: 0,
                ..params.clone()
            })
        } else {
            ResolvedParameters::of(params)
        }
    }

    fn non_empty_vertex_filter_names(&self) -> Vec<FilterSpec> {
        self.restrictions.clone()
    }
}
