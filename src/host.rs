//! Capabilities the picker needs from the application hosting it

use crate::types::{CenterRequest, FilterSpec, ResolvedParameters};

/// The picker's view of its host.
///
/// The picker never talks to the backend or reads project restrictions on
/// its own; everything outside the reconciliation logic goes through here.
pub trait PickerHost {
    /// Issue the backend request. Must return without waiting for the
    /// response. On success the host is expected to store the request and
    /// its centers in the persisted state.
    fn send_center_request(&mut self, params: CenterRequest);

    /// Normalize parameters for change detection.
    fn resolve_center_request_params(&self, params: &CenterRequest) -> ResolvedParameters {
        ResolvedParameters::of(params)
    }

    /// Restrictions currently applied to the view, used when custom
    /// filtering is off.
    fn non_empty_vertex_filter_names(&self) -> Vec<FilterSpec>;
}
