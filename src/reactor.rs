//! The picker as seen by the UI
//!
//! [`Reactor`] owns the UI-local fields and the request coordinator, and
//! reacts to the two watched fields of the persisted state:
//!
//! - `lastCentersRequest` replaced: the fields are rebuilt from it. This is
//!   the only place the fields are synchronized from persisted state, so a
//!   user pick, a visualization load and a reload all converge on the same
//!   display.
//! - `graphMode` replaced: entering the sampled view without centers
//!   triggers one automatic pick.

use tracing::debug;

use crate::change::{PickDecision, PickOptions};
use crate::coordinator::RequestCoordinator;
use crate::error::Result;
use crate::host::PickerHost;
use crate::params::PickerFields;
use crate::state::{PersistedCenterState, StateChange};
use crate::types::{FilterSpec, GraphMode};

#[derive(Debug, Clone, Default)]
pub struct Reactor {
    fields: PickerFields,
    coordinator: RequestCoordinator,
}

impl Reactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recreate a picker that keeps the paging state of a previous one
    pub fn with_pick_options(options: PickOptions) -> Self {
        Self {
            fields: PickerFields::default(),
            coordinator: RequestCoordinator::with_options(options),
        }
    }

    pub fn fields(&self) -> &PickerFields {
        &self.fields
    }

    pub fn coordinator(&self) -> &RequestCoordinator {
        &self.coordinator
    }

    pub fn pick_options(&self) -> &PickOptions {
        self.coordinator.options()
    }

    /// Initial delivery of both subscriptions for a freshly created picker
    pub fn attach<H: PickerHost + ?Sized>(
        &mut self,
        state: &PersistedCenterState,
        host: &mut H,
    ) -> Result<Option<PickDecision>> {
        self.reset(state);
        self.on_graph_mode(state, host)
    }

    /// Deliver one change notification. Returns the decision of any request
    /// the change triggered.
    pub fn handle<H: PickerHost + ?Sized>(
        &mut self,
        change: StateChange,
        state: &PersistedCenterState,
        host: &mut H,
    ) -> Result<Option<PickDecision>> {
        match change {
            StateChange::LastCentersRequest => {
                self.reset(state);
                Ok(None)
            }
            StateChange::GraphMode => self.on_graph_mode(state, host),
        }
    }

    /// Rebuild the fields from the last successful request
    pub fn reset(&mut self, state: &PersistedCenterState) {
        debug!(
            has_request = state.last_centers_request.is_some(),
            "resetting picker fields"
        );
        self.fields.reset_from(state.last_centers_request.as_ref());
    }

    fn on_graph_mode<H: PickerHost + ?Sized>(
        &mut self,
        state: &PersistedCenterState,
        host: &mut H,
    ) -> Result<Option<PickDecision>> {
        if state.graph_mode == Some(GraphMode::Sampled) && state.centers.is_none() {
            debug!("sampled view has no centers, picking automatically");
            return self.request_new_centers(state, host).map(Some);
        }
        Ok(None)
    }

    /// The Pick/Next button
    pub fn request_new_centers<H: PickerHost + ?Sized>(
        &mut self,
        state: &PersistedCenterState,
        host: &mut H,
    ) -> Result<PickDecision> {
        self.coordinator
            .request_new_centers(&self.fields, state.custom_visualization_filters, host)
    }

    pub fn set_count(&mut self, count: impl Into<String>) {
        self.fields.count = count.into();
    }

    pub fn add_filter(&mut self) {
        self.fields.filters.add();
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_filter(&mut self, index: usize) {
        self.fields.filters.remove(index);
    }

    /// Edit a row in place. Returns false if there is no row at `index`.
    pub fn set_filter(&mut self, index: usize, filter: FilterSpec) -> bool {
        match self.fields.filters.get_mut(index) {
            Some(row) => {
                *row = filter;
                true
            }
            None => false,
        }
    }

    /// Seed the editable rows with the restrictions currently in effect
    pub fn copy_restrictions_from_filters<H: PickerHost + ?Sized>(&mut self, host: &H) {
        self.fields
            .filters
            .replace_all(host.non_empty_vertex_filter_names());
    }

    /// Follow the custom-filter switch. Turning it on starts from the
    /// current restrictions; turning it off discards the edited rows.
    pub fn toggle_custom_filters<H: PickerHost + ?Sized>(&mut self, custom: bool, host: &H) {
        if custom {
            self.copy_restrictions_from_filters(host);
        } else {
            self.fields.filters.clear();
        }
    }
}
