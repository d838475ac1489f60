//! Explicit context binding persisted state, the picker and its host
//!
//! Every host-side mutation of the persisted state goes through a
//! [`Session`] method, which delivers the resulting change notifications
//! to the picker before returning. A reset therefore always completes
//! before the next action can read the fields it wrote.

use tracing::{debug, warn};

use crate::change::PickDecision;
use crate::error::Result;
use crate::host::PickerHost;
use crate::reactor::Reactor;
use crate::state::{CenterStateStore, PersistedCenterState, StateChange};
use crate::types::{CenterRequest, CentersResponse, FilterSpec, GraphMode};

pub struct Session<H: PickerHost> {
    store: CenterStateStore,
    reactor: Reactor,
    host: H,
}

impl<H: PickerHost> Session<H> {
    /// Create a picker over `state`, as after a page reload
    pub fn open(state: PersistedCenterState, mut host: H) -> Result<Self> {
        let store = CenterStateStore::new(state);
        let mut reactor = Reactor::new();
        reactor.attach(store.state(), &mut host)?;
        Ok(Self {
            store,
            reactor,
            host,
        })
    }

    pub fn state(&self) -> &PersistedCenterState {
        self.store.state()
    }

    pub fn reactor(&self) -> &Reactor {
        &self.reactor
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_state(self) -> PersistedCenterState {
        self.store.into_state()
    }

    /// Recreate the picker, keeping its paging state, as when the view
    /// containing it is rebuilt
    pub fn recreate_picker(&mut self) -> Result<Option<PickDecision>> {
        let options = self.reactor.pick_options().clone();
        self.reactor = Reactor::with_pick_options(options);
        self.reactor.attach(self.store.state(), &mut self.host)
    }

    fn deliver(&mut self, changes: Vec<StateChange>) -> Result<Option<PickDecision>> {
        let mut triggered = None;
        for change in changes {
            debug!(?change, "delivering state change");
            if let Some(decision) = self
                .reactor
                .handle(change, self.store.state(), &mut self.host)?
            {
                triggered = Some(decision);
            }
        }
        Ok(triggered)
    }

    pub fn request_new_centers(&mut self) -> Result<PickDecision> {
        self.reactor
            .request_new_centers(self.store.state(), &mut self.host)
    }

    /// Apply the outcome of a dispatched request. Failures leave the state
    /// untouched and are returned for the caller to report.
    pub fn complete(
        &mut self,
        request: CenterRequest,
        result: Result<CentersResponse>,
    ) -> Result<Option<PickDecision>> {
        match result {
            Ok(response) => {
                let changes = self.store.apply_response(request, response);
                self.deliver(changes)
            }
            Err(e) => {
                warn!(count = request.count, offset = ?request.offset, "center request failed");
                Err(e)
            }
        }
    }

    /// Replace the persisted state, as when loading a saved visualization
    pub fn load(&mut self, state: PersistedCenterState) -> Result<Option<PickDecision>> {
        let changes = self.store.load(state);
        self.deliver(changes)
    }

    pub fn set_graph_mode(&mut self, mode: Option<GraphMode>) -> Result<Option<PickDecision>> {
        let changes = self.store.set_graph_mode(mode);
        self.deliver(changes)
    }

    pub fn set_centers(&mut self, centers: Option<Vec<String>>) -> Result<Option<PickDecision>> {
        let changes = self.store.set_centers(centers);
        self.deliver(changes)
    }

    /// Set the custom-filter switch. The editable rows are reseeded only
    /// when the switch actually flips.
    pub fn set_custom_filters(&mut self, custom: bool) -> Result<Option<PickDecision>> {
        let toggled = self.store.state().custom_visualization_filters != custom;
        let changes = self.store.set_custom_visualization_filters(custom);
        if toggled {
            self.reactor.toggle_custom_filters(custom, &self.host);
        }
        self.deliver(changes)
    }

    pub fn copy_restrictions_from_filters(&mut self) {
        self.reactor.copy_restrictions_from_filters(&self.host);
    }

    pub fn set_count(&mut self, count: impl Into<String>) {
        self.reactor.set_count(count);
    }

    pub fn add_filter(&mut self) {
        self.reactor.add_filter();
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_filter(&mut self, index: usize) {
        self.reactor.remove_filter(index);
    }

    pub fn set_filter(&mut self, index: usize, filter: FilterSpec) -> bool {
        self.reactor.set_filter(index, filter)
    }
}
