//! Center selection for sampled graph visualizations.
//!
//! The picker decides what to send when the user asks for new centers and
//! keeps its UI fields consistent with the persisted state, whichever way
//! that state was last replaced: a user pick, a loaded visualization or a
//! reload.

#[macro_use]
mod macros;

pub mod change;
pub mod commands;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod filters;
pub mod host;
pub mod params;
pub mod reactor;
pub mod remote;
pub mod session;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_guards;
#[cfg(test)]
mod testing;

pub use change::{PickDecision, PickOptions};
pub use coordinator::{PickPhase, RequestCoordinator};
pub use error::{PickerError, Result};
pub use filters::FilterList;
pub use host::PickerHost;
pub use params::PickerFields;
pub use reactor::Reactor;
pub use session::Session;
pub use state::{CenterStateStore, PersistedCenterState, StateChange};
pub use types::{CenterRequest, CentersResponse, FilterSpec, GraphMode, ResolvedParameters};
