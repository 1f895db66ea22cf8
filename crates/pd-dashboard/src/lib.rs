//! pd-dashboard
//!
//! Session gating, the profile collection, search and profile creation,
//! wired together by [`Dashboard`].

mod dashboard;
mod error;
mod profile_creator;
mod profile_store;
mod routes;
mod search_index;
mod session_context;
mod session_gate;

#[cfg(test)]
mod tests;

pub use dashboard::{Dashboard, DirectoryScreen, Screen, UserBadge};
pub use error::{CreatorError, DashboardError, Result as DashboardResult};
pub use profile_creator::{CreatorPhase, CreatorSnapshot, ProfileCreator, SubmitOutcome};
pub use profile_store::{ProfileStore, StoreState, StoreStatus};
pub use routes::{RouteResolution, Routes, View};
pub use search_index::{FilteredView, SearchIndex};
pub use session_context::SessionContext;
pub use session_gate::{GateSnapshot, GateState, SessionGate};

/// Shown when a backend call fails in a way the user cannot act on
const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";
