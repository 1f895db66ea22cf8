use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors raised by the dashboard shell
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Not signed in {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Profile collection is not mounted {location}")]
    StoreNotMounted { location: ErrorLocation },

    #[error("Cannot add a profile while a search is active {location}")]
    SearchActive { location: ErrorLocation },

    #[error("Profiles are not loaded ({status}) {location}")]
    StoreNotReady {
        status: String,
        location: ErrorLocation,
    },
}

impl DashboardError {
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store_not_mounted() -> Self {
        Self::StoreNotMounted {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn search_active() -> Self {
        Self::SearchActive {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store_not_ready(status: impl Into<String>) -> Self {
        Self::StoreNotReady {
            status: status.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Rejected interactions with the profile creator
#[derive(Error, Debug)]
pub enum CreatorError {
    #[error("A submission is in progress {location}")]
    Busy { location: ErrorLocation },

    #[error("The form is closed {location}")]
    Closed { location: ErrorLocation },
}

impl CreatorError {
    #[track_caller]
    pub fn busy() -> Self {
        Self::Busy {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn closed() -> Self {
        Self::Closed {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
