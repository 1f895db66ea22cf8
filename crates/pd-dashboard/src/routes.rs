use crate::GateState;

use pd_config::RoutesConfig;

/// What to draw for a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Blocking placeholder while the session is unknown
    Placeholder,
    /// Public view for anonymous visitors
    Landing,
    /// Protected profile directory
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution {
    Render(View),
    Redirect(String),
}

/// The two addressable views and how session state gates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    public_path: String,
    protected_path: String,
}

impl Routes {
    pub fn new(public_path: impl Into<String>, protected_path: impl Into<String>) -> Self {
        Self {
            public_path: public_path.into(),
            protected_path: protected_path.into(),
        }
    }

    pub fn from_config(config: &RoutesConfig) -> Self {
        Self::new(&config.public_path, &config.protected_path)
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    pub fn protected_path(&self) -> &str {
        &self.protected_path
    }

    /// Where a session change sends the user
    pub fn home_for(&self, signed_in: bool) -> &str {
        if signed_in {
            &self.protected_path
        } else {
            &self.public_path
        }
    }

    /// Decide what `path` shows in `state`.
    ///
    /// Nothing but the placeholder is shown while initializing. After that
    /// each view is only reachable in its own state, and every other path
    /// redirects to the view matching the state.
    pub fn resolve(&self, state: GateState, path: &str) -> RouteResolution {
        match state {
            GateState::Initializing => RouteResolution::Render(View::Placeholder),
            GateState::Anonymous if path == self.public_path => {
                RouteResolution::Render(View::Landing)
            }
            GateState::Authenticated if path == self.protected_path => {
                RouteResolution::Render(View::Directory)
            }
            GateState::Anonymous => RouteResolution::Redirect(self.public_path.clone()),
            GateState::Authenticated => RouteResolution::Redirect(self.protected_path.clone()),
        }
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::from_config(&RoutesConfig::default())
    }
}
