use crate::{CreatorError, ProfileStore, UNEXPECTED_ERROR_MESSAGE};

use pd_core::{ColorTag, FieldErrors, Profile, ProfileField, ProfileForm};
use pd_gateway::{GatewayResult, ProfileStoreBackend};

use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::watch;
use tokio::task::JoinError;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorPhase {
    Idle,
    Submitting,
    Closed,
}

/// Observable state of the creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorSnapshot {
    pub phase: CreatorPhase,
    pub field_errors: FieldErrors,
    /// Inline message from the last failed submission
    pub submit_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FieldErrors),
    /// The create request failed; the form stays open with its values
    Failed(String),
    /// Stored and appended; the form is closed
    Created(Profile),
}

/// Form for adding a profile on behalf of the signed-in user.
///
/// At most one create request is outstanding. While it is, edits and new
/// submissions are rejected with [`CreatorError::Busy`].
pub struct ProfileCreator {
    backend: Arc<dyn ProfileStoreBackend>,
    owner_id: Uuid,
    store: ProfileStore,
    form: ProfileForm,
    state_tx: Arc<watch::Sender<CreatorSnapshot>>,
}

impl ProfileCreator {
    pub fn new(backend: Arc<dyn ProfileStoreBackend>, owner_id: Uuid, store: ProfileStore) -> Self {
        let (state_tx, _) = watch::channel(CreatorSnapshot {
            phase: CreatorPhase::Idle,
            field_errors: FieldErrors::default(),
            submit_error: None,
        });

        Self {
            backend,
            owner_id,
            store,
            form: ProfileForm::default(),
            state_tx: Arc::new(state_tx),
        }
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn snapshot(&self) -> CreatorSnapshot {
        self.state_tx.borrow().clone()
    }

    pub fn phase(&self) -> CreatorPhase {
        self.state_tx.borrow().phase
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.state_tx.borrow().field_errors
    }

    pub fn submit_error(&self) -> Option<String> {
        self.state_tx.borrow().submit_error.clone()
    }

    /// Subscribe to state changes.
    pub fn watch(&self) -> watch::Receiver<CreatorSnapshot> {
        self.state_tx.subscribe()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CreatorError> {
        self.ensure_editable()?;
        self.form.name = name.into();
        self.clear_field_error(ProfileField::Name);
        Ok(())
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> Result<(), CreatorError> {
        self.ensure_editable()?;
        self.form.url = url.into();
        self.clear_field_error(ProfileField::Url);
        Ok(())
    }

    pub fn set_color(&mut self, color: ColorTag) -> Result<(), CreatorError> {
        self.ensure_editable()?;
        self.form.color = color;
        Ok(())
    }

    /// Validate and, when valid, send exactly one create request.
    ///
    /// The created record is appended to the store before the form closes.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, CreatorError> {
        self.ensure_editable()?;

        let valid = match self.form.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                self.state_tx.send_modify(|state| state.field_errors = errors);
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };

        self.state_tx.send_modify(|state| {
            state.phase = CreatorPhase::Submitting;
            state.field_errors = FieldErrors::default();
            state.submit_error = None;
        });

        let backend = Arc::clone(&self.backend);
        let new_profile = valid.into_new_profile(self.owner_id);
        let store = self.store.clone();
        let state_tx = Arc::clone(&self.state_tx);

        // The outer task finishes the submission even if this future is
        // dropped; the inner one isolates a panicking backend.
        let task = tokio::spawn(async move {
            let created = tokio::spawn(async move { backend.create(new_profile).await }).await;
            finish(created, &store, &state_tx)
        });

        Ok(match task.await {
            Ok(outcome) => outcome,
            Err(join_error) => {
                error!("Profile submission task failed: {join_error}");
                let message = UNEXPECTED_ERROR_MESSAGE.to_string();
                self.state_tx.send_modify(|state| {
                    state.phase = CreatorPhase::Idle;
                    state.submit_error = Some(message.clone());
                });
                SubmitOutcome::Failed(message)
            }
        })
    }

    fn ensure_editable(&self) -> Result<(), CreatorError> {
        match self.phase() {
            CreatorPhase::Idle => Ok(()),
            CreatorPhase::Submitting => Err(CreatorError::busy()),
            CreatorPhase::Closed => Err(CreatorError::closed()),
        }
    }

    fn clear_field_error(&self, field: ProfileField) {
        self.state_tx.send_if_modified(|state| {
            let had_error = state.field_errors.get(field).is_some();
            state.field_errors.clear(field);
            had_error
        });
    }
}

fn finish(
    created: Result<GatewayResult<Profile>, JoinError>,
    store: &ProfileStore,
    state_tx: &watch::Sender<CreatorSnapshot>,
) -> SubmitOutcome {
    let message = match created {
        Ok(Ok(profile)) => {
            info!("Created profile {} ({})", profile.id, profile.name);
            store.append(profile.clone());
            state_tx.send_modify(|state| state.phase = CreatorPhase::Closed);
            return SubmitOutcome::Created(profile);
        }
        Ok(Err(e)) if e.is_remote() => {
            warn!("Failed to add profile: {e}");
            format!("Failed to add profile: {}", e.detail())
        }
        Ok(Err(e)) => {
            error!("Unexpected error adding profile: {e}");
            UNEXPECTED_ERROR_MESSAGE.to_string()
        }
        Err(join_error) => {
            error!("Create request panicked: {join_error}");
            UNEXPECTED_ERROR_MESSAGE.to_string()
        }
    };

    state_tx.send_modify(|state| {
        state.phase = CreatorPhase::Idle;
        state.submit_error = Some(message.clone());
    });
    SubmitOutcome::Failed(message)
}
