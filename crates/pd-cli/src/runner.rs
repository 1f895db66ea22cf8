use crate::{CliError, CliErrorResult, Commands};

use pd_core::{ColorTag, Profile, Session, SessionUser};
use pd_dashboard::{
    Dashboard, DashboardError, DirectoryScreen, GateState, Routes, Screen, SessionContext,
    StoreStatus, SubmitOutcome,
};

use std::time::Duration;

use log::{info, warn};
use serde_json::{Value, json};

/// How long `logout` waits for the session feed to confirm
const SIGN_OUT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(2);

pub const SIGN_UP_CONFIRMATION_MESSAGE: &str =
    "Sign up successful! Please check your email to verify your account.";

/// Run one command against the dashboard and return its JSON output
pub async fn execute(
    command: Commands,
    context: SessionContext,
    routes: Routes,
) -> CliErrorResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let session = context.auth().sign_in(&email, &password).await?;
            Ok(json!({ "signed_in": true, "user": session_json(&session) }))
        }

        Commands::Signup { email, password } => {
            let outcome = context.auth().sign_up(&email, &password).await?;
            let message = if outcome.needs_confirmation() {
                SIGN_UP_CONFIRMATION_MESSAGE
            } else {
                "Sign up successful!"
            };
            Ok(json!({
                "message": message,
                "confirmation_required": outcome.needs_confirmation(),
                "user": user_json(&outcome.user),
            }))
        }

        Commands::Logout => {
            let mut dashboard = start(context, routes).await;
            let signed_out = sign_out(&dashboard).await;
            dashboard.shutdown().await;
            Ok(json!({ "signed_out": signed_out }))
        }

        Commands::Status => {
            let mut dashboard = start(context, routes).await;
            let snapshot = dashboard.gate().snapshot();
            let output = json!({
                "state": state_name(snapshot.state()),
                "location": snapshot.location,
                "user": snapshot.session.as_ref().map(session_json),
            });
            dashboard.shutdown().await;
            Ok(output)
        }

        Commands::List { query } => {
            let mut dashboard = start(context, routes).await;
            let result = list(&mut dashboard, query).await;
            dashboard.shutdown().await;
            result
        }

        Commands::Add { name, url, color } => {
            let color = match color {
                Some(raw) => raw.parse::<ColorTag>()?,
                None => ColorTag::default(),
            };
            let mut dashboard = start(context, routes).await;
            let result = add(&mut dashboard, name, url, color).await;
            dashboard.shutdown().await;
            result
        }
    }
}

async fn start(context: SessionContext, routes: Routes) -> Dashboard {
    let initial_path = routes.protected_path().to_string();
    let dashboard = Dashboard::start(context, routes, &initial_path);
    dashboard.initialized().await;
    dashboard
}

/// Render the directory and wait for its profiles to load
async fn loaded_directory(dashboard: &mut Dashboard) -> CliErrorResult<DirectoryScreen> {
    if !matches!(dashboard.render(), Screen::Directory(_)) {
        return Err(DashboardError::not_authenticated().into());
    }

    let store = dashboard
        .store()
        .cloned()
        .ok_or_else(DashboardError::store_not_mounted)?;

    if let StoreStatus::Error(message) = store.ready().await {
        return Err(CliError::failed(format!(
            "Failed to load profiles: {message}"
        )));
    }

    match dashboard.render() {
        Screen::Directory(screen) => Ok(screen),
        _ => Err(DashboardError::not_authenticated().into()),
    }
}

async fn list(dashboard: &mut Dashboard, query: Option<String>) -> CliErrorResult<Value> {
    loaded_directory(dashboard).await?;

    if let Some(query) = query {
        dashboard.set_query(query);
    }

    let Screen::Directory(screen) = dashboard.render() else {
        return Err(DashboardError::not_authenticated().into());
    };

    Ok(json!({
        "user": screen.user.display_name,
        "query": screen.query,
        "summary": screen.summary.describe(),
        "count": screen.profiles.len(),
        "profiles": screen.profiles.iter().map(profile_json).collect::<Vec<_>>(),
    }))
}

async fn add(
    dashboard: &mut Dashboard,
    name: String,
    url: String,
    color: ColorTag,
) -> CliErrorResult<Value> {
    loaded_directory(dashboard).await?;

    let mut creator = dashboard.open_creator()?;
    creator.set_name(name)?;
    creator.set_url(url)?;
    creator.set_color(color)?;

    match creator.submit().await? {
        SubmitOutcome::Created(profile) => {
            info!("Added profile {}", profile.id);
            Ok(json!({ "profile": profile_json(&profile) }))
        }
        SubmitOutcome::Invalid(errors) => Err(CliError::Invalid { errors }),
        SubmitOutcome::Failed(message) => Err(CliError::failed(message)),
    }
}

/// Sign-out failures are only logged, so success is judged by whether the
/// gate actually lost its session.
async fn sign_out(dashboard: &Dashboard) -> bool {
    if dashboard.gate().session().is_none() {
        return true;
    }

    dashboard.sign_out().await;

    let mut rx = dashboard.gate().watch();
    match tokio::time::timeout(
        SIGN_OUT_CONFIRM_TIMEOUT,
        rx.wait_for(|snapshot| snapshot.session.is_none()),
    )
    .await
    {
        Ok(Ok(_)) => true,
        _ => {
            warn!("Session is still active after sign out");
            false
        }
    }
}

fn state_name(state: GateState) -> &'static str {
    match state {
        GateState::Initializing => "initializing",
        GateState::Authenticated => "authenticated",
        GateState::Anonymous => "anonymous",
    }
}

fn user_json(user: &SessionUser) -> Value {
    json!({
        "id": user.id,
        "email": user.email,
        "full_name": user.metadata.full_name,
    })
}

/// Never includes tokens
fn session_json(session: &Session) -> Value {
    json!({
        "id": session.user_id(),
        "email": session.user.email,
        "display_name": session.display_name(),
        "initial": session.initial().map(String::from),
        "expires_at": session.expires_at,
    })
}

fn profile_json(profile: &Profile) -> Value {
    json!({
        "id": profile.id,
        "name": profile.name,
        "url": profile.url,
        "color": profile.color,
        "owner_id": profile.owner_id,
        "created_at": profile.created_at,
    })
}
