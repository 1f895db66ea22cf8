use crate::tests::fakes::{FakeBackend, Reply};
use crate::tests::{profile, user_id};
use crate::{
    CreatorError, CreatorPhase, ProfileCreator, ProfileStore, SubmitOutcome,
    UNEXPECTED_ERROR_MESSAGE,
};

use pd_core::{ColorTag, FieldError};

use std::sync::Arc;
use std::time::Duration;

use googletest::prelude::*;

async fn creator_with(backend: FakeBackend) -> (ProfileCreator, ProfileStore, Arc<FakeBackend>) {
    let backend = Arc::new(backend);
    let store = ProfileStore::mount(backend.clone());
    store.ready().await;
    let creator = ProfileCreator::new(backend.clone(), user_id(), store.clone());
    (creator, store, backend)
}

fn fill(creator: &mut ProfileCreator, name: &str, url: &str) {
    creator.set_name(name).unwrap();
    creator.set_url(url).unwrap();
}

#[tokio::test]
async fn given_empty_name_and_ftp_url_when_submitted_then_both_errors_and_no_request() {
    let (mut creator, _store, backend) = creator_with(FakeBackend::with(Vec::new())).await;
    fill(&mut creator, "", "ftp://x.com");

    let outcome = creator.submit().await.unwrap();

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation failure, got {outcome:?}");
    };
    assert_that!(errors.name(), eq(Some(FieldError::NameRequired)));
    assert_that!(errors.url(), eq(Some(FieldError::UrlScheme)));
    assert_that!(creator.field_errors(), eq(errors));
    assert_that!(creator.phase(), eq(CreatorPhase::Idle));
    assert_that!(backend.create_count(), eq(0));
}

#[tokio::test]
async fn given_field_error_when_field_edited_then_only_that_error_clears() {
    let (mut creator, _store, _backend) = creator_with(FakeBackend::with(Vec::new())).await;
    fill(&mut creator, "L", "nope");
    creator.submit().await.unwrap();
    assert_that!(creator.field_errors().len(), eq(2));

    creator.set_name("Li").unwrap();

    assert_that!(creator.field_errors().name(), eq(None::<FieldError>));
    assert_that!(
        creator.field_errors().url(),
        eq(Some(FieldError::UrlMalformed))
    );
}

#[tokio::test]
async fn given_valid_input_when_submitted_then_trimmed_record_is_created_and_prepended() {
    let (mut creator, store, backend) =
        creator_with(FakeBackend::with(vec![profile(2, "B"), profile(1, "A")])).await;
    fill(&mut creator, "  LinkedIn  ", " https://linkedin.com/in/ada ");
    creator.set_color(ColorTag::Purple).unwrap();

    let outcome = creator.submit().await.unwrap();

    let SubmitOutcome::Created(created) = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    let sent = backend.creates.lock().unwrap()[0].clone();
    assert_that!(sent.name, eq("LinkedIn"));
    assert_that!(sent.url, eq("https://linkedin.com/in/ada"));
    assert_that!(sent.color, eq(ColorTag::Purple));
    assert_that!(sent.owner_id, eq(user_id()));

    let ids: Vec<i64> = store.profiles().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![created.id, 2, 1]);
    assert_that!(creator.phase(), eq(CreatorPhase::Closed));
}

#[tokio::test]
async fn given_closed_form_when_edited_then_rejected() {
    let (mut creator, _store, _backend) = creator_with(FakeBackend::with(Vec::new())).await;
    fill(&mut creator, "Li", "https://x.com");
    creator.submit().await.unwrap();

    assert!(matches!(
        creator.set_name("Other"),
        Err(CreatorError::Closed { .. })
    ));
    assert!(matches!(
        creator.submit().await,
        Err(CreatorError::Closed { .. })
    ));
}

#[tokio::test]
async fn given_network_failure_when_submitted_then_form_stays_open_with_inline_error() {
    let (mut creator, store, _backend) = creator_with(
        FakeBackend::with(vec![profile(2, "B"), profile(1, "A")]).creating(Reply::Reject),
    )
    .await;
    let before = store.profiles();
    fill(&mut creator, "GitHub", "https://github.com/ada");

    let outcome = creator.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(String::from("Failed to add profile: network down"))
    );
    assert_that!(creator.phase(), eq(CreatorPhase::Idle));
    assert_that!(
        creator.submit_error(),
        some(eq("Failed to add profile: network down"))
    );
    assert_that!(creator.form().name, eq("GitHub"));
    assert_that!(creator.form().url, eq("https://github.com/ada"));
    assert_eq!(store.profiles(), before);
    let ids: Vec<i64> = store.profiles().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn given_malformed_response_when_submitted_then_generic_message() {
    let (mut creator, store, _backend) =
        creator_with(FakeBackend::with(Vec::new()).creating(Reply::Malformed)).await;
    fill(&mut creator, "GitHub", "https://github.com/ada");

    let outcome = creator.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(UNEXPECTED_ERROR_MESSAGE.to_string())
    );
    assert_that!(creator.phase(), eq(CreatorPhase::Idle));
    assert!(store.profiles().is_empty());
}

#[tokio::test]
async fn given_panicking_backend_when_submitted_then_generic_message_and_form_open() {
    let (mut creator, _store, _backend) =
        creator_with(FakeBackend::with(Vec::new()).creating(Reply::Panic)).await;
    fill(&mut creator, "GitHub", "https://github.com/ada");

    let outcome = creator.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(UNEXPECTED_ERROR_MESSAGE.to_string())
    );
    assert_that!(creator.phase(), eq(CreatorPhase::Idle));
    assert!(creator.set_name("GitLab").is_ok());
}

#[tokio::test]
async fn given_failed_submit_when_resubmitted_manually_then_previous_error_is_cleared() {
    let (mut creator, _store, backend) =
        creator_with(FakeBackend::with(Vec::new()).creating(Reply::Reject)).await;
    fill(&mut creator, "GitHub", "https://github.com/ada");
    creator.submit().await.unwrap();
    assert!(creator.submit_error().is_some());

    backend.set_create_reply(Reply::Succeed);
    let outcome = creator.submit().await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    assert_that!(backend.create_count(), eq(2));
    assert!(creator.submit_error().is_none());
}

#[tokio::test]
async fn given_outstanding_submission_when_edited_then_busy() {
    let (backend, release) = FakeBackend::with(Vec::new()).held_create();
    let (mut creator, store, backend) = creator_with(backend).await;
    fill(&mut creator, "GitHub", "https://github.com/ada");

    let abandoned = tokio::time::timeout(Duration::from_millis(50), creator.submit()).await;
    assert!(abandoned.is_err());

    assert_that!(creator.phase(), eq(CreatorPhase::Submitting));
    assert!(matches!(
        creator.set_url("https://other.example.com"),
        Err(CreatorError::Busy { .. })
    ));
    assert!(matches!(
        creator.submit().await,
        Err(CreatorError::Busy { .. })
    ));

    release.notify_one();
    let mut rx = creator.watch();
    tokio::time::timeout(
        Duration::from_secs(2),
        rx.wait_for(|s| s.phase == CreatorPhase::Closed),
    )
    .await
    .unwrap()
    .unwrap();

    assert_that!(backend.create_count(), eq(1));
    assert_eq!(store.profiles(), before);
    let ids: Vec<i64> = store.profiles().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}
