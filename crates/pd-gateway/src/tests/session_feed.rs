use crate::tests::session;
use crate::{SessionEvent, SessionEventKind, SessionFeed};

use googletest::prelude::*;

#[tokio::test]
async fn given_two_subscribers_when_event_published_then_both_receive_it() {
    let feed = SessionFeed::new();
    let mut first = feed.subscribe();
    let mut second = feed.subscribe();

    let delivered = feed.publish(SessionEvent::signed_in(session("a")));

    assert_that!(delivered, eq(2));
    assert_that!(first.recv().await.unwrap().kind, eq(SessionEventKind::SignedIn));
    assert_that!(second.recv().await.unwrap().kind, eq(SessionEventKind::SignedIn));
}

#[tokio::test]
async fn given_events_published_when_received_then_order_is_preserved() {
    let feed = SessionFeed::new();
    let mut sub = feed.subscribe();

    feed.publish(SessionEvent::signed_in(session("a")));
    feed.publish(SessionEvent::token_refreshed(session("b")));
    feed.publish(SessionEvent::signed_out());

    let kinds = [
        sub.recv().await.unwrap().kind,
        sub.recv().await.unwrap().kind,
        sub.recv().await.unwrap().kind,
    ];
    assert_eq!(
        kinds,
        [
            SessionEventKind::SignedIn,
            SessionEventKind::TokenRefreshed,
            SessionEventKind::SignedOut
        ]
    );
}

#[test]
fn given_no_subscribers_when_event_published_then_nobody_receives_it() {
    let feed = SessionFeed::new();

    assert_that!(feed.publish(SessionEvent::signed_out()), eq(0));
}

#[test]
fn given_subscription_when_unsubscribed_then_count_drops() {
    let feed = SessionFeed::new();
    let sub = feed.subscribe();
    assert_that!(feed.subscriber_count(), eq(1));

    sub.unsubscribe();

    assert_that!(feed.subscriber_count(), eq(0));
}

#[tokio::test]
async fn given_feed_dropped_when_receiving_then_none() {
    let feed = SessionFeed::new();
    let mut sub = feed.subscribe();

    drop(feed);

    assert!(sub.recv().await.is_none());
}

#[tokio::test]
async fn given_lagging_subscriber_when_receiving_then_it_skips_to_buffered_events() {
    let feed = SessionFeed::new();
    let mut sub = feed.subscribe();

    for i in 0..(crate::FEED_CAPACITY + 4) {
        feed.publish(SessionEvent::token_refreshed(session(&format!("t{i}"))));
    }
    feed.publish(SessionEvent::signed_out());

    let mut received = 0;
    let last = loop {
        let event = sub.recv().await.unwrap();
        received += 1;
        if event.kind == SessionEventKind::SignedOut {
            break event;
        }
    };

    assert_that!(last.session, none());
    assert!(received <= crate::FEED_CAPACITY);
}

#[test]
fn given_signed_out_event_then_it_carries_no_session() {
    let event = SessionEvent::signed_out();

    assert_that!(event.kind, eq(SessionEventKind::SignedOut));
    assert_that!(event.session, none());
}
