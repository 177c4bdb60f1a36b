use crate::{IdentityStore, LinkOutcome};

use std::collections::HashMap;

use chrono::{TimeZone, Utc};

#[tokio::test]
async fn record_inbound_event_creates_unlinked_identity() {
    let store = IdentityStore::new();

    store.record_inbound_event("U1").await;

    assert_eq!(store.identity_count().await, 1);
    assert_eq!(store.lookup_by_email("a@x.com").await, None);
}

#[tokio::test]
async fn record_inbound_event_is_idempotent_per_user() {
    let store = IdentityStore::new();

    store.record_inbound_event("U1").await;
    store.record_inbound_event("U1").await;

    assert_eq!(store.identity_count().await, 1);
}

#[tokio::test]
async fn link_by_email_with_no_identities_returns_no_unlinked() {
    let store = IdentityStore::new();

    let outcome = store.link_by_email("a@x.com").await;

    assert_eq!(outcome, LinkOutcome::NoUnlinkedIdentity);
    assert_eq!(store.lookup_by_email("a@x.com").await, None);
}

#[tokio::test]
async fn link_by_email_when_all_linked_returns_no_unlinked_and_mutates_nothing() {
    let store = IdentityStore::new();
    store.record_inbound_event("U1").await;
    store.link_by_email("a@x.com").await;

    let outcome = store.link_by_email("b@x.com").await;

    assert_eq!(outcome, LinkOutcome::NoUnlinkedIdentity);
    assert_eq!(store.lookup_by_email("a@x.com").await, Some("U1".into()));
    assert_eq!(store.lookup_by_email("b@x.com").await, None);
}

#[tokio::test]
async fn link_by_email_picks_most_recently_seen_unlinked_identity() {
    let store = IdentityStore::new();
    let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap();

    store.record_inbound_event_at("U_old", earlier).await;
    store.record_inbound_event_at("U_new", later).await;

    let outcome = store.link_by_email("a@x.com").await;

    assert_eq!(
        outcome,
        LinkOutcome::Linked {
            line_user_id: "U_new".into()
        }
    );
    assert_eq!(store.lookup_by_email("a@x.com").await, Some("U_new".into()));
}

#[tokio::test]
async fn link_by_email_skips_already_linked_identities() {
    let store = IdentityStore::new();
    let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap();

    store.record_inbound_event_at("U_old", earlier).await;
    store.record_inbound_event_at("U_new", later).await;
    store.link_by_email("first@x.com").await;

    // U_new took the first link; the second must go to U_old
    let outcome = store.link_by_email("second@x.com").await;

    assert_eq!(
        outcome,
        LinkOutcome::Linked {
            line_user_id: "U_old".into()
        }
    );
}

#[tokio::test]
async fn lookup_falls_back_to_seed_mapping() {
    let mut seed = HashMap::new();
    seed.insert("seeded@x.com".to_string(), "U_seed".to_string());
    let store = IdentityStore::with_seed(seed);

    assert_eq!(
        store.lookup_by_email("seeded@x.com").await,
        Some("U_seed".into())
    );
}

#[tokio::test]
async fn live_link_wins_over_seed_mapping() {
    let mut seed = HashMap::new();
    seed.insert("a@x.com".to_string(), "U_seed".to_string());
    let store = IdentityStore::with_seed(seed);

    store.record_inbound_event("U_live").await;
    store.link_by_email("a@x.com").await;

    assert_eq!(store.lookup_by_email("a@x.com").await, Some("U_live".into()));
}
