use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::catalog::PairItem;

fn two_pair_catalog() -> Catalog {
    Catalog::new(vec![
        PairItem::new(1, "hand", "touch"),
        PairItem::new(2, "nose", "smell"),
    ])
    .expect("catalog")
}

fn two_pair_session() -> MatchSession {
    let catalog = two_pair_catalog();
    let pool = catalog.items().to_vec();
    MatchSession::with_pool(catalog, pool)
}

#[test]
fn matching_right_id_solves_and_clears_selection() {
    let mut session = two_pair_session();
    session
        .select_left(PairId(1), Point::new(10.0, 10.0))
        .expect("select");
    let outcome = session.attempt_pair(PairId(1));
    assert_eq!(outcome, Some(AttemptOutcome::Solved));
    assert_eq!(session.solved(), 1);
    assert_eq!(session.active_left(), None);
    assert_eq!(session.anchor(), None);
}

#[test]
fn wrong_right_id_clears_selection_without_scoring() {
    let mut session = two_pair_session();
    session
        .select_left(PairId(1), Point::new(10.0, 10.0))
        .expect("select");
    let outcome = session.attempt_pair(PairId(2));
    assert_eq!(outcome, Some(AttemptOutcome::Missed));
    assert_eq!(session.solved(), 0);
    assert_eq!(session.active_left(), None);
}

#[test]
fn reselecting_replaces_prior_selection_without_scoring() {
    let mut session = two_pair_session();
    session
        .select_left(PairId(1), Point::new(10.0, 10.0))
        .expect("select");
    session
        .select_left(PairId(2), Point::new(20.0, 20.0))
        .expect("reselect");
    assert_eq!(session.active_left(), Some(PairId(2)));
    assert_eq!(session.anchor(), Some(Point::new(20.0, 20.0)));
    assert_eq!(session.solved(), 0);
}

#[test]
fn attempt_without_selection_is_a_noop() {
    let mut session = two_pair_session();
    assert_eq!(session.attempt_pair(PairId(1)), None);
    assert_eq!(session.solved(), 0);

    session
        .select_left(PairId(1), Point::new(0.0, 0.0))
        .expect("select");
    session.attempt_pair(PairId(1)).expect("scored");
    // The attempt ended; a second click scores nothing.
    assert_eq!(session.attempt_pair(PairId(1)), None);
    assert_eq!(session.solved(), 1);
}

#[test]
fn track_pointer_while_idle_produces_no_connector() {
    let session = two_pair_session();
    assert_eq!(session.track_pointer(Point::new(5.0, 5.0), true), None);
    assert_eq!(session.active_left(), None);
}

#[test]
fn connector_follows_pointer_from_anchor() {
    let mut session = two_pair_session();
    session
        .select_left(PairId(1), Point::new(10.0, 10.0))
        .expect("select");

    let off_target = session
        .track_pointer(Point::new(80.0, 40.0), false)
        .expect("connector");
    assert_eq!(off_target.from, Point::new(10.0, 10.0));
    assert_eq!(off_target.to, Point::new(80.0, 40.0));
    assert!(!off_target.visible);

    let over_target = session
        .track_pointer(Point::new(300.0, 120.0), true)
        .expect("connector");
    assert!(over_target.visible);
}

#[test]
fn unknown_left_id_is_rejected() {
    let mut session = two_pair_session();
    let result = session.select_left(PairId(99), Point::new(0.0, 0.0));
    assert!(matches!(result, Err(MatchError::UnknownLeftItem(PairId(99)))));
    assert_eq!(session.active_left(), None);
}

#[test]
fn unknown_right_id_counts_as_miss() {
    let mut session = two_pair_session();
    session
        .select_left(PairId(1), Point::new(0.0, 0.0))
        .expect("select");
    assert_eq!(session.attempt_pair(PairId(99)), Some(AttemptOutcome::Missed));
    assert_eq!(session.solved(), 0);
}

#[test]
fn sampled_session_pool_is_distinct_subset_of_catalog() {
    let catalog = Catalog::five_senses();
    let mut rng = StdRng::seed_from_u64(7);
    let session = MatchSession::new(catalog, DEFAULT_POOL_SIZE, &mut rng);
    assert_eq!(session.right_pool().len(), DEFAULT_POOL_SIZE);
    for (i, item) in session.right_pool().iter().enumerate() {
        assert!(session.catalog().contains(item.id));
        assert!(session.right_pool()[i + 1..]
            .iter()
            .all(|other| other.id != item.id));
    }
    assert_eq!(session.left_items().len(), 5);
}

#[test]
fn solved_count_keeps_incrementing_past_pool_size() {
    // No cap and no terminal state: re-solving a pair still counts.
    let mut session = two_pair_session();
    for _ in 0..3 {
        session
            .select_left(PairId(1), Point::new(0.0, 0.0))
            .expect("select");
        assert_eq!(session.attempt_pair(PairId(1)), Some(AttemptOutcome::Solved));
        session
            .select_left(PairId(2), Point::new(0.0, 0.0))
            .expect("select");
        assert_eq!(session.attempt_pair(PairId(2)), Some(AttemptOutcome::Solved));
    }
    assert_eq!(session.solved(), 6);
}

#[test]
fn with_pool_drops_entries_outside_the_catalog() {
    let catalog = two_pair_catalog();
    let session = MatchSession::with_pool(
        catalog,
        vec![
            PairItem::new(2, "nose", "smell"),
            PairItem::new(9, "bogus", "bogus"),
        ],
    );
    assert_eq!(session.right_pool().len(), 1);
    assert_eq!(session.right_pool()[0].id, PairId(2));
}
