use super::*;

#[test]
fn new_clamps_value_to_max() {
    let r = RatingState::new(9, 5);
    assert_eq!(r.value(), 5);
    assert_eq!(r.max(), 5);
    assert_eq!(RatingState::new(0, 0).max(), 1);
}

#[test]
fn hover_previews_without_committing() {
    let mut r = RatingState::new(2, 5);
    r.hover(4);
    assert_eq!(r.display_value(), 4);
    assert_eq!(r.value(), 2);
    assert!(r.is_filled(4));
    assert!(!r.is_filled(5));

    r.leave();
    assert_eq!(r.display_value(), 2);
    assert!(!r.is_filled(3));
}

#[test]
fn click_commits_in_range_only() {
    let mut r = RatingState::new(0, 5);
    assert_eq!(r.click(3), Some(3));
    assert_eq!(r.value(), 3);
    assert_eq!(r.click(0), None);
    assert_eq!(r.click(6), None);
    assert_eq!(r.value(), 3);
    assert_eq!(r.caption(), "3/5");
}

#[test]
fn disabled_rating_ignores_input() {
    let mut r = RatingState::new(1, 5).disabled(true);
    r.hover(5);
    assert_eq!(r.preview(), None);
    assert_eq!(r.click(4), None);
    assert_eq!(r.value(), 1);
    assert!(r.is_disabled());
}

#[test]
fn zero_value_fills_nothing() {
    let r = RatingState::new(0, 5);
    assert!((1..=5).all(|s| !r.is_filled(s)));
    assert_eq!(r.caption(), "0/5");
}

#[test]
fn sync_overwrites_committed_value() {
    let mut r = RatingState::new(4, 5);
    r.sync(0);
    assert_eq!(r.value(), 0);
}
