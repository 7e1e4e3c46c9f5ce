use super::*;

#[test]
fn same_seed_gives_same_field() {
    assert_eq!(stars(7, HERO_STAR_COUNT), stars(7, HERO_STAR_COUNT));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(stars(1, 5), stars(2, 5));
}

#[test]
fn values_stay_in_decorative_ranges() {
    for star in stars(42, 500) {
        assert!((1.0..4.0).contains(&star.size_px));
        assert!((0.0..100.0).contains(&star.left_pct));
        assert!((0.0..100.0).contains(&star.top_pct));
        assert!((0.0..5.0).contains(&star.delay_s));
        assert!((2.0..5.0).contains(&star.duration_s));
    }
}

#[test]
fn style_contains_every_property() {
    let style = stars(3, 1)[0].style();
    for prop in ["width:", "height:", "left:", "top:", "animation-delay:", "animation-duration:"] {
        assert!(style.contains(prop), "{prop}");
    }
}
