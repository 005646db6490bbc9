use super::*;

fn hit(ratio: f64) -> Intersection {
    Intersection { intersecting: true, ratio }
}

fn miss() -> Intersection {
    Intersection { intersecting: false, ratio: 0.0 }
}

fn options(threshold: f64) -> ObserverOptions {
    ObserverOptions::new(threshold, Margin::default())
}

// =============================================================
// Margin / options
// =============================================================

#[test]
fn margin_renders_css_edges_in_order() {
    let margin = Margin { top: 1.0, right: 2.0, bottom: -50.0, left: 4.0 };
    assert_eq!(margin.to_css(), "1px 2px -50px 4px");
}

#[test]
fn options_clamp_threshold() {
    assert_eq!(options(-0.5).threshold, 0.0);
    assert_eq!(options(1.5).threshold, 1.0);
    assert_eq!(options(f64::NAN).threshold, 0.0);
    assert_eq!(options(0.3).threshold, 0.3);
}

// =============================================================
// One-shot
// =============================================================

#[test]
fn one_shot_stays_hidden_until_intersecting() {
    let mut item = Revealable::new(RevealPolicy::OneShot, &options(0.1));
    assert_eq!(item.on_intersection(miss()), RevealOutcome::Ignored);
    assert!(!item.revealed());
    assert!(item.watching());
}

#[test]
fn one_shot_ignores_ratio_below_threshold() {
    let mut item = Revealable::new(RevealPolicy::OneShot, &options(0.5));
    assert_eq!(item.on_intersection(hit(0.49)), RevealOutcome::Ignored);
    assert!(!item.revealed());
}

#[test]
fn one_shot_reveals_at_threshold_exactly_once() {
    let mut item = Revealable::new(RevealPolicy::OneShot, &options(0.5));
    assert_eq!(item.on_intersection(hit(0.5)), RevealOutcome::Revealed { unobserve: true });
    assert!(item.revealed());
    assert!(!item.watching());

    assert_eq!(item.on_intersection(hit(1.0)), RevealOutcome::Ignored);
    assert_eq!(item.on_intersection(miss()), RevealOutcome::Ignored);
    assert!(item.revealed());
}

#[test]
fn zero_threshold_accepts_edge_intersection() {
    let mut item = Revealable::new(RevealPolicy::OneShot, &options(0.0));
    assert_eq!(item.on_intersection(hit(0.0)), RevealOutcome::Revealed { unobserve: true });
}

// =============================================================
// Repeating
// =============================================================

#[test]
fn repeating_keeps_watching_and_refires() {
    let mut item = Revealable::new(RevealPolicy::Repeating, &options(0.3));
    assert_eq!(item.on_intersection(hit(0.4)), RevealOutcome::Revealed { unobserve: false });
    assert!(item.watching());

    // Scrolled away and back in from below.
    assert_eq!(item.on_intersection(miss()), RevealOutcome::Ignored);
    assert!(item.revealed());
    assert_eq!(item.on_intersection(hit(0.6)), RevealOutcome::Refired);
}
