use super::*;

// =============================================================
// Target resolution
// =============================================================

#[test]
fn count_attribute_wins() {
    assert_eq!(resolve_target(Some("42"), Some("7"), "50 million"), 42);
}

#[test]
fn target_attribute_used_when_count_absent() {
    assert_eq!(resolve_target(None, Some("7"), "50 million"), 7);
}

#[test]
fn non_numeric_count_falls_through_to_target() {
    assert_eq!(resolve_target(Some("lots"), Some("12"), ""), 12);
}

#[test]
fn leading_integer_is_parsed_like_the_browser() {
    assert_eq!(parse_leading_int("  12abc"), Some(12));
    assert_eq!(parse_leading_int("+8"), Some(8));
    assert_eq!(parse_leading_int("7,600"), Some(7));
    assert_eq!(parse_leading_int("-3"), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int(""), None);
}

#[test]
fn overflowing_leading_integer_saturates() {
    assert_eq!(parse_leading_int("99999999999999999999"), Some(u64::MAX));
    assert_eq!(parse_leading_int("99999999999999999999 stars"), Some(u64::MAX));
    assert_eq!(parse_leading_int("18446744073709551615"), Some(u64::MAX));
}

#[test]
fn overflowing_count_attribute_is_not_replaced_by_keyword() {
    assert_eq!(resolve_target(Some("99999999999999999999"), None, "50 million"), u64::MAX);
    assert_eq!(resolve_target(None, Some("99999999999999999999"), "50 million"), u64::MAX);
}

#[test]
fn overflowing_target_still_finishes_exactly() {
    let values: Vec<u64> = CounterTask::new(u64::MAX, 2000.0, 16).collect();
    assert_eq!(values.last().copied(), Some(u64::MAX));
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn million_text_without_attributes_resolves_to_fifty() {
    assert_eq!(resolve_target(None, None, "50 million"), 50);
}

#[test]
fn islands_text_without_attributes_resolves_to_7600() {
    assert_eq!(resolve_target(None, None, "Over 7,600 Islands"), 7600);
}

#[test]
fn keyword_priority_order_is_preserved() {
    // "%" outranks everything else present.
    assert_eq!(target_from_text("90% of a million islands"), 90);
    assert_eq!(target_from_text("a million languages"), 50);
    assert_eq!(target_from_text("1 BILLION"), 30);
    assert_eq!(target_from_text("180 Languages"), 180);
    assert_eq!(target_from_text("Founded"), 100);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(7600), "7,600");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn format_count_covers_saturated_targets() {
    assert_eq!(format_count(u64::MAX), "18,446,744,073,709,551,615");
}

// =============================================================
// CounterTask
// =============================================================

#[test]
fn sequence_is_monotonic_bounded_and_ends_at_target() {
    for target in [0_u64, 1, 7, 50, 90, 100, 125, 180, 7600, 1_000_003, u64::from(u32::MAX)] {
        let values: Vec<u64> = CounterTask::new(target, 2000.0, 16).collect();
        assert!(!values.is_empty(), "target {target} yielded nothing");
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {target} decreased");
        assert!(values.iter().all(|&v| v <= target), "target {target} overshot");
        assert_eq!(values.last().copied(), Some(target));
    }
}

#[test]
fn sequence_length_tracks_duration_over_tick() {
    let ticks = CounterTask::new(1000, 2000.0, 16).count();
    // 2000 / 16 = 125 steps, plus at most one for float accumulation.
    assert!((125..=127).contains(&ticks), "unexpected tick count {ticks}");
}

#[test]
fn zero_target_yields_single_zero() {
    let values: Vec<u64> = CounterTask::new(0, 2000.0, 16).collect();
    assert_eq!(values, vec![0]);
}

#[test]
fn task_is_fused_after_completion() {
    let mut task = CounterTask::new(3, 32.0, 16);
    while task.next().is_some() {}
    assert!(task.is_done());
    assert_eq!(task.next(), None);
    assert_eq!(task.target(), 3);
}

#[test]
fn tick_longer_than_duration_finishes_in_one_step() {
    let values: Vec<u64> = CounterTask::new(500, 10.0, 16).collect();
    assert_eq!(values, vec![500]);
}
