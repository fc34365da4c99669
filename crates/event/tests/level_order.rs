//! Property tests for the severity order and threshold gating.

use event::{Level, LevelFilter};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

fn any_filter() -> impl Strategy<Value = LevelFilter> {
    prop::sample::select(LevelFilter::ALL.to_vec())
}

proptest! {
    #[test]
    fn permits_agrees_with_total_order(level in any_level(), filter in any_filter()) {
        prop_assert_eq!(filter.permits(level), LevelFilter::from(level) >= filter);
    }

    #[test]
    fn less_severe_calls_are_gated(a in any_level(), b in any_level()) {
        prop_assume!(a < b);
        prop_assert!(!LevelFilter::from(b).permits(a));
        prop_assert!(LevelFilter::from(b).permits(b));
    }

    #[test]
    fn off_rejects_everything(level in any_level()) {
        prop_assert!(!LevelFilter::Off.permits(level));
    }

    #[test]
    fn names_parse_back(level in any_level(), filter in any_filter()) {
        prop_assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        prop_assert_eq!(filter.to_string().parse::<LevelFilter>().unwrap(), filter);
    }
}
