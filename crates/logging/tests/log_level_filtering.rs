//! Integration tests for level gating.
//!
//! A call reaches the sink graph iff its level is at or above the
//! configuration's threshold, and the `none` threshold silences everything.

use std::sync::Arc;

use logging::{Level, LevelFilter, Logger, LoggingConfig, MemorySink};
use proptest::prelude::*;

fn capture(threshold: LevelFilter) -> (Logger, MemorySink) {
    let config = Arc::new(LoggingConfig::silent(threshold));
    let sink = MemorySink::new();
    config.add_sink(sink.clone());
    let logger = Logger::with_config("Gate", config).expect("valid name");
    (logger, sink)
}

fn level_strategy() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

fn filter_strategy() -> impl Strategy<Value = LevelFilter> {
    prop::sample::select(LevelFilter::ALL.to_vec())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Calls below the threshold are never delivered.
    #[test]
    fn calls_below_threshold_are_dropped(call in level_strategy(), threshold in filter_strategy()) {
        prop_assume!((call as u8) < threshold.as_u8());
        let (logger, sink) = capture(threshold);
        logger.log(call, "dropped");
        prop_assert!(sink.is_empty());
    }

    /// Calls at or above the threshold reach every leaf exactly once.
    #[test]
    fn calls_at_or_above_threshold_are_delivered_once(
        call in level_strategy(),
        threshold in filter_strategy(),
    ) {
        prop_assume!(threshold.permits(call));
        let (logger, sink) = capture(threshold);
        let second = MemorySink::new();
        logger.config().add_sink(second.clone());

        logger.log(call, "kept");
        prop_assert_eq!(sink.len(), 1);
        prop_assert_eq!(second.len(), 1);
        prop_assert_eq!(sink.events()[0].level(), call);
    }

    /// Repeating a call without reconfiguring gates identically.
    #[test]
    fn gating_is_stable_across_calls(call in level_strategy(), threshold in filter_strategy()) {
        let (logger, sink) = capture(threshold);
        logger.log(call, "first");
        let after_first = sink.len();
        logger.log(call, "second");
        prop_assert_eq!(sink.len(), after_first * 2);
    }
}

// ============================================================================
// Threshold changes
// ============================================================================

/// The `none` threshold suppresses even errors.
#[test]
fn none_threshold_suppresses_everything() {
    let (logger, sink) = capture(LevelFilter::Off);
    for level in Level::ALL {
        logger.log(level, "silenced");
    }
    assert!(sink.is_empty());
}

/// `verbose` admits every call.
#[test]
fn verbose_threshold_admits_everything() {
    let (logger, sink) = capture(LevelFilter::Verbose);
    for level in Level::ALL {
        logger.log(level, "kept");
    }
    assert_eq!(sink.len(), Level::ALL.len());
}

/// Raising the threshold affects later calls only.
#[test]
fn set_level_applies_to_subsequent_calls() {
    let (logger, sink) = capture(LevelFilter::Debug);
    logger.debug("before");
    logger.config().set_level(LevelFilter::Warn);
    logger.debug("after");
    logger.warn("warned");

    let messages: Vec<String> = sink
        .events()
        .iter()
        .map(|event| event.message().to_owned())
        .collect();
    assert_eq!(messages, ["before", "warned"]);
}

/// Loggers sharing one configuration see the same threshold.
#[test]
fn threshold_is_shared_between_loggers() {
    let (first, sink) = capture(LevelFilter::Debug);
    let second = Logger::with_config("Other", Arc::clone(first.config())).expect("valid name");

    second.config().set_level(LevelFilter::Error);
    first.info("hidden");
    second.info("hidden");
    first.error("shown");
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.events()[0].logger(), "Gate");
}
