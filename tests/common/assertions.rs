//! Domain-specific assertion macros for scentfind harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that show the
//! query and the full result list, not just the first mismatch.

use scent_core::SearchOutcome;

/// Keys of the matches, in result order.
pub fn keys(outcome: &SearchOutcome<'_>) -> Vec<String> {
    outcome.matches.iter().map(|e| e.key.clone()).collect()
}

/// Assert that a search returns exactly these keys, in this order.
///
/// ```rust
/// assert_keys!(outcome, ["de-001", "de-004"]);
/// ```
#[macro_export]
macro_rules! assert_keys {
    ($outcome:expr, [$($key:expr),* $(,)?]) => {{
        let actual = $crate::common::keys(&$outcome);
        let expected: Vec<String> = vec![$($key.to_string()),*];
        pretty_assertions::assert_eq!(
            actual,
            expected,
            "assert_keys! failed for intent {:?}",
            $outcome.intent
        );
    }};
}

/// Assert that a search result includes the given key.
#[macro_export]
macro_rules! assert_includes {
    ($outcome:expr, $key:expr) => {{
        let actual = $crate::common::keys(&$outcome);
        if !actual.iter().any(|k| k == $key) {
            panic!(
                "assert_includes! failed: {:?} not in results.\n  intent: {:?}\n  results: {:?}",
                $key, $outcome.intent, actual
            );
        }
    }};
}

/// Assert that a search result does not include the given key.
#[macro_export]
macro_rules! assert_excludes {
    ($outcome:expr, $key:expr) => {{
        let actual = $crate::common::keys(&$outcome);
        if actual.iter().any(|k| k == $key) {
            panic!(
                "assert_excludes! failed: {:?} unexpectedly in results.\n  intent: {:?}\n  results: {:?}",
                $key, $outcome.intent, actual
            );
        }
    }};
}

/// Assert that every key of `$sub` also appears in `$sup`.
#[macro_export]
macro_rules! assert_superset {
    ($sup:expr, $sub:expr) => {{
        let sup = $crate::common::keys(&$sup);
        let sub = $crate::common::keys(&$sub);
        let missing: Vec<&String> = sub.iter().filter(|k| !sup.contains(k)).collect();
        if !missing.is_empty() {
            panic!(
                "assert_superset! failed: {:?} missing from the wider result.\n  wider: {:?}\n  narrower: {:?}",
                missing, sup, sub
            );
        }
    }};
}
