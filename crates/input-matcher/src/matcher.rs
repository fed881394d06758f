//! The sequential code matcher.

use toasty_effect_model::event::TimestampMs;
use toasty_effect_model::sequence::SequenceSpec;

/// How long a partial match survives without the next correct code (ms).
pub const DEFAULT_STEP_TIMEOUT_MS: u64 = 600;

/// Result of observing one input code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The full sequence was observed; the matcher has re-armed.
    Completed,
    /// The code matched and the cursor advanced.
    Advanced { cursor: usize },
    /// The code did not match; progress was discarded.
    ///
    /// The mismatching code is consumed: it never starts a new match,
    /// even when it equals the first element of the sequence.
    Reset,
    /// The spec is empty; no observation occurs.
    Disabled,
}

/// Recognizes one fixed ordered sequence of key codes.
///
/// Holds a single cursor in `0..=spec.len()` and at most one pending
/// timeout deadline, tied 1:1 to a non-zero cursor. The deadline is
/// cleared whenever the cursor changes for any reason.
#[derive(Debug)]
pub struct SequenceMatcher {
    spec: SequenceSpec,
    cursor: usize,
    deadline: Option<TimestampMs>,
    timeout_ms: u64,
}

impl SequenceMatcher {
    /// Create a matcher with the default per-step timeout.
    pub fn new(spec: SequenceSpec) -> Self {
        Self::with_timeout(spec, DEFAULT_STEP_TIMEOUT_MS)
    }

    /// Create a matcher with an explicit per-step timeout.
    pub fn with_timeout(spec: SequenceSpec, timeout_ms: u64) -> Self {
        Self {
            spec,
            cursor: 0,
            deadline: None,
            timeout_ms,
        }
    }

    /// Observe one input code at the given timestamp.
    ///
    /// An expired deadline is applied first, so a code arriving after
    /// the timeout is evaluated against the start of the sequence.
    pub fn observe(&mut self, code: u32, now: TimestampMs) -> MatchOutcome {
        if self.spec.is_empty() {
            return MatchOutcome::Disabled;
        }

        self.poll_timeout(now);

        if self.spec.code_at(self.cursor) == Some(code) {
            self.cursor += 1;
            if self.cursor == self.spec.len() {
                self.cursor = 0;
                self.deadline = None;
                tracing::debug!(code, len = self.spec.len(), "sequence completed");
                MatchOutcome::Completed
            } else {
                self.deadline = Some(now + self.timeout_ms);
                tracing::trace!(code, cursor = self.cursor, "sequence advanced");
                MatchOutcome::Advanced {
                    cursor: self.cursor,
                }
            }
        } else {
            // The wrong code both discards progress and is itself
            // consumed without being retried as a first element.
            self.cursor = 0;
            self.deadline = None;
            MatchOutcome::Reset
        }
    }

    /// Expire the pending deadline if `now` has reached it.
    ///
    /// Returns true if a partial match was discarded.
    pub fn poll_timeout(&mut self, now: TimestampMs) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                tracing::debug!(cursor = self.cursor, "sequence timed out");
                self.cursor = 0;
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Replace the sequence, discarding any partial progress.
    pub fn rebind(&mut self, spec: SequenceSpec) {
        self.spec = spec;
        self.cursor = 0;
        self.deadline = None;
    }

    /// Disable matching entirely. Equivalent to rebinding with an
    /// empty sequence.
    pub fn unbind(&mut self) {
        self.rebind(SequenceSpec::disabled());
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether matching is disabled (empty spec).
    pub fn is_disabled(&self) -> bool {
        self.spec.is_empty()
    }

    /// The active sequence.
    pub fn spec(&self) -> &SequenceSpec {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toasty_effect_model::sequence::KONAMI_CODE;

    fn feed(matcher: &mut SequenceMatcher, codes: &[u32], start: TimestampMs) -> usize {
        let mut completions = 0;
        for (i, &code) in codes.iter().enumerate() {
            if matcher.observe(code, start + i as u64 * 50) == MatchOutcome::Completed {
                completions += 1;
            }
        }
        completions
    }

    #[test]
    fn test_full_sequence_completes_once_and_rearms() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::konami());
        assert_eq!(feed(&mut matcher, &KONAMI_CODE, 0), 1);
        assert_eq!(matcher.cursor(), 0);

        // Re-armed: the same sequence triggers again.
        assert_eq!(feed(&mut matcher, &KONAMI_CODE, 10_000), 1);
    }

    #[test]
    fn test_mismatch_resets_progress() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![1, 2, 3]));
        assert_eq!(matcher.observe(1, 0), MatchOutcome::Advanced { cursor: 1 });
        assert_eq!(matcher.observe(9, 10), MatchOutcome::Reset);
        assert_eq!(matcher.cursor(), 0);
        // Progress does not continue from the old cursor.
        assert_eq!(matcher.observe(2, 20), MatchOutcome::Reset);
    }

    #[test]
    fn test_mismatching_first_element_is_consumed() {
        // Mid-match, receiving the sequence's own first code where it
        // does not belong discards progress AND the code itself.
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![1, 2, 3]));
        matcher.observe(1, 0);
        assert_eq!(matcher.observe(1, 10), MatchOutcome::Reset);
        assert_eq!(matcher.cursor(), 0);
        // The next 1 starts a fresh match.
        assert_eq!(matcher.observe(1, 20), MatchOutcome::Advanced { cursor: 1 });
    }

    #[test]
    fn test_timeout_discards_partial_match() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![1, 2]));
        matcher.observe(1, 0);
        assert_eq!(matcher.cursor(), 1);

        // 2 arrives exactly at the deadline: too late.
        assert_eq!(matcher.observe(2, DEFAULT_STEP_TIMEOUT_MS), MatchOutcome::Reset);
        assert_eq!(matcher.cursor(), 0);
    }

    #[test]
    fn test_input_within_timeout_keeps_progress() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![1, 2]));
        matcher.observe(1, 0);
        assert_eq!(
            matcher.observe(2, DEFAULT_STEP_TIMEOUT_MS - 1),
            MatchOutcome::Completed
        );
    }

    #[test]
    fn test_post_timeout_code_starts_fresh() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![1, 2]));
        matcher.observe(1, 0);
        // After the timeout, a first-element code begins a new match.
        assert_eq!(matcher.observe(1, 700), MatchOutcome::Advanced { cursor: 1 });
    }

    #[test]
    fn test_poll_timeout_resets_before_next_input() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![1, 2]));
        matcher.observe(1, 0);
        assert!(matcher.poll_timeout(600));
        assert_eq!(matcher.cursor(), 0);
        assert!(!matcher.poll_timeout(601));
    }

    #[test]
    fn test_empty_spec_disables_matching() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::disabled());
        assert!(matcher.is_disabled());
        assert_eq!(matcher.observe(1, 0), MatchOutcome::Disabled);
        assert_eq!(matcher.cursor(), 0);
    }

    #[test]
    fn test_rebind_discards_partial_progress() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![1, 2, 3]));
        matcher.observe(1, 0);
        matcher.observe(2, 10);
        assert_eq!(matcher.cursor(), 2);

        matcher.rebind(SequenceSpec::new(vec![3, 4]));
        assert_eq!(matcher.cursor(), 0);
        // Old progress is gone; the new spec matches from its start.
        assert_eq!(matcher.observe(3, 20), MatchOutcome::Advanced { cursor: 1 });
    }

    #[test]
    fn test_unbind_disables_matching() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![1, 2]));
        matcher.observe(1, 0);
        matcher.unbind();
        assert!(matcher.is_disabled());
        assert_eq!(matcher.observe(1, 10), MatchOutcome::Disabled);
    }

    #[test]
    fn test_single_step_sequence() {
        let mut matcher = SequenceMatcher::new(SequenceSpec::new(vec![7]));
        assert_eq!(matcher.observe(7, 0), MatchOutcome::Completed);
        assert_eq!(matcher.observe(7, 1), MatchOutcome::Completed);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn sequences() -> impl Strategy<Value = Vec<u32>> {
            proptest::collection::vec(0u32..200, 1..12)
        }

        proptest! {
            #[test]
            fn exact_sequence_always_completes_exactly_once(codes in sequences()) {
                let mut matcher = SequenceMatcher::new(SequenceSpec::new(codes.clone()));
                let completions = feed(&mut matcher, &codes, 0);
                prop_assert_eq!(completions, 1);
                prop_assert_eq!(matcher.cursor(), 0);
            }

            #[test]
            fn matcher_quirk_mismatch_never_restarts(
                codes in sequences(),
                k in 1usize..12,
            ) {
                // Build a sequence whose first element differs from the
                // element at position k, then inject the first element
                // at k: it must reset and be consumed, leaving the
                // cursor at 0, not 1.
                prop_assume!(codes.len() >= 2);
                let k = k % (codes.len() - 1) + 1;
                prop_assume!(codes[k] != codes[0]);

                let mut matcher = SequenceMatcher::new(SequenceSpec::new(codes.clone()));
                for (i, &code) in codes[..k].iter().enumerate() {
                    matcher.observe(code, i as u64 * 10);
                }
                prop_assert_eq!(matcher.cursor(), k);

                let outcome = matcher.observe(codes[0], k as u64 * 10);
                prop_assert_eq!(outcome, MatchOutcome::Reset);
                prop_assert_eq!(matcher.cursor(), 0);
            }

            #[test]
            fn wrong_code_mid_match_discards_progress(
                codes in sequences(),
                wrong in 500u32..600,
                k in 1usize..12,
            ) {
                prop_assume!(codes.len() >= 2);
                let k = k % (codes.len() - 1) + 1;

                let mut matcher = SequenceMatcher::new(SequenceSpec::new(codes.clone()));
                for (i, &code) in codes[..k].iter().enumerate() {
                    matcher.observe(code, i as u64 * 10);
                }
                matcher.observe(wrong, k as u64 * 10);
                prop_assert_eq!(matcher.cursor(), 0);
            }
        }
    }
}
