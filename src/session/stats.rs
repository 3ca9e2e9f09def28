//! Per-run statistics, kept in memory only

use crate::core::MatchResult;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub puzzles_started: usize,
    pub puzzles_won: usize,
    pub mismatches: usize,
}

impl Statistics {
    pub fn record_start(&mut self) {
        self.puzzles_started += 1;
    }

    /// Count a verdict; undetermined results are ignored
    pub fn record_result(&mut self, result: MatchResult) {
        match result {
            MatchResult::Win => self.puzzles_won += 1,
            MatchResult::Mismatch => self.mismatches += 1,
            MatchResult::Undetermined => {}
        }
    }

    /// Share of started puzzles that were won, in percent
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.puzzles_started == 0 {
            0.0
        } else {
            self.puzzles_won as f64 / self.puzzles_started as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_verdicts() {
        let mut stats = Statistics::default();
        stats.record_start();
        stats.record_result(MatchResult::Mismatch);
        stats.record_result(MatchResult::Undetermined);
        stats.record_result(MatchResult::Win);
        stats.record_start();

        assert_eq!(stats.puzzles_started, 2);
        assert_eq!(stats.puzzles_won, 1);
        assert_eq!(stats.mismatches, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_win_rate() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
