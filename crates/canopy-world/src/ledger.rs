//! The forest ledger: planet score and the "my forest" roster.
//!
//! Both only grow. One roster line and one score bonus are recorded each
//! time an entry first reaches maturity.

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Score and roster accumulated over a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestLedger {
    score: u32,
    roster: Vec<String>,
}

impl ForestLedger {
    /// Create an empty ledger.
    pub const fn new() -> Self {
        Self {
            score: 0,
            roster: Vec::new(),
        }
    }

    /// Record a matured tree: add `bonus` to the score and append `line`.
    ///
    /// Returns the new score. On overflow nothing is recorded.
    pub fn award(&mut self, line: String, bonus: u32) -> Result<u32, WorldError> {
        let score = self
            .score
            .checked_add(bonus)
            .ok_or(WorldError::ArithmeticOverflow)?;
        self.score = score;
        self.roster.push(line);
        Ok(score)
    }

    /// Current score.
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Roster lines in the order trees matured.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Score as a fraction of `target`, clamped to `0.0..=1.0`.
    pub fn progress(&self, target: u32) -> f64 {
        if target == 0 {
            return 1.0;
        }
        (f64::from(self.score) / f64::from(target)).min(1.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn award_adds_bonus_and_line() {
        let mut ledger = ForestLedger::new();
        let score = ledger.award("대한민국 🌳 🦌 고라니".to_owned(), 10).unwrap();
        assert_eq!(score, 10);
        assert_eq!(ledger.roster(), ["대한민국 🌳 🦌 고라니".to_owned()]);
    }

    #[test]
    fn roster_keeps_maturity_order() {
        let mut ledger = ForestLedger::new();
        ledger.award("a".to_owned(), 10).unwrap();
        ledger.award("b".to_owned(), 10).unwrap();
        assert_eq!(ledger.score(), 20);
        assert_eq!(ledger.roster(), ["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn overflow_leaves_ledger_untouched() {
        let mut ledger = ForestLedger::new();
        ledger.award("a".to_owned(), u32::MAX).unwrap();
        assert!(matches!(
            ledger.award("b".to_owned(), 1),
            Err(WorldError::ArithmeticOverflow)
        ));
        assert_eq!(ledger.score(), u32::MAX);
        assert_eq!(ledger.roster().len(), 1);
    }

    #[test]
    fn progress_is_clamped() {
        let mut ledger = ForestLedger::new();
        assert!(ledger.progress(100) < f64::EPSILON);
        ledger.award("a".to_owned(), 150).unwrap();
        assert!((ledger.progress(100) - 1.0).abs() < f64::EPSILON);
    }
}
