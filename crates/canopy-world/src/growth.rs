//! The tree growth and watering state machine.
//!
//! Stages run `Seed -> Sprout -> Sapling -> Mature`, one step per level-up,
//! never backwards. Two watering policies drive the transitions:
//!
//! - **Daily cap**: one successful watering per calendar day, each advancing
//!   one stage.
//! - **Twice daily**: a morning and an evening slot. Once both are filled the
//!   tree levels up and both slots clear for the next cycle.
//!
//! A level-up that reaches [`GrowthStage::Mature`] for the first time is
//! flagged with `first_maturity`. Callers pay out the score and roster award
//! on that flag only, which makes the award exactly-once per entry.
//!
//! Everything here is pure: no clock, no I/O. "Today" is passed in.

use canopy_types::{DailyGrowth, GrowthStage, RejectionReason, TwiceDailyGrowth, WateringSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Score awarded when an entry first reaches maturity.
pub const MATURITY_BONUS: u32 = 10;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Tunable growth rules shared by both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRules {
    /// Score added on first maturity.
    pub maturity_bonus: u32,
    /// Reject a second daily-cap watering on the same date. When disabled
    /// every tap advances one stage.
    pub enforce_daily_cap: bool,
}

impl Default for GrowthRules {
    fn default() -> Self {
        Self {
            maturity_bonus: MATURITY_BONUS,
            enforce_daily_cap: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// A single-stage transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// Stage before the watering.
    pub from: GrowthStage,
    /// Stage after the watering (always `from.next()`).
    pub to: GrowthStage,
    /// True exactly once per entry: the first time it reaches maturity.
    pub first_maturity: bool,
}

/// Result of one watering call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterOutcome {
    /// A gate refused the watering. Nothing changed.
    Rejected(RejectionReason),
    /// The watering was recorded but the stage did not change.
    Watered,
    /// The entry advanced one stage.
    LeveledUp(LevelUp),
}

impl WaterOutcome {
    /// The level-up, if one happened.
    pub const fn level_up(&self) -> Option<&LevelUp> {
        match self {
            Self::LeveledUp(level_up) => Some(level_up),
            Self::Rejected(_) | Self::Watered => None,
        }
    }

    /// Whether this call should trigger the maturity award.
    pub const fn awards_maturity(&self) -> bool {
        matches!(
            self,
            Self::LeveledUp(LevelUp {
                first_maturity: true,
                ..
            })
        )
    }

    /// The rejection reason, if the call was refused.
    pub const fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::Watered | Self::LeveledUp(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Advance one stage and settle the first-maturity flag.
fn advance(stage: &mut GrowthStage, maturity_awarded: &mut bool) -> WaterOutcome {
    let Some(next) = stage.next() else {
        return WaterOutcome::Rejected(RejectionReason::AlreadyMature);
    };
    let from = *stage;
    *stage = next;

    let first_maturity = next.is_mature() && !*maturity_awarded;
    if first_maturity {
        *maturity_awarded = true;
    }

    WaterOutcome::LeveledUp(LevelUp {
        from,
        to: next,
        first_maturity,
    })
}

/// Water an entry under the daily-cap policy.
///
/// # Order of checks
///
/// 1. Mature entries are terminal and reject every watering.
/// 2. With `enforce_cap`, a second watering on `today` is rejected.
/// 3. Otherwise the date is recorded and the entry advances one stage.
pub fn water_daily(growth: &mut DailyGrowth, today: NaiveDate, enforce_cap: bool) -> WaterOutcome {
    if growth.stage.is_mature() {
        return WaterOutcome::Rejected(RejectionReason::AlreadyMature);
    }
    if enforce_cap && growth.last_watered == Some(today) {
        return WaterOutcome::Rejected(RejectionReason::AlreadyWateredToday);
    }

    growth.last_watered = Some(today);
    advance(&mut growth.stage, &mut growth.maturity_awarded)
}

/// Fill one slot of an entry under the twice-daily policy.
///
/// The level-up check runs after every single-slot update: when both slots
/// are filled the entry advances one stage and both slots reset.
pub fn water_twice_daily(growth: &mut TwiceDailyGrowth, slot: WateringSlot) -> WaterOutcome {
    if growth.stage.is_mature() {
        return WaterOutcome::Rejected(RejectionReason::AlreadyMature);
    }
    if growth.is_filled(slot) {
        return WaterOutcome::Rejected(RejectionReason::SlotAlreadyFilled);
    }

    match slot {
        WateringSlot::Morning => growth.morning_watered = true,
        WateringSlot::Evening => growth.evening_watered = true,
    }

    if growth.morning_watered && growth.evening_watered {
        growth.morning_watered = false;
        growth.evening_watered = false;
        return advance(&mut growth.stage, &mut growth.maturity_awarded);
    }

    WaterOutcome::Watered
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
