//! Enumeration types for the Canopy virtual forest.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Growth stages
// ---------------------------------------------------------------------------

/// Generic stage glyphs used for planted trees, indexed by stage.
pub const STAGE_GLYPHS: [&str; 4] = ["🌱", "🌿", "🌳", "🌲"];

/// A discrete growth level of a tree.
///
/// Stages only ever move forward, one step at a time. [`GrowthStage::Mature`]
/// is terminal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    /// Freshly planted seed (index 0).
    #[default]
    Seed,
    /// First shoots (index 1).
    Sprout,
    /// Young tree (index 2).
    Sapling,
    /// Fully grown tree (index 3). No further growth.
    Mature,
}

impl GrowthStage {
    /// All stages in growth order.
    pub const ALL: [Self; 4] = [Self::Seed, Self::Sprout, Self::Sapling, Self::Mature];

    /// Numeric index of the stage, `0..=3`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Seed => 0,
            Self::Sprout => 1,
            Self::Sapling => 2,
            Self::Mature => 3,
        }
    }

    /// Stage for a numeric index, or `None` if the index is out of range.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Seed),
            1 => Some(Self::Sprout),
            2 => Some(Self::Sapling),
            3 => Some(Self::Mature),
            _ => None,
        }
    }

    /// The stage that follows this one, or `None` at [`GrowthStage::Mature`].
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Seed => Some(Self::Sprout),
            Self::Sprout => Some(Self::Sapling),
            Self::Sapling => Some(Self::Mature),
            Self::Mature => None,
        }
    }

    /// Whether this is the terminal stage.
    pub const fn is_mature(self) -> bool {
        matches!(self, Self::Mature)
    }

    /// Glyph from the generic 4-level emoji table.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Seed => STAGE_GLYPHS[0],
            Self::Sprout => STAGE_GLYPHS[1],
            Self::Sapling => STAGE_GLYPHS[2],
            Self::Mature => STAGE_GLYPHS[3],
        }
    }

    /// Display label shown next to the glyph.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seed => "씨앗",
            Self::Sprout => "새싹",
            Self::Sapling => "어린 나무",
            Self::Mature => "큰 나무",
        }
    }
}

// ---------------------------------------------------------------------------
// Watering
// ---------------------------------------------------------------------------

/// One of the two daily care slots of the twice-daily policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum WateringSlot {
    /// Morning watering.
    Morning,
    /// Evening fertilising.
    Evening,
}

impl WateringSlot {
    /// Parse a slot name as typed by a user (`morning` / `evening`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" | "am" => Some(Self::Morning),
            "evening" | "pm" => Some(Self::Evening),
            _ => None,
        }
    }
}

/// Which watering rule a forest follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// One watering per entry per calendar day, each advancing one stage.
    /// Every catalog country has a tree from the start.
    #[default]
    DailyCap,
    /// Trees are planted after a daily check-in and level up once both the
    /// morning and evening slots are filled.
    TwiceDaily,
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

/// Why an action was refused by a gate.
///
/// These are expected outcomes, not errors. The presentation layer decides
/// how to surface them (usually a disabled button or a short notice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The entry was already watered on this calendar day.
    AlreadyWateredToday,
    /// The requested morning/evening slot is already filled.
    SlotAlreadyFilled,
    /// The tree is fully grown.
    AlreadyMature,
    /// Planting requires today's check-in.
    NotCheckedIn,
    /// Planting requires a selected country.
    NoCountrySelected,
    /// The action does not apply to the active growth policy.
    WrongPolicy,
}

impl RejectionReason {
    /// Short user-facing message.
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyWateredToday => "오늘은 이미 물을 줬습니다. 내일 다시 와주세요 🌞",
            Self::SlotAlreadyFilled => "이미 채운 항목입니다.",
            Self::AlreadyMature => "이미 큰 나무로 자랐습니다.",
            Self::NotCheckedIn => "먼저 오늘의 출석체크를 해주세요.",
            Self::NoCountrySelected => "먼저 나라를 선택해주세요.",
            Self::WrongPolicy => "이 숲에서는 사용할 수 없는 동작입니다.",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip_covers_all_stages() {
        for stage in GrowthStage::ALL {
            assert_eq!(GrowthStage::from_index(stage.index()), Some(stage));
        }
        assert_eq!(GrowthStage::from_index(4), None);
    }

    #[test]
    fn next_advances_exactly_one_step() {
        assert_eq!(GrowthStage::Seed.next(), Some(GrowthStage::Sprout));
        assert_eq!(GrowthStage::Sprout.next(), Some(GrowthStage::Sapling));
        assert_eq!(GrowthStage::Sapling.next(), Some(GrowthStage::Mature));
        assert_eq!(GrowthStage::Mature.next(), None);
    }

    #[test]
    fn stages_are_ordered() {
        assert!(GrowthStage::Seed < GrowthStage::Sprout);
        assert!(GrowthStage::Sapling < GrowthStage::Mature);
        assert!(GrowthStage::Mature.is_mature());
        assert!(!GrowthStage::Sapling.is_mature());
    }

    #[test]
    fn glyph_table_matches_stage_index() {
        assert_eq!(GrowthStage::Seed.glyph(), "🌱");
        assert_eq!(GrowthStage::Mature.glyph(), "🌲");
    }

    #[test]
    fn slot_parse_is_case_insensitive() {
        assert_eq!(WateringSlot::parse("Morning"), Some(WateringSlot::Morning));
        assert_eq!(WateringSlot::parse(" evening "), Some(WateringSlot::Evening));
        assert_eq!(WateringSlot::parse("noon"), None);
    }

    #[test]
    fn policy_serializes_snake_case() {
        let json = serde_json::to_string(&GrowthPolicy::TwiceDaily).unwrap();
        assert_eq!(json, "\"twice_daily\"");
    }
}
