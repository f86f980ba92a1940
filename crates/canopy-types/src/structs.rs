//! Core data structs: catalog records, growth entries, and planted trees.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{GrowthStage, WateringSlot};
use crate::ids::TreeId;

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A point on the map, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinates {
    /// Build a coordinate pair.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A wildlife species that returns to a country's forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Wildlife {
    /// Emoji shown before the name.
    pub symbol: String,
    /// Common name.
    pub name: String,
    /// Optional one-line description.
    pub description: Option<String>,
}

impl Wildlife {
    /// Display form: `"<symbol> <name>"`.
    pub fn display(&self) -> String {
        format!("{} {}", self.symbol, self.name)
    }
}

/// Species metadata for a country's representative tree.
///
/// Every field is optional because the hand-authored tables are uneven.
/// Planting fills gaps from configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SpeciesProfile {
    /// Common species name.
    pub species: Option<String>,
    /// Scientific name.
    pub scientific: Option<String>,
    /// Estimated yearly carbon absorption in tonnes of CO2 equivalent.
    #[ts(as = "Option<String>")]
    pub carbon_t_co2e_per_year: Option<Decimal>,
    /// Image URL.
    pub image: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Environmental benefits.
    pub env_benefits: Option<Vec<String>>,
    /// Environmental uses and conservation points.
    pub env_uses: Option<Vec<String>>,
    /// Conservation status.
    pub status: Option<String>,
    /// Data source attribution.
    pub source: Option<String>,
    /// Typical height in metres.
    pub height_m: Option<u32>,
    /// Typical age in years.
    pub age_years: Option<u32>,
}

/// An immutable, preloaded catalog entry for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CountryRecord {
    /// Unique country name (catalog key).
    pub name: String,
    /// Approximate centre of the country.
    pub coordinates: Coordinates,
    /// Display glyph for each growth stage, seed first.
    pub stage_glyphs: [String; 4],
    /// Description of the representative tree species.
    pub species_description: String,
    /// Wildlife that returns as trees grow. The first entry is featured.
    pub wildlife: Vec<Wildlife>,
    /// Optional species metadata used when planting.
    pub profile: Option<SpeciesProfile>,
}

impl CountryRecord {
    /// Glyph for the given stage.
    pub fn glyph(&self, stage: GrowthStage) -> &str {
        self.stage_glyphs
            .get(usize::from(stage.index()))
            .map_or_else(|| stage.glyph(), String::as_str)
    }

    /// Glyph shown once the tree is fully grown.
    pub fn mature_glyph(&self) -> &str {
        self.glyph(GrowthStage::Mature)
    }

    /// The featured wildlife, if the country lists any.
    pub fn featured_wildlife(&self) -> Option<&Wildlife> {
        self.wildlife.first()
    }

    /// Line appended to the forest roster when a tree of this country matures.
    pub fn roster_line(&self, mature_glyph: &str) -> String {
        match self.featured_wildlife() {
            Some(w) => format!("{} {} {}", self.name, mature_glyph, w.display()),
            None => format!("{} {}", self.name, mature_glyph),
        }
    }
}

// ---------------------------------------------------------------------------
// Growth entries
// ---------------------------------------------------------------------------

/// Growth state under the daily-cap policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DailyGrowth {
    /// Current growth stage.
    pub stage: GrowthStage,
    /// Date of the most recent successful watering.
    pub last_watered: Option<NaiveDate>,
    /// Whether the maturity award has been paid out for this entry.
    pub maturity_awarded: bool,
}

/// Growth state under the twice-daily policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TwiceDailyGrowth {
    /// Current growth stage.
    pub stage: GrowthStage,
    /// Morning slot filled in the current growth cycle.
    pub morning_watered: bool,
    /// Evening slot filled in the current growth cycle.
    pub evening_watered: bool,
    /// Whether the maturity award has been paid out for this entry.
    pub maturity_awarded: bool,
}

impl TwiceDailyGrowth {
    /// Whether the given slot is already filled.
    pub const fn is_filled(&self, slot: WateringSlot) -> bool {
        match slot {
            WateringSlot::Morning => self.morning_watered,
            WateringSlot::Evening => self.evening_watered,
        }
    }
}

// ---------------------------------------------------------------------------
// Planted trees
// ---------------------------------------------------------------------------

/// A tree planted in the garden.
///
/// Metadata is copied from the country's [`SpeciesProfile`] at planting
/// time, so later catalog edits never change existing trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlantedTree {
    /// Stable identity.
    pub id: TreeId,
    /// When the seed was planted.
    pub planted_at: DateTime<Utc>,
    /// Display name: `"<country> – <species>"`.
    pub name: String,
    /// Catalog country name.
    pub country: String,
    /// Marker position.
    pub location: Coordinates,
    /// Common species name.
    pub species: String,
    /// Scientific name.
    pub scientific: Option<String>,
    /// Conservation status.
    pub status: String,
    /// Estimated yearly carbon absorption in tonnes of CO2 equivalent.
    #[ts(as = "String")]
    pub carbon_t_co2e_per_year: Decimal,
    /// Environmental benefits.
    pub env_benefits: Vec<String>,
    /// Environmental uses.
    pub env_uses: Vec<String>,
    /// Image URL.
    pub image: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Data source attribution.
    pub source: String,
    /// Typical height in metres.
    pub height_m: Option<u32>,
    /// Typical age in years.
    pub age_years: Option<u32>,
    /// Date the seed was planted (record creation).
    pub last_updated: NaiveDate,
    /// Growth state.
    pub growth: TwiceDailyGrowth,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Read-only view of an entry's growth, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StageView {
    /// Current stage.
    pub stage: GrowthStage,
    /// Glyph to draw for the stage.
    pub glyph: String,
    /// Stage label.
    pub label: String,
}

impl StageView {
    /// Build a view from a stage and its glyph.
    pub fn new(stage: GrowthStage, glyph: &str) -> Self {
        Self {
            stage,
            glyph: glyph.to_owned(),
            label: stage.label().to_owned(),
        }
    }
}
