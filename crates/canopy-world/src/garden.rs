//! The planted-tree garden: check in, pick a country, plant, tend twice a day.
//!
//! Planting is gated on today's check-in and a selected country. Each seed
//! becomes a [`PlantedTree`] with its own [`TreeId`]; a country may hold any
//! number of trees. Trees level up once both the morning and evening slots
//! are filled. Every level-up brings back one more of the country's
//! wildlife (up to the size of its list), and the first maturity of each
//! tree pays the ledger award.

use std::collections::BTreeMap;

use canopy_types::{
    CountryRecord, GrowthStage, PlantedTree, RejectionReason, SpeciesProfile, StageView, TreeId,
    TwiceDailyGrowth, WateringSlot, Wildlife,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::checkin::CheckIn;
use crate::error::WorldError;
use crate::growth::{GrowthRules, WaterOutcome, water_twice_daily};
use crate::ledger::ForestLedger;

// ---------------------------------------------------------------------------
// Planting defaults
// ---------------------------------------------------------------------------

/// Fallback metadata for countries whose profile is missing or partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantingDefaults {
    /// Species name when the profile has none.
    pub species: String,
    /// Conservation status.
    pub status: String,
    /// Yearly carbon absorption in tonnes of CO2 equivalent.
    pub carbon_t_co2e_per_year: Decimal,
    /// Environmental benefits.
    pub env_benefits: Vec<String>,
    /// Environmental uses.
    pub env_uses: Vec<String>,
    /// Data source attribution.
    pub source: String,
}

impl Default for PlantingDefaults {
    fn default() -> Self {
        Self {
            species: "나무".to_owned(),
            status: "보전 대상".to_owned(),
            carbon_t_co2e_per_year: Decimal::new(2, 2),
            env_benefits: vec!["그늘 제공".to_owned(), "탄소흡수".to_owned()],
            env_uses: vec!["도시녹화".to_owned()],
            source: "Demo dataset".to_owned(),
        }
    }
}

impl PlantingDefaults {
    /// Build a fresh tree for `record`, planted at `now`.
    fn seed_tree(&self, record: &CountryRecord, now: DateTime<Utc>) -> PlantedTree {
        let empty = SpeciesProfile::default();
        let profile = record.profile.as_ref().unwrap_or(&empty);
        let species = profile
            .species
            .clone()
            .unwrap_or_else(|| self.species.clone());

        PlantedTree {
            id: TreeId::new(),
            planted_at: now,
            name: format!("{} – {species}", record.name),
            country: record.name.clone(),
            location: record.coordinates,
            species,
            scientific: profile.scientific.clone(),
            status: profile
                .status
                .clone()
                .unwrap_or_else(|| self.status.clone()),
            carbon_t_co2e_per_year: profile
                .carbon_t_co2e_per_year
                .unwrap_or(self.carbon_t_co2e_per_year),
            env_benefits: profile
                .env_benefits
                .clone()
                .unwrap_or_else(|| self.env_benefits.clone()),
            env_uses: profile
                .env_uses
                .clone()
                .unwrap_or_else(|| self.env_uses.clone()),
            image: profile.image.clone(),
            description: profile.description.clone(),
            source: profile
                .source
                .clone()
                .unwrap_or_else(|| self.source.clone()),
            height_m: profile.height_m,
            age_years: profile.age_years,
            last_updated: now.date_naive(),
            growth: TwiceDailyGrowth::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of a planting attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantOutcome {
    /// A new seed was planted.
    Planted(TreeId),
    /// A gate refused the planting. Nothing changed.
    Rejected(RejectionReason),
}

impl PlantOutcome {
    /// The new tree's id, if one was planted.
    pub const fn planted(&self) -> Option<TreeId> {
        match self {
            Self::Planted(id) => Some(*id),
            Self::Rejected(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Garden
// ---------------------------------------------------------------------------

/// Session state for the twice-daily policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    trees: BTreeMap<TreeId, PlantedTree>,
    check_in: CheckIn,
    selected_country: Option<String>,
    ledger: ForestLedger,
    wildlife_revealed: BTreeMap<String, usize>,
}

impl Garden {
    /// Create an empty garden with a restored check-in key.
    pub fn with_check_in(check_in: CheckIn) -> Self {
        Self {
            check_in,
            ..Self::default()
        }
    }

    /// Check in for `today`. Returns `false` if already checked in.
    pub fn check_in_today(&mut self, today: NaiveDate) -> bool {
        let fresh = self.check_in.check_in(today);
        if fresh {
            info!(%today, "Checked in");
        }
        fresh
    }

    /// Whether planting is unlocked for `today`.
    pub fn is_checked_in(&self, today: NaiveDate) -> bool {
        self.check_in.is_checked_in(today)
    }

    /// The stored check-in state.
    pub const fn check_in(&self) -> &CheckIn {
        &self.check_in
    }

    /// Select the country the next seed is planted in.
    pub fn select_country(&mut self, catalog: &Catalog, name: &str) -> Result<(), WorldError> {
        let record = catalog.require(name)?;
        self.selected_country = Some(record.name.clone());
        debug!(country = name, "Country selected");
        Ok(())
    }

    /// Currently selected country.
    pub fn selected_country(&self) -> Option<&str> {
        self.selected_country.as_deref()
    }

    /// Plant a seed in the selected country.
    ///
    /// Rejected with [`RejectionReason::NotCheckedIn`] unless checked in on
    /// `now`'s date, and with [`RejectionReason::NoCountrySelected`] when no
    /// country is selected. Existing trees are never replaced.
    pub fn plant_seed(
        &mut self,
        catalog: &Catalog,
        defaults: &PlantingDefaults,
        now: DateTime<Utc>,
    ) -> Result<PlantOutcome, WorldError> {
        if !self.check_in.is_checked_in(now.date_naive()) {
            debug!("Planting rejected: not checked in");
            return Ok(PlantOutcome::Rejected(RejectionReason::NotCheckedIn));
        }
        let Some(country) = self.selected_country.as_deref() else {
            debug!("Planting rejected: no country selected");
            return Ok(PlantOutcome::Rejected(RejectionReason::NoCountrySelected));
        };

        let record = catalog.require(country)?;
        let tree = defaults.seed_tree(record, now);
        let id = tree.id;
        info!(%id, country = record.name, species = tree.species, "Seed planted");
        self.trees.insert(id, tree);
        Ok(PlantOutcome::Planted(id))
    }

    /// Fill one care slot of tree `id`.
    ///
    /// If the maturity award cannot be recorded the tree's growth is
    /// restored and the error returned; nothing else changes.
    pub fn water(
        &mut self,
        catalog: &Catalog,
        id: TreeId,
        slot: WateringSlot,
        rules: &GrowthRules,
    ) -> Result<WaterOutcome, WorldError> {
        let tree = self.trees.get_mut(&id).ok_or(WorldError::UnknownTree(id))?;
        let before = tree.growth.clone();
        let outcome = water_twice_daily(&mut tree.growth, slot);

        let Some(level_up) = outcome.level_up() else {
            if let Some(reason) = outcome.rejection() {
                debug!(%id, ?slot, ?reason, "Watering rejected");
            }
            return Ok(outcome);
        };

        let country = tree.country.clone();
        let record = catalog.get(&country);

        if outcome.awards_maturity() {
            let line = match record {
                Some(r) => r.roster_line(GrowthStage::Mature.glyph()),
                None => format!("{country} {}", GrowthStage::Mature.glyph()),
            };
            match self.ledger.award(line, rules.maturity_bonus) {
                Ok(score) => info!(%id, country, score, "Tree matured, added to forest"),
                Err(err) => {
                    tree.growth = before;
                    warn!(%id, country, %err, "Maturity award failed, watering undone");
                    return Err(err);
                }
            }
        }
        info!(%id, country, from = ?level_up.from, to = ?level_up.to, "Tree grew");

        if let Some(record) = record
            && !record.wildlife.is_empty()
        {
            let count = self.wildlife_revealed.entry(country.clone()).or_insert(0);
            *count = count.saturating_add(1).min(record.wildlife.len());
            debug!(country, revealed = *count, "Wildlife returned");
        }

        Ok(outcome)
    }

    /// Current stage of tree `id`, drawn from the generic glyph table.
    pub fn query_stage(&self, id: TreeId) -> Result<StageView, WorldError> {
        let tree = self.tree(id)?;
        let stage = tree.growth.stage;
        Ok(StageView::new(stage, stage.glyph()))
    }

    /// Tree `id`.
    pub fn tree(&self, id: TreeId) -> Result<&PlantedTree, WorldError> {
        self.trees.get(&id).ok_or(WorldError::UnknownTree(id))
    }

    /// All trees in planting order.
    pub fn trees(&self) -> impl Iterator<Item = &PlantedTree> {
        self.trees.values()
    }

    /// Trees planted in `country`.
    pub fn trees_in<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a PlantedTree> {
        self.trees.values().filter(move |t| t.country == country)
    }

    /// Revealed wildlife count per country. Countries with nothing revealed
    /// are absent.
    pub const fn wildlife_revealed(&self) -> &BTreeMap<String, usize> {
        &self.wildlife_revealed
    }

    /// The wildlife of `country` revealed so far, in catalog order.
    pub fn revealed_wildlife<'a>(&self, catalog: &'a Catalog, country: &str) -> &'a [Wildlife] {
        let count = self.wildlife_revealed.get(country).copied().unwrap_or(0);
        catalog
            .get(country)
            .and_then(|r| r.wildlife.get(..count.min(r.wildlife.len())))
            .unwrap_or(&[])
    }

    /// Score and roster.
    pub const fn ledger(&self) -> &ForestLedger {
        &self.ledger
    }

    /// Current score.
    pub const fn score(&self) -> u32 {
        self.ledger.score()
    }

    /// "My forest" roster lines.
    pub fn roster(&self) -> &[String] {
        self.ledger.roster()
    }
}
