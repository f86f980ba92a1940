//! The daily-cap forest: one tree per catalog country, watered once a day.
//!
//! Every country starts with a seed, so there is no planting step. Each
//! successful watering advances one stage. When a country's tree first
//! matures the ledger gains the bonus and a roster line built from the
//! country's mature glyph and featured animal.

use std::collections::BTreeMap;

use canopy_types::{DailyGrowth, StageView};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::WorldError;
use crate::growth::{GrowthRules, WaterOutcome, water_daily};
use crate::ledger::ForestLedger;

/// Session state for the daily-cap policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForest {
    entries: BTreeMap<String, DailyGrowth>,
    ledger: ForestLedger,
}

impl DailyForest {
    /// Create a forest with one seed per catalog country.
    pub fn new(catalog: &Catalog) -> Self {
        let entries = catalog
            .names()
            .map(|name| (name.to_owned(), DailyGrowth::default()))
            .collect();
        Self {
            entries,
            ledger: ForestLedger::new(),
        }
    }

    /// Water the tree of `country` on `today`.
    ///
    /// Gating rejections come back as [`WaterOutcome::Rejected`]. An unknown
    /// country is a contract violation and returns an error. If the maturity
    /// award cannot be recorded the entry is restored and the error returned,
    /// so the watering can be retried.
    pub fn water(
        &mut self,
        catalog: &Catalog,
        country: &str,
        today: NaiveDate,
        rules: &GrowthRules,
    ) -> Result<WaterOutcome, WorldError> {
        let record = catalog.require(country)?;
        let entry = self
            .entries
            .get_mut(country)
            .ok_or_else(|| WorldError::UnknownCountry(country.to_owned()))?;

        let before = entry.clone();
        let outcome = water_daily(entry, today, rules.enforce_daily_cap);

        if outcome.awards_maturity() {
            let line = record.roster_line(record.mature_glyph());
            match self.ledger.award(line, rules.maturity_bonus) {
                Ok(score) => info!(country, score, "Tree matured, added to forest"),
                Err(err) => {
                    *entry = before;
                    warn!(country, %err, "Maturity award failed, watering undone");
                    return Err(err);
                }
            }
        }

        match &outcome {
            WaterOutcome::Rejected(reason) => {
                debug!(country, ?reason, "Watering rejected");
            }
            WaterOutcome::Watered => {}
            WaterOutcome::LeveledUp(level_up) => {
                info!(country, from = ?level_up.from, to = ?level_up.to, "Tree grew");
            }
        }

        Ok(outcome)
    }

    /// Current stage and country-specific glyph of `country`'s tree.
    pub fn query_stage(&self, catalog: &Catalog, country: &str) -> Result<StageView, WorldError> {
        let record = catalog.require(country)?;
        let entry = self.entry(country)?;
        Ok(StageView::new(entry.stage, record.glyph(entry.stage)))
    }

    /// Growth entry of `country`.
    pub fn entry(&self, country: &str) -> Result<&DailyGrowth, WorldError> {
        self.entries
            .get(country)
            .ok_or_else(|| WorldError::UnknownCountry(country.to_owned()))
    }

    /// Whether `country` can still be watered on `today`.
    pub fn can_water(&self, country: &str, today: NaiveDate, rules: &GrowthRules) -> bool {
        self.entries.get(country).is_some_and(|e| {
            !e.stage.is_mature() && (!rules.enforce_daily_cap || e.last_watered != Some(today))
        })
    }

    /// All entries keyed by country name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DailyGrowth)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
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
