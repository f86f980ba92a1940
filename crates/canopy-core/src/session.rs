//! A play session: the presentation layer's single entry point.
//!
//! The presentation layer turns user gestures into [`Action`]s and hands
//! them to [`Session::apply`]. The session routes each action to the active
//! forest, persists the check-in key, and reports an [`ActionResult`] the
//! UI can render. Gating rejections are ordinary results; only contract
//! violations (unknown country or tree, missing slot) are errors.
//!
//! State transitions are instantaneous. Any "growing..." animation belongs
//! to the caller and runs after `apply` returns.

use canopy_types::{GrowthPolicy, RejectionReason, StageView, TreeId, WateringSlot};
use canopy_world::{
    Catalog, CheckIn, DailyForest, ForestLedger, Garden, GrowthRules, LevelUp, PlantOutcome,
    PlantingDefaults, WaterOutcome, WorldError, daily_atlas, garden_atlas,
};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::config::CanopyConfig;
use crate::store::{CheckInStore, FileCheckInStore, MemoryCheckInStore};

/// Errors that can occur while applying an action.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The state machine reported a contract violation.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// Twice-daily watering was requested without a slot.
    #[error("watering a planted tree requires a morning or evening slot")]
    MissingSlot,
}

/// What a watering action is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaterTarget {
    /// A country's tree in the daily-cap forest.
    Country(String),
    /// A planted tree in the garden.
    Tree(TreeId),
}

/// A user gesture dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Daily check-in.
    CheckIn,
    /// Choose the country for the next seed.
    SelectCountry(String),
    /// Plant a seed in the selected country.
    PlantSeed,
    /// Water a tree.
    Water {
        /// Tree to water.
        target: WaterTarget,
        /// Care slot. Required in the garden, ignored in the daily forest.
        slot: Option<WateringSlot>,
    },
}

/// What happened, for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Checked in for the given date.
    CheckedIn(NaiveDate),
    /// Nothing to do (for example a repeated check-in).
    Unchanged,
    /// A country was selected.
    Selected(String),
    /// A seed was planted.
    Planted(TreeId),
    /// The watering was recorded without a level-up.
    Watered(StageView),
    /// The tree advanced one stage.
    Grew {
        /// Stage after the level-up.
        view: StageView,
        /// The transition.
        level_up: LevelUp,
        /// Score after any maturity award.
        score: u32,
        /// Wildlife revealed for the tree's country, garden only.
        wildlife_revealed: Option<usize>,
    },
    /// A gate refused the action.
    Rejected(RejectionReason),
}

/// The forest behind a session.
#[derive(Debug, Clone)]
pub enum Forest {
    /// Daily-cap forest.
    Daily(DailyForest),
    /// Twice-daily garden.
    Garden(Garden),
}

impl Forest {
    /// Score and roster of the active forest.
    pub const fn ledger(&self) -> &ForestLedger {
        match self {
            Self::Daily(forest) => forest.ledger(),
            Self::Garden(garden) => garden.ledger(),
        }
    }

    /// The daily-cap forest, if that is the active policy.
    pub const fn as_daily(&self) -> Option<&DailyForest> {
        match self {
            Self::Daily(forest) => Some(forest),
            Self::Garden(_) => None,
        }
    }

    /// The garden, if that is the active policy.
    pub const fn as_garden(&self) -> Option<&Garden> {
        match self {
            Self::Garden(garden) => Some(garden),
            Self::Daily(_) => None,
        }
    }

    /// Growth policy of the active forest.
    pub const fn policy(&self) -> GrowthPolicy {
        match self {
            Self::Daily(_) => GrowthPolicy::DailyCap,
            Self::Garden(_) => GrowthPolicy::TwiceDaily,
        }
    }
}

/// Session state owned by the presentation layer.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    forest: Forest,
    rules: GrowthRules,
    planting: PlantingDefaults,
    store: Box<dyn CheckInStore>,
}

impl Session {
    /// Build a session from configuration, choosing the atlas and the
    /// check-in store it names.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::World`] if the built-in atlas is malformed.
    pub fn from_config(config: &CanopyConfig) -> Result<Self, SessionError> {
        let catalog = match config.session.policy {
            GrowthPolicy::DailyCap => daily_atlas()?,
            GrowthPolicy::TwiceDaily => garden_atlas()?,
        };
        let store: Box<dyn CheckInStore> = match &config.checkin.store_path {
            Some(path) => Box::new(FileCheckInStore::new(path)),
            None => Box::new(MemoryCheckInStore::new()),
        };
        Ok(Self::new(
            config.session.policy,
            catalog,
            config.growth.rules(),
            config.planting.clone(),
            store,
        ))
    }

    /// Build a session over an explicit catalog and store.
    ///
    /// The check-in key is restored from `store`. An unreadable store is
    /// logged and treated as "not checked in".
    pub fn new(
        policy: GrowthPolicy,
        catalog: Catalog,
        rules: GrowthRules,
        planting: PlantingDefaults,
        store: Box<dyn CheckInStore>,
    ) -> Self {
        let forest = match policy {
            GrowthPolicy::DailyCap => Forest::Daily(DailyForest::new(&catalog)),
            GrowthPolicy::TwiceDaily => {
                let restored = match store.load() {
                    Ok(date) => date,
                    Err(err) => {
                        warn!(%err, "Could not restore check-in, starting unchecked");
                        None
                    }
                };
                Forest::Garden(Garden::with_check_in(CheckIn::from_date(restored)))
            }
        };
        info!(?policy, countries = catalog.len(), "Session started");
        Self {
            catalog,
            forest,
            rules,
            planting,
            store,
        }
    }

    /// Apply one action at time `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] for contract violations only.
    pub fn apply(&mut self, action: Action, now: DateTime<Utc>) -> Result<ActionResult, SessionError> {
        debug!(?action, "Applying action");
        let today = now.date_naive();

        match (&mut self.forest, action) {
            (Forest::Garden(garden), Action::CheckIn) => {
                if !garden.check_in_today(today) {
                    return Ok(ActionResult::Unchanged);
                }
                if let Err(err) = self.store.save(today) {
                    warn!(%err, "Could not persist check-in");
                }
                Ok(ActionResult::CheckedIn(today))
            }
            (Forest::Garden(garden), Action::SelectCountry(name)) => {
                garden.select_country(&self.catalog, &name)?;
                Ok(ActionResult::Selected(name))
            }
            (Forest::Garden(garden), Action::PlantSeed) => {
                match garden.plant_seed(&self.catalog, &self.planting, now)? {
                    PlantOutcome::Planted(id) => Ok(ActionResult::Planted(id)),
                    PlantOutcome::Rejected(reason) => Ok(ActionResult::Rejected(reason)),
                }
            }
            (
                Forest::Garden(garden),
                Action::Water {
                    target: WaterTarget::Tree(id),
                    slot,
                },
            ) => {
                let slot = slot.ok_or(SessionError::MissingSlot)?;
                let outcome = garden.water(&self.catalog, id, slot, &self.rules)?;
                let view = garden.query_stage(id)?;
                let revealed = garden
                    .tree(id)
                    .ok()
                    .and_then(|t| garden.wildlife_revealed().get(&t.country).copied());
                Ok(Self::water_result(outcome, view, garden.score(), revealed))
            }
            (
                Forest::Daily(forest),
                Action::Water {
                    target: WaterTarget::Country(country),
                    ..
                },
            ) => {
                let outcome = forest.water(&self.catalog, &country, today, &self.rules)?;
                let view = forest.query_stage(&self.catalog, &country)?;
                Ok(Self::water_result(outcome, view, forest.score(), None))
            }
            (_, action) => {
                debug!(?action, "Action does not apply to this forest");
                Ok(ActionResult::Rejected(RejectionReason::WrongPolicy))
            }
        }
    }

    fn water_result(
        outcome: WaterOutcome,
        view: StageView,
        score: u32,
        wildlife_revealed: Option<usize>,
    ) -> ActionResult {
        match outcome {
            WaterOutcome::Rejected(reason) => ActionResult::Rejected(reason),
            WaterOutcome::Watered => ActionResult::Watered(view),
            WaterOutcome::LeveledUp(level_up) => ActionResult::Grew {
                view,
                level_up,
                score,
                wildlife_revealed,
            },
        }
    }

    /// The read-only country catalog.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active forest.
    pub const fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Growth policy of the session.
    pub const fn policy(&self) -> GrowthPolicy {
        self.forest.policy()
    }

    /// Growth rules in force.
    pub const fn rules(&self) -> &GrowthRules {
        &self.rules
    }

    /// Current score.
    pub const fn score(&self) -> u32 {
        self.forest.ledger().score()
    }

    /// "My forest" roster.
    pub fn roster(&self) -> &[String] {
        self.forest.ledger().roster()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use canopy_types::GrowthStage;
    use chrono::TimeZone;

    use super::*;

    fn at(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 12, 0, 0).single().unwrap()
    }

    fn daily_session() -> Session {
        Session::from_config(&CanopyConfig::default()).unwrap()
    }

    fn garden_session(store: MemoryCheckInStore) -> Session {
        Session::new(
            GrowthPolicy::TwiceDaily,
            garden_atlas().unwrap(),
            GrowthRules::default(),
            PlantingDefaults::default(),
            Box::new(store),
        )
    }

    fn water_country(country: &str) -> Action {
        Action::Water {
            target: WaterTarget::Country(country.to_owned()),
            slot: None,
        }
    }

    fn planted_id(result: ActionResult) -> Option<TreeId> {
        match result {
            ActionResult::Planted(id) => Some(id),
            _ => None,
        }
    }

    #[test]
    fn daily_session_grows_once_per_day() {
        let mut session = daily_session();
        assert_eq!(session.policy(), GrowthPolicy::DailyCap);
        let first = session.apply(water_country("대한민국"), at(1)).unwrap();
        assert!(matches!(
            first,
            ActionResult::Grew { ref view, .. } if view.stage == GrowthStage::Sprout
        ));
        let second = session.apply(water_country("대한민국"), at(1)).unwrap();
        assert_eq!(
            second,
            ActionResult::Rejected(RejectionReason::AlreadyWateredToday)
        );
    }

    #[test]
    fn unknown_country_is_a_contract_error() {
        let mut session = daily_session();
        let result = session.apply(water_country("Atlantis"), at(1));
        assert!(matches!(result, Err(SessionError::World { .. })));
    }

    #[test]
    fn daily_session_rejects_garden_actions() {
        let mut session = daily_session();
        assert_eq!(
            session.apply(Action::PlantSeed, at(1)).unwrap(),
            ActionResult::Rejected(RejectionReason::WrongPolicy)
        );
        assert_eq!(
            session.apply(Action::CheckIn, at(1)).unwrap(),
            ActionResult::Rejected(RejectionReason::WrongPolicy)
        );
        assert!(session.forest().as_garden().is_none());
    }

    #[test]
    fn garden_check_in_is_persisted_and_restored() {
        let mut session = garden_session(MemoryCheckInStore::new());
        assert_eq!(
            session.apply(Action::CheckIn, at(2)).unwrap(),
            ActionResult::CheckedIn(at(2).date_naive())
        );
        assert_eq!(
            session.apply(Action::CheckIn, at(2)).unwrap(),
            ActionResult::Unchanged
        );

        let restored = garden_session(MemoryCheckInStore::with_date(at(2).date_naive()));
        let garden = restored.forest().as_garden().unwrap();
        assert!(garden.is_checked_in(at(2).date_naive()));
        assert!(!garden.is_checked_in(at(3).date_naive()));
    }

    #[test]
    fn garden_watering_without_slot_is_an_error() {
        let mut session = garden_session(MemoryCheckInStore::new());
        session.apply(Action::CheckIn, at(1)).unwrap();
        session
            .apply(Action::SelectCountry("Japan".to_owned()), at(1))
            .unwrap();
        let id = planted_id(session.apply(Action::PlantSeed, at(1)).unwrap()).unwrap();
        let result = session.apply(
            Action::Water {
                target: WaterTarget::Tree(id),
                slot: None,
            },
            at(1),
        );
        assert!(matches!(result, Err(SessionError::MissingSlot)));
    }

    #[test]
    fn garden_rejects_country_watering() {
        let mut session = garden_session(MemoryCheckInStore::new());
        assert_eq!(
            session.apply(water_country("Japan"), at(1)).unwrap(),
            ActionResult::Rejected(RejectionReason::WrongPolicy)
        );
        assert!(session.forest().as_daily().is_none());
    }
}
