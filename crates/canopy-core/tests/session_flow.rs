//! End-to-end session flows driven through [`Session::apply`].

#![allow(clippy::unwrap_used)]

use canopy_core::{
    Action, ActionResult, CanopyConfig, FileCheckInStore, MemoryCheckInStore, Session,
    SessionError, WaterTarget,
};
use canopy_types::{GrowthPolicy, GrowthStage, RejectionReason, StageView, TreeId, WateringSlot};
use canopy_world::{GrowthRules, LevelUp, PlantingDefaults, WorldError, garden_atlas};
use chrono::{DateTime, TimeZone, Utc};
use tempfile::{NamedTempFile, tempdir};

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).single().unwrap()
}

fn garden_session_with(store: Box<dyn canopy_core::CheckInStore>) -> Session {
    Session::new(
        GrowthPolicy::TwiceDaily,
        garden_atlas().unwrap(),
        GrowthRules::default(),
        PlantingDefaults::default(),
        store,
    )
}

fn garden_session() -> Session {
    garden_session_with(Box::new(MemoryCheckInStore::new()))
}

fn planted_id(result: ActionResult) -> Option<TreeId> {
    match result {
        ActionResult::Planted(id) => Some(id),
        _ => None,
    }
}

fn plant(session: &mut Session, country: &str, now: DateTime<Utc>) -> TreeId {
    session.apply(Action::CheckIn, now).unwrap();
    session
        .apply(Action::SelectCountry(country.to_owned()), now)
        .unwrap();
    planted_id(session.apply(Action::PlantSeed, now).unwrap()).unwrap()
}

fn water(id: TreeId, slot: WateringSlot) -> Action {
    Action::Water {
        target: WaterTarget::Tree(id),
        slot: Some(slot),
    }
}

#[test]
fn daily_forest_grows_to_maturity_over_three_days() {
    let mut session = Session::from_config(&CanopyConfig::default()).unwrap();

    let water_korea = || Action::Water {
        target: WaterTarget::Country("대한민국".to_owned()),
        slot: None,
    };

    for day in 1..=3 {
        let result = session.apply(water_korea(), at(day, 9)).unwrap();
        assert!(matches!(result, ActionResult::Grew { .. }), "day {day}: {result:?}");
        let again = session.apply(water_korea(), at(day, 18)).unwrap();
        let expected = if day == 3 {
            RejectionReason::AlreadyMature
        } else {
            RejectionReason::AlreadyWateredToday
        };
        assert_eq!(again, ActionResult::Rejected(expected));
    }

    assert_eq!(session.score(), 10);
    assert_eq!(session.roster(), ["대한민국 🌳 🦌 고라니".to_owned()]);

    let after = session.apply(water_korea(), at(4, 9)).unwrap();
    assert_eq!(after, ActionResult::Rejected(RejectionReason::AlreadyMature));
    assert_eq!(session.score(), 10);
}

#[test]
fn planting_before_check_in_is_rejected() {
    let mut session = garden_session();
    session
        .apply(Action::SelectCountry("Japan".to_owned()), at(1, 8))
        .unwrap();
    assert_eq!(
        session.apply(Action::PlantSeed, at(1, 8)).unwrap(),
        ActionResult::Rejected(RejectionReason::NotCheckedIn)
    );
    assert_eq!(session.forest().as_garden().unwrap().trees().count(), 0);
}

#[test]
fn check_in_expires_at_date_change() {
    let mut session = garden_session();
    plant(&mut session, "India", at(1, 8));

    session
        .apply(Action::SelectCountry("India".to_owned()), at(2, 8))
        .unwrap();
    assert_eq!(
        session.apply(Action::PlantSeed, at(2, 8)).unwrap(),
        ActionResult::Rejected(RejectionReason::NotCheckedIn)
    );
}

#[test]
fn morning_and_evening_level_up_with_wildlife() {
    let mut session = garden_session();
    let id = plant(&mut session, "Japan", at(1, 7));

    let morning = session
        .apply(water(id, WateringSlot::Morning), at(1, 7))
        .unwrap();
    assert!(matches!(
        morning,
        ActionResult::Watered(ref view) if view.stage == GrowthStage::Seed
    ));
    let repeat = session
        .apply(water(id, WateringSlot::Morning), at(1, 8))
        .unwrap();
    assert_eq!(
        repeat,
        ActionResult::Rejected(RejectionReason::SlotAlreadyFilled)
    );

    let evening = session
        .apply(water(id, WateringSlot::Evening), at(1, 19))
        .unwrap();
    assert_eq!(
        evening,
        ActionResult::Grew {
            view: StageView::new(GrowthStage::Sprout, "🌿"),
            level_up: LevelUp {
                from: GrowthStage::Seed,
                to: GrowthStage::Sprout,
                first_maturity: false,
            },
            score: 0,
            wildlife_revealed: Some(1),
        }
    );
}

#[test]
fn two_trees_mature_independently_and_each_award_once() {
    let mut session = garden_session();
    let first = plant(&mut session, "Brazil", at(1, 7));
    let second = plant(&mut session, "Brazil", at(1, 7));

    for id in [first, second] {
        for _ in 0..4 {
            session
                .apply(water(id, WateringSlot::Morning), at(1, 7))
                .unwrap();
            session
                .apply(water(id, WateringSlot::Evening), at(1, 19))
                .unwrap();
        }
    }

    assert_eq!(session.score(), 20);
    assert_eq!(session.roster().len(), 2);
    let garden = session.forest().as_garden().unwrap();
    assert_eq!(garden.wildlife_revealed().get("Brazil"), Some(&2));
    assert!(garden.trees().all(|t| t.growth.stage == GrowthStage::Mature));
}

#[test]
fn file_store_carries_check_in_across_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("checkin");

    let mut first = garden_session_with(Box::new(FileCheckInStore::new(&path)));
    first.apply(Action::CheckIn, at(5, 9)).unwrap();

    let mut second = garden_session_with(Box::new(FileCheckInStore::new(&path)));
    second
        .apply(Action::SelectCountry("France".to_owned()), at(5, 10))
        .unwrap();
    let planted = second.apply(Action::PlantSeed, at(5, 10)).unwrap();
    assert!(planted_id(planted).is_some());
}

#[test]
fn corrupt_store_starts_unchecked() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "not a date").unwrap();

    let session = garden_session_with(Box::new(FileCheckInStore::new(file.path())));
    assert_eq!(session.forest().as_garden().unwrap().check_in().date(), None);
}

#[test]
fn overflowing_bonus_keeps_tree_retryable() {
    let mut session = Session::new(
        GrowthPolicy::TwiceDaily,
        garden_atlas().unwrap(),
        GrowthRules {
            maturity_bonus: u32::MAX,
            ..GrowthRules::default()
        },
        PlantingDefaults::default(),
        Box::new(MemoryCheckInStore::new()),
    );
    let first = plant(&mut session, "Canada", at(1, 7));
    let second = plant(&mut session, "Canada", at(1, 7));
    for id in [first, second] {
        for _ in 0..2 {
            session
                .apply(water(id, WateringSlot::Morning), at(1, 7))
                .unwrap();
            session
                .apply(water(id, WateringSlot::Evening), at(1, 19))
                .unwrap();
        }
        session
            .apply(water(id, WateringSlot::Morning), at(1, 7))
            .unwrap();
    }

    session
        .apply(water(first, WateringSlot::Evening), at(1, 19))
        .unwrap();
    assert_eq!(session.score(), u32::MAX);

    let overflow = session.apply(water(second, WateringSlot::Evening), at(1, 19));
    assert!(matches!(
        overflow,
        Err(SessionError::World {
            source: WorldError::ArithmeticOverflow
        })
    ));
    assert_eq!(session.roster().len(), 1);
    let tree = session.forest().as_garden().unwrap().tree(second).unwrap();
    assert_eq!(tree.growth.stage, GrowthStage::Sapling);
    assert!(!tree.growth.maturity_awarded);
    assert!(tree.growth.morning_watered);
}
