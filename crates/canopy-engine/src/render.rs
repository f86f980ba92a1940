//! Plain-text rendering of session state.
//!
//! Everything the map UI would draw is turned into lines of text here:
//! stage glyphs and labels, slot flags, score, roster, and wildlife.

use std::fmt::Write;

use canopy_core::{ActionResult, Forest, Session};
use canopy_types::{GrowthPolicy, StageView, Wildlife};
use chrono::NaiveDate;

/// Describe the forest this session plays.
pub const fn variant(policy: GrowthPolicy) -> &'static str {
    match policy {
        GrowthPolicy::DailyCap => {
            "daily map: every country has a tree, water each one once a day"
        }
        GrowthPolicy::TwiceDaily => {
            "garden: check in, plant seeds, water in the morning and fertilise in the evening"
        }
    }
}

/// Render the outcome of one action.
///
/// `revealed` is the wildlife of the watered tree's country returned so
/// far; it is only shown after a level-up.
pub fn action_result(result: &ActionResult, revealed: &[Wildlife]) -> String {
    match result {
        ActionResult::CheckedIn(date) => format!("checked in for {date}"),
        ActionResult::Unchanged => "already checked in today".to_owned(),
        ActionResult::Selected(name) => format!("selected {name}"),
        ActionResult::Planted(id) => format!("🌱 planted seed {id}"),
        ActionResult::Watered(view) => format!("{} watered", stage(view)),
        ActionResult::Grew {
            view,
            level_up,
            score,
            wildlife_revealed,
        } => {
            let mut out = format!("{} grew from {}", stage(view), level_up.from.label());
            if level_up.first_maturity {
                let _ = write!(out, "\nfully grown! score {score}, added to my forest");
            }
            if wildlife_revealed.is_some() && !revealed.is_empty() {
                let names: Vec<String> = revealed.iter().map(Wildlife::display).collect();
                let _ = write!(out, "\nwildlife returned: {}", names.join(", "));
            }
            out
        }
        ActionResult::Rejected(reason) => format!("✋ {}", reason.message()),
    }
}

/// Render every tree of the session with its stage.
pub fn status(session: &Session, today: NaiveDate) -> String {
    let mut out = String::new();
    match session.forest() {
        Forest::Daily(forest) => {
            for name in session.catalog().names() {
                let Ok(view) = forest.query_stage(session.catalog(), name) else {
                    continue;
                };
                let resting =
                    !view.stage.is_mature() && !forest.can_water(name, today, session.rules());
                let mark = if resting { "  (watered today)" } else { "" };
                let _ = writeln!(out, "{name}  {}{mark}", stage(&view));
            }
        }
        Forest::Garden(garden) => {
            let checked = if garden.is_checked_in(today) { "yes" } else { "no" };
            let _ = writeln!(out, "checked in today: {checked}");
            let _ = writeln!(
                out,
                "selected country: {}",
                garden.selected_country().unwrap_or("-")
            );
            let mut any = false;
            for tree in garden.trees() {
                any = true;
                let view = StageView::new(tree.growth.stage, tree.growth.stage.glyph());
                let _ = writeln!(
                    out,
                    "{}  {}  {}  morning {} evening {}",
                    tree.id,
                    tree.name,
                    stage(&view),
                    flag(tree.growth.morning_watered),
                    flag(tree.growth.evening_watered),
                );
            }
            if !any {
                let _ = writeln!(out, "no trees planted yet");
            }
        }
    }
    out.trim_end().to_owned()
}

/// Render score, planet health, and the "my forest" roster.
pub fn forest(session: &Session, score_target: u32) -> String {
    let ledger = session.forest().ledger();
    let mut out = format!(
        "score {}  planet health {:.0}%",
        ledger.score(),
        ledger.progress(score_target) * 100.0
    );
    if ledger.roster().is_empty() {
        out.push_str("\nmy forest is empty");
    } else {
        for line in ledger.roster() {
            let _ = write!(out, "\n{line}");
        }
    }
    if let Some(garden) = session.forest().as_garden() {
        for country in garden.wildlife_revealed().keys() {
            let names: Vec<String> = garden
                .revealed_wildlife(session.catalog(), country)
                .iter()
                .map(Wildlife::display)
                .collect();
            let _ = write!(out, "\n{country} wildlife: {}", names.join(", "));
        }
    }
    out
}

/// Render the catalog. In the garden each line also counts the trees
/// planted there.
pub fn countries(session: &Session) -> String {
    let garden = session.forest().as_garden();
    let lines: Vec<String> = session
        .catalog()
        .records()
        .iter()
        .map(|record| {
            let detail = record
                .profile
                .as_ref()
                .and_then(|p| p.species.clone())
                .or_else(|| record.featured_wildlife().map(Wildlife::display))
                .unwrap_or_default();
            let mut line = format!("{} {}  {detail}", record.mature_glyph(), record.name);
            if let Some(garden) = garden {
                let _ = write!(line, "  planted {}", garden.trees_in(&record.name).count());
            }
            line
        })
        .collect();
    lines.join("\n")
}

fn stage(view: &StageView) -> String {
    format!("{} {}", view.glyph, view.label)
}

const fn flag(set: bool) -> &'static str {
    if set { "[x]" } else { "[ ]" }
}
