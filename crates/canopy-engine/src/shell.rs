//! The stdin command loop.
//!
//! Reads one [`Command`] per line, turns it into a session [`Action`] or a
//! view, and writes the rendered text. Parse errors and contract
//! violations are reported to the user and the loop carries on; only I/O
//! failures end it.

use std::io::{BufRead, Write};

use canopy_core::{Action, ActionResult, Session, WaterTarget};
use canopy_types::Wildlife;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::command::{self, Command};
use crate::error::EngineError;
use crate::render;

/// Run the loop until `quit` or end of input.
///
/// `clock` supplies the current time for each command.
///
/// # Errors
///
/// Returns [`EngineError::Io`] if reading input or writing output fails.
pub fn run<R, W, C>(
    session: &mut Session,
    score_target: u32,
    input: R,
    mut output: W,
    clock: C,
) -> Result<(), EngineError>
where
    R: BufRead,
    W: Write,
    C: Fn() -> DateTime<Utc>,
{
    writeln!(output, "{}", render::variant(session.policy()))?;
    writeln!(output, "type `help` for commands")?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        debug!(?command, "Command received");

        if command == Command::Quit {
            break;
        }
        let text = execute(session, score_target, command, clock());
        writeln!(output, "{text}")?;
    }

    output.flush()?;
    Ok(())
}

/// Execute one command at time `now` and return the text to show.
fn execute(
    session: &mut Session,
    score_target: u32,
    command: Command,
    now: DateTime<Utc>,
) -> String {
    let action = match command {
        Command::Variant => return render::variant(session.policy()).to_owned(),
        Command::Status => return render::status(session, now.date_naive()),
        Command::Forest => return render::forest(session, score_target),
        Command::Countries => return render::countries(session),
        Command::Help | Command::Quit => return command::HELP.to_owned(),
        Command::CheckIn => Action::CheckIn,
        Command::Select(name) => Action::SelectCountry(name),
        Command::Plant => Action::PlantSeed,
        Command::Water { target, slot } => match command::tree_target(&target) {
            Some(id) => Action::Water {
                target: WaterTarget::Tree(id),
                slot,
            },
            None if !session.catalog().contains(&target) => {
                return format!("unknown country: {target} (try `countries`)");
            }
            None => Action::Water {
                target: WaterTarget::Country(target),
                slot,
            },
        },
    };

    let watered = match &action {
        Action::Water { target, .. } => Some(target.clone()),
        _ => None,
    };

    match session.apply(action, now) {
        Ok(result) => {
            let revealed = match (&result, watered) {
                (ActionResult::Grew { .. }, Some(WaterTarget::Tree(id))) => {
                    revealed_for_tree(session, id)
                }
                _ => Vec::new(),
            };
            render::action_result(&result, &revealed)
        }
        Err(err) => {
            warn!(%err, "Action failed");
            format!("error: {err}")
        }
    }
}

fn revealed_for_tree(session: &Session, id: canopy_types::TreeId) -> Vec<Wildlife> {
    let Some(garden) = session.forest().as_garden() else {
        return Vec::new();
    };
    garden
        .tree(id)
        .map(|tree| garden.revealed_wildlife(session.catalog(), &tree.country).to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use canopy_core::MemoryCheckInStore;
    use canopy_types::GrowthPolicy;
    use canopy_world::{GrowthRules, PlantingDefaults, daily_atlas, garden_atlas};
    use chrono::TimeZone;

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .unwrap()
    }

    fn session(policy: GrowthPolicy) -> Session {
        let catalog = match policy {
            GrowthPolicy::DailyCap => daily_atlas(),
            GrowthPolicy::TwiceDaily => garden_atlas(),
        };
        Session::new(
            policy,
            catalog.unwrap(),
            GrowthRules::default(),
            PlantingDefaults::default(),
            Box::new(MemoryCheckInStore::new()),
        )
    }

    fn play(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run(session, 100, Cursor::new(script), &mut out, noon).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn daily_script_waters_once() {
        let mut s = session(GrowthPolicy::DailyCap);
        let out = play(&mut s, "water 대한민국\nwater 대한민국\nforest\n");
        assert!(out.contains("grew from"));
        assert!(out.contains(canopy_types::RejectionReason::AlreadyWateredToday.message()));
        assert!(out.contains("score 0"));
    }

    #[test]
    fn garden_script_plants_after_check_in() {
        let mut s = session(GrowthPolicy::TwiceDaily);
        let out = play(&mut s, "plant\ncheckin\nselect Japan\nplant\nstatus\n");
        assert!(out.contains(canopy_types::RejectionReason::NotCheckedIn.message()));
        assert!(out.contains("planted seed"));
        assert!(out.contains("Japan"));
        assert_eq!(s.forest().as_garden().unwrap().trees().count(), 1);
    }

    #[test]
    fn unknown_country_is_reported_and_loop_continues() {
        let mut s = session(GrowthPolicy::DailyCap);
        let out = play(&mut s, "water Atlantis\nforest\n");
        assert!(out.contains("unknown country: Atlantis (try `countries`)"));
        assert!(out.contains("score 0"));
    }

    #[test]
    fn garden_rejects_country_watering() {
        let mut s = session(GrowthPolicy::TwiceDaily);
        let out = play(&mut s, "water Japan morning\nwater Atlantis\n");
        assert!(out.contains(canopy_types::RejectionReason::WrongPolicy.message()));
        assert!(out.contains("unknown country: Atlantis"));
    }

    #[test]
    fn quit_stops_reading() {
        let mut s = session(GrowthPolicy::DailyCap);
        let _ = play(&mut s, "quit\nwater 대한민국\n");
        let forest = s.forest().as_daily().unwrap();
        assert!(forest.entries().all(|(_, e)| e.last_watered.is_none()));
    }

    #[test]
    fn bad_command_is_reported() {
        let mut s = session(GrowthPolicy::DailyCap);
        let out = play(&mut s, "dance\n");
        assert!(out.contains("unknown command: dance"));
    }
}
