//! Line-oriented command parsing.

use canopy_types::{TreeId, WateringSlot};

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    /// A required argument is missing.
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// The command that was typed.
        command: &'static str,
        /// Description of the missing argument.
        argument: &'static str,
    },
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show which forest this session plays.
    Variant,
    /// Daily check-in.
    CheckIn,
    /// Choose the country for the next seed.
    Select(String),
    /// Plant a seed in the selected country.
    Plant,
    /// Water a country's tree or a planted tree.
    Water {
        /// Country name or tree id, as typed.
        target: String,
        /// Care slot, if given.
        slot: Option<WateringSlot>,
    },
    /// Show every tree with its stage.
    Status,
    /// Show score and roster.
    Forest,
    /// List catalog countries.
    Countries,
    /// List commands.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// Country names may contain spaces, so `select` and `water` take the
    /// rest of the line. A trailing `morning` / `evening` on `water` is
    /// read as the slot.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands or missing arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "variant" => Self::Variant,
            "checkin" | "check-in" => Self::CheckIn,
            "select" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "select",
                        argument: "a country name",
                    });
                }
                Self::Select(rest.to_owned())
            }
            "plant" => Self::Plant,
            "water" => Self::parse_water(rest)?,
            "status" => Self::Status,
            "forest" => Self::Forest,
            "countries" => Self::Countries,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Some(command))
    }

    fn parse_water(rest: &str) -> Result<Self, CommandError> {
        let missing = CommandError::MissingArgument {
            command: "water",
            argument: "a country or tree id",
        };
        if rest.is_empty() {
            return Err(missing);
        }

        let (target, slot) = match rest.rsplit_once(char::is_whitespace) {
            Some((head, tail)) => match WateringSlot::parse(tail) {
                Some(slot) => (head.trim(), Some(slot)),
                None => (rest, None),
            },
            None => (rest, None),
        };
        if target.is_empty() {
            return Err(missing);
        }
        Ok(Self::Water {
            target: target.to_owned(),
            slot,
        })
    }
}

/// A typed tree id, if `target` is one.
pub fn tree_target(target: &str) -> Option<TreeId> {
    TreeId::parse(target)
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  variant                          show which forest this session plays
  checkin                          daily check-in (garden)
  select <country>                 choose where the next seed goes (garden)
  plant                            plant a seed in the selected country (garden)
  water <country>                  water a country's tree (daily map)
  water <tree-id> morning|evening  water or fertilise a planted tree (garden)
  status                           show every tree
  forest                           show score and my forest
  countries                        list countries
  quit                             leave";
