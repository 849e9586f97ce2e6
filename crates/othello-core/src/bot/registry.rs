//! Catalogue of the available bots.
//!
//! Collaborators list bots with [`descriptors`] and build one from a stable
//! identifier with [`resolve`].

use std::fmt;
use std::str::FromStr;

use crate::bot::{Bot, GreedyBot, MinimaxBot, RandomBot, StrategicBot};
use crate::error::{OthelloError, Result};

/// Identifier of a registered bot strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotKind {
    Random,
    Greedy,
    Strategic,
    Minimax,
}

impl BotKind {
    /// All bots in presentation order.
    pub const ALL: [BotKind; 4] = [
        BotKind::Random,
        BotKind::Greedy,
        BotKind::Strategic,
        BotKind::Minimax,
    ];

    /// Stable lowercase identifier.
    pub const fn id(self) -> &'static str {
        match self {
            BotKind::Random => "random",
            BotKind::Greedy => "greedy",
            BotKind::Strategic => "strategic",
            BotKind::Minimax => "minimax",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            BotKind::Random => "Random Bot",
            BotKind::Greedy => "Greedy Bot",
            BotKind::Strategic => "Strategic Bot",
            BotKind::Minimax => "Minimax Bot",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            BotKind::Random => "Makes random valid moves. Good for beginners!",
            BotKind::Greedy => "Always tries to capture the most pieces in a single move.",
            BotKind::Strategic => "Uses position weights and mobility to make strategic moves.",
            BotKind::Minimax => {
                "Uses the minimax algorithm with alpha-beta pruning to look ahead several moves."
            }
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BotKind {
    type Err = OthelloError;

    /// Parses a bot identifier, ignoring ASCII case and surrounding spaces.
    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim();
        BotKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| OthelloError::UnknownBot(id.to_string()))
    }
}

/// Listing entry for a registered bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

impl From<BotKind> for BotDescriptor {
    fn from(kind: BotKind) -> Self {
        BotDescriptor {
            id: kind.id(),
            display_name: kind.display_name(),
            description: kind.description(),
        }
    }
}

/// Returns one descriptor per registered bot, in presentation order.
pub fn descriptors() -> Vec<BotDescriptor> {
    BotKind::ALL.into_iter().map(BotDescriptor::from).collect()
}

/// Builds a bot with its default settings.
pub fn create_bot(kind: BotKind) -> Box<dyn Bot> {
    match kind {
        BotKind::Random => Box::new(RandomBot::new()),
        BotKind::Greedy => Box::new(GreedyBot::new()),
        BotKind::Strategic => Box::new(StrategicBot::new()),
        BotKind::Minimax => Box::new(MinimaxBot::default()),
    }
}

/// Builds the bot registered under `id`.
///
/// # Errors
///
/// Returns [`OthelloError::UnknownBot`] when no bot has that identifier.
pub fn resolve(id: &str) -> Result<Box<dyn Bot>> {
    Ok(create_bot(id.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for kind in BotKind::ALL {
            assert_eq!(kind.id().parse::<BotKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.id());
        }
        assert_eq!(" Minimax ".parse::<BotKind>(), Ok(BotKind::Minimax));
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(
            "alphazero".parse::<BotKind>(),
            Err(OthelloError::UnknownBot("alphazero".to_string()))
        );
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_descriptors() {
        let list = descriptors();
        let ids: Vec<_> = list.iter().map(|d| d.id).collect();
        assert_eq!(ids, ["random", "greedy", "strategic", "minimax"]);
        assert_eq!(list[3].display_name, "Minimax Bot");
    }

    #[test]
    fn test_resolve_builds_matching_kind() {
        for kind in BotKind::ALL {
            let bot = resolve(kind.id()).unwrap();
            assert_eq!(bot.kind(), kind);
        }
    }
}
