use std::path::Path;

use anyhow::Context;
use boxes::{Board, NoFreeSegments, SegmentId};
use boxes_bot_utils::{Bot, BotKind};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The contents of a player config file.
///
/// ```json
/// { "nick": "greedy", "bot": "greedy", "seed": 42 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    pub bot: BotKind,
    /// Seed for the bot's RNG. Derived from the judge's RNG if missing.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read player config '{}'", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid player config '{}'", path.display()))
    }
}

/// A bot taking part in the tournament.
pub struct Contestant {
    pub name: String,
    bot: Box<dyn Bot>,
}

impl Contestant {
    pub fn new(name: &str, bot: Box<dyn Bot>) -> Self {
        Self {
            name: String::from(name),
            bot,
        }
    }

    pub fn from_config(config: &PlayerConfig, rng: &mut StdRng) -> Self {
        let seed = config.seed.unwrap_or_else(|| rng.gen());
        Self::new(&config.nick, config.bot.build(seed))
    }

    pub fn choose_segment(&mut self, board: &Board) -> Result<SegmentId, NoFreeSegments> {
        let segment_id = self.bot.choose_segment(board)?;
        trace!(player = &self.name, bot = self.bot.name(), segment_id, "Chose segment");
        Ok(segment_id)
    }
}
