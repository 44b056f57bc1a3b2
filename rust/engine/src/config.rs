use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::bank::STARTING_BANK;
use crate::blackjack::{BlackjackGame, BlackjackRules};
use crate::errors::ConfigError;
use crate::poker::PokerGame;
use crate::victory::{PokerSettings, VictoryTable};

/// Environment variable naming a TOML config file
pub const CONFIG_ENV: &str = "CASINO_CONFIG";
/// Environment override for the deck seed
pub const SEED_ENV: &str = "CASINO_SEED";
/// Environment override for the wild-deuces switch
pub const WILD_DEUCES_ENV: &str = "CASINO_WILD_DEUCES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PokerConfig {
    pub starting_bank: u32,
    #[serde(flatten)]
    pub settings: PokerSettings,
    /// Catalog in priority order; the built-in table for the variant if absent.
    pub catalog: Option<VictoryTable>,
}

impl Default for PokerConfig {
    fn default() -> Self {
        Self {
            starting_bank: STARTING_BANK,
            settings: PokerSettings::default(),
            catalog: None,
        }
    }
}

impl PokerConfig {
    /// The configured catalog, or the stock one for the variant.
    pub fn victory_table(&self) -> VictoryTable {
        match &self.catalog {
            Some(table) => table.clone(),
            None if self.settings.wild_deuces => VictoryTable::deuces_wild(),
            None => VictoryTable::jacks_or_better(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlackjackConfig {
    pub starting_bank: u32,
    #[serde(flatten)]
    pub rules: BlackjackRules,
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self {
            starting_bank: STARTING_BANK,
            rules: BlackjackRules::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub poker: PokerConfig,
    pub blackjack: BlackjackConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub wild_deuces: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            wild_deuces: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: GameConfig,
    pub sources: ConfigSources,
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(s)?;
        validate(&cfg)?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn poker_game(&self) -> PokerGame {
        PokerGame::new(self.poker.victory_table(), self.poker.settings, self.seed)
            .with_starting_bank(self.poker.starting_bank)
    }

    pub fn blackjack_game(&self) -> BlackjackGame {
        BlackjackGame::new(self.blackjack.rules, self.seed)
            .with_starting_bank(self.blackjack.starting_bank)
    }
}

pub fn load() -> Result<GameConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the file named by `CASINO_CONFIG`, then env overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let file = match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => Some(fs::read_to_string(path)?),
        _ => None,
    };
    let seed = std::env::var(SEED_ENV).ok();
    let wild = std::env::var(WILD_DEUCES_ENV).ok();
    resolve(file.as_deref(), seed.as_deref(), wild.as_deref())
}

/// Applies the layering over explicit inputs.
pub fn resolve(
    file: Option<&str>,
    seed: Option<&str>,
    wild_deuces: Option<&str>,
) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = GameConfig::default();
    let mut sources = ConfigSources::default();

    if let Some(s) = file {
        cfg = toml::from_str(s)?;
        if cfg.seed.is_some() {
            sources.seed = ValueSource::File;
        }
        if cfg.poker.settings.wild_deuces {
            sources.wild_deuces = ValueSource::File;
        }
    }

    if let Some(seed) = seed.filter(|s| !s.is_empty()) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(wild) = wild_deuces.filter(|s| !s.is_empty()) {
        cfg.poker.settings.wild_deuces = parse_bool(wild)
            .ok_or_else(|| ConfigError::Invalid("Invalid wild deuces flag".into()))?;
        sources.wild_deuces = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

pub fn validate(cfg: &GameConfig) -> Result<(), ConfigError> {
    if cfg.poker.starting_bank == 0 || cfg.blackjack.starting_bank == 0 {
        return Err(ConfigError::Invalid("starting_bank must be >0".into()));
    }
    cfg.blackjack.rules.validate()?;
    if let Some(table) = &cfg.poker.catalog {
        table.validate()?;
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
