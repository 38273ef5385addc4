use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::latency::{DEFAULT_LATENCY_MS, LatencyStrategy};

pub const LATENCY_ENV: &str = "BOOKSHELF_LATENCY_MS";
pub const JITTER_ENV: &str = "BOOKSHELF_LATENCY_JITTER_MS";
pub const SEED_FILE_ENV: &str = "BOOKSHELF_SEED_FILE";
pub const LOG_LEVEL_ENV: &str = "BOOKSHELF_LOG_LEVEL";

// Identifiable defines the primary key shared by stored records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// SeedSource selects the initial state injected into a fresh store
#[derive(Debug, PartialEq, Clone)]
pub enum SeedSource {
    Sample,
    Empty,
    File(PathBuf),
}

// Configuration abstracts config options for a bookshelf process
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub shelf_id: String,
    pub latency: LatencyStrategy,
    pub seed: SeedSource,
    pub log_level: Level,
}

impl Configuration {
    pub fn new(shelf_id: &str) -> Self {
        Configuration {
            shelf_id: shelf_id.to_string(),
            latency: LatencyStrategy::default(),
            seed: SeedSource::Sample,
            log_level: Level::INFO,
        }
    }

    pub fn with_latency(mut self, latency: LatencyStrategy) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_seed(mut self, seed: SeedSource) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_env(shelf_id: &str) -> LibraryResult<Self> {
        Self::from_lookup(shelf_id, |key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(shelf_id: &str, lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        // a variable that is set but blank counts as unset
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let base = parse_millis(LATENCY_ENV, lookup(LATENCY_ENV))?.unwrap_or(DEFAULT_LATENCY_MS);
        let jitter = parse_millis(JITTER_ENV, lookup(JITTER_ENV))?.unwrap_or(0);
        let seed = match lookup(SEED_FILE_ENV) {
            None => SeedSource::Sample,
            Some(path) if path.trim() == "empty" => SeedSource::Empty,
            Some(path) => SeedSource::File(PathBuf::from(path)),
        };
        let log_level = match lookup(LOG_LEVEL_ENV) {
            None => Level::INFO,
            Some(level) => Level::from_str(level.trim()).map_err(|_| LibraryError::validation(
                format!("invalid log level {:?}", level).as_str(), Some(LOG_LEVEL_ENV.to_string())))?,
        };
        Ok(Configuration {
            shelf_id: shelf_id.to_string(),
            latency: LatencyStrategy::jittered_millis(base, jitter),
            seed,
            log_level,
        })
    }

    pub fn tracing_level(&self) -> Level {
        self.log_level
    }
}

fn parse_millis(key: &str, value: Option<String>) -> LibraryResult<Option<u64>> {
    match value {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<u64>().map(Some).map_err(|_| LibraryError::validation(
            format!("invalid milliseconds {:?} for {}", raw, key).as_str(), Some(key.to_string()))),
    }
}
