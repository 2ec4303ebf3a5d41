//! Desk configuration shared by the CLI and the HTTP server.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `ATELIER_LATENCY_MS` | Simulated latency per query (default `0`, disabled) |
//! | `ATELIER_FIXTURES` | Directory holding replacement fixture documents |

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{CoreError, FixtureStore, MockDesk, SimulatedLatency};

pub const LATENCY_ENV: &str = "ATELIER_LATENCY_MS";
pub const FIXTURES_ENV: &str = "ATELIER_FIXTURES";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskConfig {
    pub latency: SimulatedLatency,
    /// `None` selects the bundled dataset.
    pub fixtures_dir: Option<PathBuf>,
}

impl DeskConfig {
    /// Read configuration from the environment. Unparseable values fall back
    /// to defaults.
    pub fn from_env() -> Self {
        let latency = env::var(LATENCY_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(SimulatedLatency::from_millis)
            .unwrap_or_default();

        let fixtures_dir = env::var_os(FIXTURES_ENV)
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty());

        Self {
            latency,
            fixtures_dir,
        }
    }

    pub fn with_latency_ms(mut self, millis: Option<u64>) -> Self {
        if let Some(millis) = millis {
            self.latency = SimulatedLatency::from_millis(millis);
        }
        self
    }

    pub fn with_fixtures_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.fixtures_dir = dir;
        }
        self
    }

    pub fn load_store(&self) -> Result<FixtureStore, CoreError> {
        match &self.fixtures_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "loading fixtures from directory");
                FixtureStore::from_dir(dir)
            }
            None => FixtureStore::bundled(),
        }
    }

    /// Load the store once and wrap it in a [`MockDesk`].
    pub fn open(&self) -> Result<MockDesk, CoreError> {
        let store = Arc::new(self.load_store()?);
        Ok(MockDesk::new(store).with_latency(self.latency))
    }
}
