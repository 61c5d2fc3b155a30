use cadence_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use cadence_core::domain::RunOptions;
use cadence_core::domain::run::DEFAULT_DELAY_MS;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
  /// Pausa entre elementos, en milisegundos.
  #[serde(default = "default_delay_ms")]
  pub delay_ms: u64,

  /// Pausa cosmética al terminar, en milisegundos. Cero la desactiva.
  #[serde(default)]
  pub trailing_pause_ms: u64,
}

fn default_delay_ms() -> u64 {
  DEFAULT_DELAY_MS
}

impl Default for RunnerConfig {
  fn default() -> Self {
    RunnerConfig { delay_ms: default_delay_ms(), trailing_pause_ms: 0 }
  }
}

impl RunnerConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("runner")?;
    CONFIG_BACKEND.save_section("runner", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("runner", self)
  }

  pub fn run_options(&self) -> RunOptions {
    RunOptions {
      delay: Duration::from_millis(self.delay_ms),
      trailing_pause: Duration::from_millis(self.trailing_pause_ms),
    }
  }
}

impl From<&RunnerConfig> for RunOptions {
  fn from(cfg: &RunnerConfig) -> Self {
    cfg.run_options()
  }
}
