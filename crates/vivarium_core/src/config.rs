use serde::{Deserialize, Serialize};
use std::path::Path;

/// World-level settings: seeding, growth, and scheduling.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    /// People spawned when a fresh world is populated from the shell.
    pub initial_population: usize,
    /// Births per living person per turn; the product is floored.
    pub birth_rate: f64,
    /// Optional rng seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Populations below this run the update phase sequentially.
    pub parallel_threshold: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            initial_population: 0,
            birth_rate: 0.1,
            seed: None,
            parallel_threshold: 64,
        }
    }
}

/// Tuning for the per-person transition. All drains are per turn.
///
/// Energy and health only ever decrease, so any positive `metabolism` and
/// `senescence` guarantee eventual death.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct VitalityConfig {
    /// Base energy drain.
    pub metabolism: f64,
    /// Multiplier applied to the drain while the person owns provisions.
    pub provisioned_factor: f64,
    /// Base health wear.
    pub senescence: f64,
    /// Energy level under which starvation sets in.
    pub hunger_threshold: f64,
    /// Extra health wear while starving.
    pub starvation_penalty: f64,
    /// Food value every thing loses per decay sweep.
    pub spoilage: f64,
}

impl Default for VitalityConfig {
    fn default() -> Self {
        Self {
            metabolism: 1.0,
            provisioned_factor: 0.5,
            senescence: 0.2,
            hunger_threshold: 20.0,
            starvation_penalty: 2.0,
            spoilage: 1.0,
        }
    }
}

/// Message toggles mirrored from the original configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Surface person birth/death notices.
    pub person_messages: bool,
    /// Surface thing spoilage notices.
    pub thing_messages: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            person_messages: true,
            thing_messages: true,
        }
    }
}

/// Full simulator configuration, loadable from a TOML file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub vitality: VitalityConfig,
    pub logging: LoggingConfig,
}

impl SimConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist. A present-but-invalid file is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
