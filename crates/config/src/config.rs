use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

/// Default value for `block_interval_secs` in [`SimConfig`].
const DEFAULT_BLOCK_INTERVAL_SECS: u64 = 12;

/// Default value for `gas_target` in [`SimConfig`].
const DEFAULT_GAS_TARGET: u64 = 30_000_000;

/// Default value for `gas_hard_cap` in [`SimConfig`].
const DEFAULT_GAS_HARD_CAP: u64 = 60_000_000;

/// Default value for `max_extra_blocks` in [`SimConfig`].
const DEFAULT_MAX_EXTRA_BLOCKS: usize = 100;

/// Errors arising while loading or validating a [`SimConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("reading config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`SimConfig`].
    #[error("parsing config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field value breaks a structural requirement.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Simulated seconds each admission window spans.
    #[serde(default = "default_block_interval_secs")]
    pub block_interval_secs: u64,

    /// Soft gas target: admission into the current block stops once reached.
    #[serde(default = "default_gas_target")]
    pub gas_target: u64,

    /// Hard gas cap no block may exceed.
    #[serde(default = "default_gas_hard_cap")]
    pub gas_hard_cap: u64,

    /// Maximum number of overflow blocks built after simulated time runs out.
    #[serde(default = "default_max_extra_blocks")]
    pub max_extra_blocks: usize,
}

fn default_block_interval_secs() -> u64 {
    DEFAULT_BLOCK_INTERVAL_SECS
}

fn default_gas_target() -> u64 {
    DEFAULT_GAS_TARGET
}

fn default_gas_hard_cap() -> u64 {
    DEFAULT_GAS_HARD_CAP
}

fn default_max_extra_blocks() -> usize {
    DEFAULT_MAX_EXTRA_BLOCKS
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            block_interval_secs: DEFAULT_BLOCK_INTERVAL_SECS,
            gas_target: DEFAULT_GAS_TARGET,
            gas_hard_cap: DEFAULT_GAS_HARD_CAP,
            max_extra_blocks: DEFAULT_MAX_EXTRA_BLOCKS,
        }
    }
}

impl SimConfig {
    /// Loads a config from a TOML file and validates it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks structural requirements on the parameter values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "block_interval_secs must be nonzero".to_owned(),
            ));
        }
        if self.gas_hard_cap == 0 {
            return Err(ConfigError::Invalid(
                "gas_hard_cap must be nonzero".to_owned(),
            ));
        }
        if self.gas_target > self.gas_hard_cap {
            return Err(ConfigError::Invalid(format!(
                "gas_target {} exceeds gas_hard_cap {}",
                self.gas_target, self.gas_hard_cap
            )));
        }
        Ok(())
    }
}
