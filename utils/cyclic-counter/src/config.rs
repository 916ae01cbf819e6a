use serde::{Deserialize, Serialize};

use crate::{
    counter::{CyclicCounter, DEFAULT_MAX_VALUE},
    error::CyclicCounterResult,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CyclicCounterConfig {
    /// The inclusive bound after which the counter wraps back to zero.
    /// Defaults to the largest value the platform can represent.
    #[serde(default = "default_max_value")]
    pub max_value: isize,
}

fn default_max_value() -> isize {
    DEFAULT_MAX_VALUE
}

impl Default for CyclicCounterConfig {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
        }
    }
}

impl CyclicCounter {
    pub fn from_config(
        config: &CyclicCounterConfig,
    ) -> CyclicCounterResult<Self> {
        Self::with_max_value(config.max_value)
    }
}
