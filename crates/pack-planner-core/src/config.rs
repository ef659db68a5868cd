use crate::error::{PlannerError, Result};
use crate::model::Catalog;
use serde::{Deserialize, Serialize};

/// Pack sizes used when no catalog is configured.
pub const DEFAULT_PACK_SIZES: [u32; 5] = [250, 500, 1000, 2000, 5000];

/// Upper bound on a single request unless overridden.
/// The optimizer allocates two `u32` tables of `requested + largest pack` entries.
pub const DEFAULT_MAX_ITEMS: u64 = 50_000_000;

/// Planner configuration.
/// Key notes:
///   - `pack_sizes` may be given in any order; it is sorted and de-duplicated into a [`Catalog`]
///   - `max_items` bounds the work of one request; `None` disables the check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Available pack sizes (items per pack).
    #[serde(default = "default_pack_sizes")]
    pub pack_sizes: Vec<u32>,
    /// Largest request accepted by [`crate::calculate`].
    #[serde(default = "default_max_items")]
    pub max_items: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            pack_sizes: default_pack_sizes(),
            max_items: default_max_items(),
        }
    }
}

impl PlannerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - No pack sizes are configured
    /// - A pack size is zero
    /// - `max_items` is zero
    pub fn validate(&self) -> Result<()> {
        if self.pack_sizes.is_empty() {
            return Err(PlannerError::EmptyCatalog);
        }
        if self.pack_sizes.contains(&0) {
            return Err(PlannerError::InvalidPackSize(0));
        }
        if self.max_items == Some(0) {
            return Err(PlannerError::InvalidConfig(
                "max_items must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Validated catalog snapshot of `pack_sizes`.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::new(self.pack_sizes.iter().copied())
    }

    /// Checks `requested` against `max_items`.
    pub fn check_request(&self, requested: i64) -> Result<()> {
        check_request_limit(requested, self.max_items)
    }
}

/// Rejects positive requests above `max_items`; `None` accepts everything.
pub fn check_request_limit(requested: i64, max_items: Option<u64>) -> Result<()> {
    match max_items {
        Some(max) if requested > 0 && requested as u64 > max => {
            Err(PlannerError::RequestTooLarge { requested, max })
        }
        _ => Ok(()),
    }
}

fn default_pack_sizes() -> Vec<u32> {
    DEFAULT_PACK_SIZES.to_vec()
}
fn default_max_items() -> Option<u64> {
    Some(DEFAULT_MAX_ITEMS)
}

/// Builder for `PlannerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PlannerConfigBuilder {
    cfg: PlannerConfig,
}

impl PlannerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PlannerConfig::default(),
        }
    }
    pub fn pack_sizes(mut self, sizes: impl IntoIterator<Item = u32>) -> Self {
        self.cfg.pack_sizes = sizes.into_iter().collect();
        self
    }
    pub fn max_items(mut self, v: Option<u64>) -> Self {
        self.cfg.max_items = v;
        self
    }
    pub fn build(self) -> PlannerConfig {
        self.cfg
    }
}

impl PlannerConfig {
    /// Create a fluent builder for `PlannerConfig`.
    pub fn builder() -> PlannerConfigBuilder {
        PlannerConfigBuilder::new()
    }
}
