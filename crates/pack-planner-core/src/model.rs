use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validated set of pack sizes, sorted ascending with duplicates removed.
///
/// Construct with [`Catalog::new`]; the optimizer takes its ceiling from
/// [`Catalog::largest`], so callers never have to guarantee ordering themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    sizes: Vec<u32>,
}

impl Catalog {
    /// Builds a catalog from sizes in any order.
    ///
    /// Returns an error if:
    /// - `sizes` is empty
    /// - any size is zero
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut sizes: Vec<u32> = sizes.into_iter().collect();
        if sizes.is_empty() {
            return Err(PlannerError::EmptyCatalog);
        }
        if sizes.contains(&0) {
            return Err(PlannerError::InvalidPackSize(0));
        }
        sizes.sort_unstable();
        sizes.dedup();
        Ok(Self { sizes })
    }

    /// Pack sizes in ascending order.
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    pub fn smallest(&self) -> u32 {
        self.sizes[0]
    }

    pub fn largest(&self) -> u32 {
        self.sizes[self.sizes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let sizes = Vec::<u32>::deserialize(deserializer)?;
        Catalog::new(sizes).map_err(serde::de::Error::custom)
    }
}

/// Packs chosen for one request: pack size -> number of packs of that size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationResult {
    /// Keyed by pack size; iteration is ascending by size.
    pub packs: BTreeMap<u32, u64>,
    /// Sum of all counts in `packs`.
    pub total_packs: u64,
}

impl CombinationResult {
    /// The empty shipment returned for non-positive requests.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Number of packs of `size`, zero if the size was not used.
    pub fn count_of(&self, size: u32) -> u64 {
        self.packs.get(&size).copied().unwrap_or(0)
    }

    /// Total items shipped (`Σ size * count`).
    pub fn total_items(&self) -> u64 {
        self.packs
            .iter()
            .map(|(&size, &count)| size as u64 * count)
            .sum()
    }

    /// Items shipped beyond `requested`. Zero for non-positive requests.
    pub fn overshoot(&self, requested: i64) -> u64 {
        let requested = requested.max(0) as u64;
        self.total_items().saturating_sub(requested)
    }

    /// Human-readable breakdown such as `"1x250, 2x5000"` (count x size, ascending size).
    pub fn summary(&self) -> String {
        if self.packs.is_empty() {
            return "none".to_string();
        }
        self.packs
            .iter()
            .map(|(size, count)| format!("{count}x{size}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Computes shipment statistics for this result against `requested`.
    pub fn stats(&self, requested: i64) -> ShipmentStats {
        let shipped = self.total_items();
        let overshoot = self.overshoot(requested);
        let fill_ratio = if shipped > 0 {
            (shipped - overshoot) as f64 / shipped as f64
        } else {
            0.0
        };
        ShipmentStats {
            requested,
            shipped,
            overshoot,
            total_packs: self.total_packs,
            distinct_sizes: self.packs.len(),
            largest_pack: self.packs.keys().next_back().copied(),
            fill_ratio,
        }
    }
}

/// Statistics about how well a shipment fits its request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipmentStats {
    pub requested: i64,
    /// Total items across all packs.
    pub shipped: u64,
    /// `shipped - requested`, never negative.
    pub overshoot: u64,
    pub total_packs: u64,
    /// Number of different pack sizes used.
    pub distinct_sizes: usize,
    pub largest_pack: Option<u32>,
    /// Requested items / shipped items (0.0 to 1.0). Higher means less excess.
    pub fill_ratio: f64,
}

impl ShipmentStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Requested: {}, Shipped: {}, Overshoot: {}, Packs: {}, Sizes used: {}, Fill: {:.2}%",
            self.requested,
            self.shipped,
            self.overshoot,
            self.total_packs,
            self.distinct_sizes,
            self.fill_ratio * 100.0,
        )
    }
}
