use crate::error::Result;
use crate::model::{Catalog, CombinationResult};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const UNREACHABLE: u32 = u32::MAX;

/// Fewest-packs table for every exact sum in `0..=ceiling`.
///
/// `min_packs[i]` is the smallest number of packs summing to exactly `i`
/// (`UNREACHABLE` if none); `used_size[i]` is the pack size that achieved it.
struct PackTable {
    min_packs: Vec<u32>,
    used_size: Vec<u32>,
}

impl PackTable {
    /// Builds the table, or `None` when the two `u32` tables for `ceiling` cannot be allocated.
    fn build(ceiling: usize, sizes: &[u32]) -> Option<Self> {
        let len = ceiling.checked_add(1)?;
        let bytes = len.checked_mul(2 * size_of::<u32>())?;
        if bytes > isize::MAX as usize {
            return None;
        }
        let mut min_packs = Vec::new();
        min_packs.try_reserve_exact(len).ok()?;
        let mut used_size = Vec::new();
        used_size.try_reserve_exact(len).ok()?;
        min_packs.resize(len, UNREACHABLE);
        used_size.resize(len, 0u32);
        min_packs[0] = 0;

        for i in 1..=ceiling {
            let mut best = UNREACHABLE;
            let mut best_size = 0;
            // sizes are ascending and only a strictly better candidate replaces `best`,
            // so ties resolve to the smallest size
            for &size in sizes {
                let size = size as usize;
                if size > i {
                    break;
                }
                let prev = min_packs[i - size];
                if prev != UNREACHABLE && prev + 1 < best {
                    best = prev + 1;
                    best_size = size as u32;
                }
            }
            min_packs[i] = best;
            used_size[i] = best_size;
        }

        Some(Self {
            min_packs,
            used_size,
        })
    }

    fn is_reachable(&self, sum: usize) -> bool {
        self.min_packs[sum] != UNREACHABLE
    }

    /// First reachable sum in `start..=end`.
    fn first_reachable(&self, start: usize, end: usize) -> Option<usize> {
        (start..=end).find(|&sum| self.is_reachable(sum))
    }

    fn reconstruct(&self, target: usize) -> BTreeMap<u32, u64> {
        let mut packs = BTreeMap::new();
        let mut current = target;
        while current > 0 {
            let size = self.used_size[current];
            if size == 0 {
                break;
            }
            *packs.entry(size).or_insert(0) += 1;
            current -= size as usize;
        }
        packs
    }
}

#[instrument(skip_all, fields(requested = requested, sizes = catalog.len()))]
/// Computes the shipment for `requested` items from `catalog`.
///
/// Notes:
/// - The shipped total is the smallest reachable sum `>= requested`.
/// - Among combinations reaching that total, the one with the fewest packs wins; ties go to
///   the smaller pack size.
/// - `requested <= 0` yields an empty result.
pub fn compute_combination(requested: i64, catalog: &Catalog) -> CombinationResult {
    if requested <= 0 {
        return CombinationResult::empty();
    }

    let Some(ceiling) = (requested as u64)
        .checked_add(catalog.largest() as u64)
        .and_then(|c| usize::try_from(c).ok())
    else {
        warn!(requested, "ceiling does not fit in memory index space");
        return CombinationResult::empty();
    };
    let start = requested as usize;

    debug!(ceiling, "building pack table");
    let Some(table) = PackTable::build(ceiling, catalog.sizes()) else {
        warn!(requested, ceiling, "pack table too large to allocate");
        return CombinationResult::empty();
    };

    let Some(target) = table.first_reachable(start, ceiling) else {
        warn!(requested, ceiling, "no combination reaches the request");
        return CombinationResult::empty();
    };

    let packs = table.reconstruct(target);
    let total_packs = packs.values().sum::<u64>();
    debug!(target, total_packs, "combination found");

    CombinationResult { packs, total_packs }
}

/// Validates `sizes` into a [`Catalog`] and computes the shipment.
///
/// Sizes may arrive in any order; duplicates are merged. Empty input or a zero size is an error.
pub fn compute_for_sizes(requested: i64, sizes: &[u32]) -> Result<CombinationResult> {
    let catalog = Catalog::new(sizes.iter().copied())?;
    Ok(compute_combination(requested, &catalog))
}

/// Computes one shipment per request against the same catalog snapshot.
///
/// With the `parallel` feature the requests are evaluated on the rayon pool; output order
/// always matches `requests`.
pub fn compute_batch(requests: &[i64], catalog: &Catalog) -> Vec<CombinationResult> {
    #[cfg(feature = "parallel")]
    {
        requests
            .par_iter()
            .map(|&r| compute_combination(r, catalog))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        requests
            .iter()
            .map(|&r| compute_combination(r, catalog))
            .collect()
    }
}
