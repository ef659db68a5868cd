use crate::config::PlannerConfig;
use crate::error::Result;
use crate::model::CombinationResult;
use crate::optimizer::compute_combination;
use tracing::instrument;

#[instrument(skip(cfg))]
/// Plans a shipment for `requested` items using the catalog in `cfg`.
///
/// Notes:
/// - The config is validated first and `max_items` is enforced before any table is allocated.
/// - `requested <= 0` is not an error; it produces an empty result.
pub fn calculate(requested: i64, cfg: &PlannerConfig) -> Result<CombinationResult> {
    cfg.validate()?;
    cfg.check_request(requested)?;
    let catalog = cfg.catalog()?;
    Ok(compute_combination(requested, &catalog))
}
