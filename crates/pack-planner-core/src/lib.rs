//! Core library for splitting item orders into whole packs.
//!
//! - Optimizer: smallest shipped total that covers the request, then fewest packs for that total
//! - Catalog: validated, sorted pack sizes and a store that hands out snapshots
//! - Orders: plan-and-record service over pluggable repositories
//! - Data model is serde-serializable; JSON helpers live in `export`, JSON files in `ledger`.
//!
//! Quick example:
//! ```
//! use pack_planner_core::{Catalog, compute_combination};
//! let catalog = Catalog::new([250, 500, 1000, 2000, 5000]).unwrap();
//! let result = compute_combination(501, &catalog);
//! assert_eq!(result.summary(), "1x250, 1x500");
//! assert_eq!(result.total_packs, 2);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod model;
pub mod optimizer;
pub mod orders;
pub mod planner;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use optimizer::*;
pub use planner::*;

/// Convenience prelude for common types and functions.
/// Importing `pack_planner_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::catalog::{
        InMemoryPackSizeRepository, PackSizeRecord, PackSizeRepository, snapshot,
    };
    pub use crate::config::{PlannerConfig, PlannerConfigBuilder};
    pub use crate::model::{Catalog, CombinationResult, ShipmentStats};
    pub use crate::orders::{InMemoryOrderRepository, Order, OrderRepository, OrderService};
    pub use crate::{calculate, compute_batch, compute_combination, compute_for_sizes};
}
