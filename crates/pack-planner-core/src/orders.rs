use crate::catalog::{PackSizeRepository, snapshot};
use crate::config::{DEFAULT_MAX_ITEMS, check_request_limit};
use crate::error::{PlannerError, Result};
use crate::model::CombinationResult;
use crate::optimizer::compute_combination;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, instrument};
use uuid::Uuid;

/// A planned order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// Items the customer asked for.
    pub items_count: i64,
    /// Breakdown rendered as `"1x250, 2x5000"`.
    pub pack_setup: String,
    /// Pack size -> number of packs.
    pub packs: BTreeMap<u32, u64>,
    pub total_packs: u64,
    /// Items actually shipped.
    pub total_items: u64,
}

impl Order {
    pub fn from_combination(items_count: i64, combination: CombinationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            items_count,
            pack_setup: combination.summary(),
            total_items: combination.total_items(),
            total_packs: combination.total_packs,
            packs: combination.packs,
        }
    }
}

/// Where planned orders are kept.
pub trait OrderRepository {
    fn save_order(&self, order: Order) -> Result<Order>;
    /// `Ok(None)` when no order has `id`.
    fn fetch_order(&self, id: Uuid) -> Result<Option<Order>>;
    fn list_orders(&self) -> Result<Vec<Order>>;
}

/// Orders kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps previously stored orders (e.g. a ledger read from disk).
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.orders.into_inner()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save_order(&self, order: Order) -> Result<Order> {
        let mut orders = self.orders.write();
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(order)
    }

    fn fetch_order(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.read().iter().find(|o| o.id == id).cloned())
    }

    fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().clone())
    }
}

/// Plans and records orders against the current pack-size catalog.
///
/// Orders above `max_items` are rejected before any planning work; the limit starts at
/// [`DEFAULT_MAX_ITEMS`].
pub struct OrderService<O, P> {
    orders: O,
    pack_sizes: P,
    max_items: Option<u64>,
}

impl<O: OrderRepository, P: PackSizeRepository> OrderService<O, P> {
    pub fn new(orders: O, pack_sizes: P) -> Self {
        Self {
            orders,
            pack_sizes,
            max_items: Some(DEFAULT_MAX_ITEMS),
        }
    }

    /// Replaces the order size limit (`None` disables it).
    pub fn with_max_items(mut self, max_items: Option<u64>) -> Self {
        self.max_items = max_items;
        self
    }

    #[instrument(skip(self))]
    pub fn create_order(&self, items_count: i64) -> Result<Order> {
        check_request_limit(items_count, self.max_items)?;
        let catalog = snapshot(&self.pack_sizes)?;
        let combination = compute_combination(items_count, &catalog);
        let order = Order::from_combination(items_count, combination);
        let saved = self.orders.save_order(order)?;
        info!(id = %saved.id, setup = %saved.pack_setup, "order created");
        Ok(saved)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Order> {
        self.orders
            .fetch_order(id)?
            .ok_or(PlannerError::OrderNotFound(id))
    }

    pub fn list_orders(&self) -> Result<Vec<Order>> {
        self.orders.list_orders()
    }

    pub fn pack_size_repository(&self) -> &P {
        &self.pack_sizes
    }

    pub fn into_parts(self) -> (O, P) {
        (self.orders, self.pack_sizes)
    }
}
