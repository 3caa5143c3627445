//! Core entity model for lakeseed.
//!
//! This crate defines the retail entities (customers, products, stores and
//! transactions), their typed identifiers, the currency helpers that keep the
//! monetary invariants in one place, and the row encoding shared by every
//! tabular sink.

pub mod entities;
pub mod error;
pub mod ids;
pub mod money;
pub mod record;

pub use entities::{
    Category, Customer, OrderStatus, PaymentMethod, Product, Region, Segment, Store, StoreType,
    Transaction,
};
pub use error::{Error, Result};
pub use ids::{CustomerId, ProductId, Sequence, StoreId, TransactionId};
pub use money::{MAX_DISCOUNT_RATE, cap_discount, derive_cost_price, line_total, round_currency};
pub use record::TabularRecord;
