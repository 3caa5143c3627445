//! Read-only audit of a generated dataset.
//!
//! The audit counts breaches of the structural guarantees (unique ids, no
//! orphan foreign keys, monetary invariants). It never rejects or repairs
//! rows.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use lakeseed_core::{MAX_DISCOUNT_RATE, Region, line_total};
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub duplicate_customer_ids: u64,
    pub duplicate_product_ids: u64,
    pub duplicate_store_ids: u64,
    pub duplicate_transaction_ids: u64,
    pub orphan_customer_refs: u64,
    pub orphan_product_refs: u64,
    pub orphan_store_refs: u64,
    pub cost_price_violations: u64,
    pub discount_violations: u64,
    pub total_amount_violations: u64,
    pub stores_by_region: BTreeMap<Region, u64>,
}

impl IntegrityReport {
    pub fn violations(&self) -> u64 {
        self.duplicate_customer_ids
            + self.duplicate_product_ids
            + self.duplicate_store_ids
            + self.duplicate_transaction_ids
            + self.orphan_customer_refs
            + self.orphan_product_refs
            + self.orphan_store_refs
            + self.cost_price_violations
            + self.discount_violations
            + self.total_amount_violations
    }

    pub fn is_clean(&self) -> bool {
        self.violations() == 0
    }
}

pub fn audit(dataset: &Dataset) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    let customers = collect_ids(
        dataset.customers.iter().map(|c| c.customer_id),
        &mut report.duplicate_customer_ids,
    );
    let products = collect_ids(
        dataset.products.iter().map(|p| p.product_id),
        &mut report.duplicate_product_ids,
    );
    let stores = collect_ids(
        dataset.stores.iter().map(|s| s.store_id),
        &mut report.duplicate_store_ids,
    );
    collect_ids(
        dataset.transactions.iter().map(|t| t.transaction_id),
        &mut report.duplicate_transaction_ids,
    );

    for product in &dataset.products {
        if product.cost_price <= 0.0 || product.cost_price > product.price {
            report.cost_price_violations += 1;
        }
    }

    for store in &dataset.stores {
        *report.stores_by_region.entry(store.region).or_insert(0) += 1;
    }

    for row in &dataset.transactions {
        if !customers.contains(&row.customer_id) {
            report.orphan_customer_refs += 1;
        }
        if !products.contains(&row.product_id) {
            report.orphan_product_refs += 1;
        }
        if !stores.contains(&row.store_id) {
            report.orphan_store_refs += 1;
        }
        if row.discount_amount < 0.0
            || row.discount_amount > row.unit_price * MAX_DISCOUNT_RATE + TOLERANCE
        {
            report.discount_violations += 1;
        }
        let expected = line_total(row.unit_price, row.discount_amount, row.quantity);
        if row.total_amount < 0.0 || (row.total_amount - expected).abs() > TOLERANCE {
            report.total_amount_violations += 1;
        }
    }

    report
}

fn collect_ids<I: Eq + Hash>(ids: impl Iterator<Item = I>, duplicates: &mut u64) -> HashSet<I> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            *duplicates += 1;
        }
    }
    seen
}
