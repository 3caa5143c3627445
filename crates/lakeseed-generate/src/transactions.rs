use lakeseed_core::{
    Customer, Error as CoreError, MAX_DISCOUNT_RATE, PaymentMethod, Product, Store, Transaction,
    TransactionId, cap_discount, line_total,
};
use rand::Rng;
use rayon::prelude::*;

use crate::sampling::{pick, row_rng, sample_date};
use crate::seeds::{ORDER_WINDOW, QUANTITY_RANGE, STATUS_POOL};

/// Samples fact rows against materialized dimension pools.
///
/// Foreign keys are always copied from a sampled pool entity, never built
/// independently. Each row draws from its own generator derived from
/// `stage_seed` and the row index, so sequential and parallel runs yield the
/// same rows.
#[derive(Debug, Clone, Copy)]
pub struct TransactionGenerator<'a> {
    customers: &'a [Customer],
    products: &'a [Product],
    stores: &'a [Store],
    stage_seed: u64,
}

impl<'a> TransactionGenerator<'a> {
    pub fn new(
        customers: &'a [Customer],
        products: &'a [Product],
        stores: &'a [Store],
        stage_seed: u64,
    ) -> Result<Self, CoreError> {
        if customers.is_empty() {
            return Err(CoreError::EmptyPool("customers"));
        }
        if products.is_empty() {
            return Err(CoreError::EmptyPool("products"));
        }
        if stores.is_empty() {
            return Err(CoreError::EmptyPool("stores"));
        }

        Ok(Self {
            customers,
            products,
            stores,
            stage_seed,
        })
    }

    /// Produce exactly `count` rows with ids `T0000001..`.
    pub fn generate(&self, count: usize, parallel: bool) -> Vec<Transaction> {
        if parallel {
            (0..count)
                .into_par_iter()
                .map(|row_index| self.row(row_index))
                .collect()
        } else {
            (0..count).map(|row_index| self.row(row_index)).collect()
        }
    }

    /// Build the row at `row_index` (0-based).
    pub fn row(&self, row_index: usize) -> Transaction {
        let mut rng = row_rng(self.stage_seed, row_index as u64);

        let order_date = sample_date(ORDER_WINDOW, &mut rng);
        let product = pick(self.products, &mut rng);
        let quantity = rng.random_range(QUANTITY_RANGE.0..=QUANTITY_RANGE.1);
        let unit_price = product.price;
        let fraction = rng.random_range(0.0..MAX_DISCOUNT_RATE);
        let discount_amount = cap_discount(unit_price, fraction);
        let customer = pick(self.customers, &mut rng);
        let store = pick(self.stores, &mut rng);
        let payment_method = *pick(&PaymentMethod::ALL, &mut rng);
        let status = *pick(STATUS_POOL, &mut rng);

        Transaction {
            transaction_id: TransactionId::new(row_index as u32 + 1),
            customer_id: customer.customer_id,
            product_id: product.product_id,
            store_id: store.store_id,
            order_date,
            quantity,
            unit_price,
            discount_amount,
            total_amount: line_total(unit_price, discount_amount, quantity),
            payment_method,
            status,
        }
    }
}
