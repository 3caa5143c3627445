use lakeseed_core::{Customer, Product, Store, Transaction};

/// The four materialized pools of one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub stores: Vec<Store>,
    pub transactions: Vec<Transaction>,
}
