use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{CustomerId, ProductId, StoreId, TransactionId};
use crate::record::{
    TabularRecord, format_currency, format_date, format_flag, format_optional_date,
};

/// Customer value tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Segment {
    Premium,
    Standard,
    Basic,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Premium, Segment::Standard, Segment::Basic];

    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Premium => "Premium",
            Segment::Standard => "Standard",
            Segment::Basic => "Basic",
        }
    }
}

/// Product category of the fixed taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
    Books,
    Sports,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::HomeKitchen => "Home & Kitchen",
            Category::Books => "Books",
            Category::Sports => "Sports",
        }
    }
}

/// Sales region of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StoreType {
    Flagship,
    Express,
    Online,
}

impl StoreType {
    pub const ALL: [StoreType; 3] = [StoreType::Flagship, StoreType::Express, StoreType::Online];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreType::Flagship => "Flagship",
            StoreType::Express => "Express",
            StoreType::Online => "Online",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Net Banking")]
    NetBanking,
    Cash,
    #[serde(rename = "EMI")]
    Emi,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 7] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
        PaymentMethod::Cash,
        PaymentMethod::Emi,
        PaymentMethod::Wallet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Emi => "EMI",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

/// Fulfilment outcome of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Completed,
    Returned,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Returned => "Returned",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// A customer dimension row.
///
/// The versioning fields describe a slowly-changing dimension, but every
/// record is the first and only version: `record_end_date` is always `None`
/// and `is_current` is always `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub segment: Segment,
    pub registration_date: NaiveDate,
    pub is_active: bool,
    pub record_start_date: NaiveDate,
    pub record_end_date: Option<NaiveDate>,
    pub is_current: bool,
}

impl TabularRecord for Customer {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "city",
        "segment",
        "registration_date",
        "is_active",
        "record_start_date",
        "record_end_date",
        "is_current",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.customer_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.city.clone(),
            self.segment.as_str().to_string(),
            format_date(self.registration_date),
            format_flag(self.is_active),
            format_date(self.record_start_date),
            format_optional_date(self.record_end_date),
            format_flag(self.is_current),
        ]
    }
}

/// A product dimension row. `cost_price` never exceeds `price`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: Category,
    pub brand: String,
    pub price: f64,
    pub cost_price: f64,
    pub stock_qty: u32,
    pub launched_date: NaiveDate,
}

impl TabularRecord for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "category",
        "brand",
        "price",
        "cost_price",
        "stock_qty",
        "launched_date",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.product_id.to_string(),
            self.product_name.clone(),
            self.category.as_str().to_string(),
            self.brand.clone(),
            format_currency(self.price),
            format_currency(self.cost_price),
            self.stock_qty.to_string(),
            format_date(self.launched_date),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub store_id: StoreId,
    pub store_name: String,
    pub city: String,
    pub region: Region,
    pub store_type: StoreType,
    pub opened_date: NaiveDate,
}

impl TabularRecord for Store {
    const TABLE: &'static str = "stores";
    const COLUMNS: &'static [&'static str] = &[
        "store_id",
        "store_name",
        "city",
        "region",
        "store_type",
        "opened_date",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.store_id.to_string(),
            self.store_name.clone(),
            self.city.clone(),
            self.region.as_str().to_string(),
            self.store_type.as_str().to_string(),
            format_date(self.opened_date),
        ]
    }
}

/// A sales fact row. Every foreign key is copied from an existing pool entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub order_date: NaiveDate,
    pub quantity: u8,
    pub unit_price: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
}

impl TabularRecord for Transaction {
    const TABLE: &'static str = "transactions";
    const COLUMNS: &'static [&'static str] = &[
        "transaction_id",
        "customer_id",
        "product_id",
        "store_id",
        "order_date",
        "quantity",
        "unit_price",
        "discount_amount",
        "total_amount",
        "payment_method",
        "status",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.transaction_id.to_string(),
            self.customer_id.to_string(),
            self.product_id.to_string(),
            self.store_id.to_string(),
            format_date(self.order_date),
            self.quantity.to_string(),
            format_currency(self.unit_price),
            format_currency(self.discount_amount),
            format_currency(self.total_amount),
            self.payment_method.as_str().to_string(),
            self.status.as_str().to_string(),
        ]
    }
}
