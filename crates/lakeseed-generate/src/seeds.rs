//! Fixed seed pools and volumes.
//!
//! Volumes and distributions are constants of the dataset, not options.

use chrono::{Duration, NaiveDate};
use lakeseed_core::{Category, OrderStatus};

pub const CUSTOMER_COUNT: u32 = 500;
pub const TRANSACTION_COUNT: usize = 500_000;

pub const FIRST_NAMES: &[&str] = &[
    "Aarav", "Priya", "Rahul", "Sneha", "Vikram", "Ananya", "Rohan", "Kavya", "Arjun", "Meera",
    "Siddharth", "Pooja", "Karan", "Divya", "Nikhil", "James", "Emma", "Liam", "Olivia", "Noah",
    "Ava", "William", "Sophia",
];

pub const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Singh", "Kumar", "Mehta", "Iyer", "Reddy", "Nair", "Smith", "Johnson",
    "Williams", "Brown", "Jones", "Garcia", "Martinez",
];

pub const CUSTOMER_CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bengaluru",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Kolkata",
    "London",
    "New York",
    "Dubai",
    "Singapore",
    "Sydney",
];

/// Category to base item names, iterated in declaration order.
pub const TAXONOMY: &[(Category, &[&str])] = &[
    (
        Category::Electronics,
        &[
            "Laptop",
            "Smartphone",
            "Tablet",
            "Headphones",
            "Smartwatch",
            "Camera",
            "Speaker",
        ],
    ),
    (
        Category::Clothing,
        &["T-Shirt", "Jeans", "Jacket", "Dress", "Sneakers", "Kurta", "Saree"],
    ),
    (
        Category::HomeKitchen,
        &[
            "Mixer",
            "Pressure Cooker",
            "Bedsheet",
            "Curtains",
            "Air Purifier",
            "Sofa",
        ],
    ),
    (
        Category::Books,
        &[
            "Fiction Novel",
            "Data Engineering",
            "Python Cookbook",
            "Self Help",
            "Biography",
        ],
    ),
    (
        Category::Sports,
        &[
            "Cricket Bat",
            "Yoga Mat",
            "Dumbbells",
            "Running Shoes",
            "Badminton Racket",
        ],
    ),
];

pub const BRANDS: &[&str] = &[
    "Samsung", "Apple", "Nike", "Adidas", "Sony", "LG", "Philips", "Prestige", "Puma", "boAt",
];

pub const PRODUCT_TIERS: &[&str] = &["Pro", "Lite", "Plus", "Max", "Standard"];

/// Store cities; store ids follow this order.
pub const STORE_CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bengaluru",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Kolkata",
    "Jaipur",
    "Ahmedabad",
    "Surat",
];

/// Weighted 3:1:1 by repetition.
pub const STATUS_POOL: &[OrderStatus] = &[
    OrderStatus::Completed,
    OrderStatus::Completed,
    OrderStatus::Completed,
    OrderStatus::Returned,
    OrderStatus::Cancelled,
];

/// Sampling windows: a start date plus an inclusive span in days.
pub const REGISTRATION_WINDOW: DateWindow = DateWindow::new(2021, 1, 1, 1000);
pub const LAUNCH_WINDOW: DateWindow = DateWindow::new(2020, 1, 1, 900);
pub const STORE_OPENING_WINDOW: DateWindow = DateWindow::new(2018, 1, 1, 1400);
pub const ORDER_WINDOW: DateWindow = DateWindow::new(2022, 1, 1, 730);

/// Start of validity for every customer record.
pub const RECORD_START: NaiveDate = ymd(2021, 1, 1);

pub const ACTIVE_PROBABILITY: f64 = 0.75;
pub const PRICE_RANGE: (f64, f64) = (199.0, 49_999.0);
pub const COST_FACTOR_RANGE: (f64, f64) = (0.4, 0.7);
pub const STOCK_RANGE: (u32, u32) = (0, 500);
pub const VARIANTS_PER_ITEM: (u32, u32) = (2, 5);
pub const QUANTITY_RANGE: (u8, u8) = (1, 5);

#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub span_days: u32,
}

impl DateWindow {
    pub const fn new(year: i32, month: u32, day: u32, span_days: u32) -> Self {
        Self {
            start: ymd(year, month, day),
            span_days,
        }
    }

    /// Last date reachable from this window.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(i64::from(self.span_days))
    }
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}
