use chrono::NaiveDate;
use lakeseed_core::{
    Category, Customer, CustomerId, OrderStatus, PaymentMethod, Product, ProductId, Region,
    Segment, Store, StoreId, StoreType, TabularRecord, Transaction, TransactionId,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn customer_row_renders_scd_fields() {
    let customer = Customer {
        customer_id: CustomerId::new(42),
        first_name: "Priya".to_string(),
        last_name: "Iyer".to_string(),
        email: "customer42@email.com".to_string(),
        city: "New York".to_string(),
        segment: Segment::Premium,
        registration_date: date(2022, 7, 15),
        is_active: false,
        record_start_date: date(2021, 1, 1),
        record_end_date: None,
        is_current: true,
    };

    let fields = customer.to_fields();
    assert_eq!(fields.len(), Customer::COLUMNS.len());
    assert_eq!(
        fields,
        vec![
            "C0042",
            "Priya",
            "Iyer",
            "customer42@email.com",
            "New York",
            "Premium",
            "2022-07-15",
            "0",
            "2021-01-01",
            "",
            "1",
        ]
    );
}

#[test]
fn product_and_store_rows_follow_column_order() {
    let product = Product {
        product_id: ProductId::new(3),
        product_name: "Mixer Pro".to_string(),
        category: Category::HomeKitchen,
        brand: "Prestige".to_string(),
        price: 1000.0,
        cost_price: 500.0,
        stock_qty: 12,
        launched_date: date(2020, 2, 29),
    };
    assert_eq!(Product::COLUMNS[4], "price");
    assert_eq!(
        product.to_fields(),
        vec![
            "P0003",
            "Mixer Pro",
            "Home & Kitchen",
            "Prestige",
            "1000.00",
            "500.00",
            "12",
            "2020-02-29",
        ]
    );

    let store = Store {
        store_id: StoreId::new(7),
        store_name: "Kolkata Retail Hub".to_string(),
        city: "Kolkata".to_string(),
        region: Region::East,
        store_type: StoreType::Express,
        opened_date: date(2019, 5, 1),
    };
    assert_eq!(
        store.to_fields(),
        vec!["S007", "Kolkata Retail Hub", "Kolkata", "East", "Express", "2019-05-01"]
    );
}

#[test]
fn transaction_row_renders_currency_with_two_decimals() {
    let transaction = Transaction {
        transaction_id: TransactionId::new(1),
        customer_id: CustomerId::new(500),
        product_id: ProductId::new(1),
        store_id: StoreId::new(1),
        order_date: date(2023, 12, 31),
        quantity: 3,
        unit_price: 100.0,
        discount_amount: 10.0,
        total_amount: 270.0,
        payment_method: PaymentMethod::NetBanking,
        status: OrderStatus::Returned,
    };

    assert_eq!(
        transaction.to_fields(),
        vec![
            "T0000001",
            "C0500",
            "P0001",
            "S001",
            "2023-12-31",
            "3",
            "100.00",
            "10.00",
            "270.00",
            "Net Banking",
            "Returned",
        ]
    );
}

#[test]
fn enums_serialize_with_display_labels() {
    let json = serde_json::to_string(&[PaymentMethod::Upi, PaymentMethod::CreditCard])
        .expect("serialize payment methods");
    assert_eq!(json, r#"["UPI","Credit Card"]"#);

    let json = serde_json::to_string(&Category::HomeKitchen).expect("serialize category");
    assert_eq!(json, r#""Home & Kitchen""#);
}
