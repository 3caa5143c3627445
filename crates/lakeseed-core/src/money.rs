//! Currency arithmetic shared by the product and transaction stages.
//!
//! All amounts are `f64` rounded half away from zero to two decimals.

/// Upper bound (exclusive when sampled) of the discount fraction.
pub const MAX_DISCOUNT_RATE: f64 = 0.3;

pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cost price derived from the list price and a factor in `[0.4, 0.7]`.
pub fn derive_cost_price(price: f64, factor: f64) -> f64 {
    round_currency(price * factor)
}

/// Rounded discount amount, never above `MAX_DISCOUNT_RATE` of the unit price.
pub fn cap_discount(unit_price: f64, fraction: f64) -> f64 {
    let ceiling = (unit_price * MAX_DISCOUNT_RATE * 100.0).floor() / 100.0;
    round_currency(fraction * unit_price).min(ceiling).max(0.0)
}

pub fn line_total(unit_price: f64, discount_amount: f64, quantity: u8) -> f64 {
    round_currency((unit_price - discount_amount) * f64::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_price_follows_factor() {
        assert_eq!(derive_cost_price(1000.0, 0.5), 500.0);
        assert_eq!(format!("{:.2}", derive_cost_price(1000.0, 0.5)), "500.00");
    }

    #[test]
    fn line_total_applies_discount_per_unit() {
        assert_eq!(line_total(100.0, 10.0, 3), 270.0);
        assert_eq!(format!("{:.2}", line_total(100.0, 10.0, 3)), "270.00");
    }

    fn cents(value: f64) -> i64 {
        (value * 100.0).round() as i64
    }

    #[test]
    fn discount_never_exceeds_rate() {
        for price in [199.0, 1234.57, 49999.0, 333.33, 0.01, 12.34] {
            let discount = cap_discount(price, 0.299_999_999);
            assert!(cents(discount) * 10 <= cents(price) * 3, "{price} -> {discount}");
            assert!(discount >= 0.0);
        }
        assert_eq!(cap_discount(199.0, 0.299_999_9), 59.7);
        assert_eq!(cap_discount(49999.0, 0.299_999_9), 14999.7);
        assert_eq!(cap_discount(100.0, 0.1), 10.0);
        assert_eq!(cap_discount(100.0, 0.0), 0.0);
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_currency(12.345_1), 12.35);
        assert_eq!(round_currency(12.344_9), 12.34);
    }
}
