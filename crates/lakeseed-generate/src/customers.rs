use lakeseed_core::{Customer, CustomerId, Segment, Sequence};
use rand::Rng;

use crate::sampling::{pick, sample_date};
use crate::seeds::{
    ACTIVE_PROBABILITY, CUSTOMER_CITIES, FIRST_NAMES, LAST_NAMES, RECORD_START,
    REGISTRATION_WINDOW,
};

/// Build `count` customers with ids `C0001..`.
///
/// Each record is the single current version of its customer.
pub fn generate_customers(count: u32, rng: &mut impl Rng) -> Vec<Customer> {
    let mut ids = Sequence::new();
    let mut customers = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let customer_id: CustomerId = ids.next_id();
        let first_name = pick(FIRST_NAMES, rng);
        let last_name = pick(LAST_NAMES, rng);
        let city = pick(CUSTOMER_CITIES, rng);
        let segment = *pick(&Segment::ALL, rng);
        let registration_date = sample_date(REGISTRATION_WINDOW, rng);
        let is_active = rng.random_bool(ACTIVE_PROBABILITY);

        customers.push(Customer {
            customer_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email_for(customer_id.value()),
            city: city.to_string(),
            segment,
            registration_date,
            is_active,
            record_start_date: RECORD_START,
            record_end_date: None,
            is_current: true,
        });
    }

    customers
}

fn email_for(sequence: u32) -> String {
    format!("customer{sequence}@email.com")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::sampling::stage_rng;
    use crate::seeds::CUSTOMER_COUNT;

    #[test]
    fn ids_are_dense_and_unique() {
        let mut rng = stage_rng(42, "customers");
        let customers = generate_customers(CUSTOMER_COUNT, &mut rng);

        assert_eq!(customers.len(), 500);
        for (index, customer) in customers.iter().enumerate() {
            assert_eq!(customer.customer_id.value(), index as u32 + 1);
        }
        let unique: HashSet<_> = customers.iter().map(|c| c.customer_id).collect();
        assert_eq!(unique.len(), customers.len());
        assert_eq!(customers[0].customer_id.to_string(), "C0001");
        assert_eq!(customers[499].customer_id.to_string(), "C0500");
    }

    #[test]
    fn every_record_is_the_current_version() {
        let mut rng = stage_rng(3, "customers");
        let customers = generate_customers(50, &mut rng);
        for customer in &customers {
            assert!(customer.is_current);
            assert!(customer.record_end_date.is_none());
            assert_eq!(customer.record_start_date, RECORD_START);
            assert_eq!(
                customer.email,
                format!("customer{}@email.com", customer.customer_id.value())
            );
            assert!(customer.registration_date >= REGISTRATION_WINDOW.start);
            assert!(customer.registration_date <= REGISTRATION_WINDOW.end());
            assert!(CUSTOMER_CITIES.contains(&customer.city.as_str()));
        }
    }

    #[test]
    fn activity_is_biased_towards_active() {
        let mut rng = stage_rng(9, "customers");
        let customers = generate_customers(4_000, &mut rng);
        let active = customers.iter().filter(|c| c.is_active).count() as f64;
        let share = active / customers.len() as f64;
        assert!((0.70..0.80).contains(&share), "active share {share}");
    }
}
