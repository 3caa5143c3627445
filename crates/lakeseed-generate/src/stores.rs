use lakeseed_core::{Region, Sequence, Store, StoreType};
use rand::Rng;

use crate::sampling::{pick, sample_date};
use crate::seeds::STORE_OPENING_WINDOW;

const NORTH_CITIES: &[&str] = &["Delhi", "Jaipur"];
const SOUTH_CITIES: &[&str] = &["Bengaluru", "Hyderabad", "Chennai"];
const EAST_CITY: &str = "Kolkata";

/// One store per city, numbered by position in `cities`.
pub fn generate_stores(cities: &[&str], rng: &mut impl Rng) -> Vec<Store> {
    let mut ids = Sequence::new();

    cities
        .iter()
        .map(|city| Store {
            store_id: ids.next_id(),
            store_name: format!("{city} Retail Hub"),
            city: city.to_string(),
            region: region_for_city(city),
            store_type: *pick(&StoreType::ALL, rng),
            opened_date: sample_date(STORE_OPENING_WINDOW, rng),
        })
        .collect()
}

/// Region of a city, evaluated as an ordered chain; the first match wins and
/// anything unmatched is West.
pub fn region_for_city(city: &str) -> Region {
    if NORTH_CITIES.contains(&city) {
        Region::North
    } else if SOUTH_CITIES.contains(&city) {
        Region::South
    } else if city == EAST_CITY {
        Region::East
    } else {
        Region::West
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::stage_rng;
    use crate::seeds::STORE_CITIES;

    #[test]
    fn regions_resolve_through_the_chain() {
        assert_eq!(region_for_city("Kolkata"), Region::East);
        assert_eq!(region_for_city("Jaipur"), Region::North);
        assert_eq!(region_for_city("Delhi"), Region::North);
        assert_eq!(region_for_city("Chennai"), Region::South);
        assert_eq!(region_for_city("Pune"), Region::West);
        assert_eq!(region_for_city("Surat"), Region::West);
    }

    #[test]
    fn one_store_per_city_in_list_order() {
        let mut rng = stage_rng(42, "stores");
        let stores = generate_stores(STORE_CITIES, &mut rng);

        assert_eq!(stores.len(), 10);
        for (index, (store, city)) in stores.iter().zip(STORE_CITIES).enumerate() {
            assert_eq!(store.store_id.value(), index as u32 + 1);
            assert_eq!(store.city, *city);
            assert_eq!(store.store_name, format!("{city} Retail Hub"));
            assert!(StoreType::ALL.contains(&store.store_type));
            assert!(
                store.opened_date >= STORE_OPENING_WINDOW.start
                    && store.opened_date <= STORE_OPENING_WINDOW.end(),
                "{} opened {}",
                store.store_id,
                store.opened_date
            );
        }
        assert_eq!(STORE_OPENING_WINDOW.end().to_string(), "2021-11-01");
        assert_eq!(stores[0].store_id.to_string(), "S001");
        assert_eq!(stores[9].store_id.to_string(), "S010");
    }

    #[test]
    fn numbering_follows_city_order() {
        let mut rng = stage_rng(42, "stores");
        let stores = generate_stores(&["Surat", "Delhi"], &mut rng);
        assert_eq!(stores[0].store_id.to_string(), "S001");
        assert_eq!(stores[0].city, "Surat");
        assert_eq!(stores[0].region, Region::West);
        assert_eq!(stores[1].region, Region::North);
    }
}
