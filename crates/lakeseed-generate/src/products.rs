use lakeseed_core::{Category, Product, ProductId, Sequence, derive_cost_price, round_currency};
use rand::Rng;

use crate::sampling::{pick, sample_date};
use crate::seeds::{
    COST_FACTOR_RANGE, LAUNCH_WINDOW, PRICE_RANGE, PRODUCT_TIERS, STOCK_RANGE, VARIANTS_PER_ITEM,
};

/// Expand the taxonomy into product variants.
///
/// Every (category, item) pair yields 2-5 variants. Ids come from one
/// sequence shared across categories, so the pool size is only known once
/// the whole taxonomy has been walked.
pub fn generate_products(
    taxonomy: &[(Category, &[&str])],
    brands: &[&str],
    rng: &mut impl Rng,
) -> Vec<Product> {
    let mut ids = Sequence::new();
    let mut products = Vec::new();

    for (category, items) in taxonomy {
        for item in *items {
            let variants = rng.random_range(VARIANTS_PER_ITEM.0..=VARIANTS_PER_ITEM.1);
            for _ in 0..variants {
                products.push(variant(ids.next_id(), *category, item, brands, rng));
            }
        }
    }

    products
}

fn variant(
    product_id: ProductId,
    category: Category,
    item: &str,
    brands: &[&str],
    rng: &mut impl Rng,
) -> Product {
    let price = round_currency(rng.random_range(PRICE_RANGE.0..=PRICE_RANGE.1));
    let tier = pick(PRODUCT_TIERS, rng);
    let brand = pick(brands, rng);
    let factor = rng.random_range(COST_FACTOR_RANGE.0..=COST_FACTOR_RANGE.1);

    Product {
        product_id,
        product_name: format!("{item} {tier}"),
        category,
        brand: brand.to_string(),
        price,
        cost_price: derive_cost_price(price, factor),
        stock_qty: rng.random_range(STOCK_RANGE.0..=STOCK_RANGE.1),
        launched_date: sample_date(LAUNCH_WINDOW, rng),
    }
}
