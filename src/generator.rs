//! Random scenario generation.
//!
//! Builds randomized but realistic simulation inputs for demo and
//! "automatic" mode: per-product quantities and theoretical times
//! drawn from a catalog of ranges, and four lines with staggered
//! efficiency bands. Generic over [`rand::Rng`] so tests can seed a
//! `SmallRng` for reproducibility.

use rand::Rng;

use crate::models::{ProductOrder, ProductionLine};

/// Catalog entry: a product with its plausible quantity and
/// per-unit time ranges.
#[derive(Debug, Clone)]
pub struct ProductSpec {
    /// Product name.
    pub name: &'static str,
    /// Theoretical time range (hours/unit), inclusive.
    pub time_range: (f64, f64),
    /// Order quantity range (units), inclusive.
    pub quantity_range: (u32, u32),
}

/// The default garment catalog.
pub fn default_catalog() -> Vec<ProductSpec> {
    vec![
        ProductSpec {
            name: "Giacche Invernali",
            time_range: (3.5, 8.0),
            quantity_range: (30, 120),
        },
        ProductSpec {
            name: "T-Shirts",
            time_range: (0.5, 1.8),
            quantity_range: (100, 250),
        },
        ProductSpec {
            name: "Felpe",
            time_range: (1.5, 4.0),
            quantity_range: (65, 190),
        },
        ProductSpec {
            name: "Pantaloni",
            time_range: (1.8, 4.5),
            quantity_range: (50, 170),
        },
    ]
}

/// Efficiency bands for the four generated lines, staggered so the
/// plant always mixes slower and faster lines.
const LINE_BANDS: [(&str, f64, f64); 4] = [
    ("A", 0.7, 1.0),
    ("B", 0.8, 1.1),
    ("C", 0.9, 1.2),
    ("D", 1.0, 1.3),
];

/// Draws one order per catalog entry. Theoretical times are rounded
/// to two decimals, as entered by hand.
pub fn random_orders<R: Rng>(catalog: &[ProductSpec], rng: &mut R) -> Vec<ProductOrder> {
    catalog
        .iter()
        .map(|spec| {
            let quantity = rng.random_range(spec.quantity_range.0..=spec.quantity_range.1);
            let time = round2(rng.random_range(spec.time_range.0..=spec.time_range.1));
            ProductOrder::new(spec.name, quantity, time)
        })
        .collect()
}

/// Draws four lines A–D with coefficients in their bands, rounded to
/// two decimals.
pub fn random_lines<R: Rng>(rng: &mut R) -> Vec<ProductionLine> {
    LINE_BANDS
        .iter()
        .map(|&(id, lo, hi)| ProductionLine::new(id, round2(rng.random_range(lo..=hi))))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_orders_stay_in_catalog_ranges() {
        let catalog = default_catalog();
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..50 {
            let orders = random_orders(&catalog, &mut rng);
            assert_eq!(orders.len(), catalog.len());
            for (order, spec) in orders.iter().zip(&catalog) {
                assert_eq!(order.product, spec.name);
                assert!(order.quantity >= spec.quantity_range.0);
                assert!(order.quantity <= spec.quantity_range.1);
                assert!(order.theoretical_time >= spec.time_range.0 - 0.005);
                assert!(order.theoretical_time <= spec.time_range.1 + 0.005);
            }
        }
    }

    #[test]
    fn test_lines_stay_in_bands() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..50 {
            let lines = random_lines(&mut rng);
            assert_eq!(lines.len(), 4);
            for (line, &(id, lo, hi)) in lines.iter().zip(&LINE_BANDS) {
                assert_eq!(line.id, id);
                assert!(line.efficiency >= lo - 0.005);
                assert!(line.efficiency <= hi + 0.005);
                assert!(line.products.is_empty());
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let catalog = default_catalog();
        let a = random_orders(&catalog, &mut SmallRng::seed_from_u64(99));
        let b = random_orders(&catalog, &mut SmallRng::seed_from_u64(99));
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.quantity, y.quantity);
            assert!((x.theoretical_time - y.theoretical_time).abs() < 1e-10);
        }
    }

    #[test]
    fn test_two_decimal_rounding() {
        let mut rng = SmallRng::seed_from_u64(3);
        for order in random_orders(&default_catalog(), &mut rng) {
            let scaled = order.theoretical_time * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }
}
