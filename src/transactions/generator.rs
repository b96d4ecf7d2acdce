use anyhow::{Result, anyhow};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io::Write;

/// Configuration for mock transaction generation
#[derive(Debug, Clone)]
pub struct MockDataConfig {
    /// Number of transactions to generate
    pub rows: usize,
    /// First day of the generated period
    pub start_date: NaiveDate,
    /// Length of the period in days
    pub span_days: i64,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            rows: 9_999,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            span_days: 365,
            seed: None,
        }
    }
}

/// A generated row, serialized with the full source-table column set
#[derive(Debug, Clone, Serialize)]
pub struct MockTransaction {
    pub transaction_id: usize,
    pub date: String,
    pub customer_id: String,
    pub age_group: String,
    pub gender: String,
    pub region: String,
    pub income_bracket: String,
    pub category_l1: String,
    pub category_l2: String,
    pub category_l3: String,
    pub retailer: String,
    pub brand: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

const AGE_GROUPS: [&str; 6] = ["18-24", "25-34", "35-44", "45-54", "55-64", "65+"];
const GENDERS: [&str; 3] = ["Male", "Female", "Non-binary"];
const REGIONS: [&str; 5] = ["Northeast", "Southeast", "Midwest", "Southwest", "West"];
const INCOME_BRACKETS: [&str; 5] = ["$25k-$49k", "$50k-$74k", "$75k-$99k", "$100k-$149k", "$150k+"];
const RETAILERS: [&str; 6] = ["Target", "Walmart", "Best Buy", "The Home Depot", "Lowes", "Dicks"];

/// (level 1, brands, price range, [(level 2, [(level 3, product names)])])
type CategorySpec = (
    &'static str,
    &'static [&'static str],
    (f64, f64),
    &'static [(&'static str, &'static [(&'static str, &'static [&'static str])])],
);

const CATALOG: [CategorySpec; 3] = [
    (
        "Apparel & Accessories",
        &["Nike", "Adidas", "North Face", "Coach", "Cole Haan"],
        (19.99, 299.99),
        &[
            (
                "Clothing",
                &[
                    ("Tops", &["Running Tank", "V-Neck Tee", "Performance Polo", "Workout Shirt"]),
                    ("Bottoms", &["Slim Fit Jeans", "Athletic Shorts", "Yoga Pants", "Chino Pants"]),
                    ("Dresses", &["Summer Maxi", "Cocktail Dress", "Wrap Dress", "Evening Gown"]),
                    ("Outerwear", &["Winter Parka", "Rain Jacket", "Fleece Pullover", "Windbreaker"]),
                ],
            ),
            (
                "Shoes",
                &[
                    ("Athletic", &["Running Shoes", "Training Shoes", "Basketball Shoes", "Tennis Shoes"]),
                    ("Casual", &["Slip-on Sneakers", "Canvas Shoes", "Loafers", "Sandals"]),
                    ("Formal", &["Oxford Shoes", "Dress Boots", "Heels", "Loafers"]),
                ],
            ),
            (
                "Accessories",
                &[
                    ("Bags", &["Backpack", "Tote Bag", "Crossbody Bag", "Duffel Bag"]),
                    ("Jewelry", &["Silver Necklace", "Gold Bracelet", "Diamond Earrings", "Watch"]),
                    ("Watches", &["Smartwatch", "Chronograph Watch", "Dress Watch", "Sports Watch"]),
                ],
            ),
        ],
    ),
    (
        "Electronics",
        &["Apple", "Samsung", "Sony", "Dell", "Bose"],
        (199.99, 1499.99),
        &[
            (
                "Computers",
                &[
                    ("Laptops", &["MacBook Air", "ThinkPad X1", "XPS 13", "Chromebook"]),
                    ("Desktops", &["iMac", "Gaming PC", "All-in-One", "Workstation"]),
                    ("Tablets", &["iPad Pro", "Galaxy Tab", "Surface Pro", "Fire HD"]),
                ],
            ),
            (
                "Mobile Devices",
                &[
                    ("Smartphones", &["iPhone 15", "Galaxy S24", "Pixel 8", "OnePlus 12"]),
                    ("Smartwatches", &["Apple Watch", "Galaxy Watch", "Fitbit Sense", "Garmin"]),
                ],
            ),
            (
                "Audio",
                &[
                    ("Headphones", &["AirPods Pro", "QC45", "WH-1000XM5", "Buds Pro"]),
                    ("Speakers", &["HomePod", "Sonos One", "Echo Studio", "SoundLink"]),
                ],
            ),
        ],
    ),
    (
        "Home & Garden",
        &["Weber", "Traeger", "Ashley", "Nexgrill", "Scotts"],
        (49.99, 999.99),
        &[
            (
                "Furniture",
                &[
                    ("Living Room", &["Sofa Set", "Coffee Table", "TV Stand", "Recliner"]),
                    ("Bedroom", &["Bed Frame", "Mattress", "Dresser", "Nightstand"]),
                    ("Dining Room", &["Dining Table", "Chair Set", "Buffet", "Bar Stools"]),
                ],
            ),
            (
                "Appliances",
                &[
                    ("Kitchen", &["Gas Range", "Refrigerator", "Dishwasher", "Microwave"]),
                    ("Laundry", &["Washer", "Dryer", "Washer/Dryer Combo", "Steam Iron"]),
                ],
            ),
            (
                "Decor",
                &[
                    ("Wall Art", &["Canvas Print", "Metal Wall Art", "Photo Frames", "Mirrors"]),
                    ("Lighting", &["Pendant Light", "Floor Lamp", "Table Lamp", "Chandelier"]),
                    ("Rugs", &["Area Rug", "Runner", "Outdoor Rug", "Bath Mat"]),
                ],
            ),
        ],
    ),
];

/// Static L1 → L2 → L3 hierarchy used by the generator
pub fn catalog_hierarchy() -> Vec<(&'static str, Vec<(&'static str, Vec<&'static str>)>)> {
    CATALOG
        .iter()
        .map(|(l1, _, _, l2s)| {
            let children = l2s
                .iter()
                .map(|(l2, l3s)| (*l2, l3s.iter().map(|(l3, _)| *l3).collect()))
                .collect();
            (*l1, children)
        })
        .collect()
}

/// Transaction generator over the static catalog
pub struct MockDataGenerator {
    config: MockDataConfig,
    rng: StdRng,
}

impl MockDataGenerator {
    pub fn new(config: MockDataConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Generate the configured number of transactions
    pub fn generate(&mut self) -> Result<Vec<MockTransaction>> {
        (1..=self.config.rows).map(|id| self.generate_one(id)).collect()
    }

    fn generate_one(&mut self, transaction_id: usize) -> Result<MockTransaction> {
        let rng = &mut self.rng;

        let offset = rng.gen_range(0..self.config.span_days.max(1));
        let date = self.config.start_date + Duration::days(offset);

        let (cat_l1, brands, (min_price, max_price), l2s) =
            CATALOG.choose(rng).ok_or_else(|| anyhow!("Empty catalog"))?;
        let (cat_l2, l3s) = l2s.choose(rng).ok_or_else(|| anyhow!("Empty sub-categories"))?;
        let (cat_l3, products) = l3s.choose(rng).ok_or_else(|| anyhow!("Empty detailed categories"))?;

        let brand = pick(brands, rng)?;
        let product_base = products
            .choose(rng)
            .map(|p| p.to_string())
            .unwrap_or_else(|| format!("{} Product", cat_l3));

        let price = (rng.gen_range(*min_price..=*max_price) * 100.0).round() / 100.0;

        Ok(MockTransaction {
            transaction_id,
            date: date.format("%Y-%m-%d").to_string(),
            customer_id: format!("C{}", rng.gen_range(1000..=9999)),
            age_group: pick(&AGE_GROUPS, rng)?,
            gender: pick(&GENDERS, rng)?,
            region: pick(&REGIONS, rng)?,
            income_bracket: pick(&INCOME_BRACKETS, rng)?,
            category_l1: cat_l1.to_string(),
            category_l2: cat_l2.to_string(),
            category_l3: cat_l3.to_string(),
            retailer: pick(&RETAILERS, rng)?,
            product_name: format!("{} {}", brand, product_base),
            brand,
            quantity: rng.gen_range(1..=3),
            price,
        })
    }
}

fn pick(items: &[&str], rng: &mut StdRng) -> Result<String> {
    items
        .choose(rng)
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow!("Cannot pick from an empty list"))
}

/// Write transactions as CSV with a header row
pub fn write_transactions_csv<W: Write>(transactions: &[MockTransaction], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for transaction in transactions {
        csv_writer
            .serialize(transaction)
            .map_err(|e| anyhow!("Failed to write transaction {}: {}", transaction.transaction_id, e))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::loader::load_transactions;

    fn seeded(rows: usize) -> MockDataGenerator {
        MockDataGenerator::new(MockDataConfig {
            rows,
            seed: Some(42),
            ..Default::default()
        })
    }

    #[test]
    fn test_generated_rows_are_consistent() {
        let rows = seeded(200).generate().unwrap();
        assert_eq!(rows.len(), 200);

        let hierarchy = catalog_hierarchy();
        for row in &rows {
            let (_, l2s) = hierarchy
                .iter()
                .find(|(l1, _)| *l1 == row.category_l1)
                .expect("level 1 from catalog");
            let (_, l3s) = l2s
                .iter()
                .find(|(l2, _)| *l2 == row.category_l2)
                .expect("level 2 nested under level 1");
            assert!(l3s.contains(&row.category_l3.as_str()));
            assert!((1..=3).contains(&row.quantity));
            assert!(row.date.starts_with("2024-"));
            assert!(row.product_name.starts_with(&row.brand));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = seeded(20).generate().unwrap();
        let b = seeded(20).generate().unwrap();
        let a_dates: Vec<_> = a.iter().map(|r| (&r.date, r.price)).collect();
        let b_dates: Vec<_> = b.iter().map(|r| (&r.date, r.price)).collect();
        assert_eq!(a_dates, b_dates);
    }

    #[test]
    fn test_written_csv_loads_back() {
        let rows = seeded(50).generate().unwrap();
        let mut buffer = Vec::new();
        write_transactions_csv(&rows, &mut buffer).unwrap();

        let table = load_transactions(buffer.as_slice()).unwrap();
        assert_eq!(table.records.len(), 50);
        assert_eq!(table.skipped, 0);
    }
}
