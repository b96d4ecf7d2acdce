use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::aggregators::config::{CategoryLevel, GroupingConfig};
use crate::aggregators::filters::FilterSet;
use crate::transactions::TransactionRecord;

/*
 * Mechanic:
 * - keep the records that pass every active filter dimension
 * - bucket revenue (price x quantity) by YYYY-MM and the selected category level
 * - divide each bucket by its month's total to get a percentage share
 * - average each category's shares and order the series for stacking
 */

/// month -> category -> summed revenue
pub type MonthlyTotals = BTreeMap<String, BTreeMap<String, BigDecimal>>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SharePoint {
    /// `YYYY-MM`
    pub month: String,
    /// Percentage of the month's revenue, 0..=100
    pub share: f64,
}

/// One stacked series of the market share chart
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub category: String,
    pub points: Vec<SharePoint>,
    pub average_share: f64,
}

/// Chart payload handed to the visualization
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarketShareChart {
    pub level: CategoryLevel,
    pub title: String,
    pub months: Vec<String>,
    pub series: Vec<SeriesPoint>,
    /// Records that passed the filters
    pub record_count: usize,
}

/// Accumulate revenue per (month, category) bucket.
///
/// Rows without a label at `level` land in the empty-string bucket so they
/// still count toward their month's total.
pub fn bucket<'a, I>(records: I, level: CategoryLevel) -> MonthlyTotals
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut totals = MonthlyTotals::new();

    for record in records {
        let category = level.key_of(record).to_string();
        let revenue = record.revenue();

        let month = totals.entry(record.month_key()).or_default();
        let cell = month.entry(category).or_insert_with(BigDecimal::zero);
        *cell += revenue;
    }

    totals
}

/// Turn bucketed revenue into share series ordered by average share
/// (descending, ties by category label ascending).
pub fn to_share_series(totals: &MonthlyTotals) -> Vec<SeriesPoint> {
    let month_totals: Vec<(&String, BigDecimal)> = totals
        .iter()
        .map(|(month, categories)| {
            let total = categories
                .values()
                .fold(BigDecimal::zero(), |acc, value| acc + value);
            (month, total)
        })
        .collect();

    let categories: BTreeSet<&String> = totals
        .values()
        .flat_map(|categories| categories.keys())
        .filter(|category| !category.is_empty())
        .collect();

    let mut series: Vec<SeriesPoint> = categories
        .into_iter()
        .map(|category| {
            let points: Vec<SharePoint> = month_totals
                .iter()
                .map(|(month, total)| {
                    let value = totals
                        .get(*month)
                        .and_then(|categories| categories.get(category));
                    SharePoint {
                        month: (*month).clone(),
                        share: share_percent(value, total),
                    }
                })
                .collect();

            let average_share = if points.is_empty() {
                0.0
            } else {
                points.iter().map(|p| p.share).sum::<f64>() / points.len() as f64
            };

            SeriesPoint {
                category: category.clone(),
                points,
                average_share,
            }
        })
        .collect();

    series.sort_by(|a, b| {
        b.average_share
            .total_cmp(&a.average_share)
            .then_with(|| a.category.cmp(&b.category))
    });

    series
}

fn share_percent(value: Option<&BigDecimal>, total: &BigDecimal) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };
    if total.is_zero() {
        return 0.0;
    }

    let value = value.to_f64().unwrap_or(0.0);
    let total = total.to_f64().unwrap_or(0.0);
    if total == 0.0 {
        return 0.0;
    }

    value / total * 100.0
}

/// The full pipeline: filter, bucket, normalize, summarize
pub fn aggregate(
    records: &[TransactionRecord],
    filters: &FilterSet,
    grouping: &GroupingConfig,
) -> Vec<SeriesPoint> {
    let filtered = filters.apply(records);
    let totals = bucket(filtered, grouping.category_level);
    to_share_series(&totals)
}

/// Same as [`aggregate`] but wrapped with the month axis and chart title
pub fn build_chart(
    records: &[TransactionRecord],
    filters: &FilterSet,
    grouping: &GroupingConfig,
) -> MarketShareChart {
    let filtered = filters.apply(records);
    let record_count = filtered.len();
    let totals = bucket(filtered, grouping.category_level);

    MarketShareChart {
        level: grouping.category_level,
        title: format!("Market Share by {} Over Time", grouping.category_level.label()),
        months: totals.keys().cloned().collect(),
        series: to_share_series(&totals),
        record_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregators::filters::FilterDimension;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn record(date: &str, l1: &str, l2: &str, price: &str, quantity: u64) -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category_l1: l1.to_string(),
            category_l2: l2.to_string(),
            category_l3: String::new(),
            retailer: "Walmart".to_string(),
            brand: "Sony".to_string(),
            age_group: "25-34".to_string(),
            region: "West".to_string(),
            gender: "Female".to_string(),
            income_bracket: "$50k-$74k".to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            quantity,
        }
    }

    fn top_level() -> GroupingConfig {
        GroupingConfig::new(CategoryLevel::TopLevel)
    }

    fn mixed_sample() -> Vec<TransactionRecord> {
        vec![
            record("2024-01-03", "Electronics", "Computers", "899.99", 1),
            record("2024-01-17", "Home & Garden", "Decor", "120.50", 2),
            record("2024-01-28", "Apparel & Accessories", "Shoes", "89.99", 3),
            record("2024-02-02", "Electronics", "Audio", "249.00", 2),
            record("2024-02-14", "Apparel & Accessories", "Clothing", "35.10", 1),
            record("2024-03-09", "Home & Garden", "Furniture", "640.00", 1),
            record("2024-03-21", "Electronics", "Computers", "1299.99", 1),
        ]
    }

    #[test]
    fn test_two_category_scenario() {
        let records = vec![
            record("2024-01-15", "Electronics", "", "100", 2),
            record("2024-01-20", "Home", "", "50", 1),
        ];

        let series = aggregate(&records, &FilterSet::new(), &top_level());
        assert_eq!(series.len(), 2);

        assert_eq!(series[0].category, "Electronics");
        assert_eq!(series[0].points.len(), 1);
        assert_eq!(series[0].points[0].month, "2024-01");
        assert!((series[0].points[0].share - 80.0).abs() < 1e-9);

        assert_eq!(series[1].category, "Home");
        assert!((series[1].points[0].share - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmatched_filter_yields_empty_output() {
        let records = vec![
            record("2024-01-15", "Electronics", "", "100", 2),
            record("2024-01-20", "Home", "", "50", 1),
        ];
        let filters = FilterSet::new().with(FilterDimension::Retailer, "Target");

        assert!(aggregate(&records, &filters, &top_level()).is_empty());

        let chart = build_chart(&records, &filters, &top_level());
        assert!(chart.series.is_empty());
        assert!(chart.months.is_empty());
        assert_eq!(chart.record_count, 0);
    }

    #[test]
    fn test_shares_sum_to_one_hundred_per_month() {
        let series = aggregate(&mixed_sample(), &FilterSet::new(), &top_level());

        for month in ["2024-01", "2024-02", "2024-03"] {
            let sum: f64 = series
                .iter()
                .flat_map(|s| s.points.iter())
                .filter(|p| p.month == month)
                .map(|p| p.share)
                .sum();
            assert!((sum - 100.0).abs() < 1e-9, "{} summed to {}", month, sum);
        }
    }

    #[test]
    fn test_absent_category_gets_zero_and_months_are_sorted() {
        let series = aggregate(&mixed_sample(), &FilterSet::new(), &top_level());

        let home = series.iter().find(|s| s.category == "Home & Garden").unwrap();
        let months: Vec<&str> = home.points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(home.points[1].share, 0.0);
    }

    #[test]
    fn test_days_collide_into_one_month() {
        let records = vec![
            record("2024-05-01", "Electronics", "", "10", 1),
            record("2024-05-31", "Electronics", "", "10", 1),
        ];
        let totals = bucket(&records, CategoryLevel::TopLevel);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["2024-05"]["Electronics"], BigDecimal::from(20));
    }

    #[test]
    fn test_zero_revenue_month_is_zero_not_nan() {
        let records = vec![
            record("2024-01-10", "Electronics", "", "0", 5),
            record("2024-01-11", "Home", "", "10", 0),
            record("2024-02-11", "Home", "", "10", 1),
        ];
        let series = aggregate(&records, &FilterSet::new(), &top_level());

        for s in &series {
            let january = s.points.iter().find(|p| p.month == "2024-01").unwrap();
            assert_eq!(january.share, 0.0);
            assert!(!s.average_share.is_nan());
        }

        let home = series.iter().find(|s| s.category == "Home").unwrap();
        assert!((home.average_share - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_unlabelled_rows_count_toward_total_but_have_no_series() {
        let records = vec![
            record("2024-01-15", "Electronics", "Computers", "75", 1),
            record("2024-01-15", "Electronics", "", "25", 1),
        ];
        let grouping = GroupingConfig::new(CategoryLevel::SubCategory);
        let series = aggregate(&records, &FilterSet::new(), &grouping);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].category, "Computers");
        assert!((series[0].points[0].share - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_sort_is_descending_with_label_tiebreak() {
        let records = vec![
            record("2024-01-15", "Zeta", "", "10", 1),
            record("2024-01-15", "Alpha", "", "10", 1),
            record("2024-01-15", "Mid", "", "30", 1),
        ];
        let series = aggregate(&records, &FilterSet::new(), &top_level());
        let order: Vec<&str> = series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["Mid", "Alpha", "Zeta"]);

        for pair in series.windows(2) {
            assert!(pair[0].average_share >= pair[1].average_share);
        }
    }

    #[test]
    fn test_idempotent() {
        let records = mixed_sample();
        let filters = FilterSet::new().with(FilterDimension::Gender, "Female");
        let grouping = GroupingConfig::new(CategoryLevel::SubCategory);

        let first = build_chart(&records, &filters, &grouping);
        let second = build_chart(&records, &filters, &grouping);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_regrouping_rebuckets_from_records() {
        let records = mixed_sample();
        let level_one = aggregate(&records, &FilterSet::new(), &top_level());
        let level_two = aggregate(
            &records,
            &FilterSet::new(),
            &GroupingConfig::new(CategoryLevel::SubCategory),
        );

        let labels: BTreeSet<&str> = level_two.iter().map(|s| s.category.as_str()).collect();
        assert!(labels.contains("Computers"));
        assert!(labels.contains("Audio"));
        assert!(!labels.contains("Electronics"));
        assert!(level_two.len() > level_one.len());

        let computers = level_two.iter().find(|s| s.category == "Computers").unwrap();
        let january = &computers.points[0];
        let expected = 899.99 / (899.99 + 241.0 + 269.97) * 100.0;
        assert!((january.share - expected).abs() < 1e-9);
    }

    #[test]
    fn test_chart_title_and_months() {
        let chart = build_chart(
            &mixed_sample(),
            &FilterSet::new(),
            &GroupingConfig::new(CategoryLevel::Detailed),
        );
        assert_eq!(chart.title, "Market Share by Detailed Categories Over Time");
        assert_eq!(chart.months, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(chart.record_count, 7);
        // every detailed label is empty in the sample
        assert!(chart.series.is_empty());
    }
}
