use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One row of the source table exactly as it appears in the CSV.
///
/// Every column is optional: a column missing from the header (or a short
/// row) deserializes to an empty string. Columns not listed here
/// (`transaction_id`, `customer_id`, `product_name`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTransactionRow {
    pub date: String,
    pub category_l1: String,
    pub category_l2: String,
    pub category_l3: String,
    pub retailer: String,
    pub brand: String,
    pub age_group: String,
    pub region: String,
    pub gender: String,
    pub income_bracket: String,
    pub price: String,
    pub quantity: String,
}

/// A validated transaction ready for aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub category_l1: String,
    pub category_l2: String,
    pub category_l3: String,
    pub retailer: String,
    pub brand: String,
    pub age_group: String,
    pub region: String,
    pub gender: String,
    pub income_bracket: String,
    pub price: BigDecimal,
    pub quantity: u64,
}

impl TransactionRecord {
    /// Revenue contribution of the row (`price × quantity`)
    pub fn revenue(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }

    /// `YYYY-MM` bucket the row falls into
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Why a raw row was left out of the table
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowRejection {
    #[error("unparseable date '{0}'")]
    InvalidDate(String),
    #[error("invalid price '{0}'")]
    InvalidPrice(String),
    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),
}

impl TryFrom<RawTransactionRow> for TransactionRecord {
    type Error = RowRejection;

    fn try_from(row: RawTransactionRow) -> Result<Self, Self::Error> {
        let date = parse_transaction_date(&row.date)
            .ok_or_else(|| RowRejection::InvalidDate(row.date.clone()))?;

        let price = BigDecimal::from_str(row.price.trim())
            .ok()
            .filter(|p| *p >= BigDecimal::from(0))
            .ok_or_else(|| RowRejection::InvalidPrice(row.price.clone()))?;

        let quantity = parse_quantity(&row.quantity)
            .ok_or_else(|| RowRejection::InvalidQuantity(row.quantity.clone()))?;

        Ok(Self {
            date,
            category_l1: row.category_l1,
            category_l2: row.category_l2,
            category_l3: row.category_l3,
            retailer: row.retailer,
            brand: row.brand,
            age_group: row.age_group,
            region: row.region,
            gender: row.gender,
            income_bracket: row.income_bracket,
            price,
            quantity,
        })
    }
}

/// Whole, non-negative quantities; integral decimals such as `2.0` are accepted
fn parse_quantity(value: &str) -> Option<u64> {
    let value = value.trim();
    if let Ok(quantity) = value.parse::<u64>() {
        return Some(quantity);
    }

    BigDecimal::from_str(value)
        .ok()
        .filter(|q| q.is_integer())
        .and_then(|q| q.to_u64())
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse the date column, accepting plain dates, naive datetimes and RFC 3339
pub fn parse_transaction_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Some(date);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt.date());
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
