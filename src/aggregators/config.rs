use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::transactions::TransactionRecord;

/// Which category column the share series are grouped by
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum CategoryLevel {
    /// `category_l1`
    #[default]
    TopLevel,
    /// `category_l2`
    SubCategory,
    /// `category_l3`
    Detailed,
}

impl CategoryLevel {
    pub const ALL: [CategoryLevel; 3] = [
        CategoryLevel::TopLevel,
        CategoryLevel::SubCategory,
        CategoryLevel::Detailed,
    ];

    /// The record's label at this level (empty when the row has none)
    pub fn key_of<'a>(&self, record: &'a TransactionRecord) -> &'a str {
        match self {
            CategoryLevel::TopLevel => &record.category_l1,
            CategoryLevel::SubCategory => &record.category_l2,
            CategoryLevel::Detailed => &record.category_l3,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            CategoryLevel::TopLevel => 1,
            CategoryLevel::SubCategory => 2,
            CategoryLevel::Detailed => 3,
        }
    }

    /// Human readable name used in chart titles
    pub fn label(&self) -> &'static str {
        match self {
            CategoryLevel::TopLevel => "Top Level Categories",
            CategoryLevel::SubCategory => "Sub-Categories",
            CategoryLevel::Detailed => "Detailed Categories",
        }
    }
}

impl TryFrom<u8> for CategoryLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CategoryLevel::TopLevel),
            2 => Ok(CategoryLevel::SubCategory),
            3 => Ok(CategoryLevel::Detailed),
            other => Err(format!("Invalid category level {}. Expected 1, 2 or 3", other)),
        }
    }
}

impl From<CategoryLevel> for u8 {
    fn from(level: CategoryLevel) -> Self {
        level.as_u8()
    }
}

impl FromStr for CategoryLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("Invalid category level '{}'. Expected 1, 2 or 3", s))?;
        CategoryLevel::try_from(value)
    }
}

/// Grouping applied when bucketing records
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupingConfig {
    #[serde(default)]
    pub category_level: CategoryLevel,
}

impl GroupingConfig {
    pub fn new(category_level: CategoryLevel) -> Self {
        Self { category_level }
    }
}

/// Configuration for the market share processor
#[derive(Clone, Debug, Default)]
pub struct AggregatorsConfig {
    /// Level used when a request does not name one
    pub default_level: CategoryLevel,
}

impl AggregatorsConfig {
    pub fn new(default_level: CategoryLevel) -> Self {
        Self { default_level }
    }
}
