use serde::{Deserialize, Serialize};

use crate::transactions::TransactionRecord;

/// A column the dashboard can filter on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    /// Matched against `category_l1`
    Category,
    Retailer,
    Brand,
    AgeGroup,
    Region,
    Gender,
    IncomeBracket,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 7] = [
        FilterDimension::Category,
        FilterDimension::Retailer,
        FilterDimension::Brand,
        FilterDimension::AgeGroup,
        FilterDimension::Region,
        FilterDimension::Gender,
        FilterDimension::IncomeBracket,
    ];

    pub fn value_of<'a>(&self, record: &'a TransactionRecord) -> &'a str {
        match self {
            FilterDimension::Category => &record.category_l1,
            FilterDimension::Retailer => &record.retailer,
            FilterDimension::Brand => &record.brand,
            FilterDimension::AgeGroup => &record.age_group,
            FilterDimension::Region => &record.region,
            FilterDimension::Gender => &record.gender,
            FilterDimension::IncomeBracket => &record.income_bracket,
        }
    }
}

/// Inclusion lists for every filter dimension.
///
/// An empty list leaves its dimension unconstrained. Values are OR'd within
/// a dimension and dimensions are AND'd together.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FilterSet {
    pub categories: Vec<String>,
    pub retailers: Vec<String>,
    pub brands: Vec<String>,
    pub age_groups: Vec<String>,
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub income_brackets: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style helper, appends `value` to the dimension's list
    pub fn with(mut self, dimension: FilterDimension, value: impl Into<String>) -> Self {
        self.values_mut(dimension).push(value.into());
        self
    }

    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Category => &self.categories,
            FilterDimension::Retailer => &self.retailers,
            FilterDimension::Brand => &self.brands,
            FilterDimension::AgeGroup => &self.age_groups,
            FilterDimension::Region => &self.regions,
            FilterDimension::Gender => &self.genders,
            FilterDimension::IncomeBracket => &self.income_brackets,
        }
    }

    pub fn values_mut(&mut self, dimension: FilterDimension) -> &mut Vec<String> {
        match dimension {
            FilterDimension::Category => &mut self.categories,
            FilterDimension::Retailer => &mut self.retailers,
            FilterDimension::Brand => &mut self.brands,
            FilterDimension::AgeGroup => &mut self.age_groups,
            FilterDimension::Region => &mut self.regions,
            FilterDimension::Gender => &mut self.genders,
            FilterDimension::IncomeBracket => &mut self.income_brackets,
        }
    }

    /// Add every value of `other` not already selected here.
    ///
    /// Values join the existing list as alternatives, so a dimension both sets
    /// constrain is widened. A dimension only `other` constrains becomes constrained.
    pub fn merge(&mut self, other: &FilterSet) {
        for (dim, values) in other.active() {
            let target = self.values_mut(dim);
            for value in values {
                if !target.contains(value) {
                    target.push(value.clone());
                }
            }
        }
    }

    /// `(dimension, selected values)` pairs that actually constrain records
    pub fn active(&self) -> impl Iterator<Item = (FilterDimension, &[String])> {
        FilterDimension::ALL
            .into_iter()
            .map(|dim| (dim, self.values(dim)))
            .filter(|(_, selected)| !selected.is_empty())
    }

    /// True when no dimension is constrained
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.active().all(|(dim, selected)| {
            let value = dim.value_of(record);
            selected.iter().any(|s| s == value)
        })
    }

    pub fn apply<'a>(&self, records: &'a [TransactionRecord]) -> Vec<&'a TransactionRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
