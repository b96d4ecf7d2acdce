use serde::{Deserialize, Serialize};

use crate::aggregators::filters::FilterSet;

/// A category picked from the tree, with its full path from the root
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectedCategory {
    pub name: String,
    pub path: Vec<String>,
}

impl SelectedCategory {
    pub fn top_level(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: vec![name.clone()],
            name,
        }
    }

    /// Dotted path, the identity of a selection
    pub fn key(&self) -> String {
        self.path.join(".")
    }
}

/// Filters stored with a segment.
///
/// The demographic lists were added after the first storage format, so they
/// default to empty when reading older files.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentFilters {
    #[serde(default)]
    pub categories: Vec<SelectedCategory>,
    #[serde(default)]
    pub retailers: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub age_groups: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub income_brackets: Vec<String>,
}

impl SegmentFilters {
    /// Pipeline filters for this segment. Categories match on their name.
    pub fn to_filter_set(&self) -> FilterSet {
        FilterSet {
            categories: self.categories.iter().map(|c| c.name.clone()).collect(),
            retailers: self.retailers.clone(),
            brands: self.brands.clone(),
            age_groups: self.age_groups.clone(),
            regions: self.regions.clone(),
            genders: self.genders.clone(),
            income_brackets: self.income_brackets.clone(),
        }
    }
}

/// A named, persisted filter preset
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub filters: SegmentFilters,
}

/// Payload for creating or replacing a segment
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SegmentInputArgs {
    pub name: String,
    #[serde(default)]
    pub filters: SegmentFilters,
}
