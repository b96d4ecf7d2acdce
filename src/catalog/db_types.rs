use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the category hierarchy
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Three-level category hierarchy (L1 → L2 → L3)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTree {
    pub roots: Vec<CategoryNode>,
}

type NestedLabels = BTreeMap<String, BTreeMap<String, Vec<String>>>;

impl CategoryTree {
    pub(crate) fn from_nested(nested: NestedLabels) -> Self {
        let roots = nested
            .into_iter()
            .map(|(l1, l2s)| CategoryNode {
                name: l1,
                children: l2s
                    .into_iter()
                    .map(|(l2, l3s)| CategoryNode {
                        name: l2,
                        children: l3s.into_iter().map(CategoryNode::leaf).collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { roots }
    }

    /// The hierarchy shown by the dashboard before any data is loaded
    pub fn default_hierarchy() -> Self {
        const DEFAULT: [(&str, [(&str, &[&str]); 3]); 3] = [
            (
                "Apparel & Accessories",
                [
                    ("Clothing", &["Tops", "Bottoms", "Dresses", "Outerwear"]),
                    ("Shoes", &["Athletic", "Casual", "Formal"]),
                    ("Accessories", &["Bags", "Jewelry", "Watches"]),
                ],
            ),
            (
                "Electronics",
                [
                    ("Computers", &["Laptops", "Desktops", "Tablets"]),
                    ("Mobile Devices", &["Smartphones", "Smartwatches"]),
                    ("Audio", &["Headphones", "Speakers"]),
                ],
            ),
            (
                "Home & Garden",
                [
                    ("Furniture", &["Living Room", "Bedroom", "Dining Room"]),
                    ("Appliances", &["Kitchen", "Laundry"]),
                    ("Decor", &["Wall Art", "Lighting", "Rugs"]),
                ],
            ),
        ];

        let roots = DEFAULT
            .iter()
            .map(|(l1, l2s)| CategoryNode {
                name: l1.to_string(),
                children: l2s
                    .iter()
                    .map(|(l2, l3s)| CategoryNode {
                        name: l2.to_string(),
                        children: l3s.iter().map(|l3| CategoryNode::leaf(*l3)).collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Result of searching the category tree.
///
/// `matches` holds the path of every node whose label contains the term,
/// `expanded` the dotted path of every node that has to be open for all
/// matches to be visible.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySearchResult {
    pub term: String,
    pub matches: Vec<Vec<String>>,
    pub expanded: Vec<String>,
}

/// Selectable values for every filter dimension
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: CategoryTree,
    pub retailers: Vec<String>,
    pub brands: Vec<String>,
    pub age_groups: Vec<String>,
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub income_brackets: Vec<String>,
}
