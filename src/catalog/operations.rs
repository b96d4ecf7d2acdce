use std::collections::{BTreeMap, BTreeSet};

use crate::aggregators::filters::FilterDimension;
use crate::catalog::db_types::{CategoryNode, CategorySearchResult, CategoryTree, FilterOptions};
use crate::transactions::TransactionRecord;

fn distinct_values(records: &[TransactionRecord], dimension: FilterDimension) -> Vec<String> {
    records
        .iter()
        .map(|r| dimension.value_of(r))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Build the hierarchy present in the loaded table. Empty labels end a branch.
pub fn category_tree(records: &[TransactionRecord]) -> CategoryTree {
    let mut nested: BTreeMap<String, BTreeMap<String, BTreeSet<String>>> = BTreeMap::new();

    for record in records {
        if record.category_l1.is_empty() {
            continue;
        }
        let l2s = nested.entry(record.category_l1.clone()).or_default();
        if record.category_l2.is_empty() {
            continue;
        }
        let l3s = l2s.entry(record.category_l2.clone()).or_default();
        if !record.category_l3.is_empty() {
            l3s.insert(record.category_l3.clone());
        }
    }

    CategoryTree::from_nested(
        nested
            .into_iter()
            .map(|(l1, l2s)| {
                let l2s = l2s
                    .into_iter()
                    .map(|(l2, l3s)| (l2, l3s.into_iter().collect()))
                    .collect();
                (l1, l2s)
            })
            .collect(),
    )
}

pub fn filter_options(records: &[TransactionRecord]) -> FilterOptions {
    let tree = category_tree(records);

    FilterOptions {
        categories: if tree.is_empty() {
            CategoryTree::default_hierarchy()
        } else {
            tree
        },
        retailers: distinct_values(records, FilterDimension::Retailer),
        brands: distinct_values(records, FilterDimension::Brand),
        age_groups: distinct_values(records, FilterDimension::AgeGroup),
        regions: distinct_values(records, FilterDimension::Region),
        genders: distinct_values(records, FilterDimension::Gender),
        income_brackets: distinct_values(records, FilterDimension::IncomeBracket),
    }
}

/// Case-insensitive substring search over every level of the tree
pub fn search_categories(tree: &CategoryTree, term: &str) -> CategorySearchResult {
    let needle = term.trim().to_lowercase();
    let mut result = CategorySearchResult {
        term: term.trim().to_string(),
        ..Default::default()
    };

    let mut path = Vec::new();
    for root in &tree.roots {
        visit(root, &needle, &mut path, &mut result);
    }

    result
}

// Returns whether the node or anything below it matched.
fn visit(
    node: &CategoryNode,
    needle: &str,
    path: &mut Vec<String>,
    result: &mut CategorySearchResult,
) -> bool {
    path.push(node.name.clone());

    let own_match = needle.is_empty() || node.name.to_lowercase().contains(needle);
    if own_match {
        result.matches.push(path.clone());
    }

    // Reserve the slot so ancestors are listed before their descendants
    let slot = result.expanded.len();
    let mut descendant_match = false;
    for child in &node.children {
        descendant_match |= visit(child, needle, path, result);
    }

    if !needle.is_empty() && !node.is_leaf() && (own_match || descendant_match) {
        result.expanded.insert(slot, path.join("."));
    }

    path.pop();
    own_match || descendant_match
}
