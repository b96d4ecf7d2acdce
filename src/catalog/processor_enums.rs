use serde::{Deserialize, Serialize};

use crate::catalog::db_types::{CategorySearchResult, CategoryTree, FilterOptions};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum CatalogProcessorInput {
    FilterOptions,
    CategoryTree,
    SearchCategories(String),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum CatalogProcessorOutput {
    FilterOptions(FilterOptions),
    CategoryTree(CategoryTree),
    SearchCategories(CategorySearchResult),
}
