pub mod db_types;
pub mod operations;
pub mod processor;
pub mod processor_enums;

pub use db_types::{CategoryNode, CategorySearchResult, CategoryTree, FilterOptions};
pub use operations::{category_tree, filter_options, search_categories};
pub use processor_enums::{CatalogProcessorInput, CatalogProcessorOutput};

#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {}
