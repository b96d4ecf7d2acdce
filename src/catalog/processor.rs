use anyhow::Result;

use crate::catalog::CatalogConfig;
use crate::catalog::operations::{filter_options, search_categories};
use crate::catalog::processor_enums::{CatalogProcessorInput, CatalogProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<CatalogConfig, CatalogProcessorOutput> for CatalogProcessorInput {
    async fn process(
        &self,
        app_config: &mut AppConfig,
        _local_config: &mut CatalogConfig,
    ) -> Result<CatalogProcessorOutput> {
        let options = filter_options(&app_config.transactions);

        match self {
            CatalogProcessorInput::FilterOptions => Ok(CatalogProcessorOutput::FilterOptions(options)),
            CatalogProcessorInput::CategoryTree => {
                Ok(CatalogProcessorOutput::CategoryTree(options.categories))
            }
            CatalogProcessorInput::SearchCategories(term) => {
                let result = search_categories(&options.categories, term);
                tracing::debug!("Category search '{}' matched {} nodes", term, result.matches.len());
                Ok(CatalogProcessorOutput::SearchCategories(result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::storage::InMemorySegmentStore;

    #[tokio::test]
    async fn test_search_on_empty_table_uses_default_hierarchy() {
        let mut app_config = AppConfig::new(Vec::new(), InMemorySegmentStore::new());
        let mut config = CatalogConfig::default();

        let output = CatalogProcessorInput::SearchCategories("watch".to_string())
            .process(&mut app_config, &mut config)
            .await
            .unwrap();

        match output {
            CatalogProcessorOutput::SearchCategories(result) => {
                // Watches and Smartwatches
                assert_eq!(result.matches.len(), 2);
                assert_eq!(
                    result.expanded,
                    vec![
                        "Apparel & Accessories",
                        "Apparel & Accessories.Accessories",
                        "Electronics",
                        "Electronics.Mobile Devices",
                    ]
                );
            }
            other => panic!("Unexpected output: {:?}", other),
        }
    }
}
