use anyhow::Result;

use crate::aggregators::config::{AggregatorsConfig, GroupingConfig};
use crate::aggregators::processor_enums::{AggregatorsProcessorInput, AggregatorsProcessorOutput};
use crate::aggregators::share_series::build_chart;
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<AggregatorsConfig, AggregatorsProcessorOutput> for AggregatorsProcessorInput {
    async fn process(
        &self,
        app_config: &mut AppConfig,
        local_config: &mut AggregatorsConfig,
    ) -> Result<AggregatorsProcessorOutput> {
        match self {
            AggregatorsProcessorInput::MarketShare(args) => {
                let grouping = GroupingConfig::new(
                    args.category_level.unwrap_or(local_config.default_level),
                );

                let chart = build_chart(&app_config.transactions, &args.filters, &grouping);

                tracing::debug!(
                    "Market share at level {}: {} records, {} series over {} months",
                    grouping.category_level.as_u8(),
                    chart.record_count,
                    chart.series.len(),
                    chart.months.len()
                );

                Ok(AggregatorsProcessorOutput::MarketShare(chart))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregators::config::CategoryLevel;
    use crate::aggregators::filters::{FilterDimension, FilterSet};
    use crate::aggregators::processor_enums::MarketShareInputArgs;
    use crate::segments::storage::InMemorySegmentStore;
    use crate::transactions::load_transactions;

    const CSV: &str = "\
date,category_l1,category_l2,category_l3,retailer,brand,age_group,region,gender,income_bracket,price,quantity
2024-01-15,Electronics,Computers,Laptops,Best Buy,Apple,25-34,West,Female,$50k-$74k,100,2
2024-01-20,Home,Decor,Rugs,Target,Ashley,35-44,West,Male,$50k-$74k,50,1
";

    fn app_config() -> AppConfig {
        let table = load_transactions(CSV.as_bytes()).unwrap();
        AppConfig::new(table.records, InMemorySegmentStore::new())
    }

    #[tokio::test]
    async fn test_default_level_is_used() {
        let mut app_config = app_config();
        let mut config = AggregatorsConfig::new(CategoryLevel::SubCategory);

        let output = AggregatorsProcessorInput::MarketShare(MarketShareInputArgs::default())
            .process(&mut app_config, &mut config)
            .await
            .unwrap();

        let AggregatorsProcessorOutput::MarketShare(chart) = output;
        assert_eq!(chart.level, CategoryLevel::SubCategory);
        assert_eq!(chart.series[0].category, "Computers");
    }

    #[tokio::test]
    async fn test_filters_are_applied() {
        let mut app_config = app_config();
        let mut config = AggregatorsConfig::default();

        let args = MarketShareInputArgs {
            filters: FilterSet::new().with(FilterDimension::Gender, "Male"),
            category_level: Some(CategoryLevel::TopLevel),
        };
        let AggregatorsProcessorOutput::MarketShare(chart) =
            AggregatorsProcessorInput::MarketShare(args)
                .process(&mut app_config, &mut config)
                .await
                .unwrap();

        assert_eq!(chart.record_count, 1);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].category, "Home");
        assert!((chart.series[0].average_share - 100.0).abs() < 1e-9);
    }
}
