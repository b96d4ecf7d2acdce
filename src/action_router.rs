use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::aggregators::config::AggregatorsConfig;
use crate::aggregators::processor_enums::{AggregatorsProcessorInput, AggregatorsProcessorOutput};
use crate::catalog::CatalogConfig;
use crate::catalog::processor_enums::{CatalogProcessorInput, CatalogProcessorOutput};
use crate::segments::SegmentsConfig;
use crate::segments::processor_enums::{SegmentsProcessorInput, SegmentsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum ActionRouterInput {
    MarketShare(AggregatorsProcessorInput),
    Segments(SegmentsProcessorInput),
    Catalog(CatalogProcessorInput),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum ActionRouterOutput {
    MarketShare(AggregatorsProcessorOutput),
    Segments(SegmentsProcessorOutput),
    Catalog(CatalogProcessorOutput),
}

impl ActionRouterInput {
    pub async fn process(&self, app_config: AppConfig) -> Result<ActionRouterOutput> {
        let mut app_config = app_config;
        match self {
            ActionRouterInput::MarketShare(processor) => {
                let mut config = AggregatorsConfig::default();
                let res = processor.process(&mut app_config, &mut config).await?;
                Ok(ActionRouterOutput::MarketShare(res))
            }
            ActionRouterInput::Segments(processor) => {
                let mut config = SegmentsConfig::default();
                let res = processor.process(&mut app_config, &mut config).await?;
                Ok(ActionRouterOutput::Segments(res))
            }
            ActionRouterInput::Catalog(processor) => {
                let mut config = CatalogConfig::default();
                let res = processor.process(&mut app_config, &mut config).await?;
                Ok(ActionRouterOutput::Catalog(res))
            }
        }
    }
}
