use serde::{Deserialize, Serialize};

use crate::aggregators::config::CategoryLevel;
use crate::aggregators::filters::FilterSet;
use crate::aggregators::share_series::MarketShareChart;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MarketShareInputArgs {
    #[serde(default)]
    pub filters: FilterSet,
    /// Falls back to the processor's default level when absent
    #[serde(default)]
    pub category_level: Option<CategoryLevel>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AggregatorsProcessorInput {
    MarketShare(MarketShareInputArgs),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AggregatorsProcessorOutput {
    MarketShare(MarketShareChart),
}
