pub mod config;
pub mod filters;
pub mod processor;
pub mod processor_enums;
pub mod share_series;

// Re-export commonly used types
pub use config::{AggregatorsConfig, CategoryLevel, GroupingConfig};
pub use filters::{FilterDimension, FilterSet};
pub use processor_enums::{AggregatorsProcessorInput, AggregatorsProcessorOutput, MarketShareInputArgs};
pub use share_series::{MarketShareChart, SeriesPoint, SharePoint, aggregate, build_chart};
