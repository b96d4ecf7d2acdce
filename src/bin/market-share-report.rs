use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use market_share_dashboard::action_router::{ActionRouterInput, ActionRouterOutput};
use market_share_dashboard::aggregators::{
    AggregatorsProcessorInput, AggregatorsProcessorOutput, CategoryLevel, FilterDimension, FilterSet,
    MarketShareInputArgs,
};
use market_share_dashboard::cli_helper::{call_action_router, init_tracing};
use market_share_dashboard::cli_utils::formatting::{format_json, print_chart};
use market_share_dashboard::segments::processor_enums::{SegmentsProcessorInput, SegmentsProcessorOutput};
use market_share_dashboard::utils::app_config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "market-share-report",
    about = "Market share over time for a slice of the transaction table",
    long_about = "Filters the transaction table, buckets revenue by month and category level and prints each category's share of its month"
)]
struct CliArgs {
    /// Transaction CSV
    #[arg(long, env = "DATA_PATH", default_value = "./data.csv")]
    data: PathBuf,

    /// Segment store, used with --segment
    #[arg(long, env = "SEGMENTS_PATH", default_value = "./segments.json")]
    segments: PathBuf,

    /// Category level to group by (1 = top level, 2 = sub-category, 3 = detailed)
    #[arg(long, default_value = "1")]
    level: CategoryLevel,

    /// Top level category to include (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    #[arg(long = "retailer")]
    retailers: Vec<String>,

    #[arg(long = "brand")]
    brands: Vec<String>,

    #[arg(long = "age-group")]
    age_groups: Vec<String>,

    #[arg(long = "region")]
    regions: Vec<String>,

    #[arg(long = "gender")]
    genders: Vec<String>,

    #[arg(long = "income-bracket")]
    income_brackets: Vec<String>,

    /// Start from a saved segment's filters. A flag value is OR'd into the
    /// segment's list for its dimension, widening it; a dimension the segment
    /// leaves open is constrained by the flags alone
    #[arg(long)]
    segment: Option<String>,

    #[arg(long, value_enum, default_value = "table")]
    format: FormatArg,
}

#[derive(Clone, Debug, ValueEnum)]
enum FormatArg {
    #[value(name = "table")]
    Table,
    #[value(name = "json")]
    Json,
}

impl CliArgs {
    fn flag_filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        let flags = [
            (FilterDimension::Category, &self.categories),
            (FilterDimension::Retailer, &self.retailers),
            (FilterDimension::Brand, &self.brands),
            (FilterDimension::AgeGroup, &self.age_groups),
            (FilterDimension::Region, &self.regions),
            (FilterDimension::Gender, &self.genders),
            (FilterDimension::IncomeBracket, &self.income_brackets),
        ];
        for (dim, values) in flags {
            filters.values_mut(dim).extend(values.iter().cloned());
        }
        filters
    }
}

async fn segment_filters(app_config: &AppConfig, segment_id: &str) -> Result<FilterSet> {
    let input = ActionRouterInput::Segments(SegmentsProcessorInput::Apply(segment_id.to_string()));
    match call_action_router(input, app_config.clone()).await? {
        ActionRouterOutput::Segments(SegmentsProcessorOutput::Apply(filters)) => Ok(filters),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = CliArgs::parse();
    let app_config = AppConfig::from_paths(args.data.clone(), args.segments.clone())?;

    let mut filters = match &args.segment {
        Some(segment_id) => segment_filters(&app_config, segment_id).await?,
        None => FilterSet::new(),
    };
    filters.merge(&args.flag_filters());

    let input = ActionRouterInput::MarketShare(AggregatorsProcessorInput::MarketShare(
        MarketShareInputArgs {
            filters,
            category_level: Some(args.level),
        },
    ));

    let chart = match call_action_router(input, app_config).await? {
        ActionRouterOutput::MarketShare(AggregatorsProcessorOutput::MarketShare(chart)) => chart,
        _ => return Err(anyhow!("Unexpected output type")),
    };

    match args.format {
        FormatArg::Table => print_chart(&chart),
        FormatArg::Json => println!("{}", format_json(&chart)),
    }

    Ok(())
}
