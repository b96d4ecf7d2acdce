use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::Write;

use market_share_dashboard::action_router::{ActionRouterInput, ActionRouterOutput};
use market_share_dashboard::aggregators::{
    AggregatorsProcessorInput, AggregatorsProcessorOutput, CategoryLevel, MarketShareInputArgs,
};
use market_share_dashboard::catalog::{CatalogProcessorInput, CatalogProcessorOutput, FilterOptions};
use market_share_dashboard::cli_helper::{
    call_action_router, execute_with_retry, init_tracing, initialize_app_config,
};
use market_share_dashboard::cli_utils::{
    CliError, confirm,
    filters::{naming_prompt, path_label, prompt_segment_filters},
    formatting::{print_chart, print_header},
    format_record, format_table,
    input::Input,
    menu::Operation,
    print_info, print_success, print_warning,
};
use market_share_dashboard::naming::generate_name;
use market_share_dashboard::segments::db_types::{Segment, SegmentFilters, SegmentInputArgs};
use market_share_dashboard::segments::processor_enums::{
    SegmentsProcessorInput, SegmentsProcessorOutput, UpdateSegmentInputArgs,
};
use market_share_dashboard::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    eprintln!("{}", "╔═══════════════════════════════════════════════════════╗".bright_cyan());
    eprintln!("{}", "║         Market Share Segments CLI                     ║".bright_cyan());
    eprintln!("{}", "╚═══════════════════════════════════════════════════════╝".bright_cyan());
    eprintln!();

    eprint!("Initializing app config... ");
    std::io::stderr().flush().ok();

    let app_config = match initialize_app_config() {
        Ok(config) => {
            eprintln!("{}", "✓ Ready".green());
            config
        }
        Err(e) => {
            eprintln!("{}", "✗ Failed".red());
            eprintln!("Error: {}", e);
            return Err(e);
        }
    };

    eprintln!();

    loop {
        match Operation::select() {
            Ok(op) => match op {
                Operation::List => list_segments(&app_config).await?,
                Operation::View => view_segment(&app_config).await?,
                Operation::Create => create_segment(&app_config).await?,
                Operation::Update => update_segment(&app_config).await?,
                Operation::Delete => delete_segment(&app_config).await?,
                Operation::Apply => apply_segment(&app_config).await?,
                Operation::Cancel => {
                    eprintln!("{}", "Goodbye!".bright_cyan());
                    break;
                }
            },
            Err(CliError::UserCancelled) => {
                eprintln!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {}", e).red());
                break;
            }
        }

        eprintln!();
    }

    Ok(())
}

async fn run_segments(app_config: &AppConfig, input: SegmentsProcessorInput) -> Result<SegmentsProcessorOutput> {
    match call_action_router(ActionRouterInput::Segments(input), app_config.clone()).await? {
        ActionRouterOutput::Segments(output) => Ok(output),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn fetch_segments(app_config: &AppConfig) -> Result<Vec<Segment>> {
    match run_segments(app_config, SegmentsProcessorInput::List).await? {
        SegmentsProcessorOutput::List(segments) => Ok(segments),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn filter_options(app_config: &AppConfig) -> Result<FilterOptions> {
    let input = ActionRouterInput::Catalog(CatalogProcessorInput::FilterOptions);
    match call_action_router(input, app_config.clone()).await? {
        ActionRouterOutput::Catalog(CatalogProcessorOutput::FilterOptions(options)) => Ok(options),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

/// Let the user pick a saved segment, None when there are none
async fn choose_segment(app_config: &AppConfig, prompt: &str) -> Result<Option<Segment>> {
    let segments = fetch_segments(app_config).await?;
    if segments.is_empty() {
        print_info("No segments saved yet");
        return Ok(None);
    }

    let labels: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
    let idx = Input::select_from_list(prompt, labels)?;
    Ok(segments.into_iter().nth(idx))
}

fn summarize(values: &[String]) -> String {
    if values.is_empty() {
        "Any".to_string()
    } else {
        values.join(", ")
    }
}

fn print_segment(segment: &Segment) {
    let categories: Vec<String> = segment
        .filters
        .categories
        .iter()
        .map(|c| path_label(&c.path))
        .collect();
    let filters = &segment.filters;

    format_record(vec![
        ("ID", segment.id.clone()),
        ("Name", segment.name.clone()),
        ("Categories", summarize(&categories)),
        ("Retailers", summarize(&filters.retailers)),
        ("Brands", summarize(&filters.brands)),
        ("Age groups", summarize(&filters.age_groups)),
        ("Regions", summarize(&filters.regions)),
        ("Genders", summarize(&filters.genders)),
        ("Income brackets", summarize(&filters.income_brackets)),
    ]);
}

/// Filters first, then a name suggested from them
async fn prompt_segment(app_config: &AppConfig, existing: Option<&Segment>) -> Result<SegmentInputArgs> {
    let options = filter_options(app_config).await?;
    let current = existing.map(|s| s.filters.clone()).unwrap_or_default();
    let filters: SegmentFilters = prompt_segment_filters(&options, &current)?;

    let suggested = match existing {
        Some(segment) => segment.name.clone(),
        None => generate_name(&naming_prompt(&filters)),
    };
    let name = Input::get_string_with_default("Segment name", &suggested)?;

    Ok(SegmentInputArgs { name, filters })
}

async fn list_segments(app_config: &AppConfig) -> Result<()> {
    print_header("Segments");

    let segments = fetch_segments(app_config).await?;
    if segments.is_empty() {
        print_info("No segments saved yet");
        return Ok(());
    }

    let rows = segments
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.name.clone(),
                s.filters.categories.len().to_string(),
                summarize(&s.filters.retailers),
                summarize(&s.filters.brands),
            ]
        })
        .collect();
    format_table(vec!["ID", "Name", "Categories", "Retailers", "Brands"], rows);

    Ok(())
}

async fn view_segment(app_config: &AppConfig) -> Result<()> {
    print_header("View Segment");

    if let Some(segment) = choose_segment(app_config, "Select segment").await? {
        print_segment(&segment);
    }
    Ok(())
}

async fn create_segment(app_config: &AppConfig) -> Result<()> {
    print_header("Create Segment");

    let input = prompt_segment(app_config, None).await?;

    execute_with_retry(
        || {
            let create = SegmentsProcessorInput::Create(input.clone());
            async move {
                match run_segments(app_config, create).await? {
                    SegmentsProcessorOutput::Create(segment) => {
                        print_success(&format!("Segment '{}' saved ({})", segment.name, segment.id));
                        Ok(())
                    }
                    _ => Err(anyhow!("Unexpected output type")),
                }
            }
        },
        "create_segment",
    )
    .await
}

async fn update_segment(app_config: &AppConfig) -> Result<()> {
    print_header("Update Segment");

    let Some(existing) = choose_segment(app_config, "Select segment to edit").await? else {
        return Ok(());
    };
    let segment = prompt_segment(app_config, Some(&existing)).await?;

    execute_with_retry(
        || {
            let input = SegmentsProcessorInput::Update(UpdateSegmentInputArgs {
                segment_id: existing.id.clone(),
                segment: segment.clone(),
            });
            async move {
                match run_segments(app_config, input).await? {
                    SegmentsProcessorOutput::Update(updated) => {
                        print_success(&format!("Segment '{}' updated", updated.name));
                        Ok(())
                    }
                    _ => Err(anyhow!("Unexpected output type")),
                }
            }
        },
        "update_segment",
    )
    .await
}

async fn delete_segment(app_config: &AppConfig) -> Result<()> {
    print_header("Delete Segment");

    let Some(segment) = choose_segment(app_config, "Select segment to delete").await? else {
        return Ok(());
    };

    if !confirm(&format!("Delete segment '{}'?", segment.name))? {
        print_warning("Deletion cancelled");
        return Ok(());
    }

    run_segments(app_config, SegmentsProcessorInput::Delete(segment.id.clone())).await?;
    print_success(&format!("Segment '{}' deleted", segment.name));
    Ok(())
}

async fn apply_segment(app_config: &AppConfig) -> Result<()> {
    print_header("Apply Segment");

    let Some(segment) = choose_segment(app_config, "Select segment").await? else {
        return Ok(());
    };

    let level_labels: Vec<&str> = CategoryLevel::ALL.iter().map(|l| l.label()).collect();
    let level = CategoryLevel::ALL[Input::select_from_list("Group by", level_labels)?];

    let filters = match run_segments(app_config, SegmentsProcessorInput::Apply(segment.id)).await? {
        SegmentsProcessorOutput::Apply(filters) => filters,
        _ => return Err(anyhow!("Unexpected output type")),
    };

    let input = ActionRouterInput::MarketShare(AggregatorsProcessorInput::MarketShare(
        MarketShareInputArgs {
            filters,
            category_level: Some(level),
        },
    ));
    match call_action_router(input, app_config.clone()).await? {
        ActionRouterOutput::MarketShare(AggregatorsProcessorOutput::MarketShare(chart)) => {
            print_chart(&chart);
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}
