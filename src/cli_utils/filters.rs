use crate::catalog::{CategorySearchResult, FilterOptions, search_categories};
use crate::cli_utils::{CliResult, Input};
use crate::segments::db_types::{SegmentFilters, SelectedCategory};

/// Display label for a category path
pub fn path_label(path: &[String]) -> String {
    path.join(" > ")
}

/// Selectable categories for a search, as returned by the catalog
pub fn category_choices(result: &CategorySearchResult) -> Vec<SelectedCategory> {
    result
        .matches
        .iter()
        .filter_map(|path| {
            path.last().map(|name| SelectedCategory {
                name: name.clone(),
                path: path.clone(),
            })
        })
        .collect()
}

/// Categories picked from `choices`, plus current selections the search did not offer
pub fn pick_categories(
    choices: Vec<SelectedCategory>,
    picked: &[String],
    current: &[SelectedCategory],
) -> Vec<SelectedCategory> {
    let offered: Vec<String> = choices.iter().map(SelectedCategory::key).collect();
    let mut categories: Vec<SelectedCategory> = current
        .iter()
        .filter(|c| !offered.contains(&c.key()))
        .cloned()
        .collect();

    categories.extend(
        choices
            .into_iter()
            .filter(|c| picked.contains(&path_label(&c.path))),
    );
    categories
}

/// Walk the user through every filter dimension, starting from `current`
pub fn prompt_segment_filters(
    options: &FilterOptions,
    current: &SegmentFilters,
) -> CliResult<SegmentFilters> {
    let term = Input::get_optional_string("Search categories")?.unwrap_or_default();
    let choices = category_choices(&search_categories(&options.categories, &term));
    let labels: Vec<String> = choices.iter().map(|c| path_label(&c.path)).collect();
    let current_labels: Vec<String> = current
        .categories
        .iter()
        .map(|c| path_label(&c.path))
        .collect();

    let picked = Input::multi_select("Categories", &labels, &current_labels)?;
    let categories = pick_categories(choices, &picked, &current.categories);

    Ok(SegmentFilters {
        categories,
        retailers: Input::multi_select("Retailers", &options.retailers, &current.retailers)?,
        brands: Input::multi_select("Brands", &options.brands, &current.brands)?,
        age_groups: Input::multi_select("Age groups", &options.age_groups, &current.age_groups)?,
        regions: Input::multi_select("Regions", &options.regions, &current.regions)?,
        genders: Input::multi_select("Genders", &options.genders, &current.genders)?,
        income_brackets: Input::multi_select(
            "Income brackets",
            &options.income_brackets,
            &current.income_brackets,
        )?,
    })
}

/// Prompt line understood by the segment name generator
pub fn naming_prompt(filters: &SegmentFilters) -> String {
    let categories: Vec<&str> = filters.categories.iter().map(|c| c.name.as_str()).collect();
    format!(
        "Categories: {}\nRetailers: {}\nBrands: {}",
        categories.join(", "),
        filters.retailers.join(", "),
        filters.brands.join(", ")
    )
}
