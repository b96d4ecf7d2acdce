use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Name returned when a prompt cannot be processed
pub const FALLBACK_SEGMENT_NAME: &str = "New Segment";

static CATEGORIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Categories: (.*?)(?:\n|$)").expect("valid categories pattern"));
static RETAILERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Retailers: (.*?)(?:\n|$)").expect("valid retailers pattern"));
static BRANDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Brands: (.*?)(?:\n|$)").expect("valid brands pattern"));

/// Filter lists recovered from a naming prompt
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFilters {
    pub categories: Vec<String>,
    pub retailers: Vec<String>,
    pub brands: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerateNameRequest {
    pub prompt: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateNameResponse {
    pub name: String,
}

fn capture_list(re: &Regex, prompt: &str) -> Vec<String> {
    re.captures(prompt)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            m.as_str()
                .split(", ")
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Pull the `Categories:`, `Retailers:` and `Brands:` lines out of a prompt.
/// A missing line yields an empty list.
pub fn parse_prompt(prompt: &str) -> PromptFilters {
    PromptFilters {
        categories: capture_list(&CATEGORIES_RE, prompt),
        retailers: capture_list(&RETAILERS_RE, prompt),
        brands: capture_list(&BRANDS_RE, prompt),
    }
}

pub fn generate_name_from_filters<S: AsRef<str>>(
    categories: &[S],
    retailers: &[S],
    brands: &[S],
) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(first) = categories.first() {
        parts.push(first.as_ref().split(' ').next().unwrap_or_default());
    }

    match retailers.len() {
        0 => {}
        1 => parts.push("Retail"),
        _ => parts.push("Multi-Retail"),
    }

    match brands.len() {
        0 => {}
        1 => parts.push("Brand"),
        _ => parts.push("Multi-Brand"),
    }

    if parts.is_empty() {
        parts.push("General");
    }
    parts.push("Segment");

    parts.join(" ")
}

/// Suggested segment name for a free-form prompt
pub fn generate_name(prompt: &str) -> String {
    let filters = parse_prompt(prompt);
    let name = generate_name_from_filters(&filters.categories, &filters.retailers, &filters.brands);
    tracing::debug!("Generated segment name '{}'", name);
    name
}
