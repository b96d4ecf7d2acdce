use crate::cli_utils::CliResult;
use dialoguer::{Input as DialoguerInput, MultiSelect, Select};

/// Input utilities
pub struct Input;

impl Input {
    /// Get a string from user input
    pub fn get_string(prompt: &str) -> CliResult<String> {
        Ok(DialoguerInput::new().with_prompt(prompt).interact_text()?)
    }

    /// Get a string, pre-filled with `default`
    pub fn get_string_with_default(prompt: &str, default: &str) -> CliResult<String> {
        Ok(DialoguerInput::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?)
    }

    /// Get an optional string
    pub fn get_optional_string(prompt: &str) -> CliResult<Option<String>> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (optional)", prompt))
            .allow_empty(true)
            .interact_text()?;

        Ok(if input.trim().is_empty() { None } else { Some(input) })
    }

    /// Get a boolean choice
    pub fn get_bool(prompt: &str) -> CliResult<bool> {
        use dialoguer::Confirm;
        Ok(Confirm::new().with_prompt(prompt).interact()?)
    }

    /// Select from a list
    pub fn select_from_list(prompt: &str, items: Vec<&str>) -> CliResult<usize> {
        Ok(Select::new().with_prompt(prompt).items(&items).default(0).interact()?)
    }

    /// Pick any number of items, with `selected` pre-checked
    pub fn multi_select(prompt: &str, items: &[String], selected: &[String]) -> CliResult<Vec<String>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let defaults: Vec<bool> = items.iter().map(|item| selected.contains(item)).collect();
        let picked = MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(&defaults)
            .interact()?;

        Ok(picked.into_iter().map(|idx| items[idx].clone()).collect())
    }
}
