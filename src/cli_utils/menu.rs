use crate::cli_utils::CliResult;
use dialoguer::Select;

/// Interactive menu builder
pub struct Menu {
    title: String,
    items: Vec<String>,
}

impl Menu {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, label: &str) -> Self {
        self.items.push(label.to_string());
        self
    }

    pub fn items(mut self, items: Vec<&str>) -> Self {
        self.items.extend(items.iter().map(|s| s.to_string()));
        self
    }

    /// Show the menu and get the selected index
    pub fn interact(&self) -> CliResult<usize> {
        Ok(Select::new()
            .with_prompt(&self.title)
            .items(&self.items)
            .default(0)
            .interact()?)
    }
}

/// Operations offered by the segment CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    View,
    Create,
    Update,
    Delete,
    Apply,
    Cancel,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::List,
        Operation::View,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::Apply,
        Operation::Cancel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Operation::List => "List",
            Operation::View => "View",
            Operation::Create => "Create",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
            Operation::Apply => "Apply (market share report)",
            Operation::Cancel => "Cancel",
        }
    }

    /// Show operation selection menu
    pub fn select() -> CliResult<Self> {
        let menu = Menu::new("Select operation")
            .items(Self::ALL.iter().map(|op| op.label()).collect());

        Ok(Self::ALL
            .get(menu.interact()?)
            .copied()
            .unwrap_or(Operation::Cancel))
    }
}
