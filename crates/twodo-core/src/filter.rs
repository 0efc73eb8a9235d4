use crate::models::Task;

/// Row filter applied to listed tasks.
///
/// Themes match case-insensitively. The limit counts only the tasks that
/// pass the theme filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    themes: Vec<String>,
    limit: Option<usize>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every theme of a comma-separated list, e.g. `"work, Home"`.
    pub fn with_themes(mut self, list: &str) -> Self {
        self.themes.extend(parse_themes(list));
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// True when no theme was requested or the task's theme is one of them.
    pub fn matches(&self, task: &Task) -> bool {
        self.themes.is_empty() || self.themes.contains(&task.theme.to_lowercase())
    }

    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        tasks
            .into_iter()
            .filter(|task| self.matches(task))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

/// Splits a comma-separated theme list into trimmed, lowercase names.
pub fn parse_themes(list: &str) -> Vec<String> {
    list.split(',')
        .map(|theme| theme.trim().to_lowercase())
        .collect()
}
