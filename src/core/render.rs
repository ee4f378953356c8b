use crate::domain::model::EventStatus;

/// Text layout of the terminal screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rule_width: usize,
}

impl Layout {
    pub fn new(rule_width: usize) -> Self {
        Self { rule_width }
    }

    pub fn rule(&self) -> String {
        "-".repeat(self.rule_width)
    }

    /// Upper-cased title centred between two rules, padded by blank lines.
    /// The title sits one column past the centring padding.
    pub fn banner(&self, title: &str) -> Vec<String> {
        let title = title.to_uppercase();
        let padding = self.rule_width.saturating_sub(title.chars().count()) / 2;

        vec![
            String::new(),
            self.rule(),
            format!("{} {}", " ".repeat(padding), title),
            self.rule(),
            String::new(),
        ]
    }

    pub fn section_end(&self) -> Vec<String> {
        vec![self.rule(), String::new(), String::new()]
    }

    pub fn counts(status: &EventStatus) -> Vec<String> {
        vec![
            format!(" - Reserved: {}", status.reserved),
            format!(" - Available: {}", status.available),
        ]
    }
}
