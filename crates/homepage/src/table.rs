use homepage_core::surface::NodeSnapshot;

pub struct TableFormatter {
    selector_width: usize,
    text_width: usize,
    classes_width: usize,
    details_width: usize,
}

impl TableFormatter {
    pub fn new(nodes: &[NodeSnapshot]) -> Self {
        let selector_width = nodes
            .iter()
            .map(|n| n.selector.as_str().chars().count())
            .max()
            .unwrap_or(8)
            .clamp(8, 30);
        let text_width = nodes
            .iter()
            .map(|n| n.text.chars().count())
            .max()
            .unwrap_or(4)
            .clamp(4, 40);

        Self {
            selector_width,
            text_width,
            classes_width: 20,
            details_width: 50,
        }
    }

    pub fn print_table(&self, nodes: &[NodeSnapshot]) {
        for line in self.render(nodes) {
            println!("{}", line);
        }
    }

    pub fn render(&self, nodes: &[NodeSnapshot]) -> Vec<String> {
        let mut lines = vec![
            self.border('┌', '┬', '┐'),
            self.row("Selector", "Text", "Classes", "Styles / Attributes"),
            self.border('├', '┼', '┤'),
        ];
        for node in nodes {
            let classes = node
                .classes
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            let details = node
                .styles
                .iter()
                .map(|(property, value)| format!("{}: {}", property, value))
                .chain(
                    node.attributes
                        .iter()
                        .map(|(name, value)| format!("{}={}", name, value)),
                )
                .collect::<Vec<_>>()
                .join("; ");
            lines.push(self.row(node.selector.as_str(), &node.text, &classes, &details));
        }
        lines.push(self.border('└', '┴', '┘'));
        lines
    }

    fn row(&self, selector: &str, text: &str, classes: &str, details: &str) -> String {
        format!(
            "│ {} │ {} │ {} │ {} │",
            truncate(selector, self.selector_width),
            truncate(text, self.text_width),
            truncate(classes, self.classes_width),
            truncate(details, self.details_width),
        )
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        format!(
            "{left}{}{middle}{}{middle}{}{middle}{}{right}",
            "─".repeat(self.selector_width + 2),
            "─".repeat(self.text_width + 2),
            "─".repeat(self.classes_width + 2),
            "─".repeat(self.details_width + 2),
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters rather than bytes so multi-byte text like "18°C" is
/// never split.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
