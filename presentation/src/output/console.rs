//! Console output formatter for advisor views

use super::text::markup_to_text;
use crate::html::{CardView, EVIDENCE_PENDING, MORE_EVIDENCE_NOTE};
use crate::view::{ConcernSelector, ResultsView, TAGS_PLACEHOLDER, TagsDisplay};
use colored::Colorize;
use millet_domain::{ThemePreference, format_number};

/// Formats advisor state for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output on or off for the whole process
    pub fn set_color_enabled(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Summary plus every card
    pub fn format_results(view: &ResultsView) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Personalized Millet Recommendations"));
        output.push('\n');

        let summary = markup_to_text(view.summary().as_str());
        if !summary.is_empty() {
            output.push_str(&format!("\n{}\n", summary));
        }

        for (card, binding) in view.cards().iter().zip(view.bindings()) {
            output.push_str(&Self::format_card(card, &binding.control.snapshot().label));
        }

        if !view.cards().is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "Use /open <n> to view a millet's products.".dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// One card
    pub fn format_card(card: &CardView, control_label: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}  {}\n",
            format!("[{}]", card.index + 1).cyan().bold(),
            card.name.yellow().bold(),
            card.score_label().green()
        ));
        output.push_str(&format!(
            "    {} {}\n",
            card.stars.to_text().yellow(),
            card.rating_label()
        ));
        output.push_str(&format!(
            "    {} {}%  {} {}  {} {}\n",
            "Positive".green(),
            format_number(card.positive_percentage),
            "Neutral".dimmed(),
            card.neutral,
            "Negative".red(),
            card.negative
        ));

        let benefits = markup_to_text(card.benefits.as_str());
        if !benefits.is_empty() {
            output.push_str(&Self::section_header("Health Benefits"));
            output.push_str(&Self::indent(&benefits, "      "));
            output.push('\n');
        }

        output.push_str(&Self::section_header("Scientific Evidence"));
        if card.evidence.is_pending() {
            output.push_str(&format!("      {}\n", EVIDENCE_PENDING.dimmed()));
        } else {
            for item in &card.evidence.items {
                output.push_str(&format!("      • {}\n", item));
            }
            if card.evidence.has_more {
                output.push_str(&format!("      {}\n", MORE_EVIDENCE_NOTE.italic()));
            }
        }

        if !card.reviews.is_empty() {
            output.push_str(&Self::section_header("User Experiences"));
            for review in &card.reviews {
                output.push_str(&format!("      \"{}\"\n", review));
            }
        }

        if !card.concern_matches.is_empty() {
            let matches = card
                .concern_matches
                .iter()
                .map(|m| format!("{} {}%", m.display_name, format_number(m.percentage)))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("    {} {}\n", "Match:".cyan(), matches));
        }

        output.push_str(&format!("    {} {}\n", "->".cyan(), control_label.bold()));
        output
    }

    /// Selected-tags area
    pub fn format_tags(tags: &TagsDisplay) -> String {
        match tags {
            TagsDisplay::Placeholder => format!("{}", TAGS_PLACEHOLDER.dimmed()),
            TagsDisplay::Tags(tags) => tags
                .iter()
                .map(|t| format!("[{} x]", t.display_name).green().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Concern board with identifiers for /toggle
    pub fn format_board(selector: &ConcernSelector) -> String {
        let mut output = format!("{}\n", "Health concerns:".cyan().bold());
        for card in selector.concern_board() {
            let mark = if card.selected {
                "[x]".green().to_string()
            } else {
                "[ ]".to_string()
            };
            output.push_str(&format!(
                "  {} {:<10} {}\n",
                mark,
                card.tag.as_str(),
                card.tag.display_name()
            ));
        }
        output.push_str(&format!("\n{} {}\n", "Selected:".cyan(), Self::format_tags(selector.tags())));
        output
    }

    pub fn format_theme(theme: ThemePreference) -> String {
        format!("{} {}", "Theme:".cyan(), theme.as_str().bold())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("    {}\n", title.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millet_domain::{ConcernTag, Markup, Recommendation, RecommendationResponse};
    use std::collections::HashMap;

    fn plain<F: FnOnce() -> String>(f: F) -> String {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_results_list_every_card() {
        let mut view = ResultsView::new();
        view.render(&RecommendationResponse {
            success: true,
            summary: Markup::trusted("<p>Based on your concerns</p>"),
            recommendations: vec![
                Recommendation {
                    name: "Ragi Millet".to_string(),
                    score: 92.0,
                    ..Default::default()
                },
                Recommendation {
                    name: "Kodo Millet".to_string(),
                    score: 71.5,
                    ..Default::default()
                },
            ],
            scientific_evidence: HashMap::new(),
        });

        let text = plain(|| ConsoleFormatter::format_results(&view));
        assert!(text.contains("Based on your concerns"));
        assert!(text.contains("[1] Ragi Millet  92% Match"));
        assert!(text.contains("[2] Kodo Millet  71.5% Match"));
        assert!(text.contains(EVIDENCE_PENDING));
        assert!(text.contains("View Kodo Millet Products on MilletAmma"));
    }

    #[test]
    fn test_board_marks_selection() {
        let mut selector = ConcernSelector::new();
        selector.toggle(ConcernTag::Bones);
        let text = plain(|| ConsoleFormatter::format_board(&selector));
        assert!(text.contains("[x] bones"));
        assert!(text.contains("[ ] heart"));
        assert!(text.contains("[Bone Health x]"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
