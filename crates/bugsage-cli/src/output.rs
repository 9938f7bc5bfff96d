//! Terminal output formatting.

use bugsage_core::analysis::{Analysis, ChatTurn};
use colored::Colorize;

/// Placeholder shown when the AI fetch failed.
pub const AI_FAILURE_SENTINEL: &str = "Error fetching AI response.";

/// Flat display lines for the suggestion list: the AI suggestion first,
/// then one "title - link" entry per related question, provider order.
pub fn suggestion_lines(analysis: &Analysis) -> Vec<String> {
    let mut lines = vec![format!(
        "AI Suggestion: {}",
        analysis.suggestion.as_deref().unwrap_or(AI_FAILURE_SENTINEL)
    )];
    lines.extend(
        analysis
            .links
            .iter()
            .map(|l| format!("{} - {}", l.title, l.link)),
    );
    lines
}

/// Print the initial analysis.
pub fn print_analysis(analysis: &Analysis) {
    println!();
    println!("{}", "AI Suggestion".cyan().bold());
    match &analysis.suggestion {
        Some(text) => println!("{}", text),
        None => println!("{}", AI_FAILURE_SENTINEL.red()),
    }

    println!();
    println!("{}", "Related on Stack Overflow".cyan().bold());
    if analysis.links.is_empty() {
        println!("{}", "No related questions found.".dimmed());
    } else {
        for link in &analysis.links {
            println!("  {} {}", "•".dimmed(), link.title.bold());
            println!("    {}", link.link.blue().underline());
        }
    }
    println!();
}

/// Print one completed follow-up turn.
pub fn print_turn(turn: &ChatTurn) {
    match &turn.answer {
        Some(text) => println!("\n{} {}\n", "AI:".green().bold(), text),
        None => println!("\n{} {}\n", "AI:".green().bold(), AI_FAILURE_SENTINEL.red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugsage_core::analysis::SearchLink;

    fn links(n: usize) -> Vec<SearchLink> {
        (0..n)
            .map(|i| SearchLink {
                title: format!("Question {}", i),
                link: format!("https://stackoverflow.com/q/{}", i),
            })
            .collect()
    }

    #[test]
    fn test_lines_contain_title_dash_link() {
        let analysis = Analysis {
            suggestion: Some("Do the thing.".to_string()),
            links: links(3),
        };
        let lines = suggestion_lines(&analysis);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "AI Suggestion: Do the thing.");
        assert_eq!(lines[1], "Question 0 - https://stackoverflow.com/q/0");
        assert_eq!(lines[3], "Question 2 - https://stackoverflow.com/q/2");
    }

    #[test]
    fn test_failed_suggestion_renders_sentinel() {
        let analysis = Analysis {
            suggestion: None,
            links: vec![],
        };
        let lines = suggestion_lines(&analysis);

        assert_eq!(lines, vec!["AI Suggestion: Error fetching AI response."]);
    }
}
