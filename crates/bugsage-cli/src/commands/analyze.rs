//! Analyze command - the full capture, fetch, present, chat flow.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::{Input, Select};

use bugsage_core::ai::AiClient;
use bugsage_core::analysis::Analyzer;
use bugsage_core::config::Config;
use bugsage_core::session::ChatSession;
use bugsage_core::stackoverflow::SearchClient;

use crate::input;
use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Error text to analyze (falls back to piped stdin, then the clipboard)
    pub text: Option<String>,

    /// Print the analysis and exit without the follow-up chat
    #[arg(long)]
    pub no_chat: bool,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let report = input::capture(args.text)?;

    let config = Config::from_env();
    let analyzer = Analyzer::new(AiClient::new(&config), SearchClient::new(&config));

    println!("{} Analyzing error log...", "→".blue().bold());

    let mut session = ChatSession::open(analyzer, report).await;

    println!("{} {}", "Error log:".bold(), session.report());
    output::print_analysis(session.initial());

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    if args.no_chat || !interactive {
        return Ok(());
    }

    offer_list(session.initial())?;
    chat_loop(&mut session).await
}

/// Present the flat suggestion list for review. Choosing an entry echoes
/// it back; there is no further action attached.
fn offer_list(analysis: &bugsage_core::analysis::Analysis) -> Result<()> {
    let items = output::suggestion_lines(analysis);
    let choice = Select::new()
        .with_prompt("Bugsage suggestions")
        .items(&items)
        .default(0)
        .interact_opt()
        .context("Failed to show suggestion list")?;

    if let Some(index) = choice {
        println!("{}", items[index].dimmed());
    }
    Ok(())
}

/// Open-ended follow-up loop. Each submission is one independent AI
/// query; an empty line ends the session.
async fn chat_loop<S, R>(session: &mut ChatSession<S, R>) -> Result<()>
where
    S: bugsage_core::analysis::SuggestionSource,
    R: bugsage_core::analysis::RelatedSource,
{
    println!(
        "{}",
        "Ask follow-up questions (empty line to quit):".dimmed()
    );

    loop {
        let question: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read follow-up question")?;

        if question.trim().is_empty() {
            break;
        }

        let turn = session.follow_up(&question).await?;
        output::print_turn(turn);
    }

    println!(
        "{} Session closed ({} follow-up turn(s))",
        "✓".green().bold(),
        session.transcript().len()
    );
    Ok(())
}
