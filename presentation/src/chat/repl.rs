//! REPL (Read-Eval-Print Loop) for interactive research

use crate::config::{OutputConfig, ReplConfig};
use crate::{ConsoleFormatter, ProgressReporter};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use toolscout_application::RunResearchUseCase;
use toolscout_domain::{OutputFormat, Query};

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Help,
    Clear,
    Quit,
    Empty,
    Query(&'a str),
}

impl<'a> ReplCommand<'a> {
    /// Commands are matched case-insensitively; anything else is a query.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => ReplCommand::Empty,
            "help" => ReplCommand::Help,
            "clear" => ReplCommand::Clear,
            "quit" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Query(line),
        }
    }
}

/// Interactive research REPL
pub struct ChatRepl {
    use_case: Arc<RunResearchUseCase>,
    repl: ReplConfig,
    output: OutputConfig,
}

impl ChatRepl {
    pub fn new(use_case: Arc<RunResearchUseCase>) -> Self {
        Self {
            use_case,
            repl: ReplConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    pub fn with_output_config(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.repl.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        Self::print_intro();

        loop {
            match rl.readline("\n? Developer tools question: ") {
                Ok(line) => match ReplCommand::parse(&line) {
                    ReplCommand::Empty => continue,
                    ReplCommand::Quit => {
                        println!("\nThanks for using toolscout!");
                        break;
                    }
                    ReplCommand::Help => Self::print_help(),
                    ReplCommand::Clear => {
                        rl.clear_screen()?;
                        Self::print_intro();
                    }
                    ReplCommand::Query(query) => {
                        let _ = rl.add_history_entry(query);
                        self.process_query(query).await;
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.repl.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_intro() {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      toolscout - Developer Tool Research    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Discover, compare and analyze developer tools.");
        println!("Type your query below or 'help' for assistance.");
        println!("{}", "-".repeat(50));
    }

    fn print_help() {
        println!();
        println!("Research:");
        println!("  Just type your question, for example:");
        println!("    alternatives to [tool name]");
        println!("    best [category] tools");
        println!("    free alternatives to [tool]");
        println!();
        println!("Example queries:");
        println!("  React alternatives");
        println!("  databases better than MySQL");
        println!("  hosting platforms like AWS");
        println!("  vector databases for AI apps");
        println!();
        println!("Commands:");
        println!("  help         - Show this help");
        println!("  clear        - Clear the screen");
        println!("  quit, exit   - Leave");
        println!();
    }

    async fn process_query(&self, query: &str) {
        let Some(query) = Query::try_new(query) else {
            return;
        };
        println!();

        let state = if self.repl.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(query, &progress).await
        } else {
            self.use_case.execute(query).await
        };

        let output = match self.output.format {
            OutputFormat::Full => ConsoleFormatter::format(&state),
            OutputFormat::Json => ConsoleFormatter::format_json(&state),
        };
        println!("{}", output);
    }
}
