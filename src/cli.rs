// src/cli.rs
use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use crate::{
    calc::CalcMenu,
    config::{consts::*, options::ScrapeOptions},
    files::FileMenu,
    menu::{self, Console, MenuError, RunSummary},
    roster::StudentMenu,
    scrape,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Menu-driven desk utilities")]
pub struct Cli {
    /// Log filter for .store/debug.log (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub tool: Tool,
}

#[derive(Debug, Subcommand)]
pub enum Tool {
    /// Four-function calculator
    Calc,
    /// Write, read, or append text files
    Files,
    /// In-memory student roster
    Students,
    /// Print the first headlines from a news page
    Scrape {
        #[arg(long, default_value = NEWS_URL)]
        url: String,
        #[arg(long, default_value = HEADLINE_SELECTOR)]
        selector: String,
        #[arg(long, default_value_t = HEADLINE_LIMIT)]
        limit: usize,
    },
}

/// Run one tool against the given input/output pair.
pub fn run<R: BufRead, W: Write>(tool: Tool, input: R, output: W) -> Result<Option<RunSummary>, MenuError> {
    logf!("CLI: {:?}", tool);
    let mut console = Console::new(input, output);

    let summary = match tool {
        Tool::Calc => menu::run(&mut CalcMenu, &mut console)?,
        Tool::Files => menu::run(&mut FileMenu, &mut console)?,
        Tool::Students => menu::run(&mut StudentMenu::new(), &mut console)?,
        Tool::Scrape { url, selector, limit } => {
            let opts = ScrapeOptions::default()
                .with_url(url)
                .with_selector(selector)
                .with_limit(limit);
            let (_, mut out) = console.into_parts();
            scrape::run(&opts, &mut out)?;
            out.flush()?;
            return Ok(None);
        }
    };
    Ok(Some(summary))
}

/// Process entry: stdin/stdout.
pub fn run_stdio(tool: Tool) -> Result<Option<RunSummary>, MenuError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(tool, stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn scrape_defaults() {
        let cli = Cli::try_parse_from(["cli", "scrape"]).unwrap();
        match cli.tool {
            Tool::Scrape { url, selector, limit } => {
                assert_eq!(url, NEWS_URL);
                assert_eq!(selector, HEADLINE_SELECTOR);
                assert_eq!(limit, HEADLINE_LIMIT);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn log_level_is_global() {
        let cli = Cli::try_parse_from(["cli", "students", "--log-level", "trace"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("trace"));
        assert!(matches!(cli.tool, Tool::Students));
    }

    #[test]
    fn unknown_tool_is_rejected() {
        assert!(Cli::try_parse_from(["cli", "gui"]).is_err());
    }

    #[test]
    fn runs_a_menu_over_given_streams() {
        let mut out = Vec::new();
        let summary = run(Tool::Calc, Cursor::new("1\n2\n3\n5\n"), &mut out).unwrap();
        assert_eq!(summary.map(|s| s.handled), Some(1));
        assert!(String::from_utf8(out).unwrap().contains("Result: 2 + 3 = 5"));
    }
}
