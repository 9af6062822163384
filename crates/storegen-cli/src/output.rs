//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde_json::json;
use storegen_core::application::CommandReport;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` in config;
    /// `auto` from either resolves to Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Command results ───────────────────────────────────────────────────

    /// Print the commands an empty invocation could have run.
    ///
    /// Not suppressed by `--quiet`: the listing is the whole answer.
    pub fn listing(&self, commands: &[String]) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.term.write_line(&json!({ "commands": commands }).to_string());
        }

        let title = if self.no_color {
            "Available commands:".to_owned()
        } else {
            "Available commands:".cyan().bold().to_string()
        };
        self.term.write_line(&title)?;
        for command in commands {
            self.term.write_line(&format!("  {command}"))?;
        }
        Ok(())
    }

    /// Name the resolved command before it runs.
    ///
    /// JSON output carries the same fields in the final report instead.
    pub fn announce(&self, command: &str, arguments: &[String]) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return Ok(());
        }
        self.header(&format!("Executing command: {command}"))?;
        self.info(&format!("Arguments: {}", arguments.join(" ")))
    }

    /// Print what a finished command did and what is left to do by hand.
    pub fn report(&self, report: &CommandReport, dry_run: bool) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            let mut value = serde_json::to_value(report).map_err(io::Error::other)?;
            value["dry_run"] = dry_run.into();
            return self.term.write_line(&value.to_string());
        }

        let verb = if dry_run { "Would create" } else { "Created" };
        for artifact in &report.artifacts {
            self.success(&format!("{verb} {} {}", artifact.kind, artifact.path.display()))?;
        }

        if dry_run {
            self.info("Dry run: no files were written.")?;
        }

        if !report.next_steps.is_empty() {
            self.print("")?;
            self.header("Next steps:")?;
            for (i, step) in report.next_steps.iter().enumerate() {
                self.print(&format!("  {}. {}", i + 1, step))?;
            }
        }
        Ok(())
    }

}

// ── tests ─────────────────────────────────────────────────────────────────────
