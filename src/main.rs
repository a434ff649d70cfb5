mod commands;
mod core;
mod release;
mod render;
mod ui;

use clap::{Parser, Subcommand};
use crate::core::error::{NoteError, print_error};
use std::path::PathBuf;

/// Release notes from git history: commit log, changelog and a word diff as Markdown
#[derive(Parser)]
#[command(name = "relnote")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  // ============================================================================
  // Setup
  // ============================================================================
  /// Write a default relnote.toml in the current directory
  Init {
    /// Overwrite an existing config file
    #[arg(short, long)]
    force: bool,
  },

  // ============================================================================
  // Rendering
  // ============================================================================
  /// Render `git diff --word-diff=porcelain` output as Markdown
  Diff {
    /// Read the diff from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Write Markdown to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Build the release body for a revision range
  Body {
    /// Start of the range (exclusive), e.g. the previous release tag
    #[arg(long)]
    since: String,
    /// End of the range (inclusive)
    #[arg(long, default_value = "HEAD")]
    to: String,
    /// Where to write the full body (default: body.output from relnote.toml)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print a JSON summary instead of the status report
    #[arg(long)]
    json: bool,
  },

  // ============================================================================
  // Releases
  // ============================================================================
  /// Print the tag that follows TAG for a CI run
  NextTag {
    /// Current tag, e.g. v1.2.3.40
    #[arg(long)]
    tag: String,
    /// CI run number stamped as the build component
    #[arg(long, env = "GITHUB_RUN_NUMBER")]
    run_number: u64,
  },

  /// Create the GitHub release for this CI run
  Publish {
    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: Option<String>,
    /// Commit to release (default: HEAD)
    #[arg(long, env = "GITHUB_SHA")]
    sha: Option<String>,
    /// Workflow run whose artifacts are attached
    #[arg(long, env = "GITHUB_RUN_ID")]
    run_id: Option<u64>,
    /// Build number for the new tag
    #[arg(long, env = "GITHUB_RUN_NUMBER")]
    run_number: Option<u64>,
    /// Who triggered the release
    #[arg(long, env = "GITHUB_ACTOR")]
    actor: Option<String>,
    /// Skip attaching workflow artifacts
    #[arg(long)]
    no_artifacts: bool,
    /// Use the local history as is, without fetching
    #[arg(long)]
    no_fetch: bool,
    /// Build the body and show what would be published
    #[arg(long)]
    dry_run: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Init { force } => commands::run_init(force),
    Commands::Diff { input, output } => commands::run_diff(input, output),
    Commands::Body {
      since,
      to,
      output,
      json,
    } => commands::run_body(since, to, output, json),
    Commands::NextTag { tag, run_number } => commands::run_next_tag(&tag, run_number),
    Commands::Publish {
      repo,
      sha,
      run_id,
      run_number,
      actor,
      no_artifacts,
      no_fetch,
      dry_run,
    } => commands::run_publish(commands::PublishOptions {
      repo,
      sha,
      run_id,
      run_number,
      actor,
      artifacts: !no_artifacts,
      fetch: !no_fetch,
      dry_run,
    }),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: NoteError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
