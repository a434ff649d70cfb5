//! Error types for relnote with contextual messages and exit codes
//!
//! Every failure outside the renderers ends the pipeline run. The error carries
//! a category (for the exit code) and, where we can guess one, a hint for the
//! person reading the CI log.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for relnote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (git, gh, network, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relnote
#[derive(Debug)]
pub enum NoteError {
  /// Configuration errors
  Config(ConfigError),

  /// Git operation errors
  Git(GitError),

  /// GitHub (gh CLI) errors
  GitHub(GitHubError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl NoteError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    NoteError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      NoteError::Message { message, context, help } => NoteError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      NoteError::Io(err) => NoteError::Message {
        message: format!("{}: {}", ctx_str, err),
        context: None,
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      NoteError::Config(_) => ExitCode::User,
      NoteError::Git(_) => ExitCode::System,
      NoteError::GitHub(_) => ExitCode::System,
      NoteError::Io(_) => ExitCode::System,
      NoteError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      NoteError::Config(e) => e.help_message(),
      NoteError::Git(e) => e.help_message(),
      NoteError::GitHub(e) => e.help_message(),
      NoteError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for NoteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NoteError::Config(e) => write!(f, "{}", e),
      NoteError::Git(e) => write!(f, "{}", e),
      NoteError::GitHub(e) => write!(f, "{}", e),
      NoteError::Io(e) => write!(f, "I/O error: {}", e),
      NoteError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for NoteError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      NoteError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for NoteError {
  fn from(err: io::Error) -> Self {
    NoteError::Io(err)
  }
}

impl From<String> for NoteError {
  fn from(msg: String) -> Self {
    NoteError::message(msg)
  }
}

impl From<&str> for NoteError {
  fn from(msg: &str) -> Self {
    NoteError::message(msg)
  }
}

impl From<toml_edit::de::Error> for NoteError {
  fn from(err: toml_edit::de::Error) -> Self {
    NoteError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<toml_edit::ser::Error> for NoteError {
  fn from(err: toml_edit::ser::Error) -> Self {
    NoteError::message(format!("TOML serialization error: {}", err))
  }
}

impl From<serde_json::Error> for NoteError {
  fn from(err: serde_json::Error) -> Self {
    NoteError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Invalid value for a field
  InvalidValue { field: String, reason: String },

  /// Required setting missing from config, flags and environment
  MissingSetting { setting: String, env: &'static str },

  /// Config file already exists (init)
  AlreadyExists { path: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::MissingSetting { env, .. } => Some(format!(
        "Pass it as a flag, set {} (GitHub Actions sets it for you), or add it to relnote.toml.",
        env
      )),
      ConfigError::AlreadyExists { .. } => Some("Edit the existing file, or pass --force to overwrite it.".to_string()),
      ConfigError::InvalidValue { .. } => Some("Run `relnote init` in a scratch directory to see the defaults.".to_string()),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::InvalidValue { field, reason } => {
        write!(f, "Invalid value for '{}': {}", field, reason)
      }
      ConfigError::MissingSetting { setting, .. } => {
        write!(f, "Missing required setting: {}", setting)
      }
      ConfigError::AlreadyExists { path } => {
        write!(f, "Config file already exists: {}", path.display())
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// Repository not found
  RepoNotFound { path: PathBuf },

  /// Revision could not be resolved
  RevisionNotFound { rev: String },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::RepoNotFound { path } => Some(format!(
        "Run relnote from inside a git checkout (looked in {}).",
        path.display()
      )),
      GitError::RevisionNotFound { .. } => {
        Some("Shallow CI checkouts lack history; use `fetch-depth: 0` or let relnote unshallow.".to_string())
      }
      GitError::CommandFailed { stderr, .. } => {
        if stderr.contains("unknown revision") {
          Some("Fetch the full history (`git fetch --prune --unshallow`) and retry.".to_string())
        } else {
          None
        }
      }
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
      GitError::RevisionNotFound { rev } => {
        write!(f, "Revision not found: {}", rev)
      }
    }
  }
}

/// GitHub errors (reported by the gh CLI)
#[derive(Debug)]
pub enum GitHubError {
  /// gh is not installed or not on PATH
  CliMissing,

  /// gh command failed
  CommandFailed { command: String, stderr: String },

  /// Repository has no tags to base the next release on
  NoTags { repo: String },

  /// Tag name does not follow v<major>.<minor>.<patch>[.<build>]
  InvalidTag { tag: String },
}

impl GitHubError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitHubError::CliMissing => Some("Install the GitHub CLI: https://cli.github.com".to_string()),
      GitHubError::CommandFailed { stderr, .. } => {
        if stderr.contains("401") || stderr.contains("auth") {
          Some("Export GH_TOKEN (or GITHUB_TOKEN) with `contents: write` and `actions: read` permissions.".to_string())
        } else if stderr.contains("422") {
          Some("A release with this tag probably exists already.".to_string())
        } else {
          None
        }
      }
      GitHubError::NoTags { .. } => Some("Push an initial tag such as v0.1.0.0 first.".to_string()),
      GitHubError::InvalidTag { .. } => Some("Tags must look like v1.2.3.4 or v1.2.3.".to_string()),
    }
  }
}

impl fmt::Display for GitHubError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitHubError::CliMissing => write!(f, "GitHub CLI (gh) not found"),
      GitHubError::CommandFailed { command, stderr } => {
        write!(f, "gh command failed: {}\n{}", command, stderr)
      }
      GitHubError::NoTags { repo } => write!(f, "Repository {} has no tags", repo),
      GitHubError::InvalidTag { tag } => write!(f, "Cannot parse release tag: {}", tag),
    }
  }
}

/// Result type alias for relnote
pub type NoteResult<T> = Result<T, NoteError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> NoteResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> NoteResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<NoteError>,
{
  fn context(self, ctx: impl Into<String>) -> NoteResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> NoteResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &NoteError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
