//! `relnote publish`: create the GitHub release for a CI run
//!
//! Resolves the next tag from the latest published one, renders the body for
//! everything since that tag, creates the release and attaches the full body
//! plus the run's workflow artifacts.

use crate::commands::body::{build_body, write_full_body};
use crate::core::config::NotesConfig;
use crate::core::error::{ConfigError, NoteError, NoteResult};
use crate::core::vcs::SystemGit;
use crate::release::{GitHub, NewRelease, TagResolution};
use crate::ui::progress::AssetProgress;
use std::env;

/// Options for the publish command
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
  /// owner/repo (flag or $GITHUB_REPOSITORY)
  pub repo: Option<String>,
  /// Commit to release; defaults to HEAD
  pub sha: Option<String>,
  /// Workflow run whose artifacts are attached
  pub run_id: Option<u64>,
  /// Build number stamped into the tag
  pub run_number: Option<u64>,
  /// Who triggered the run, shown in the release name
  pub actor: Option<String>,
  pub artifacts: bool,
  pub fetch: bool,
  pub dry_run: bool,
}

fn missing(setting: &str, env: &'static str) -> NoteError {
  NoteError::Config(ConfigError::MissingSetting {
    setting: setting.to_string(),
    env,
  })
}

/// Release name shown on GitHub
pub fn release_name(tag: &str, actor: &str) -> String {
  format!("Release {} by {}", tag, actor)
}

/// Run the publish command
pub fn run_publish(options: PublishOptions) -> NoteResult<()> {
  let workspace_root = env::current_dir()?;
  let config = NotesConfig::load(&workspace_root)?;
  let git = SystemGit::open(&workspace_root)?;

  let repo = options
    .repo
    .clone()
    .or_else(|| config.github.repository.clone())
    .ok_or_else(|| missing("repository", "GITHUB_REPOSITORY"))?;
  let run_number = options
    .run_number
    .ok_or_else(|| missing("run number", "GITHUB_RUN_NUMBER"))?;
  let actor = options.actor.clone().ok_or_else(|| missing("actor", "GITHUB_ACTOR"))?;
  if options.artifacts && options.run_id.is_none() {
    return Err(missing("run id", "GITHUB_RUN_ID"));
  }

  let github = GitHub::new(repo)?;

  println!("🔍 Looking up latest tag of {}...", github.repo());
  let latest = github.latest_tag()?;
  let resolution = TagResolution::from_latest(&latest.name, &latest.commit.sha, run_number)?;
  let tag = resolution.next.to_string();
  println!("   {} → {}", resolution.previous, tag);

  if options.fetch {
    println!("📥 Fetching full history...");
    git.fetch_full_history()?;
  }

  let sha = match &options.sha {
    Some(sha) => git.resolve(sha)?,
    None => git.head_commit()?,
  };

  let built = build_body(&git, &config, &resolution.base_sha, &sha)?;
  let body_path = write_full_body(&git.work_tree().join(&config.body.output), &built.body)?;
  println!(
    "📝 Body: {} commits, {} changed files, {} characters",
    built.commit_count,
    built.changed_files,
    built.body.full.chars().count()
  );
  if built.body.truncated {
    println!(
      "   ⚠️  Truncated to {} characters, full body attached as {}",
      config.body.max_length,
      body_path.display()
    );
  }

  let name = release_name(&tag, &actor);

  if options.dry_run {
    println!();
    println!("🔍 Dry run, nothing published");
    println!("   Tag:    {}", tag);
    println!("   Name:   {}", name);
    println!("   Target: {}", sha);
    println!("   Body:   {}", body_path.display());
    return Ok(());
  }

  println!("🚀 Creating release {}...", tag);
  let release = github.create_release(&NewRelease {
    tag_name: &tag,
    target_commitish: Some(sha.as_str()),
    name: &name,
    body: &built.body.published,
    draft: false,
    prerelease: false,
  })?;

  github.upload_asset(&tag, &body_path)?;

  if let Some(run_id) = options.run_id.filter(|_| options.artifacts) {
    let artifacts = github.list_run_artifacts(run_id)?;
    if artifacts.is_empty() {
      println!("   No artifacts in run {}", run_id);
    } else {
      let dir = git.work_tree().join(&config.github.artifacts_dir);
      let mut progress = AssetProgress::new(artifacts.len(), "Uploading artifacts");
      for artifact in &artifacts {
        let path = github.download_artifact(artifact, &dir)?;
        github.upload_asset(&tag, &path)?;
        progress.inc();
      }
      println!("   Attached {} artifact(s)", artifacts.len());
    }
  }

  println!("✅ Release {} created successfully!", tag);
  println!("   {}", release.html_url);

  Ok(())
}
