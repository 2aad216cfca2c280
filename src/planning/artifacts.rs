// Artifact naming and on-disk layout
//
// plans/<slug>/
//   q&a/user_responses.json
//   <slug>.md

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Answers, QuestionPlan};

/// Maximum slug length in characters
pub const MAX_SLUG_LEN: usize = 40;

/// Slug used when every candidate sanitizes to nothing
pub const FALLBACK_SLUG: &str = "plan";

pub const QA_DIR: &str = "q&a";
pub const RESPONSES_FILE: &str = "user_responses.json";

static UNSAFE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\-_]").expect("slug regex is valid"));

/// Make an arbitrary string safe to use as a directory and file name.
///
/// Backticks, quotes and line breaks are dropped, every other character
/// outside `[A-Za-z0-9_-]` becomes `-`, the result is lowercased and cut to
/// 40 characters. Applying it twice gives the same result as applying it once.
pub fn sanitize_slug(input: &str) -> String {
    let stripped: String = input
        .chars()
        .filter(|c| !matches!(c, '`' | '"' | '\'' | '\n' | '\r'))
        .collect();
    UNSAFE_CHARS_RE
        .replace_all(&stripped, "-")
        .to_lowercase()
        .chars()
        .take(MAX_SLUG_LEN)
        .collect()
}

/// Filesystem-safe session identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    /// Derive the slug for a session.
    ///
    /// Takes the first non-empty of the model's `folder_name`, the echoed `tema` and the
    /// user's own goal text.
    pub fn derive(plan: &QuestionPlan, goal: &str) -> Self {
        let candidate = [plan.folder_name.as_deref(), plan.topic.as_deref(), Some(goal)]
            .into_iter()
            .flatten()
            .find(|c| !c.is_empty())
            .unwrap_or_default();

        let slug = sanitize_slug(candidate);
        if slug.is_empty() {
            Slug(FALLBACK_SLUG.to_string())
        } else {
            Slug(slug)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved paths for one session's artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub root: PathBuf,
    pub qa_dir: PathBuf,
    pub responses: PathBuf,
    pub checklist: PathBuf,
}

impl ArtifactPaths {
    fn new(plans_dir: &Path, slug: &Slug) -> Self {
        let root = plans_dir.join(slug.as_str());
        let qa_dir = root.join(QA_DIR);
        Self {
            responses: qa_dir.join(RESPONSES_FILE),
            checklist: root.join(format!("{}.md", slug)),
            root,
            qa_dir,
        }
    }
}

/// Writes session artifacts under a plans directory
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    plans_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(plans_dir: impl Into<PathBuf>) -> Self {
        Self {
            plans_dir: plans_dir.into(),
        }
    }

    /// Create `<plans>/<slug>/q&a/`; existing directories are fine
    pub fn prepare(&self, slug: &Slug) -> Result<ArtifactPaths> {
        let paths = ArtifactPaths::new(&self.plans_dir, slug);
        fs::create_dir_all(&paths.qa_dir)
            .with_context(|| format!("Failed to create directory: {}", paths.qa_dir.display()))?;
        tracing::debug!(root = %paths.root.display(), "Prepared artifact directory");
        Ok(paths)
    }

    /// Write the answers as pretty-printed JSON (2-space indent, trailing newline)
    pub fn write_responses(&self, paths: &ArtifactPaths, answers: &Answers) -> Result<()> {
        let mut json =
            serde_json::to_string_pretty(answers).context("Failed to serialize user responses")?;
        json.push('\n');
        fs::write(&paths.responses, json).with_context(|| {
            format!("Failed to write responses: {}", paths.responses.display())
        })?;
        tracing::info!(path = %paths.responses.display(), count = answers.pairs().len(), "Saved user responses");
        Ok(())
    }

    /// Write the checklist text verbatim
    pub fn write_checklist(&self, paths: &ArtifactPaths, checklist: &str) -> Result<()> {
        fs::write(&paths.checklist, checklist).with_context(|| {
            format!("Failed to write checklist: {}", paths.checklist.display())
        })?;
        tracing::info!(path = %paths.checklist.display(), "Saved checklist");
        Ok(())
    }
}
