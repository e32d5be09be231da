//! Natural-language analysis for askdb.
//!
//! The "model" is a lexicon of lowercase person names. Analysis is a
//! single pass: tokenize the question, then label every token found in
//! the lexicon as a person entity. The lexicon is resolved at startup
//! (explicit file, downloaded file, or the embedded default) and its
//! absence is fatal.

mod tokenizer;

pub use tokenizer::{capitalize, tokenize, Token};

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AskdbError, Result};

/// Default lexicon compiled into the binary.
const EMBEDDED_LEXICON: &str = include_str!("../../assets/names.txt");

/// File name used when caching a downloaded lexicon.
const LEXICON_FILE_NAME: &str = "names.txt";

/// Category assigned to a recognized span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    /// A person name.
    Person,
}

/// A recognized entity in a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// The matched text, lowercased.
    pub text: String,
    /// The entity category.
    pub label: EntityLabel,
}

/// An analyzed question: its tokens and the entities found in them.
#[derive(Debug, Clone)]
pub struct Doc {
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
}

/// The person-name lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    names: HashSet<String>,
}

impl Lexicon {
    /// Parses a lexicon from its text form: one name per line,
    /// `#` lines and blank lines ignored, everything lowercased.
    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { names }
    }

    /// Returns the lexicon compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_LEXICON)
    }

    /// Loads a lexicon from a file. An unreadable or empty file is an
    /// error: without names the person detector cannot run.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AskdbError::model(format!("Failed to read lexicon {}: {e}", path.display()))
        })?;

        let lexicon = Self::parse(&content);
        if lexicon.is_empty() {
            return Err(AskdbError::model(format!(
                "Lexicon {} contains no names",
                path.display()
            )));
        }
        Ok(lexicon)
    }

    /// Builds a lexicon from an explicit name list (used in tests).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Number of names in the lexicon.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the lexicon has no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true if the lowercased word is a known person name.
    pub fn contains(&self, word: &str) -> bool {
        self.names.contains(word)
    }

    /// Analyzes a question: tokenizes it and labels every token whose
    /// lowercased text is in the lexicon as a person entity.
    pub fn analyze(&self, question: &str) -> Doc {
        let tokens = tokenize(question);
        let entities = tokens
            .iter()
            .filter(|t| self.contains(&t.lower))
            .map(|t| Entity {
                text: t.lower.clone(),
                label: EntityLabel::Person,
            })
            .collect();
        Doc { tokens, entities }
    }
}

/// Resolves the lexicon at startup.
///
/// Precedence: an explicit file path (fatal if unreadable), then a
/// download URL cached under `cache_dir`, then the embedded default.
pub async fn load_or_fetch(
    path: Option<&Path>,
    url: Option<&str>,
    cache_dir: &Path,
) -> Result<Lexicon> {
    if let Some(path) = path {
        let lexicon = Lexicon::load(path)?;
        info!(
            "Loaded lexicon with {} names from {}",
            lexicon.len(),
            path.display()
        );
        return Ok(lexicon);
    }

    if let Some(url) = url {
        let cached = cache_dir.join(LEXICON_FILE_NAME);
        if !cached.exists() {
            download(url, &cached).await?;
        }
        let lexicon = Lexicon::load(&cached)?;
        info!(
            "Loaded lexicon with {} names from {}",
            lexicon.len(),
            cached.display()
        );
        return Ok(lexicon);
    }

    let lexicon = Lexicon::embedded();
    debug!("Using embedded lexicon with {} names", lexicon.len());
    Ok(lexicon)
}

/// Downloads a lexicon to the given destination.
async fn download(url: &str, dest: &Path) -> Result<()> {
    info!("Downloading lexicon from {url}");

    let response = reqwest::get(url)
        .await
        .map_err(|e| AskdbError::model(format!("Failed to download lexicon: {e}")))?
        .error_for_status()
        .map_err(|e| AskdbError::model(format!("Lexicon download failed: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| AskdbError::model(format!("Failed to read lexicon body: {e}")))?;

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AskdbError::model(format!(
                "Failed to create lexicon directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(dest, body).map_err(|e| {
        AskdbError::model(format!(
            "Failed to write lexicon to {}: {e}",
            dest.display()
        ))
    })?;

    Ok(())
}
