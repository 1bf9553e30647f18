//! In-memory snippet library for the editor panel.
//!
//! Snippets are reusable code fragments tagged by language and keyword.
//! The library lives for the process lifetime and is not persisted; export
//! and import move the whole collection as pretty-printed JSON.

use crate::error::SnippetError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored code snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub name: String,
    pub description: String,
    pub code: String,
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a snippet; id and timestamps are assigned by the
/// library.
#[derive(Debug, Clone, Default)]
pub struct SnippetDraft {
    pub name: String,
    pub description: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
}

/// Partial update for a stored snippet.
#[derive(Debug, Clone, Default)]
pub struct SnippetPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Insertion-ordered collection of snippets keyed by id.
#[derive(Debug, Default)]
pub struct SnippetLibrary {
    snippets: Vec<Snippet>,
}

impl SnippetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library pre-seeded with the built-in starter snippets.
    pub fn with_defaults() -> Self {
        let now = Utc::now();
        let starter = |id: &str,
                       name: &str,
                       description: &str,
                       code: &str,
                       language: &str,
                       tags: &[&str]| Snippet {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            code: code.to_string(),
            language: language.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: now,
            updated_at: now,
        };
        Self {
            snippets: vec![
                starter(
                    "1",
                    "React Component",
                    "Basic React functional component with TypeScript",
                    "import React from 'react';\n\ninterface Props {\n  // Add your props here\n}\n\nconst Component: React.FC<Props> = () => {\n  return (\n    <div>\n      {/* Add your JSX here */}\n    </div>\n  );\n};\n\nexport default Component;",
                    "typescript",
                    &["react", "typescript", "component"],
                ),
                starter(
                    "2",
                    "Async Function",
                    "Basic async function with error handling",
                    "async function fetchData() {\n  try {\n    const response = await fetch('url');\n    const data = await response.json();\n    return data;\n  } catch (error) {\n    console.error('Error:', error);\n    throw error;\n  }\n}",
                    "javascript",
                    &["async", "javascript", "fetch"],
                ),
            ],
        }
    }

    /// Store a new snippet and return it with its assigned id.
    pub fn create(&mut self, draft: SnippetDraft) -> Snippet {
        let now = Utc::now();
        let snippet = Snippet {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            code: draft.code,
            language: draft.language,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };
        log::debug!("Created snippet '{}' ({})", snippet.name, snippet.id);
        self.snippets.push(snippet.clone());
        snippet
    }

    /// Apply a partial update and bump the updated timestamp.
    pub fn update(&mut self, id: &str, patch: SnippetPatch) -> Result<Snippet, SnippetError> {
        let snippet = self
            .snippets
            .iter_mut()
            .find(|snippet| snippet.id == id)
            .ok_or_else(|| SnippetError::NotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            snippet.name = name;
        }
        if let Some(description) = patch.description {
            snippet.description = description;
        }
        if let Some(code) = patch.code {
            snippet.code = code;
        }
        if let Some(language) = patch.language {
            snippet.language = language;
        }
        if let Some(tags) = patch.tags {
            snippet.tags = tags;
        }
        snippet.updated_at = Utc::now();
        Ok(snippet.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), SnippetError> {
        let before = self.snippets.len();
        self.snippets.retain(|snippet| snippet.id != id);
        if self.snippets.len() == before {
            return Err(SnippetError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|snippet| snippet.id == id)
    }

    pub fn all(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Case-insensitive substring search over name, description, and tags.
    pub fn search(&self, query: &str) -> Vec<&Snippet> {
        let term = query.to_lowercase();
        self.snippets
            .iter()
            .filter(|snippet| {
                snippet.name.to_lowercase().contains(&term)
                    || snippet.description.to_lowercase().contains(&term)
                    || snippet.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn by_language(&self, language: &str) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|snippet| snippet.language.eq_ignore_ascii_case(language))
            .collect()
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|snippet| snippet.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Pretty-printed JSON of the whole collection.
    pub fn export(&self) -> String {
        match serde_json::to_string_pretty(&self.snippets) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize snippets for export: {e}");
                String::new()
            }
        }
    }

    /// Merge an exported collection by id: existing ids are replaced, new
    /// ids appended. A malformed payload leaves the library unchanged.
    pub fn import(&mut self, raw: &str) -> Result<usize, SnippetError> {
        let incoming: Vec<Snippet> = serde_json::from_str(raw)?;
        let count = incoming.len();
        for snippet in incoming {
            match self.snippets.iter_mut().find(|s| s.id == snippet.id) {
                Some(existing) => *existing = snippet,
                None => self.snippets.push(snippet),
            }
        }
        Ok(count)
    }
}
