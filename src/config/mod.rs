// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Catalog files for typecoach.
//!
//! A catalog file replaces the built-in lessons with a custom set. Files
//! ending in `.toml` are read as TOML, anything else as YAML.

pub mod validate;

pub use validate::{validate_catalog, CatalogIssue};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::lesson::{Category, Lesson};
use crate::library::{seed, LessonLibrary};

/// Lesson catalog as stored in a file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogFile {
    /// Warmup lessons
    #[serde(default)]
    pub warmups: Vec<Lesson>,
    /// Accuracy builder lessons
    #[serde(default)]
    pub accuracy_builders: Vec<Lesson>,
    /// Fluency run lessons
    #[serde(default)]
    pub fluency_runs: Vec<Lesson>,
}

impl CatalogFile {
    /// The built-in catalog
    pub fn builtin() -> Self {
        Self {
            warmups: seed::warmups(),
            accuracy_builders: seed::accuracy_builders(),
            fluency_runs: seed::fluency_runs(),
        }
    }

    /// Load a catalog, choosing the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let catalog = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        catalog.with_context(|| format!("Invalid catalog file: {:?}", path))
    }

    /// Parse a catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML catalog")
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML catalog")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize catalog to YAML")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize catalog to TOML")
    }

    /// Lessons in a category
    pub fn lessons(&self, category: Category) -> &[Lesson] {
        match category {
            Category::Warmup => &self.warmups,
            Category::AccuracyBuilder => &self.accuracy_builders,
            Category::FluencyRun => &self.fluency_runs,
        }
    }

    /// Build a library from this catalog
    pub fn into_library(self) -> LessonLibrary {
        LessonLibrary::from_lessons(self.warmups, self.accuracy_builders, self.fluency_runs)
    }

    /// Build a library with a deterministic random sequence
    pub fn into_library_with_seed(self, seed: u64) -> LessonLibrary {
        LessonLibrary::from_lessons_with_seed(
            self.warmups,
            self.accuracy_builders,
            self.fluency_runs,
            seed,
        )
    }
}

impl From<&LessonLibrary> for CatalogFile {
    fn from(library: &LessonLibrary) -> Self {
        Self {
            warmups: library.warmups().to_vec(),
            accuracy_builders: library.accuracy_builders().to_vec(),
            fluency_runs: library.fluency_runs().to_vec(),
        }
    }
}
