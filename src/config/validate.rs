// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Catalog checks.
//!
//! Catalogs are never rejected for these issues. They are reported so the
//! caller can warn about a catalog that loads but is probably not what the
//! author meant.

use std::collections::HashSet;
use std::fmt;

use super::CatalogFile;
use crate::lesson::Category;

/// Something suspicious in a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Category has no lessons, so random picks from it will fail
    EmptyCategory(Category),
    /// Id already used earlier in the catalog
    DuplicateId(String),
    /// Lesson with an empty id
    EmptyId { category: Category, index: usize },
    /// Lesson with nothing to type
    EmptyPassage(String),
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::EmptyCategory(category) => {
                write!(f, "category '{}' has no lessons", category)
            }
            CatalogIssue::DuplicateId(id) => write!(f, "lesson id '{}' is used more than once", id),
            CatalogIssue::EmptyId { category, index } => {
                write!(f, "{} lesson #{} has an empty id", category, index + 1)
            }
            CatalogIssue::EmptyPassage(id) => write!(f, "lesson '{}' has an empty passage", id),
        }
    }
}

/// Check a catalog, returning issues in catalog order
pub fn validate_catalog(catalog: &CatalogFile) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for category in Category::ALL {
        let lessons = catalog.lessons(category);
        if lessons.is_empty() {
            issues.push(CatalogIssue::EmptyCategory(category));
        }

        for (index, lesson) in lessons.iter().enumerate() {
            if lesson.id().is_empty() {
                issues.push(CatalogIssue::EmptyId { category, index });
            } else if !seen.insert(lesson.id()) {
                issues.push(CatalogIssue::DuplicateId(lesson.id().to_string()));
            }

            if lesson.passage().trim().is_empty() {
                issues.push(CatalogIssue::EmptyPassage(lesson.id().to_string()));
            }
        }
    }

    issues
}
