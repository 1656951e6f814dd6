// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Typing-practice lesson catalog.
//!
//! Lessons are grouped into three categories (warmups, accuracy builders
//! and fluency runs). A [`LessonLibrary`] holds the built-in catalog, or one
//! loaded from a [`CatalogFile`], and hands out lessons by category or at
//! random.

pub mod config;
pub mod lesson;
pub mod library;

pub use config::{validate_catalog, CatalogFile, CatalogIssue};
pub use lesson::{Category, Lesson};
pub use library::{LessonLibrary, LibraryError};
