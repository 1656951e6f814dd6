// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Lesson library.
//!
//! The library holds three ordered lesson sequences that are fixed once
//! the library is built:
//! - Warmups
//! - Accuracy builders
//! - Fluency runs
//!
//! Callers get borrowed slices, so the catalog cannot be changed through
//! them. Random picks draw from a generator owned by the library and kept
//! behind a mutex, which lets one library be shared across threads.

pub mod seed;

use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, trace};

use crate::lesson::{Category, Lesson};

/// Errors returned by library operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// A random pick was requested from a category with no lessons
    #[error("no lessons in category '{0}'")]
    EmptyCategory(Category),
}

/// Read-only catalog of typing lessons
pub struct LessonLibrary {
    warmups: Vec<Lesson>,
    accuracy_builders: Vec<Lesson>,
    fluency_runs: Vec<Lesson>,
    rng: Mutex<StdRng>,
}

impl LessonLibrary {
    /// Create a library holding the built-in catalog
    pub fn new() -> Self {
        Self::build(
            seed::warmups(),
            seed::accuracy_builders(),
            seed::fluency_runs(),
            StdRng::from_entropy(),
        )
    }

    /// Create a library holding the built-in catalog with a deterministic
    /// random sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::build(
            seed::warmups(),
            seed::accuracy_builders(),
            seed::fluency_runs(),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Create a library from custom lesson lists.
    ///
    /// Categories may be empty; picking from an empty category returns
    /// [`LibraryError::EmptyCategory`].
    pub fn from_lessons(
        warmups: Vec<Lesson>,
        accuracy_builders: Vec<Lesson>,
        fluency_runs: Vec<Lesson>,
    ) -> Self {
        Self::build(warmups, accuracy_builders, fluency_runs, StdRng::from_entropy())
    }

    /// Same as [`from_lessons`](Self::from_lessons) with a seeded generator
    pub fn from_lessons_with_seed(
        warmups: Vec<Lesson>,
        accuracy_builders: Vec<Lesson>,
        fluency_runs: Vec<Lesson>,
        seed: u64,
    ) -> Self {
        Self::build(
            warmups,
            accuracy_builders,
            fluency_runs,
            StdRng::seed_from_u64(seed),
        )
    }

    fn build(
        warmups: Vec<Lesson>,
        accuracy_builders: Vec<Lesson>,
        fluency_runs: Vec<Lesson>,
        rng: StdRng,
    ) -> Self {
        debug!(
            warmups = warmups.len(),
            accuracy_builders = accuracy_builders.len(),
            fluency_runs = fluency_runs.len(),
            "lesson library built"
        );

        Self {
            warmups,
            accuracy_builders,
            fluency_runs,
            rng: Mutex::new(rng),
        }
    }

    pub fn warmups(&self) -> &[Lesson] {
        &self.warmups
    }

    pub fn accuracy_builders(&self) -> &[Lesson] {
        &self.accuracy_builders
    }

    pub fn fluency_runs(&self) -> &[Lesson] {
        &self.fluency_runs
    }

    /// Lessons in the given category, in catalog order
    pub fn lessons(&self, category: Category) -> &[Lesson] {
        match category {
            Category::Warmup => &self.warmups,
            Category::AccuracyBuilder => &self.accuracy_builders,
            Category::FluencyRun => &self.fluency_runs,
        }
    }

    /// Every lesson: warmups, then accuracy builders, then fluency runs.
    ///
    /// The returned vector is freshly built on each call.
    pub fn all_lessons(&self) -> Vec<&Lesson> {
        Category::ALL
            .iter()
            .flat_map(|&category| self.lessons(category))
            .collect()
    }

    /// Pick a lesson uniformly at random from a category
    pub fn random(&self, category: Category) -> Result<&Lesson, LibraryError> {
        let lessons = self.lessons(category);
        if lessons.is_empty() {
            return Err(LibraryError::EmptyCategory(category));
        }

        // A panic while holding the lock cannot leave the generator invalid
        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..lessons.len());

        let lesson = &lessons[index];
        trace!(category = category.name(), id = lesson.id(), "random lesson picked");
        Ok(lesson)
    }

    pub fn random_warmup(&self) -> Result<&Lesson, LibraryError> {
        self.random(Category::Warmup)
    }

    pub fn random_accuracy_builder(&self) -> Result<&Lesson, LibraryError> {
        self.random(Category::AccuracyBuilder)
    }

    pub fn random_fluency_run(&self) -> Result<&Lesson, LibraryError> {
        self.random(Category::FluencyRun)
    }

    /// Find a lesson by id.
    ///
    /// With duplicate ids the first match in catalog order wins.
    pub fn find(&self, id: &str) -> Option<&Lesson> {
        self.find_with_category(id).map(|(_, lesson)| lesson)
    }

    /// Category holding the lesson with this id
    pub fn category_of(&self, id: &str) -> Option<Category> {
        self.find_with_category(id).map(|(category, _)| category)
    }

    fn find_with_category(&self, id: &str) -> Option<(Category, &Lesson)> {
        Category::ALL.iter().find_map(|&category| {
            self.lessons(category)
                .iter()
                .find(|lesson| lesson.id() == id)
                .map(|lesson| (category, lesson))
        })
    }

    /// Total number of lessons
    pub fn len(&self) -> usize {
        self.warmups.len() + self.accuracy_builders.len() + self.fluency_runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LessonLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LessonLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonLibrary")
            .field("warmups", &self.warmups.len())
            .field("accuracy_builders", &self.accuracy_builders.len())
            .field("fluency_runs", &self.fluency_runs.len())
            .finish()
    }
}
