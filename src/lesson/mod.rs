// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Lesson values and lesson categories.
//!
//! A [`Lesson`] is an immutable practice passage with its metadata. Lessons
//! are identified by their `id` alone: equality and hashing ignore every
//! other field.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Lesson category, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Short loosening-up drills
    Warmup,
    /// Slow, precise passages targeting common mistakes
    AccuracyBuilder,
    /// Longer passages for steady rhythm
    FluencyRun,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Category; 3] = [
        Category::Warmup,
        Category::AccuracyBuilder,
        Category::FluencyRun,
    ];

    /// Stable machine name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Warmup => "warmup",
            Category::AccuracyBuilder => "accuracy",
            Category::FluencyRun => "fluency",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Warmup => "Warmup",
            Category::AccuracyBuilder => "Accuracy",
            Category::FluencyRun => "Fluency",
        }
    }

    /// Parse a category from a user-supplied string.
    ///
    /// Case-insensitive; spaces, dashes and underscores are ignored, so
    /// `"accuracy-builders"` and `"AccuracyBuilder"` both parse.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "warmup" | "warmups" => Some(Category::Warmup),
            "accuracy" | "accuracybuilder" | "accuracybuilders" => {
                Some(Category::AccuracyBuilder)
            }
            "fluency" | "fluencyrun" | "fluencyruns" => Some(Category::FluencyRun),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One typing-practice passage and its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    id: String,
    title: String,
    focus_area: String,
    passage: String,
    coaching_tip: String,
}

impl Lesson {
    /// Create a new lesson
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        focus_area: impl Into<String>,
        passage: impl Into<String>,
        coaching_tip: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            focus_area: focus_area.into(),
            passage: passage.into(),
            coaching_tip: coaching_tip.into(),
        }
    }

    /// Catalog-wide identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Skill the lesson targets
    pub fn focus_area(&self) -> &str {
        &self.focus_area
    }

    /// Text the user types
    pub fn passage(&self) -> &str {
        &self.passage
    }

    pub fn coaching_tip(&self) -> &str {
        &self.coaching_tip
    }

    /// Number of whitespace-separated words in the passage
    pub fn word_count(&self) -> usize {
        self.passage.split_whitespace().count()
    }
}

impl PartialEq for Lesson {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Lesson {}

impl Hash for Lesson {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.title, self.focus_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample(id: &str, title: &str) -> Lesson {
        Lesson::new(id, title, "Home row keys", "asdf jkl;", "Stay relaxed.")
    }

    #[test]
    fn test_lesson_accessors() {
        let lesson = Lesson::new(
            "warmup_home_row",
            "Home Row Flow",
            "Home row keys",
            "asdf jkl; asdf jkl;",
            "Keep your wrists lifted.",
        );

        assert_eq!(lesson.id(), "warmup_home_row");
        assert_eq!(lesson.title(), "Home Row Flow");
        assert_eq!(lesson.focus_area(), "Home row keys");
        assert_eq!(lesson.passage(), "asdf jkl; asdf jkl;");
        assert_eq!(lesson.coaching_tip(), "Keep your wrists lifted.");
    }

    #[test]
    fn test_equality_uses_id_only() {
        let a = sample("drill", "First Title");
        let b = Lesson::new("drill", "Other Title", "Other focus", "xyz", "tip");
        let c = sample("other_drill", "First Title");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_uses_id_only() {
        let mut set = HashSet::new();
        set.insert(sample("drill", "One"));
        set.insert(sample("drill", "Two"));
        set.insert(sample("drill_2", "One"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_joins_title_and_focus() {
        let lesson = sample("drill", "Home Row Flow");
        assert_eq!(lesson.to_string(), "Home Row Flow — Home row keys");
    }

    #[test]
    fn test_construction_accepts_empty_fields() {
        let lesson = Lesson::new("", "", "", "", "");
        assert_eq!(lesson.id(), "");
        assert_eq!(lesson.word_count(), 0);
        assert_eq!(lesson.to_string(), " — ");
    }

    #[test]
    fn test_word_count() {
        let lesson = Lesson::new("id", "t", "f", "  the quick\tbrown\nfox ", "tip");
        assert_eq!(lesson.word_count(), 4);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Warmup.name(), "warmup");
        assert_eq!(Category::AccuracyBuilder.name(), "accuracy");
        assert_eq!(Category::FluencyRun.name(), "fluency");
        assert_eq!(Category::AccuracyBuilder.to_string(), "Accuracy");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("warmup"), Some(Category::Warmup));
        assert_eq!(Category::from_str(" Warmups "), Some(Category::Warmup));
        assert_eq!(Category::from_str("ACCURACY"), Some(Category::AccuracyBuilder));
        assert_eq!(
            Category::from_str("accuracy-builders"),
            Some(Category::AccuracyBuilder)
        );
        assert_eq!(Category::from_str("fluency_run"), Some(Category::FluencyRun));
        assert_eq!(Category::from_str("Fluency Runs"), Some(Category::FluencyRun));
        assert_eq!(Category::from_str("speed"), None);
        assert_eq!(Category::from_str(""), None);
    }

    #[test]
    fn test_category_order() {
        assert_eq!(
            Category::ALL,
            [Category::Warmup, Category::AccuracyBuilder, Category::FluencyRun]
        );
    }
}
