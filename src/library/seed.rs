// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Built-in lesson catalog.

use crate::lesson::Lesson;

/// Built-in warmup lessons
pub fn warmups() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "warmup_home_row",
            "Home Row Flow",
            "Home row keys",
            "asdf jkl; asdf jkl; keep a gentle curve in your fingers as you glide across the home row",
            "Keep your wrists lifted and strike the keys with light taps. Say the letters softly to reinforce muscle memory.",
        ),
        Lesson::new(
            "warmup_numbers",
            "Number Pad Rhythm",
            "Number reach",
            "123 789 456 012 practice stretching from the home row while staying relaxed",
            "Glance only with your eyes. Try to keep your palms centered over F and J while reaching for numbers.",
        ),
    ]
}

/// Built-in accuracy builder lessons
pub fn accuracy_builders() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "accuracy_tricky_pairs",
            "Tricky Letter Pairs",
            "Common reversals",
            "receive believe achieve perceive relieve conceive deceive",
            "Focus on the ie/ei pattern. Slow down intentionally and keep accuracy above 95% before adding speed.",
        ),
        Lesson::new(
            "accuracy_punctuation",
            "Punctuation Patrol",
            "Symbols and rhythm",
            "Where does the question mark go? Does the exclamation point shout or sing? Practice makes punctuation pleasant!",
            "Say the punctuation names as you type them. Build a habit of pressing shift with the opposite hand.",
        ),
    ]
}

/// Built-in fluency run lessons
pub fn fluency_runs() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "fluency_story",
            "Guided Story Sprint",
            "Storytelling",
            "The quick brown fox thanked the patient hound for sharing mindful breathing with the bustling forest.",
            "Keep a calm pace. Smooth breathing supports consistent keystrokes; inhale every two lines.",
        ),
        Lesson::new(
            "fluency_fact",
            "STEM Fact Blast",
            "Scientific vocabulary",
            "Photosynthesis powers plants with sunlight, water, and carbon dioxide, producing energy that fuels entire ecosystems.",
            "Break longer words into syllables as you type: pho-to-syn-the-sis. Accuracy first, speed follows.",
        ),
    ]
}
