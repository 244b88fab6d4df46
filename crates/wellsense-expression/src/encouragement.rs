//! Fixed encouragement messages per mood.

use rand::Rng;

use crate::mood::MoodCategory;

const HAPPY: &[&str] = &[
    "Great smile! Keep that energy going.",
    "You look bright today. That smile suits you.",
    "Wonderful! Good moods are contagious.",
    "Perfect. You are radiating good vibes.",
];

const NEUTRAL: &[&str] = &[
    "Try a smile. Even a small one lifts your mood.",
    "Go on, give us a grin. It can change your whole day.",
    "Let's see that smile. Your brain will thank you.",
    "Smile for a moment and notice how it feels.",
];

const SAD: &[&str] = &[
    "It might feel hard right now, but try a small smile.",
    "Even a tiny smile makes a difference. You've got this.",
    "Smiling can help a little, even when you don't feel like it.",
    "Your smile matters. Let's try turning things around.",
];

const STRESSED: &[&str] = &[
    "Take a deep breath, then smile. It helps ease the tension.",
    "Relax your face and jaw. You are doing fine.",
    "A smile can calm you down. Give it a try.",
    "Let the tension go with a smile. You deserve a break.",
];

const ANALYZING: &[&str] = &[
    "Looking at your expression...",
    "Reading your mood...",
    "Just a moment, checking your face...",
];

/// All messages that may accompany `mood`
pub fn encouragement_pool(mood: MoodCategory) -> &'static [&'static str] {
    match mood {
        MoodCategory::Happy => HAPPY,
        MoodCategory::Neutral => NEUTRAL,
        MoodCategory::Sad => SAD,
        MoodCategory::Stressed => STRESSED,
        MoodCategory::Analyzing => ANALYZING,
    }
}

/// Draw one message for `mood` uniformly from its pool
pub fn pick_encouragement<R: Rng + ?Sized>(mood: MoodCategory, rng: &mut R) -> &'static str {
    let pool = encouragement_pool(mood);
    pool[rng.gen_range(0..pool.len())]
}
