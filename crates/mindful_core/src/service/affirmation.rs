//! Affirmation selector.
//!
//! The only intentionally random operation in the core. The random source is
//! a parameter so tests can seed it.

use crate::model::mood::{Mood, MoodGroup};
use rand::Rng;

/// Shown when there is no dominant mood yet.
pub const DEFAULT_AFFIRMATION: &str =
    "Every entry is a step toward understanding yourself better.";

const POSITIVE_AFFIRMATIONS: &[&str] = &[
    "Your positive energy is contagious. Keep shining!",
    "You are creating a life you love, one day at a time.",
    "Celebrate this feeling. You deserve every bit of it.",
    "Gratitude turns what we have into enough.",
];

const NEUTRAL_AFFIRMATIONS: &[&str] = &[
    "Calm days are a foundation for growth.",
    "It's okay to simply be. Balance is its own kind of strength.",
    "Small moments of joy are waiting to be noticed today.",
    "You are exactly where you need to be right now.",
];

const CHALLENGING_AFFIRMATIONS: &[&str] = &[
    "This feeling is temporary. Brighter days are ahead.",
    "Be gentle with yourself. You are doing the best you can.",
    "It's okay not to be okay. Reaching out is a sign of strength.",
    "You have overcome hard days before, and you will again.",
];

/// Affirmation pool for a mood group.
pub fn pool(group: MoodGroup) -> &'static [&'static str] {
    match group {
        MoodGroup::Positive => POSITIVE_AFFIRMATIONS,
        MoodGroup::Neutral => NEUTRAL_AFFIRMATIONS,
        MoodGroup::Challenging => CHALLENGING_AFFIRMATIONS,
    }
}

/// Picks a supportive message for `dominant`, uniformly within its pool.
pub fn pick<R: Rng>(dominant: Option<Mood>, rng: &mut R) -> &'static str {
    let Some(mood) = dominant else {
        return DEFAULT_AFFIRMATION;
    };
    let candidates = pool(mood.group());
    let index = rng.random_range(0..candidates.len());
    candidates.get(index).copied().unwrap_or(DEFAULT_AFFIRMATION)
}
