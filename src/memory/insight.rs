//! Proactive observations from goal and mood history
//!
//! The insight engine is a pure function over the user's current goals and
//! mood check-ins; it never reads chat text and persists nothing. Each rule
//! is applied independently and the results are combined.

use crate::types::{Goal, MoodEntry};

/// Completed-goal count at which the streak observation fires
const STREAK_THRESHOLD: usize = 3;

/// One proactive observation, paired with a suggested tone/action hint for
/// the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// What was noticed
    pub observation: String,
    /// How the assistant should act on it
    pub action: String,
}

/// Rule-based engine deriving observations from goals and moods
pub struct InsightEngine;

impl InsightEngine {
    /// Derive zero or more observations from the current goal list and the
    /// newest-first mood history.
    pub fn observe(goals: &[Goal], moods: &[MoodEntry]) -> Vec<Observation> {
        let mut observations = Vec::new();

        observations.extend(Self::mood_decline(moods));
        observations.extend(Self::goal_progress(goals));

        observations
    }

    /// Both of the two most recent check-ins negative → acknowledge the
    /// pattern. Fewer than two entries produces no signal.
    fn mood_decline(moods: &[MoodEntry]) -> Option<Observation> {
        if moods.len() < 2 {
            return None;
        }
        if !moods[..2].iter().all(|m| m.mood.is_negative()) {
            return None;
        }
        Some(Observation {
            observation: "The user has recorded low moods for their last couple of check-ins."
                .to_string(),
            action: "Gently acknowledge the pattern and offer a specific relaxation tip or a \
                     breathing exercise."
                .to_string(),
        })
    }

    /// Streak and all-complete signals. The rules are independent; both can
    /// fire for the same goal list.
    fn goal_progress(goals: &[Goal]) -> Vec<Observation> {
        let mut results = Vec::new();
        let completed = goals.iter().filter(|g| g.completed).count();

        if completed >= STREAK_THRESHOLD {
            results.push(Observation {
                observation: format!("The user has completed {completed} goals recently."),
                action: "Celebrate the consistency and mention the streak.".to_string(),
            });
        }
        if !goals.is_empty() && completed == goals.len() {
            results.push(Observation {
                observation: "The user has completed all of their daily goals.".to_string(),
                action: "Congratulate them enthusiastically on finishing everything.".to_string(),
            });
        }
        results
    }
}
