//! Mood policy table.
//!
//! Every mood resolves to one static [`MoodPolicy`]: how to order scored
//! tasks, the base break interval and the advice shown with the plan.

use std::cmp::Ordering;

use serde::Serialize;

use crate::model::ScoredTask;
use crate::mood::Mood;

/// Sort key used to reorder scored tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingKey {
    /// priority desc, then difficulty desc
    PriorityThenDifficulty,
    /// difficulty asc, then duration asc
    EasiestShortestFirst,
    /// priority per minute desc, then duration asc
    QuickWins,
    /// difficulty asc
    EasiestFirst,
    /// priority desc
    Priority,
}

impl OrderingKey {
    /// Total order over scored tasks. Equal keys return `Equal` so a stable
    /// sort keeps input order.
    pub fn compare(self, a: &ScoredTask, b: &ScoredTask) -> Ordering {
        match self {
            OrderingKey::PriorityThenDifficulty => b
                .priority_score
                .total_cmp(&a.priority_score)
                .then_with(|| b.task.difficulty.cmp(&a.task.difficulty)),
            OrderingKey::EasiestShortestFirst => a
                .task
                .difficulty
                .cmp(&b.task.difficulty)
                .then_with(|| a.task.duration.cmp(&b.task.duration)),
            OrderingKey::QuickWins => priority_per_minute(b)
                .total_cmp(&priority_per_minute(a))
                .then_with(|| a.task.duration.cmp(&b.task.duration)),
            OrderingKey::EasiestFirst => a.task.difficulty.cmp(&b.task.difficulty),
            OrderingKey::Priority => b.priority_score.total_cmp(&a.priority_score),
        }
    }
}

// duration > 0 is guaranteed by TaskInput::validate
fn priority_per_minute(t: &ScoredTask) -> f64 {
    t.priority_score / t.task.duration as f64
}

/// Per-mood scheduling policy.
#[derive(Debug, Clone, Serialize)]
pub struct MoodPolicy {
    pub mood: Mood,
    pub ordering: OrderingKey,
    /// Break interval before mental-load adjustment (minutes)
    pub base_break_interval: u32,
    /// Tips, most important first
    pub tips: [&'static str; 3],
}

static TIRED: MoodPolicy = MoodPolicy {
    mood: Mood::Tired,
    ordering: OrderingKey::EasiestShortestFirst,
    base_break_interval: 35,
    tips: [
        "Start low-effort tasks.",
        "Use 20–25 min intervals.",
        "Avoid heavy cognitive tasks early.",
    ],
};

static OK: MoodPolicy = MoodPolicy {
    mood: Mood::Ok,
    ordering: OrderingKey::Priority,
    base_break_interval: 50,
    tips: [
        "Balanced sequence.",
        "Avoid multitasking.",
        "Steady pacing works well.",
    ],
};

static MOTIVATED: MoodPolicy = MoodPolicy {
    mood: Mood::Motivated,
    ordering: OrderingKey::PriorityThenDifficulty,
    base_break_interval: 70,
    tips: [
        "Do high-difficulty tasks first.",
        "Cluster similar tasks.",
        "Push your productive window!",
    ],
};

static STRESSED: MoodPolicy = MoodPolicy {
    mood: Mood::Stressed,
    ordering: OrderingKey::QuickWins,
    base_break_interval: 35,
    tips: [
        "Start with quick wins.",
        "Prioritize small tasks.",
        "Avoid long focus blocks.",
    ],
};

static ANXIOUS: MoodPolicy = MoodPolicy {
    mood: Mood::Anxious,
    ordering: OrderingKey::QuickWins,
    base_break_interval: 35,
    tips: [
        "Focus on one task at a time.",
        "Break tasks into chunks.",
        "Reduce cognitive load early.",
    ],
};

static OVERWHELMED: MoodPolicy = MoodPolicy {
    mood: Mood::Overwhelmed,
    ordering: OrderingKey::EasiestShortestFirst,
    base_break_interval: 25,
    tips: [
        "Simplify your plan.",
        "Start with extremely small tasks.",
        "Introduce extra breaks.",
    ],
};

static RELAXED: MoodPolicy = MoodPolicy {
    mood: Mood::Relaxed,
    ordering: OrderingKey::EasiestFirst,
    base_break_interval: 55,
    tips: [
        "Use calm state for difficult tasks.",
        "Cluster similar tasks.",
        "Try medium-intensity tasks first.",
    ],
};

impl MoodPolicy {
    pub fn for_mood(mood: Mood) -> &'static MoodPolicy {
        match mood {
            Mood::Tired => &TIRED,
            Mood::Ok => &OK,
            Mood::Motivated => &MOTIVATED,
            Mood::Stressed => &STRESSED,
            Mood::Anxious => &ANXIOUS,
            Mood::Overwhelmed => &OVERWHELMED,
            Mood::Relaxed => &RELAXED,
        }
    }

    /// The advice shown alongside a plan.
    pub fn advice(&self) -> &'static str {
        self.tips[0]
    }

    pub fn compare(&self, a: &ScoredTask, b: &ScoredTask) -> Ordering {
        self.ordering.compare(a, b)
    }

    /// Stable sort in place.
    pub fn reorder(&self, tasks: &mut [ScoredTask]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}
