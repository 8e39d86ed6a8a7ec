//! Day-plan builder.
//!
//! Turns tasks plus a mood into a contiguous minute timeline:
//! - Scores every task with the shared [`ScoringModel`]
//! - Reorders them with the mood's [`MoodPolicy`]
//! - Lays them out back to back from minute 0, inserting a rest break each
//!   time the accumulated task time reaches the break interval

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::{ScoredTask, ScoringModel};
use crate::mood::Mood;
use crate::policy::MoodPolicy;
use crate::task::Task;

/// Block type string used for rest blocks.
pub const BREAK_TYPE: &str = "break";

/// Label of the regular rest block.
pub const BREAK_LABEL: &str = "Break";

/// Label of the leading block for overwhelmed users.
pub const CALMING_BREAK_LABEL: &str = "Calming Break";

/// Timeline configuration (`[timeline]` in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineConfig {
    /// Length of an inserted rest break (minutes)
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Length of the leading calming break (minutes)
    #[serde(default = "default_calming_break_minutes")]
    pub calming_break_minutes: u32,
    /// Floor for the load-adjusted break interval (minutes)
    #[serde(default = "default_min_break_interval")]
    pub min_break_interval: u32,
}

fn default_break_minutes() -> u32 {
    10
}
fn default_calming_break_minutes() -> u32 {
    8
}
fn default_min_break_interval() -> u32 {
    20
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            break_minutes: default_break_minutes(),
            calming_break_minutes: default_calming_break_minutes(),
            min_break_interval: default_min_break_interval(),
        }
    }
}

/// Whether a block holds a task or a rest period.
///
/// Kept apart from the type string, which is free text for tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockKind {
    #[default]
    Task,
    Break,
}

/// One contiguous unit of the output timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledBlock {
    pub label: String,
    /// Task type string, or `"break"`
    #[serde(rename = "type")]
    pub block_type: String,
    pub start_minute: u32,
    pub end_minute: u32,
    pub priority_score: f64,
    pub mental_load: f64,
    #[serde(skip)]
    pub kind: BlockKind,
}

impl ScheduledBlock {
    fn task(scored: &ScoredTask, start_minute: u32) -> Self {
        Self {
            label: scored.task.name.clone(),
            block_type: scored.task.task_type.clone(),
            start_minute,
            end_minute: start_minute.saturating_add(scored.task.duration),
            priority_score: scored.priority_score,
            mental_load: scored.mental_load,
            kind: BlockKind::Task,
        }
    }

    fn rest(label: &str, start_minute: u32, minutes: u32) -> Self {
        Self {
            label: label.to_string(),
            block_type: BREAK_TYPE.to_string(),
            start_minute,
            end_minute: start_minute.saturating_add(minutes),
            priority_score: 0.0,
            mental_load: 0.0,
            kind: BlockKind::Break,
        }
    }

    pub fn is_break(&self) -> bool {
        self.kind == BlockKind::Break
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    /// Wall-clock start and end given the time the day starts.
    ///
    /// Times wrap past midnight.
    pub fn clock_range(&self, day_start: NaiveTime) -> (NaiveTime, NaiveTime) {
        let at = |minute: u32| {
            day_start
                .overflowing_add_signed(Duration::minutes(i64::from(minute)))
                .0
        };
        (at(self.start_minute), at(self.end_minute))
    }
}

/// Output of one scheduling call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    #[serde(rename = "tasks")]
    pub blocks: Vec<ScheduledBlock>,
    pub mood_advice: String,
    /// Break interval used for this plan (minutes)
    #[serde(skip)]
    pub break_interval: u32,
}

/// Aggregate figures for a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub task_blocks: usize,
    pub break_blocks: usize,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub break_interval: u32,
}

impl DayPlan {
    /// End of the last block, or 0 for an empty plan.
    pub fn total_minutes(&self) -> u32 {
        self.blocks.last().map_or(0, |b| b.end_minute)
    }

    pub fn summary(&self) -> PlanSummary {
        self.blocks.iter().fold(
            PlanSummary {
                break_interval: self.break_interval,
                ..PlanSummary::default()
            },
            |mut acc, block| {
                if block.is_break() {
                    acc.break_blocks += 1;
                    acc.break_minutes += block.duration_minutes();
                } else {
                    acc.task_blocks += 1;
                    acc.focus_minutes += block.duration_minutes();
                }
                acc
            },
        )
    }
}

/// Load-adjusted break interval:
/// `max(floor, round(base - 2 * mean(mental_load)))`, mean = 1 when empty.
pub fn break_interval(base: u32, scored: &[ScoredTask], floor: u32) -> u32 {
    let mean_load = if scored.is_empty() {
        1.0
    } else {
        scored.iter().map(|t| t.mental_load).sum::<f64>() / scored.len() as f64
    };
    let adjusted = (f64::from(base) - 2.0 * mean_load).round();
    if adjusted <= f64::from(floor) {
        floor
    } else {
        adjusted as u32
    }
}

/// Lay out already-ordered tasks into a contiguous timeline.
///
/// The clock saturates at `u32::MAX`. Validated tasks are capped at
/// [`MAX_DURATION_MINUTES`](crate::task::MAX_DURATION_MINUTES) and never
/// get there.
pub fn build_timeline(
    ordered: &[ScoredTask],
    mood: Mood,
    interval: u32,
    config: &TimelineConfig,
) -> Vec<ScheduledBlock> {
    let mut blocks = Vec::with_capacity(ordered.len() * 2 + 1);
    let mut minutes_used = 0;
    let mut break_counter: u32 = 0;

    if mood == Mood::Overwhelmed {
        blocks.push(ScheduledBlock::rest(
            CALMING_BREAK_LABEL,
            minutes_used,
            config.calming_break_minutes,
        ));
        minutes_used = minutes_used.saturating_add(config.calming_break_minutes);
    }

    for scored in ordered {
        blocks.push(ScheduledBlock::task(scored, minutes_used));
        minutes_used = minutes_used.saturating_add(scored.task.duration);
        break_counter = break_counter.saturating_add(scored.task.duration);

        if break_counter >= interval {
            blocks.push(ScheduledBlock::rest(BREAK_LABEL, minutes_used, config.break_minutes));
            minutes_used = minutes_used.saturating_add(config.break_minutes);
            break_counter = 0;
        }
    }

    blocks
}

/// Mood-aware scheduler borrowing a fitted model.
pub struct Scheduler<'m> {
    model: &'m ScoringModel,
    config: TimelineConfig,
}

impl<'m> Scheduler<'m> {
    /// Create a scheduler with the default timeline config
    pub fn new(model: &'m ScoringModel) -> Self {
        Self {
            model,
            config: TimelineConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(model: &'m ScoringModel, config: TimelineConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Score and order tasks without laying them out.
    pub fn rank(&self, tasks: &[Task], mood: Mood) -> Vec<ScoredTask> {
        let mut scored: Vec<ScoredTask> = tasks
            .iter()
            .map(|task| self.model.score_task(task, mood))
            .collect();
        MoodPolicy::for_mood(mood).reorder(&mut scored);
        scored
    }

    /// Build the day plan for `tasks` under `mood`.
    pub fn plan(&self, tasks: &[Task], mood: Mood) -> DayPlan {
        let policy = MoodPolicy::for_mood(mood);
        let ordered = self.rank(tasks, mood);
        let interval = break_interval(
            policy.base_break_interval,
            &ordered,
            self.config.min_break_interval,
        );

        tracing::debug!(
            %mood,
            tasks = ordered.len(),
            break_interval = interval,
            "building timeline"
        );

        DayPlan {
            blocks: build_timeline(&ordered, mood, interval, &self.config),
            mood_advice: policy.advice().to_string(),
            break_interval: interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(name: &str, duration: u32, load: f64) -> ScoredTask {
        scored_as(name, duration, load, "work")
    }

    fn scored_as(name: &str, duration: u32, load: f64, task_type: &str) -> ScoredTask {
        ScoredTask {
            task: Task::new(name, duration, 3, 3, task_type),
            priority_score: 30.0,
            mental_load: load,
        }
    }

    fn assert_contiguous(blocks: &[ScheduledBlock]) {
        let mut clock = 0;
        for block in blocks {
            assert_eq!(block.start_minute, clock, "gap or overlap at {}", block.label);
            assert!(block.end_minute > block.start_minute);
            clock = block.end_minute;
        }
    }

    #[test]
    fn test_break_interval_formula() {
        // 50 - 2*4.25 = 41.5 -> 42
        let tasks = [scored("a", 10, 4.0), scored("b", 10, 4.5)];
        assert_eq!(break_interval(50, &tasks, 20), 42);
        // 70 - 2*3 = 64
        assert_eq!(break_interval(70, &[scored("a", 10, 3.0)], 20), 64);
    }

    #[test]
    fn test_break_interval_floor() {
        assert_eq!(break_interval(25, &[scored("a", 10, 9.0)], 20), 20);
        // negative adjusted value clamps to the floor as well
        assert_eq!(break_interval(25, &[scored("a", 10, 40.0)], 20), 20);
    }

    #[test]
    fn test_break_interval_empty_uses_unit_load() {
        assert_eq!(break_interval(50, &[], 20), 48);
        assert_eq!(break_interval(25, &[], 20), 23);
    }

    #[test]
    fn test_timeline_inserts_breaks_at_threshold() {
        let tasks = [scored("a", 30, 1.0), scored("b", 20, 1.0), scored("c", 15, 1.0)];
        let blocks = build_timeline(&tasks, Mood::Ok, 50, &TimelineConfig::default());
        let labels: Vec<_> = blocks.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "Break", "c"]);
        assert_eq!(blocks[2].start_minute, 50);
        assert_eq!(blocks[2].end_minute, 60);
        assert_eq!(blocks[3].start_minute, 60);
        assert_contiguous(&blocks);
    }

    #[test]
    fn test_long_task_is_not_split() {
        let tasks = [scored("marathon", 200, 1.0)];
        let blocks = build_timeline(&tasks, Mood::Ok, 40, &TimelineConfig::default());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].duration_minutes(), 200);
        assert!(blocks[1].is_break());
    }

    #[test]
    fn test_overwhelmed_gets_calming_break() {
        let tasks = [scored("a", 10, 1.0)];
        let blocks = build_timeline(&tasks, Mood::Overwhelmed, 25, &TimelineConfig::default());
        assert_eq!(blocks[0].label, CALMING_BREAK_LABEL);
        assert_eq!(blocks[0].block_type, BREAK_TYPE);
        assert_eq!(blocks[0].duration_minutes(), 8);
        assert_eq!(blocks[1].start_minute, 8);
        assert_contiguous(&blocks);
    }

    #[test]
    fn test_empty_timeline() {
        let config = TimelineConfig::default();
        assert!(build_timeline(&[], Mood::Tired, 35, &config).is_empty());
        let only_calm = build_timeline(&[], Mood::Overwhelmed, 25, &config);
        assert_eq!(only_calm.len(), 1);
        assert_eq!(only_calm[0].label, CALMING_BREAK_LABEL);
    }

    #[test]
    fn test_break_blocks_carry_zero_scores() {
        let tasks = [scored("a", 60, 7.0)];
        let blocks = build_timeline(&tasks, Mood::Ok, 20, &TimelineConfig::default());
        assert_eq!(blocks[0].mental_load, 7.0);
        assert_eq!(blocks[1].priority_score, 0.0);
        assert_eq!(blocks[1].mental_load, 0.0);
    }

    #[test]
    fn test_custom_break_lengths() {
        let config = TimelineConfig {
            break_minutes: 5,
            calming_break_minutes: 12,
            min_break_interval: 20,
        };
        let tasks = [scored("a", 30, 1.0), scored("b", 30, 1.0)];
        let blocks = build_timeline(&tasks, Mood::Overwhelmed, 25, &config);
        let spans: Vec<_> = blocks.iter().map(|b| (b.start_minute, b.end_minute)).collect();
        assert_eq!(spans, [(0, 12), (12, 42), (42, 47), (47, 77), (77, 82)]);
    }

    #[test]
    fn test_clock_range_and_summary() {
        let tasks = [scored("a", 45, 1.0), scored("b", 30, 1.0)];
        let blocks = build_timeline(&tasks, Mood::Ok, 50, &TimelineConfig::default());
        let plan = DayPlan {
            blocks,
            mood_advice: "Balanced sequence.".to_string(),
            break_interval: 50,
        };

        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let (start, end) = plan.blocks[1].clock_range(nine);
        assert_eq!(start, NaiveTime::from_hms_opt(9, 45, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(10, 15, 0).unwrap());

        let summary = plan.summary();
        assert_eq!(summary.task_blocks, 2);
        assert_eq!(summary.break_blocks, 1);
        assert_eq!(summary.focus_minutes, 75);
        assert_eq!(summary.break_minutes, 10);
        assert_eq!(plan.total_minutes(), 85);
    }

    #[test]
    fn test_task_typed_break_counts_as_task() {
        let tasks = [scored_as("nap", 30, 1.0, BREAK_TYPE)];
        let blocks = build_timeline(&tasks, Mood::Ok, 1000, &TimelineConfig::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block_type, "break");
        assert_eq!(blocks[0].kind, BlockKind::Task);
        assert!(!blocks[0].is_break());

        let plan = DayPlan {
            blocks,
            mood_advice: "Balanced sequence.".to_string(),
            break_interval: 1000,
        };
        let summary = plan.summary();
        assert_eq!(summary.task_blocks, 1);
        assert_eq!(summary.break_blocks, 0);
        assert_eq!(summary.focus_minutes, 30);
    }

    #[test]
    fn test_day_long_tasks_stay_contiguous() {
        let tasks = [
            scored("a", crate::task::MAX_DURATION_MINUTES, 1.0),
            scored("b", crate::task::MAX_DURATION_MINUTES, 1.0),
        ];
        let blocks = build_timeline(&tasks, Mood::Overwhelmed, 20, &TimelineConfig::default());
        assert_contiguous(&blocks);
        assert_eq!(blocks.last().map(|b| b.end_minute), Some(8 + 2 * 1440 + 2 * 10));
    }

    #[test]
    fn test_unvalidated_huge_durations_saturate() {
        let tasks = [scored("a", 3_000_000_000, 1.0), scored("b", 3_000_000_000, 1.0)];
        let blocks = build_timeline(&tasks, Mood::Tired, 20, &TimelineConfig::default());
        assert_eq!(blocks[0].end_minute, 3_000_000_000);
        assert_eq!(blocks[2].start_minute, 3_000_000_010);
        assert_eq!(blocks[2].end_minute, u32::MAX);
        assert!(blocks.iter().all(|b| b.end_minute >= b.start_minute));
    }

    #[test]
    fn test_clock_range_wraps_midnight() {
        let block = ScheduledBlock::rest(BREAK_LABEL, 90, 10);
        let late = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        let (start, end) = block.clock_range(late);
        assert_eq!(start, NaiveTime::from_hms_opt(0, 30, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(0, 40, 0).unwrap());
    }

    #[test]
    fn test_plan_serializes_wire_shape() {
        let plan = DayPlan {
            blocks: vec![ScheduledBlock::rest(CALMING_BREAK_LABEL, 0, 8)],
            mood_advice: "Simplify your plan.".to_string(),
            break_interval: 20,
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["mood_advice"], "Simplify your plan.");
        assert_eq!(json["tasks"][0]["type"], "break");
        assert_eq!(json["tasks"][0]["label"], "Calming Break");
        assert_eq!(json["tasks"][0]["end_minute"], 8);
        assert!(json["tasks"][0].get("kind").is_none());
        assert!(json.get("break_interval").is_none());
    }
}
