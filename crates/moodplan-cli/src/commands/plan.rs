use std::io::Read;
use std::path::Path;

use clap::Args;
use moodplan_core::storage::parse_clock;
use moodplan_core::{validate_all, DayPlan, Mood, PlanRequest, Scheduler, ScoringModel};

#[derive(Args)]
pub struct PlanArgs {
    /// Request JSON file (`{"tasks": [...], "mood": "..."}`), or `-` for stdin
    pub input: String,
    /// Override the mood in the request
    #[arg(long)]
    pub mood: Option<String>,
    /// Output the response as JSON
    #[arg(long)]
    pub json: bool,
    /// Wall-clock start of the day, HH:MM (defaults to display.day_start)
    #[arg(long)]
    pub start: Option<String>,
}

fn read_input(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).map_err(|e| format!("cannot read {input}: {e}").into())
    }
}

pub fn run(args: PlanArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;

    let request: PlanRequest = serde_json::from_str(&read_input(&args.input)?)?;
    let mood = args.mood.as_deref().map_or(request.mood, Mood::parse);
    let tasks = validate_all(&request.tasks)?;
    tracing::info!(tasks = tasks.len(), %mood, "plan request accepted");

    let day_start = match args.start.as_deref() {
        Some(raw) => parse_clock(raw).ok_or_else(|| format!("invalid --start '{raw}', expected HH:MM"))?,
        None => config.display.day_start_time()?,
    };

    let model = ScoringModel::fit(&config.model)?;
    let scheduler = Scheduler::with_config(&model, config.timeline.clone());
    let plan = scheduler.plan(&tasks, mood);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan, mood, day_start);
    }
    Ok(())
}

fn print_plan(plan: &DayPlan, mood: Mood, day_start: chrono::NaiveTime) {
    println!("Plan for a {mood} day");
    println!();
    for block in &plan.blocks {
        let (start, end) = block.clock_range(day_start);
        if block.is_break() {
            println!(
                "{}-{}  {:<24} {:>4} min",
                start.format("%H:%M"),
                end.format("%H:%M"),
                block.label,
                block.duration_minutes(),
            );
        } else {
            println!(
                "{}-{}  {:<24} {:>4} min  [{}] priority {:.1}, load {:.1}",
                start.format("%H:%M"),
                end.format("%H:%M"),
                block.label,
                block.duration_minutes(),
                block.block_type,
                block.priority_score,
                block.mental_load,
            );
        }
    }

    let summary = plan.summary();
    println!();
    println!(
        "{} tasks, {} breaks, {} focus min, {} break min (break every {} min)",
        summary.task_blocks,
        summary.break_blocks,
        summary.focus_minutes,
        summary.break_minutes,
        summary.break_interval,
    );
    println!("Advice: {}", plan.mood_advice);
}
