use moodplan_core::{Mood, MoodPolicy};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let policies: Vec<&MoodPolicy> = Mood::ALL.iter().map(|m| MoodPolicy::for_mood(*m)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&policies)?);
        return Ok(());
    }

    for policy in policies {
        println!(
            "{} (code {}, base break interval {} min)",
            policy.mood,
            policy.mood.code(),
            policy.base_break_interval
        );
        for tip in policy.tips {
            println!("  - {tip}");
        }
    }
    Ok(())
}
