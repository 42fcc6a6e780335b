//! The delayed "AI" summary: a simulated thinking pause followed by the same
//! deterministic tallies the progress insights use.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::content_engine::insights;
use crate::content_engine::models::{AiSummary, ContentError, QuizAttempt};

/// Produce the summary after a uniform 500-1500 ms pause.
///
/// The pause is pure UX pacing: nothing is mutated while the future is
/// pending, so dropping it abandons the wait with no side effects.
pub(crate) async fn generate<R: Rng>(
    rng: &mut R,
    attempt: &QuizAttempt,
) -> Result<AiSummary, ContentError> {
    if attempt.answered.is_empty() {
        return Err(ContentError::EmptyAttempt);
    }

    let pause = Duration::from_millis(rng.gen_range(500..=1500));
    debug!(pause_ms = pause.as_millis() as u64, "simulating AI thinking pause");
    tokio::time::sleep(pause).await;

    let total = attempt.answered.len();
    let accuracy = attempt.score as f32 / total as f32 * 100.0;
    let secs_per_question = attempt.time_spent_secs as f32 / total as f32;

    Ok(AiSummary {
        generated_at: Utc::now(),
        overall_score: attempt.score,
        total_questions: total,
        accuracy,
        secs_per_question,
        strengths: insights::strengths(&attempt.answered),
        recommendations: insights::recommendations(accuracy, secs_per_question),
        comment: comment(attempt),
        next_steps: vec![
            "Complete 2 more modules to unlock expert level".to_string(),
            "Try the timed challenge mode".to_string(),
            "Review incorrect answers in your learning journal".to_string(),
        ],
    })
}

fn comment(attempt: &QuizAttempt) -> String {
    let total = attempt.answered.len();
    let progression = if attempt.score as f32 >= total as f32 * 0.8 {
        "progressing to advanced modules"
    } else {
        "reviewing the foundational concepts"
    };
    let coverage = match insights::most_missed_topic(&attempt.answered) {
        Some(topic) => format!("understanding of {} could use some reinforcement", topic.label()),
        None => "knowledge base is well-rounded".to_string(),
    };
    format!("Based on your performance, I recommend {progression}. Your {coverage}.")
}
