//! Progress summaries: accuracy tiers, strengths, improvement areas,
//! recommendations, and motivational messages.
//!
//! Everything here is deterministic threshold logic over caller-supplied
//! tallies; no RNG flows through this module.

use crate::content_engine::models::{AnsweredQuestion, ContentError, ProgressInsights, Topic};

/// Build the full narrative breakdown of a completed attempt.
///
/// Errors on an empty answered list: accuracy divides by its length, and a
/// NaN percentage is worse than telling the caller they broke the contract.
pub(crate) fn build(
    answered: &[AnsweredQuestion],
    score: u32,
    time_spent_secs: u32,
) -> Result<ProgressInsights, ContentError> {
    if answered.is_empty() {
        return Err(ContentError::EmptyAttempt);
    }

    let accuracy = score as f32 / answered.len() as f32 * 100.0;
    let avg_secs = time_spent_secs as f32 / answered.len() as f32;

    Ok(ProgressInsights {
        summary: performance_summary(accuracy),
        strengths: strengths(answered),
        improvement_areas: improvement_areas(answered),
        recommendations: recommendations(accuracy, avg_secs),
        motivational_message: motivational_message(accuracy),
    })
}

/// Five narrative tiers; boundaries are inclusive, so exactly 90.0 is
/// "Outstanding".
pub(crate) fn performance_summary(accuracy: f32) -> String {
    let text = if accuracy >= 90.0 {
        "Outstanding! You've mastered this topic with exceptional understanding."
    } else if accuracy >= 75.0 {
        "Excellent work! You have a strong grasp of the key concepts."
    } else if accuracy >= 60.0 {
        "Good progress! You understand the fundamentals well."
    } else if accuracy >= 50.0 {
        "Solid foundation! Review the incorrect answers to improve."
    } else {
        "Keep learning! Review the material and try again - you'll get there!"
    };
    text.to_string()
}

/// Single-topic attempts get a topic-specific strength line; mixed attempts
/// get the generic trio.
pub(crate) fn strengths(answered: &[AnsweredQuestion]) -> Vec<String> {
    let mut unique: Vec<Topic> = Vec::new();
    for a in answered {
        if !unique.contains(&a.topic) {
            unique.push(a.topic);
        }
    }

    if let [only] = unique[..] {
        return vec![format!("Strong understanding of {} concepts", only.label())];
    }

    vec![
        "Good analytical skills".to_string(),
        "Attention to detail".to_string(),
        "Practical application knowledge".to_string(),
    ]
}

/// Most frequent topic among the incorrect answers (linear scan; first-seen
/// topic wins ties).
pub(crate) fn most_missed_topic(answered: &[AnsweredQuestion]) -> Option<Topic> {
    let incorrect: Vec<Topic> = answered
        .iter()
        .filter(|a| !a.was_correct)
        .map(|a| a.topic)
        .collect();

    let mut best: Option<(Topic, usize)> = None;
    for &topic in &incorrect {
        let count = incorrect.iter().filter(|&&t| t == topic).count();
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((topic, count)),
        }
    }
    best.map(|(topic, _)| topic)
}

pub(crate) fn improvement_areas(answered: &[AnsweredQuestion]) -> Vec<String> {
    match most_missed_topic(answered) {
        None => vec!["Continue challenging yourself with advanced topics".to_string()],
        Some(topic) => vec![
            format!("Review {} scenarios", topic.label()),
            "Practice time management".to_string(),
        ],
    }
}

/// 2-3 recommendations by accuracy and pace thresholds: over 2 minutes per
/// question suggests answering faster, under 30 seconds suggests reading
/// more carefully.
pub(crate) fn recommendations(accuracy: f32, avg_secs: f32) -> Vec<String> {
    let mut recs: Vec<&str> = Vec::new();

    if accuracy < 70.0 {
        recs.push("Review the training materials again");
        recs.push("Take notes on key concepts");
    }

    if avg_secs > 120.0 {
        recs.push("Practice answering questions more quickly");
    } else if avg_secs < 30.0 {
        recs.push("Take your time to read questions thoroughly");
    }

    recs.push("Try the practice quiz again tomorrow");
    recs.push("Discuss challenging topics with colleagues");

    recs.truncate(3);
    recs.into_iter().map(|r| r.to_string()).collect()
}

fn motivational_message(accuracy: f32) -> String {
    let text = if accuracy >= 90.0 {
        "🏆 Safety champion! Your expertise is impressive!"
    } else if accuracy >= 75.0 {
        "⭐ Excellent progress! You're becoming a safety expert!"
    } else if accuracy >= 50.0 {
        "👍 Good work! Every correct answer builds your safety knowledge!"
    } else {
        "💪 Keep going! Learning takes time - you're getting better with every question!"
    };
    text.to_string()
}
