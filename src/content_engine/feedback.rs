//! Answer-feedback composition: template pools, tips, fun facts, badges.
//!
//! Everything here is string assembly over fixed template pools. The only
//! randomness is which template / general tip gets picked, so callers pass the
//! generator's RNG straight through.

use rand::Rng;

use crate::content_engine::models::{
    Badge, DecoratedQuestion, FeedbackResult, FollowUpQuestion, Gamification, Persona,
    QuestionRecord, ResponseStyle, Topic,
};

/// Substituted when the chosen option index is out of range.
const CHOSEN_PLACEHOLDER: &str = "your answer";

/// Compose the full feedback package for one submitted answer.
pub(crate) fn compose<R: Rng>(
    rng: &mut R,
    question: &DecoratedQuestion,
    chosen_index: usize,
    is_correct: bool,
) -> FeedbackResult {
    let persona = question.persona;
    let style = ResponseStyle::ALL[rng.gen_range(0..ResponseStyle::ALL.len())];
    let record = &question.question;

    let body = if is_correct {
        correct_body(rng, record, persona)
    } else {
        incorrect_body(rng, record, chosen_index, persona)
    };

    FeedbackResult {
        body,
        icon: if is_correct { "🎯" } else { "💡" }.to_string(),
        persona,
        style,
        tips: learning_tips(rng, record.topic),
        fun_fact: fun_fact(record.topic),
        gamification: Gamification {
            points: if is_correct { 10 } else { 5 },
            streak_bonus: if is_correct { 2 } else { 0 },
            eligible_badges: badge_eligibility(record.topic),
        },
    }
}

/// One of 5 "correct" templates. Every template quotes the canonical
/// explanation so the learner always sees the *why*.
fn correct_body<R: Rng>(rng: &mut R, q: &QuestionRecord, persona: Persona) -> String {
    let emoji = persona.emoji();
    let name = persona.display_name();
    let trait_label = persona.trait_label();
    let correct = q.correct_option();
    let expl = &q.explanation;

    match rng.gen_range(0..5u8) {
        0 => format!(
            "Excellent work! {emoji} {name} here. Your answer \"{correct}\" is absolutely correct because {}",
            expl.to_lowercase()
        ),
        1 => format!(
            "Perfect! {emoji} As {trait_label}, I can confirm: {expl}. You've shown great understanding!"
        ),
        2 => format!(
            "Spot on! {emoji} {expl}. This knowledge will serve you well in real-world situations."
        ),
        3 => format!(
            "Correct! {emoji} Here's why: {expl}. You're building valuable safety expertise!"
        ),
        _ => format!(
            "Well done! {emoji} {name} approves: {expl}. Keep up the excellent work!"
        ),
    }
}

/// One of 5 "incorrect" templates. Every template quotes the correct option
/// text; an out-of-range chosen index degrades to [`CHOSEN_PLACEHOLDER`].
fn incorrect_body<R: Rng>(
    rng: &mut R,
    q: &QuestionRecord,
    chosen_index: usize,
    persona: Persona,
) -> String {
    let emoji = persona.emoji();
    let name = persona.display_name();
    let trait_label = persona.trait_label();
    let correct = q.correct_option();
    let expl = &q.explanation;
    let chosen = q
        .options
        .get(chosen_index)
        .map(String::as_str)
        .unwrap_or(CHOSEN_PLACEHOLDER);

    match rng.gen_range(0..5u8) {
        0 => format!(
            "Good attempt! {emoji} While \"{chosen}\" is a common misconception, the correct answer is actually \"{correct}\". Here's why: {}",
            expl.to_lowercase()
        ),
        1 => format!(
            "Almost there! {emoji} {name} explains: {expl}. The correct choice is \"{correct}\"."
        ),
        2 => format!(
            "Let me clarify: {emoji} {expl}. This is why \"{correct}\" is correct."
        ),
        3 => format!(
            "Learning moment! {emoji} {expl}. Remember this for next time - the right answer was \"{correct}\"."
        ),
        _ => format!(
            "No worries! {emoji} Even {trait_label} makes mistakes. {expl}. Correct answer: \"{correct}\""
        ),
    }
}

/// Topic tips plus one random general tip, capped at 3 entries.
fn learning_tips<R: Rng>(rng: &mut R, topic: Topic) -> Vec<String> {
    let topic_tips: &[&str] = match topic {
        Topic::FireSafety => &[
            "Regular fire drills save lives - participate actively!",
            "Know your nearest fire exit and assembly point",
            "Keep fire doors closed - they're designed that way for a reason!",
        ],
        Topic::Gdpr => &[
            "When in doubt about data handling - ask!",
            "Only collect data you actually need",
            "Encrypt sensitive information whenever possible",
        ],
        Topic::HealthSafety => &[
            "Report hazards immediately - don't assume someone else will",
            "Use PPE correctly - it's there to protect you",
            "Take regular breaks to prevent fatigue-related accidents",
        ],
        _ => &[],
    };

    const GENERAL_TIPS: [&str; 5] = [
        "Practice makes perfect - review tricky questions",
        "Share your knowledge with colleagues",
        "Stay curious and keep learning",
        "Safety is everyone's responsibility",
        "Small precautions prevent big accidents",
    ];

    let mut tips: Vec<String> = topic_tips.iter().map(|t| t.to_string()).collect();
    tips.push(GENERAL_TIPS[rng.gen_range(0..GENERAL_TIPS.len())].to_string());
    tips.truncate(3);
    tips
}

/// Fixed fun-fact per topic, generic fallback for the rest.
fn fun_fact(topic: Topic) -> String {
    let fact = match topic {
        Topic::FireSafety => {
            "🔥 Did you know? The Great Fire of London in 1666 burned for 3 days and destroyed 13,000 houses!"
        }
        Topic::Gdpr => {
            "🔐 Fun fact: GDPR applies to any company processing EU citizens' data, regardless of where the company is located!"
        }
        Topic::HealthSafety => {
            "👷 Historical fact: The first UK Factory Act was passed in 1802 to protect child workers!"
        }
        Topic::ManualHandling => {
            "💪 Tip: Using your legs instead of your back can reduce lifting strain by up to 70%!"
        }
        Topic::Cybersecurity => {
            "🛡️ Did you know? 95% of cybersecurity breaches are due to human error!"
        }
        _ => "💡 Learning something new every day makes you safer!",
    };
    fact.to_string()
}

/// Topic badge (where one exists) plus the universal "Quick Thinker" badge.
/// Thresholds are static correct-streak targets the UI displays.
fn badge_eligibility(topic: Topic) -> Vec<Badge> {
    let mut badges = Vec::new();
    let topic_badge = match topic {
        Topic::FireSafety => Some(("Fire Safety Expert", "🔥", 8)),
        Topic::Gdpr => Some(("Data Guardian", "🔒", 7)),
        Topic::HealthSafety => Some(("Safety Champion", "🛡️", 9)),
        _ => None,
    };
    if let Some((name, icon, threshold)) = topic_badge {
        badges.push(Badge {
            name: name.to_string(),
            icon: icon.to_string(),
            threshold,
        });
    }
    badges.push(Badge {
        name: "Quick Thinker".to_string(),
        icon: "⚡".to_string(),
        threshold: 6,
    });
    badges
}

/// Canned follow-up stub: a harder option set after a correct answer, an
/// easier one otherwise. `correct_index` stays 0 in both cases.
pub(crate) fn follow_up(previous: &QuestionRecord, was_correct: bool) -> FollowUpQuestion {
    let (tone, difficulty_word) = if was_correct {
        ("excellent", "harder")
    } else {
        ("previous", "easier")
    };

    let options = if was_correct {
        [
            "Apply the ALARP principle (As Low As Reasonably Practicable)",
            "Immediately evacuate the area",
            "Contact emergency services first",
            "Assess using the hierarchy of control measures",
        ]
    } else {
        [
            "Follow established safety procedures",
            "Ask your supervisor for guidance",
            "Check the safety signage",
            "Use common sense approach",
        ]
    };

    let head: String = previous.prompt.chars().take(50).collect();

    FollowUpQuestion {
        prompt: format!("Based on your {tone} answer, here's a {difficulty_word} question:"),
        options: options.map(|o| o.to_string()),
        correct_index: 0,
        topic: previous.topic,
        context: format!("Follow-up to \"{head}...\""),
    }
}
