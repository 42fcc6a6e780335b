//! Hardcoded question banks, one module per compliance topic.
//!
//! Banks are pure content: each module exposes a `questions()` builder and the
//! registry below assembles the topic → bank table once, at generator
//! construction. Nothing here touches the RNG.

pub mod cybersecurity;
pub mod electrical_safety;
pub mod environmental;
pub mod fire_safety;
pub mod first_aid;
pub mod food_safety;
pub mod gdpr;
pub mod health_safety;
pub mod manual_handling;
pub mod safeguarding;

use std::collections::HashMap;

use crate::content_engine::models::{QuestionRecord, Topic};

/// Shorthand used by every bank module to build one record.
pub(crate) fn q(
    topic: Topic,
    prompt: &str,
    options: [&str; 4],
    correct_index: usize,
    explanation: &str,
) -> QuestionRecord {
    QuestionRecord {
        prompt: prompt.to_string(),
        options: options.map(|o| o.to_string()),
        correct_index,
        topic,
        explanation: explanation.to_string(),
    }
}

/// Assemble the full bank table. Every banked topic gets an entry.
pub fn load_all() -> HashMap<Topic, Vec<QuestionRecord>> {
    let mut banks = HashMap::new();
    banks.insert(Topic::FireSafety, fire_safety::questions());
    banks.insert(Topic::Gdpr, gdpr::questions());
    banks.insert(Topic::HealthSafety, health_safety::questions());
    banks.insert(Topic::ManualHandling, manual_handling::questions());
    banks.insert(Topic::Cybersecurity, cybersecurity::questions());
    banks.insert(Topic::Safeguarding, safeguarding::questions());
    banks.insert(Topic::FoodSafety, food_safety::questions());
    banks.insert(Topic::ElectricalSafety, electrical_safety::questions());
    banks.insert(Topic::FirstAid, first_aid::questions());
    banks.insert(Topic::Environmental, environmental::questions());
    banks
}

/// The single question served when a topic key has no bank.
pub fn fallback_question() -> QuestionRecord {
    q(
        Topic::General,
        "What should you do in case of an emergency?",
        [
            "Panic",
            "Follow emergency procedures",
            "Ignore it",
            "Take photos",
        ],
        1,
        "Always follow established emergency procedures and listen to designated safety officers.",
    )
}
