//! Food safety bank.
//!
//! TODO: grow this to a full 30-question bank like fire-safety/gdpr/health-safety.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::FoodSafety;
    vec![
        q(
            t,
            "What is the danger zone for bacterial growth in food?",
            ["0-5°C", "5-63°C", "63-75°C", "Above 75°C"],
            1,
            "Bacteria multiply rapidly between 5°C and 63°C. Keep food below 5°C or above 63°C to prevent growth.",
        ),
        q(
            t,
            "What is the minimum core temperature for safely reheated food?",
            ["55°C", "63°C", "75°C", "100°C"],
            2,
            "Reheated food should reach a core temperature of at least 75°C (82°C in Scotland) to destroy harmful bacteria.",
        ),
        q(
            t,
            "How should raw meat be stored in a refrigerator?",
            [
                "On the top shelf",
                "On the bottom shelf, covered",
                "Next to ready-to-eat food",
                "Anywhere, as long as it is wrapped",
            ],
            1,
            "Raw meat belongs covered on the bottom shelf so juices cannot drip onto ready-to-eat food and cause cross-contamination.",
        ),
    ]
}
