//! First aid bank.
//!
//! TODO: grow this to a full 30-question bank like fire-safety/gdpr/health-safety.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::FirstAid;
    vec![
        q(
            t,
            "What is the primary survey sequence in first aid?",
            ["DR ABC", "ABCDE", "SAMPLE", "AVPU"],
            0,
            "DR ABC: Danger, Response, Airway, Breathing, Circulation. Always check for danger first!",
        ),
        q(
            t,
            "What is the correct compression rate for adult CPR?",
            [
                "60-80 per minute",
                "100-120 per minute",
                "140-160 per minute",
                "As fast as possible",
            ],
            1,
            "UK Resuscitation Council guidance is 100-120 chest compressions per minute at a depth of 5-6cm.",
        ),
        q(
            t,
            "How should a minor burn be treated?",
            [
                "Apply butter or cream",
                "Burst any blisters",
                "Cool under running water for at least 20 minutes",
                "Cover tightly with a dry bandage immediately",
            ],
            2,
            "Cool the burn under cool running water for at least 20 minutes, then cover loosely with cling film. Never apply creams or burst blisters.",
        ),
    ]
}
