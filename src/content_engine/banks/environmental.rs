//! Environmental bank.
//!
//! TODO: grow this to a full 30-question bank like fire-safety/gdpr/health-safety.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::Environmental;
    vec![
        q(
            t,
            "What does COSHH stand for?",
            [
                "Control of Substances Hazardous to Health",
                "Committee on Safety and Hazard Handling",
                "Chemical Operations Safety and Health",
                "Control of Safety and Hazardous Materials",
            ],
            0,
            "COSHH regulations require employers to control exposure to hazardous substances to prevent ill health.",
        ),
        q(
            t,
            "What is the waste hierarchy's most preferred option?",
            ["Recycling", "Prevention", "Recovery", "Disposal"],
            1,
            "The waste hierarchy ranks prevention first, then reuse, recycling, recovery, and disposal as the last resort.",
        ),
        q(
            t,
            "What should you do if you discover a chemical spill at work?",
            [
                "Mop it up with paper towels",
                "Leave it for the cleaners",
                "Follow the spill procedure and alert others in the area",
                "Dilute it with water",
            ],
            2,
            "Spill procedures identify the substance, the correct containment method, and the PPE required. Alert people nearby and escalate before acting.",
        ),
    ]
}
