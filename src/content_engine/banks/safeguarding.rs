//! Safeguarding bank.
//!
//! TODO: grow this to a full 30-question bank like fire-safety/gdpr/health-safety.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::Safeguarding;
    vec![
        q(
            t,
            "What does safeguarding mean?",
            [
                "Protecting people's health, wellbeing and human rights",
                "Securing buildings and property",
                "Financial protection measures",
                "Data backup procedures",
            ],
            0,
            "Safeguarding involves protecting children and vulnerable adults from abuse, neglect and harm.",
        ),
        q(
            t,
            "What should you do if a vulnerable person discloses abuse to you?",
            [
                "Promise to keep it secret",
                "Listen, reassure, record their words, and report to the safeguarding lead",
                "Investigate the claim yourself",
                "Confront the alleged abuser",
            ],
            1,
            "Never promise confidentiality or investigate yourself. Listen without leading questions, record what was said, and escalate to the designated safeguarding lead.",
        ),
        q(
            t,
            "Who holds overall responsibility for safeguarding in an organisation?",
            [
                "Only the designated safeguarding lead",
                "The HR department",
                "Everyone - safeguarding is a shared duty",
                "External social services",
            ],
            2,
            "While the designated lead coordinates responses, every member of staff has a duty to recognise and report safeguarding concerns.",
        ),
    ]
}
