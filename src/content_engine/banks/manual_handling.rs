//! Manual handling bank.
//!
//! TODO: grow this to a full 30-question bank like fire-safety/gdpr/health-safety.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::ManualHandling;
    vec![
        q(
            t,
            "What is the recommended maximum weight for lifting at waist height?",
            ["5kg", "10kg", "15kg", "25kg"],
            3,
            "The HSE recommends 25kg as a general guideline, but individual capability and other factors must be considered.",
        ),
        q(
            t,
            "What does TILE stand for in manual handling assessments?",
            [
                "Task, Individual, Load, Environment",
                "Time, Intensity, Lifting, Effort",
                "Training, Inspection, Load, Equipment",
                "Task, Inspection, Lifting, Evaluation",
            ],
            0,
            "TILE prompts you to assess the Task, the Individual's capability, the Load itself, and the Environment before any manual handling operation.",
        ),
        q(
            t,
            "Which part of the body should power a safe lift?",
            ["The back", "The arms", "The legs", "The shoulders"],
            2,
            "Bend the knees and let the leg muscles do the work, keeping the back straight and the load close to the body.",
        ),
    ]
}
