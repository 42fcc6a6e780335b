//! Cybersecurity bank.
//!
//! TODO: grow this to a full 30-question bank like fire-safety/gdpr/health-safety.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::Cybersecurity;
    vec![
        q(
            t,
            "What is phishing?",
            [
                "A type of fishing sport",
                "Sending fraudulent emails to steal sensitive information",
                "A network protocol",
                "A type of computer virus",
            ],
            1,
            "Phishing uses deceptive emails that appear to be from legitimate sources to trick recipients into revealing sensitive information.",
        ),
        q(
            t,
            "What makes a password strong?",
            [
                "Length, mixed character types, and uniqueness per account",
                "Using your date of birth so it is easy to remember",
                "Reusing one complex password everywhere",
                "Changing a single digit every month",
            ],
            0,
            "Long, unique passphrases with mixed characters resist both guessing and credential-stuffing attacks. A password manager makes uniqueness practical.",
        ),
        q(
            t,
            "What should you do if you receive an unexpected attachment from a colleague?",
            [
                "Open it immediately since you know the sender",
                "Forward it to the whole team",
                "Verify with the sender through another channel before opening",
                "Rename the file and then open it",
            ],
            2,
            "Compromised accounts are a common malware vector. Confirm unexpected attachments by phone or chat before opening them.",
        ),
    ]
}
