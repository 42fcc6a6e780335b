//! Electrical safety bank.
//!
//! TODO: grow this to a full 30-question bank like fire-safety/gdpr/health-safety.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::ElectricalSafety;
    vec![
        q(
            t,
            "What voltage is considered extra low voltage (ELV) in the UK?",
            ["Below 50V AC", "Below 120V AC", "Below 230V AC", "Below 400V AC"],
            0,
            "Extra Low Voltage is below 50V AC or 120V DC ripple-free, reducing but not eliminating shock risk.",
        ),
        q(
            t,
            "What does PAT testing check?",
            [
                "The safety of portable electrical appliances",
                "The capacity of the mains supply",
                "The efficiency of electrical heating",
                "The wiring of the building",
            ],
            0,
            "Portable Appliance Testing combines visual inspection and instrument tests to confirm portable equipment is safe to use.",
        ),
        q(
            t,
            "What should you do before working on any electrical equipment?",
            [
                "Wear rubber gloves and proceed",
                "Isolate the supply and prove it dead",
                "Work quickly to minimise exposure",
                "Ask a colleague to watch",
            ],
            1,
            "Safe isolation means switching off, locking off, and proving the circuit dead with a tested voltage indicator before any work starts.",
        ),
    ]
}
