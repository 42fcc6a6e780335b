//! Certificate text rendering. Purely textual; layout and PDF generation
//! live with the consuming product.

use rand::Rng;

/// One of 3 sentence templates with name, topic, score, and date substituted.
pub(crate) fn render<R: Rng>(
    rng: &mut R,
    name: &str,
    topic_name: &str,
    score: u32,
    date: &str,
) -> String {
    match rng.gen_range(0..3u8) {
        0 => format!(
            "This certifies that {name} has successfully completed {topic_name} training on {date} \
             with {score}% accuracy, demonstrating exceptional understanding and commitment to \
             workplace safety."
        ),
        1 => format!(
            "Congratulations to {name} for mastering {topic_name}! Your {score}% score on {date} \
             reflects deep comprehension and practical knowledge application."
        ),
        _ => format!(
            "{name} has excelled in {topic_name}, achieving {score}% proficiency on {date}. This \
             achievement signifies dedication to professional development and safety excellence."
        ),
    }
}
