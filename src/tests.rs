//! Unit tests for the `compliance_quiz_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical selections and feedback; different seeds → varied output |
//! | Selection | `min(count, bank_size)` items, all distinct, all from the bank; unknown keys fall back; ids and metadata well-formed |
//! | Difficulty | Prompt-length thresholds including both boundaries |
//! | Feedback | Explanation/correct-option quoting, gamification values, tips cap, fun facts, badges, out-of-range placeholder |
//! | Follow-up | Harder/easier option sets, fixed correct index, context quoting |
//! | Insights | Accuracy tiers (inclusive 90 boundary), strengths, improvement areas, recommendation thresholds, empty-attempt guard |
//! | Certificate | Field substitution across all templates |
//! | AI summary | Delay bounds under paused time, tallies, empty-attempt guard |
//! | UI adapter | camelCase field names the web client expects |

use crate::content_engine::{
    AnsweredQuestion, ContentError, ContentGenerator, DecoratedQuestion, Difficulty, QuizAttempt,
    Topic,
};
use crate::ui_adapter;

// ── helpers ──────────────────────────────────────────────────────────────────

/// All ten topic keys that carry a bank.
const BANKED_KEYS: [&str; 10] = [
    "fire-safety",
    "gdpr",
    "health-safety",
    "manual-handling",
    "cybersecurity",
    "safeguarding",
    "food-safety",
    "electrical-safety",
    "first-aid",
    "environmental",
];

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn answered(topic: Topic, pattern: &[bool]) -> Vec<AnsweredQuestion> {
    pattern
        .iter()
        .map(|&was_correct| AnsweredQuestion { topic, was_correct })
        .collect()
}

/// Pull one decorated question deterministically.
fn one_question(seed: u64, topic_key: &str) -> DecoratedQuestion {
    let mut generator = ContentGenerator::with_seed(seed);
    generator
        .select_questions(topic_key, 1)
        .into_iter()
        .next()
        .expect("selection must not be empty")
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_selection() {
    for key in BANKED_KEYS {
        let a = ContentGenerator::with_seed(12345).select_questions(key, 5);
        let b = ContentGenerator::with_seed(12345).select_questions(key, 5);
        assert_eq!(a, b, "selection mismatch for {key}");
    }
}

#[test]
fn same_seed_produces_identical_feedback() {
    let question = one_question(7, "gdpr");
    let a = ContentGenerator::with_seed(99).explain_answer(&question, 1, false);
    let b = ContentGenerator::with_seed(99).explain_answer(&question, 1, false);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_produce_varied_selections() {
    // Not a hard guarantee (two shuffles of the same bank can agree on the
    // first element) but must hold for most seed pairs.
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = one_question(seed, "fire-safety");
        let b = one_question(seed + 500, "fire-safety");
        if a.question.prompt == b.question.prompt {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical first questions across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_constructor_produces_valid_output() {
    // Smoke test: `new()` must behave like any seeded generator.
    let mut generator = ContentGenerator::new();
    let questions = generator.select_questions("health-safety", 4);
    assert_eq!(questions.len(), 4);
    for q in &questions {
        assert!(!q.question.prompt.is_empty());
        assert!((1..=3).contains(&q.estimated_minutes));
    }
}

// ── selection ────────────────────────────────────────────────────────────────

#[test]
fn selection_returns_min_of_count_and_bank_size() {
    let mut generator = ContentGenerator::with_seed(1);
    for key in BANKED_KEYS {
        let bank_size = generator.bank_size(key);
        assert!(bank_size > 0, "bank for {key} must not be empty");

        let capped = generator.select_questions(key, bank_size + 50);
        assert_eq!(capped.len(), bank_size, "over-ask for {key} must cap at bank size");

        let small = generator.select_questions(key, 2);
        assert_eq!(small.len(), 2.min(bank_size), "under-ask for {key}");
    }
}

#[test]
fn selection_is_distinct_and_drawn_from_the_bank() {
    let mut generator = ContentGenerator::with_seed(3);
    for key in BANKED_KEYS {
        let bank_size = generator.bank_size(key);
        let everything: std::collections::HashSet<String> = generator
            .select_questions(key, bank_size)
            .into_iter()
            .map(|q| q.question.prompt)
            .collect();
        assert_eq!(everything.len(), bank_size, "full draw for {key} must be distinct");

        for seed in SEEDS {
            let mut fresh = ContentGenerator::with_seed(seed);
            let picked = fresh.select_questions(key, 5);
            let mut seen = std::collections::HashSet::new();
            for q in &picked {
                assert!(
                    everything.contains(&q.question.prompt),
                    "question not from the {key} bank: {}",
                    q.question.prompt
                );
                assert!(seen.insert(q.question.prompt.clone()), "duplicate in {key} selection");
                assert_eq!(q.question.topic.key(), key, "wrong topic on a {key} question");
            }
        }
    }
}

#[test]
fn selection_decorates_every_question() {
    let mut generator = ContentGenerator::with_seed(11);
    let questions = generator.select_questions("fire-safety", 10);
    for (i, q) in questions.iter().enumerate() {
        assert_eq!(q.id, format!("fire-safety-q{}", i + 1), "ordinal ids must be sequential");
        assert!((1..=3).contains(&q.estimated_minutes), "minutes out of range for {}", q.id);
        assert_eq!(q.difficulty, Difficulty::from_prompt(&q.question.prompt));
    }
}

#[test]
fn unknown_topic_returns_the_one_element_fallback() {
    let mut generator = ContentGenerator::with_seed(5);
    let fallback = generator.select_questions("underwater-basket-weaving", 10);
    assert_eq!(fallback.len(), 1);
    let q = &fallback[0];
    assert_eq!(q.id, "underwater-basket-weaving-q1");
    assert_eq!(q.question.topic, Topic::General);
    assert_eq!(q.question.correct_index, 1);
    assert!(q.question.prompt.contains("emergency"));
}

#[test]
fn general_key_has_no_bank_and_falls_back() {
    let mut generator = ContentGenerator::with_seed(5);
    assert_eq!(generator.bank_size("general"), 0);
    assert_eq!(generator.select_questions("general", 3).len(), 1);
}

#[test]
fn zero_count_returns_empty_selection() {
    let mut generator = ContentGenerator::with_seed(5);
    assert!(generator.select_questions("gdpr", 0).is_empty());
}

#[test]
fn topic_keys_lists_all_banked_topics() {
    let generator = ContentGenerator::with_seed(1);
    assert_eq!(generator.topic_keys(), BANKED_KEYS.to_vec());
    assert_eq!(generator.bank_size("fire-safety"), 30);
    assert_eq!(generator.bank_size("gdpr"), 30);
    assert_eq!(generator.bank_size("health-safety"), 30);
    assert_eq!(generator.bank_size("no-such-topic"), 0);
}

// ── difficulty ───────────────────────────────────────────────────────────────

#[test]
fn difficulty_follows_prompt_length_thresholds() {
    assert_eq!(Difficulty::from_prompt(&"x".repeat(120)), Difficulty::Hard);
    assert_eq!(Difficulty::from_prompt(&"x".repeat(60)), Difficulty::Medium);
    assert_eq!(Difficulty::from_prompt(&"x".repeat(20)), Difficulty::Easy);
}

#[test]
fn difficulty_boundaries_are_exclusive() {
    // Exactly 50 is still Easy, exactly 100 is still Medium.
    assert_eq!(Difficulty::from_prompt(&"x".repeat(50)), Difficulty::Easy);
    assert_eq!(Difficulty::from_prompt(&"x".repeat(51)), Difficulty::Medium);
    assert_eq!(Difficulty::from_prompt(&"x".repeat(100)), Difficulty::Medium);
    assert_eq!(Difficulty::from_prompt(&"x".repeat(101)), Difficulty::Hard);
}

// ── feedback ─────────────────────────────────────────────────────────────────

#[test]
fn correct_feedback_quotes_the_explanation() {
    for seed in SEEDS {
        let question = one_question(seed, "fire-safety");
        let mut generator = ContentGenerator::with_seed(seed);
        let fb = generator.explain_answer(&question, question.question.correct_index, true);

        assert!(!fb.body.is_empty());
        // One template lowercases the explanation, so compare case-folded.
        assert!(
            fb.body.to_lowercase().contains(&question.question.explanation.to_lowercase()),
            "body must reference the stored explanation (seed={seed}): {}",
            fb.body
        );
        assert_eq!(fb.icon, "🎯");
        assert_eq!(fb.gamification.points, 10);
        assert_eq!(fb.gamification.streak_bonus, 2);
    }
}

#[test]
fn incorrect_feedback_quotes_the_correct_option() {
    for seed in SEEDS {
        let question = one_question(seed, "gdpr");
        let wrong = (question.question.correct_index + 1) % 4;
        let mut generator = ContentGenerator::with_seed(seed);
        let fb = generator.explain_answer(&question, wrong, false);

        assert!(
            fb.body.contains(question.question.correct_option()),
            "body must quote the correct option (seed={seed}): {}",
            fb.body
        );
        assert_eq!(fb.icon, "💡");
        assert_eq!(fb.gamification.points, 5);
        assert_eq!(fb.gamification.streak_bonus, 0);
    }
}

#[test]
fn out_of_range_chosen_index_degrades_to_placeholder() {
    let question = one_question(1, "health-safety");
    let mut saw_placeholder = false;
    for seed in 0..40u64 {
        let mut generator = ContentGenerator::with_seed(seed);
        let fb = generator.explain_answer(&question, 99, false);
        assert!(
            fb.body.contains(question.question.correct_option()),
            "correct option missing at seed {seed}"
        );
        // Only the "common misconception" template quotes what was chosen.
        if fb.body.contains("misconception") {
            assert!(fb.body.contains("your answer"), "placeholder missing: {}", fb.body);
            saw_placeholder = true;
        }
    }
    assert!(saw_placeholder, "40 seeds never selected the misconception template");
}

#[test]
fn tips_are_capped_at_three_and_topic_specific() {
    let question = one_question(2, "fire-safety");
    let mut generator = ContentGenerator::with_seed(2);
    let fb = generator.explain_answer(&question, 0, true);
    assert_eq!(fb.tips.len(), 3);
    // Fire safety has three fixed tips, which crowd out the general tip.
    assert!(fb.tips.iter().any(|t| t.contains("fire drills")), "tips: {:?}", fb.tips);
}

#[test]
fn topics_without_fixed_tips_get_one_general_tip() {
    const GENERAL_TIPS: [&str; 5] = [
        "Practice makes perfect - review tricky questions",
        "Share your knowledge with colleagues",
        "Stay curious and keep learning",
        "Safety is everyone's responsibility",
        "Small precautions prevent big accidents",
    ];
    let question = one_question(2, "food-safety");
    let mut generator = ContentGenerator::with_seed(2);
    let fb = generator.explain_answer(&question, 0, true);
    assert_eq!(fb.tips.len(), 1);
    assert!(GENERAL_TIPS.contains(&fb.tips[0].as_str()), "unexpected tip: {}", fb.tips[0]);
}

#[test]
fn fun_facts_are_topic_keyed_with_generic_fallback() {
    let mut generator = ContentGenerator::with_seed(4);

    let fire = one_question(4, "fire-safety");
    let fb = generator.explain_answer(&fire, 0, true);
    assert!(fb.fun_fact.contains("Great Fire of London"));

    let food = one_question(4, "food-safety");
    let fb = generator.explain_answer(&food, 0, true);
    assert!(fb.fun_fact.contains("Learning something new"));
}

#[test]
fn badges_include_topic_badge_and_universal_quick_thinker() {
    let mut generator = ContentGenerator::with_seed(6);

    let fire = one_question(6, "fire-safety");
    let fb = generator.explain_answer(&fire, 0, true);
    let names: Vec<&str> = fb.gamification.eligible_badges.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Fire Safety Expert", "Quick Thinker"]);
    assert_eq!(fb.gamification.eligible_badges[0].threshold, 8);
    assert_eq!(fb.gamification.eligible_badges[1].threshold, 6);

    let aid = one_question(6, "first-aid");
    let fb = generator.explain_answer(&aid, 0, true);
    let names: Vec<&str> = fb.gamification.eligible_badges.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Quick Thinker"]);
}

// ── follow-up ────────────────────────────────────────────────────────────────

#[test]
fn follow_up_correct_index_is_always_zero() {
    let generator = ContentGenerator::with_seed(1);
    let question = one_question(1, "gdpr");
    for was_correct in [true, false] {
        let fu = generator.follow_up_question(&question.question, was_correct);
        assert_eq!(fu.correct_index, 0);
        assert_eq!(fu.topic, Topic::Gdpr);
    }
}

#[test]
fn follow_up_option_sets_track_correctness() {
    let generator = ContentGenerator::with_seed(1);
    let question = one_question(1, "health-safety");

    let harder = generator.follow_up_question(&question.question, true);
    assert!(harder.prompt.contains("harder"));
    assert!(harder.options[0].contains("ALARP"));

    let easier = generator.follow_up_question(&question.question, false);
    assert!(easier.prompt.contains("easier"));
    assert!(easier.options[0].contains("established safety procedures"));
    assert_ne!(harder.options, easier.options);
}

#[test]
fn follow_up_context_quotes_the_previous_prompt() {
    let generator = ContentGenerator::with_seed(1);
    let question = one_question(1, "fire-safety");
    let fu = generator.follow_up_question(&question.question, true);

    let head: String = question.question.prompt.chars().take(50).collect();
    assert!(fu.context.contains(&head), "context must quote the previous prompt");
    assert!(fu.context.starts_with("Follow-up to"));
}

// ── insights ─────────────────────────────────────────────────────────────────

#[test]
fn empty_attempt_is_rejected() {
    let generator = ContentGenerator::with_seed(1);
    let result = generator.summarize_progress(&[], 0, 0);
    assert_eq!(result.unwrap_err(), ContentError::EmptyAttempt);
}

#[test]
fn accuracy_tier_at_exactly_ninety_is_outstanding() {
    // 9/10 is exactly 90.0 — the top tier boundary is inclusive.
    let generator = ContentGenerator::with_seed(1);
    let list = answered(Topic::FireSafety, &[true, true, true, true, true, true, true, true, true, false]);
    let insights = generator.summarize_progress(&list, 9, 600).unwrap();
    assert!(insights.summary.starts_with("Outstanding"), "summary: {}", insights.summary);
    assert!(insights.motivational_message.contains("Safety champion"));
}

#[test]
fn accuracy_tiers_descend_with_score() {
    let generator = ContentGenerator::with_seed(1);
    let list = answered(Topic::Gdpr, &[true; 10]);

    let tier = |score: u32| generator.summarize_progress(&list, score, 600).unwrap().summary;
    assert!(tier(8).starts_with("Excellent work"));
    assert!(tier(6).starts_with("Good progress"));
    assert!(tier(5).starts_with("Solid foundation"));
    assert!(tier(2).starts_with("Keep learning"));
}

#[test]
fn just_below_ninety_is_not_outstanding() {
    let generator = ContentGenerator::with_seed(1);
    let list = answered(Topic::Gdpr, &[true; 19]);
    // 17/19 ≈ 89.5%
    let insights = generator.summarize_progress(&list, 17, 600).unwrap();
    assert!(insights.summary.starts_with("Excellent work"), "summary: {}", insights.summary);
}

#[test]
fn single_topic_attempt_yields_topic_strength() {
    let generator = ContentGenerator::with_seed(1);
    let list = answered(Topic::FireSafety, &[true, true, false]);
    let insights = generator.summarize_progress(&list, 2, 90).unwrap();
    assert_eq!(insights.strengths, vec!["Strong understanding of fire safety concepts"]);
}

#[test]
fn mixed_topic_attempt_yields_generic_strengths() {
    let generator = ContentGenerator::with_seed(1);
    let mut list = answered(Topic::FireSafety, &[true, true]);
    list.extend(answered(Topic::Gdpr, &[true, false]));
    let insights = generator.summarize_progress(&list, 3, 120).unwrap();
    assert_eq!(insights.strengths.len(), 3);
}

#[test]
fn improvement_areas_name_the_most_missed_topic() {
    let generator = ContentGenerator::with_seed(1);
    let mut list = answered(Topic::FireSafety, &[true, false]);
    list.extend(answered(Topic::Gdpr, &[false, false, true]));
    let insights = generator.summarize_progress(&list, 2, 300).unwrap();
    assert_eq!(insights.improvement_areas[0], "Review gdpr scenarios");
    assert_eq!(insights.improvement_areas[1], "Practice time management");
}

#[test]
fn flawless_attempt_suggests_advanced_topics() {
    let generator = ContentGenerator::with_seed(1);
    let list = answered(Topic::Cybersecurity, &[true; 5]);
    let insights = generator.summarize_progress(&list, 5, 150).unwrap();
    assert_eq!(
        insights.improvement_areas,
        vec!["Continue challenging yourself with advanced topics"]
    );
}

#[test]
fn slow_attempts_are_told_to_answer_faster() {
    let generator = ContentGenerator::with_seed(1);
    let list = answered(Topic::Gdpr, &[true; 10]);
    // 130 seconds per question.
    let insights = generator.summarize_progress(&list, 9, 1300).unwrap();
    assert!(insights
        .recommendations
        .iter()
        .any(|r| r.contains("more quickly")));
}

#[test]
fn rushed_attempts_are_told_to_read_thoroughly() {
    let generator = ContentGenerator::with_seed(1);
    let list = answered(Topic::Gdpr, &[true; 10]);
    // 10 seconds per question.
    let insights = generator.summarize_progress(&list, 9, 100).unwrap();
    assert!(insights
        .recommendations
        .iter()
        .any(|r| r.contains("read questions thoroughly")));
}

#[test]
fn recommendations_are_two_or_three_entries() {
    let generator = ContentGenerator::with_seed(1);
    let list = answered(Topic::Gdpr, &[true; 10]);
    for (score, secs) in [(10u32, 600u32), (5, 600), (10, 1300), (10, 50), (3, 50)] {
        let insights = generator.summarize_progress(&list, score, secs).unwrap();
        let n = insights.recommendations.len();
        assert!((2..=3).contains(&n), "got {n} recommendations for score={score} secs={secs}");
    }
}

// ── certificate ──────────────────────────────────────────────────────────────

#[test]
fn certificate_substitutes_every_field() {
    for seed in SEEDS {
        let mut generator = ContentGenerator::with_seed(seed);
        let text = generator.render_certificate("Jane Doe", "Fire Safety", 95, "2024-01-01");
        assert!(text.contains("Jane Doe"), "missing name: {text}");
        assert!(text.contains("Fire Safety"), "missing topic: {text}");
        assert!(text.contains("95"), "missing score: {text}");
        assert!(text.contains("2024-01-01"), "missing date: {text}");
    }
}

#[test]
fn certificate_draws_from_all_three_templates() {
    let mut openings = std::collections::HashSet::new();
    for seed in 0..60u64 {
        let mut generator = ContentGenerator::with_seed(seed);
        let text = generator.render_certificate("A", "B", 1, "2024-01-01");
        let opening: String = text.chars().take(12).collect();
        openings.insert(opening);
    }
    assert_eq!(openings.len(), 3, "expected all 3 certificate templates across 60 seeds");
}

// ── AI summary ───────────────────────────────────────────────────────────────

fn attempt(score: u32, pattern: &[bool], time_spent_secs: u32) -> QuizAttempt {
    QuizAttempt {
        answered: answered(Topic::FireSafety, pattern),
        score,
        time_spent_secs,
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ai_summary_pauses_between_half_and_one_and_a_half_seconds() {
    let mut generator = ContentGenerator::with_seed(42);
    let started = tokio::time::Instant::now();
    let summary = generator
        .ai_summary(&attempt(8, &[true; 10], 400))
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert!(
        (500..=1500).contains(&(elapsed.as_millis() as u64)),
        "unexpected thinking pause: {elapsed:?}"
    );
    assert_eq!(summary.overall_score, 8);
    assert_eq!(summary.total_questions, 10);
    assert!((summary.accuracy - 80.0).abs() < f32::EPSILON);
    assert!((summary.secs_per_question - 40.0).abs() < f32::EPSILON);
    assert_eq!(summary.next_steps.len(), 3);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ai_summary_comment_tracks_the_eighty_percent_line() {
    let mut generator = ContentGenerator::with_seed(1);

    let strong = generator.ai_summary(&attempt(9, &[true; 10], 300)).await.unwrap();
    assert!(strong.comment.contains("advanced modules"), "comment: {}", strong.comment);

    let weak = generator
        .ai_summary(&attempt(4, &[true, true, true, true, false, false, false, false, false, false], 300))
        .await
        .unwrap();
    assert!(weak.comment.contains("foundational concepts"), "comment: {}", weak.comment);
    assert!(
        weak.comment.contains("fire safety"),
        "comment should name the most missed topic: {}",
        weak.comment
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ai_summary_rejects_empty_attempts_before_pausing() {
    let mut generator = ContentGenerator::with_seed(1);
    let empty = QuizAttempt { answered: vec![], score: 0, time_spent_secs: 0 };
    let result = generator.ai_summary(&empty).await;
    assert_eq!(result.unwrap_err(), ContentError::EmptyAttempt);
}

// ── UI adapter ───────────────────────────────────────────────────────────────

#[test]
fn client_question_uses_the_legacy_field_names() {
    let question = one_question(9, "gdpr");
    let value = ui_adapter::to_client_question(&question);

    assert_eq!(value["id"], question.id.as_str());
    assert_eq!(value["category"], "gdpr");
    assert_eq!(value["aiGenerated"], true);
    assert_eq!(value["correctAnswer"], question.question.correct_index as u64);
    assert_eq!(value["options"].as_array().unwrap().len(), 4);
    assert!(value["personality"]["name"].is_string());
    assert!(value["estimatedTime"].is_u64());
}

#[test]
fn client_feedback_uses_the_legacy_field_names() {
    let question = one_question(9, "fire-safety");
    let mut generator = ContentGenerator::with_seed(9);
    let fb = generator.explain_answer(&question, 0, false);
    let value = ui_adapter::to_client_feedback(&fb);

    assert_eq!(value["text"], fb.body.as_str());
    assert!(value["funFact"].is_string());
    assert_eq!(value["gamification"]["points"], 5);
    assert_eq!(value["gamification"]["streakBonus"], 0);
    assert!(value["gamification"]["badgeEligibility"].is_array());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn client_summary_uses_the_legacy_field_names() {
    let mut generator = ContentGenerator::with_seed(2);
    let summary = generator.ai_summary(&attempt(7, &[true; 10], 500)).await.unwrap();
    let value = ui_adapter::to_client_summary(&summary);

    assert_eq!(value["aiGenerated"], true);
    assert_eq!(value["overallScore"], 7);
    assert_eq!(value["totalQuestions"], 10);
    assert!(value["timestamp"].is_string());
    assert!(value["nextSteps"].as_array().unwrap().len() == 3);
}
