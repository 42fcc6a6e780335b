use serde_json::{json, Value};

use crate::content_engine::models::{
    AiSummary, DecoratedQuestion, FeedbackResult, FollowUpQuestion, Persona, ProgressInsights,
};

/// Build the personality block the web client renders next to feedback.
fn persona_value(persona: Persona) -> Value {
    json!({
        "name": persona.display_name(),
        "trait": persona.trait_label(),
        "emoji": persona.emoji(),
    })
}

/// Map a [`DecoratedQuestion`] to the camelCase object the legacy web quiz
/// client consumes.
pub fn to_client_question(q: &DecoratedQuestion) -> Value {
    json!({
        "id": &q.id,
        "question": &q.question.prompt,
        "options": &q.question.options,
        "correctAnswer": q.question.correct_index,
        "category": q.question.topic.key(),
        "explanation": &q.question.explanation,
        "aiGenerated": true,
        "difficulty": q.difficulty.to_string(),
        "estimatedTime": q.estimated_minutes,
        "personality": persona_value(q.persona),
    })
}

/// Map a [`FeedbackResult`] to the client's explanation object.
pub fn to_client_feedback(fb: &FeedbackResult) -> Value {
    let badges: Vec<Value> = fb
        .gamification
        .eligible_badges
        .iter()
        .map(|b| json!({ "name": &b.name, "icon": &b.icon, "threshold": b.threshold }))
        .collect();

    json!({
        "text": &fb.body,
        "icon": &fb.icon,
        "personality": persona_value(fb.persona),
        "style": fb.style.to_string(),
        "tips": &fb.tips,
        "funFact": &fb.fun_fact,
        "gamification": {
            "points": fb.gamification.points,
            "streakBonus": fb.gamification.streak_bonus,
            "badgeEligibility": badges,
        },
    })
}

/// Map a [`FollowUpQuestion`] to the client's adaptive-question object.
pub fn to_client_follow_up(fu: &FollowUpQuestion) -> Value {
    json!({
        "question": &fu.prompt,
        "options": &fu.options,
        "correctAnswer": fu.correct_index,
        "category": fu.topic.key(),
        "adaptive": true,
        "context": &fu.context,
    })
}

/// Map [`ProgressInsights`] to the client's insights panel object.
pub fn to_client_insights(pi: &ProgressInsights) -> Value {
    json!({
        "summary": &pi.summary,
        "strengths": &pi.strengths,
        "areasForImprovement": &pi.improvement_areas,
        "recommendations": &pi.recommendations,
        "motivationalMessage": &pi.motivational_message,
    })
}

/// Map an [`AiSummary`] to the client's summary object.
pub fn to_client_summary(s: &AiSummary) -> Value {
    json!({
        "timestamp": s.generated_at.to_rfc3339(),
        "aiGenerated": true,
        "overallScore": s.overall_score,
        "totalQuestions": s.total_questions,
        "accuracy": s.accuracy,
        "timePerQuestion": s.secs_per_question,
        "strengths": &s.strengths,
        "recommendations": &s.recommendations,
        "aiComment": &s.comment,
        "nextSteps": &s.next_steps,
    })
}
