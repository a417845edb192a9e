//! Recommendation and improvement-area lists.
//!
//! Phrase groups are appended in a fixed order and never deduplicated; the
//! cap of five then truncates in that order, so earlier groups win.

use crate::feedback::engine::ScoreInput;

pub const MAX_RECOMMENDATIONS: usize = 5;
const RECOMMENDATION_THRESHOLD: i64 = 80;
const IMPROVEMENT_THRESHOLD: i64 = 70;

const BELOW_TARGET_OVERALL: [&str; 3] = [
    "Participate in additional practice sessions",
    "Seek mentorship from high-performing peers",
    "Attend extra training workshops",
];

const TOP_PERFORMER: [&str; 3] = [
    "Consider taking on leadership roles",
    "Mentor other freshers",
    "Explore advanced training opportunities",
];

const QUIZ: [&str; 3] = [
    "Focus on improving quiz preparation strategies",
    "Review fundamental concepts regularly",
    "Practice with sample quiz questions",
];

const ASSIGNMENT: [&str; 3] = [
    "Improve time management for assignments",
    "Seek clarification on assignment requirements",
    "Break down complex assignments into smaller tasks",
];

const CODING: [&str; 3] = [
    "Practice coding problems daily",
    "Participate in coding challenges",
    "Review coding best practices",
];

const CERTIFICATION: [&str; 3] = [
    "Focus on completing certification modules",
    "Practice hands-on exercises",
    "Review certification study materials",
];

pub const MAINTAIN_PERFORMANCE: &str = "Maintain current performance level";

pub fn build_recommendations(scores: &ScoreInput, overall: f64) -> Vec<String> {
    let threshold = RECOMMENDATION_THRESHOLD as f64;
    // Order matters: overall<80, overall>=90, quiz, assignment, coding, certification.
    let groups: [(bool, &[&str; 3]); 6] = [
        (overall < threshold, &BELOW_TARGET_OVERALL),
        (overall >= 90.0, &TOP_PERFORMER),
        (scores.quiz < RECOMMENDATION_THRESHOLD, &QUIZ),
        (scores.assignment < RECOMMENDATION_THRESHOLD, &ASSIGNMENT),
        (scores.coding < RECOMMENDATION_THRESHOLD, &CODING),
        (scores.certification < RECOMMENDATION_THRESHOLD, &CERTIFICATION),
    ];

    groups
        .iter()
        .filter(|(triggered, _)| *triggered)
        .flat_map(|(_, phrases)| phrases.iter())
        .take(MAX_RECOMMENDATIONS)
        .map(|p| p.to_string())
        .collect()
}

pub fn identify_improvement_areas(scores: &ScoreInput) -> Vec<String> {
    let checks = [
        (scores.quiz, "Quiz Performance"),
        (scores.coding, "Coding Skills"),
        (scores.assignment, "Assignment Completion"),
        (scores.certification, "Certification Progress"),
    ];

    let areas: Vec<String> = checks
        .iter()
        .filter(|(score, _)| *score < IMPROVEMENT_THRESHOLD)
        .map(|(_, label)| label.to_string())
        .collect();

    if areas.is_empty() {
        vec![MAINTAIN_PERFORMANCE.to_string()]
    } else {
        areas
    }
}
