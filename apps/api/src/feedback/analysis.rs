use serde::{Deserialize, Serialize};

use crate::feedback::tiers::MetricStatus;

/// One of the four sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Quiz,
    Coding,
    Assignment,
    Certification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAnalysis {
    pub status: MetricStatus,
    pub message: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub quiz_analysis: MetricAnalysis,
    pub coding_analysis: MetricAnalysis,
    pub assignment_analysis: MetricAnalysis,
    pub certification_analysis: MetricAnalysis,
}

impl Metric {
    pub fn analyse(self, score: i64) -> MetricAnalysis {
        let status = MetricStatus::classify(score);
        let (message, suggestion) = metric_text(self, status);
        MetricAnalysis {
            status,
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// (message, suggestion) for every (metric, status) pair.
fn metric_text(metric: Metric, status: MetricStatus) -> (&'static str, &'static str) {
    use Metric::*;
    use MetricStatus::*;

    match (metric, status) {
        (Quiz, Excellent) => (
            "Outstanding quiz performance!",
            "Consider helping others with quiz preparation",
        ),
        (Quiz, Good) => (
            "Good quiz performance!",
            "Focus on areas where you scored lower",
        ),
        (Quiz, NeedsImprovement) => (
            "Quiz performance needs improvement",
            "Review fundamental concepts and practice regularly",
        ),
        (Coding, Excellent) => (
            "Excellent coding skills!",
            "Take on more complex coding challenges",
        ),
        (Coding, Good) => ("Good coding foundation!", "Practice more coding problems"),
        (Coding, NeedsImprovement) => (
            "Coding skills need development",
            "Start with basic problems and gradually increase difficulty",
        ),
        (Assignment, Excellent) => (
            "Outstanding assignment work!",
            "Consider mentoring others in assignments",
        ),
        (Assignment, Good) => (
            "Good assignment completion!",
            "Focus on quality and attention to detail",
        ),
        (Assignment, NeedsImprovement) => (
            "Assignment completion needs improvement",
            "Improve time management and planning",
        ),
        (Certification, Excellent) => (
            "Excellent certification progress!",
            "Consider advanced certifications",
        ),
        (Certification, Good) => (
            "Good certification progress!",
            "Complete remaining certification modules",
        ),
        (Certification, NeedsImprovement) => (
            "Certification progress needs attention",
            "Focus on completing certification requirements",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_metric_has_its_own_text() {
        let quiz = Metric::Quiz.analyse(90);
        let coding = Metric::Coding.analyse(90);
        assert_eq!(quiz.status, MetricStatus::Excellent);
        assert_eq!(coding.status, MetricStatus::Excellent);
        assert_ne!(quiz.message, coding.message);
        assert_eq!(coding.suggestion, "Take on more complex coding challenges");
    }

    #[test]
    fn test_certification_needs_attention_below_70() {
        let analysis = Metric::Certification.analyse(65);
        assert_eq!(analysis.status, MetricStatus::NeedsImprovement);
        assert_eq!(analysis.message, "Certification progress needs attention");
    }

    #[test]
    fn test_all_twelve_pairs_are_distinct() {
        let mut messages: Vec<String> = Vec::new();
        for metric in [
            Metric::Quiz,
            Metric::Coding,
            Metric::Assignment,
            Metric::Certification,
        ] {
            for score in [90, 75, 10] {
                messages.push(metric.analyse(score).message);
            }
        }
        let total = messages.len();
        messages.sort();
        messages.dedup();
        assert_eq!(total, 12);
        assert_eq!(messages.len(), 12);
    }
}
