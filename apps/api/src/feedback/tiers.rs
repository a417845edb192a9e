//! Overall performance tiers.
//!
//! The overall score is classified exactly once; level, color, insight and
//! motivational message are all lookups on that single tier, so they can
//! never disagree for a given score.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceTier {
    /// `>=` comparisons against 85/70/50. Anything below 50, including
    /// negative scores, lands in `NeedsImprovement`.
    pub fn classify(overall: f64) -> Self {
        match overall {
            s if s >= 85.0 => PerformanceTier::Excellent,
            s if s >= 70.0 => PerformanceTier::Good,
            s if s >= 50.0 => PerformanceTier::Average,
            _ => PerformanceTier::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Good => "Good",
            PerformanceTier::Average => "Average",
            PerformanceTier::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "#10B981",
            PerformanceTier::Good => "#3B82F6",
            PerformanceTier::Average => "#F59E0B",
            PerformanceTier::NeedsImprovement => "#EF4444",
        }
    }

    pub fn insight(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => {
                "Outstanding performance! You're demonstrating excellent understanding and application of concepts."
            }
            PerformanceTier::Good => {
                "Good progress! You're on the right track with solid foundational knowledge."
            }
            PerformanceTier::Average => {
                "Steady progress! Focus on strengthening core concepts and practice regularly."
            }
            PerformanceTier::NeedsImprovement => {
                "Keep pushing forward! Every challenge is an opportunity to grow and improve."
            }
        }
    }

    pub fn motivational_message(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => {
                "🌟 You're absolutely crushing it! Your dedication and hard work are paying off. Keep inspiring others!"
            }
            PerformanceTier::Good => {
                "🚀 Great job! You're building a strong foundation. Keep up the excellent work!"
            }
            PerformanceTier::Average => {
                "💪 You're making steady progress! Remember, every expert was once a beginner. Keep going!"
            }
            PerformanceTier::NeedsImprovement => {
                "🔥 Every challenge is an opportunity to grow! You have the potential to achieve great things. Stay focused!"
            }
        }
    }
}

/// Per-metric status. Three tiers only; independent of the overall tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

impl MetricStatus {
    pub fn classify(score: i64) -> Self {
        match score {
            s if s >= 85 => MetricStatus::Excellent,
            s if s >= 70 => MetricStatus::Good,
            _ => MetricStatus::NeedsImprovement,
        }
    }
}
