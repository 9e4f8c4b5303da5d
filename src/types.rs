//! Classification value types produced by the evaluator.

use std::fmt;

/// Feedback line used when every criterion is satisfied.
pub const SECURE_FEEDBACK: &str = "Password is secure";

/// One boolean check against the password, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    /// All criteria in the order they are checked and reported.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Fixed remediation line shown while this criterion fails.
    pub fn remediation(self) -> &'static str {
        match self {
            Criterion::Length => "Use at least 8 characters",
            Criterion::Uppercase => "Add an uppercase letter",
            Criterion::Lowercase => "Add a lowercase letter",
            Criterion::Digit => "Add a number",
            Criterion::Special => "Add a special character (@#$%&!)",
        }
    }

    /// Basic criteria gate the Weak bucket; the rest gate Medium.
    pub fn is_basic(self) -> bool {
        matches!(
            self,
            Criterion::Length | Criterion::Uppercase | Criterion::Lowercase
        )
    }
}

/// Human-readable strength bucket.
///
/// Ordered `Empty < Weak < Medium < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLabel {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn color(self) -> StrengthColor {
        match self {
            StrengthLabel::Empty => StrengthColor::Neutral,
            StrengthLabel::Weak => StrengthColor::Danger,
            StrengthLabel::Medium => StrengthColor::Warning,
            StrengthLabel::Strong => StrengthColor::Success,
        }
    }

    pub fn score(self) -> StrengthScore {
        match self {
            StrengthLabel::Empty => StrengthScore(0),
            StrengthLabel::Weak => StrengthScore(1),
            StrengthLabel::Medium => StrengthScore(2),
            StrengthLabel::Strong => StrengthScore(3),
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthLabel::Empty => "Empty",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(name)
    }
}

/// Semantic tier, independent of any rendering palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthColor {
    Neutral,
    Danger,
    Warning,
    Success,
}

/// Ordinal tier in `[0, 3]`, meant for proportional display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 3;

    pub fn value(self) -> u8 {
        self.0
    }

    /// Progress-bar fill: 0, 33, 66 or 100.
    pub fn percent(self) -> u8 {
        // u16 keeps 3 * 100 from overflowing.
        (u16::from(self.0) * 100 / u16::from(Self::MAX)) as u8
    }
}

/// Result of evaluating one password. Recomputed wholesale on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthClassification {
    label: StrengthLabel,
    failing: Vec<Criterion>,
    feedback: Vec<String>,
}

impl StrengthClassification {
    pub(crate) fn empty() -> Self {
        Self {
            label: StrengthLabel::Empty,
            failing: Vec::new(),
            feedback: Vec::new(),
        }
    }

    /// Builds the classification for a non-empty password from its failing
    /// criteria, which must be in check order.
    pub(crate) fn from_failing(failing: Vec<Criterion>) -> Self {
        let label = if failing.iter().any(|c| c.is_basic()) {
            StrengthLabel::Weak
        } else if !failing.is_empty() {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Strong
        };

        let feedback = match label {
            StrengthLabel::Strong => vec![SECURE_FEEDBACK.to_string()],
            _ => failing
                .iter()
                .map(|c| c.remediation().to_string())
                .collect(),
        };

        Self {
            label,
            failing,
            feedback,
        }
    }

    pub fn label(&self) -> StrengthLabel {
        self.label
    }

    pub fn color(&self) -> StrengthColor {
        self.label.color()
    }

    pub fn score(&self) -> StrengthScore {
        self.label.score()
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    /// Failing criteria in check order. Empty for Empty and Strong.
    pub fn failing_criteria(&self) -> &[Criterion] {
        &self.failing
    }

    /// The only field callers may branch on to request a digest.
    pub fn is_strong(&self) -> bool {
        self.label == StrengthLabel::Strong
    }
}

impl Default for StrengthClassification {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_attributes() {
        assert_eq!(StrengthLabel::Empty.color(), StrengthColor::Neutral);
        assert_eq!(StrengthLabel::Weak.color(), StrengthColor::Danger);
        assert_eq!(StrengthLabel::Medium.color(), StrengthColor::Warning);
        assert_eq!(StrengthLabel::Strong.color(), StrengthColor::Success);

        assert!(StrengthLabel::Empty.score() < StrengthLabel::Weak.score());
        assert!(StrengthLabel::Weak.score() < StrengthLabel::Medium.score());
        assert!(StrengthLabel::Medium.score() < StrengthLabel::Strong.score());
        assert_eq!(StrengthLabel::Strong.score().value(), StrengthScore::MAX);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::Empty.to_string(), "Empty");
        assert_eq!(StrengthLabel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_score_percent() {
        let percents: Vec<u8> = [
            StrengthLabel::Empty,
            StrengthLabel::Weak,
            StrengthLabel::Medium,
            StrengthLabel::Strong,
        ]
        .iter()
        .map(|l| l.score().percent())
        .collect();
        assert_eq!(percents, vec![0, 33, 66, 100]);
    }

    #[test]
    fn test_from_failing_weak_wins_over_medium() {
        let classification =
            StrengthClassification::from_failing(vec![Criterion::Length, Criterion::Special]);
        assert_eq!(classification.label(), StrengthLabel::Weak);
        assert_eq!(
            classification.feedback(),
            &[
                "Use at least 8 characters".to_string(),
                "Add a special character (@#$%&!)".to_string(),
            ]
        );
    }

    #[test]
    fn test_from_failing_none_is_strong() {
        let classification = StrengthClassification::from_failing(Vec::new());
        assert!(classification.is_strong());
        assert_eq!(classification.feedback(), &[SECURE_FEEDBACK.to_string()]);
        assert!(classification.failing_criteria().is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let classification = StrengthClassification::default();
        assert_eq!(classification.label(), StrengthLabel::Empty);
        assert!(classification.feedback().is_empty());
        assert!(!classification.is_strong());
    }
}
