//! Mapping a raw classifier score to a reportable verdict

use crate::config;

/// The two reportable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Benign,
    Malignant,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Benign => write!(f, "Benign"),
            Label::Malignant => write!(f, "Malignant"),
        }
    }
}

/// A classified mammogram: label plus confidence percentage
#[derive(Debug, Clone, Copy)]
pub struct Verdict {
    label: Label,
    confidence: f64,
}

impl Verdict {
    /// Apply the decision rule. Scores strictly above the threshold are
    /// malignant with confidence `p * 100`; everything else, the threshold
    /// itself included, is benign with confidence `(1 - p) * 100`.
    pub fn from_score(score: f64) -> Self {
        if score > config::MALIGNANT_THRESHOLD {
            Verdict {
                label: Label::Malignant,
                confidence: score * 100.0,
            }
        } else {
            Verdict {
                label: Label::Benign,
                confidence: (1.0 - score) * 100.0,
            }
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Confidence percentage with exactly two decimal places
    pub fn confidence(&self) -> String {
        format!("{:.2}", self.confidence)
    }

    /// The human-readable verdict line
    pub fn prediction(&self) -> String {
        format!("{} ({}% confidence)", self.label, self.confidence())
    }
}
