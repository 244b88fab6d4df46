//! Coarse expression profile built purely from detector blendshapes.

use serde::{Deserialize, Serialize};
use std::fmt;

use wellsense_core::Blendshape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Happy,
    Sad,
    Angry,
    Neutral,
    Surprised,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expression::Happy => "Happy",
            Expression::Sad => "Sad",
            Expression::Angry => "Angry",
            Expression::Neutral => "Neutral",
            Expression::Surprised => "Surprised",
        })
    }
}

/// Per-expression activation in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpressionProfile {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub neutral: f64,
    pub surprised: f64,
}

impl Default for ExpressionProfile {
    fn default() -> Self {
        Self {
            happy: 0.0,
            sad: 0.0,
            angry: 0.0,
            neutral: 1.0,
            surprised: 0.0,
        }
    }
}

impl ExpressionProfile {
    /// Fold categories into buckets by name, keeping the strongest per bucket.
    ///
    /// Neutral is whatever activation the other four leave unused.
    pub fn from_blendshapes(blendshapes: &[Blendshape]) -> Self {
        if blendshapes.is_empty() {
            return Self::default();
        }

        let mut profile = Self {
            neutral: 0.0,
            ..Self::default()
        };

        for shape in blendshapes {
            let name = shape.category_name.to_lowercase();
            let bucket = if name.contains("smile") {
                &mut profile.happy
            } else if name.contains("frown") {
                &mut profile.sad
            } else if name.contains("browdown") || name.contains("browlowerer") {
                &mut profile.angry
            } else if name.contains("eyewideopen") || name.contains("jawopen") {
                &mut profile.surprised
            } else {
                continue;
            };
            *bucket = (*bucket).max(shape.score);
        }

        let total = profile.happy + profile.sad + profile.angry + profile.surprised;
        profile.neutral = (1.0 - total).max(0.0);
        profile
    }

    pub fn get(&self, expression: Expression) -> f64 {
        match expression {
            Expression::Happy => self.happy,
            Expression::Sad => self.sad,
            Expression::Angry => self.angry,
            Expression::Neutral => self.neutral,
            Expression::Surprised => self.surprised,
        }
    }

    /// Strongest expression and its activation; ties go to the later bucket
    pub fn dominant(&self) -> (Expression, f64) {
        [
            Expression::Sad,
            Expression::Angry,
            Expression::Neutral,
            Expression::Surprised,
        ]
        .into_iter()
        .fold((Expression::Happy, self.happy), |best, candidate| {
            let score = self.get(candidate);
            if best.1 > score {
                best
            } else {
                (candidate, score)
            }
        })
    }
}
