use serde::{Deserialize, Serialize};

/// Player stats an option can adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    Health,
    Energy,
    Stress,
    Mood,
    Money,
    Social,
    TermGradeBonus,
}

impl Stat {
    /// The field name the game data uses for this stat (e.g., "termGradeBonus").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Energy => "energy",
            Self::Stress => "stress",
            Self::Mood => "mood",
            Self::Money => "money",
            Self::Social => "social",
            Self::TermGradeBonus => "termGradeBonus",
        }
    }
}

/// Signed stat adjustments attached to an option, in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectMap(pub Vec<(Stat, i32)>);

impl EffectMap {
    pub fn new(deltas: impl IntoIterator<Item = (Stat, i32)>) -> Self {
        Self(deltas.into_iter().collect())
    }

    pub fn get(&self, stat: Stat) -> Option<i32> {
        self.0.iter().find(|(s, _)| *s == stat).map(|(_, d)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Stat, i32)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stats named more than once, in first-repeat order.
    pub fn repeated_stats(&self) -> Vec<Stat> {
        let mut seen = Vec::new();
        let mut repeated = Vec::new();
        for (stat, _) in &self.0 {
            if seen.contains(stat) {
                if !repeated.contains(stat) {
                    repeated.push(*stat);
                }
            } else {
                seen.push(*stat);
            }
        }
        repeated
    }
}
