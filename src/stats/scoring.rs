//! Fantasy scoring weights.

use serde::{Deserialize, Serialize};

/// Points awarded per unit of each running back counting stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    pub rushing_yard: f64,
    pub rushing_td: f64,
    pub reception: f64,
    pub receiving_yard: f64,
    pub receiving_td: f64,
    pub fumble_lost: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self::ppr()
    }
}

impl Scoring {
    /// Full point-per-reception.
    pub fn ppr() -> Self {
        Self {
            rushing_yard: 0.1,
            rushing_td: 6.0,
            reception: 1.0,
            receiving_yard: 0.1,
            receiving_td: 6.0,
            fumble_lost: -2.0,
        }
    }

    pub fn half_ppr() -> Self {
        let mut scoring = Self::ppr();
        scoring.reception = 0.5;
        scoring
    }

    pub fn standard() -> Self {
        let mut scoring = Self::ppr();
        scoring.reception = 0.0;
        scoring
    }
}

/// Named scoring formats selectable from the command line and the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScoringPreset {
    Ppr,
    HalfPpr,
    Standard,
}

impl ScoringPreset {
    pub const ALL: [ScoringPreset; 3] = [
        ScoringPreset::Ppr,
        ScoringPreset::HalfPpr,
        ScoringPreset::Standard,
    ];

    pub fn scoring(self) -> Scoring {
        match self {
            ScoringPreset::Ppr => Scoring::ppr(),
            ScoringPreset::HalfPpr => Scoring::half_ppr(),
            ScoringPreset::Standard => Scoring::standard(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringPreset::Ppr => "Full PPR",
            ScoringPreset::HalfPpr => "Half PPR",
            ScoringPreset::Standard => "Standard",
        }
    }

    /// Preset matching `scoring` exactly, if any.
    pub fn matching(scoring: &Scoring) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.scoring() == *scoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_only_in_reception() {
        let ppr = Scoring::ppr();
        for preset in ScoringPreset::ALL {
            let scoring = preset.scoring();
            assert_eq!(scoring.rushing_yard, ppr.rushing_yard);
            assert_eq!(scoring.fumble_lost, ppr.fumble_lost);
        }
        assert_eq!(Scoring::half_ppr().reception, 0.5);
        assert_eq!(Scoring::standard().reception, 0.0);
    }

    #[test]
    fn test_matching_preset() {
        assert_eq!(ScoringPreset::matching(&Scoring::default()), Some(ScoringPreset::Ppr));
        let mut custom = Scoring::ppr();
        custom.rushing_td = 4.0;
        assert_eq!(ScoringPreset::matching(&custom), None);
    }
}
