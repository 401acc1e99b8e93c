//! Profile Table
//!
//! Fixed weight vectors biasing which lenses matter more for a deliberation.
//! Lookup is case-insensitive and never fails: unknown names resolve to
//! `balanced`, where every lens weighs 1.0.

use crate::types::Lens;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named cognitive profile
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Balanced,
    Analytical,
    Practical,
    Creative,
    Philosophical,
    Empathetic,
}

/// Multiplier per lens. Every profile defines all seven lenses with a positive weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightVector {
    pub systems: f64,
    pub practical: f64,
    pub analytical: f64,
    pub philosophical: f64,
    pub empathetic: f64,
    pub creative: f64,
    pub challenge: f64,
}

impl WeightVector {
    pub const fn uniform(weight: f64) -> Self {
        Self {
            systems: weight,
            practical: weight,
            analytical: weight,
            philosophical: weight,
            empathetic: weight,
            creative: weight,
            challenge: weight,
        }
    }

    pub fn get(&self, lens: Lens) -> f64 {
        match lens {
            Lens::Systems => self.systems,
            Lens::Practical => self.practical,
            Lens::Analytical => self.analytical,
            Lens::Philosophical => self.philosophical,
            Lens::Empathetic => self.empathetic,
            Lens::Creative => self.creative,
            Lens::Challenge => self.challenge,
        }
    }
}

const BALANCED: WeightVector = WeightVector::uniform(1.0);

const ANALYTICAL: WeightVector = WeightVector {
    systems: 1.2,
    practical: 0.8,
    analytical: 1.5,
    philosophical: 0.7,
    empathetic: 0.6,
    creative: 0.7,
    challenge: 1.3,
};

const PRACTICAL: WeightVector = WeightVector {
    systems: 1.0,
    practical: 1.5,
    analytical: 1.0,
    philosophical: 0.5,
    empathetic: 0.8,
    creative: 0.6,
    challenge: 1.2,
};

const CREATIVE: WeightVector = WeightVector {
    systems: 0.8,
    practical: 0.7,
    analytical: 0.8,
    philosophical: 1.2,
    empathetic: 1.0,
    creative: 1.5,
    challenge: 1.1,
};

const PHILOSOPHICAL: WeightVector = WeightVector {
    systems: 1.1,
    practical: 0.6,
    analytical: 1.0,
    philosophical: 1.5,
    empathetic: 1.2,
    creative: 1.0,
    challenge: 1.2,
};

const EMPATHETIC: WeightVector = WeightVector {
    systems: 0.8,
    practical: 0.9,
    analytical: 0.7,
    philosophical: 1.0,
    empathetic: 1.5,
    creative: 1.1,
    challenge: 1.0,
};

impl Profile {
    pub const ALL: [Profile; 6] = [
        Profile::Balanced,
        Profile::Analytical,
        Profile::Practical,
        Profile::Creative,
        Profile::Philosophical,
        Profile::Empathetic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Balanced => "balanced",
            Profile::Analytical => "analytical",
            Profile::Practical => "practical",
            Profile::Creative => "creative",
            Profile::Philosophical => "philosophical",
            Profile::Empathetic => "empathetic",
        }
    }

    pub fn weights(&self) -> &'static WeightVector {
        match self {
            Profile::Balanced => &BALANCED,
            Profile::Analytical => &ANALYTICAL,
            Profile::Practical => &PRACTICAL,
            Profile::Creative => &CREATIVE,
            Profile::Philosophical => &PHILOSOPHICAL,
            Profile::Empathetic => &EMPATHETIC,
        }
    }

    /// Case-insensitive lookup; `None` for names outside the table
    pub fn from_name(name: &str) -> Option<Profile> {
        let name = name.trim().to_lowercase();
        Profile::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Case-insensitive lookup falling back to `balanced`
    pub fn resolve(name: &str) -> Profile {
        Profile::from_name(name).unwrap_or_else(|| {
            tracing::debug!(profile = name, "unknown profile, falling back to balanced");
            Profile::Balanced
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a profile name to its weight vector
pub fn resolve(profile_name: &str) -> WeightVector {
    *Profile::resolve(profile_name).weights()
}
