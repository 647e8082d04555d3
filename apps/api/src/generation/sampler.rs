//! Sampling controls — mode-aware temperature and tone selection.
//!
//! Determinism hinges on generator scoping: seeded selections build a local
//! `StdRng` for the one call and drop it. The process-wide `thread_rng`
//! stream is never reseeded, so unrelated generations stay independent.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Generation intent. Decision output must be stable across sampling noise;
/// creative output is deliberately varied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Decision,
    Creative,
}

/// Fixed temperature for decision-mode calls, so scores and categories are
/// not perturbed by sampling noise.
const DECISION_TEMPERATURE: f64 = 0.4;

/// Creative-mode temperature band, inclusive.
const CREATIVE_TEMPERATURE_RANGE: (f64, f64) = (0.70, 0.85);

/// The five stylistic descriptors injected into system prompts.
pub const TONES: [&str; 5] = [
    "highly analytical and data-driven",
    "bold, visionary, and disruptive",
    "consultative, empathetic, and solution-oriented",
    "concise, professional, and executive-level",
    "persuasive, high-energy, and sales-focused",
];

impl Mode {
    /// Decision → fixed 0.4. Creative → uniform in [0.70, 0.85], rounded to
    /// 2 decimals, freshly drawn on every call.
    pub fn temperature(self) -> f64 {
        match self {
            Mode::Decision => DECISION_TEMPERATURE,
            Mode::Creative => {
                let (lo, hi) = CREATIVE_TEMPERATURE_RANGE;
                let t: f64 = rand::thread_rng().gen_range(lo..=hi);
                (t * 100.0).round() / 100.0
            }
        }
    }
}

/// Selects a tone descriptor for a remote call.
///
/// A creative call carrying a seed gets a deterministic pick from a generator
/// scoped to this call; every other combination draws from `thread_rng`.
pub fn select_tone(mode: Mode, seed: Option<u32>) -> &'static str {
    match (mode, seed) {
        (Mode::Creative, Some(seed)) => {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            TONES.choose(&mut rng).copied().unwrap_or(TONES[0])
        }
        _ => TONES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(TONES[0]),
    }
}
