//! Lead scoring — deterministic keyword rule engine plus seeded narrative.
//!
//! Unlike the marketing and sales engines, every stochastic choice here runs
//! off a generator seeded from the request inputs: identical inputs must
//! produce identical scores, categories, and documents.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generation::prompts::{LEAD_SYSTEM_TEMPLATE, LEAD_USER_TEMPLATE};
use crate::generation::sampler::Mode;
use crate::generation::seed::derive_seed;
use crate::llm_client::TextGenerator;

/// Inputs for a lead scoring request. Fields default to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadInputs {
    pub product: String,
    pub icp: String,
    pub value_prop: String,
    pub lead_data: String,
}

/// Lead temperature bands. Label, display color, and recommended action are
/// a total function of the score — never chosen independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Hot,
    Warm,
    Lukewarm,
    Cold,
}

impl ScoreCategory {
    /// Threshold mapping: ≥75 Hot, ≥50 Warm, ≥25 Lukewarm, else Cold.
    pub fn from_score(score: i32) -> Self {
        if score >= 75 {
            ScoreCategory::Hot
        } else if score >= 50 {
            ScoreCategory::Warm
        } else if score >= 25 {
            ScoreCategory::Lukewarm
        } else {
            ScoreCategory::Cold
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::Hot => "Hot 🔥",
            ScoreCategory::Warm => "Warm",
            ScoreCategory::Lukewarm => "Lukewarm",
            ScoreCategory::Cold => "Cold",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreCategory::Hot => "#22c55e",
            ScoreCategory::Warm => "#eab308",
            ScoreCategory::Lukewarm => "#f59e0b",
            ScoreCategory::Cold => "#3b82f6",
        }
    }

    /// Recommended action, locked per category.
    pub fn action(self) -> &'static str {
        match self {
            ScoreCategory::Hot => "Call immediately (within 15 mins).",
            ScoreCategory::Warm => "Send case study and follow up in 2 days.",
            ScoreCategory::Lukewarm => "Add to monthly newsletter and monitor engagement.",
            ScoreCategory::Cold => "Send 'break-up' email to gauge interest.",
        }
    }
}

/// Structured output of the rule engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadAssessment {
    /// Clamped to [10, 99] — the extremes of the scale are never reported.
    pub score: i32,
    pub category: ScoreCategory,
    /// One entry per matched keyword category. May be empty; the narrative
    /// layer substitutes generic placeholder lines.
    pub reasons: Vec<String>,
    pub action: &'static str,
    /// floor(score * 0.85) — derived, never estimated independently.
    pub conversion_probability: i32,
}

struct KeywordRule {
    keywords: &'static [&'static str],
    boost: i32,
    reason: &'static str,
}

/// Intent signals matched as lowercase substrings of the lead data.
/// Boosts are fixed so repeat scoring of the same lead cannot drift.
const KEYWORD_RULES: [KeywordRule; 4] = [
    KeywordRule {
        keywords: &["budget", "price", "quote", "cost"],
        boost: 15,
        reason: "Financial intent detected (+15 pts)",
    },
    KeywordRule {
        keywords: &["urgent", "asap", "now", "deadline"],
        boost: 20,
        reason: "High timeline urgency (+20 pts)",
    },
    KeywordRule {
        keywords: &["need", "looking for", "problem", "solve"],
        boost: 10,
        reason: "Clear pain point match (+10 pts)",
    },
    KeywordRule {
        keywords: &["vp", "director", "head", "chief", "founder"],
        boost: 10,
        reason: "Decision-maker job title detected",
    },
];

const SCORE_FLOOR: i32 = 10;
const SCORE_CEILING: i32 = 99;

/// Scores a lead deterministically from its free-text data and a seed.
///
/// Base score uniform in [47, 53], plus fixed boosts per matched keyword
/// category, plus jitter in [-3, 3] from the same seeded stream, clamped to
/// [10, 99]. Category and action follow from the score.
pub fn score_lead(lead_data: &str, seed: u32) -> LeadAssessment {
    let mut rng = StdRng::seed_from_u64(seed as u64);

    let mut score: i32 = rng.gen_range(47..=53);
    let mut reasons = Vec::new();

    let lower = lead_data.to_lowercase();
    for rule in &KEYWORD_RULES {
        if rule.keywords.iter().any(|kw| lower.contains(kw)) {
            score += rule.boost;
            reasons.push(rule.reason.to_string());
        }
    }

    score += rng.gen_range(-3..=3);
    let score = score.clamp(SCORE_FLOOR, SCORE_CEILING);

    let category = ScoreCategory::from_score(score);
    LeadAssessment {
        score,
        category,
        reasons,
        action: category.action(),
        conversion_probability: (score as f64 * 0.85) as i32,
    }
}

/// Generates a lead qualification document.
///
/// The remote call runs in decision mode with the derived seed; on
/// unavailability the same seed drives the deterministic fallback, so a lead
/// scored locally today scores identically tomorrow.
pub async fn generate_lead_score(generator: &dyn TextGenerator, inputs: &LeadInputs) -> String {
    let seed = derive_seed(&[
        &inputs.product,
        &inputs.icp,
        &inputs.value_prop,
        &inputs.lead_data,
    ]);

    let system = LEAD_SYSTEM_TEMPLATE
        .replace("{icp}", &inputs.icp)
        .replace("{value_prop}", &inputs.value_prop);
    let user = LEAD_USER_TEMPLATE
        .replace("{product}", &inputs.product)
        .replace("{icp}", &inputs.icp)
        .replace("{value_prop}", &inputs.value_prop)
        .replace("{lead_data}", &inputs.lead_data);

    if let Some(text) = generator
        .generate(&system, &user, Mode::Decision, Some(seed))
        .await
    {
        return text;
    }

    info!("Remote generation unavailable — using deterministic lead scoring fallback");
    fallback_lead_scoring(&inputs.product, &inputs.lead_data, seed)
}

/// Renders the rule engine's assessment as the qualification document.
/// Deterministic for a given (product, lead_data, seed) triple.
pub fn fallback_lead_scoring(product: &str, lead_data: &str, seed: u32) -> String {
    let assessment = score_lead(lead_data, seed);

    let first_reason = assessment
        .reasons
        .first()
        .map(String::as_str)
        .unwrap_or("Standard inquiry pattern.");
    let second_reason = assessment
        .reasons
        .get(1)
        .map(String::as_str)
        .unwrap_or("Context implies moderate commercial intent.");

    format!(
        r#"### 📊 AI Lead Qualification Analysis

**Lead Score:** **{score}/100**

**Category:** <span style="color:{color}; font-weight:bold">{label}</span>

**Reasoning:**
- {first_reason}
- Matches core value proposition of {product}.
- {second_reason}

**Estimated Conversion Probability:**
**{probability}%** based on current signals.

**Recommended Sales Action:**
-> **{action}**
"#,
        score = assessment.score,
        color = assessment.category.color(),
        label = assessment.category.label(),
        probability = assessment.conversion_probability,
        action = assessment.action,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pre-clamp score for a fixed seed, reproducing the engine's draws.
    fn raw_score(lead_data: &str, seed: u32) -> i32 {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let mut score: i32 = rng.gen_range(47..=53);
        let lower = lead_data.to_lowercase();
        for rule in &KEYWORD_RULES {
            if rule.keywords.iter().any(|kw| lower.contains(kw)) {
                score += rule.boost;
            }
        }
        score + rng.gen_range(-3..=3)
    }

    #[test]
    fn test_score_lead_is_deterministic() {
        let first = score_lead("VP needs a quote ASAP", 12345);
        for _ in 0..10 {
            assert_eq!(score_lead("VP needs a quote ASAP", 12345), first);
        }
    }

    #[test]
    fn test_adding_keyword_category_never_lowers_raw_score() {
        for seed in [0u32, 7, 1234, 0xFFFF_FFFF] {
            let base = raw_score("hello there", seed);
            let boosted = raw_score("hello there, budget approved", seed);
            assert!(
                boosted >= base,
                "boost lowered score: {boosted} < {base} (seed {seed})"
            );
            assert_eq!(boosted - base, 15);
        }
    }

    #[test]
    fn test_score_always_within_clamp_bounds() {
        for seed in 0..500u32 {
            let all_signals = "urgent budget need vp";
            let a = score_lead(all_signals, seed);
            assert!((10..=99).contains(&a.score), "score {} out of bounds", a.score);
            let b = score_lead("", seed);
            assert!((10..=99).contains(&b.score), "score {} out of bounds", b.score);
        }
    }

    #[test]
    fn test_category_boundaries_are_exact() {
        assert_eq!(ScoreCategory::from_score(75), ScoreCategory::Hot);
        assert_eq!(ScoreCategory::from_score(74), ScoreCategory::Warm);
        assert_eq!(ScoreCategory::from_score(50), ScoreCategory::Warm);
        assert_eq!(ScoreCategory::from_score(49), ScoreCategory::Lukewarm);
        assert_eq!(ScoreCategory::from_score(25), ScoreCategory::Lukewarm);
        assert_eq!(ScoreCategory::from_score(24), ScoreCategory::Cold);
    }

    #[test]
    fn test_every_reportable_score_has_one_category_and_action() {
        use std::collections::HashSet;
        let mut actions = HashSet::new();
        for score in 10..=99 {
            let category = ScoreCategory::from_score(score);
            actions.insert(category.action());
        }
        // Cold is reachable (10..25), so all four actions appear, each unique
        // to its category.
        assert_eq!(actions.len(), 4);
    }

    #[test]
    fn test_conversion_probability_is_floor_of_score_times_085() {
        for seed in 0..200u32 {
            let a = score_lead("director with budget", seed);
            assert_eq!(a.conversion_probability, (a.score as f64 * 0.85) as i32);
        }
    }

    #[test]
    fn test_high_intent_scenario_scores_hot() {
        let lead = "We need this urgently, budget approved, ASAP";
        let a = score_lead(lead, derive_seed(&["X", lead]));
        // financial +15, urgency +20, pain point +10 on a base of at least 47:
        // pre-jitter minimum 92, so even worst-case jitter stays Hot.
        assert!(a.score >= 89, "expected Hot-range score, got {}", a.score);
        assert_eq!(a.category, ScoreCategory::Hot);
        assert_eq!(a.reasons.len(), 3);
        assert!(a.reasons.iter().any(|r| r.contains("Financial intent")));
        assert!(a.reasons.iter().any(|r| r.contains("urgency")));
        assert!(a.reasons.iter().any(|r| r.contains("pain point")));
    }

    #[test]
    fn test_empty_lead_data_has_no_reasons_and_midband_score() {
        for seed in 0..100u32 {
            let a = score_lead("", seed);
            assert!(a.reasons.is_empty());
            assert!((44..=56).contains(&a.score), "score {} out of mid band", a.score);
        }
    }

    #[test]
    fn test_keywords_match_case_insensitively() {
        let a = score_lead("BUDGET APPROVED", 1);
        assert!(a.reasons.iter().any(|r| r.contains("Financial intent")));
    }

    #[test]
    fn test_narrative_is_deterministic_for_same_inputs() {
        let seed = derive_seed(&["Acme", "icp", "vp", "lead"]);
        let first = fallback_lead_scoring("Acme", "lead", seed);
        for _ in 0..5 {
            assert_eq!(fallback_lead_scoring("Acme", "lead", seed), first);
        }
    }

    #[test]
    fn test_narrative_substitutes_placeholders_when_no_reasons() {
        let doc = fallback_lead_scoring("Acme", "", 42);
        assert!(doc.contains("Standard inquiry pattern."));
        assert!(doc.contains("Context implies moderate commercial intent."));
        assert!(doc.contains("Matches core value proposition of Acme."));
    }

    #[test]
    fn test_narrative_contains_all_sections() {
        let doc = fallback_lead_scoring("Acme", "VP with budget, urgent", 7);
        for header in [
            "### 📊 AI Lead Qualification Analysis",
            "**Lead Score:**",
            "**Category:**",
            "**Reasoning:**",
            "**Estimated Conversion Probability:**",
            "**Recommended Sales Action:**",
        ] {
            assert!(doc.contains(header), "missing section: {header}");
        }
    }

    #[test]
    fn test_narrative_category_styling_matches_score() {
        let lead = "We need this urgently, budget approved, ASAP";
        let doc = fallback_lead_scoring("X", lead, derive_seed(&["X", lead]));
        assert!(doc.contains("Hot 🔥"));
        assert!(doc.contains("#22c55e"));
        assert!(doc.contains("Call immediately (within 15 mins)."));
    }

    #[test]
    fn test_lead_inputs_accept_camel_case_keys() {
        let json = r#"{"product":"X","icp":"startups","valueProp":"speed","leadData":"hi"}"#;
        let inputs: LeadInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.value_prop, "speed");
        assert_eq!(inputs.lead_data, "hi");
    }
}
