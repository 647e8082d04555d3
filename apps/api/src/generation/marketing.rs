//! Marketing campaign generation — remote first, local template fallback.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use tracing::info;

use crate::generation::prompts::{MARKETING_SYSTEM_TEMPLATE, MARKETING_USER_TEMPLATE};
use crate::generation::sampler::Mode;
use crate::llm_client::TextGenerator;

/// Inputs for a marketing campaign request. Every field defaults to empty so
/// absent keys flow through as blank template slots instead of rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarketingInputs {
    pub product: String,
    pub description: String,
    pub audience: String,
    pub platform: String,
}

/// Generates a marketing campaign strategy document.
///
/// Attempts the remote generator in creative mode; any unavailability falls
/// back to the local template engine. Always returns a complete document.
pub async fn generate_marketing_campaign(
    generator: &dyn TextGenerator,
    inputs: &MarketingInputs,
) -> String {
    let system = MARKETING_SYSTEM_TEMPLATE
        .replace("{platform}", &inputs.platform)
        .replace("{audience}", &inputs.audience);
    let user = MARKETING_USER_TEMPLATE
        .replace("{product}", &inputs.product)
        .replace("{description}", &inputs.description)
        .replace("{audience}", &inputs.audience)
        .replace("{platform}", &inputs.platform);

    if let Some(text) = generator.generate(&system, &user, Mode::Creative, None).await {
        return text;
    }

    info!("Remote generation unavailable — using marketing fallback template");
    fallback_marketing(inputs)
}

/// Local marketing template engine.
///
/// Variety comes from unseeded selection over fixed candidate pools; the
/// output is not a scored artifact, so stability is not required. Multi-item
/// sections use shuffle-then-take so bullets never repeat or run out.
pub fn fallback_marketing(inputs: &MarketingInputs) -> String {
    let MarketingInputs {
        product,
        description,
        audience,
        platform,
    } = inputs;
    let mut rng = rand::thread_rng();

    let objectives = [
        format!("To dominate share of voice in the {audience} segment on {platform}."),
        format!("To aggressively scale brand awareness for {product} via high-impact visuals."),
        format!("To establish {product} as the undisputed category leader for {audience}."),
        format!("To drive rapid user acquisition and viral growth on {platform}."),
        format!("To build a loyal community of {audience} advocates around {product}."),
    ];

    let adjective = ["ultimate", "premier", "smart"]
        .choose(&mut rng)
        .copied()
        .unwrap_or("ultimate");
    let taglines = [
        format!("Redefining {description} for the modern {audience}."),
        format!("{product}: The {adjective} choice for {audience}."),
        format!("Step into the future of {description} with {product}."),
        format!("Don't just survive, thrive. {product}."),
        format!("{product}: Because {audience} deserve better."),
    ];

    let strategy_sets = [
        [
            format!("Leverage {platform} Reels for viral organic reach."),
            format!("Partner with 5-10 micro-influencers in the {audience} niche."),
            "Implement a retargeting layer for high-intent visitors.".to_string(),
        ],
        [
            format!("Launch a user-generated content (UGC) challenge on {platform}."),
            "Use carousel ads to breakdown complex features.".to_string(),
            format!("Host a live Q&A session tailored to {audience} pain points."),
        ],
        [
            "Focus on 'Transformation' storytelling (Before vs After).".to_string(),
            format!("Use {platform} Stories for limited-time offers."),
            "Create a community-led ambassador program.".to_string(),
        ],
    ];
    // Each strategy bullet is drawn from an independently chosen set, at its
    // own position, so the three lines always cover distinct tactic slots.
    let strategy: Vec<&str> = (0..3)
        .map(|i| {
            strategy_sets
                .choose(&mut rng)
                .map(|set| set[i].as_str())
                .unwrap_or_default()
        })
        .collect();

    let mut content_ideas = vec![
        "**Day in the Life:** A relatable vlog-style post featuring a typical user.",
        "**Myth Buster:** Debunking common industry misconceptions.",
        "**Feature Spotlight:** 30-second deep dive into a specific benefit.",
        "**Unboxing Experience:** High-quality ASMR-style unsheathing of the product.",
        "**Founder's Story:** Authentic video sharing the 'why' behind the brand.",
        "**Customer Reaction:** Compilation of genuine user feedback.",
        "**How-To Guide:** Step-by-step tutorial for maximizing value.",
        "**Reaction Video:** Influencers reacting to the product for the first time.",
    ];
    content_ideas.shuffle(&mut rng);

    let mut metrics = vec![
        format!("CTR > {:.1}%", rng.gen_range(1.5..3.5)),
        format!("ROAS > {:.1}x", rng.gen_range(2.5..5.0)),
        format!("Engagement Rate > {:.1}%", rng.gen_range(4.0..9.0)),
        format!("CPA < ${}", rng.gen_range(15..=45)),
        format!("Brand Mention Lift > {}%", rng.gen_range(10..=30)),
    ];
    metrics.shuffle(&mut rng);

    let objective = objectives.choose(&mut rng).cloned().unwrap_or_default();
    let tagline = taglines.choose(&mut rng).cloned().unwrap_or_default();
    let hook = ["Stop settling.", "Ready for an upgrade?", "The wait is over."]
        .choose(&mut rng)
        .copied()
        .unwrap_or_default();

    format!(
        r#"### 🚀 Marketing Campaign Strategy: {product}

**Campaign Objective:**
{objective}

**Core Marketing Message:**
"{tagline}"

**Strategy for {platform}:**
- {s0}
- {s1}
- {s2}

**Content Ideas:**
- {i0}
- {i1}
- {i2}
- {i3}
- {i4}

**Ad Copy Variations:**
1. "{hook} {product} is here to change the game for {audience}."
2. "POV: You finally found a {description} that actually works. Meet {product}. #LinkInBio"
3. "{audience} are switching to {product} for a reason. Experience the difference today."

**Success Metrics:**
- {m0}
- {m1}
- {m2}
"#,
        s0 = strategy[0],
        s1 = strategy[1],
        s2 = strategy[2],
        i0 = content_ideas[0],
        i1 = content_ideas[1],
        i2 = content_ideas[2],
        i3 = content_ideas[3],
        i4 = content_ideas[4],
        m0 = metrics[0],
        m1 = metrics[1],
        m2 = metrics[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> MarketingInputs {
        MarketingInputs {
            product: "Acme CRM".to_string(),
            description: "sales pipeline tool".to_string(),
            audience: "startup founders".to_string(),
            platform: "Instagram".to_string(),
        }
    }

    const SECTION_HEADERS: [&str; 6] = [
        "### 🚀 Marketing Campaign Strategy:",
        "**Campaign Objective:**",
        "**Core Marketing Message:**",
        "**Content Ideas:**",
        "**Ad Copy Variations:**",
        "**Success Metrics:**",
    ];

    #[test]
    fn test_fallback_contains_all_sections() {
        let doc = fallback_marketing(&inputs());
        for header in SECTION_HEADERS {
            assert!(doc.contains(header), "missing section: {header}");
        }
        assert!(doc.contains("**Strategy for Instagram:**"));
    }

    #[test]
    fn test_fallback_interpolates_inputs_verbatim() {
        let doc = fallback_marketing(&inputs());
        assert!(doc.contains("Acme CRM"));
        assert!(doc.contains("startup founders"));
    }

    #[test]
    fn test_fallback_has_five_content_ideas_and_three_metrics() {
        let doc = fallback_marketing(&inputs());
        let ideas_section = doc
            .split("**Content Ideas:**")
            .nth(1)
            .and_then(|rest| rest.split("**Ad Copy Variations:**").next())
            .unwrap();
        assert_eq!(ideas_section.matches("\n- ").count(), 5);

        let metrics_section = doc.split("**Success Metrics:**").nth(1).unwrap();
        assert_eq!(metrics_section.matches("\n- ").count(), 3);
    }

    #[test]
    fn test_fallback_content_ideas_never_repeat() {
        // shuffle-then-take: the five rendered ideas must be distinct
        for _ in 0..20 {
            let doc = fallback_marketing(&inputs());
            let ideas: Vec<&str> = doc
                .split("**Content Ideas:**")
                .nth(1)
                .and_then(|rest| rest.split("**Ad Copy Variations:**").next())
                .unwrap()
                .lines()
                .filter(|l| l.starts_with("- "))
                .collect();
            let unique: std::collections::HashSet<&&str> = ideas.iter().collect();
            assert_eq!(unique.len(), ideas.len(), "repeated content idea");
        }
    }

    #[test]
    fn test_fallback_tolerates_empty_inputs() {
        let doc = fallback_marketing(&MarketingInputs::default());
        for header in SECTION_HEADERS {
            assert!(doc.contains(header), "missing section: {header}");
        }
    }

    #[test]
    fn test_inputs_deserialize_with_missing_fields() {
        let inputs: MarketingInputs = serde_json::from_str(r#"{"product":"X"}"#).unwrap();
        assert_eq!(inputs.product, "X");
        assert!(inputs.platform.is_empty());
    }
}
