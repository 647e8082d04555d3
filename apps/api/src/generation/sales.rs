//! Sales pitch generation — remote first, local template fallback.

use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::info;

use crate::generation::prompts::{SALES_SYSTEM_TEMPLATE, SALES_USER_TEMPLATE};
use crate::generation::sampler::Mode;
use crate::llm_client::TextGenerator;

/// Inputs for a sales pitch request. Fields default to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SalesInputs {
    pub product: String,
    pub persona: String,
    pub industry: String,
    pub size: String,
}

/// Generates a B2B sales pitch document.
///
/// Attempts the remote generator in creative mode; any unavailability falls
/// back to the local template engine. Always returns a complete document.
pub async fn generate_sales_pitch(generator: &dyn TextGenerator, inputs: &SalesInputs) -> String {
    let system = SALES_SYSTEM_TEMPLATE
        .replace("{persona}", &inputs.persona)
        .replace("{industry}", &inputs.industry)
        .replace("{size}", &inputs.size);
    let user = SALES_USER_TEMPLATE
        .replace("{product}", &inputs.product)
        .replace("{persona}", &inputs.persona)
        .replace("{industry}", &inputs.industry)
        .replace("{size}", &inputs.size);

    if let Some(text) = generator.generate(&system, &user, Mode::Creative, None).await {
        return text;
    }

    info!("Remote generation unavailable — using sales fallback template");
    fallback_sales(inputs)
}

/// Local sales pitch template engine. Unseeded variety over fixed pools;
/// three-item sections use shuffle-then-take.
pub fn fallback_sales(inputs: &SalesInputs) -> String {
    let SalesInputs {
        product,
        persona,
        industry,
        size,
    } = inputs;
    let mut rng = rand::thread_rng();

    let openers = [
        format!("Hi [Name], I noticed {size} companies in {industry} often struggle with efficiency."),
        format!("Hello [Name], are you tired of outdated tools slowing down your {industry} teams?"),
        format!("Hi [Name], we've been helping {size} {industry} firms cut costs by 20%."),
        format!("Hey [Name], quick question about your current {industry} stack."),
    ];

    let mut value_props = vec![
        format!("**Purpose-Built:** Unlike generic tools, {product} is designed strictly for {industry}."),
        format!("**Rapid Deployment:** Get your {size} team onboarded in days, not months."),
        format!("**Cost Efficiency:** Replace 3 fragmented tools with one {product}."),
        format!("**Compliance Ready:** Meets all standard {industry} regulatory requirements."),
        "**AI-Powered:** Automates the mundane tasks your team hates.".to_string(),
    ];
    value_props.shuffle(&mut rng);

    let mut differentiators = vec![
        "Superior UX/UI designed for non-technical users.",
        "24/7 Dedicated Support for Enterprise accounts.",
        "Proprietary algorithms that predict market shifts.",
        "Seamless integration with your existing stack.",
        "No-code customization engine.",
    ];
    differentiators.shuffle(&mut rng);

    let ctas = [
        "Do you have 10 minutes this week for a quick walkthrough?",
        "Would you be open to seeing a 5-minute personalized demo?",
        "Can I send over a case study relevant to your sector?",
        "Are you free Tuesday morning for a brief chat?",
    ];

    let opener = openers.choose(&mut rng).cloned().unwrap_or_default();
    let cta = ctas.choose(&mut rng).copied().unwrap_or_default();

    format!(
        r#"### 💼 B2B Sales Pitch for {persona}

**30-Second Elevator Pitch:**
"{opener} {product} solves this by streamlining operations and automating manual workflows. We essentially give your team hours back every week, allowing you to focus on high-value strategy rather than grunt work."

**Value Proposition:**
- {v0}
- {v1}
- {v2}

**Key Differentiators:**
- {d0}
- {d1}
- {d2}

**Objection Handling:**
- *"We don't have budget."* -> "Totally understand. Most of our partners realized that {product} actually **pays for itself** within 3 months by consolidating vendors."
- *"Is it hard to switch?"* -> "Not at all. Our migration team handles the heavy lifting, ensuring zero downtime for your {size} org."

**Recommended Next Step (CTA):**
"{cta}"
"#,
        v0 = value_props[0],
        v1 = value_props[1],
        v2 = value_props[2],
        d0 = differentiators[0],
        d1 = differentiators[1],
        d2 = differentiators[2],
    )
}
