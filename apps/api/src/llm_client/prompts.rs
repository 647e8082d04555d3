// Cross-cutting prompt fragments shared by every remote call.

/// Appended to every system prompt before sending.
/// Replace `{tone}` with a descriptor from `generation::sampler::TONES`.
pub const TONE_DIRECTIVE_TEMPLATE: &str = "IMPORTANT: Adopt a {tone} tone. \
    Ensure every response is uniquely phrased and avoids repetitive patterns.";
