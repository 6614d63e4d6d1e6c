//! Prompt enhancement: detects a scene category and an art style from the
//! raw prompt and appends matching descriptor clauses plus a fixed quality
//! suffix, along with a negative prompt for the diffusion model.

/// (name, trigger keywords, descriptor clause)
type Rules = &'static [(&'static str, &'static [&'static str], &'static str)];

const CATEGORY_RULES: Rules = &[
    (
        "interior design",
        &["living room", "kitchen", "bedroom", "interior", "furniture", "apartment", "office"],
        "architectural lighting, styled furniture arrangement, cinematic wide angle, photorealistic materials",
    ),
    (
        "character portrait",
        &["portrait", "person", "face", "character", "hero", "villain", "model", "figure"],
        "studio lighting, expressive pose, intricate facial details, cinematic depth of field",
    ),
    (
        "landscape",
        &["landscape", "mountain", "forest", "lake", "valley", "coast", "skyline"],
        "epic composition, volumetric atmosphere, dramatic lighting, detailed environment",
    ),
    (
        "fantasy scene",
        &["dragon", "wizard", "castle", "magic", "mythical", "fantasy", "sorcerer"],
        "mythic atmosphere, rich world-building details, dramatic lighting, high fantasy realism",
    ),
    (
        "sci-fi scene",
        &["cyberpunk", "space", "futuristic", "robot", "mech", "alien", "spaceship"],
        "futuristic materials, holographic accents, cinematic lighting, high-tech atmosphere",
    ),
    (
        "product render",
        &["product", "packaging", "bottle", "gadget", "device", "shoe", "watch"],
        "hero product shot, premium materials, immaculate studio lighting, sharp focus",
    ),
    (
        "vehicle render",
        &["car", "vehicle", "motorcycle", "aircraft", "spaceship", "train"],
        "dynamic hero angle, motion detail, reflective surfaces, showroom lighting",
    ),
    (
        "food photography",
        &["food", "dish", "meal", "dessert", "cuisine", "plate"],
        "macro depth of field, appetizing styling, natural lighting, crisp detail",
    ),
    (
        "graphic design",
        &["poster", "logo", "typography", "graphic design", "layout", "cover art"],
        "bold layout, balanced typography, print-ready composition, clean vector detail",
    ),
    (
        "anime illustration",
        &["anime", "manga", "cel shading", "chibi", "2d style"],
        "crisply inked lines, vibrant cel shading, expressive lighting, cinematic framing",
    ),
];

const STYLE_RULES: Rules = &[
    (
        "photorealistic",
        &["photorealistic", "photo", "realistic", "ultra realistic"],
        "hyperreal detail, lifelike textures, precision optics, natural imperfections",
    ),
    (
        "cinematic",
        &["cinematic", "epic", "movie still", "film still"],
        "anamorphic bokeh, storytelling lighting, dramatic color grading, film grain",
    ),
    (
        "watercolor",
        &["watercolor", "ink wash", "gouache"],
        "fluid pigment diffusion, textured paper grain, layered washes, soft edges",
    ),
    (
        "oil painting",
        &["oil painting", "baroque", "renaissance", "impasto"],
        "rich brush strokes, classical lighting, layered pigments, gallery finish",
    ),
    (
        "digital art",
        &["digital art", "concept art", "matte painting", "digital painting"],
        "high-resolution digital painting, refined shading, concept art polish",
    ),
    (
        "low poly",
        &["low poly", "isometric", "3d render"],
        "stylized facets, carefully simplified geometry, game-ready aesthetic",
    ),
    (
        "pixel art",
        &["pixel art", "8-bit", "retro game"],
        "clean pixel clusters, color-limited palette, crisp dithering",
    ),
    (
        "line art",
        &["line art", "sketch", "technical drawing"],
        "precise line weight, technical accuracy, cross-hatching detail",
    ),
];

const QUALITY_SUFFIX: &str =
    "ultra high resolution, global illumination, sharp detail, physically-based rendering";

pub const NEGATIVE_PROMPT: &str = "low quality, blurry, distorted, washed out, noisy, watermark, \
    text overlay, malformed anatomy, bad proportions, low detail, overexposed, underexposed, \
    amateur render";

#[derive(Debug, Clone, PartialEq)]
pub struct Enhanced {
    pub prompt: String,
    pub negative_prompt: String,
}

fn match_rule(
    prompt: &str,
    rules: Rules,
) -> Option<&'static (&'static str, &'static [&'static str], &'static str)> {
    let prompt_lower = prompt.to_lowercase();
    rules
        .iter()
        .find(|(_, keywords, _)| keywords.iter().any(|kw| prompt_lower.contains(kw)))
}

pub fn detect_category(prompt: &str) -> Option<&'static str> {
    match_rule(prompt, CATEGORY_RULES).map(|(name, _, _)| *name)
}

pub fn detect_style(prompt: &str) -> Option<&'static str> {
    match_rule(prompt, STYLE_RULES).map(|(name, _, _)| *name)
}

/// Build the enhanced prompt: original text, category descriptor if any,
/// style descriptor if any, then the fixed quality suffix, comma-joined.
pub fn enhance(prompt: &str) -> Enhanced {
    let original = prompt.trim();

    let mut parts = vec![original];
    if let Some(&(_, _, desc)) = match_rule(original, CATEGORY_RULES) {
        parts.push(desc);
    }
    if let Some(&(_, _, desc)) = match_rule(original, STYLE_RULES) {
        parts.push(desc);
    }
    parts.push(QUALITY_SUFFIX);

    Enhanced {
        prompt: parts.join(", "),
        negative_prompt: NEGATIVE_PROMPT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_detection() {
        assert_eq!(detect_category("a cozy living room"), Some("interior design"));
        assert_eq!(detect_category("Dragon above the CASTLE"), Some("fantasy scene"));
        assert_eq!(detect_category("abstract shapes"), None);
    }

    #[test]
    fn test_style_detection() {
        assert_eq!(detect_style("watercolor fox"), Some("watercolor"));
        assert_eq!(detect_style("a photo of a street"), Some("photorealistic"));
        assert_eq!(detect_style("plain doodle"), None);
    }

    #[test]
    fn test_first_matching_category_wins() {
        // "portrait" (character portrait) appears before "landscape" in the table
        assert_eq!(
            detect_category("portrait in a landscape"),
            Some("character portrait")
        );
    }

    #[test]
    fn test_enhance_ordering() {
        let enhanced = enhance("  a dragon in watercolor  ");
        let expected = format!(
            "a dragon in watercolor, {}, {}, {}",
            "mythic atmosphere, rich world-building details, dramatic lighting, high fantasy realism",
            "fluid pigment diffusion, textured paper grain, layered washes, soft edges",
            QUALITY_SUFFIX
        );
        assert_eq!(enhanced.prompt, expected);
        assert_eq!(enhanced.negative_prompt, NEGATIVE_PROMPT);
    }

    #[test]
    fn test_enhance_without_matches() {
        let enhanced = enhance("something abstract");
        assert_eq!(
            enhanced.prompt,
            format!("something abstract, {}", QUALITY_SUFFIX)
        );
    }
}
