//! Type Registry — the enumerable domain of valid codes.
//!
//! Every table here is a `const`/`static`: built into the binary, shared
//! read-only, never written after start.

use super::{Code, Dimension};

/// The 16 valid codes.
pub const ALL_CODES: [Code; 16] = [
    Code::from_static("ESTJ"),
    Code::from_static("ENTJ"),
    Code::from_static("ESFJ"),
    Code::from_static("ENFJ"),
    Code::from_static("ISTJ"),
    Code::from_static("ISFJ"),
    Code::from_static("INTJ"),
    Code::from_static("INFJ"),
    Code::from_static("ESTP"),
    Code::from_static("ESFP"),
    Code::from_static("ENTP"),
    Code::from_static("ENFP"),
    Code::from_static("ISTP"),
    Code::from_static("ISFP"),
    Code::from_static("INTP"),
    Code::from_static("INFP"),
];

/// Fallback text for anything outside the registry.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown personality type.";

static DESCRIPTIONS: [(&str, &str); 16] = [
    ("INTJ", "Strategic, independent thinker. Focused on logic and long-term planning."),
    ("INTP", "Analytical, logical and curious. Enjoys understanding how things work."),
    ("ENTJ", "Natural, decisive leader. Motivated by challenges and efficiency."),
    ("ENTP", "Inventive and argumentative. Enjoys debates and new ideas."),
    ("INFJ", "Idealistic, empathetic and deeply insightful. Tends to help others find purpose."),
    ("INFP", "Dreamy and sensitive. Guided by personal values and authenticity."),
    ("ENFJ", "Sociable and altruistic. Stands out at motivating and inspiring others."),
    ("ENFP", "Creative and enthusiastic. Lives exploring new ideas and emotions."),
    ("ISTJ", "Responsible, organized and reliable. Prefers clear rules and stability."),
    ("ISFJ", "Kind and committed. Looks after the well-being of those around them."),
    ("ESTJ", "Practical, decisive and a good manager. Prefers order and structure."),
    ("ESFJ", "Sociable and cooperative. Seeks harmony and social approval."),
    ("ISTP", "Observant, technical and adaptable. Learns best by doing."),
    ("ISFP", "Artistic and reserved. Guided by aesthetics and authenticity."),
    ("ESTP", "Active, daring and energetic. Learns through direct experience."),
    ("ESFP", "Cheerful, spontaneous and fun. Lives in the moment and enjoys the present."),
];

/// True iff `code` is exactly one of the 16 registry entries.
///
/// Checks length, then the per-position letter pair, then membership.
pub fn is_valid(code: &str) -> bool {
    lookup(code).is_some()
}

/// Resolve a raw string to its registry entry.
pub(crate) fn lookup(raw: &str) -> Option<Code> {
    if raw.len() != 4 {
        return None;
    }
    let letters_ok = raw
        .chars()
        .zip(Dimension::ALL)
        .all(|(letter, dim)| dim.allows(letter));
    if !letters_ok {
        return None;
    }
    ALL_CODES.iter().copied().find(|c| c.as_str() == raw)
}

/// Canned description for `code`, or [`UNKNOWN_DESCRIPTION`] if it is not
/// a registry entry.
pub fn description(code: &str) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, text)| *text)
        .unwrap_or(UNKNOWN_DESCRIPTION)
}
