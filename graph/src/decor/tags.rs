use crate::core::{Tag, Tags};

/// Checked in this order; the order of the output follows it
const TAG_KEYWORDS: [(&str, Tag); 5] = [
    ("breaking", Tag::Breaking),
    ("feat", Tag::Feature),
    ("fix", Tag::Fix),
    ("docs", Tag::Docs),
    ("test", Tag::Test),
];

/// Extract keyword tags from a commit message (case-insensitive)
pub fn extract_tags(message: &str) -> Tags {
    let lower = message.to_lowercase();
    TAG_KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, tag)| *tag)
        .collect()
}
