// src/extractors/sentence.rs
use crate::ism::models::{is_known_industry, INDUSTRIES};

/// Extracts the industries named in one sentence, in the order they are listed.
///
/// The report lists industries after a colon, separated by semicolons. When a
/// sentence has no colon, the reference list is scanned instead and matches come
/// back in reference order rather than mention order.
pub fn industries_in_sentence(sentence: &str) -> Vec<String> {
    let Some((_, listed)) = sentence.split_once(':') else {
        tracing::debug!("No colon in sentence, scanning reference industries: {:?}", sentence.trim());
        return INDUSTRIES
            .iter()
            .filter(|industry| sentence.contains(*industry))
            .map(|industry| industry.to_string())
            .collect();
    };

    let names: Vec<String> = if listed.contains(';') {
        listed.split(';').map(normalize_name).filter(|n| !n.is_empty()).collect()
    } else {
        let name = normalize_name(listed);
        if name.is_empty() { Vec::new() } else { vec![name] }
    };

    for name in names.iter().filter(|n| !is_known_industry(n)) {
        tracing::warn!("Unrecognised industry name in sentence: {:?}", name);
    }

    names
}

/// Drops the list conjunction, joins wrapped lines and trims.
fn normalize_name(segment: &str) -> String {
    segment
        .replace(" and ", "")
        .replace('\n', " ")
        .trim()
        .to_string()
}
