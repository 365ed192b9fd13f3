// src/extractors/paragraph.rs
use crate::extractors::sentence::industries_in_sentence;
use crate::ism::models::{IndicatorReport, INDUSTRIES};
use crate::utils::error::ExtractError;

/// Turns one indicator paragraph into ranked industries.
///
/// The paragraph is split on periods: the first fragment names the industries
/// reporting growth, the second those reporting a decrease. Everything else in
/// the reference list is neutral.
pub fn process_paragraph(paragraph: &str) -> Result<IndicatorReport, ExtractError> {
    let sentences: Vec<&str> = paragraph.split('.').collect();
    if sentences.len() < 2 {
        return Err(ExtractError::TooFewSentences(sentences.len()));
    }

    let growth = industries_in_sentence(sentences[0]);
    let decline = industries_in_sentence(sentences[1]);
    let neutral = neutral_industries(&growth, &decline);

    tracing::debug!(
        "Classified paragraph: {} growth, {} neutral, {} decline",
        growth.len(),
        neutral.len(),
        decline.len()
    );

    rank_industries(&growth, &neutral, &decline)
}

/// Reference industries named in neither list, in reference order.
pub fn neutral_industries(growth: &[String], decline: &[String]) -> Vec<String> {
    INDUSTRIES
        .iter()
        .filter(|industry| !growth.iter().any(|g| g == *industry))
        .filter(|industry| !decline.iter().any(|d| d == *industry))
        .map(|industry| industry.to_string())
        .collect()
}

/// Assigns signed ranks by mention order.
///
/// Growth counts down from `growth.len()` to 1, neutral industries get 0 and
/// declines count down from -1. An industry appearing twice is an error.
pub fn rank_industries(
    growth: &[String],
    neutral: &[String],
    decline: &[String],
) -> Result<IndicatorReport, ExtractError> {
    let mut report = IndicatorReport::new();

    let growth_ranks = growth.iter().zip((1..=growth.len() as i32).rev());
    let neutral_ranks = neutral.iter().map(|industry| (industry, 0));
    let decline_ranks = decline.iter().zip((1..=decline.len() as i32).map(|r| -r));

    for (industry, rank) in growth_ranks.chain(neutral_ranks).chain(decline_ranks) {
        if report.contains(industry) {
            return Err(ExtractError::DuplicateIndustry(industry.clone()));
        }
        report.push(industry.as_str(), rank);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ism::models::IndustryState;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_neutral_set_excludes_named_industries() {
        let neutral = neutral_industries(&names(&["Textile Mills"]), &names(&["Machinery"]));
        let expected: Vec<String> = INDUSTRIES
            .iter()
            .filter(|i| **i != "Textile Mills" && **i != "Machinery")
            .map(|i| i.to_string())
            .collect();
        assert_eq!(neutral.len(), 16);
        assert_eq!(neutral, expected);
    }

    #[test]
    fn test_end_to_end_paragraph() {
        let report = process_paragraph(
            "reported growth: Textile Mills; Primary Metals. reported decrease: Machinery.",
        )
        .unwrap();

        assert_eq!(report.len(), 18);
        assert_eq!(report.rank_of("Textile Mills"), Some(2));
        assert_eq!(report.rank_of("Primary Metals"), Some(1));
        assert_eq!(report.rank_of("Machinery"), Some(-1));
        for entry in report.entries() {
            if !["Textile Mills", "Primary Metals", "Machinery"].contains(&entry.industry.as_str()) {
                assert_eq!(entry.rank, 0, "{} should be neutral", entry.industry);
            }
        }

        let order: Vec<_> = report.entries().iter().map(|e| e.industry.as_str()).collect();
        assert_eq!(order[0], "Textile Mills");
        assert_eq!(order[1], "Primary Metals");
        assert_eq!(order[2], "Transportation Equipment");
        assert_eq!(order[17], "Machinery");
    }

    #[test]
    fn test_every_industry_exactly_once() {
        let report = process_paragraph(
            "The industries reporting growth in March, in order, are: Wood Products; Paper Products; and Chemical Products. \
             The industries reporting a decrease in March are: Primary Metals; Textile Mills; and Machinery.",
        )
        .unwrap();

        assert_eq!(report.len(), INDUSTRIES.len());
        for industry in INDUSTRIES {
            assert!(report.contains(industry), "missing {}", industry);
        }
        assert_eq!(report.count(IndustryState::Growth), 3);
        assert_eq!(report.count(IndustryState::Neutral), 12);
        assert_eq!(report.count(IndustryState::Contraction), 3);
    }

    #[test]
    fn test_rank_magnitude_follows_mention_order() {
        let report = process_paragraph(
            ": Paper Products; Wood Products; and Machinery. : Printing & Related Support Activities; and Primary Metals",
        )
        .unwrap();

        assert_eq!(report.rank_of("Paper Products"), Some(3));
        assert_eq!(report.rank_of("Machinery"), Some(1));
        assert_eq!(report.rank_of("Printing & Related Support Activities"), Some(-1));
        assert_eq!(report.rank_of("Primary Metals"), Some(-2));
    }

    #[test]
    fn test_single_sentence_is_rejected() {
        let err = process_paragraph("reported growth: Textile Mills").unwrap_err();
        assert!(matches!(err, ExtractError::TooFewSentences(1)));
    }

    #[test]
    fn test_industry_in_both_lists_is_rejected() {
        let err = process_paragraph(": Machinery; Paper Products. : Machinery").unwrap_err();
        assert!(matches!(err, ExtractError::DuplicateIndustry(ref name) if name == "Machinery"));
    }
}
