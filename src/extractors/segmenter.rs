// src/extractors/segmenter.rs

// --- Imports ---
use crate::extractors::paragraph::process_paragraph;
use crate::ism::models::{FullReport, Indicator, INDICATORS};
use crate::utils::error::ExtractError;

// --- Constants ---
// Sentences in the report end at a line break, which is how paragraphs are told apart.
const SENTENCE_BREAK: &str = ".\n";

/// How to pick the industry paragraph out of an indicator's section.
///
/// A section runs from one indicator heading to the next and is split on
/// [`SENTENCE_BREAK`]. The industry paragraph is the last complete piece before
/// whatever trails the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphRule {
    /// Skip the heading fragment that follows the last sentence break.
    Standard,
    /// Also skip the footer sentence that precedes the terminal heading.
    SkipTrailingFooter,
}

impl ParagraphRule {
    fn trailing_pieces(&self) -> usize {
        match self {
            ParagraphRule::Standard => 1,
            ParagraphRule::SkipTrailingFooter => 2,
        }
    }

    /// Returns the paragraph within `section`, if the section is long enough.
    pub fn select<'a>(&self, section: &'a str) -> Option<&'a str> {
        let pieces: Vec<&str> = section.split(SENTENCE_BREAK).collect();
        let skip = self.trailing_pieces();
        pieces.len().checked_sub(skip + 1).map(|index| pieces[index])
    }
}

// --- Main Segmenter Structure ---
/// Walks the report once, heading by heading, and ranks each indicator's paragraph.
pub struct ReportSegmenter {
    indicators: Vec<Indicator>,
}

impl Default for ReportSegmenter {
    fn default() -> Self {
        Self::new(INDICATORS.to_vec())
    }
}

impl ReportSegmenter {
    /// The last indicator only marks where the previous section ends.
    pub fn new(indicators: Vec<Indicator>) -> Self {
        Self { indicators }
    }

    /// Isolates the industry paragraph of every indicator except the terminal one.
    pub fn paragraphs<'a>(&self, text: &'a str) -> Result<Vec<(Indicator, &'a str)>, ExtractError> {
        let Some((first, rest)) = self.indicators.split_first() else {
            return Ok(Vec::new());
        };

        let mut remaining = after_label(text, first)?;
        let mut current = *first;
        let mut paragraphs = Vec::with_capacity(rest.len());

        for (position, next) in rest.iter().enumerate() {
            let (section, after) = remaining
                .split_once(next.label())
                .ok_or_else(|| ExtractError::IndicatorNotFound(next.name().to_string()))?;

            let rule = if position + 1 == rest.len() {
                ParagraphRule::SkipTrailingFooter
            } else {
                ParagraphRule::Standard
            };

            let paragraph = rule.select(section).ok_or_else(|| ExtractError::ParagraphNotFound {
                indicator: current.name().to_string(),
                pieces: section.split(SENTENCE_BREAK).count(),
                needed: rule.trailing_pieces() + 1,
            })?;

            tracing::debug!(
                "Section {} ends at {}: {} bytes, paragraph {} bytes",
                current.name(),
                next.name(),
                section.len(),
                paragraph.len()
            );

            paragraphs.push((current, paragraph));
            remaining = after;
            current = *next;
        }

        Ok(paragraphs)
    }

    /// Segments the document text and ranks industries for each indicator.
    pub fn extract(&self, text: &str) -> Result<FullReport, ExtractError> {
        let mut report = FullReport::new();

        for (indicator, paragraph) in self.paragraphs(text)? {
            let ranked = process_paragraph(paragraph)?;
            tracing::info!("Ranked {} industries for {}", ranked.len(), indicator.name());
            report.push(indicator, ranked);
        }

        Ok(report)
    }
}

fn after_label<'a>(text: &'a str, indicator: &Indicator) -> Result<&'a str, ExtractError> {
    text.split_once(indicator.label())
        .map(|(_, after)| after)
        .ok_or_else(|| ExtractError::IndicatorNotFound(indicator.name().to_string()))
}
