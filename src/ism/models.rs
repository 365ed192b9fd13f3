// src/ism/models.rs
use serde::Serialize;

/// Every manufacturing industry tracked by the survey, in reference order.
/// Neutral industries are listed in this order on every sheet.
pub const INDUSTRIES: [&str; 18] = [
    "Textile Mills",
    "Primary Metals",
    "Transportation Equipment",
    "Apparel, Leather & Allied Products",
    "Petroleum & Coal Products",
    "Printing & Related Support Activities",
    "Machinery",
    "Computer & Electronic Products",
    "Miscellaneous Manufacturing",
    "Electrical Equipment, Appliances & Components",
    "Plastics & Rubber Products",
    "Paper Products",
    "Furniture & Related Products",
    "Chemical Products",
    "Food, Beverage & Tobacco Products",
    "Fabricated Metal Products",
    "Nonmetallic Mineral Products",
    "Wood Products",
];

/// Indicator headings in the order the report prints them.
/// The document must contain all of them, in this order.
pub const INDICATORS: [Indicator; 11] = [
    Indicator::new("NEW ORDERS"),
    Indicator::new("PRODUCTION"),
    Indicator::new("EMPLOYMENT"),
    Indicator::new("SUPPLIER DELIVERIES"),
    // Matched together with its line break; the bare word also sits inside CUSTOMERS' INVENTORIES.
    Indicator::new("INVENTORIES\n"),
    Indicator::new("CUSTOMERS' INVENTORIES"),
    Indicator::new("PRICES"),
    Indicator::new("BACKLOG OF ORDERS"),
    Indicator::new("NEW EXPORT ORDERS"),
    Indicator::new("IMPORTS"),
    Indicator::new("BUYING POLICY"),
];

/// Returns true if `name` is one of the reference industries.
pub fn is_known_industry(name: &str) -> bool {
    INDUSTRIES.contains(&name)
}

/// One survey question heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indicator {
    label: &'static str,
}

impl Indicator {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// The exact token searched for in the document text.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Display name, also used as the sheet name.
    pub fn name(&self) -> &'static str {
        self.label.trim()
    }
}

/// Direction an industry reported for one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryState {
    Growth,
    Neutral,
    Contraction,
}

impl IndustryState {
    pub fn from_rank(rank: i32) -> Self {
        match rank {
            r if r > 0 => IndustryState::Growth,
            0 => IndustryState::Neutral,
            _ => IndustryState::Contraction,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndustryState::Growth => "Growth",
            IndustryState::Neutral => "Neutral",
            IndustryState::Contraction => "Contraction",
        }
    }
}

/// An industry together with its signed, mention-order rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryRank {
    pub industry: String,
    pub rank: i32,
}

impl IndustryRank {
    pub fn state(&self) -> IndustryState {
        IndustryState::from_rank(self.rank)
    }
}

/// Ranked industries for a single indicator.
/// Entry order is significant: growth, then neutral, then decline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndicatorReport {
    entries: Vec<IndustryRank>,
}

impl IndicatorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, industry: impl Into<String>, rank: i32) {
        self.entries.push(IndustryRank {
            industry: industry.into(),
            rank,
        });
    }

    pub fn entries(&self) -> &[IndustryRank] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, industry: &str) -> bool {
        self.entries.iter().any(|e| e.industry == industry)
    }

    pub fn rank_of(&self, industry: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.industry == industry)
            .map(|e| e.rank)
    }

    pub fn count(&self, state: IndustryState) -> usize {
        self.entries.iter().filter(|e| e.state() == state).count()
    }
}

/// Reports for every indicator, kept in document order.
#[derive(Debug, Clone, Default)]
pub struct FullReport {
    sections: Vec<(Indicator, IndicatorReport)>,
}

impl FullReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, indicator: Indicator, report: IndicatorReport) {
        self.sections.push((indicator, report));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Indicator, &IndicatorReport)> {
        self.sections.iter().map(|(i, r)| (i, r))
    }

    pub fn get(&self, name: &str) -> Option<&IndicatorReport> {
        self.sections
            .iter()
            .find(|(i, _)| i.name() == name)
            .map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
