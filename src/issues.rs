//! Expandable municipal-issues panel
//!
//! The second informational page: a static list of policy issues, each
//! expandable to stats, an embedded chart series, and party positions.
//! Selection is single-choice; opening one issue closes any other.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One labeled headline statistic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// A year/value point in an embedded chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub year: u16,
    pub value: f64,
}

/// Data series handed to the host's charting capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Label for the plotted value
    pub label: String,
    pub points: Vec<ChartPoint>,
}

/// One party's stance on an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyPosition {
    pub party: String,
    pub quote: String,
    pub speaker: String,
    pub plans: Vec<String>,
}

/// One expandable policy issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub stats: Vec<Stat>,
    pub chart: ChartSeries,
    pub parties: Vec<PartyPosition>,
}

/// The issues page: static content plus the single-selection toggle
pub struct IssuePanel {
    issues: Vec<Issue>,
    selected: Option<String>,
}

impl IssuePanel {
    /// Build a panel over the given issues, nothing selected
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            selected: None,
        }
    }

    /// The static issue list
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Id of the currently expanded issue, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the given issue is expanded
    pub fn is_expanded(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Toggle an issue: expand it, or collapse it when already expanded.
    /// Expanding one issue collapses any other.
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            debug!(%id, "issue collapsed");
            self.selected = None;
        } else {
            debug!(%id, "issue expanded");
            self.selected = Some(id.to_string());
        }
    }
}

/// The Toronto issues content with the rent chart series
pub fn default_issues() -> Vec<Issue> {
    let plans = |items: &[&str]| items.iter().map(|p| p.to_string()).collect::<Vec<_>>();

    vec![Issue {
        id: "housing".to_string(),
        title: "Housing Crisis in Toronto".to_string(),
        stats: vec![
            Stat {
                label: "Average 1BR Rent".to_string(),
                value: "$3,100".to_string(),
            },
            Stat {
                label: "Vacancy Rate".to_string(),
                value: "1.2%".to_string(),
            },
            Stat {
                label: "Avg. Income Spent on Housing".to_string(),
                value: "48%".to_string(),
            },
        ],
        chart: ChartSeries {
            label: "rent".to_string(),
            points: vec![
                ChartPoint { year: 2019, value: 2200.0 },
                ChartPoint { year: 2020, value: 2150.0 },
                ChartPoint { year: 2021, value: 2300.0 },
                ChartPoint { year: 2022, value: 2500.0 },
                ChartPoint { year: 2023, value: 2800.0 },
                ChartPoint { year: 2024, value: 3100.0 },
            ],
        },
        parties: vec![
            PartyPosition {
                party: "conservative".to_string(),
                quote: "\"We will protect your property investments. We won't let them \
                        crash to appease the radical few.\""
                    .to_string(),
                speaker: "CPC Leader to Real Estate Investment Forum".to_string(),
                plans: plans(&[
                    "Sell public land to private developers",
                    "Focus on single-family homes",
                    "Remove 'red tape' from development process",
                ]),
            },
            PartyPosition {
                party: "liberal".to_string(),
                quote: "Your housing investments are safe. We're taking a balanced approach."
                    .to_string(),
                speaker: "LPC Leader at Toronto Economic Club".to_string(),
                plans: plans(&[
                    "First-time home buyer incentive",
                    "Foreign buyers ban",
                    "Housing accelerator fund",
                ]),
            },
            PartyPosition {
                party: "ndp".to_string(),
                quote: "Toronto shouldn't only be for the one percent. Everyone deserves \
                        an affordable home."
                    .to_string(),
                speaker: "NDP Leader at Community Housing Rally".to_string(),
                plans: plans(&[
                    "Introduce Homes Ontario program",
                    "Legalize fourplexes citywide",
                    "Restore full rent control",
                    "Fund non-profit and co-op housing",
                ]),
            },
        ],
    }]
}
