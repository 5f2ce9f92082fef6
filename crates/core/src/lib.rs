use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column order expected in an uploaded task-tracking CSV.
pub const CSV_HEADERS: [&str; 15] = [
    "key",
    "created_date",
    "started_date",
    "completed_date",
    "active_duration",
    "total_duration",
    "ios",
    "android",
    "tvos",
    "roku",
    "xbox",
    "tizen",
    "design_changes",
    "config_changes",
    "store_changes",
];

/// Distribution platforms a task can target, in flag-column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Tvos,
    Roku,
    Xbox,
    Tizen,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Ios,
        Platform::Android,
        Platform::Tvos,
        Platform::Roku,
        Platform::Xbox,
        Platform::Tizen,
    ];

    /// Label used when no platform flag is set on a task.
    pub const OTHER: &'static str = "Other";

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Tvos => "tvos",
            Platform::Roku => "roku",
            Platform::Xbox => "xbox",
            Platform::Tizen => "tizen",
        }
    }
}

/// Per-task timing and activity metrics derived from one CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskMetrics {
    pub days_to_start: i64,
    pub days_to_complete: Option<i64>,
    pub active_duration: Option<f64>,
    pub total_duration: Option<f64>,
    pub platforms: Vec<String>,
    pub total_changes: i64,
}

/// Derived table keyed by task identifier. Later rows with a repeated key
/// overwrite earlier ones.
pub type MetricsTable = BTreeMap<String, TaskMetrics>;

pub const SURVEY_QUESTION_COUNT: usize = 4;

pub const SURVEY_QUESTIONS: [&str; SURVEY_QUESTION_COUNT] = [
    "How long did it take you to master the tool (Jira)?",
    "How often did you use tutorials/onboarding materials?",
    "What is your satisfaction level?",
    "How well does the tool's (Jira) usability align with Agile principles?",
];

pub const SURVEY_OPTIONS: [[&str; 5]; SURVEY_QUESTION_COUNT] = [
    ["<1 day", "1-3 days", "1 week", "2+ weeks", "Still learning"],
    ["Never", "Rarely", "Sometimes", "Often", "Always"],
    [
        "Very dissatisfied",
        "Dissatisfied",
        "Neutral",
        "Satisfied",
        "Very satisfied",
    ],
    ["Not at all", "Slightly", "Moderately", "Well", "Extremely well"],
];

/// One respondent's answers to the four survey questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswer {
    pub key: String,
    pub answers: [String; SURVEY_QUESTION_COUNT],
}

/// Histogram payload for a single metric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bin_edges: Vec<f64>,
    pub counts: Vec<u64>,
}

/// Five-number summary for one platform's days-to-start distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub platform: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub sample_count: usize,
}

/// Pearson correlation matrix over the derived metric columns. Cells are
/// `None` when fewer than two pairwise-complete observations exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// Option counts for one survey question's pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChart {
    pub question: String,
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}
