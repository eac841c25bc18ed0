use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Standard classification scores of one model run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

const METRIC_NAMES: [&str; 4] = ["Accuracy", "Precision", "Recall", "F1 Score"];

impl Scores {
    fn values(&self) -> [f64; 4] {
        [self.accuracy, self.precision, self.recall, self.f1]
    }
}

/// Labelled scores as written in content files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRun {
    pub label: String,
    #[serde(flatten)]
    pub scores: Scores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub metric: String,
    pub values: Vec<f64>,
}

/// A `Metric | value columns...` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<MetricRow>,
}

impl MetricsTable {
    /// One value column per labelled run, e.g. before and after rebalancing.
    pub fn compare(title: impl Into<String>, runs: &[(&str, &Scores)]) -> Self {
        let columns = runs.iter().map(|(label, _)| label.to_string()).collect();
        let rows = METRIC_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| MetricRow {
                metric: name.to_string(),
                values: runs.iter().map(|(_, s)| s.values()[i]).collect(),
            })
            .collect();
        Self {
            title: title.into(),
            columns,
            rows,
        }
    }

    pub fn from_runs(title: impl Into<String>, runs: &[ScoreRun]) -> Self {
        let labelled: Vec<(&str, &Scores)> = runs.iter().map(|r| (r.label.as_str(), &r.scores)).collect();
        Self::compare(title, &labelled)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for row in &self.rows {
            if row.values.len() != self.columns.len() {
                return Err(ConfigurationError::MetricShape {
                    table: self.title.clone(),
                    metric: row.metric.clone(),
                    expected: self.columns.len(),
                    found: row.values.len(),
                });
            }
            if let Some(&value) = row.values.iter().find(|v| !v.is_finite() || !(0.0..=1.0).contains(*v)) {
                return Err(ConfigurationError::MetricOutOfRange {
                    table: self.title.clone(),
                    metric: row.metric.clone(),
                    value,
                });
            }
        }
        Ok(())
    }
}
