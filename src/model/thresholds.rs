use serde::Serialize;

#[derive(Debug, Clone)]
pub struct BucketThresholds {
    pub high_min: f64,
    pub moderate_min: f64,
    pub percent_min: f64,
    pub percent_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bucket {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Bucket {
    pub fn color(self) -> &'static str {
        match self {
            Bucket::High => "green",
            Bucket::Moderate => "orange",
            Bucket::Low => "red",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Bucket::High => Severity::Success,
            Bucket::Moderate => Severity::Warning,
            Bucket::Low => Severity::Error,
        }
    }

    /// `pct` is the already formatted percentage, without the `%` sign.
    pub fn message(self, pct: &str) -> String {
        match self {
            Bucket::High => format!("Possible! You have a strong chance with {pct}%."),
            Bucket::Moderate => format!(
                "Moderate chance ({pct}%). Improve SOP, LOR, or Research for better results."
            ),
            Bucket::Low => format!("Not Possible. Only {pct}%. Work on improving your profile."),
        }
    }
}

impl Severity {
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl BucketThresholds {
    pub fn default_v1() -> Self {
        Self {
            high_min: 70.0,
            moderate_min: 50.0,
            percent_min: 0.0,
            percent_max: 100.0,
        }
    }
}
