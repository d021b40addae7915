use crate::{
    error::{GenError, GenResult},
    generator::SIGNUP_WINDOW_MONTHS,
    locale::Locale,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_RECORD_COUNT: usize = 10_000;
pub const DEFAULT_OUTPUT_PATH: &str = "data/churn_customers_dataset.csv";
pub const DEFAULT_LOCALE: &str = "pt_BR";

/// Relative weights for the plan-type categorical draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanWeights {
    pub basic: f64,
    pub standard: f64,
    pub premium: f64,
}

impl Default for PlanWeights {
    fn default() -> Self {
        Self { basic: 0.5, standard: 0.3, premium: 0.2 }
    }
}

impl PlanWeights {
    /// Weights in `PlanType::ALL` order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.basic, self.standard, self.premium]
    }
}

/// Internal file shape for a generator config JSON.
/// Every key is optional; missing keys keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    record_count: Option<usize>,
    random_seed: Option<u64>,
    output_path: Option<PathBuf>,
    locale: Option<String>,
    reference_date: Option<NaiveDate>,
    plan_weights: Option<PlanWeights>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorConfig {
    pub record_count: usize,
    pub random_seed: Option<u64>,
    pub output_path: PathBuf,
    pub locale: String,
    /// Upper bound of the signup-date window. `None` means today.
    pub reference_date: Option<NaiveDate>,
    pub plan_weights: PlanWeights,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            random_seed: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            locale: DEFAULT_LOCALE.into(),
            reference_date: None,
            plan_weights: PlanWeights::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load overrides from a JSON file on top of the defaults.
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        let file: ConfigFile = serde_json::from_str(&content)?;

        let defaults = Self::default();
        let config = Self {
            record_count: file.record_count.unwrap_or(defaults.record_count),
            random_seed: file.random_seed,
            output_path: file.output_path.unwrap_or(defaults.output_path),
            locale: file.locale.unwrap_or(defaults.locale),
            reference_date: file.reference_date,
            plan_weights: file.plan_weights.unwrap_or(defaults.plan_weights),
        };
        log::info!("loaded generator config from {}", path.display());
        Ok(config)
    }

    /// Config with pinned seed and date for use in tests.
    pub fn default_test() -> Self {
        Self {
            record_count: 500,
            random_seed: Some(42),
            output_path: PathBuf::from("target/test-data/churn_customers_dataset.csv"),
            locale: DEFAULT_LOCALE.into(),
            reference_date: NaiveDate::from_ymd_opt(2025, 6, 30),
            plan_weights: PlanWeights::default(),
        }
    }

    /// Reject configurations that cannot produce a valid dataset.
    /// Runs before any generation work.
    pub fn validate(&self) -> GenResult<()> {
        if self.record_count == 0 {
            return Err(GenError::config("record_count must be at least 1"));
        }
        Locale::from_tag(&self.locale)?;

        let weights = self.plan_weights.as_array();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(GenError::config(format!(
                "plan_weights must be finite and non-negative, got {weights:?}"
            )));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(GenError::config("plan_weights must not all be zero"));
        }

        let reference = self.resolved_reference_date();
        let today = chrono::Local::now().date_naive();
        if reference > today {
            return Err(GenError::config(format!(
                "reference_date {reference} is after today ({today}); signup dates must not be in the future"
            )));
        }
        if reference
            .checked_sub_months(chrono::Months::new(SIGNUP_WINDOW_MONTHS))
            .is_none()
        {
            return Err(GenError::config(format!(
                "reference_date {reference} leaves no {SIGNUP_WINDOW_MONTHS}-month signup window"
            )));
        }
        Ok(())
    }

    pub fn resolved_locale(&self) -> GenResult<Locale> {
        Locale::from_tag(&self.locale)
    }

    pub fn resolved_reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
