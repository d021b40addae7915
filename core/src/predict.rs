//! Heuristic single-customer churn predictor.
//!
//! Independent of the dataset's rule table: four banded feature scores
//! are summed, clamped to [MIN_SCORE, MAX_SCORE] and rescaled onto [0, 1].

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};

/// Score of the most loyal possible customer.
pub const MIN_SCORE: f64 = -0.25;
/// Score of the riskiest possible customer.
pub const MAX_SCORE: f64 = 0.95;
pub const DECISION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionInput {
    pub contract_months: u32,
    pub payment_delays: u32,
    pub monthly_usage: f64,
    pub plan_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub id: u64,
    pub prediction: String,
    pub probability: f64,
}

impl Prediction {
    pub fn is_churn(&self) -> bool {
        self.probability >= DECISION_THRESHOLD
    }
}

pub fn contract_months_score(contract_months: u32) -> f64 {
    match contract_months {
        0..=2 => 0.25,
        3..=5 => 0.15,
        6..=11 => 0.05,
        _ => -0.05,
    }
}

pub fn payment_delays_score(payment_delays: u32) -> f64 {
    match payment_delays {
        0 => -0.05,
        1 => 0.10,
        2..=3 => 0.20,
        _ => 0.30,
    }
}

pub fn monthly_usage_score(monthly_usage: f64) -> f64 {
    if monthly_usage < 5.0 {
        0.25
    } else if monthly_usage < 10.0 {
        0.10
    } else if monthly_usage < 30.0 {
        0.0
    } else {
        -0.10
    }
}

/// Unknown plans are neutral.
pub fn plan_type_score(plan_type: &str) -> f64 {
    match plan_type.trim().to_ascii_uppercase().as_str() {
        "BASIC" => 0.15,
        "STANDARD" => 0.05,
        "PREMIUM" => -0.05,
        _ => 0.0,
    }
}

/// Map a raw score onto [0, 1], rounded to 4 decimals.
pub fn normalize_to_probability(raw_score: f64) -> f64 {
    let clamped = raw_score.clamp(MIN_SCORE, MAX_SCORE);
    let probability = ((clamped - MIN_SCORE) / (MAX_SCORE - MIN_SCORE)).clamp(0.0, 1.0);
    (probability * 10_000.0).round() / 10_000.0
}

/// Issues predictions with sequential ids starting at 1.
#[derive(Debug, Default)]
pub struct HeuristicPredictor {
    issued: u64,
}

impl HeuristicPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predict(&mut self, input: &PredictionInput) -> GenResult<Prediction> {
        if !input.monthly_usage.is_finite() || input.monthly_usage < 0.0 {
            return Err(GenError::input(format!(
                "monthly_usage must be zero or positive, got {}",
                input.monthly_usage
            )));
        }
        if input.plan_type.trim().is_empty() {
            return Err(GenError::input("plan_type cannot be blank"));
        }

        let raw = contract_months_score(input.contract_months)
            + payment_delays_score(input.payment_delays)
            + monthly_usage_score(input.monthly_usage)
            + plan_type_score(&input.plan_type);
        let probability = normalize_to_probability(raw);

        self.issued += 1;
        let label = if probability >= DECISION_THRESHOLD { "Churn" } else { "No Churn" };
        log::debug!("prediction {}: raw={raw:.2} p={probability}", self.issued);

        Ok(Prediction {
            id: self.issued,
            prediction: label.into(),
            probability,
        })
    }
}
