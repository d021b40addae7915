//! Rule-based churn probability.
//!
//! The probability is the sum of the weights of every rule whose
//! predicate holds, clamped to [0, 1]. Rules are evaluated in table
//! order so contributions can be reported in a stable sequence.

use crate::types::{round2, PlanType};
use serde::Serialize;

/// The sampled fields the churn rules read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChurnFeatures {
    pub contract_months: u32,
    pub payment_delays: u32,
    pub late_payments_last_6m: u32,
    pub on_time_payment_ratio: f64,
    pub monthly_usage: f64,
    pub logins_per_month: u32,
    pub plan_type: PlanType,
}

pub struct ChurnRule {
    pub name: &'static str,
    pub weight: f64,
    pub applies: fn(&ChurnFeatures) -> bool,
}

pub const CHURN_RULES: [ChurnRule; 7] = [
    ChurnRule {
        name: "short_contract",
        weight: 0.20,
        applies: |f| f.contract_months < 6,
    },
    ChurnRule {
        name: "payment_delays",
        weight: 0.30,
        applies: |f| f.payment_delays > 2,
    },
    ChurnRule {
        name: "low_usage",
        weight: 0.25,
        applies: |f| f.monthly_usage < 30.0,
    },
    ChurnRule {
        name: "few_logins",
        weight: 0.20,
        applies: |f| f.logins_per_month < 5,
    },
    ChurnRule {
        name: "basic_plan",
        weight: 0.15,
        applies: |f| f.plan_type == PlanType::Basic,
    },
    ChurnRule {
        name: "recent_late_payments",
        weight: 0.10,
        applies: |f| f.late_payments_last_6m > 1,
    },
    ChurnRule {
        name: "poor_payment_ratio",
        weight: 0.30,
        applies: |f| f.on_time_payment_ratio < 0.5,
    },
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChurnScore {
    /// Clamped, unrounded. This is the Bernoulli parameter.
    pub probability: f64,
    pub fired_rules: Vec<&'static str>,
}

impl ChurnScore {
    /// Value persisted in the `churn_probability` column.
    pub fn stored_probability(&self) -> f64 {
        round2(self.probability)
    }
}

pub fn score(features: &ChurnFeatures) -> ChurnScore {
    let mut total = 0.0;
    let mut fired_rules = Vec::new();
    for rule in &CHURN_RULES {
        if (rule.applies)(features) {
            total += rule.weight;
            fired_rules.push(rule.name);
        }
    }
    ChurnScore {
        probability: total.clamp(0.0, 1.0),
        fired_rules,
    }
}

pub fn churn_probability(features: &ChurnFeatures) -> f64 {
    score(features).probability
}
