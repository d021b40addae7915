//! Aggregate statistics over a generated dataset.

use crate::{
    record::CustomerRecord,
    types::{DeviceType, PlanType},
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub records: usize,
    pub churned: usize,
    pub churn_rate: f64,
    pub mean_churn_probability: f64,
    pub mean_monthly_usage: f64,
    pub plan_mix: BTreeMap<PlanType, usize>,
    pub device_mix: BTreeMap<DeviceType, usize>,
}

impl DatasetSummary {
    pub fn from_records(records: &[CustomerRecord]) -> Self {
        let n = records.len();
        let churned = records.iter().filter(|r| r.churned()).count();

        let mut plan_mix: BTreeMap<PlanType, usize> =
            PlanType::ALL.iter().map(|p| (*p, 0)).collect();
        let mut device_mix: BTreeMap<DeviceType, usize> =
            DeviceType::ALL.iter().map(|d| (*d, 0)).collect();
        let mut prob_sum = 0.0;
        let mut usage_sum = 0.0;

        for r in records {
            *plan_mix.entry(r.plan_type).or_default() += 1;
            *device_mix.entry(r.device_type).or_default() += 1;
            prob_sum += r.churn_probability;
            usage_sum += r.monthly_usage;
        }

        let mean = |sum: f64| if n == 0 { 0.0 } else { sum / n as f64 };
        Self {
            records: n,
            churned,
            churn_rate: mean(churned as f64),
            mean_churn_probability: mean(prob_sum),
            mean_monthly_usage: mean(usage_sum),
            plan_mix,
            device_mix,
        }
    }

    /// Fraction of records on the given plan.
    pub fn plan_share(&self, plan: PlanType) -> f64 {
        if self.records == 0 {
            return 0.0;
        }
        self.plan_mix.get(&plan).copied().unwrap_or(0) as f64 / self.records as f64
    }
}
