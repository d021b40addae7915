use crate::{
    plan::profile_for,
    scoring::ChurnFeatures,
    types::{DeviceType, PlanType, RecordId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One generated customer row. Field order is the CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRecord {
    pub id: RecordId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub age: u32,
    pub signup_date: NaiveDate,
    pub contract_months: u32,
    pub tenure_months: u32,
    pub payment_delays: u32,
    pub late_payments_last_6m: u32,
    pub on_time_payment_ratio: f64,
    pub plan_type: PlanType,
    pub device_type: DeviceType,
    pub monthly_usage: f64,
    pub logins_per_month: u32,
    pub churn_probability: f64,
    pub churn: u8,
}

impl CustomerRecord {
    pub fn features(&self) -> ChurnFeatures {
        ChurnFeatures {
            contract_months: self.contract_months,
            payment_delays: self.payment_delays,
            late_payments_last_6m: self.late_payments_last_6m,
            on_time_payment_ratio: self.on_time_payment_ratio,
            monthly_usage: self.monthly_usage,
            logins_per_month: self.logins_per_month,
            plan_type: self.plan_type,
        }
    }

    pub fn churned(&self) -> bool {
        self.churn == 1
    }

    /// Every field-level invariant this record breaks. Empty means valid.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        let id = self.id;

        if !(18..=80).contains(&self.age) {
            out.push(format!("record {id}: age {} outside 18..=80", self.age));
        }
        if !(1..=36).contains(&self.contract_months) {
            out.push(format!("record {id}: contract_months {} outside 1..=36", self.contract_months));
        }
        if self.tenure_months < 1 || self.tenure_months > self.contract_months {
            out.push(format!(
                "record {id}: tenure_months {} outside 1..={}",
                self.tenure_months, self.contract_months
            ));
        }
        if self.payment_delays > 6 {
            out.push(format!("record {id}: payment_delays {} above 6", self.payment_delays));
        }
        if self.late_payments_last_6m > self.payment_delays {
            out.push(format!(
                "record {id}: late_payments_last_6m {} above payment_delays {}",
                self.late_payments_last_6m, self.payment_delays
            ));
        }
        if !(0.0..=1.0).contains(&self.on_time_payment_ratio) {
            out.push(format!("record {id}: on_time_payment_ratio {} outside [0,1]", self.on_time_payment_ratio));
        }
        if !(0.0..=1.0).contains(&self.churn_probability) {
            out.push(format!("record {id}: churn_probability {} outside [0,1]", self.churn_probability));
        }
        if self.churn > 1 {
            out.push(format!("record {id}: churn {} not 0 or 1", self.churn));
        }

        let profile = profile_for(self.plan_type);
        if !profile.usage_in_range(self.monthly_usage) {
            out.push(format!(
                "record {id}: monthly_usage {} outside [{}, {}] for {}",
                self.monthly_usage, profile.usage_min, profile.usage_max, self.plan_type
            ));
        }
        if !profile.logins_in_range(self.logins_per_month) {
            out.push(format!(
                "record {id}: logins_per_month {} outside {}..={} for {}",
                self.logins_per_month, profile.logins_min, profile.logins_max, self.plan_type
            ));
        }
        out
    }
}

/// Ids must run 1..=N with no gaps or duplicates, in order.
pub fn ids_are_contiguous(records: &[CustomerRecord]) -> bool {
    records
        .iter()
        .enumerate()
        .all(|(i, r)| r.id == i as RecordId + 1)
}
