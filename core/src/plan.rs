//! Plan-dependent usage profiles.
//!
//! Each plan maps to one row of the lookup table below. The generator
//! draws usage and logins from the row for the record's plan.

use crate::types::PlanType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanProfile {
    pub plan: PlanType,
    pub usage_min: f64,
    pub usage_max: f64,
    pub logins_min: u32,
    pub logins_max: u32,
}

impl PlanProfile {
    pub fn usage_in_range(&self, usage: f64) -> bool {
        usage >= self.usage_min && usage <= self.usage_max
    }

    pub fn logins_in_range(&self, logins: u32) -> bool {
        logins >= self.logins_min && logins <= self.logins_max
    }
}

/// Indexed in `PlanType::ALL` order.
const PLAN_PROFILES: [PlanProfile; 3] = [
    PlanProfile {
        plan: PlanType::Basic,
        usage_min: 0.0,
        usage_max: 120.0,
        logins_min: 2,
        logins_max: 20,
    },
    PlanProfile {
        plan: PlanType::Standard,
        usage_min: 50.0,
        usage_max: 220.0,
        logins_min: 5,
        logins_max: 30,
    },
    PlanProfile {
        plan: PlanType::Premium,
        usage_min: 100.0,
        usage_max: 300.0,
        logins_min: 10,
        logins_max: 40,
    },
];

pub fn profile_for(plan: PlanType) -> &'static PlanProfile {
    match plan {
        PlanType::Basic => &PLAN_PROFILES[0],
        PlanType::Standard => &PLAN_PROFILES[1],
        PlanType::Premium => &PLAN_PROFILES[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_line_up_with_plans() {
        for plan in PlanType::ALL {
            assert_eq!(profile_for(plan).plan, plan);
        }
    }

    #[test]
    fn premium_bounds() {
        let p = profile_for(PlanType::Premium);
        assert!(p.usage_in_range(100.0));
        assert!(p.usage_in_range(300.0));
        assert!(!p.usage_in_range(99.99));
        assert!(!p.logins_in_range(41));
    }
}
