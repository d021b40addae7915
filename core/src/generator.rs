//! Record generator: builds the synthetic customer churn dataset.
//!
//! Per record, in order:
//!   1. Identity fields from the locale provider (identity stream)
//!   2. Contract, payment and usage fields (usage stream)
//!   3. Rule-based churn probability (deterministic)
//!   4. Bernoulli churn label (label stream)
//!
//! Records are built in isolation; only `id` depends on loop position.

use crate::{
    config::GeneratorConfig,
    dataset,
    error::GenResult,
    locale::{FakeDataProvider, LocaleProvider},
    plan::profile_for,
    record::CustomerRecord,
    rng::{seed_from_clock, RngBank, StreamRng, StreamSlot},
    scoring::{self, ChurnFeatures},
    types::{round2, DeviceType, PlanType, RecordId},
};
use chrono::{Months, NaiveDate};
use std::path::PathBuf;

/// State code used when the locale has no region helper.
pub const FALLBACK_STATE: &str = "SP";

pub const AGE_RANGE: (u32, u32) = (18, 80);
pub const CONTRACT_MONTHS_RANGE: (u32, u32) = (1, 36);
pub const MAX_PAYMENT_DELAYS: u32 = 6;
pub const SIGNUP_WINDOW_MONTHS: u32 = 36;

/// Output of one generation pass, before anything touches disk.
#[derive(Debug, Clone)]
pub struct GenerationRun {
    pub seed: u64,
    pub records: Vec<CustomerRecord>,
    /// Records whose state came from `FALLBACK_STATE`.
    pub state_fallbacks: usize,
}

/// Result of `run`: what was generated and where it went.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run: GenerationRun,
    pub output_path: PathBuf,
}

struct Streams {
    identity: StreamRng,
    usage: StreamRng,
    label: StreamRng,
}

impl Streams {
    fn new(bank: &RngBank) -> Self {
        Self {
            identity: bank.for_stream(StreamSlot::Identity),
            usage: bank.for_stream(StreamSlot::Usage),
            label: bank.for_stream(StreamSlot::Label),
        }
    }
}

pub struct RecordGenerator {
    config: GeneratorConfig,
    provider: Box<dyn FakeDataProvider>,
    signup_start: NaiveDate,
    signup_end: NaiveDate,
}

impl RecordGenerator {
    /// Validate the config and build a generator over its locale.
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        let provider = LocaleProvider::new(config.resolved_locale()?);
        Self::with_provider(config, Box::new(provider))
    }

    /// Build a generator with a caller-supplied identity provider.
    pub fn with_provider(
        config: GeneratorConfig,
        provider: Box<dyn FakeDataProvider>,
    ) -> GenResult<Self> {
        config.validate()?;
        let signup_end = config.resolved_reference_date();
        let signup_start = signup_end
            .checked_sub_months(Months::new(SIGNUP_WINDOW_MONTHS))
            .unwrap_or(NaiveDate::MIN);
        Ok(Self { config, provider, signup_start, signup_end })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate with the configured seed, or a clock-derived one.
    pub fn generate(&self) -> GenerationRun {
        let seed = match self.config.random_seed {
            Some(seed) => seed,
            None => {
                let seed = seed_from_clock();
                log::info!("no random_seed configured; using {seed} (pass it back to replay this run)");
                seed
            }
        };
        self.generate_with_seed(seed)
    }

    pub fn generate_with_seed(&self, seed: u64) -> GenerationRun {
        let n = self.config.record_count;
        log::info!(
            "generating {n} records: seed={seed} locale={} signup window {}..={}",
            self.config.locale, self.signup_start, self.signup_end
        );

        let bank = RngBank::new(seed);
        let mut streams = Streams::new(&bank);
        let mut records = Vec::with_capacity(n);
        let mut state_fallbacks = 0usize;

        for i in 1..=n {
            let (record, fell_back) = self.generate_record(i as RecordId, &mut streams);
            if fell_back {
                state_fallbacks += 1;
            }
            records.push(record);
        }

        if state_fallbacks > 0 {
            log::warn!(
                "locale {} has no region helper; state set to '{FALLBACK_STATE}' for {state_fallbacks} records",
                self.config.locale
            );
        }
        let churned = records.iter().filter(|r| r.churned()).count();
        log::info!("generated {} records, {churned} churned", records.len());

        GenerationRun { seed, records, state_fallbacks }
    }

    fn generate_record(&self, id: RecordId, s: &mut Streams) -> (CustomerRecord, bool) {
        // ── Identity ────────────────────────────────────────────────
        let name = self.provider.full_name(&mut s.identity);
        let age = s.identity.int_inclusive(AGE_RANGE.0, AGE_RANGE.1);
        let city = self.provider.city(&mut s.identity).to_string();
        let signup_date = self
            .provider
            .date_between(&mut s.identity, self.signup_start, self.signup_end);
        let (state, fell_back) = match self.provider.state_code(&mut s.identity) {
            Some(code) => (code.to_string(), false),
            None => (FALLBACK_STATE.to_string(), true),
        };

        // ── Contract & payments ────────────────────────────────────
        let contract_months = s.usage.int_inclusive(CONTRACT_MONTHS_RANGE.0, CONTRACT_MONTHS_RANGE.1);
        let tenure_months = s.usage.int_inclusive(1, contract_months);

        let payment_delays = s.usage.int_inclusive(0, MAX_PAYMENT_DELAYS);
        let late_payments_last_6m = s.usage.int_inclusive(0, payment_delays);

        let noisy_ratio = 1.0 - payment_delays as f64 * 0.1 + s.usage.uniform(-0.1, 0.1);
        let on_time_payment_ratio = round2(noisy_ratio.clamp(0.0, 1.0));

        // ── Plan & usage ───────────────────────────────────────────
        let plan_type = PlanType::ALL[s.usage.weighted_index(&self.config.plan_weights.as_array())];
        let device_type = *s.usage.pick(&DeviceType::ALL);

        let profile = profile_for(plan_type);
        let monthly_usage = round2(s.usage.uniform(profile.usage_min, profile.usage_max));
        let logins_per_month = s.usage.int_inclusive(profile.logins_min, profile.logins_max);

        // ── Churn ──────────────────────────────────────────────────
        let churn_score = scoring::score(&ChurnFeatures {
            contract_months,
            payment_delays,
            late_payments_last_6m,
            on_time_payment_ratio,
            monthly_usage,
            logins_per_month,
            plan_type,
        });
        let churn = u8::from(s.label.chance(churn_score.probability));

        let record = CustomerRecord {
            id,
            name,
            city,
            state,
            age,
            signup_date,
            contract_months,
            tenure_months,
            payment_delays,
            late_payments_last_6m,
            on_time_payment_ratio,
            plan_type,
            device_type,
            monthly_usage,
            logins_per_month,
            churn_probability: churn_score.stored_probability(),
            churn,
        };
        (record, fell_back)
    }
}

/// Generate the full dataset and persist it at the configured path.
/// Nothing is written unless generation completes.
pub fn run(config: GeneratorConfig) -> GenResult<RunReport> {
    let generator = RecordGenerator::new(config)?;
    let run = generator.generate();
    let output_path = generator.config().output_path.clone();
    dataset::write_csv(&output_path, &run.records)?;
    Ok(RunReport { run, output_path })
}
