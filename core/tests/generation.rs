//! Record generation invariants and distribution tests.

use churn_synth_core::{
    config::{GeneratorConfig, PlanWeights},
    generator::{RecordGenerator, FALLBACK_STATE},
    locale::FakeDataProvider,
    rng::StreamRng,
    plan::profile_for,
    record::ids_are_contiguous,
    scoring,
    summary::DatasetSummary,
    types::PlanType,
};
use chrono::NaiveDate;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn make_generator(count: usize, seed: u64) -> RecordGenerator {
    let config = GeneratorConfig {
        record_count: count,
        random_seed: Some(seed),
        ..GeneratorConfig::default_test()
    };
    RecordGenerator::new(config).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn every_record_satisfies_field_invariants() {
    let _ = env_logger::builder().is_test(true).try_init();
    let run = make_generator(5_000, 42).generate();

    assert_eq!(run.records.len(), 5_000);
    for r in &run.records {
        let violations = r.invariant_violations();
        assert!(violations.is_empty(), "{violations:?}");
        assert!(r.tenure_months <= r.contract_months);
        assert!(r.late_payments_last_6m <= r.payment_delays);
        assert!(r.churn == 0 || r.churn == 1);
    }
}

#[test]
fn ids_run_one_to_n_without_gaps() {
    let run = make_generator(1_234, 7).generate();
    assert!(ids_are_contiguous(&run.records));
    assert_eq!(run.records.first().map(|r| r.id), Some(1));
    assert_eq!(run.records.last().map(|r| r.id), Some(1_234));
}

#[test]
fn usage_and_logins_follow_plan_profile() {
    let run = make_generator(3_000, 99).generate();
    for r in &run.records {
        let p = profile_for(r.plan_type);
        assert!(
            p.usage_in_range(r.monthly_usage),
            "{} usage {} outside profile", r.plan_type, r.monthly_usage
        );
        assert!(p.logins_in_range(r.logins_per_month));
    }
}

#[test]
fn stored_values_have_two_decimals() {
    let run = make_generator(1_000, 3).generate();
    for r in &run.records {
        for v in [r.on_time_payment_ratio, r.monthly_usage, r.churn_probability] {
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6, "{v} not rounded to 2dp");
        }
    }
}

#[test]
fn stored_probability_matches_rule_table() {
    let run = make_generator(2_000, 11).generate();
    for r in &run.records {
        let expected = scoring::score(&r.features()).stored_probability();
        assert_eq!(r.churn_probability, expected, "record {}", r.id);
    }
}

/// With default weights, BASIC is drawn about half the time.
#[test]
fn basic_plan_share_is_about_half() {
    let run = make_generator(10_000, 2024).generate();
    let summary = DatasetSummary::from_records(&run.records);
    let share = summary.plan_share(PlanType::Basic);
    assert!((share - 0.5).abs() <= 0.05, "BASIC share {share}");
}

#[test]
fn zero_weight_plan_never_drawn() {
    let config = GeneratorConfig {
        record_count: 2_000,
        plan_weights: PlanWeights { basic: 0.0, standard: 1.0, premium: 1.0 },
        ..GeneratorConfig::default_test()
    };
    let run = RecordGenerator::new(config).unwrap().generate();
    assert!(run.records.iter().all(|r| r.plan_type != PlanType::Basic));
}

#[test]
fn zero_probability_records_never_churn() {
    let run = make_generator(5_000, 8).generate();
    let zero: Vec<_> = run.records.iter().filter(|r| r.churn_probability == 0.0).collect();
    assert!(!zero.is_empty(), "Expected some records with no rule firing");
    assert!(zero.iter().all(|r| r.churn == 0));

    let certain: Vec<_> = run.records.iter().filter(|r| r.churn_probability == 1.0).collect();
    assert!(certain.iter().all(|r| r.churn == 1));
}

#[test]
fn signup_dates_fall_in_three_year_window() {
    let run = make_generator(2_000, 5).generate();
    let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let start = NaiveDate::from_ymd_opt(2022, 6, 30).unwrap();
    for r in &run.records {
        assert!(r.signup_date >= start && r.signup_date <= end, "{}", r.signup_date);
    }
}

#[test]
fn pt_br_locale_never_falls_back() {
    let run = make_generator(500, 1).generate();
    assert_eq!(run.state_fallbacks, 0);
}

#[test]
fn locale_without_region_helper_falls_back_to_constant_state() {
    let config = GeneratorConfig {
        locale: "en_US".into(),
        ..GeneratorConfig::default_test()
    };
    let run = RecordGenerator::new(config).unwrap().generate();
    assert_eq!(run.state_fallbacks, run.records.len());
    assert!(run.records.iter().all(|r| r.state == FALLBACK_STATE));
}

/// Identity draws live on their own stream, so switching locale
/// must leave every usage and label field untouched.
#[test]
fn locale_change_does_not_perturb_usage_or_labels() {
    let pt = make_generator(500, 77).generate();
    let en = RecordGenerator::new(GeneratorConfig {
        record_count: 500,
        random_seed: Some(77),
        locale: "en_US".into(),
        ..GeneratorConfig::default_test()
    })
    .unwrap()
    .generate();

    for (a, b) in pt.records.iter().zip(en.records.iter()) {
        assert_eq!(a.features(), b.features());
        assert_eq!(a.device_type, b.device_type);
        assert_eq!(a.churn, b.churn);
    }
}

#[test]
fn zero_record_count_rejected_before_generation() {
    let config = GeneratorConfig { record_count: 0, ..GeneratorConfig::default_test() };
    assert!(RecordGenerator::new(config).is_err());
}

/// Provider with no region helper and fixed identity values.
struct FixedProvider;

impl FakeDataProvider for FixedProvider {
    fn full_name(&self, _rng: &mut StreamRng) -> String {
        "Fulano de Tal".into()
    }

    fn city(&self, _rng: &mut StreamRng) -> &'static str {
        "Campinas"
    }

    fn state_code(&self, _rng: &mut StreamRng) -> Option<&'static str> {
        None
    }
}

#[test]
fn custom_provider_feeds_identity_fields() {
    let config = GeneratorConfig { record_count: 20, ..GeneratorConfig::default_test() };
    let run = RecordGenerator::with_provider(config, Box::new(FixedProvider))
        .unwrap()
        .generate();

    assert_eq!(run.state_fallbacks, 20);
    for r in &run.records {
        assert_eq!(r.name, "Fulano de Tal");
        assert_eq!(r.city, "Campinas");
        assert_eq!(r.state, FALLBACK_STATE);
        assert!(r.invariant_violations().is_empty());
    }
}
