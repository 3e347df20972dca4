use lcoe_calculator::app::{format_lcoe_line, resolve_sources, AppError};
use lcoe_calculator::config::{load_or_default, Config};
use lcoe_calculator::units::EnergyUnit;
use lcoe_calculator::{calculate_lcoe, EnergySource};

const SAMPLE: &str = r#"
discount_factor = 0.07
currency = "EUR"
report_unit = "kWh"

[[sources]]
name = "coastal-wind"
cost_per_gw = 5.4
max_power_perc = 0.36
o_and_m_per_gw_per_year = 0.065
o_and_m_per_twh = 0.007
years_to_launch = 2
years_of_operation = 25
"#;

#[test]
fn parses_sources_from_toml() {
    let cfg = Config::from_toml_str(SAMPLE).expect("parse");
    assert_eq!(cfg.discount_factor, 0.07);
    assert_eq!(cfg.currency, "EUR");
    assert_eq!(cfg.report_unit, EnergyUnit::KilowattHour);
    assert_eq!(cfg.sources.len(), 1);
    assert_eq!(
        cfg.sources[0].source,
        EnergySource::new(5.4, 0.36, 0.065, 0.007, 2, 25)
    );
}

#[test]
fn report_unit_accepts_cli_symbols() {
    let cfg = Config::from_toml_str("report_unit = \"MWh\"").unwrap();
    assert_eq!(cfg.report_unit, EnergyUnit::MegawattHour);
    let cfg = Config::from_toml_str("report_unit = \"gwh\"").unwrap();
    assert_eq!(cfg.report_unit, EnergyUnit::GigawattHour);
    let cfg = Config::from_toml_str("report_unit = \"TerawattHour\"").unwrap();
    assert_eq!(cfg.report_unit, EnergyUnit::TerawattHour);
    assert!(Config::from_toml_str("report_unit = \"joule\"").is_err());
}

#[test]
fn report_unit_is_written_as_symbol() {
    let text = Config::default().to_toml_string().unwrap();
    assert!(text.contains("report_unit = \"MWh\""), "{text}");
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg = Config::from_toml_str("currency = \"USD\"").unwrap();
    assert_eq!(cfg.discount_factor, 0.05);
    assert_eq!(cfg.report_unit, EnergyUnit::MegawattHour);
    assert_eq!(cfg.sources.len(), 5);
}

#[test]
fn default_config_roundtrips_through_toml() {
    let cfg = Config::default();
    let text = cfg.to_toml_string().unwrap();
    let back = Config::from_toml_str(&text).unwrap();
    assert_eq!(cfg, back);
}

#[test]
fn find_source_falls_back_to_presets() {
    let cfg = Config::from_toml_str(SAMPLE).unwrap();
    assert!(cfg.find_source("coastal-wind").is_some());
    let nuclear = cfg.find_source("Nuclear").expect("preset fallback");
    assert_eq!(nuclear.source.years_of_operation, 60);
    assert!(cfg.find_source("fusion").is_none());
}

#[test]
fn resolve_sources_reports_unknown_names() {
    let cfg = Config::default();
    let all = resolve_sources(&cfg, &[]).unwrap();
    assert_eq!(all.len(), 5);
    match resolve_sources(&cfg, &["gas".to_string(), "tidal".to_string()]) {
        Err(AppError::UnknownSource(name)) => assert_eq!(name, "tidal"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn invalid_toml_is_reported() {
    assert!(Config::from_toml_str("discount_factor = \"high\"").is_err());
}

#[test]
fn load_or_default_writes_missing_file() {
    let path = std::env::temp_dir().join(format!("lcoe_config_{}.toml", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let cfg = load_or_default(&path).unwrap();
    assert!(path.exists());
    let again = load_or_default(&path).unwrap();
    assert_eq!(cfg, again);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn report_line_uses_currency_and_unit() {
    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.report_unit = EnergyUnit::KilowattHour;
    let lcoe = calculate_lcoe(&EnergySource::new(5.4, 0.36, 0.065, 0.007, 2, 25), 0.05).unwrap();
    let value = lcoe_calculator::units::cost_per_unit(lcoe, cfg.report_unit);
    assert_eq!(format_lcoe_line("onshore", value, &cfg), "onshore: 0.15 EUR/kWh");
}
