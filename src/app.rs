use crate::cli::{Args, Command};
use crate::config::{self, Config, NamedSource};
use crate::diagnostics::TracingSink;
use crate::energy_source::EnergySource;
use crate::lcoe::{self, LcoeBreakdown, LcoeError};
use crate::presets;
use crate::ui_cli;
use crate::units;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// LCOE 계산 오류
    Lcoe(LcoeError),
    /// 설정과 프리셋 어디에도 없는 발전원 이름
    UnknownSource(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Lcoe(e) => write!(f, "LCOE 계산 오류: {e}"),
            AppError::UnknownSource(name) => write!(f, "알 수 없는 발전원: {name}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<LcoeError> for AppError {
    fn from(value: LcoeError) -> Self {
        AppError::Lcoe(value)
    }
}

/// 명령줄 인자에 따라 설정을 읽고 명령을 실행한다.
pub fn run(args: Args) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&args.config)?;
    if let Some(discount_factor) = args.discount_factor {
        cfg.discount_factor = discount_factor;
    }
    if let Some(unit) = args.unit {
        cfg.report_unit = unit;
    }
    lcoe::validate_discount_factor(cfg.discount_factor)?;

    match args.command {
        Command::List => list_sources(&cfg),
        Command::Calc { names, breakdown } => {
            for named in resolve_sources(&cfg, &names)? {
                report(&cfg, &named, breakdown)?;
            }
        }
        Command::Custom(custom) => {
            let named = NamedSource {
                name: "custom".to_string(),
                source: EnergySource::from(&custom),
            };
            report(&cfg, &named, custom.breakdown)?;
        }
        Command::Interactive => {
            let named = ui_cli::prompt_named_source()?;
            report(&cfg, &named, true)?;
        }
    }
    Ok(())
}

/// 이름 목록을 발전원으로 바꾼다. 목록이 비어 있으면 설정의 모든 발전원을 쓴다.
pub fn resolve_sources(cfg: &Config, names: &[String]) -> Result<Vec<NamedSource>, AppError> {
    if names.is_empty() {
        return Ok(cfg.sources.clone());
    }
    names
        .iter()
        .map(|name| {
            cfg.find_source(name)
                .ok_or_else(|| AppError::UnknownSource(name.clone()))
        })
        .collect()
}

fn list_sources(cfg: &Config) {
    println!(
        "{:<16} {:<20} {:>10} {:>8} {:>10} {:>10} {:>6} {:>6}",
        "name", "label", "cost/GW", "CF", "O&M/GW/y", "O&M/TWh", "build", "run"
    );
    for named in &cfg.sources {
        let s = &named.source;
        println!(
            "{:<16} {:<20} {:>10.3} {:>8.4} {:>10.3} {:>10.3} {:>6} {:>6}",
            named.name,
            presets::display_label(&named.name),
            s.cost_per_gw,
            s.max_power_perc,
            s.o_and_m_per_gw_per_year,
            s.o_and_m_per_twh,
            s.years_to_launch,
            s.years_of_operation
        );
    }
}

/// 발전원 하나의 LCOE를 계산하고 결과를 출력한다.
fn report(cfg: &Config, named: &NamedSource, breakdown: bool) -> Result<LcoeBreakdown, AppError> {
    let mut sink = TracingSink::named(named.name.as_str());
    let result = lcoe::lcoe_breakdown(&named.source, cfg.discount_factor, &mut sink)?;
    let value = units::cost_per_unit(result.lcoe, cfg.report_unit);
    tracing::info!(
        source = %named.name,
        discount_factor = cfg.discount_factor,
        "LCOE = {value:.2} [{}/{}]",
        cfg.currency,
        cfg.report_unit
    );
    println!("{}", format_lcoe_line(&named.name, value, cfg));
    if breakdown {
        print_breakdown(&result);
    }
    Ok(result)
}

/// 결과 한 줄을 만든다. 예: `onshore-wind: 152.23 PLN/MWh`
pub fn format_lcoe_line(name: &str, value: f64, cfg: &Config) -> String {
    format!("{name}: {value:.2} {}/{}", cfg.currency, cfg.report_unit)
}

fn print_breakdown(result: &LcoeBreakdown) {
    let total = result.total_expense();
    let capital_share = if total > 0.0 {
        result.capital_expense / total * 100.0
    } else {
        0.0
    };
    println!("  할인 건설비:       {:.4} /GW ({capital_share:.1}%)", result.capital_expense);
    println!("  할인 운전유지비:   {:.4} /GW", result.o_and_m_expense);
    println!("  할인 비용 합계:    {total:.4} /GW");
    println!("  할인 발전량 합계:  {:.4} TWh/GW", result.energy);
}
