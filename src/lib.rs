//! 균등화 발전원가(LCOE) 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 쓸 수 있게 한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod energy_source;
pub mod lcoe;
pub mod logging;
pub mod presets;
pub mod ui_cli;
pub mod units;

pub use energy_source::EnergySource;
pub use lcoe::{calculate_lcoe, calculate_lcoe_with, lcoe_breakdown, LcoeError};
