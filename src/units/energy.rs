use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 발전량 단위. 내부 기준은 MWh이다.
///
/// 설정 파일에서는 CLI와 같은 기호(`kWh`, `MWh`, ...)로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EnergyUnit {
    KilowattHour,
    MegawattHour,
    GigawattHour,
    TerawattHour,
}

impl EnergyUnit {
    /// 표시용 기호
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::MegawattHour => "MWh",
            EnergyUnit::GigawattHour => "GWh",
            EnergyUnit::TerawattHour => "TWh",
        }
    }
}

impl std::fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 알 수 없는 단위 문자열
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnit(pub String);

impl std::fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "알 수 없는 단위: {} (kWh, MWh, GWh, TWh 중 선택)", self.0)
    }
}

impl std::error::Error for UnknownUnit {}

impl FromStr for EnergyUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kwh" | "kilowatthour" => Ok(EnergyUnit::KilowattHour),
            "mwh" | "megawatthour" => Ok(EnergyUnit::MegawattHour),
            "gwh" | "gigawatthour" => Ok(EnergyUnit::GigawattHour),
            "twh" | "terawatthour" => Ok(EnergyUnit::TerawattHour),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for EnergyUnit {
    type Error = UnknownUnit;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EnergyUnit> for String {
    fn from(value: EnergyUnit) -> Self {
        value.symbol().to_string()
    }
}

fn to_mwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => value / 1000.0,
        EnergyUnit::MegawattHour => value,
        EnergyUnit::GigawattHour => value * 1000.0,
        EnergyUnit::TerawattHour => value * 1_000_000.0,
    }
}

fn from_mwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => value * 1000.0,
        EnergyUnit::MegawattHour => value,
        EnergyUnit::GigawattHour => value / 1000.0,
        EnergyUnit::TerawattHour => value / 1_000_000.0,
    }
}

/// 발전량을 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    from_mwh(to_mwh(value, from), to)
}

/// [통화/MWh] 단가를 [통화/unit] 단가로 바꾼다.
pub fn cost_per_unit(cost_per_mwh: f64, unit: EnergyUnit) -> f64 {
    // 단가는 발전량의 역수로 변한다: 1 unit에 들어 있는 MWh만큼 곱한다.
    cost_per_mwh * to_mwh(1.0, unit)
}
