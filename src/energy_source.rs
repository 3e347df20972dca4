use serde::{Deserialize, Serialize};

use crate::lcoe::LcoeError;

/// 하루 시간 수
pub const HOURS_PER_DAY: f64 = 24.0;
/// 1년 일수
pub const DAYS_PER_YEAR: f64 = 365.0;
/// GWh → TWh 환산 계수
pub const GWH_PER_TWH: f64 = 1000.0;

/// 발전원 1종의 비용/운전 특성. 계산 중에는 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySource {
    /// 설비 용량당 건설비 [통화/GW]. 건설 기간에 균등 분할된다.
    pub cost_per_gw: f64,
    /// 이용률(0~1)
    pub max_power_perc: f64,
    /// 고정 운전유지비 [통화/GW/년]
    pub o_and_m_per_gw_per_year: f64,
    /// 변동 운전유지비 [통화/TWh]
    pub o_and_m_per_twh: f64,
    /// 건설 기간 [년]. 이 기간에는 발전량이 없다.
    pub years_to_launch: u32,
    /// 운전 기간 [년]
    pub years_of_operation: u32,
}

impl EnergySource {
    pub fn new(
        cost_per_gw: f64,
        max_power_perc: f64,
        o_and_m_per_gw_per_year: f64,
        o_and_m_per_twh: f64,
        years_to_launch: u32,
        years_of_operation: u32,
    ) -> Self {
        Self {
            cost_per_gw,
            max_power_perc,
            o_and_m_per_gw_per_year,
            o_and_m_per_twh,
            years_to_launch,
            years_of_operation,
        }
    }

    /// 이용률을 GW당 연간 발전량 [TWh/GW/년]으로 환산한다.
    pub fn energy_per_gw_per_year(&self) -> f64 {
        self.max_power_perc * HOURS_PER_DAY * DAYS_PER_YEAR / GWH_PER_TWH
    }

    /// 계산 전에 입력값을 검사한다. 발전량 합계가 0이 되는 입력도 거부한다.
    pub fn validate(&self) -> Result<(), LcoeError> {
        check_non_negative(self.cost_per_gw, "cost_per_gw는 0 이상의 유한한 값이어야 합니다.")?;
        check_non_negative(
            self.o_and_m_per_gw_per_year,
            "o_and_m_per_gw_per_year는 0 이상의 유한한 값이어야 합니다.",
        )?;
        check_non_negative(
            self.o_and_m_per_twh,
            "o_and_m_per_twh는 0 이상의 유한한 값이어야 합니다.",
        )?;
        let perc = self.max_power_perc;
        if perc.is_nan() || perc <= 0.0 || perc > 1.0 {
            return Err(LcoeError::InvalidInput(
                "max_power_perc는 0보다 크고 1 이하여야 합니다.",
            ));
        }
        if self.years_to_launch == 0 {
            return Err(LcoeError::InvalidInput(
                "years_to_launch는 1 이상이어야 합니다.",
            ));
        }
        if self.years_of_operation == 0 {
            return Err(LcoeError::InvalidInput(
                "years_of_operation은 1 이상이어야 합니다.",
            ));
        }
        if self.years_to_launch.checked_add(self.years_of_operation).is_none() {
            return Err(LcoeError::InvalidInput(
                "years_to_launch와 years_of_operation의 합이 u32 범위를 넘습니다.",
            ));
        }
        Ok(())
    }

    /// 건설 기간과 운전 기간을 합한 전체 연수. `validate`를 통과한 입력이면 u32 범위 안이다.
    pub fn horizon_years(&self) -> u64 {
        u64::from(self.years_to_launch) + u64::from(self.years_of_operation)
    }
}

fn check_non_negative(value: f64, msg: &'static str) -> Result<(), LcoeError> {
    // NaN은 비교가 모두 false이므로 여기서 함께 걸러진다.
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LcoeError::InvalidInput(msg))
    }
}
