//! 균등화 발전원가(LCOE) 계산.
//!
//! 건설 기간에는 건설비를, 운전 기간에는 운전유지비와 발전량을 연 단위로
//! 할인해 누적한 뒤 `할인 비용 합계 / 할인 발전량 합계`를 구한다.
//! 할인 계수는 건설 기간에서 운전 기간으로 넘어갈 때 초기화하지 않는다.

use crate::diagnostics::{DiagnosticsSink, NoopSink};
use crate::energy_source::EnergySource;

/// TWh → MWh 환산 계수. 결과를 [통화/MWh]로 맞춘다.
pub const MWH_PER_TWH: f64 = 1000.0;

/// LCOE 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LcoeError {
    /// 입력값 오류
    InvalidInput(&'static str),
}

impl std::fmt::Display for LcoeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LcoeError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for LcoeError {}

/// 할인율을 검사한다. -1 이하이면 연간 할인 분모가 0 또는 음수가 된다.
pub fn validate_discount_factor(discount_factor: f64) -> Result<(), LcoeError> {
    if !discount_factor.is_finite() || discount_factor <= -1.0 {
        return Err(LcoeError::InvalidInput(
            "discount_factor는 -1보다 큰 유한한 값이어야 합니다.",
        ));
    }
    Ok(())
}

/// 연도의 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearPhase {
    Construction,
    Operation,
}

impl std::fmt::Display for YearPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearPhase::Construction => write!(f, "construction"),
            YearPhase::Operation => write!(f, "operation"),
        }
    }
}

/// 1년치 할인 현금흐름.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearEntry {
    /// 건설 시작부터 센 연도(1부터)
    pub year: u32,
    pub phase: YearPhase,
    /// 해당 연도에 적용된 할인 계수
    pub discount: f64,
    /// 할인된 비용 [통화/GW]
    pub expense: f64,
    /// 할인된 발전량 [TWh/GW]
    pub energy: f64,
}

/// 연도별 할인 현금흐름을 지연 생성하는 반복자.
#[derive(Debug, Clone)]
pub struct YearlyCashFlows {
    source: EnergySource,
    energy_per_gw_per_year: f64,
    divisor: f64,
    discount: f64,
    emitted: u64,
    total_years: u64,
}

/// 연도별 할인 현금흐름을 만든다. 입력 검사는 호출 측 책임이다.
pub fn yearly_cash_flows(source: &EnergySource, discount_factor: f64) -> YearlyCashFlows {
    YearlyCashFlows {
        source: *source,
        energy_per_gw_per_year: source.energy_per_gw_per_year(),
        divisor: 1.0 + discount_factor,
        discount: 1.0,
        emitted: 0,
        total_years: source.horizon_years(),
    }
}

impl Iterator for YearlyCashFlows {
    type Item = YearEntry;

    fn next(&mut self) -> Option<YearEntry> {
        if self.emitted >= self.total_years {
            return None;
        }
        self.emitted += 1;
        // 검증된 입력이면 전체 연수가 u32 범위 안이다.
        let year = u32::try_from(self.emitted).unwrap_or(u32::MAX);
        let discount = self.discount;
        let entry = if self.emitted <= u64::from(self.source.years_to_launch) {
            YearEntry {
                year,
                phase: YearPhase::Construction,
                discount,
                expense: self.source.cost_per_gw / f64::from(self.source.years_to_launch)
                    * discount,
                energy: 0.0,
            }
        } else {
            let yearly_cost = self.source.o_and_m_per_gw_per_year
                + self.energy_per_gw_per_year * self.source.o_and_m_per_twh;
            YearEntry {
                year,
                phase: YearPhase::Operation,
                discount,
                expense: yearly_cost * discount,
                energy: self.energy_per_gw_per_year * discount,
            }
        };
        self.discount /= self.divisor;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total_years - self.emitted).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for YearlyCashFlows {}

/// 할인 누적값과 LCOE를 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LcoeBreakdown {
    /// 할인된 건설비 합계 [통화/GW]
    pub capital_expense: f64,
    /// 할인된 운전유지비 합계 [통화/GW]
    pub o_and_m_expense: f64,
    /// 할인된 발전량 합계 [TWh/GW]
    pub energy: f64,
    /// LCOE [통화/MWh]
    pub lcoe: f64,
}

impl LcoeBreakdown {
    /// 할인된 비용 합계 [통화/GW]
    pub fn total_expense(&self) -> f64 {
        self.capital_expense + self.o_and_m_expense
    }
}

/// LCOE [통화/MWh]를 계산한다. 연도별 진단 정보는 버린다.
///
/// 건설비와 운전유지비가 모두 0이면 결과는 0.0이다. 그 외의 유효한 입력은 양수를 반환한다.
pub fn calculate_lcoe(source: &EnergySource, discount_factor: f64) -> Result<f64, LcoeError> {
    calculate_lcoe_with(source, discount_factor, &mut NoopSink)
}

/// LCOE를 계산하면서 연도별 현금흐름을 `sink`로 보낸다.
pub fn calculate_lcoe_with<S: DiagnosticsSink + ?Sized>(
    source: &EnergySource,
    discount_factor: f64,
    sink: &mut S,
) -> Result<f64, LcoeError> {
    Ok(lcoe_breakdown(source, discount_factor, sink)?.lcoe)
}

/// 건설비/운전유지비 구분이 포함된 계산 결과를 반환한다.
pub fn lcoe_breakdown<S: DiagnosticsSink + ?Sized>(
    source: &EnergySource,
    discount_factor: f64,
    sink: &mut S,
) -> Result<LcoeBreakdown, LcoeError> {
    source.validate()?;
    validate_discount_factor(discount_factor)?;

    let mut capital_expense = 0.0;
    let mut o_and_m_expense = 0.0;
    let mut energy = 0.0;
    for entry in yearly_cash_flows(source, discount_factor) {
        sink.record(&entry);
        match entry.phase {
            YearPhase::Construction => capital_expense += entry.expense,
            YearPhase::Operation => o_and_m_expense += entry.expense,
        }
        energy += entry.energy;
    }

    // 검증된 입력이면 발전량 합계는 양수다. 극단적인 할인율로 언더플로/오버플로가
    // 나는 경우만 여기서 걸러진다.
    if energy.is_nan() || energy <= 0.0 {
        return Err(LcoeError::InvalidInput(
            "할인된 발전량 합계가 0입니다. 할인율이 너무 큽니다.",
        ));
    }
    let lcoe = (capital_expense + o_and_m_expense) / energy * MWH_PER_TWH;
    if !lcoe.is_finite() {
        return Err(LcoeError::InvalidInput(
            "할인 누적값이 유한하지 않습니다. 할인율 또는 기간을 확인하세요.",
        ));
    }
    Ok(LcoeBreakdown {
        capital_expense,
        o_and_m_expense,
        energy,
        lcoe,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterator_length_matches_horizon() {
        let es = EnergySource::new(4.0, 0.2, 0.0, 0.5, 3, 40);
        let flows = yearly_cash_flows(&es, 0.05);
        assert_eq!(flows.len(), 43);
        assert_eq!(flows.count(), 43);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn iterator_length_covers_horizon_beyond_u32() {
        let es = EnergySource::new(1.0, 0.5, 0.0, 0.0, u32::MAX, 1);
        let mut flows = yearly_cash_flows(&es, 0.05);
        assert_eq!(flows.len(), u32::MAX as usize + 1);
        assert_eq!(flows.next().map(|e| e.phase), Some(YearPhase::Construction));
    }

    #[test]
    fn discount_carries_over_phase_boundary() {
        let es = EnergySource::new(2.0, 0.5, 0.1, 0.0, 2, 2);
        let entries: Vec<_> = yearly_cash_flows(&es, 1.0).collect();
        let discounts: Vec<f64> = entries.iter().map(|e| e.discount).collect();
        assert_eq!(discounts, vec![1.0, 0.5, 0.25, 0.125]);
        assert_eq!(entries[2].phase, YearPhase::Operation);
        assert_eq!(entries[2].year, 3);
    }

    #[test]
    fn construction_years_produce_no_energy() {
        let es = EnergySource::new(6.0, 0.5, 0.1, 0.01, 3, 1);
        for entry in yearly_cash_flows(&es, 0.0).take(3) {
            assert_eq!(entry.phase, YearPhase::Construction);
            assert_eq!(entry.energy, 0.0);
            assert!((entry.expense - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn discount_factor_of_minus_one_is_rejected() {
        assert!(validate_discount_factor(-1.0).is_err());
        assert!(validate_discount_factor(-1.5).is_err());
        assert!(validate_discount_factor(f64::INFINITY).is_err());
        assert!(validate_discount_factor(-0.5).is_ok());
    }
}
