//! 연도별 계산 과정을 받아보는 진단 출력.
//!
//! 계산기는 전역 로거를 직접 쓰지 않고, 호출 측이 넘긴 `DiagnosticsSink`로만
//! 연도별 값을 보고한다.

use crate::lcoe::YearEntry;

/// 연도별 할인 현금흐름을 받는 대상.
pub trait DiagnosticsSink {
    fn record(&mut self, entry: &YearEntry);
}

/// 아무것도 기록하지 않는다.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn record(&mut self, _entry: &YearEntry) {}
}

/// 연도별 값을 `tracing` debug 이벤트로 내보낸다.
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    /// 로그에 함께 남길 발전원 이름
    pub source_name: Option<String>,
}

impl TracingSink {
    pub fn named(source_name: impl Into<String>) -> Self {
        Self {
            source_name: Some(source_name.into()),
        }
    }
}

impl DiagnosticsSink for TracingSink {
    fn record(&mut self, entry: &YearEntry) {
        tracing::debug!(
            source = self.source_name.as_deref().unwrap_or("-"),
            year = entry.year,
            phase = %entry.phase,
            "Discount: {:.2},\tExpense: {:.2},\tEnergy: {:.2}",
            entry.discount,
            entry.expense,
            entry.energy,
        );
    }
}

impl DiagnosticsSink for Vec<YearEntry> {
    fn record(&mut self, entry: &YearEntry) {
        self.push(*entry);
    }
}

impl<F> DiagnosticsSink for F
where
    F: FnMut(&YearEntry),
{
    fn record(&mut self, entry: &YearEntry) {
        self(entry)
    }
}
