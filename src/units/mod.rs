//! 결과 보고용 단위 정의 모음.

pub mod energy;

pub use energy::{convert_energy, cost_per_unit, EnergyUnit, UnknownUnit};
