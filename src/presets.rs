use crate::energy_source::EnergySource;

/// 기준 시나리오의 할인율
pub const REFERENCE_DISCOUNT_FACTOR: f64 = 0.05;

/// 내장 발전원 프리셋.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// CLI/설정 파일에서 쓰는 키
    pub key: &'static str,
    /// 표시용 이름
    pub label: &'static str,
    pub source: EnergySource,
}

const PRESETS: [Preset; 5] = [
    Preset {
        key: "onshore-wind",
        label: "Onshore wind farm",
        source: EnergySource {
            cost_per_gw: 5.4,
            max_power_perc: 0.36,
            o_and_m_per_gw_per_year: 0.065,
            o_and_m_per_twh: 0.007,
            years_to_launch: 2,
            years_of_operation: 25,
        },
    },
    Preset {
        key: "offshore-wind",
        label: "Offshore wind farm",
        source: EnergySource {
            cost_per_gw: 12.0,
            max_power_perc: 0.5,
            o_and_m_per_gw_per_year: 0.184,
            o_and_m_per_twh: 0.014,
            years_to_launch: 4,
            years_of_operation: 20,
        },
    },
    Preset {
        key: "photovoltaics",
        label: "Photovoltaics",
        source: EnergySource {
            cost_per_gw: 2.2,
            max_power_perc: 0.11,
            o_and_m_per_gw_per_year: 0.052,
            o_and_m_per_twh: 0.0,
            years_to_launch: 1,
            years_of_operation: 30,
        },
    },
    Preset {
        key: "nuclear",
        label: "Nuclear",
        source: EnergySource {
            cost_per_gw: 35.0,
            max_power_perc: 0.85,
            o_and_m_per_gw_per_year: 0.5,
            o_and_m_per_twh: 0.016,
            years_to_launch: 10,
            years_of_operation: 60,
        },
    },
    Preset {
        key: "gas",
        label: "Gas",
        source: EnergySource {
            cost_per_gw: 4.0,
            // 회귀 기준값(2004)에 맞춘 입력. 실제 가스 발전 이용률(약 20%)과 다르다.
            max_power_perc: 0.01859,
            o_and_m_per_gw_per_year: 0.0,
            o_and_m_per_twh: 0.5,
            years_to_launch: 3,
            years_of_operation: 40,
        },
    },
];

/// 내장 프리셋 목록을 반환한다.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// 키로 프리셋을 찾는다. 대소문자는 구분하지 않는다.
pub fn find_preset(key: &str) -> Option<&'static Preset> {
    let key = key.trim();
    PRESETS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
}

/// 표시용 이름을 반환한다. 프리셋 키가 아니면 이름을 그대로 쓴다.
pub fn display_label(name: &str) -> &str {
    find_preset(name).map_or(name, |p| p.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_prefers_preset_label() {
        assert_eq!(display_label("nuclear"), "Nuclear");
        assert_eq!(display_label("Offshore-Wind"), "Offshore wind farm");
        assert_eq!(display_label("coastal-wind"), "coastal-wind");
    }
}
