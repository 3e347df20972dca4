//! LCOE 성질 기반 테스트.
use lcoe_calculator::{calculate_lcoe, EnergySource};
use proptest::prelude::*;

fn source_strategy() -> impl Strategy<Value = EnergySource> {
    (
        0.1f64..50.0,
        0.01f64..1.0,
        0.0f64..1.0,
        0.0f64..1.0,
        1u32..15,
        1u32..80,
    )
        .prop_map(|(cost, perc, om_gw, om_twh, launch, operation)| {
            EnergySource::new(cost, perc, om_gw, om_twh, launch, operation)
        })
}

proptest! {
    /// 유효한 입력이면 결과는 유한한 양수다.
    #[test]
    fn result_is_finite_and_positive(
        es in source_strategy(),
        discount_factor in 0.0f64..0.3,
    ) {
        let lcoe = calculate_lcoe(&es, discount_factor).unwrap();
        prop_assert!(lcoe.is_finite());
        prop_assert!(lcoe > 0.0);
    }

    /// 건설비가 오르면 LCOE도 오른다.
    #[test]
    fn higher_capital_cost_raises_lcoe(
        es in source_strategy(),
        extra in 0.5f64..20.0,
        discount_factor in 0.0f64..0.3,
    ) {
        let base = calculate_lcoe(&es, discount_factor).unwrap();
        let pricier = EnergySource { cost_per_gw: es.cost_per_gw + extra, ..es };
        let raised = calculate_lcoe(&pricier, discount_factor).unwrap();
        prop_assert!(raised > base, "{} <= {}", raised, base);
    }

    /// 이용률이 오르면 LCOE는 내려간다.
    #[test]
    fn higher_capacity_factor_lowers_lcoe(
        es in source_strategy(),
        bump in 0.05f64..0.5,
        discount_factor in 0.0f64..0.3,
    ) {
        let perc = es.max_power_perc.min(0.5);
        let lower = EnergySource { max_power_perc: perc, ..es };
        let higher = EnergySource { max_power_perc: perc + bump, ..es };
        let lcoe_lower = calculate_lcoe(&lower, discount_factor).unwrap();
        let lcoe_higher = calculate_lcoe(&higher, discount_factor).unwrap();
        prop_assert!(lcoe_higher < lcoe_lower, "{} >= {}", lcoe_higher, lcoe_lower);
    }
}
