//! 換算性質測試

use paper::paper_calc::ConversionFactors;
use paper::paper_core::{GRAMS_PER_TON, SHEETS_PER_REAM};
use paper::*;
use proptest::prelude::*;

fn packaging_strategy() -> impl Strategy<Value = Packaging> {
    prop_oneof![
        Just(Packaging::roll()),
        (1u32..=20, 1u32..=500).prop_map(|(a, b)| Packaging::boxed(a, b)),
        Just(Packaging::ream()),
        Just(Packaging::skid()),
    ]
}

fn spec_strategy() -> impl Strategy<Value = PaperSpec> {
    (20.0f64..400.0, 100.0f64..2000.0, 100.0f64..2000.0, packaging_strategy())
        .prop_map(|(grammage, size_x, size_y, packaging)| PaperSpec::new(grammage, size_x, size_y, packaging))
}

fn unit_strategy() -> impl Strategy<Value = PriceUnit> {
    prop_oneof![
        Just(PriceUnit::WonPerTon),
        Just(PriceUnit::WonPerBox),
        Just(PriceUnit::WonPerReam),
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn price_round_trip(
        spec in spec_strategy(),
        price in 1.0f64..10_000_000.0,
        src in unit_strategy(),
        dst in unit_strategy(),
    ) {
        let there = convert_price(price, src, dst, &spec);
        let back = convert_price(there, dst, src, &spec);
        prop_assert!(close(back, price), "{} → {} → {}: {} != {}", src, dst, src, back, price);
    }

    #[test]
    fn same_unit_is_identity(spec in spec_strategy(), price in -1e9f64..1e9, unit in unit_strategy()) {
        prop_assert_eq!(convert_price(price, unit, unit, &spec), price);
    }

    #[test]
    fn box_grams_match_price_factor(spec in spec_strategy(), boxes in 0.0f64..1000.0) {
        let factors = ConversionFactors::from_spec(&spec);
        let quantity = convert_quantity_with(&spec, BaseUnit::Box, boxes).unwrap();
        prop_assert!(close(quantity.grams, factors.tons_per_box * GRAMS_PER_TON * boxes));
    }

    #[test]
    fn ream_grams_match_price_factor(spec in spec_strategy(), reams in 0.0f64..1000.0) {
        let factors = ConversionFactors::from_spec(&spec);
        let quantity = convert_quantity_with(&spec, BaseUnit::Sheet, reams * SHEETS_PER_REAM).unwrap();
        prop_assert!(close(quantity.grams, factors.tons_per_ream * GRAMS_PER_TON * reams));
    }

    #[test]
    fn ton_quantity_matches_ton_price(spec in spec_strategy(), tons in 0.001f64..100.0, per_ton in 1.0f64..5_000_000.0) {
        // 以噸計價與換算成令價後乘以令數應一致
        prop_assume!(spec.packaging_type() != Some(PackagingType::Roll));
        let quantity = convert_quantity_with(&spec, BaseUnit::Ton, tons).unwrap();
        let reams = quantity.unpacked.unwrap().value / SHEETS_PER_REAM;
        let per_ream = convert_price(per_ton, PriceUnit::WonPerTon, PriceUnit::WonPerReam, &spec);
        prop_assert!(close(per_ream * reams, per_ton * tons));
    }

    #[test]
    fn quantity_is_deterministic(spec in spec_strategy(), raw in 0.0f64..100_000.0) {
        prop_assert_eq!(convert_quantity(&spec, raw), convert_quantity(&spec, raw));
    }

    #[test]
    fn incomplete_spec_never_converts(spec in spec_strategy(), raw in 0.0f64..100_000.0, unit in unit_strategy()) {
        let spec = spec.without_packaging();
        let price = StockPrice::new(1000.0, unit);
        prop_assert!(convert_quantity(&spec, raw).is_none());
        prop_assert_eq!(calc_supply_price(&spec, &price, raw), 0.0);
    }
}
