//! 數量換算
//!
//! 由單一原始數量推算重量、包裝數量與張數

use paper_core::{
    BaseUnit, PackagingType, PaperSpec, Quantity, QuantityUnit, QuantityValue, GRAMS_PER_TON,
    MM2_TO_M2, SHEETS_PER_REAM,
};

/// 數量換算器
pub struct QuantityConverter;

impl QuantityConverter {
    /// 依包裝類型決定輸入單位後換算
    ///
    /// ROLL 以噸、BOX 以箱、REAM / SKID 以張解讀原始數量
    pub fn convert(spec: &PaperSpec, raw_quantity: f64) -> Option<Quantity> {
        let Some(packaging_type) = spec.packaging_type() else {
            tracing::debug!("紙張規格缺少包裝資訊，無法換算數量");
            return None;
        };

        Self::convert_with(spec, BaseUnit::for_packaging(packaging_type), raw_quantity)
    }

    /// 以指定輸入單位換算
    pub fn convert_with(spec: &PaperSpec, unit: BaseUnit, raw_quantity: f64) -> Option<Quantity> {
        let Some(packaging_type) = spec.packaging_type() else {
            tracing::debug!("紙張規格缺少包裝資訊，無法以 {} 換算數量", unit);
            return None;
        };

        let rect = spec.area_mm2();
        let pack_unit = spec.pack_unit();

        let grams = match unit {
            BaseUnit::Ton => raw_quantity * GRAMS_PER_TON,
            BaseUnit::Box => spec.grammage * rect * pack_unit * raw_quantity * MM2_TO_M2,
            BaseUnit::Sheet => spec.grammage * rect * raw_quantity * MM2_TO_M2,
        };

        let sheets = match unit {
            BaseUnit::Ton => grams / spec.grams_per_sheet(),
            BaseUnit::Box => raw_quantity * pack_unit,
            BaseUnit::Sheet => raw_quantity,
        };

        // 捲筒沒有張數與包裝數量，只保留重量
        let packed = match packaging_type {
            PackagingType::Roll => None,
            PackagingType::Box => {
                let boxes = match unit {
                    BaseUnit::Box => raw_quantity,
                    BaseUnit::Ton | BaseUnit::Sheet => sheets / pack_unit,
                };
                Some(QuantityValue::new(boxes, QuantityUnit::Box))
            }
            PackagingType::Ream | PackagingType::Skid => {
                Some(QuantityValue::new(sheets / SHEETS_PER_REAM, QuantityUnit::Ream))
            }
        };

        let unpacked = packaging_type
            .has_sheets()
            .then(|| QuantityValue::new(sheets, QuantityUnit::Sheet));

        Some(Quantity {
            quantity: raw_quantity,
            base_unit: unit,
            grams,
            packed,
            unpacked,
        })
    }
}
