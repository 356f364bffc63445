//! 顯示精度配置

use serde::{Deserialize, Serialize};

use crate::QuantityUnit;

/// 數量與金額的顯示精度
///
/// 預設值即建議精度表，個別單位可由配置覆寫
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrecisionConfig {
    /// 噸的小數位數
    pub ton: u32,

    /// 箱的小數位數
    pub r#box: u32,

    /// 令的小數位數
    pub ream: u32,

    /// 張的小數位數
    pub sheet: u32,

    /// 金額（元）的小數位數
    pub price_scale: u32,
}

impl PrecisionConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            ton: QuantityUnit::Ton.recommended_precision(),
            r#box: QuantityUnit::Box.recommended_precision(),
            ream: QuantityUnit::Ream.recommended_precision(),
            sheet: QuantityUnit::Sheet.recommended_precision(),
            price_scale: 0,
        }
    }

    /// 從 JSON 載入，未提供的欄位使用預設值
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置單位精度
    pub fn with_precision(mut self, unit: QuantityUnit, decimals: u32) -> Self {
        match unit {
            QuantityUnit::Ton => self.ton = decimals,
            QuantityUnit::Box => self.r#box = decimals,
            QuantityUnit::Ream => self.ream = decimals,
            QuantityUnit::Sheet => self.sheet = decimals,
        }
        self
    }

    /// 建構器模式：設置金額精度
    pub fn with_price_scale(mut self, decimals: u32) -> Self {
        self.price_scale = decimals;
        self
    }

    /// 取得單位精度
    pub fn precision_for(&self, unit: QuantityUnit) -> u32 {
        match unit {
            QuantityUnit::Ton => self.ton,
            QuantityUnit::Box => self.r#box,
            QuantityUnit::Ream => self.ream,
            QuantityUnit::Sheet => self.sheet,
        }
    }
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_recommended() {
        let config = PrecisionConfig::default();
        for unit in QuantityUnit::ALL {
            assert_eq!(config.precision_for(unit), unit.recommended_precision());
        }
        assert_eq!(config.price_scale, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = PrecisionConfig::new()
            .with_precision(QuantityUnit::Ton, 6)
            .with_precision(QuantityUnit::Sheet, 1)
            .with_price_scale(2);

        assert_eq!(config.precision_for(QuantityUnit::Ton), 6);
        assert_eq!(config.precision_for(QuantityUnit::Sheet), 1);
        assert_eq!(config.precision_for(QuantityUnit::Box), 0);
        assert_eq!(config.price_scale, 2);
    }

    #[test]
    fn test_from_json_partial() {
        let config = PrecisionConfig::from_json(r#"{ "ream": 1, "priceScale": 2 }"#).unwrap();

        assert_eq!(config.ream, 1);
        assert_eq!(config.price_scale, 2);
        // 未提供的欄位保留預設值
        assert_eq!(config.ton, 3);
        assert_eq!(config.sheet, 0);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = PrecisionConfig::from_json("{ \"ton\": -1 }").unwrap_err();
        assert!(matches!(err, crate::PaperError::Config(_)));
    }
}
