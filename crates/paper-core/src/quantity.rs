//! 數量模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{PackagingType, PaperError, GRAM_TO_TON};

/// 換算的輸入單位
///
/// 原始數量的意義取決於包裝類型：捲筒以噸計，箱裝以箱計，其餘以張計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseUnit {
    #[serde(rename = "T")]
    Ton,
    #[serde(rename = "BOX")]
    Box,
    #[serde(rename = "매")]
    Sheet,
}

impl BaseUnit {
    /// 依包裝類型決定輸入單位
    pub fn for_packaging(packaging_type: PackagingType) -> Self {
        match packaging_type {
            PackagingType::Roll => BaseUnit::Ton,
            PackagingType::Box => BaseUnit::Box,
            PackagingType::Ream | PackagingType::Skid => BaseUnit::Sheet,
        }
    }

    pub fn label(&self) -> &'static str {
        QuantityUnit::from(*self).label()
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 換算結果的數量單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityUnit {
    /// 噸
    #[serde(rename = "T")]
    Ton,
    /// 箱
    #[serde(rename = "BOX")]
    Box,
    /// 令
    #[serde(rename = "R")]
    Ream,
    /// 張
    #[serde(rename = "매")]
    Sheet,
}

impl QuantityUnit {
    pub const ALL: [QuantityUnit; 4] = [
        QuantityUnit::Ton,
        QuantityUnit::Box,
        QuantityUnit::Ream,
        QuantityUnit::Sheet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuantityUnit::Ton => "T",
            QuantityUnit::Box => "BOX",
            QuantityUnit::Ream => "R",
            QuantityUnit::Sheet => "매",
        }
    }

    /// 建議的顯示小數位數
    pub fn recommended_precision(&self) -> u32 {
        match self {
            QuantityUnit::Ton => 3,
            QuantityUnit::Box => 0,
            QuantityUnit::Ream => 3,
            QuantityUnit::Sheet => 0,
        }
    }
}

impl From<BaseUnit> for QuantityUnit {
    fn from(unit: BaseUnit) -> Self {
        match unit {
            BaseUnit::Ton => QuantityUnit::Ton,
            BaseUnit::Box => QuantityUnit::Box,
            BaseUnit::Sheet => QuantityUnit::Sheet,
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuantityUnit {
    type Err = PaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "T" => Ok(QuantityUnit::Ton),
            "BOX" => Ok(QuantityUnit::Box),
            "R" => Ok(QuantityUnit::Ream),
            "매" => Ok(QuantityUnit::Sheet),
            other => Err(PaperError::UnknownQuantityUnit(other.to_string())),
        }
    }
}

impl FromStr for BaseUnit {
    type Err = PaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<QuantityUnit>()? {
            QuantityUnit::Ton => Ok(BaseUnit::Ton),
            QuantityUnit::Box => Ok(BaseUnit::Box),
            QuantityUnit::Sheet => Ok(BaseUnit::Sheet),
            QuantityUnit::Ream => Err(PaperError::UnknownQuantityUnit(s.trim().to_string())),
        }
    }
}

/// 帶單位的數值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityValue {
    pub value: f64,
    pub unit: QuantityUnit,
}

impl QuantityValue {
    pub fn new(value: f64, unit: QuantityUnit) -> Self {
        Self { value, unit }
    }
}

/// 數量換算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// 原始輸入數量
    pub quantity: f64,

    /// 原始數量的單位
    pub base_unit: BaseUnit,

    /// 重量（g）
    pub grams: f64,

    /// 包裝數量（箱 / 令），捲筒沒有
    pub packed: Option<QuantityValue>,

    /// 張數，捲筒沒有
    pub unpacked: Option<QuantityValue>,
}

impl Quantity {
    /// 重量（噸）
    pub fn tons(&self) -> f64 {
        self.grams * GRAM_TO_TON
    }

    pub fn packed_value(&self) -> Option<f64> {
        self.packed.map(|p| p.value)
    }

    pub fn unpacked_value(&self) -> Option<f64> {
        self.unpacked.map(|u| u.value)
    }
}
