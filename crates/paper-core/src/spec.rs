//! 紙張規格模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{PaperError, MM2_TO_M2};

/// 包裝類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackagingType {
    /// 捲筒（只有寬度，沒有張數）
    Roll,
    /// 箱裝（每箱 packA x packB 張）
    Box,
    /// 令裝（500 張）
    Ream,
    /// 棧板
    Skid,
}

impl PackagingType {
    /// 目錄資料使用的標籤
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingType::Roll => "ROLL",
            PackagingType::Box => "BOX",
            PackagingType::Ream => "REAM",
            PackagingType::Skid => "SKID",
        }
    }

    /// 是否存在單張的概念
    pub fn has_sheets(&self) -> bool {
        !matches!(self, PackagingType::Roll)
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackagingType {
    type Err = PaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ROLL" => Ok(PackagingType::Roll),
            "BOX" => Ok(PackagingType::Box),
            "REAM" => Ok(PackagingType::Ream),
            "SKID" => Ok(PackagingType::Skid),
            other => Err(PaperError::UnknownPackagingType(other.to_string())),
        }
    }
}

/// 包裝資訊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Packaging {
    /// 包裝類型
    #[serde(rename = "type")]
    pub packaging_type: PackagingType,

    /// 入數 A
    pub pack_a: u32,

    /// 入數 B
    pub pack_b: u32,
}

impl Packaging {
    /// 創建新的包裝資訊
    pub fn new(packaging_type: PackagingType, pack_a: u32, pack_b: u32) -> Self {
        Self {
            packaging_type,
            pack_a,
            pack_b,
        }
    }

    pub fn roll() -> Self {
        Self::new(PackagingType::Roll, 0, 0)
    }

    /// 箱裝，每箱 `pack_a * pack_b` 張
    pub fn boxed(pack_a: u32, pack_b: u32) -> Self {
        Self::new(PackagingType::Box, pack_a, pack_b)
    }

    pub fn ream() -> Self {
        Self::new(PackagingType::Ream, 1, 1)
    }

    pub fn skid() -> Self {
        Self::new(PackagingType::Skid, 1, 1)
    }

    /// 每個包裝單位的張數
    ///
    /// 只有 BOX 使用 packA x packB，其他類型固定為 1
    pub fn pack_unit(&self) -> f64 {
        match self.packaging_type {
            PackagingType::Box => f64::from(self.pack_a) * f64::from(self.pack_b),
            PackagingType::Roll | PackagingType::Ream | PackagingType::Skid => 1.0,
        }
    }
}

/// 紙張規格
///
/// 由目錄服務提供，引擎視為已驗證的輸入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperSpec {
    /// 基重（g/m²）
    pub grammage: f64,

    /// 寬度（mm）
    pub size_x: f64,

    /// 長度（mm），ROLL 不使用
    #[serde(default)]
    pub size_y: Option<f64>,

    /// 包裝資訊（缺少時規格視為不完整）
    #[serde(default)]
    pub packaging: Option<Packaging>,
}

impl PaperSpec {
    /// 創建平版紙規格
    pub fn new(grammage: f64, size_x: f64, size_y: f64, packaging: Packaging) -> Self {
        Self {
            grammage,
            size_x,
            size_y: Some(size_y),
            packaging: Some(packaging),
        }
    }

    /// 創建捲筒紙規格
    pub fn roll(grammage: f64, size_x: f64) -> Self {
        Self {
            grammage,
            size_x,
            size_y: None,
            packaging: Some(Packaging::roll()),
        }
    }

    /// 建構器模式：設置長度
    pub fn with_size_y(mut self, size_y: f64) -> Self {
        self.size_y = Some(size_y);
        self
    }

    /// 建構器模式：設置包裝
    pub fn with_packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = Some(packaging);
        self
    }

    /// 建構器模式：移除包裝（不完整規格）
    pub fn without_packaging(mut self) -> Self {
        self.packaging = None;
        self
    }

    pub fn packaging_type(&self) -> Option<PackagingType> {
        self.packaging.map(|p| p.packaging_type)
    }

    /// 規格是否足以做數量換算
    pub fn is_complete(&self) -> bool {
        self.packaging.is_some()
    }

    /// 計算用的長度：未設定、0 或 NaN 一律視為 1
    pub fn effective_size_y(&self) -> f64 {
        match self.size_y {
            Some(y) if y != 0.0 && !y.is_nan() => y,
            _ => 1.0,
        }
    }

    /// 面積係數（mm²）
    pub fn area_mm2(&self) -> f64 {
        self.size_x * self.effective_size_y()
    }

    /// 單張重量（g）
    pub fn grams_per_sheet(&self) -> f64 {
        self.grammage * self.area_mm2() * MM2_TO_M2
    }

    /// 每包裝單位的張數，沒有包裝資訊時為 1
    pub fn pack_unit(&self) -> f64 {
        self.packaging.map_or(1.0, |p| p.pack_unit())
    }

    /// 資料輸入時的驗證，引擎本身不會呼叫
    pub fn validate(&self) -> crate::Result<()> {
        let packaging = self.packaging.ok_or(PaperError::MissingPackaging)?;

        if !is_positive(self.grammage) {
            return Err(PaperError::NonPositive {
                field: "grammage",
                value: self.grammage,
            });
        }

        if !is_positive(self.size_x) {
            return Err(PaperError::NonPositive {
                field: "sizeX",
                value: self.size_x,
            });
        }

        if packaging.packaging_type.has_sheets() {
            match self.size_y {
                None => return Err(PaperError::MissingSizeY(packaging.packaging_type)),
                Some(y) if !is_positive(y) => {
                    return Err(PaperError::NonPositive {
                        field: "sizeY",
                        value: y,
                    })
                }
                Some(_) => {}
            }
        }

        if packaging.packaging_type == PackagingType::Box
            && (packaging.pack_a == 0 || packaging.pack_b == 0)
        {
            return Err(PaperError::InvalidPackUnit {
                pack_a: packaging.pack_a,
                pack_b: packaging.pack_b,
            });
        }

        Ok(())
    }
}

/// NaN 也不算正數
fn is_positive(value: f64) -> bool {
    value > 0.0
}
