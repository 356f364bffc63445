//! # Paper Core
//!
//! 紙張規格、價格與數量的核心資料模型

pub mod config;
pub mod price;
pub mod quantity;
pub mod spec;

// Re-export 主要類型
pub use config::PrecisionConfig;
pub use price::{DiscountType, OfficialPriceType, PriceUnit, StockPrice};
pub use quantity::{BaseUnit, Quantity, QuantityUnit, QuantityValue};
pub use spec::{Packaging, PackagingType, PaperSpec};

/// 一令（ream）的張數
pub const SHEETS_PER_REAM: f64 = 500.0;

/// 平方毫米 → 平方公尺
pub const MM2_TO_M2: f64 = 1e-6;

/// 公克 → 公噸
pub const GRAM_TO_TON: f64 = 1e-6;

/// 公噸 → 公克
pub const GRAMS_PER_TON: f64 = 1_000_000.0;

/// 紙張引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PaperError {
    #[error("未知的包裝類型: {0}")]
    UnknownPackagingType(String),

    #[error("未知的價格單位: {0}")]
    UnknownPriceUnit(String),

    #[error("未知的數量單位: {0}")]
    UnknownQuantityUnit(String),

    #[error("紙張規格缺少包裝資訊")]
    MissingPackaging,

    #[error("{field} 必須大於 0（目前為 {value}）")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{0} 包裝必須提供長度 (sizeY)")]
    MissingSizeY(PackagingType),

    #[error("BOX 包裝入數無效: {pack_a} x {pack_b}")]
    InvalidPackUnit { pack_a: u32, pack_b: u32 },

    #[error("配置解析錯誤: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaperError>;
