//! 紙張價格換算示例

use paper::paper_calc::{round_price, round_quantity_value, SupplyLine, SupplyPriceCalculator};
use paper::paper_core::PrecisionConfig;
use paper::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 紙張價格換算示例 ===\n");

    // 目錄服務提供的規格
    let art_paper: PaperSpec = serde_json::from_str(
        r#"{
            "grammage": 120,
            "sizeX": 788,
            "sizeY": 1091,
            "packaging": { "type": "SKID", "packA": 1, "packB": 1 }
        }"#,
    )?;
    art_paper.validate()?;

    let copy_paper = PaperSpec::new(80.0, 210.0, 297.0, Packaging::boxed(5, 500));
    copy_paper.validate()?;

    let config = PrecisionConfig::default();

    // 元/噸 → 元/令
    let per_ton = 1_150_000.0;
    let per_ream = convert_price(per_ton, PriceUnit::WonPerTon, PriceUnit::WonPerReam, &art_paper);
    println!(
        "{} g/m² {}x{}: {} 元/噸 = {} 元/令",
        art_paper.grammage,
        art_paper.size_x,
        art_paper.effective_size_y(),
        per_ton,
        round_price(per_ream, &config).unwrap_or_default()
    );

    // 數量換算
    let quantity = convert_quantity(&art_paper, 12_500.0).ok_or("規格不完整")?;
    println!("\n12,500 張：");
    println!("  重量: {:.3} T", quantity.tons());
    for value in [quantity.packed, quantity.unpacked].into_iter().flatten() {
        println!(
            "  {}: {}",
            value.unit,
            round_quantity_value(&value, &config).unwrap_or_default()
        );
    }

    // 庫存清單合計
    let art_price = StockPrice::new(per_ream, PriceUnit::WonPerReam);
    let copy_price = StockPrice::new(25_000.0, PriceUnit::WonPerBox);
    let lines = vec![
        SupplyLine::new(&art_paper, &art_price, 12_500.0),
        SupplyLine::new(&copy_paper, &copy_price, 40.0),
    ];

    println!("\n供應價:");
    for (line, supply) in lines.iter().zip(SupplyPriceCalculator::calculate_many(&lines)) {
        println!(
            "  {} 數量 {} → {} 元",
            line.spec.packaging_type().map_or("-", |t| t.as_str()),
            line.quantity,
            round_price(supply, &config).unwrap_or_default()
        );
    }

    match SupplyPriceCalculator::total(&lines, &config) {
        Some(total) => println!("  合計: {} 元", total),
        None => println!("  合計: -"),
    }

    Ok(())
}
