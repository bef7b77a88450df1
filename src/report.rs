use crate::analysis::profit::ProfitResult;
use crate::data::DATE_FORMAT;

const NO_BUY: &str = "Don't buy";
const NO_SELL: &str = "Don't sell";

/// Renders a value with 3 decimal digits and thousands separators,
/// e.g. 1234567.8 -> "1,234,567.800".
pub fn format_amount(value: f64) -> String {
    let rendered = format!("{value:.3}");
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "000"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}.{frac_part}")
}

/// Single result line: mean, std, buy/sell dates (or the no-trade
/// sentinels), and profit.
pub fn format_report(result: &ProfitResult) -> String {
    let buy = result
        .buy_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| NO_BUY.to_string());
    let sell = result
        .sell_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| NO_SELL.to_string());

    format!(
        "Mean: {}, Std: {}, Buy date: {}, Sell date: {}, Profit: Rs. {}",
        format_amount(result.mean),
        format_amount(result.std_dev),
        buy,
        sell,
        format_amount(result.profit),
    )
}
