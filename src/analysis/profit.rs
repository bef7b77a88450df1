use crate::data::{PriceRecord, Series};
use chrono::NaiveDate;
use ndarray::Array1;

/// Outcome of analyzing one date-bounded window. Buy/sell dates are absent
/// when no trade beats a profit of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitResult {
    pub buy_date: Option<NaiveDate>,
    pub sell_date: Option<NaiveDate>,
    pub profit: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// Maximal contiguous run of `series` with `start <= date <= end`. An empty
/// range is a valid result, not an error.
pub fn window_for(series: &Series, start: NaiveDate, end: NaiveDate) -> &[PriceRecord] {
    let records = &series.records;
    let lo = records.partition_point(|r| r.date < start);
    let hi = records.partition_point(|r| r.date <= end);
    if lo >= hi {
        return &[];
    }
    &records[lo..hi]
}

/// Best single-buy/single-sell trade over the window, plus mean and sample
/// standard deviation (Bessel's correction) of all window prices.
///
/// For each buy index the candidate sell is the earliest later index with
/// the largest gain; the winning pair is the first one in scan order to
/// strictly improve on the best profit so far, so equal-profit pairs resolve
/// to the earliest occurrence.
pub fn analyze(window: &[PriceRecord]) -> ProfitResult {
    let prices = Array1::from_vec(window.iter().map(|r| r.price).collect());
    let n = prices.len();

    let mean = if n == 0 { 0.0 } else { prices.mean().unwrap_or(0.0) };
    // Sample stdev of fewer than two points is 0 by convention.
    let std_dev = if n < 2 { 0.0 } else { prices.std(1.0) };

    let mut best = 0.0;
    let mut pair: Option<(usize, usize)> = None;
    for buy in 0..n.saturating_sub(1) {
        let mut gain = f64::NEG_INFINITY;
        let mut sell = buy;
        for j in (buy + 1)..n {
            let diff = prices[j] - prices[buy];
            if diff > gain {
                gain = diff;
                sell = j;
            }
        }
        if gain > best {
            best = gain;
            pair = Some((buy, sell));
        }
    }

    match pair {
        Some((buy, sell)) => ProfitResult {
            buy_date: Some(window[buy].date),
            sell_date: Some(window[sell].date),
            profit: best,
            mean,
            std_dev,
        },
        None => ProfitResult {
            buy_date: None,
            sell_date: None,
            profit: 0.0,
            mean,
            std_dev,
        },
    }
}
