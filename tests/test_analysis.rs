use approx::assert_relative_eq;
use chrono::NaiveDate;

use stock_picker::analysis::profit;
use stock_picker::data::loader::PriceStore;
use stock_picker::report;

const FIXTURE: &str = "tests/data/sample_prices.csv";

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, day).unwrap()
}

#[test]
fn full_range_finds_the_post_dip_trade() {
    let store = PriceStore::load(FIXTURE).expect("Failed to load fixture");
    let series = store.series_for("AAPL").unwrap();

    // AAPL prices in date order: 100.0, 95.0, 102.5, 130.0.
    let window = profit::window_for(series, date(20), date(26));
    let result = profit::analyze(window);

    assert_eq!(result.buy_date, Some(date(22)));
    assert_eq!(result.sell_date, Some(date(26)));
    assert_relative_eq!(result.profit, 35.0);
}

#[test]
fn narrowing_the_range_changes_the_winning_pair() {
    let store = PriceStore::load(FIXTURE).expect("Failed to load fixture");
    let series = store.series_for("AAPL").unwrap();

    // Window 20..=24 holds 100.0, 95.0, 102.5: buying the dip wins.
    let window = profit::window_for(series, date(20), date(24));
    let result = profit::analyze(window);

    assert_eq!(result.buy_date, Some(date(22)));
    assert_eq!(result.sell_date, Some(date(24)));
    assert_relative_eq!(result.profit, 7.5);
    assert_relative_eq!(result.mean, 297.5 / 3.0);
    assert_relative_eq!(result.std_dev, (87.5f64 / 6.0).sqrt());
}

#[test]
fn range_with_no_records_yields_a_zero_result() {
    let store = PriceStore::load(FIXTURE).expect("Failed to load fixture");
    let series = store.series_for("GOOG").unwrap();

    let window = profit::window_for(series, date(1), date(10));
    let result = profit::analyze(window);

    assert!(window.is_empty());
    assert_eq!(result.buy_date, None);
    assert_eq!(result.sell_date, None);
    assert_relative_eq!(result.profit, 0.0);
    assert_relative_eq!(result.mean, 0.0);
    assert_relative_eq!(result.std_dev, 0.0);
}

#[test]
fn single_point_range_reports_stats_without_a_trade() {
    let store = PriceStore::load(FIXTURE).expect("Failed to load fixture");
    let series = store.series_for("MSFT").unwrap();

    let window = profit::window_for(series, date(21), date(21));
    let result = profit::analyze(window);

    assert_eq!(window.len(), 1);
    assert_eq!(result.buy_date, None);
    assert_eq!(result.sell_date, None);
    assert_relative_eq!(result.mean, 50.0);
    assert_relative_eq!(result.std_dev, 0.0);
}

#[test]
fn report_line_for_a_fixture_query() {
    let store = PriceStore::load(FIXTURE).expect("Failed to load fixture");
    let series = store.series_for("MSFT").unwrap();

    let window = profit::window_for(series, date(20), date(26));
    let line = report::format_report(&profit::analyze(window));

    assert_eq!(
        line,
        "Mean: 55.000, Std: 7.071, Buy date: 21-Jan-2019, \
         Sell date: 23-Jan-2019, Profit: Rs. 10.000"
    );
}
