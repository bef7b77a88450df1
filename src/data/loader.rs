use super::{DataError, PriceRecord, Result, Series, DATE_FORMAT};
use crate::analysis::similarity;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const NAME_COLUMN: &str = "StockName";
const DATE_COLUMN: &str = "StockDate";
const PRICE_COLUMN: &str = "StockPrice";

/// Raw row as it appears in the file. Date and price stay as text so parse
/// failures can report the offending column and value.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "StockName")]
    name: String,
    #[serde(rename = "StockDate")]
    date: String,
    #[serde(rename = "StockPrice")]
    price: String,
}

/// In-memory index of all price records, partitioned by ticker. Built once
/// at load time and read-only afterwards.
#[derive(Debug)]
pub struct PriceStore {
    series: Vec<Series>,
    index: HashMap<String, usize>,
}

impl PriceStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&path)?;

        let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
        Self::verify_required_columns(&headers)?;

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let raw: RawRecord = result?;
            records.push(parse_record(raw)?);
        }

        Ok(Self::from_records(records))
    }

    /// Builds the ticker partition from already-parsed records. Sort is
    /// stable, so records sharing a date keep their original file order.
    pub fn from_records(mut records: Vec<PriceRecord>) -> Self {
        records.sort_by_key(|record| record.date);

        let mut series: Vec<Series> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for record in records {
            let slot = match index.get(&record.ticker) {
                Some(&i) => i,
                None => {
                    index.insert(record.ticker.clone(), series.len());
                    series.push(Series {
                        ticker: record.ticker.clone(),
                        records: Vec::new(),
                    });
                    series.len() - 1
                }
            };
            series[slot].records.push(record);
        }

        Self { series, index }
    }

    /// Known ticker symbols, in order of first appearance in the
    /// date-sorted data.
    pub fn tickers(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.ticker.as_str()).collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn series_for(&self, ticker: &str) -> Result<&Series> {
        self.index
            .get(ticker)
            .map(|&i| &self.series[i])
            .ok_or_else(|| DataError::UnknownTicker(ticker.to_string()))
    }

    /// Up to `max_results` tickers whose similarity to `candidate` is at
    /// least `min_similarity`, ordered by descending similarity. The sort is
    /// stable, so equal scores keep ticker order.
    pub fn suggest(&self, candidate: &str, max_results: usize, min_similarity: f64) -> Vec<&str> {
        let mut scored: Vec<(&str, f64)> = self
            .series
            .iter()
            .map(|s| (s.ticker.as_str(), similarity::ratio(candidate, &s.ticker)))
            .filter(|&(_, score)| score >= min_similarity)
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        scored
            .into_iter()
            .take(max_results)
            .map(|(ticker, _)| ticker)
            .collect()
    }

    fn verify_required_columns(headers: &[String]) -> Result<()> {
        for column in [NAME_COLUMN, DATE_COLUMN, PRICE_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(DataError::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }
}

/// Strict per-row parsing: a blank or malformed required field aborts the
/// whole load, never falls back to a previously seen value.
fn parse_record(raw: RawRecord) -> Result<PriceRecord> {
    if raw.name.is_empty() {
        return Err(DataError::BlankField {
            column: NAME_COLUMN.to_string(),
        });
    }
    if raw.date.is_empty() {
        return Err(DataError::BlankField {
            column: DATE_COLUMN.to_string(),
        });
    }
    if raw.price.is_empty() {
        return Err(DataError::BlankField {
            column: PRICE_COLUMN.to_string(),
        });
    }

    let date =
        NaiveDate::parse_from_str(&raw.date, DATE_FORMAT).map_err(|_| DataError::InvalidDate {
            column: DATE_COLUMN.to_string(),
            value: raw.date.clone(),
        })?;

    let price: f64 = raw.price.parse().map_err(|_| DataError::InvalidPrice {
        column: PRICE_COLUMN.to_string(),
        value: raw.price.clone(),
    })?;
    if !price.is_finite() || price < 0.0 {
        return Err(DataError::InvalidPrice {
            column: PRICE_COLUMN.to_string(),
            value: raw.price,
        });
    }

    Ok(PriceRecord {
        ticker: raw.name,
        date,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, day: u32, price: f64) -> PriceRecord {
        PriceRecord {
            ticker: ticker.to_string(),
            date: NaiveDate::from_ymd_opt(2019, 1, day).unwrap(),
            price,
        }
    }

    #[test]
    fn groups_by_ticker_in_first_appearance_order() {
        let store = PriceStore::from_records(vec![
            record("MSFT", 22, 50.0),
            record("AAPL", 20, 100.0),
            record("AAPL", 21, 101.0),
        ]);

        assert_eq!(store.tickers(), vec!["AAPL", "MSFT"]);
        assert_eq!(store.series_for("AAPL").unwrap().records.len(), 2);
        assert_eq!(store.series_for("MSFT").unwrap().records.len(), 1);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = PriceStore::from_records(vec![record("AAPL", 20, 100.0)]);
        assert!(matches!(
            store.series_for("aapl"),
            Err(DataError::UnknownTicker(_))
        ));
    }

    #[test]
    fn suggest_orders_by_similarity_and_excludes_distant_tickers() {
        let store = PriceStore::from_records(vec![
            record("AAPL", 20, 100.0),
            record("AAPX", 21, 90.0),
            record("MSFT", 22, 50.0),
        ]);

        let matches = store.suggest("AAPL", 5, 0.5);
        assert_eq!(matches, vec!["AAPL", "AAPX"]);

        let matches = store.suggest("AAP", 5, 0.5);
        assert_eq!(matches, vec!["AAPL", "AAPX"]);
    }

    #[test]
    fn suggest_caps_result_count() {
        let store = PriceStore::from_records(vec![
            record("AAPL", 20, 100.0),
            record("AAPX", 21, 90.0),
            record("AAPZ", 22, 80.0),
        ]);

        let matches = store.suggest("AAPL", 1, 0.5);
        assert_eq!(matches, vec!["AAPL"]);
    }
}
