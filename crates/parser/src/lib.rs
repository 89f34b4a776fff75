//! # Stocklens Parser
//!
//! Turns comma-delimited daily price history into [`DailyRecord`]s.
//!
//! The first line must be a header naming the columns. Recognized names are
//! exact and case-sensitive: `Date`, `Open`, `High`, `Low`, `Close`,
//! `Adj Close` and `Volume`. `Adj Close` is optional and any other column is
//! ignored. Rows are returned in source order; nothing is re-sorted.
//!
//! Parsing is all-or-nothing: the first row with an unreadable field aborts
//! with [`ParseError::MalformedRow`].

use core_types::{DailyRecord, parse_trading_day};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::str::FromStr;

pub mod error;

pub use error::ParseError;

/// Positions of the recognized columns within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    adj_close: Option<usize>,
    volume: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self, ParseError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &'static str| find(name).ok_or(ParseError::MissingColumn(name));

        Ok(Self {
            date: require("Date")?,
            open: require("Open")?,
            high: require("High")?,
            low: require("Low")?,
            close: require("Close")?,
            adj_close: find("Adj Close"),
            volume: require("Volume")?,
        })
    }
}

/// Parses CSV text into daily records, preserving row order.
///
/// A header row with no data rows yields an empty vector.
pub fn parse(text: &str) -> Result<Vec<DailyRecord>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let layout = ColumnLayout::from_headers(reader.headers()?)?;
    tracing::debug!(?layout, "Resolved CSV column layout");

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let fields = result?;
        records.push(parse_row(row, &fields, &layout)?);
    }

    let undefined = records.iter().filter(|r| r.percent_change.is_none()).count();
    if undefined > 0 {
        tracing::warn!(undefined, "Records with a zero open have no percent change");
    }
    tracing::debug!(rows = records.len(), "Parsed daily records");

    Ok(records)
}

fn parse_row(
    row: usize,
    fields: &StringRecord,
    layout: &ColumnLayout,
) -> Result<DailyRecord, ParseError> {
    let date = field(row, fields, layout.date, "Date")?;
    let trading_day = parse_trading_day(date).ok_or_else(|| ParseError::MalformedRow {
        row,
        column: "Date",
        reason: format!("'{date}' is not a recognized date"),
    })?;

    let adj_close = match layout.adj_close {
        Some(idx) => Some(price(row, fields, idx, "Adj Close")?),
        None => None,
    };

    let raw_volume = field(row, fields, layout.volume, "Volume")?;
    let volume = raw_volume.parse::<u64>().map_err(|e| ParseError::MalformedRow {
        row,
        column: "Volume",
        reason: format!("'{raw_volume}' is not a non-negative integer ({e})"),
    })?;

    Ok(DailyRecord::new(
        date,
        trading_day,
        price(row, fields, layout.open, "Open")?,
        price(row, fields, layout.high, "High")?,
        price(row, fields, layout.low, "Low")?,
        price(row, fields, layout.close, "Close")?,
        adj_close,
        volume,
    ))
}

fn field<'a>(
    row: usize,
    fields: &'a StringRecord,
    idx: usize,
    column: &'static str,
) -> Result<&'a str, ParseError> {
    match fields.get(idx) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ParseError::MalformedRow {
            row,
            column,
            reason: "is missing".to_string(),
        }),
    }
}

fn price(
    row: usize,
    fields: &StringRecord,
    idx: usize,
    column: &'static str,
) -> Result<Decimal, ParseError> {
    let raw = field(row, fields, idx, column)?;
    let value = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| ParseError::MalformedRow {
            row,
            column,
            reason: format!("'{raw}' is not a decimal number ({e})"),
        })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ParseError::MalformedRow {
            row,
            column,
            reason: format!("'{raw}' is negative"),
        });
    }
    Ok(value)
}
