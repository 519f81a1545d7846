//! 按日期排列的收盘价序列
//!
//! 从带表头的 CSV（至少包含 `date` 和 `close` 两列，日期升序）读入，
//! 同时建立 日期 -> 下标 的映射。

use crate::error::{Error, Result};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::Deserialize;
use std::{collections::HashMap, fs::File, io::Read, path::Path};

pub const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct Record {
    date: String,
    close: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    /// 每一行的日期键，能解析的日期统一成 YYYY-MM-DD
    dates: Vec<String>,
    values: Vec<f64>,
    index: HashMap<String, usize>,
}

/// 解析 YYYY-MM-DD 格式的日期
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).map_err(|_| Error::InvalidDate(s.to_string()))
}

impl PriceSeries {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading price series from {}", path.display());
        Self::from_reader(File::open(path)?)
    }

    /// 任何一行缺列或者 close 无法解析都会导致整个读取失败
    /// 日期列不做校验，无法解析的日期按原样作为键，只是查询不到
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut series = PriceSeries::default();
        for row in reader.deserialize() {
            let record: Record = row?;
            let date = match parse_date(&record.date) {
                Ok(date) => date.format(DATE_FMT).to_string(),
                Err(_) => {
                    debug!("row {}: date {:?} kept as is", series.len(), record.date);
                    record.date
                }
            };
            let position = series.values.len();
            // 重复的日期：后出现的一行覆盖映射
            if series.index.insert(date.clone(), position).is_some() {
                warn!("duplicate date {} in series, using row {}", date, position);
            }
            series.dates.push(date);
            series.values.push(record.close);
        }
        debug!("loaded {} rows", series.len());
        Ok(series)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 日期对应的下标
    pub fn position(&self, date: NaiveDate) -> Result<usize> {
        let key = date.format(DATE_FMT).to_string();
        match self.index.get(&key) {
            Some(&position) => Ok(position),
            None => Err(Error::DateNotFound(key)),
        }
    }

    /// 先校验格式，再查下标
    pub fn position_of(&self, s: &str) -> Result<usize> {
        self.position(parse_date(s)?)
    }

    /// 把两个日期解析成闭区间 [l, r]，左右颠倒时交换
    pub fn window(&self, left: &str, right: &str) -> Result<(usize, usize)> {
        let l = self.position_of(left)?;
        let r = self.position_of(right)?;
        Ok(if l > r { (r, l) } else { (l, r) })
    }
}
