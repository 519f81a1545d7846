//! 按日期查询的命令行前端
//!
//! 日期先通过 [`PriceSeries`] 解析成下标，颠倒的区间在这里交换，
//! 然后才交给线段树。

use crate::{
    error::Result,
    series::PriceSeries,
    tree::AggregationTree,
};
use clap::Subcommand;
use log::info;
use std::path::Path;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Sum of closes between two dates (inclusive)
    Sum {
        /// left date (YYYY-MM-DD)
        left: String,
        /// right date (YYYY-MM-DD)
        right: String,
    },
    /// Minimum close between two dates (inclusive)
    Min { left: String, right: String },
    /// Maximum close between two dates (inclusive)
    Max { left: String, right: String },
    /// Overwrite the close of one date
    Update {
        /// date (YYYY-MM-DD)
        date: String,
        /// new close value
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Sum, minimum and maximum of the whole series
    All,
}

pub struct StockScope {
    series: PriceSeries,
    tree: AggregationTree,
}

impl StockScope {
    pub fn new(series: PriceSeries) -> Self {
        let tree = AggregationTree::build(series.values());
        StockScope { series, tree }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let scope = Self::new(PriceSeries::from_path(path)?);
        match (scope.series.dates().first(), scope.series.dates().last()) {
            (Some(first), Some(last)) => {
                info!("indexed {} closes, {} .. {}", scope.tree.len(), first, last)
            }
            _ => info!("indexed an empty series"),
        }
        Ok(scope)
    }

    /// 执行一条命令，返回要打印的一行
    pub fn execute(&mut self, command: &Command) -> Result<String> {
        match command {
            Command::Sum { left, right } => {
                let (l, r) = self.series.window(left, right)?;
                let v = self.tree.query_sum(l, r)?;
                Ok(format!("SUM {}..{} = {:?}", left, right, v))
            }
            Command::Min { left, right } => {
                let (l, r) = self.series.window(left, right)?;
                let v = self.tree.query_min(l, r)?;
                Ok(format!("MIN {}..{} = {:?}", left, right, v))
            }
            Command::Max { left, right } => {
                let (l, r) = self.series.window(left, right)?;
                let v = self.tree.query_max(l, r)?;
                Ok(format!("MAX {}..{} = {:?}", left, right, v))
            }
            Command::Update { date, value } => {
                let i = self.series.position_of(date)?;
                self.tree.update(i, *value)?;
                Ok(format!("Updated {} -> {:?}", date, value))
            }
            Command::All => {
                let agg = self.tree.query_all();
                // 空序列只有单位元，不显示 inf
                if agg.is_identity() {
                    return Ok("ALL: no data".to_string());
                }
                Ok(format!(
                    "ALL: sum={:?}, min={:?}, max={:?}",
                    agg.sum, agg.min, agg.max
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, StockScope};
    use crate::{error::Error, series::PriceSeries};

    fn scope() -> StockScope {
        let csv = "date,close\n\
                   2024-03-01,1\n\
                   2024-03-04,2\n\
                   2024-03-05,3\n\
                   2024-03-06,4\n\
                   2024-03-07,5\n";
        StockScope::new(PriceSeries::from_reader(csv.as_bytes()).unwrap())
    }

    #[test]
    fn test_window_queries() {
        let mut s = scope();
        let left = "2024-03-04".to_string();
        let right = "2024-03-06".to_string();
        assert_eq!(
            s.execute(&Command::Sum {
                left: left.clone(),
                right: right.clone()
            })
            .unwrap(),
            "SUM 2024-03-04..2024-03-06 = 9.0"
        );
        assert_eq!(
            s.execute(&Command::Min {
                left: left.clone(),
                right: right.clone()
            })
            .unwrap(),
            "MIN 2024-03-04..2024-03-06 = 2.0"
        );
        assert_eq!(
            s.execute(&Command::Max { left, right }).unwrap(),
            "MAX 2024-03-04..2024-03-06 = 4.0"
        );
    }

    #[test]
    fn test_reversed_window() {
        let mut s = scope();
        let sum = Command::Sum {
            left: "2024-03-07".to_string(),
            right: "2024-03-01".to_string(),
        };
        assert_eq!(
            s.execute(&sum).unwrap(),
            "SUM 2024-03-07..2024-03-01 = 15.0"
        );
    }

    #[test]
    fn test_float_formatting() {
        let mut s = scope();
        let update = Command::Update {
            date: "2024-03-01".to_string(),
            value: 1e20,
        };
        assert_eq!(s.execute(&update).unwrap(), "Updated 2024-03-01 -> 1e20");
        assert_eq!(
            s.execute(&Command::All).unwrap(),
            "ALL: sum=1e20, min=2.0, max=1e20"
        );
    }

    #[test]
    fn test_update_then_all() {
        let mut s = scope();
        let update = Command::Update {
            date: "2024-03-05".to_string(),
            value: -10.5,
        };
        assert_eq!(s.execute(&update).unwrap(), "Updated 2024-03-05 -> -10.5");
        assert_eq!(
            s.execute(&Command::All).unwrap(),
            "ALL: sum=1.5, min=-10.5, max=5.0"
        );
        assert_eq!(s.tree.value(2), Some(-10.5));
    }

    #[test]
    fn test_unknown_date() {
        let mut s = scope();
        assert!(matches!(
            s.execute(&Command::Sum {
                left: "2024-03-02".to_string(),
                right: "2024-03-06".to_string()
            }),
            Err(Error::DateNotFound(_))
        ));
        assert!(matches!(
            s.execute(&Command::Update {
                date: "March 5".to_string(),
                value: 1.0
            }),
            Err(Error::InvalidDate(_))
        ));
        // 失败的命令不影响数据
        assert_eq!(s.tree.query_all().sum, 15.0);
    }

    #[test]
    fn test_empty_series() {
        let mut s = StockScope::new(PriceSeries::default());
        assert_eq!(s.execute(&Command::All).unwrap(), "ALL: no data");
        assert!(s.series.is_empty());
        assert!(s.tree.is_empty());
    }
}
