//! StockScope 命令行
//!
//! ```bash
//! stockscope --data prices.csv sum 2024-01-02 2024-01-31
//! stockscope --data prices.csv update 2024-01-05 101.5
//! stockscope --data prices.csv all
//! ```
//!
//! `RUST_LOG` 控制日志级别（默认 info），日志输出到 stderr。

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use stockscope::frontend::{Command, StockScope};

/// StockScope segment tree CLI
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to CSV with columns: date,close (in ascending date order)
    #[arg(long, env = "STOCKSCOPE_DATA")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut scope = StockScope::open(&cli.data)
        .with_context(|| format!("failed to load {}", cli.data.display()))?;
    let line = scope.execute(&cli.command)?;
    println!("{}", line);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};
    use stockscope::frontend::Command;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update() {
        let cli = Cli::try_parse_from([
            "stockscope",
            "--data",
            "prices.csv",
            "update",
            "2024-01-05",
            "-3.5",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Update {
                date: "2024-01-05".to_string(),
                value: -3.5
            }
        );
    }

    #[test]
    fn test_parse_window() {
        let cli =
            Cli::try_parse_from(["stockscope", "--data", "p.csv", "max", "2024-01-02", "2024-01-09"])
                .unwrap();
        assert_eq!(
            cli.command,
            Command::Max {
                left: "2024-01-02".to_string(),
                right: "2024-01-09".to_string()
            }
        );
        assert!(Cli::try_parse_from(["stockscope", "--data", "p.csv", "sum", "2024-01-02"]).is_err());
    }
}
