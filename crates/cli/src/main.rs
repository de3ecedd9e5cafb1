use anyhow::Context;
use clap::{Parser, Subcommand};
use fundlens_core::charts::{sparkline_path, Frame, RadarChart, RadarDimension};
use fundlens_core::labels::{score_class, sector_icon, sentiment_color, sentiment_label};
use fundlens_core::portfolio::{recovery_days, Position};
use fundlens_core::{resolve_renderer_config, CardRenderer};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fundlens")]
#[command(about = "FundLens card renderer and chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render commentary into strategy-card HTML
    Render {
        /// Input file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
        /// YAML renderer configuration (optional)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the SVG path of a sparkline
    #[command(allow_negative_numbers = true)]
    Sparkline {
        /// Series values, oldest first
        #[arg(required = true)]
        values: Vec<f64>,
    },
    /// Print a radar chart SVG
    Radar {
        /// Dimensions as NAME=VALUE
        #[arg(required = true, value_parser = parse_dimension)]
        dimensions: Vec<RadarDimension>,
    },
    /// Describe a 0-100 fear/greed index
    #[command(allow_negative_numbers = true)]
    Sentiment { value: f64 },
    /// Print the CSS class for a fund grade
    Grade { grade: String },
    /// Print the icon for a sector name
    Sector { name: String },
    /// Estimate trading days to recover a loss
    #[command(allow_negative_numbers = true)]
    RecoveryDays {
        shares: f64,
        cost_price: f64,
        current_nav: f64,
        /// Unrealised profit; a position without a loss needs no recovery
        #[arg(long)]
        profit: Option<f64>,
        /// Expected annual return, e.g. 0.08 for 8%
        #[arg(long, default_value_t = 0.08)]
        annual_return: f64,
    },
}

fn parse_dimension(arg: &str) -> Result<RadarDimension, String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{arg}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing dimension name in `{arg}`"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value in `{arg}`: {e}"))?;
    Ok(RadarDimension {
        name: name.to_owned(),
        value,
    })
}

fn read_input(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("fundlens=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { file, config }) => {
            let renderer = CardRenderer::new(resolve_renderer_config(config)?)?;
            let text = read_input(file)?;
            println!("{}", renderer.render(Some(&text)));
        }
        Some(Commands::Sparkline { values }) => {
            let path = sparkline_path(&values, Frame::SPARKLINE);
            if path.is_empty() {
                eprintln!("Need at least two finite values.");
            } else {
                println!("{}", path);
            }
        }
        Some(Commands::Radar { dimensions }) => {
            let svg = RadarChart::default().render_svg(&dimensions);
            if svg.is_empty() {
                eprintln!("Need at least three dimensions.");
            } else {
                println!("{}", svg);
            }
        }
        Some(Commands::Sentiment { value }) => {
            println!("{} {}", sentiment_label(value), sentiment_color(value));
        }
        Some(Commands::Grade { grade }) => {
            println!("{}", score_class(Some(&grade)));
        }
        Some(Commands::Sector { name }) => {
            println!("{} {}", sector_icon(&name), name);
        }
        Some(Commands::RecoveryDays {
            shares,
            cost_price,
            current_nav,
            profit,
            annual_return,
        }) => {
            let position = Position {
                shares,
                cost_price,
                current_nav,
                profit,
            };
            println!("{}", recovery_days(&position, annual_return));
        }
        None => {
            println!("Use 'fundlens --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        let d = parse_dimension("耐心=4.5").unwrap();
        assert_eq!(d.name, "耐心");
        assert_eq!(d.value, 4.5);
        assert!(parse_dimension("耐心").is_err());
        assert!(parse_dimension("=3").is_err());
        assert!(parse_dimension("耐心=高").is_err());
    }

    #[test]
    fn test_cli_parses_negative_sparkline_values() {
        let cli = Cli::try_parse_from(["fundlens", "sparkline", "-1.5", "2", "3"]).unwrap();
        match cli.command {
            Some(Commands::Sparkline { values }) => assert_eq!(values, vec![-1.5, 2.0, 3.0]),
            _ => panic!("expected sparkline command"),
        }
    }

    #[test]
    fn test_cli_radar_requires_pairs() {
        assert!(Cli::try_parse_from(["fundlens", "radar", "耐心=4", "纪律"]).is_err());
        assert!(Cli::try_parse_from(["fundlens", "radar", "耐心=4", "纪律=3"]).is_ok());
    }

    #[test]
    fn test_cli_render_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["fundlens", "render"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Render {
                file: None,
                config: None
            })
        ));
    }

    #[test]
    fn test_cli_recovery_days_accepts_negative_profit() {
        let cli = Cli::try_parse_from([
            "fundlens",
            "recovery-days",
            "1000",
            "1.0",
            "0.9",
            "--profit",
            "-100",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::RecoveryDays {
                profit,
                annual_return,
                ..
            }) => {
                assert_eq!(profit, Some(-100.0));
                assert_eq!(annual_return, 0.08);
            }
            _ => panic!("expected recovery-days command"),
        }
    }

    #[test]
    fn test_cli_label_commands() {
        assert!(Cli::try_parse_from(["fundlens", "grade", "A+"]).is_ok());
        assert!(Cli::try_parse_from(["fundlens", "sector", "半导体"]).is_ok());
        assert!(Cli::try_parse_from(["fundlens", "grade"]).is_err());
    }
}
