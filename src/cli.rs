use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use ticketmath::scan::{DEFAULT_CHUNK_SIZE, DEFAULT_LENGTH, DEFAULT_TARGET};
use ticketmath::solver::constants::EXHAUSTIVE_LENGTH;
use ticketmath::{BinaryOp, Catalog, ScanConfig, Solver, SolverConfig, Ticket, UnaryOp, scan};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Ticketmath - make a target number from the digits of a ticket
#[derive(Parser, Debug)]
#[command(name = "ticketmath")]
#[command(about = "Find arithmetic expressions over a ticket's digits that evaluate to a target")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find an expression for a single ticket
    Solve {
        /// Digits of the ticket, leading zeros included
        digits: String,

        /// Target value to reach
        #[arg(allow_negative_numbers = true)]
        target: i64,

        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Solve every ticket of a given length and list the ones that fail
    Scan {
        /// Number of digits per ticket
        #[arg(long, default_value_t = DEFAULT_LENGTH)]
        length: usize,

        /// Target value to reach
        #[arg(long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
        target: i64,

        /// Tickets per solver before its memo is dropped
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: u64,

        #[command(flatten)]
        solver: SolverArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SolverArgs {
    /// Binary operators in trial order
    #[arg(long, value_delimiter = ',', default_values_t = BinaryOp::ALL)]
    pub binary: Vec<BinaryOp>,

    /// Unary operators in trial order
    #[arg(long, value_delimiter = ',', default_values_t = UnaryOp::ALL)]
    pub unary: Vec<UnaryOp>,

    /// Tickets up to this many digits are enumerated exhaustively
    #[arg(long, default_value_t = EXHAUSTIVE_LENGTH)]
    pub exhaustive_length: usize,
}

impl SolverArgs {
    pub fn build(&self) -> Solver {
        Solver::new()
            .with_catalog(Catalog::new(
                self.binary.iter().copied(),
                self.unary.iter().copied(),
            ))
            .with_config(SolverConfig {
                exhaustive_length: self.exhaustive_length,
            })
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialise logging")?;
    Ok(())
}

fn run_solve(digits: &str, target: i64, args: &SolverArgs) -> Result<()> {
    let ticket: Ticket = digits.parse().context("Invalid ticket")?;
    let mut solver = args.build();

    info!(
        "Searching for expressions using ticket {} that equal {}",
        ticket, target
    );

    match solver.solve(ticket, target) {
        Some(expr) => {
            println!("{} = {}", expr, target);
        }
        None => {
            warn!("No matching expression found");
            println!("Unknown.");
        }
    }
    Ok(())
}

fn run_scan(config: &ScanConfig, args: &SolverArgs) -> Result<()> {
    let report = scan(config, || args.build()).context("Scan failed")?;

    for ticket in &report.unsolved {
        println!("{}", ticket);
    }
    println!("Total solved: {}", report.solved);
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    match &args.command {
        Command::Solve {
            digits,
            target,
            solver,
        } => run_solve(digits, *target, solver),
        Command::Scan {
            length,
            target,
            chunk_size,
            solver,
        } => {
            let config = ScanConfig {
                length: *length,
                target: *target,
                chunk_size: *chunk_size,
            };
            run_scan(&config, solver)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_command_parsing() {
        let args = CliArgs::try_parse_from(["ticketmath", "solve", "0123", "-7"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Warn));
            match args.command {
                Command::Solve {
                    digits,
                    target,
                    solver,
                } => {
                    assert_eq!(digits, "0123");
                    assert_eq!(target, -7);
                    assert_eq!(solver.binary, BinaryOp::ALL.to_vec());
                    assert_eq!(solver.unary, UnaryOp::ALL.to_vec());
                    assert_eq!(solver.exhaustive_length, EXHAUSTIVE_LENGTH);
                }
                Command::Scan { .. } => unreachable!("parsed as scan"),
            }
        }
    }

    #[test]
    fn test_scan_command_defaults() {
        let args = CliArgs::try_parse_from(["ticketmath", "scan", "--log-level", "info"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Info));
            assert!(matches!(
                args.command,
                Command::Scan {
                    length: DEFAULT_LENGTH,
                    target: DEFAULT_TARGET,
                    chunk_size: DEFAULT_CHUNK_SIZE,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_operator_lists() {
        let args = CliArgs::try_parse_from([
            "ticketmath",
            "solve",
            "1234",
            "10",
            "--binary",
            "mul,+",
            "--unary",
            "sqrt",
        ]);
        assert!(args.is_ok());
        if let Ok(CliArgs {
            command: Command::Solve { solver, .. },
            ..
        }) = args
        {
            assert_eq!(solver.binary, vec![BinaryOp::Multiply, BinaryOp::Add]);
            assert_eq!(solver.unary, vec![UnaryOp::SquareRoot]);
            let built = solver.build();
            assert_eq!(
                built.catalog().binary_ops(),
                &[BinaryOp::Multiply, BinaryOp::Add]
            );
        }

        let bad = CliArgs::try_parse_from(["ticketmath", "solve", "12", "3", "--binary", "mod"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
