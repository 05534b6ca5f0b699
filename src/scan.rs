//! Sweep every ticket of one length against a single target

use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;

use crate::solver::Solver;
use crate::ticket::{Ticket, TicketError};
use crate::utils::pow10;

pub const DEFAULT_LENGTH: usize = 6;
pub const DEFAULT_TARGET: i64 = 100;
pub const DEFAULT_CHUNK_SIZE: u64 = 10_000;
pub const MAX_SCAN_LENGTH: usize = 8;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot scan tickets of length {length}: expected 1 to {max}")]
    InvalidLength { length: usize, max: usize },
    #[error("Chunk size must be positive")]
    EmptyChunk,
    #[error("Ticket error: {0}")]
    TicketError(#[from] TicketError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub length: usize,
    pub target: i64,
    /// Tickets handled by one solver before its cache is dropped.
    pub chunk_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            target: DEFAULT_TARGET,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub length: usize,
    pub target: i64,
    pub solved: u64,
    /// In ascending order.
    pub unsolved: Vec<Ticket>,
}

impl ScanReport {
    pub fn total(&self) -> u64 {
        self.solved + self.unsolved.len() as u64
    }
}

/// Solve every ticket `0..10^length` for the configured target.
///
/// Chunks run in parallel, each on a fresh solver from `make_solver`, so
/// memory stays bounded by the chunk size.
///
/// # Errors
///
/// Returns an error if the length is outside `1..=MAX_SCAN_LENGTH` or the
/// chunk size is zero.
pub fn scan<F>(config: &ScanConfig, make_solver: F) -> Result<ScanReport, ScanError>
where
    F: Fn() -> Solver + Sync,
{
    if config.length == 0 || config.length > MAX_SCAN_LENGTH {
        return Err(ScanError::InvalidLength {
            length: config.length,
            max: MAX_SCAN_LENGTH,
        });
    }
    if config.chunk_size == 0 {
        return Err(ScanError::EmptyChunk);
    }

    let total = pow10(config.length);
    let chunks = total.div_ceil(config.chunk_size);
    info!(
        "Scanning {} tickets of length {} for target {} in {} chunks",
        total, config.length, config.target, chunks
    );

    let results = (0..chunks)
        .into_par_iter()
        .map(|chunk| scan_chunk(config, chunk, total, chunks, &make_solver))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = ScanReport {
        length: config.length,
        target: config.target,
        solved: 0,
        unsolved: Vec::new(),
    };
    for (solved, unsolved) in results {
        report.solved += solved;
        report.unsolved.extend(unsolved);
    }
    report.unsolved.sort_unstable();

    info!("Solved {} of {} tickets", report.solved, total);
    Ok(report)
}

fn scan_chunk<F>(
    config: &ScanConfig,
    chunk: u64,
    total: u64,
    chunks: u64,
    make_solver: &F,
) -> Result<(u64, Vec<Ticket>), TicketError>
where
    F: Fn() -> Solver,
{
    let start = chunk * config.chunk_size;
    let end = (start + config.chunk_size).min(total);

    let mut solver = make_solver();
    let mut solved = 0;
    let mut unsolved = Vec::new();
    for value in start..end {
        let ticket = Ticket::new(value, config.length)?;
        if solver.solve(ticket, config.target).is_some() {
            solved += 1;
        } else {
            unsolved.push(ticket);
        }
    }

    debug!("Chunk {} memoised {} tickets", chunk, solver.cache_len());
    info!(
        "Chunk {}/{} ({}..{}): {} solved",
        chunk + 1,
        chunks,
        start,
        end,
        solved
    );
    Ok((solved, unsolved))
}
