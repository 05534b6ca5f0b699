use std::rc::Rc;

use log::debug;

use crate::expression::Expression;
use crate::operations::{BinaryOp, UnaryOp};
use crate::solver::cache::{SolutionCache, Solutions};
use crate::solver::catalog::Catalog;
use crate::solver::constants::EXHAUSTIVE_LENGTH;
use crate::ticket::Ticket;

/// Configuration for the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Tickets of at most this many digits are answered by table lookup.
    /// Zero behaves as one.
    pub exhaustive_length: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exhaustive_length: EXHAUSTIVE_LENGTH,
        }
    }
}

/// Finds expressions over a ticket's digits that evaluate to a target.
///
/// A solver owns its memo of exhaustive tables, which grows with every
/// distinct sub-ticket it visits. Use one solver per batch of related
/// queries and drop it (or [`Solver::clear_cache`]) to release memory.
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    catalog: Catalog,
    cache: SolutionCache,
}

/// Borrowed view of a solver used by the recursive search, so the catalog
/// can be read while the cache is filled.
pub(crate) struct Search<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) cache: &'a mut SolutionCache,
    pub(crate) exhaustive_length: usize,
}

impl Solver {
    /// A solver with no operators; add them with [`Solver::with_binary_ops`]
    /// and [`Solver::with_unary_ops`].
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            catalog: Catalog::default(),
            cache: SolutionCache::default(),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self.cache.clear();
        self
    }

    pub fn with_binary_ops(mut self, ops: impl IntoIterator<Item = BinaryOp>) -> Self {
        self.catalog.set_binary_ops(ops);
        self.cache.clear();
        self
    }

    pub fn with_unary_ops(mut self, ops: impl IntoIterator<Item = UnaryOp>) -> Self {
        self.catalog.set_unary_ops(ops);
        self.cache.clear();
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find an expression over the digits of `ticket` equal to `target`.
    ///
    /// Returns the first witness found; it is not necessarily the shortest.
    pub fn solve(&mut self, ticket: Ticket, target: i64) -> Option<Expression> {
        debug!("Solving ticket {} for {}", ticket, target);
        let found = self.search().solve(ticket, target);
        match &found {
            Some(expr) => debug!("Ticket {} reaches {} as {}", ticket, target, expr),
            None => debug!("Ticket {} cannot reach {}", ticket, target),
        }
        found
    }

    /// Every value reachable from `ticket`, each with one witness.
    pub fn solutions(&mut self, ticket: Ticket) -> Rc<Solutions> {
        self.search().solutions(ticket)
    }

    /// Number of tickets with a memoised table.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub(crate) fn search(&mut self) -> Search<'_> {
        Search {
            catalog: &self.catalog,
            cache: &mut self.cache,
            exhaustive_length: self.config.exhaustive_length,
        }
    }
}

/// A solver using every operator in canonical order.
impl Default for Solver {
    fn default() -> Self {
        Self::new().with_catalog(Catalog::full())
    }
}
