use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::expression::Expression;
use crate::ticket::Ticket;

/// Every value reachable from one ticket, with the first witness found for
/// it. Ordered by value so iteration, and therefore the witness a search
/// reports, is reproducible.
pub type Solutions = BTreeMap<i64, Expression>;

/// Exhaustive tables keyed by ticket. Each entry is written once, when
/// complete, and never evicted.
#[derive(Debug, Default)]
pub(crate) struct SolutionCache {
    entries: HashMap<Ticket, Rc<Solutions>>,
}

impl SolutionCache {
    pub fn get(&self, ticket: &Ticket) -> Option<Rc<Solutions>> {
        self.entries.get(ticket).cloned()
    }

    pub fn insert(&mut self, ticket: Ticket, solutions: Solutions) -> Rc<Solutions> {
        let solutions = Rc::new(solutions);
        self.entries.insert(ticket, Rc::clone(&solutions));
        solutions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
