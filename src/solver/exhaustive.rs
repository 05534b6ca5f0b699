use std::rc::Rc;

use log::debug;

use crate::expression::Expression;
use crate::solver::cache::Solutions;
use crate::solver::core::Search;
use crate::ticket::Ticket;

impl Search<'_> {
    /// All values reachable from `ticket`, memoised per ticket.
    pub(crate) fn solutions(&mut self, ticket: Ticket) -> Rc<Solutions> {
        if let Some(cached) = self.cache.get(&ticket) {
            return cached;
        }

        let catalog = self.catalog;
        let mut found = Solutions::new();
        found.insert(ticket.operand(), Expression::Literal(ticket));

        for at in 1..ticket.length() {
            let (prefix, suffix) = ticket.split(at);
            let left = self.solutions(prefix);
            let right = self.solutions(suffix);

            for (&left_value, left_expr) in left.iter() {
                for (&right_value, right_expr) in right.iter() {
                    for &op in catalog.binary_ops() {
                        if let Some(value) = op.apply(left_value, right_value) {
                            found.entry(value).or_insert_with(|| {
                                op.render(left_expr.clone(), right_expr.clone())
                            });
                        }
                    }
                }
            }
        }

        self.close_under_unary(&mut found);

        debug!("Ticket {} reaches {} values", ticket, found.len());
        self.cache.insert(ticket, found)
    }

    /// Apply every unary operator to every known value until a full pass
    /// adds nothing new.
    fn close_under_unary(&self, found: &mut Solutions) {
        loop {
            let mut discovered = Solutions::new();
            for (&value, expr) in found.iter() {
                for &op in self.catalog.unary_ops() {
                    if let Some(next) = op.apply(value)
                        && !found.contains_key(&next)
                    {
                        discovered
                            .entry(next)
                            .or_insert_with(|| op.render(expr.clone()));
                    }
                }
            }

            if discovered.is_empty() {
                break;
            }
            found.extend(discovered);
        }
    }
}
