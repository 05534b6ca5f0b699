use crate::expression::Expression;
use crate::solver::core::Search;
use crate::ticket::Ticket;

impl Search<'_> {
    pub(crate) fn solve(&mut self, ticket: Ticket, target: i64) -> Option<Expression> {
        // a single digit cannot be split
        if ticket.length() <= self.exhaustive_length.max(1) {
            return self.solutions(ticket).get(&target).cloned();
        }

        if let Some(found) = self.solve_binary(ticket, target) {
            return Some(found);
        }

        // the outermost operator may be unary
        let catalog = self.catalog;
        for &op in catalog.unary_ops() {
            if let Some(operand) = op.reverse(target)
                && let Some(found) = self.solve_binary(ticket, operand)
            {
                return Some(op.render(found));
            }
        }
        None
    }

    /// Try split sizes `2..length`, then the most unbalanced split, `1`.
    pub(crate) fn solve_binary(&mut self, ticket: Ticket, target: i64) -> Option<Expression> {
        (2..ticket.length())
            .chain(std::iter::once(1))
            .find_map(|at| self.solve_split(ticket, target, at))
    }

    /// Enumerate the shorter side of the split and solve the longer side for
    /// the operand each inverse demands.
    pub(crate) fn solve_split(
        &mut self,
        ticket: Ticket,
        target: i64,
        at: usize,
    ) -> Option<Expression> {
        let catalog = self.catalog;
        let (prefix, suffix) = ticket.split(at);

        if prefix.length() >= suffix.length() {
            let known = self.solutions(suffix);
            for (&right, right_expr) in known.iter() {
                for &op in catalog.binary_ops() {
                    if let Some(left) = op.reverse_left(target, right)
                        && let Some(left_expr) = self.solve(prefix, left)
                    {
                        return Some(op.render(left_expr, right_expr.clone()));
                    }
                }
            }
        } else {
            let known = self.solutions(prefix);
            for (&left, left_expr) in known.iter() {
                for &op in catalog.binary_ops() {
                    if let Some(right) = op.reverse_right(target, left)
                        && let Some(right_expr) = self.solve(suffix, right)
                    {
                        return Some(op.render(left_expr.clone(), right_expr));
                    }
                }
            }
        }
        None
    }
}
