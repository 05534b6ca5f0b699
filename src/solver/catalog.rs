use crate::operations::{BinaryOp, UnaryOp};

/// The ordered operator lists a solver draws from. Order decides which
/// witness is reported first, never whether one exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    binary: Vec<BinaryOp>,
    unary: Vec<UnaryOp>,
}

impl Catalog {
    pub fn new(
        binary: impl IntoIterator<Item = BinaryOp>,
        unary: impl IntoIterator<Item = UnaryOp>,
    ) -> Self {
        Self {
            binary: binary.into_iter().collect(),
            unary: unary.into_iter().collect(),
        }
    }

    /// Every operator, in canonical order.
    pub fn full() -> Self {
        Self::new(BinaryOp::ALL, UnaryOp::ALL)
    }

    pub fn binary_ops(&self) -> &[BinaryOp] {
        &self.binary
    }

    pub fn unary_ops(&self) -> &[UnaryOp] {
        &self.unary
    }

    pub(crate) fn set_binary_ops(&mut self, ops: impl IntoIterator<Item = BinaryOp>) {
        self.binary = ops.into_iter().collect();
    }

    pub(crate) fn set_unary_ops(&mut self, ops: impl IntoIterator<Item = UnaryOp>) {
        self.unary = ops.into_iter().collect();
    }
}
