/// Tickets up to this many digits are answered from the exhaustive table.
pub const EXHAUSTIVE_LENGTH: usize = 4;
