//! Lookup tables and the bounds that keep every search finite

/// `n!` for `n` in `0..=20`; `21!` no longer fits an `i64`.
pub const FACTORIALS: [i64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
    2_432_902_008_176_640_000,
];

/// Largest value a power may produce.
pub const POWER_LIMIT: i64 = 10_000;

/// Exponents tried when recovering the exponent of a power.
pub const EXPONENT_SEARCH_STEPS: i64 = 20;

/// Largest root whose square the square-root inverse will produce.
pub const SQUARE_ROOT_LIMIT: i64 = 1_000_000;
