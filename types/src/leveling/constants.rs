/// Experience needed to go from network level 1 to level 2.
pub const NETWORK_BASE: f64 = 10_000.0;

/// Extra experience each further network level costs over the previous one.
pub const NETWORK_GROWTH: f64 = 2_500.0;

pub const NETWORK_HALF_GROWTH: f64 = 0.5 * NETWORK_GROWTH;

/// `p/2` term of the p-q formula that inverts the cumulative network cost.
pub const NETWORK_REVERSE_PQ_PREFIX: f64 = -(NETWORK_BASE - NETWORK_HALF_GROWTH) / NETWORK_GROWTH;

pub const NETWORK_REVERSE_CONST: f64 = NETWORK_REVERSE_PQ_PREFIX * NETWORK_REVERSE_PQ_PREFIX;

pub const NETWORK_GROWTH_DIVIDES_2: f64 = 2.0 / NETWORK_GROWTH;

/// Levels at the start of each prestige with a discounted cost.
pub const EASY_LEVELS: u64 = 4;

/// Combined cost of the easy levels (500 + 1000 + 2000 + 3500).
pub const EASY_LEVELS_XP: u64 = 7_000;

/// Cost of every Bed Wars level past the easy ones.
pub const FLAT_LEVEL_XP: u64 = 5_000;

pub const LEVELS_PER_PRESTIGE: u64 = 100;

pub const XP_PER_PRESTIGE: u64 = (LEVELS_PER_PRESTIGE - EASY_LEVELS) * FLAT_LEVEL_XP + EASY_LEVELS_XP;

/// Past this many prestiges the cost table is folded by subtraction instead of modulo.
pub const HIGHEST_PRESTIGE: u64 = 10;
