/// Shared percentage budget for any sibling set (groups in a strategy,
/// allocations in a group).
pub const PERCENTAGE_BUDGET: u8 = 100;

/// Minimum length for wallet and group names.
pub const NAME_MIN_LEN: usize = 3;

/// Maximum length for wallet and group names.
pub const NAME_MAX_LEN: usize = 50;

/// Tolerance when converting a slider proportion in [0, 1] to a percentage.
/// Differences below this are treated as equal so float drift near the
/// ceiling does not thrash the clamp.
pub const PROPORTION_EPSILON: f64 = 1e-4;

/// Number of color families in the fixed palette.
pub const PALETTE_FAMILIES: usize = 8;

/// Number of shades within each color family.
pub const PALETTE_SHADES: usize = 7;

/// Settings key holding the id of the currently active wallet.
pub const ACTIVE_WALLET_SETTING_KEY: &str = "active_wallet_id";
