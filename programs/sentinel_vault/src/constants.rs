pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_SOL_SEED: &[u8] = b"vault_sol";
pub const POSITION_SEED: &[u8] = b"position";
pub const AGENT_SEED: &[u8] = b"agent";

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Fixed 24h rolling window for the daily withdrawal cap.
/// `withdrawn_today` resets once this much time has passed since the
/// last recorded withdrawal.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Upper bound on the guardian-configurable cooldown (7 days).
pub const MAX_COOLDOWN_SECONDS: u64 = 7 * 86_400;

/// Hard ceiling on the per-distribution agent performance fee (50%).
pub const MAX_AGENT_FEE_BPS: u16 = 5_000;

/// Agents need a minimum track record before qualifying for a bonus.
pub const MIN_BONUS_TRADE_COUNT: u64 = 3;

// Risk score = (win_rate_bps * WIN_RATE_WEIGHT + avg_pnl_bps * AVG_PNL_WEIGHT)
//              / RISK_WEIGHT_SCALE
// Both terms are monotonic, so a strictly better track record never
// produces a lower score.
pub const WIN_RATE_WEIGHT: i128 = 60;
pub const AVG_PNL_WEIGHT: i128 = 40;
pub const RISK_WEIGHT_SCALE: i128 = 100;
