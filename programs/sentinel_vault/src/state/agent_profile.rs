use anchor_lang::prelude::*;

use crate::constants::{
    AVG_PNL_WEIGHT, BPS_DENOMINATOR, MIN_BONUS_TRADE_COUNT, RISK_WEIGHT_SCALE, WIN_RATE_WEIGHT,
};
use crate::errors::ErrorCode;

/// Track record for one registered trading agent. Written only by
/// oracle trade reports; profit distribution reads it to size the
/// performance bonus.
#[account]
pub struct AgentProfile {
    pub agent_key: Pubkey,
    pub vault: Pubkey,
    pub trade_count: u64,
    pub winning_trades: u64,
    /// Net realized PnL in basis points. Can go negative.
    pub cumulative_pnl: i64,
    pub bump: u8,
}

impl AgentProfile {
    // 8 discriminator + 32 agent_key + 32 vault
    // + 8 trade_count + 8 winning_trades + 8 cumulative_pnl + 1 bump
    pub const INIT_SPACE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

    /// One-time setup on registration. Rejects the default pubkey (its
    /// PDA would collide with the freshly-initialized zero state and
    /// make registration replayable) and any already-populated profile.
    pub fn register(&mut self, agent_key: Pubkey, vault: Pubkey, bump: u8) -> Result<()> {
        require_keys_neq!(agent_key, Pubkey::default(), ErrorCode::InvalidAgentKey);
        require_keys_eq!(
            self.agent_key,
            Pubkey::default(),
            ErrorCode::AgentAlreadyRegistered
        );
        self.agent_key = agent_key;
        self.vault = vault;
        self.trade_count = 0;
        self.winning_trades = 0;
        self.cumulative_pnl = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn record_trade(&mut self, pnl_bps: i64, is_win: bool) -> Result<()> {
        self.trade_count = self
            .trade_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        if is_win {
            self.winning_trades = self
                .winning_trades
                .checked_add(1)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        }
        self.cumulative_pnl = self
            .cumulative_pnl
            .checked_add(pnl_bps)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Risk-adjusted performance score: a 60/40 blend of win rate (bps)
    /// and average per-trade PnL (bps). Pure; derived on demand and
    /// never stored. Zero for an empty track record.
    pub fn risk_score(&self) -> i128 {
        if self.trade_count == 0 {
            return 0;
        }
        let win_rate_bps =
            (self.winning_trades as i128) * (BPS_DENOMINATOR as i128) / (self.trade_count as i128);
        let avg_pnl_bps = (self.cumulative_pnl as i128) / (self.trade_count as i128);
        (win_rate_bps * WIN_RATE_WEIGHT + avg_pnl_bps * AVG_PNL_WEIGHT) / RISK_WEIGHT_SCALE
    }

    /// Bonus gate: a minimum track record and a positive score.
    /// Agents with zero trades can never qualify.
    pub fn is_bonus_eligible(&self) -> bool {
        self.trade_count >= MIN_BONUS_TRADE_COUNT && self.risk_score() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(trades: &[(i64, bool)]) -> AgentProfile {
        let mut profile = AgentProfile {
            agent_key: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            trade_count: 0,
            winning_trades: 0,
            cumulative_pnl: 0,
            bump: 255,
        };
        for &(pnl, win) in trades {
            profile.record_trade(pnl, win).unwrap();
        }
        profile
    }

    #[test]
    fn record_trade_accumulates_stats() {
        let alpha = profile_with(&[(150, true), (200, true), (-50, false), (180, true)]);
        assert_eq!(alpha.trade_count, 4);
        assert_eq!(alpha.winning_trades, 3);
        assert_eq!(alpha.cumulative_pnl, 480);
    }

    #[test]
    fn stronger_track_record_scores_higher() {
        // Alpha: 3 wins, +480 bps net. Bravo: 2 wins, -70 bps net.
        let alpha = profile_with(&[(150, true), (200, true), (-50, false), (180, true)]);
        let bravo = profile_with(&[(80, true), (-120, false), (60, true), (-90, false)]);
        assert!(alpha.risk_score() > bravo.risk_score());
    }

    #[test]
    fn score_is_monotonic_in_win_rate_and_pnl() {
        let base = profile_with(&[(100, true), (-100, false), (50, true), (-50, false)]);
        // Same PnL, one more win.
        let better_rate = profile_with(&[(100, true), (-100, true), (50, true), (-50, false)]);
        assert!(better_rate.risk_score() > base.risk_score());
        // Same wins, strictly better PnL on one trade.
        let better_pnl = profile_with(&[(300, true), (-100, false), (50, true), (-50, false)]);
        assert!(better_pnl.risk_score() > base.risk_score());
    }

    #[test]
    fn empty_profile_scores_zero_and_is_ineligible() {
        let empty = profile_with(&[]);
        assert_eq!(empty.risk_score(), 0);
        assert!(!empty.is_bonus_eligible());
    }

    #[test]
    fn eligibility_needs_track_record_and_positive_score() {
        // Two profitable trades: positive score but below the count floor.
        let thin = profile_with(&[(200, true), (100, true)]);
        assert!(thin.risk_score() > 0);
        assert!(!thin.is_bonus_eligible());
        // Deep drawdown: plenty of trades, negative score.
        let losing = profile_with(&[(-500, false), (-400, false), (-300, false), (-200, false)]);
        assert!(losing.risk_score() < 0);
        assert!(!losing.is_bonus_eligible());
        // Solid record qualifies.
        let solid = profile_with(&[(150, true), (200, true), (-50, false), (180, true)]);
        assert!(solid.is_bonus_eligible());
    }

    #[test]
    fn registration_rejects_default_key_and_replay() {
        let mut profile = profile_with(&[]);
        profile.agent_key = Pubkey::default();
        let vault = Pubkey::new_unique();

        // The default key is never a valid agent.
        let err = profile.register(Pubkey::default(), vault, 255).unwrap_err();
        assert_eq!(err, error!(ErrorCode::InvalidAgentKey));

        let agent = Pubkey::new_unique();
        profile.register(agent, vault, 255).unwrap();
        profile.record_trade(100, true).unwrap();

        // Re-registering must not re-zero the track record.
        let err = profile.register(agent, vault, 255).unwrap_err();
        assert_eq!(err, error!(ErrorCode::AgentAlreadyRegistered));
        assert_eq!(profile.trade_count, 1);
    }

    #[test]
    fn losses_drag_cumulative_pnl_negative() {
        let profile = profile_with(&[(-120, false), (-90, false)]);
        assert_eq!(profile.cumulative_pnl, -210);
        assert_eq!(profile.winning_trades, 0);
    }
}
