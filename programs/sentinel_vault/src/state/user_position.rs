use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_DAY;
use crate::errors::ErrorCode;

/// Per-depositor share position. Created lazily on first deposit and
/// never closed; a fully withdrawn position stays behind with zero
/// shares as an audit trail.
#[account]
pub struct UserPosition {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub shares: u128,
    /// Unix timestamp of the most recent withdrawal. Zero until then.
    pub last_withdrawal_timestamp: i64,
    /// Value withdrawn inside the current 24h rolling window.
    pub withdrawn_today: u64,
    pub bump: u8,
}

impl UserPosition {
    // 8 discriminator + 32 owner + 32 vault + 16 shares
    // + 8 last_withdrawal_timestamp + 8 withdrawn_today + 1 bump
    pub const INIT_SPACE: usize = 8 + 32 + 32 + 16 + 8 + 8 + 1;

    pub fn credit_shares(&mut self, shares: u128) -> Result<()> {
        self.shares = self
            .shares
            .checked_add(shares)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Policy gate for a withdrawal of `value` lamports at time `now`.
    /// Checks the cooldown, then the daily cap over a rolling 24h window
    /// anchored at the last withdrawal. All checks run before any field
    /// is written, so a rejected call leaves the position untouched.
    pub fn gate_withdrawal(
        &mut self,
        now: i64,
        value: u64,
        daily_cap: u64,
        cooldown_seconds: u64,
    ) -> Result<()> {
        let mut spent_in_window = self.withdrawn_today;
        if self.last_withdrawal_timestamp != 0 {
            let elapsed = now.saturating_sub(self.last_withdrawal_timestamp);
            // cooldown_seconds is bounded by MAX_COOLDOWN_SECONDS, the
            // cast cannot wrap.
            require!(elapsed >= cooldown_seconds as i64, ErrorCode::CooldownActive);
            if elapsed >= SECONDS_PER_DAY {
                spent_in_window = 0;
            }
        }
        let projected = spent_in_window
            .checked_add(value)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        require!(projected <= daily_cap, ErrorCode::DailyCapExceeded);

        self.withdrawn_today = projected;
        self.last_withdrawal_timestamp = now;
        Ok(())
    }

    pub fn burn_shares(&mut self, shares: u128) -> Result<()> {
        self.shares = self
            .shares
            .checked_sub(shares)
            .ok_or_else(|| error!(ErrorCode::InsufficientShares))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL: u64 = 1_000_000_000;

    fn fresh_position() -> UserPosition {
        UserPosition {
            owner: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            shares: (10 * SOL) as u128,
            last_withdrawal_timestamp: 0,
            withdrawn_today: 0,
            bump: 255,
        }
    }

    #[test]
    fn first_withdrawal_skips_cooldown() {
        let mut pos = fresh_position();
        pos.gate_withdrawal(1_000, SOL, 5 * SOL, 10).unwrap();
        assert_eq!(pos.withdrawn_today, SOL);
        assert_eq!(pos.last_withdrawal_timestamp, 1_000);
    }

    #[test]
    fn second_withdrawal_inside_cooldown_fails_then_succeeds() {
        let mut pos = fresh_position();
        pos.gate_withdrawal(1_000, SOL, 5 * SOL, 10).unwrap();
        // 4 seconds later: still cooling down.
        let err = pos.gate_withdrawal(1_004, SOL, 5 * SOL, 10).unwrap_err();
        assert_eq!(err, error!(ErrorCode::CooldownActive));
        // State untouched by the rejected call.
        assert_eq!(pos.withdrawn_today, SOL);
        assert_eq!(pos.last_withdrawal_timestamp, 1_000);
        // After the cooldown elapses it goes through.
        pos.gate_withdrawal(1_010, SOL, 5 * SOL, 10).unwrap();
        assert_eq!(pos.withdrawn_today, 2 * SOL);
    }

    #[test]
    fn daily_cap_rejects_even_with_sufficient_shares() {
        let mut pos = fresh_position();
        let err = pos.gate_withdrawal(1_000, 6 * SOL, 5 * SOL, 10).unwrap_err();
        assert_eq!(err, error!(ErrorCode::DailyCapExceeded));
        assert_eq!(pos.withdrawn_today, 0);
        assert_eq!(pos.last_withdrawal_timestamp, 0);
    }

    #[test]
    fn cap_accumulates_within_window() {
        let mut pos = fresh_position();
        pos.gate_withdrawal(10, 3 * SOL, 5 * SOL, 0).unwrap();
        pos.gate_withdrawal(110, 2 * SOL, 5 * SOL, 0).unwrap();
        // Cap fully consumed; one more lamport trips it.
        let err = pos.gate_withdrawal(210, 1, 5 * SOL, 0).unwrap_err();
        assert_eq!(err, error!(ErrorCode::DailyCapExceeded));
    }

    #[test]
    fn window_resets_after_24h() {
        let mut pos = fresh_position();
        pos.gate_withdrawal(1, 5 * SOL, 5 * SOL, 0).unwrap();
        // One second short of the rolling boundary: still capped.
        let err = pos
            .gate_withdrawal(SECONDS_PER_DAY, 1, 5 * SOL, 0)
            .unwrap_err();
        assert_eq!(err, error!(ErrorCode::DailyCapExceeded));
        // At the boundary the window rolls and the cap is fresh.
        pos.gate_withdrawal(SECONDS_PER_DAY + 1, 4 * SOL, 5 * SOL, 0)
            .unwrap();
        assert_eq!(pos.withdrawn_today, 4 * SOL);
    }

    #[test]
    fn burn_cannot_exceed_held_shares() {
        let mut pos = fresh_position();
        assert!(pos.burn_shares((10 * SOL) as u128 + 1).is_err());
        pos.burn_shares((10 * SOL) as u128).unwrap();
        assert_eq!(pos.shares, 0);
    }
}
