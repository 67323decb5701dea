use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Pooled-fund vault. One per authority key.
/// Holds the role assignments, the share ledger totals, and the
/// guardian policy parameters that gate every value-moving call.
/// Custody itself is a zero-data SOL PDA; this account is pure state.
#[account]
pub struct Vault {
    /// Creator. Registers agents and rotates guardian/oracle keys.
    pub authority: Pubkey,
    /// Safety role: policy updates and emergency stop.
    pub guardian: Pubkey,
    /// Trusted reporter: trade results and profit distribution.
    pub oracle: Pubkey,
    /// Shares outstanding across all positions.
    pub total_shares: u128,
    /// Lifetime deposits. Monotonic.
    pub total_deposited: u64,
    /// Lifetime distributed profits. Monotonic.
    pub total_profits_distributed: u64,
    /// Max value withdrawable per position per 24h window.
    pub daily_cap: u64,
    /// Minimum seconds between withdrawals from one position.
    pub cooldown_seconds: u64,
    pub is_paused: bool,
    pub agent_count: u32,
    /// Increments on every policy or role change.
    pub epoch: u64,
    pub bump: u8,
    pub sol_bump: u8,
}

impl Vault {
    // 8 discriminator
    // + 32 (authority) + 32 (guardian) + 32 (oracle)
    // + 16 (total_shares)
    // + 8 (total_deposited) + 8 (total_profits_distributed)
    // + 8 (daily_cap) + 8 (cooldown_seconds)
    // + 1 (is_paused)
    // + 4 (agent_count)
    // + 8 (epoch)
    // + 1 (bump) + 1 (sol_bump)
    pub const INIT_SPACE: usize = 8 + 32 + 32 + 32 + 16 + 8 + 8 + 8 + 8 + 1 + 4 + 8 + 1 + 1;

    pub fn require_active(&self) -> Result<()> {
        require!(!self.is_paused, ErrorCode::VaultPaused);
        Ok(())
    }

    /// Shares to issue for `amount` deposited, valued against the custody
    /// balance BEFORE the deposit lands. Using the post-transfer balance
    /// here would dilute existing holders.
    ///
    /// Bootstrap is 1:1. The `custody_before == 0` arm also covers a vault
    /// whose residual balance was fully drained while stray shares remain;
    /// re-anchoring at 1:1 keeps the ledger serviceable.
    ///
    /// A deposit small enough to floor to zero shares is rejected: the
    /// transfer would still land, gifting the lamports to existing
    /// holders with no claim issued in return.
    pub fn shares_for_deposit(&self, amount: u64, custody_before: u64) -> Result<u128> {
        if self.total_shares == 0 || custody_before == 0 {
            return Ok(amount as u128);
        }
        let shares = (amount as u128)
            .checked_mul(self.total_shares)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?
            .checked_div(custody_before as u128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        require!(shares > 0, ErrorCode::DepositTooSmall);
        Ok(shares)
    }

    /// Lamports redeemable for burning `shares` at the current NAV.
    /// Floor division: rounding always favors the vault so redemption can
    /// never overdraw custody. Issuance floors in the same direction.
    pub fn value_for_shares(&self, shares: u128, custody: u64) -> Result<u64> {
        require!(self.total_shares > 0, ErrorCode::NoSharesOutstanding);
        let value = shares
            .checked_mul(custody as u128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?
            .checked_div(self.total_shares)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
    }

    pub fn record_deposit(&mut self, amount: u64, shares_issued: u128) -> Result<()> {
        self.total_shares = self
            .total_shares
            .checked_add(shares_issued)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, shares_burned: u128) -> Result<()> {
        self.total_shares = self
            .total_shares
            .checked_sub(shares_burned)
            .ok_or_else(|| error!(ErrorCode::InsufficientShares))?;
        Ok(())
    }

    pub fn record_distribution(&mut self, profit_amount: u64) -> Result<()> {
        self.total_profits_distributed = self
            .total_profits_distributed
            .checked_add(profit_amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn bump_epoch(&mut self) {
        self.epoch = self.epoch.saturating_add(1);
    }
}
