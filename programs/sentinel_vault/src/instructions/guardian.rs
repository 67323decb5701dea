use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::{EmergencyStopSet, PolicyUpdated};
use crate::state::*;

// Guardian operations are deliberately NOT gated by the pause flag:
// the guardian must be able to act on a frozen vault.

pub fn update_policy(
    ctx: Context<GuardianAction>,
    new_daily_cap: u64,
    new_cooldown_seconds: u64,
) -> Result<()> {
    require!(
        new_cooldown_seconds <= MAX_COOLDOWN_SECONDS,
        ErrorCode::InvalidPolicy
    );

    let vault = &mut ctx.accounts.vault;
    vault.daily_cap = new_daily_cap;
    vault.cooldown_seconds = new_cooldown_seconds;
    vault.bump_epoch();

    emit!(PolicyUpdated {
        vault: vault.key(),
        daily_cap: new_daily_cap,
        cooldown_seconds: new_cooldown_seconds,
        epoch: vault.epoch,
    });
    msg!(
        "Policy updated. Daily cap: {}, cooldown: {}s, epoch: {}",
        new_daily_cap,
        new_cooldown_seconds,
        vault.epoch
    );
    Ok(())
}

/// Idempotent: setting the current pause state again is a no-op success.
pub fn emergency_stop(ctx: Context<GuardianAction>, pause: bool) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.is_paused = pause;

    emit!(EmergencyStopSet {
        vault: vault.key(),
        is_paused: pause,
    });
    msg!("Emergency stop set to: {}", pause);
    Ok(())
}

#[derive(Accounts)]
pub struct GuardianAction<'info> {
    pub guardian: Signer<'info>,

    #[account(
        mut,
        has_one = guardian @ ErrorCode::Unauthorized,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}
