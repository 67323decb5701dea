use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::{AgentRegistered, RolesUpdated};
use crate::state::*;

pub fn initialize(
    ctx: Context<Initialize>,
    guardian: Pubkey,
    oracle: Pubkey,
    daily_cap: u64,
    cooldown_seconds: u64,
) -> Result<()> {
    require!(
        cooldown_seconds <= MAX_COOLDOWN_SECONDS,
        ErrorCode::InvalidPolicy
    );

    let vault = &mut ctx.accounts.vault;
    vault.authority = ctx.accounts.authority.key();
    vault.guardian = guardian;
    vault.oracle = oracle;
    vault.total_shares = 0;
    vault.total_deposited = 0;
    vault.total_profits_distributed = 0;
    vault.daily_cap = daily_cap;
    vault.cooldown_seconds = cooldown_seconds;
    vault.is_paused = false;
    vault.agent_count = 0;
    vault.epoch = 0;
    vault.bump = ctx.bumps.vault;
    vault.sol_bump = ctx.bumps.vault_sol;

    msg!(
        "Vault initialized. Guardian: {}, Oracle: {}, daily cap: {}, cooldown: {}s",
        guardian,
        oracle,
        daily_cap,
        cooldown_seconds
    );
    Ok(())
}

pub fn register_agent(ctx: Context<RegisterAgent>, agent_key: Pubkey) -> Result<()> {
    let vault_key = ctx.accounts.vault.key();
    let profile = &mut ctx.accounts.agent_profile;
    profile.register(agent_key, vault_key, ctx.bumps.agent_profile)?;

    let vault = &mut ctx.accounts.vault;
    vault.agent_count = vault
        .agent_count
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    emit!(AgentRegistered {
        vault: vault.key(),
        agent_key,
    });
    msg!("Agent registered: {}", agent_key);
    Ok(())
}

pub fn update_roles(
    ctx: Context<UpdateRoles>,
    new_guardian: Option<Pubkey>,
    new_oracle: Option<Pubkey>,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    if let Some(guardian) = new_guardian {
        vault.guardian = guardian;
    }
    if let Some(oracle) = new_oracle {
        vault.oracle = oracle;
    }
    vault.bump_epoch();

    emit!(RolesUpdated {
        vault: vault.key(),
        guardian: vault.guardian,
        oracle: vault.oracle,
        epoch: vault.epoch,
    });
    msg!(
        "Roles updated. Guardian: {}, Oracle: {}, epoch: {}",
        vault.guardian,
        vault.oracle,
        vault.epoch
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Vault::INIT_SPACE,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// Custody PDA. Zero-data system account; its lamport balance is the
    /// vault's held value.
    #[account(
        seeds = [VAULT_SOL_SEED, vault.key().as_ref()],
        bump
    )]
    pub vault_sol: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(agent_key: Pubkey)]
pub struct RegisterAgent<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ ErrorCode::Unauthorized,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    // init_if_needed so the duplicate case reaches the handler and fails
    // with AgentAlreadyRegistered instead of a raw allocation error.
    #[account(
        init_if_needed,
        payer = authority,
        space = AgentProfile::INIT_SPACE,
        seeds = [AGENT_SEED, vault.key().as_ref(), agent_key.as_ref()],
        bump
    )]
    pub agent_profile: Account<'info, AgentProfile>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateRoles<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ ErrorCode::Unauthorized,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}
