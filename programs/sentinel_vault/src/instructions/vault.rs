use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::{Deposited, Withdrawn};
use crate::state::*;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    ctx.accounts.vault.require_active()?;

    // Value the deposit against custody BEFORE the transfer lands;
    // crediting first would dilute existing holders.
    let custody_before = ctx.accounts.vault_sol.lamports();
    let shares_issued = ctx
        .accounts
        .vault
        .shares_for_deposit(amount, custody_before)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.vault_sol.to_account_info(),
            },
        ),
        amount,
    )?;

    let vault = &mut ctx.accounts.vault;
    vault.record_deposit(amount, shares_issued)?;

    let position = &mut ctx.accounts.user_position;
    if position.owner == Pubkey::default() {
        position.owner = ctx.accounts.user.key();
        position.vault = vault.key();
        position.bump = ctx.bumps.user_position;
    }
    position.credit_shares(shares_issued)?;

    emit!(Deposited {
        vault: vault.key(),
        user: ctx.accounts.user.key(),
        amount,
        shares_issued,
    });
    msg!("Deposited {} lamports for {} shares", amount, shares_issued);
    Ok(())
}

pub fn withdraw(ctx: Context<Withdraw>, shares_to_burn: u128) -> Result<()> {
    require!(shares_to_burn > 0, ErrorCode::InvalidAmount);
    ctx.accounts.vault.require_active()?;
    require!(
        shares_to_burn <= ctx.accounts.user_position.shares,
        ErrorCode::InsufficientShares
    );

    // Redeemable value is derived lazily from the live custody balance;
    // it is never cached on the position.
    let custody = ctx.accounts.vault_sol.lamports();
    let value = ctx
        .accounts
        .vault
        .value_for_shares(shares_to_burn, custody)?;

    let now = Clock::get()?.unix_timestamp;
    let daily_cap = ctx.accounts.vault.daily_cap;
    let cooldown_seconds = ctx.accounts.vault.cooldown_seconds;
    ctx.accounts
        .user_position
        .gate_withdrawal(now, value, daily_cap, cooldown_seconds)?;

    ctx.accounts.user_position.burn_shares(shares_to_burn)?;
    ctx.accounts.vault.record_withdrawal(shares_to_burn)?;

    let vault_key = ctx.accounts.vault.key();
    let seeds = &[
        VAULT_SOL_SEED,
        vault_key.as_ref(),
        &[ctx.accounts.vault.sol_bump],
    ];
    let signer = &[&seeds[..]];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault_sol.to_account_info(),
                to: ctx.accounts.owner.to_account_info(),
            },
            signer,
        ),
        value,
    )?;

    emit!(Withdrawn {
        vault: vault_key,
        user: ctx.accounts.owner.key(),
        shares_burned: shares_to_burn,
        value_out: value,
    });
    msg!("Withdrew {} lamports for {} shares", value, shares_to_burn);
    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        seeds = [VAULT_SOL_SEED, vault.key().as_ref()],
        bump = vault.sol_bump
    )]
    pub vault_sol: SystemAccount<'info>,

    // Lazily created on first deposit, then reused forever.
    #[account(
        init_if_needed,
        payer = user,
        space = UserPosition::INIT_SPACE,
        seeds = [POSITION_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_position: Account<'info, UserPosition>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        seeds = [VAULT_SOL_SEED, vault.key().as_ref()],
        bump = vault.sol_bump
    )]
    pub vault_sol: SystemAccount<'info>,

    #[account(
        mut,
        has_one = owner @ ErrorCode::Unauthorized,
        has_one = vault @ ErrorCode::Unauthorized,
        seeds = [POSITION_SEED, vault.key().as_ref(), owner.key().as_ref()],
        bump = user_position.bump
    )]
    pub user_position: Account<'info, UserPosition>,

    pub system_program: Program<'info, System>,
}
