use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::{ProfitsDistributed, TradeReported};
use crate::state::*;

/// Trade reporting is informational and stays open while the vault is
/// paused; an agent's history is independent of vault operational state.
pub fn report_trade(ctx: Context<ReportTrade>, pnl_bps: i64, is_win: bool) -> Result<()> {
    let profile = &mut ctx.accounts.agent_profile;
    profile.record_trade(pnl_bps, is_win)?;

    emit!(TradeReported {
        vault: ctx.accounts.vault.key(),
        agent_key: profile.agent_key,
        pnl_bps,
        is_win,
    });
    msg!(
        "Trade reported for {}: {} bps, win: {}. Count: {}, score: {}",
        profile.agent_key,
        pnl_bps,
        is_win,
        profile.trade_count,
        profile.risk_score()
    );
    Ok(())
}

/// Accounting-only distribution: the profit lamports must already sit in
/// vault custody (funded externally before this call). The optional agent
/// bonus is carved out and paid to the agent's wallet; the remainder stays
/// in custody, which raises NAV/share for every holder without touching
/// any position record.
pub fn distribute_profits(
    ctx: Context<DistributeProfits>,
    profit_amount: u64,
    agent_fee_bps: Option<u16>,
) -> Result<()> {
    require!(profit_amount > 0, ErrorCode::InvalidAmount);
    ctx.accounts.vault.require_active()?;
    require!(
        ctx.accounts.vault_sol.lamports() >= profit_amount,
        ErrorCode::ProfitNotFunded
    );

    let bonus = match (
        agent_fee_bps,
        ctx.accounts.agent_profile.as_ref(),
        ctx.accounts.agent.as_ref(),
    ) {
        (Some(fee_bps), Some(profile), Some(agent)) => {
            require!(fee_bps <= MAX_AGENT_FEE_BPS, ErrorCode::InvalidFeeBps);
            require_keys_eq!(
                agent.key(),
                profile.agent_key,
                ErrorCode::BonusAccountsMismatch
            );
            require!(profile.is_bonus_eligible(), ErrorCode::AgentNotEligible);

            let bonus = (profit_amount as u128)
                .checked_mul(fee_bps as u128)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?
                .checked_div(BPS_DENOMINATOR as u128)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?
                as u64;

            if bonus > 0 {
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
                            to: agent.to_account_info(),
                        },
                        signer,
                    ),
                    bonus,
                )?;
            }
            bonus
        }
        (None, None, None) => 0,
        // Fee without profile, profile without fee, etc.
        _ => return Err(error!(ErrorCode::BonusAccountsMismatch)),
    };

    let vault = &mut ctx.accounts.vault;
    vault.record_distribution(profit_amount)?;

    emit!(ProfitsDistributed {
        vault: vault.key(),
        profit_amount,
        agent_bonus: bonus,
        agent_key: ctx.accounts.agent_profile.as_ref().map(|p| p.agent_key),
    });
    msg!(
        "Distributed {} lamports of profit, agent bonus: {}",
        profit_amount,
        bonus
    );
    Ok(())
}

#[derive(Accounts)]
pub struct ReportTrade<'info> {
    pub oracle: Signer<'info>,

    #[account(
        has_one = oracle @ ErrorCode::Unauthorized,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        has_one = vault @ ErrorCode::Unauthorized,
        seeds = [AGENT_SEED, vault.key().as_ref(), agent_profile.agent_key.as_ref()],
        bump = agent_profile.bump
    )]
    pub agent_profile: Account<'info, AgentProfile>,
}

#[derive(Accounts)]
pub struct DistributeProfits<'info> {
    pub oracle: Signer<'info>,

    #[account(
        mut,
        has_one = oracle @ ErrorCode::Unauthorized,
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

    // Present only when a performance bonus is being paid.
    #[account(
        has_one = vault @ ErrorCode::Unauthorized,
        seeds = [AGENT_SEED, vault.key().as_ref(), agent_profile.agent_key.as_ref()],
        bump = agent_profile.bump
    )]
    pub agent_profile: Option<Account<'info, AgentProfile>>,

    /// CHECK: Bonus destination wallet. Must match the profile's agent_key,
    /// enforced in the handler.
    #[account(mut)]
    pub agent: Option<UncheckedAccount<'info>>,

    pub system_program: Program<'info, System>,
}
