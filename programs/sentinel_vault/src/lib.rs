use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("9FouWHemn9iueyHYq4qpeNj9aHMyTKfEPt8ZpJaHcZ95");

/// Custodial pooled-fund vault with pro-rata share accounting,
/// risk-adjusted agent performance bonuses, and guardian-enforced
/// withdrawal policy (daily cap, cooldown, emergency stop).
#[program]
pub mod sentinel_vault {
    use super::*;

    /// Create the vault. Callable once per authority key; replay fails
    /// at the account layer because the vault PDA already exists.
    pub fn initialize(
        ctx: Context<Initialize>,
        guardian: Pubkey,
        oracle: Pubkey,
        daily_cap: u64,
        cooldown_seconds: u64,
    ) -> Result<()> {
        instructions::admin::initialize(ctx, guardian, oracle, daily_cap, cooldown_seconds)
    }

    /// Authority-only. Creates a zeroed track record for the agent.
    pub fn register_agent(ctx: Context<RegisterAgent>, agent_key: Pubkey) -> Result<()> {
        instructions::admin::register_agent(ctx, agent_key)
    }

    /// Authority-only. Each role is independently optional; omitted roles
    /// are left unchanged.
    pub fn update_roles(
        ctx: Context<UpdateRoles>,
        new_guardian: Option<Pubkey>,
        new_oracle: Option<Pubkey>,
    ) -> Result<()> {
        instructions::admin::update_roles(ctx, new_guardian, new_oracle)
    }

    /// Deposit lamports and receive shares at the current NAV.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::vault::deposit(ctx, amount)
    }

    /// Burn shares and receive their pro-rata slice of custody, subject
    /// to the guardian policy gates.
    pub fn withdraw(ctx: Context<Withdraw>, shares_to_burn: u128) -> Result<()> {
        instructions::vault::withdraw(ctx, shares_to_burn)
    }

    /// Oracle-only. Folds one resolved trade into the agent's record.
    pub fn report_trade(ctx: Context<ReportTrade>, pnl_bps: i64, is_win: bool) -> Result<()> {
        instructions::oracle::report_trade(ctx, pnl_bps, is_win)
    }

    /// Oracle-only. Books already-custodied profit; optionally routes a
    /// fee-bps bonus to an eligible agent's wallet.
    pub fn distribute_profits(
        ctx: Context<DistributeProfits>,
        profit_amount: u64,
        agent_fee_bps: Option<u16>,
    ) -> Result<()> {
        instructions::oracle::distribute_profits(ctx, profit_amount, agent_fee_bps)
    }

    /// Guardian-only. Replaces cap and cooldown atomically.
    pub fn update_policy(
        ctx: Context<GuardianAction>,
        new_daily_cap: u64,
        new_cooldown_seconds: u64,
    ) -> Result<()> {
        instructions::guardian::update_policy(ctx, new_daily_cap, new_cooldown_seconds)
    }

    /// Guardian-only. Pause or resume all value-moving operations.
    pub fn emergency_stop(ctx: Context<GuardianAction>, pause: bool) -> Result<()> {
        instructions::guardian::emergency_stop(ctx, pause)
    }
}
