use anchor_lang::prelude::*;

#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub shares_issued: u128,
}

#[event]
pub struct Withdrawn {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub shares_burned: u128,
    pub value_out: u64,
}

#[event]
pub struct AgentRegistered {
    pub vault: Pubkey,
    pub agent_key: Pubkey,
}

#[event]
pub struct TradeReported {
    pub vault: Pubkey,
    pub agent_key: Pubkey,
    pub pnl_bps: i64,
    pub is_win: bool,
}

#[event]
pub struct ProfitsDistributed {
    pub vault: Pubkey,
    pub profit_amount: u64,
    pub agent_bonus: u64,
    pub agent_key: Option<Pubkey>,
}

#[event]
pub struct PolicyUpdated {
    pub vault: Pubkey,
    pub daily_cap: u64,
    pub cooldown_seconds: u64,
    pub epoch: u64,
}

#[event]
pub struct EmergencyStopSet {
    pub vault: Pubkey,
    pub is_paused: bool,
}

#[event]
pub struct RolesUpdated {
    pub vault: Pubkey,
    pub guardian: Pubkey,
    pub oracle: Pubkey,
    pub epoch: u64,
}
