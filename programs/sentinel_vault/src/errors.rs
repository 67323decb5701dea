use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You are not authorized to perform this action.")]
    Unauthorized,
    #[msg("The vault is currently paused.")]
    VaultPaused,
    #[msg("Withdrawal cooldown has not elapsed yet.")]
    CooldownActive,
    #[msg("Withdrawal would exceed the daily cap.")]
    DailyCapExceeded,
    #[msg("Position does not hold enough shares.")]
    InsufficientShares,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Deposit too small to mint a share at the current NAV.")]
    DepositTooSmall,
    #[msg("No shares outstanding to redeem against.")]
    NoSharesOutstanding,
    #[msg("Agent key cannot be the default pubkey.")]
    InvalidAgentKey,
    #[msg("Policy parameter out of allowed range.")]
    InvalidPolicy,
    #[msg("Agent fee exceeds the maximum allowed bps.")]
    InvalidFeeBps,
    #[msg("Agent fee and agent profile must be supplied together.")]
    BonusAccountsMismatch,
    #[msg("Agent is already registered with this vault.")]
    AgentAlreadyRegistered,
    #[msg("Agent does not meet the bonus eligibility threshold.")]
    AgentNotEligible,
    #[msg("Vault custody does not hold the declared profit.")]
    ProfitNotFunded,
    #[msg("Arithmetic overflow in share accounting.")]
    MathOverflow,
}
