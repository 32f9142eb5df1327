use anchor_lang::prelude::*;

/// Error codes for the raffle-house program.
///
/// Anchor encodes these as `6000 + variant index` in on-chain error responses.
#[error_code]
pub enum RaffleError {
    /// Entry attempted against a raffle that is not `Open`.
    #[msg("Raffle is not open for entries")]
    RaffleNotOpen,
    /// Internal state-machine violation; unreachable from correct external callers.
    #[msg("Invalid raffle state transition")]
    InvalidTransition,
    /// The entrant's balance does not cover the entry fee.
    #[msg("Insufficient funds to cover the entry fee")]
    InsufficientFunds,
    /// The fee pull-transfer was rejected by the token program.
    #[msg("Entry fee transfer was rejected")]
    TransferFailed,
    /// The custody sweep could not be completed.
    #[msg("Withdrawal transfer failed")]
    WithdrawFailed,
    /// No raffle is due, or the targeted raffle is not the first due one.
    #[msg("No raffle is eligible for upkeep")]
    UpkeepNotNeeded,
    /// The request id does not match a pending request this program issued.
    #[msg("No pending request matches this request id")]
    UnknownRequest,
    /// The frozen entry ledger is empty at resolution time.
    #[msg("Entry list is empty at resolution time")]
    EmptyEntryList,
    /// Signer does not have permission for this action.
    #[msg("Unauthorized")]
    Unauthorized,
    /// A public key argument was the zero address.
    #[msg("Zero address not allowed")]
    ZeroAddressNotAllowed,
    #[msg("A raffle needs between one and sixteen winner slots")]
    InvalidWinnerCount,
    #[msg("Raffle title is too long")]
    TitleTooLong,
    #[msg("Raffle duration must be positive")]
    InvalidDuration,
    /// The entry ledger reached its slot capacity.
    #[msg("Entry ledger is full")]
    EntryLedgerFull,
    /// A monotonic counter would overflow u64 (practically unreachable).
    #[msg("Counter overflow")]
    CounterOverflow,
    /// The entrants account does not belong to the raffle it was paired with.
    #[msg("Entry ledger does not belong to this raffle")]
    EntrantsMismatch,
    /// The registry scan must cover every raffle id in ascending order.
    #[msg("Registry scan accounts are missing or out of order")]
    MalformedRegistryScan,
    /// The provider delivered a different number of values than requested.
    #[msg("Random value count does not match the pending request")]
    WordCountMismatch,
    /// The raffle account does not match the id the operation resolved.
    #[msg("Raffle does not match the pending request")]
    RaffleNotFound,
    /// Token-mode accounts are missing, or mixed with native-mode configuration.
    #[msg("Fee mint and token vault must be configured together")]
    InvalidPaymentConfig,
    #[msg("Token account mint does not match the configured fee asset")]
    FeeMintMismatch,
}
