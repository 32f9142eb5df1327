use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod upkeep;
pub mod winner;

use instructions::*;
use upkeep::UpkeepDecision;

declare_id!("ADwSxoDAu1xjfc9SNTYhjhL2Y4wgeerZaaUJKhETBmuo");

/// Multi-raffle manager with provider-backed random winner selection.
///
/// Entrants pay a fixed fee to join a raffle. Once a raffle's time window
/// elapses and it has enough entrants, an upkeep pass closes it and issues a
/// request to an external randomness provider. The provider's fulfillment is
/// correlated back through a pending-request record and resolved into winners
/// drawn proportionally from the frozen entry ledger.
///
/// ## Raffle lifecycle
///
/// 1. **Create** — the authority opens a raffle with a duration, entry fee,
///    winner count, and title.
/// 2. **Enter** — anyone pays the fee to append themselves to the entry
///    ledger; re-entering is allowed and buys additional slots.
/// 3. **Upkeep** — `check_upkeep` reports the first due raffle (lowest id);
///    `perform_upkeep` re-validates, closes it, and records a pending
///    randomness request sized from the raffle's own winner count. The
///    request event carries the request id and seed for the provider.
/// 4. **Fulfill** — the provider submits the random values signed with its
///    registered key; `fulfill_randomness` consumes the pending request
///    exactly once, selects winners by modulo over the frozen ledger, and
///    records them.
#[program]
pub mod raffle_house {
    use super::*;

    /// Create the singleton configuration and fee custody.
    ///
    /// Must be called exactly once. Pass `fee_mint` and `token_vault`
    /// together to collect entry fees in an SPL token instead of lamports.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Open a new raffle (authority only). Ids are assigned contiguously
    /// from zero and never reused.
    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        time_interval: i64,
        entry_fee: u64,
        max_winners: u32,
        title: String,
    ) -> Result<()> {
        instructions::create_raffle::handler(ctx, time_interval, entry_fee, max_winners, title)
    }

    /// Pay the entry fee and append the entrant to the raffle's ledger.
    pub fn enter_raffle(ctx: Context<EnterRaffle>, raffle_id: u64) -> Result<()> {
        instructions::enter_raffle::handler(ctx, raffle_id)
    }

    /// Report whether any raffle is due for closing, and which.
    pub fn check_upkeep<'info>(
        ctx: Context<'_, '_, '_, 'info, CheckUpkeep<'info>>,
    ) -> Result<UpkeepDecision> {
        instructions::check_upkeep::handler(ctx)
    }

    /// Close the first due raffle and issue its randomness request.
    pub fn perform_upkeep<'info>(
        ctx: Context<'_, '_, '_, 'info, PerformUpkeep<'info>>,
        raffle_id: u64,
    ) -> Result<()> {
        instructions::perform_upkeep::handler(ctx, raffle_id)
    }

    /// Deliver the provider's random values for a pending request
    /// (provider authority only).
    pub fn fulfill_randomness(
        ctx: Context<FulfillRandomness>,
        request_id: u64,
        random_values: Vec<u64>,
    ) -> Result<()> {
        instructions::fulfill_randomness::handler(ctx, request_id, random_values)
    }

    /// Sweep the collected fees to the authority (authority only).
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }
}
