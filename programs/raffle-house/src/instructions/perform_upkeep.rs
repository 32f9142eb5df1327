use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

use crate::errors::RaffleError;
use crate::events::UpkeepPerformed;
use crate::state::{HouseConfig, PendingRequest, Raffle};
use crate::upkeep;

/// Accounts required to close a due raffle and issue its randomness request.
///
/// `remaining_accounts` carries the full registry as (raffle, entrants)
/// account pairs in ascending id order, exactly as for `check_upkeep`.
#[derive(Accounts)]
#[instruction(raffle_id: u64)]
pub struct PerformUpkeep<'info> {
    /// Any caller may trigger upkeep. Pays rent for the pending-request PDA
    /// and is refunded when the fulfillment closes it.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Configuration PDA (mutated to increment `request_counter`).
    #[account(mut, seeds = [b"raffle-config"], bump = config.bump)]
    pub config: Account<'info, HouseConfig>,

    /// The raffle to close; must be the first due raffle in the registry.
    #[account(mut, seeds = [b"raffle", raffle_id.to_le_bytes().as_ref()], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    /// Pending correlation record. Seeds: `["pending-request", request_counter.to_le_bytes()]`.
    #[account(
        init,
        payer = payer,
        space = 8 + PendingRequest::INIT_SPACE,
        seeds = [b"pending-request", config.request_counter.to_le_bytes().as_ref()],
        bump,
    )]
    pub pending_request: Account<'info, PendingRequest>,

    pub system_program: Program<'info, System>,
}

/// Close the first due raffle and record its randomness request.
///
/// Eligibility is re-evaluated against the full registry in the same
/// instruction as the close, so no entry can slip in between the check and
/// the transition. Exactly one request is issued per raffle, sized from the
/// closing raffle's own `max_winners`.
///
/// 1. Re-runs the registry scan; fails unless it names exactly `raffle_id`.
/// 2. Transitions the raffle Open -> Closed, freezing its entry ledger.
/// 3. Initializes the pending request and increments `request_counter`.
/// 4. Emits [`UpkeepPerformed`] for the off-chain provider.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, PerformUpkeep<'info>>,
    raffle_id: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let due = upkeep::scan_registry(&ctx.accounts.config, ctx.remaining_accounts, now)?;
    require!(due == Some(raffle_id), RaffleError::UpkeepNotNeeded);

    let raffle = &mut ctx.accounts.raffle;
    raffle.mark_closed()?;

    let config = &mut ctx.accounts.config;
    let request_id = config.request_counter;
    let seed = derive_seed(raffle_id, request_id, now);

    let pending = &mut ctx.accounts.pending_request;
    pending.request_id = request_id;
    pending.raffle_id = raffle_id;
    pending.num_words = raffle.max_winners;
    pending.seed = seed;
    pending.payer = ctx.accounts.payer.key();
    pending.requested_at = now;
    pending.bump = ctx.bumps.pending_request;

    config.request_counter = config
        .request_counter
        .checked_add(1)
        .ok_or(RaffleError::CounterOverflow)?;

    emit!(UpkeepPerformed {
        raffle_id,
        request_id,
        timestamp: now,
        num_words: raffle.max_winners,
        seed,
    });

    msg!("Raffle {} closed, randomness request {} issued", raffle_id, request_id);
    Ok(())
}

/// Entropy forwarded to the randomness provider alongside the request:
/// `SHA256("raffle-house-seed" || raffle_id || request_id || now)`.
fn derive_seed(raffle_id: u64, request_id: u64, now: i64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"raffle-house-seed");
    hasher.update(raffle_id.to_le_bytes());
    hasher.update(request_id.to_le_bytes());
    hasher.update(now.to_le_bytes());
    let hash = hasher.finalize();
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&hash);
    seed
}
