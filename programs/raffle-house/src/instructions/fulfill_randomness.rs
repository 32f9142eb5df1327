use anchor_lang::prelude::*;

use crate::errors::RaffleError;
use crate::events::RandomnessFulfilled;
use crate::state::{Entrants, HouseConfig, PendingRequest, Raffle};
use crate::winner;

/// Accounts required to deliver the provider's random values.
///
/// `pending_request` is deserialized by hand so that an unknown, forged, or
/// already-consumed request id surfaces as [`RaffleError::UnknownRequest`]
/// instead of a generic account error.
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    /// The randomness provider key. Must match `config.vrf_authority`.
    pub vrf_authority: Signer<'info>,

    #[account(
        seeds = [b"raffle-config"],
        bump = config.bump,
        constraint = config.vrf_authority == vrf_authority.key() @ RaffleError::Unauthorized,
    )]
    pub config: Account<'info, HouseConfig>,

    /// The pending correlation record; consumed (closed) exactly once.
    /// CHECK: Address and contents are validated in the handler.
    #[account(mut)]
    pub pending_request: UncheckedAccount<'info>,

    /// The raffle named by the pending request.
    #[account(mut)]
    pub raffle: Account<'info, Raffle>,

    /// The frozen entry ledger winners are drawn from.
    pub entrants: Account<'info, Entrants>,

    /// The upkeep caller; receives the pending record's rent back.
    /// CHECK: Validated against the payer recorded in the pending request.
    #[account(mut)]
    pub upkeep_payer: UncheckedAccount<'info>,
}

/// Resolve a randomness fulfillment into recorded winners.
///
/// 1. Looks up the pending request by id; unknown or replayed ids fail.
/// 2. Draws `random_value mod entry_count` per value, in order, against the
///    same frozen ledger — duplicate winners are valid.
/// 3. Records the winners, closes the pending record (rent back to the
///    upkeep caller), and emits [`RandomnessFulfilled`].
pub fn handler(
    ctx: Context<FulfillRandomness>,
    request_id: u64,
    random_values: Vec<u64>,
) -> Result<()> {
    let (expected_address, _) = Pubkey::find_program_address(
        &[b"pending-request", request_id.to_le_bytes().as_ref()],
        &crate::ID,
    );
    require!(
        ctx.accounts.pending_request.key() == expected_address,
        RaffleError::UnknownRequest
    );
    let pending_info = ctx.accounts.pending_request.to_account_info();
    let pending: Account<PendingRequest> =
        Account::try_from(&pending_info).map_err(|_| error!(RaffleError::UnknownRequest))?;

    let raffle = &mut ctx.accounts.raffle;
    require!(raffle.id == pending.raffle_id, RaffleError::RaffleNotFound);

    let entrants = &ctx.accounts.entrants;
    require!(entrants.raffle_id == raffle.id, RaffleError::EntrantsMismatch);
    require!(
        ctx.accounts.upkeep_payer.key() == pending.payer,
        RaffleError::Unauthorized
    );
    require!(
        random_values.len() == pending.num_words as usize,
        RaffleError::WordCountMismatch
    );

    // Must hold by construction (upkeep requires entries), but resolution can
    // be arbitrarily delayed, so the frozen ledger is checked again here.
    let entry_count = entrants.total;
    require!(entry_count > 0, RaffleError::EmptyEntryList);

    let entrants_info = entrants.to_account_info();
    let entrants_data = entrants_info.data.borrow();
    let winners: Vec<Pubkey> = random_values
        .iter()
        .map(|value| {
            let index = winner::select_winner(*value, entry_count);
            Entrants::get_entrant(&entrants_data, index as usize)
        })
        .collect();
    drop(entrants_data);

    raffle.record_winners(&winners)?;

    // Consume the pending request: refund its rent to the upkeep caller and
    // hand the emptied account back to the system program. A second
    // fulfillment for the same id then fails the lookup above.
    let payer_info = ctx.accounts.upkeep_payer.to_account_info();
    let pending_lamports = pending_info.lamports();
    **pending_info.try_borrow_mut_lamports()? = 0;
    **payer_info.try_borrow_mut_lamports()? = payer_info
        .lamports()
        .checked_add(pending_lamports)
        .unwrap();
    pending_info.assign(&anchor_lang::solana_program::system_program::ID);
    {
        let mut data = pending_info.try_borrow_mut_data()?;
        for byte in data.iter_mut() {
            *byte = 0;
        }
    }

    msg!(
        "Raffle {} finalized with {} winner(s) (request_id={})",
        raffle.id,
        winners.len(),
        request_id
    );

    emit!(RandomnessFulfilled {
        raffle_id: raffle.id,
        request_id,
        random_values,
        winners,
    });

    Ok(())
}
