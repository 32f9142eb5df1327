//! Registry scanning for raffles that are due to close.

use anchor_lang::prelude::*;

use crate::errors::RaffleError;
use crate::state::{Entrants, HouseConfig, Raffle};

/// Outcome of a registry scan, returned from `check_upkeep` via return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepDecision {
    pub needed: bool,
    pub raffle_id: Option<u64>,
}

/// A raffle is due for closing iff it is still Open, its time window has
/// elapsed, and it has enough entries to cover every winner slot.
pub fn needs_upkeep(raffle: &Raffle, entry_count: u32, now: i64) -> bool {
    raffle.is_open()
        && now > raffle.end_time
        && entry_count > 0
        && entry_count >= raffle.max_winners
}

/// Walk the registry and return the first due raffle, lowest id first.
///
/// `registry` carries (raffle, entrants) account pairs for every raffle id
/// in ascending order. Coverage and ordering are enforced; a partial or
/// shuffled scan could otherwise misreport which raffle is first, and the
/// processing order is an observable contract. One raffle per upkeep call;
/// callers re-invoke until no raffle is due.
pub(crate) fn scan_registry(
    config: &HouseConfig,
    registry: &[AccountInfo],
    now: i64,
) -> Result<Option<u64>> {
    require!(registry.len() % 2 == 0, RaffleError::MalformedRegistryScan);
    require!(
        (registry.len() / 2) as u64 == config.raffle_count,
        RaffleError::MalformedRegistryScan
    );

    for (expected_id, pair) in registry.chunks(2).enumerate() {
        let raffle: Account<Raffle> = Account::try_from(&pair[0])?;
        let entrants: Account<Entrants> = Account::try_from(&pair[1])?;
        require!(
            raffle.id == expected_id as u64,
            RaffleError::MalformedRegistryScan
        );
        require!(entrants.raffle_id == raffle.id, RaffleError::EntrantsMismatch);
        if needs_upkeep(&raffle, entrants.total, now) {
            return Ok(Some(raffle.id));
        }
    }
    Ok(None)
}
