use anchor_lang::prelude::*;

use crate::state::HouseConfig;
use crate::upkeep::{self, UpkeepDecision};

/// Accounts required to evaluate the registry.
///
/// `remaining_accounts` carries the full registry as (raffle, entrants)
/// account pairs in ascending id order.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(seeds = [b"raffle-config"], bump = config.bump)]
    pub config: Account<'info, HouseConfig>,
}

/// Report whether any raffle is due for closing, and which.
///
/// Read-only: the decision can go stale the moment it is returned, which is
/// why `perform_upkeep` re-runs the same scan before acting on it.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, CheckUpkeep<'info>>,
) -> Result<UpkeepDecision> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_id = upkeep::scan_registry(&ctx.accounts.config, ctx.remaining_accounts, now)?;
    Ok(UpkeepDecision {
        needed: raffle_id.is_some(),
        raffle_id,
    })
}
