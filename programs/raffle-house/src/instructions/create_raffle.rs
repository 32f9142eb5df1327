use anchor_lang::prelude::*;

use crate::errors::RaffleError;
use crate::events::RaffleCreated;
use crate::state::{Entrants, HouseConfig, Raffle};

/// Accounts required to open a new raffle.
///
/// The raffle and entrants PDAs are derived from the current `raffle_count`,
/// guaranteeing unique, contiguous ids. The counter is incremented after
/// both PDAs are initialized.
#[derive(Accounts)]
#[instruction(time_interval: i64, entry_fee: u64, max_winners: u32, title: String)]
pub struct CreateRaffle<'info> {
    /// The privileged authority; pays rent for the new accounts.
    #[account(
        mut,
        constraint = config.authority == authority.key() @ RaffleError::Unauthorized,
    )]
    pub authority: Signer<'info>,

    /// Configuration PDA (mutated to increment `raffle_count`).
    #[account(mut, seeds = [b"raffle-config"], bump = config.bump)]
    pub config: Account<'info, HouseConfig>,

    /// New raffle PDA. Seeds: `["raffle", raffle_count.to_le_bytes()]`.
    #[account(
        init,
        payer = authority,
        space = Raffle::space(&title, max_winners),
        seeds = [b"raffle", config.raffle_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Entry ledger for the new raffle. Seeds: `["entrants", raffle_count.to_le_bytes()]`.
    #[account(
        init,
        payer = authority,
        space = Entrants::space(Entrants::MAX_ENTRIES),
        seeds = [b"entrants", config.raffle_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub entrants: Account<'info, Entrants>,

    pub system_program: Program<'info, System>,
}

/// Open a new raffle.
///
/// 1. Validates duration, winner count, and title length.
/// 2. Initializes the raffle (state Open, `end_time = now + time_interval`)
///    and its empty entry ledger.
/// 3. Increments `raffle_count`.
/// 4. Emits [`RaffleCreated`].
pub fn handler(
    ctx: Context<CreateRaffle>,
    time_interval: i64,
    entry_fee: u64,
    max_winners: u32,
    title: String,
) -> Result<()> {
    require!(time_interval > 0, RaffleError::InvalidDuration);
    require!(
        max_winners >= 1 && max_winners <= Raffle::MAX_WINNERS,
        RaffleError::InvalidWinnerCount
    );
    require!(title.len() <= Raffle::MAX_TITLE_LEN, RaffleError::TitleTooLong);

    let config = &mut ctx.accounts.config;
    let raffle_id = config.raffle_count;
    let now = Clock::get()?.unix_timestamp;
    let end_time = now
        .checked_add(time_interval)
        .ok_or(RaffleError::CounterOverflow)?;

    let raffle = &mut ctx.accounts.raffle;
    raffle.id = raffle_id;
    raffle.title = title.clone();
    raffle.end_time = end_time;
    raffle.entry_fee = entry_fee;
    raffle.max_winners = max_winners;
    raffle.state = Raffle::STATE_OPEN;
    raffle.winners = Vec::new();
    raffle.bump = ctx.bumps.raffle;

    let entrants = &mut ctx.accounts.entrants;
    entrants.raffle_id = raffle_id;
    entrants.total = 0;
    entrants.max = Entrants::MAX_ENTRIES;
    entrants.bump = ctx.bumps.entrants;

    config.raffle_count = config
        .raffle_count
        .checked_add(1)
        .ok_or(RaffleError::CounterOverflow)?;

    emit!(RaffleCreated {
        raffle_id,
        end_time,
        entry_fee,
        title,
        max_winners,
    });

    Ok(())
}
