use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::RaffleError;
use crate::events::EntryRecorded;
use crate::state::{Entrants, HouseConfig, Raffle, Vault};

/// Accounts required to enter a raffle.
///
/// In native mode the fee moves from `entrant` to the lamport vault and the
/// token accounts stay unset. In token mode the fee is pulled from
/// `token_source` into the custody token account, so the optional accounts
/// must all be present.
#[derive(Accounts)]
#[instruction(raffle_id: u64)]
pub struct EnterRaffle<'info> {
    #[account(mut)]
    pub entrant: Signer<'info>,

    #[account(seeds = [b"raffle-config"], bump = config.bump)]
    pub config: Account<'info, HouseConfig>,

    /// The raffle being entered; must be Open.
    #[account(seeds = [b"raffle", raffle_id.to_le_bytes().as_ref()], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    /// Entry ledger appended to on success.
    #[account(mut, seeds = [b"entrants", raffle_id.to_le_bytes().as_ref()], bump = entrants.bump)]
    pub entrants: Account<'info, Entrants>,

    /// Lamport custody PDA; credited in native mode.
    #[account(mut, seeds = [b"vault"], bump = vault.bump)]
    pub vault: Account<'info, Vault>,

    /// The entrant's token account; debited in token mode.
    #[account(mut)]
    pub token_source: Option<Account<'info, TokenAccount>>,

    /// Custody token account; must match the configured vault.
    #[account(mut)]
    pub token_vault: Option<Account<'info, TokenAccount>>,

    pub token_program: Option<Program<'info, Token>>,

    pub system_program: Program<'info, System>,
}

/// Pay the entry fee and append the entrant to the raffle's ledger.
///
/// Re-entering is allowed: every successful call appends one more slot, each
/// separately eligible to win. Nothing about the raffle's timing is checked
/// here — only its state gates entry, and the state only changes through
/// upkeep.
pub fn handler(ctx: Context<EnterRaffle>, raffle_id: u64) -> Result<()> {
    let raffle = &ctx.accounts.raffle;
    require!(raffle.is_open(), RaffleError::RaffleNotOpen);

    let entry_fee = raffle.entry_fee;
    match ctx.accounts.config.fee_mint {
        None => {
            if entry_fee > 0 {
                require!(
                    ctx.accounts.entrant.lamports() >= entry_fee,
                    RaffleError::InsufficientFunds
                );
                system_program::transfer(
                    CpiContext::new(
                        ctx.accounts.system_program.to_account_info(),
                        system_program::Transfer {
                            from: ctx.accounts.entrant.to_account_info(),
                            to: ctx.accounts.vault.to_account_info(),
                        },
                    ),
                    entry_fee,
                )?;
            }
        }
        Some(fee_mint) => {
            let token_source = ctx
                .accounts
                .token_source
                .as_ref()
                .ok_or(RaffleError::InvalidPaymentConfig)?;
            let token_vault = ctx
                .accounts
                .token_vault
                .as_ref()
                .ok_or(RaffleError::InvalidPaymentConfig)?;
            let token_program = ctx
                .accounts
                .token_program
                .as_ref()
                .ok_or(RaffleError::InvalidPaymentConfig)?;
            require!(token_source.mint == fee_mint, RaffleError::FeeMintMismatch);
            require!(
                Some(token_vault.key()) == ctx.accounts.config.token_vault,
                RaffleError::InvalidPaymentConfig
            );
            require!(
                token_source.amount >= entry_fee,
                RaffleError::InsufficientFunds
            );
            if entry_fee > 0 {
                token::transfer(
                    CpiContext::new(
                        token_program.to_account_info(),
                        Transfer {
                            from: token_source.to_account_info(),
                            to: token_vault.to_account_info(),
                            authority: ctx.accounts.entrant.to_account_info(),
                        },
                    ),
                    entry_fee,
                )
                .map_err(|_| error!(RaffleError::TransferFailed))?;
            }
        }
    }

    let entrant_key = ctx.accounts.entrant.key();
    let entrants = &mut ctx.accounts.entrants;
    let entrants_info = entrants.to_account_info();
    entrants.append_entrant(entrants_info.data.borrow_mut(), entrant_key)?;

    emit!(EntryRecorded {
        raffle_id,
        timestamp: Clock::get()?.unix_timestamp,
        entrant: entrant_key,
        entry_fee,
    });

    Ok(())
}
