use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::RaffleError;
use crate::events::FeesWithdrawn;
use crate::state::{HouseConfig, Vault};

/// Accounts required to sweep the custody balance to the authority.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The privileged authority; receives the swept funds.
    #[account(
        mut,
        constraint = config.authority == authority.key() @ RaffleError::Unauthorized,
    )]
    pub authority: Signer<'info>,

    #[account(seeds = [b"raffle-config"], bump = config.bump)]
    pub config: Account<'info, HouseConfig>,

    /// Fee custody PDA; drained to its rent-exempt reserve in native mode,
    /// and the signer of the token sweep in token mode.
    #[account(mut, seeds = [b"vault"], bump = vault.bump)]
    pub vault: Account<'info, Vault>,

    /// Custody token account; must match the configured vault.
    #[account(mut)]
    pub token_vault: Option<Account<'info, TokenAccount>>,

    /// The authority's token account receiving the swept tokens.
    #[account(mut)]
    pub destination: Option<Account<'info, TokenAccount>>,

    pub token_program: Option<Program<'info, Token>>,
}

/// Sweep the entire custody balance to the authority.
///
/// Deliberately independent of raffle lifecycle: collected fees are
/// withdrawable at any point, whatever state any raffle is in.
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let amount = match ctx.accounts.config.fee_mint {
        None => {
            let vault_info = ctx.accounts.vault.to_account_info();
            let rent_reserve = Rent::get()?.minimum_balance(vault_info.data_len());
            let amount = vault_info
                .lamports()
                .checked_sub(rent_reserve)
                .ok_or(RaffleError::WithdrawFailed)?;
            let authority_info = ctx.accounts.authority.to_account_info();
            **vault_info.try_borrow_mut_lamports()? -= amount;
            **authority_info.try_borrow_mut_lamports()? += amount;
            amount
        }
        Some(_) => {
            let token_vault = ctx
                .accounts
                .token_vault
                .as_ref()
                .ok_or(RaffleError::InvalidPaymentConfig)?;
            let destination = ctx
                .accounts
                .destination
                .as_ref()
                .ok_or(RaffleError::InvalidPaymentConfig)?;
            let token_program = ctx
                .accounts
                .token_program
                .as_ref()
                .ok_or(RaffleError::InvalidPaymentConfig)?;
            require!(
                Some(token_vault.key()) == ctx.accounts.config.token_vault,
                RaffleError::InvalidPaymentConfig
            );
            require!(
                destination.mint == token_vault.mint,
                RaffleError::FeeMintMismatch
            );

            let amount = token_vault.amount;
            let signer_seeds: &[&[u8]] = &[b"vault", &[ctx.accounts.vault.bump]];
            token::transfer(
                CpiContext::new_with_signer(
                    token_program.to_account_info(),
                    Transfer {
                        from: token_vault.to_account_info(),
                        to: destination.to_account_info(),
                        authority: ctx.accounts.vault.to_account_info(),
                    },
                    &[signer_seeds],
                ),
                amount,
            )
            .map_err(|_| error!(RaffleError::WithdrawFailed))?;
            amount
        }
    };

    emit!(FeesWithdrawn {
        authority: ctx.accounts.authority.key(),
        amount,
    });

    Ok(())
}
