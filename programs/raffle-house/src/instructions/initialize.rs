use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::errors::RaffleError;
use crate::state::{HouseConfig, Vault};

/// Accounts required to initialize the raffle-house singleton.
///
/// Pass `fee_mint` and `token_vault` together to collect entry fees in an
/// SPL token; omit both to collect lamports into the vault PDA.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The privileged authority; pays for account creation.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Key of the external randomness provider allowed to deliver fulfillments.
    /// CHECK: Stored as configuration; validated to be non-zero.
    pub vrf_authority: UncheckedAccount<'info>,

    /// Singleton configuration PDA. Seeds: `["raffle-config"]`.
    #[account(
        init,
        payer = authority,
        space = 8 + HouseConfig::INIT_SPACE,
        seeds = [b"raffle-config"],
        bump,
    )]
    pub config: Account<'info, HouseConfig>,

    /// Fee custody PDA. Seeds: `["vault"]`.
    #[account(
        init,
        payer = authority,
        space = 8 + Vault::INIT_SPACE,
        seeds = [b"vault"],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Mint entry fees are paid in; omit for native-lamport fees.
    pub fee_mint: Option<Account<'info, Mint>>,

    /// Custody token account for `fee_mint`; its authority must be the vault PDA.
    pub token_vault: Option<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
}

/// Initialize the raffle-house configuration and fee custody.
///
/// Must be called exactly once. The calling signer becomes the privileged
/// authority.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    require!(
        ctx.accounts.vrf_authority.key() != Pubkey::default(),
        RaffleError::ZeroAddressNotAllowed
    );
    require!(
        ctx.accounts.fee_mint.is_some() == ctx.accounts.token_vault.is_some(),
        RaffleError::InvalidPaymentConfig
    );

    if let (Some(fee_mint), Some(token_vault)) =
        (&ctx.accounts.fee_mint, &ctx.accounts.token_vault)
    {
        require!(token_vault.mint == fee_mint.key(), RaffleError::FeeMintMismatch);
        require!(
            token_vault.owner == ctx.accounts.vault.key(),
            RaffleError::InvalidPaymentConfig
        );
    }

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.vrf_authority = ctx.accounts.vrf_authority.key();
    config.fee_mint = ctx.accounts.fee_mint.as_ref().map(|mint| mint.key());
    config.token_vault = ctx.accounts.token_vault.as_ref().map(|vault| vault.key());
    config.raffle_count = 0;
    config.request_counter = 0;
    config.bump = ctx.bumps.config;

    ctx.accounts.vault.bump = ctx.bumps.vault;

    Ok(())
}
