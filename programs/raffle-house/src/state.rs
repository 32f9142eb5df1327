use anchor_lang::prelude::*;

use crate::errors::RaffleError;

/// Global raffle-house configuration, stored as a singleton PDA.
///
/// Seeds: `["raffle-config"]`
///
/// The `authority` is the privileged key that creates raffles and withdraws
/// collected fees. The `vrf_authority` is the off-chain randomness provider
/// key that is allowed to deliver fulfillments.
#[account]
#[derive(InitSpace)]
pub struct HouseConfig {
    /// Privileged key that creates raffles and sweeps the custody balance.
    pub authority: Pubkey,
    /// Key of the external randomness provider allowed to fulfill requests.
    pub vrf_authority: Pubkey,
    /// SPL mint entry fees are paid in; `None` means fees are paid in lamports.
    pub fee_mint: Option<Pubkey>,
    /// Custody token account (authority = vault PDA) when `fee_mint` is set.
    pub token_vault: Option<Pubkey>,
    /// Monotonically increasing raffle id, assigned at creation, never reused.
    pub raffle_count: u64,
    /// Monotonically increasing counter used to derive pending-request PDA seeds.
    pub request_counter: u64,
    /// PDA bump seed cached for efficient re-derivation.
    pub bump: u8,
}

/// Fee custody, stored as a zero-logic PDA.
///
/// Seeds: `["vault"]`
///
/// Native-mode entries transfer lamports here. In token mode this PDA is the
/// authority of the custody token account instead, and signs the sweep.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    /// PDA bump seed cached for efficient re-derivation.
    pub bump: u8,
}

/// A single raffle and its winner record.
///
/// Seeds: `["raffle", id.to_le_bytes()]`
///
/// Lifecycle: Open (accepting entries) -> Closed (upkeep ran; winners are
/// recorded by the provider's fulfillment). Raffles are never deleted.
#[account]
pub struct Raffle {
    /// Unique identifier derived from `HouseConfig::raffle_count` at creation time.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Unix timestamp after which the raffle becomes due for closing.
    pub end_time: i64,
    /// Fee paid per entry, in lamports or in the configured fee mint.
    pub entry_fee: u64,
    /// Number of winner slots, fixed at creation.
    pub max_winners: u32,
    /// Raffle lifecycle state. See `STATE_*` constants.
    pub state: u8,
    /// Winning entrants, appended only during fulfillment. Empty while Open.
    pub winners: Vec<Pubkey>,
    /// PDA bump seed cached for efficient re-derivation.
    pub bump: u8,
}

impl Raffle {
    /// Accepting entries.
    pub const STATE_OPEN: u8 = 0;
    /// Closed by upkeep; entry ledger frozen, winners recorded at fulfillment.
    pub const STATE_CLOSED: u8 = 1;

    pub const MAX_TITLE_LEN: usize = 64;
    pub const MAX_WINNERS: u32 = 16;

    pub fn space(title: &str, max_winners: u32) -> usize {
        8 + 8 + (4 + title.len()) + 8 + 8 + 4 + 1 + (4 + 32 * max_winners as usize) + 1
    }

    pub fn is_open(&self) -> bool {
        self.state == Self::STATE_OPEN
    }

    /// Open -> Closed transition, performed exactly once per raffle by upkeep.
    pub fn mark_closed(&mut self) -> Result<()> {
        require!(self.state == Self::STATE_OPEN, RaffleError::InvalidTransition);
        self.state = Self::STATE_CLOSED;
        Ok(())
    }

    /// Append winners from a fulfillment. The raffle must already be Closed
    /// and the total may never exceed `max_winners`.
    pub fn record_winners(&mut self, winners: &[Pubkey]) -> Result<()> {
        require!(self.state == Self::STATE_CLOSED, RaffleError::InvalidTransition);
        require!(
            self.winners.len() + winners.len() <= self.max_winners as usize,
            RaffleError::InvalidTransition
        );
        self.winners.extend_from_slice(winners);
        Ok(())
    }
}

/// Ordered entry ledger for one raffle.
///
/// Seeds: `["entrants", raffle_id.to_le_bytes()]`
///
/// The header below is followed by a raw tail of 32-byte entrant keys, one
/// slot per entry. The same key may appear any number of times; each slot is
/// separately eligible to win. The tail is append-only while the raffle is
/// Open and frozen from the moment it leaves Open.
#[account]
pub struct Entrants {
    /// The raffle this ledger belongs to.
    pub raffle_id: u64,
    /// Number of entries recorded so far.
    pub total: u32,
    /// Slot capacity, fixed at creation.
    pub max: u32,
    /// PDA bump seed cached for efficient re-derivation.
    pub bump: u8,
}

impl Entrants {
    /// Discriminator plus header fields; the key tail starts here.
    pub const BASE_SIZE: usize = 8 + 8 + 4 + 4 + 1;

    /// Largest ledger a CPI-created account comfortably holds.
    pub const MAX_ENTRIES: u32 = 256;

    pub fn space(max: u32) -> usize {
        Self::BASE_SIZE + 32 * max as usize
    }

    /// Read the entrant key stored in `index`'s slot of the raw tail.
    pub fn get_entrant(data: &[u8], index: usize) -> Pubkey {
        let offset = Self::BASE_SIZE + 32 * index;
        Pubkey::try_from(&data[offset..offset + 32]).unwrap()
    }

    /// Append one entrant key to the raw tail.
    pub fn append_entrant(
        &mut self,
        mut data: std::cell::RefMut<&mut [u8]>,
        entrant: Pubkey,
    ) -> Result<()> {
        require!(self.total < self.max, RaffleError::EntryLedgerFull);
        let offset = Self::BASE_SIZE + 32 * self.total as usize;
        data[offset..offset + 32].copy_from_slice(&entrant.to_bytes());
        self.total += 1;
        Ok(())
    }
}

/// Correlation record for an in-flight randomness request.
///
/// Seeds: `["pending-request", request_id.to_le_bytes()]`
///
/// Created exactly once per raffle when upkeep closes it, consumed exactly
/// once when the provider's fulfillment arrives (the account is closed, so a
/// replayed request id no longer resolves). At most one pending request per
/// raffle can exist because a raffle is only Open once.
#[account]
#[derive(InitSpace)]
pub struct PendingRequest {
    /// Unique identifier derived from `HouseConfig::request_counter` at creation time.
    pub request_id: u64,
    /// The raffle this request will finalize.
    pub raffle_id: u64,
    /// Number of random values requested; the closing raffle's own `max_winners`.
    pub num_words: u32,
    /// Entropy forwarded to the randomness provider.
    pub seed: [u8; 32],
    /// The upkeep caller; receives the record's rent back at fulfillment.
    pub payer: Pubkey,
    /// Unix timestamp at which the request was issued.
    pub requested_at: i64,
    /// PDA bump seed cached for efficient re-derivation.
    pub bump: u8,
}
