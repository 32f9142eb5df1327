use anchor_lang::prelude::*;

/// Emitted when the privileged authority opens a new raffle.
#[event]
pub struct RaffleCreated {
    pub raffle_id: u64,
    pub end_time: i64,
    pub entry_fee: u64,
    pub title: String,
    pub max_winners: u32,
}

/// Emitted for every accepted entry.
#[event]
pub struct EntryRecorded {
    pub raffle_id: u64,
    pub timestamp: i64,
    pub entrant: Pubkey,
    pub entry_fee: u64,
}

/// Emitted when upkeep closes a raffle and issues its randomness request.
///
/// The off-chain randomness provider subscribes to these events and later
/// submits `fulfill_randomness` with `num_words` values for `request_id`.
#[event]
pub struct UpkeepPerformed {
    pub raffle_id: u64,
    pub request_id: u64,
    pub timestamp: i64,
    pub num_words: u32,
    pub seed: [u8; 32],
}

/// Emitted when the provider's fulfillment finalizes a raffle.
#[event]
pub struct RandomnessFulfilled {
    pub raffle_id: u64,
    pub request_id: u64,
    pub random_values: Vec<u64>,
    pub winners: Vec<Pubkey>,
}

/// Emitted when the authority sweeps the custody balance.
#[event]
pub struct FeesWithdrawn {
    pub authority: Pubkey,
    pub amount: u64,
}
