#![allow(ambiguous_glob_reexports)]

pub mod initialize;
pub mod create_raffle;
pub mod enter_raffle;
pub mod check_upkeep;
pub mod perform_upkeep;
pub mod fulfill_randomness;
pub mod withdraw;

pub use initialize::*;
pub use create_raffle::*;
pub use enter_raffle::*;
pub use check_upkeep::*;
pub use perform_upkeep::*;
pub use fulfill_randomness::*;
pub use withdraw::*;
