//! Game business logic: randomness seam, match start, round resolution.

mod random;
mod rounds;
mod setup;

pub use random::{ChoiceSource, RngSource};
pub use rounds::{play_round, RoundPlay};
pub use setup::start_match;
