pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;

pub mod suitedness;
pub use suitedness::*;
