pub mod grid;
pub use grid::*;

pub mod notation;
pub use notation::*;

pub mod outcome;
pub use outcome::*;

pub mod suggest;
pub use suggest::*;

pub mod token;
pub use token::*;
