#![warn(clippy::all)]

mod bit_row;
mod field;
mod neighborhood;
mod step;

pub use bit_row::BitRow;
pub use field::ConwayField;
pub use neighborhood::Neighborhood;
