pub use board::*;
pub use errors::*;
pub use player::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod player;
mod visualization;
