mod lines;
mod mark;
mod moves;
mod position;

#[cfg(test)]
mod tests;

pub use lines::*;
pub use mark::*;
pub use moves::*;
pub use position::*;
