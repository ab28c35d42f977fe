pub mod prelude;

pub mod guesses;
pub mod matches;
