//! Position estimation: per-triplet trilateration, the combinatorial
//! solver with outlier rejection, floor-level voting, and the session
//! state that carries the previous estimate between cycles.

mod level;
mod session;
mod solver;
mod trilateration;

pub use level::LevelTally;
pub use session::{CycleResult, LocalisationSession, PositionEstimate};
pub use solver::{FirstThree, IterateAll, LastThree, Solution, SolveStrategy};
pub use trilateration::trilaterate_triplet;
