mod or_opt;
pub use self::or_opt::*;

mod swap;
pub use self::swap::*;

mod two_opt;
pub use self::two_opt::*;

use crate::models::{Instance, Route};
use crate::solver::SubsequenceMatrix;

/// A single best-improvement neighbourhood operator (spec.md §4.4).
///
/// Implementations scan every admissible index pair, keep the single best
/// one, and apply it only if it strictly improves `matrix.total_cost()`.
/// They never fail: no improving move just means `apply_best` returns
/// `false` and leaves `route`/`matrix` untouched.
pub trait Move {
    fn name(&self) -> &'static str;
    fn apply_best(&self, route: &mut Route, matrix: &mut SubsequenceMatrix, instance: &Instance) -> bool;
}

/// The five operators RVND (spec.md §4.5) draws from, in the order the
/// neighbourhood list starts out.
pub fn neighbourhood() -> Vec<Box<dyn Move>> {
    vec![
        Box::new(Swap),
        Box::new(TwoOpt),
        Box::new(OrOpt::new(1)),
        Box::new(OrOpt::new(2)),
        Box::new(OrOpt::new(3)),
    ]
}
