//! Implementation of the simplification rules.
//!
//! Each module handles one kind of composite node. Its `all` function takes the operands of the
//! node, **already simplified**, and applies the rules for that node in priority order, returning
//! the rewritten expression. If no rule applies, the node is rebuilt from the given operands.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

use crate::step::StepCollector;
use log::trace;
use super::step::Step;

/// Records that the given step was taken.
fn record(step_collector: &mut dyn StepCollector<Step>, step: Step) {
    trace!("simplify: {:?}", step);
    step_collector.push(step);
}
