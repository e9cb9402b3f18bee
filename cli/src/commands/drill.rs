use faultr_common::fault::Fault;
use faultr_common::{error, success, warn};
use faultr_core::drill;

use crate::terminal::print;

/// Runs the full drill under the boundary's custom-fault handler.
///
/// Only the custom kind is recovered here. Anything else escalates to the
/// last-resort handlers in `main`.
pub fn run(numerator: f64, denominator: f64) -> anyhow::Result<()> {
    print::print_status(format!("division operands: {numerator} / {denominator}"));
    if denominator == 0.0 {
        warn!("denominator is zero, the division guard will trigger");
    }

    drill::division_stage(numerator, denominator);

    match drill::custom_stage() {
        Ok(()) => success!("custom stage completed"),
        Err(Fault::Custom(fault)) => error!("custom fault caught at boundary: {fault}"),
        Err(fault) => return Err(fault.into()),
    }

    success!("drill complete");
    Ok(())
}
