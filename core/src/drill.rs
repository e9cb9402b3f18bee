//! # Drill Stages
//!
//! The layered call chain the drill exercises:
//!
//! 1. [`nested_stage`] reports progress, then always fails with a
//!    runtime-family logic fault.
//! 2. [`custom_stage`] guards the nested stage with a handler for the
//!    whole runtime family, logs the recovery, then raises a
//!    [`CustomFault`] that it deliberately does not handle.
//! 3. [`division_stage`] guards a division so tightly that nothing
//!    escapes it.
//!
//! Only the boundary in the cli crate handles the custom fault; anything
//! else that reaches it lands in the last-resort handlers there.

use faultr_common::fault::{CustomFault, Fault, RuntimeFault};
use faultr_common::{error, info, success};

use crate::arithmetic;

/// Runs one guarded division and reports the outcome.
///
/// The handler covers the entire runtime family, so this stage never
/// escapes regardless of the operands.
pub fn division_stage(numerator: f64, denominator: f64) {
    match arithmetic::divide(numerator, denominator) {
        Ok(quotient) => success!("divide({numerator}, {denominator}) = {quotient}"),
        Err(fault) => error!("division stage recovered: {fault}"),
    }
}

/// Always fails after reporting partial progress.
///
/// Exists so the guard in [`custom_stage`] is exercised on every run.
pub fn nested_stage() -> Result<(), RuntimeFault> {
    info!("running nested stage");
    Err(RuntimeFault::Logic(
        "nested stage failed after partial progress".into(),
    ))
}

/// Guards the nested stage, then raises a fault of its own.
///
/// The guard recovers any runtime-family fault and continues. The
/// [`CustomFault`] raised afterwards belongs to a different category and
/// is left for the boundary to handle.
pub fn custom_stage() -> Result<(), Fault> {
    info!("running custom stage");

    match nested_stage() {
        Ok(()) => success!("nested stage completed"),
        Err(fault) => error!("runtime fault caught in custom stage: {fault}"),
    }

    Err(CustomFault::default().into())
}
