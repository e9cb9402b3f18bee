use faultr_common::fault::Fault;
use faultr_common::success;
use faultr_core::arithmetic;

/// One guarded division.
///
/// A zero denominator escapes on purpose, so the runtime-family handler
/// at the boundary sees real traffic. The process still exits cleanly.
pub fn run(numerator: f64, denominator: f64) -> anyhow::Result<()> {
    let quotient = arithmetic::divide(numerator, denominator).map_err(Fault::from)?;
    success!("{numerator} / {denominator} = {quotient}");
    Ok(())
}
