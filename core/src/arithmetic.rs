use faultr_common::fault::RuntimeFault;

/// Divides `numerator` by `denominator`.
///
/// Fails with [`RuntimeFault::DivisionByZero`] when the denominator equals
/// zero (IEEE equality, so `-0.0` counts as zero). No side effects; the
/// quotient is the exact IEEE result of `/`.
pub fn divide(numerator: f64, denominator: f64) -> Result<f64, RuntimeFault> {
    if denominator == 0.0 {
        return Err(RuntimeFault::DivisionByZero {
            numerator,
            denominator,
        });
    }
    Ok(numerator / denominator)
}
