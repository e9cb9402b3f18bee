#![cfg(test)]
//! End-to-end behavior of the layered drill: which kind each stage
//! raises, which handler recovers it, and that the composed boundary
//! always runs to completion.

use faultr_common::fault::{Fault, RuntimeFault};
use faultr_core::{arithmetic, drill};

/// Mirror of the cli drill command: the boundary handler that recovers
/// only the custom kind and escalates everything else.
fn run_boundary(numerator: f64, denominator: f64) -> anyhow::Result<&'static str> {
    drill::division_stage(numerator, denominator);

    match drill::custom_stage() {
        Ok(()) => Ok("completed"),
        Err(Fault::Custom(_)) => Ok("custom fault recovered"),
        Err(fault) => Err(fault.into()),
    }
}

/*************************************************************
                       Stage contracts
**************************************************************/

#[test]
fn divide_matches_ieee_division_for_nonzero_denominators() {
    for (numerator, denominator) in [(10.0, 4.0), (-3.0, 2.0), (0.0, 7.5), (1e300, 1e-3)] {
        assert_eq!(
            arithmetic::divide(numerator, denominator).unwrap(),
            numerator / denominator
        );
    }
}

#[test]
fn divide_by_zero_is_a_runtime_family_fault() {
    let fault: Fault = arithmetic::divide(10.0, 0.0).unwrap_err().into();

    assert!(fault.is_runtime());
    assert_eq!(fault.kind(), "division-by-zero");
}

#[test]
fn nested_stage_fails_with_the_logic_kind_every_run() {
    for _ in 0..3 {
        let fault = drill::nested_stage().unwrap_err();
        assert!(matches!(fault, RuntimeFault::Logic(_)));
    }
}

#[test]
fn custom_stage_recovers_the_nested_fault_and_raises_custom() {
    let fault = drill::custom_stage().unwrap_err();

    // The logic fault was handled inside; only the custom kind surfaces.
    assert_eq!(fault.kind(), "custom");
    assert_eq!(fault.to_string(), "custom fault occurred");
}

/*************************************************************
                      Boundary behavior
**************************************************************/

#[test]
fn boundary_recovers_the_custom_fault() {
    let outcome = run_boundary(10.0, 0.0).unwrap();
    assert_eq!(outcome, "custom fault recovered");
}

#[test]
fn boundary_completes_for_clean_division_operands_too() {
    let outcome = run_boundary(10.0, 4.0).unwrap();
    assert_eq!(outcome, "custom fault recovered");
}

#[test]
fn escaped_faults_stay_downcastable_at_the_outermost_handler() {
    let report: anyhow::Error = Fault::from(RuntimeFault::Logic("escaped".into())).into();

    match report.downcast_ref::<Fault>() {
        Some(Fault::Runtime(fault)) => {
            assert_eq!(fault.to_string(), "logic fault: escaped");
        }
        other => panic!("expected a runtime fault, got {other:?}"),
    }
}
