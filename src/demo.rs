use std::fmt;
use std::io::{self, Write};

use crate::arith::{subtract, sum};
use crate::config::Operands;
use crate::render::ReprFloat;

/// Results of running the arithmetic helpers on a pair of operands.
///
/// Displays as `Sum: <sum>, Difference: <difference>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathReport {
    pub sum: f64,
    pub difference: f64,
}

impl fmt::Display for MathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sum: {}, Difference: {}",
            ReprFloat(self.sum),
            ReprFloat(self.difference)
        )
    }
}

pub fn compute(operands: &Operands) -> MathReport {
    let Operands { lhs, rhs } = *operands;
    log::trace!("computing with lhs={lhs}, rhs={rhs}");
    MathReport {
        sum: sum(lhs, rhs),
        difference: subtract(lhs, rhs),
    }
}

/// Compute the report for `operands` and write it as one line to `out`
pub fn write_report(out: &mut impl Write, operands: &Operands) -> io::Result<()> {
    let report = compute(operands);
    log::debug!("report: {report:?}");
    writeln!(out, "{report}")
}

/// Do some math.
///
/// Adds and subtracts `1.0` and `2.0`, then prints
/// `Sum: 3.0, Difference: -1.0` to stdout.
pub fn do_some_math() {
    let stdout = io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &Operands::default()) {
        log::error!("failed to write to stdout: {e}");
    }
}
