use std::fmt;

/// Decimal exponents in `[FIXED_MIN_EXP, FIXED_MAX_EXP)` are written out in
/// fixed notation, anything else in scientific notation.
const FIXED_MIN_EXP: i32 = -4;
const FIXED_MAX_EXP: i32 = 16;

/// Display wrapper rendering a float in its shortest round-trip form,
/// always showing a fractional part in fixed notation.
///
/// ```
/// use bookbot_math::render::ReprFloat;
///
/// assert_eq!(ReprFloat(3.0).to_string(), "3.0");
/// assert_eq!(ReprFloat(-1.0).to_string(), "-1.0");
/// assert_eq!(ReprFloat(0.00001).to_string(), "1e-05");
/// assert_eq!(ReprFloat(1e16).to_string(), "1e+16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReprFloat(pub f64);

impl fmt::Display for ReprFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("nan");
        }
        if x.is_sign_negative() {
            f.write_str("-")?;
        }
        if x.is_infinite() {
            return f.write_str("inf");
        }

        let (digits, exp) = shortest_digits(x.abs());
        if (FIXED_MIN_EXP..FIXED_MAX_EXP).contains(&exp) {
            write_fixed(f, &digits, exp)
        } else {
            write_scientific(f, &digits, exp)
        }
    }
}

/// Render `x` the same way [`ReprFloat`] displays it
pub fn format_float(x: f64) -> String {
    ReprFloat(x).to_string()
}

/// Split a finite, non-negative float into its significant digits and the
/// decimal exponent of the first digit, e.g. `1234.5` -> (`"12345"`, 3).
fn shortest_digits(x: f64) -> (String, i32) {
    // `{:e}` gives the shortest digits that round-trip, like "1.2345e3"
    let sci = format!("{x:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exp = exp.parse::<i32>().unwrap_or(0);
    let digits = mantissa.replace('.', "");
    (digits, exp)
}

fn write_fixed(f: &mut fmt::Formatter<'_>, digits: &str, exp: i32) -> fmt::Result {
    if exp < 0 {
        let zeros = (-exp - 1) as usize;
        return write!(f, "0.{}{digits}", "0".repeat(zeros));
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = int_len - digits.len();
        write!(f, "{digits}{}.0", "0".repeat(zeros))
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        write!(f, "{int_part}.{frac_part}")
    }
}

fn write_scientific(f: &mut fmt::Formatter<'_>, digits: &str, exp: i32) -> fmt::Result {
    let (first, rest) = digits.split_at(1);
    f.write_str(first)?;
    if !rest.is_empty() {
        write!(f, ".{rest}")?;
    }
    let sign = if exp < 0 { '-' } else { '+' };
    write!(f, "e{sign}{:02}", exp.unsigned_abs())
}
