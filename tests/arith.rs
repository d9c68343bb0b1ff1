use bookbot_math::{Operands, add, compute, subtract, sum, write_report};

#[test]
fn add_is_sum() {
    for (a, b) in [(1.0, 2.0), (-7.5, 0.25), (1e308, 1e308)] {
        assert_eq!(add(a, b), sum(a, b));
        assert_eq!(add(a, b), a + b);
    }
}

#[test]
fn report_matches_helpers() {
    let operands = Operands::new(-3.0, 4.5);
    let report = compute(&operands);
    assert_eq!(report.sum, add(-3.0, 4.5));
    assert_eq!(report.difference, subtract(-3.0, 4.5));
    assert_eq!(report.to_string(), "Sum: 1.5, Difference: -7.5");
}

#[test]
fn report_is_one_line() {
    let mut out = Vec::new();
    write_report(&mut out, &Operands::default()).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.lines().count(), 1);
    assert!(out.ends_with('\n'));
}
