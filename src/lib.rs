#![doc = include_str!("../README.md")]

pub mod arith;
pub mod config;
pub mod demo;
pub mod render;

pub use arith::{subtract, sum};
/// Alias of [`sum`]
pub use arith::sum as add;
pub use config::Operands;
pub use demo::{MathReport, compute, do_some_math, write_report};
