//! Application layer orchestrating the payment report.
//!
//! This module defines the `PaymentCalculator`, which reads an `Order` and writes
//! its report to an injected sink. It keeps no state between calls.

pub mod calculator;
