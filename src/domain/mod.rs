//! Domain types: the order port and the payment report it feeds.

pub mod order;
pub mod report;
