use crate::domain::order::PlainOrder;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Streams orders out of a `name,final_value` CSV feed.
///
/// Only the header row is trimmed, so `name, final_value` is accepted while
/// order names reach the report exactly as written (quote a name to keep its
/// padding). Rows may carry extra columns; they are ignored.
pub struct OrderReader<R: Read> {
    records: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Wraps an order feed such as an opened file or locked stdin.
    pub fn new(feed: R) -> Self {
        let records = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(feed);
        Self { records }
    }

    /// Yields one item per row, in feed order.
    ///
    /// A malformed row yields an error item and does not end the stream.
    pub fn orders(self) -> impl Iterator<Item = Result<PlainOrder>> {
        self.records
            .into_deserialize()
            .map(|row| row.map_err(PaymentError::from))
    }
}
