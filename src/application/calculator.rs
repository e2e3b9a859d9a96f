use crate::domain::order::Order;
use crate::domain::report::{FinalValue, PROCESSING_PREFIX, TOTAL_PREFIX};
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// Writes the payment report of an order to an output sink.
///
/// `PaymentCalculator` owns only the sink. Every call reads the order afresh,
/// so calling it twice with the same order writes the same report twice.
pub struct PaymentCalculator<W: Write> {
    sink: W,
}

impl<W: Write> PaymentCalculator<W> {
    /// Creates a new `PaymentCalculator` writing to `sink` (e.g. stdout, a buffer).
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Writes the report line by line, reading each value right before its line.
    ///
    /// The total line and the blank line are written before the name is read,
    /// so a failing `name` leaves those two lines in the sink. Failures from the
    /// order propagate unchanged; sink failures surface as `PaymentError::IoError`.
    pub fn calculate<O: Order + ?Sized>(&mut self, order: &O) -> Result<()> {
        let total = FinalValue(order.final_value()?);

        writeln!(self.sink, "{TOTAL_PREFIX}{total}")?;
        writeln!(self.sink)?;
        self.sink.flush()?;

        let name = order.name()?;
        debug!(%name, %total, "Writing payment report");

        writeln!(self.sink, "{PROCESSING_PREFIX}{name}")?;
        self.sink.flush()?;
        Ok(())
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consumes the calculator and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
