use crate::error::Result;
use serde::{Deserialize, Deserializer};

/// Read access to the two values a payment report needs from an order.
///
/// Implementors own the order entirely; callers only borrow it for one call.
/// Either accessor may fail when the backing order cannot be read, and that
/// failure must reach the caller untouched.
pub trait Order {
    /// The amount payable. No sign or range constraints apply.
    fn final_value(&self) -> Result<f64>;

    /// Display label of the order. May be empty.
    fn name(&self) -> Result<String>;
}

/// A boxed order that can be handed to another thread.
pub type OrderBox = Box<dyn Order + Send + Sync>;

impl<T: Order + ?Sized> Order for Box<T> {
    fn final_value(&self) -> Result<f64> {
        (**self).final_value()
    }

    fn name(&self) -> Result<String> {
        (**self).name()
    }
}

/// An order held as plain values, as read from an order feed.
///
/// `name` is kept byte for byte; `final_value` tolerates surrounding whitespace.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PlainOrder {
    pub name: String,
    #[serde(deserialize_with = "deserialize_padded_f64")]
    pub final_value: f64,
}

fn deserialize_padded_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

impl PlainOrder {
    pub fn new(name: impl Into<String>, final_value: f64) -> Self {
        Self {
            name: name.into(),
            final_value,
        }
    }
}

impl Order for PlainOrder {
    fn final_value(&self) -> Result<f64> {
        Ok(self.final_value)
    }

    fn name(&self) -> Result<String> {
        Ok(self.name.clone())
    }
}
