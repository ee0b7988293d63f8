mod phrase;
mod unit;
mod value;

pub use phrase::Phrase;
pub use unit::{Comparison, Direction, Unit};
pub use value::Value;
