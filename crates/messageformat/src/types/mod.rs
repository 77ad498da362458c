mod value;

pub use value::{Number, Value};
