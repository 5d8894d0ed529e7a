mod category;
mod message;
mod template;
mod value;

pub use category::{PluralCategory, RuleType};
pub use message::{MessageDefinition, PluralVariable};
pub use template::{FormatTemplate, Placeholder, Segment};
pub use value::{Quantity, Value, ValueType};
