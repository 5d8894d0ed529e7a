pub mod parser;
pub mod resolver;
pub mod types;

pub use parser::{ParseError, parse_document, parse_format};
pub use resolver::{
    CatalogWarning, LoadError, MessageCatalog, MessageRegistry, ResolveError, compute_suggestions,
    is_supported_language, plural_category,
};
pub use types::{
    FormatTemplate, MessageDefinition, Placeholder, PluralCategory, PluralVariable, Quantity,
    RuleType, Segment, Value, ValueType,
};

/// Creates a `Vec<Value>` from an ordered argument list.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, and strings directly.
///
/// # Example
///
/// ```
/// use pluralform::{Value, args};
///
/// let extra = args![3, "KES. 300"];
/// assert_eq!(extra.len(), 2);
/// assert_eq!(extra[0], Value::Integer(3));
/// assert_eq!(extra[1], Value::Str("KES. 300".to_string()));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![
            $(::std::convert::Into::<$crate::Value>::into($value)),+
        ]
    };
}
