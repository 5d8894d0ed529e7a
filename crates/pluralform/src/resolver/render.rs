//! Template expansion and placeholder substitution.
//!
//! Rendering walks the format key's segments, inlining the selected plural
//! form wherever a `%#@name@` reference appears. Placeholders are filled
//! positionally from the queue `[quantity, extra_args...]` with strict type
//! checking; no value is ever coerced to another type. The quantity only
//! fills numeric placeholders, so plain string entries render from their
//! extra arguments.

use crate::resolver::error::ResolveError;
use crate::resolver::plural::plural_category;
use crate::types::{
    FormatTemplate, MessageDefinition, Placeholder, Quantity, Segment, Value, ValueType,
};

/// Maximum depth of nested `%#@name@` expansion.
const MAX_EXPANSION_DEPTH: usize = 8;

/// Render a message definition to its final string.
///
/// `locale` is the catalog locale the definition came from (used in error
/// values); `lang` is the language whose plural rules apply.
pub(crate) fn render(
    def: &MessageDefinition,
    locale: &str,
    lang: &str,
    quantity: Quantity,
    extra_args: &[Value],
) -> Result<String, ResolveError> {
    let ctx = RenderContext {
        def,
        locale,
        lang,
        quantity,
    };
    let mut args = ArgQueue::new(quantity, extra_args);
    let mut out = String::new();
    expand(&mut out, &def.format_key, &ctx, &mut args, 0)?;
    Ok(out)
}

/// Immutable state shared by every level of the expansion.
struct RenderContext<'a> {
    def: &'a MessageDefinition,
    locale: &'a str,
    lang: &'a str,
    quantity: Quantity,
}

/// Positional argument queue: the quantity at position 0, then the extra
/// arguments.
///
/// The quantity is numeric, so it satisfies only the first numeric
/// placeholder; string placeholders draw from the extra arguments. An entry
/// like `"The currency is %@."` therefore renders from its extra argument
/// rather than failing against the quantity.
struct ArgQueue<'a> {
    quantity: Value,
    quantity_pending: bool,
    extra: &'a [Value],
    extra_index: usize,
}

impl<'a> ArgQueue<'a> {
    fn new(quantity: Quantity, extra: &'a [Value]) -> Self {
        ArgQueue {
            quantity: quantity.into(),
            quantity_pending: true,
            extra,
            extra_index: 0,
        }
    }

    /// Take the next argument for a placeholder of the given type, returning
    /// its queue position either way.
    fn next(&mut self, expected: ValueType) -> (usize, Option<&Value>) {
        if self.quantity_pending && expected != ValueType::Str {
            self.quantity_pending = false;
            return (0, Some(&self.quantity));
        }
        let index = self.extra_index;
        self.extra_index += 1;
        (index + 1, self.extra.get(index))
    }
}

fn expand(
    out: &mut String,
    template: &FormatTemplate,
    ctx: &RenderContext<'_>,
    args: &mut ArgQueue<'_>,
    depth: usize,
) -> Result<(), ResolveError> {
    if depth > MAX_EXPANSION_DEPTH {
        return Err(ResolveError::RecursionLimit {
            key: ctx.def.key.clone(),
        });
    }

    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(ph) => {
                let (index, value) = args.next(ph.value_type);
                let Some(value) = value else {
                    return Err(ResolveError::MissingArgument {
                        key: ctx.def.key.clone(),
                        index,
                    });
                };
                write_placeholder(out, &ctx.def.key, *ph, index, value)?;
            }
            Segment::Variable(name) => {
                let Some(variable) = ctx.def.variables.get(name) else {
                    return Err(ResolveError::UndefinedVariable {
                        key: ctx.def.key.clone(),
                        variable: name.clone(),
                    });
                };
                if variable.value_type != ctx.quantity.value_type() {
                    return Err(ResolveError::TypeMismatch {
                        key: ctx.def.key.clone(),
                        index: 0,
                        expected: variable.value_type,
                        got: ctx.quantity.value_type(),
                    });
                }
                let category = plural_category(ctx.lang, ctx.def.rule_type, ctx.quantity);
                let Some(form) = variable.form(category) else {
                    return Err(ResolveError::MissingFallbackCategory {
                        key: ctx.def.key.clone(),
                        locale: ctx.locale.to_string(),
                        category,
                    });
                };
                expand(out, form, ctx, args, depth + 1)?;
            }
        }
    }

    Ok(())
}

/// Substitute one argument into one placeholder, type-checked.
fn write_placeholder(
    out: &mut String,
    key: &str,
    ph: Placeholder,
    index: usize,
    value: &Value,
) -> Result<(), ResolveError> {
    match (ph.value_type, value) {
        (ValueType::Integer, Value::Integer(n)) => out.push_str(&n.to_string()),
        (ValueType::Float, Value::Float(x)) => match ph.precision {
            Some(precision) => out.push_str(&format!("{x:.precision$}")),
            None => out.push_str(&x.to_string()),
        },
        (ValueType::Str, Value::Str(s)) => out.push_str(s),
        (expected, got) => {
            return Err(ResolveError::TypeMismatch {
                key: key.to_string(),
                index,
                expected,
                got: got.value_type(),
            });
        }
    }
    Ok(())
}
