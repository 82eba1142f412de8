use std::fmt::{Display, Write};

pub mod en;

pub use en as current;

/// Substitute `values` into the `{}` slots of `template`, left to right.
/// Slots without a value stay as `{}`; surplus values are ignored.
pub fn fill(template: &str, values: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut pieces = template.split("{}").peekable();
    while let Some(piece) = pieces.next() {
        out.push_str(piece);
        if pieces.peek().is_none() {
            break;
        }
        match values.next() {
            Some(value) => {
                let _ = write!(out, "{value}");
            },
            None => out.push_str("{}"),
        }
    }
    out
}
