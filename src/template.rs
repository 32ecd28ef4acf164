//! `{{name}}` placeholder substitution.
//!
//! # Invariants
//!
//! 1. **No partial output**: a template either renders with every token
//!    resolved, or fails on the first token whose name has no argument.
//! 2. **Occurrences are independent**: `{{x}} {{x}}` is resolved token by
//!    token, so repeated names are all substituted.
//! 3. **Values are verbatim**: a substituted value is never rescanned,
//!    so rendering always terminates.
//!
//! A token is the leftmost `{{` followed by the nearest `}}`. The name is
//! the text in between, untrimmed. A name cannot span a line break; such a
//! `{{` is treated as literal text.

use std::collections::HashMap;

use crate::error::LocalizationError;

/// Opening token delimiter.
const OPEN: &str = "{{";
/// Closing token delimiter.
const CLOSE: &str = "}}";

/// Renders `template`, replacing each `{{name}}` with `args[name]`.
///
/// Arguments that no token references are ignored. Values are inserted
/// as-is and never scanned again: a value containing `{{b}}` leaves that
/// text in the output unresolved. Rendering therefore always terminates,
/// and only tokens of the template itself are guaranteed to be resolved.
///
/// # Errors
/// `MissingPlaceholderArgument(name)` for the first token without an argument.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use fines_l10n::template::render;
///
/// let args = HashMap::from([("name".to_string(), "World".to_string())]);
/// assert_eq!(render("Hello {{name}}", &args).unwrap(), "Hello World");
/// ```
#[allow(clippy::implicit_hasher)]
pub fn render(template: &str, args: &HashMap<String, String>) -> Result<String, LocalizationError> {
    render_with(template, |name| args.get(name).map(String::as_str))
}

/// Renders `template`, resolving each token name through `lookup`.
pub(crate) fn render_with<'v, F>(template: &str, lookup: F) -> Result<String, LocalizationError>
where
    F: Fn(&str) -> Option<&'v str>,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(token) = next_token(rest) {
        let Some(value) = lookup(token.name) else {
            tracing::debug!(placeholder = token.name, "Missing placeholder argument");
            return Err(LocalizationError::MissingPlaceholderArgument(token.name.to_string()));
        };
        output.push_str(token.before);
        output.push_str(value);
        rest = token.after;
    }

    output.push_str(rest);
    Ok(output)
}

/// Lists the placeholder names in `template`, in order of appearance.
///
/// Repeated names are listed once per occurrence.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(token) = next_token(rest) {
        names.push(token.name);
        rest = token.after;
    }
    names
}

/// A located `{{name}}` token, splitting its source text in three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    /// Text preceding the token.
    before: &'a str,
    /// Text between the delimiters.
    name: &'a str,
    /// Text following the token.
    after: &'a str,
}

/// Finds the leftmost token in `text`.
fn next_token(text: &str) -> Option<Token<'_>> {
    text.match_indices(OPEN).find_map(|(start, _)| {
        let body = text.get(start + OPEN.len()..)?;
        let end = body.find(CLOSE)?;
        let name = body.get(..end)?;
        if name.contains(is_line_terminator) {
            return None;
        }
        Some(Token { before: text.get(..start)?, name, after: body.get(end + CLOSE.len()..)? })
    })
}

/// Characters a token name may not contain.
const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
