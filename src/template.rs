//! Positional placeholder substitution for the popup template.
//!
//! The popup body is a user-editable template carrying `{N}` positional
//! slots. Substitution is purely textual: the template is never validated,
//! and a slot that has no corresponding argument is left in place.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for matching `{N}` positional placeholders.
/// Compiled once at startup using LazyLock to avoid recompiling on every render call.
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(\d+)\}")
        .expect("placeholder regex is a compile-time constant and must be valid")
});

/// Substitute `{N}` placeholders in `template` with the argument at index `N`.
///
/// - `{0}` is replaced with `args[0]`, `{1}` with `args[1]`, and so on.
/// - A placeholder whose index is out of range is left unchanged.
/// - Arguments without a matching placeholder are ignored.
/// - Braced text that is not a decimal index (e.g. `{name}`) is not a
///   placeholder and passes through untouched.
pub fn render_template(template: &str, args: &[&str]) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &regex::Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map_or_else(|| caps[0].to_string(), |arg| (*arg).to_string())
        })
        .into_owned()
}
