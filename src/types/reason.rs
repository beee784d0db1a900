//! Positional placeholder substitution for failure reasons.
//!
//! Reason templates use `{0}`, `{1}`, ... to refer to arguments derived from
//! the validated value. Formatting happens once, on the failing path, and the
//! result is the display-ready string carried by
//! [`Outcome::Invalid`](crate::types::Outcome::Invalid).

use crate::types::alloc_type::String;

/// Substitutes positional `{i}` placeholders in `template` with `args[i]`.
///
/// A placeholder whose index has no corresponding argument, and any brace
/// sequence that is not `{digits}`, is left as literal text. Excess arguments
/// are ignored. Callers are expected to keep the template and the argument
/// list in sync; the literal-text fallback exists so a mismatch degrades to a
/// readable message instead of a fault.
///
/// # Examples
///
/// ```
/// use check_rail::format_reason;
///
/// let reason = format_reason(
///     "{0} should be numeric. [suppliedValue={1}]",
///     &["Zip code".into(), "AB12".into()],
/// );
/// assert_eq!(reason, "Zip code should be numeric. [suppliedValue=AB12]");
///
/// // Unmatched placeholders stay literal.
/// assert_eq!(format_reason("missing {3}", &[]), "missing {3}");
/// ```
#[must_use]
pub fn format_reason(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(
        template.len() + args.iter().map(|arg| arg.len()).sum::<usize>(),
    );
    let mut rest = template;
    loop {
        let Some(open) = rest.find('{') else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            break;
        };
        match placeholder_index(&tail[1..close]).and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    out
}

fn placeholder_index(body: &str) -> Option<usize> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    body.parse().ok()
}
