//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of the same source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a Span from `$start` to `$end` inside the source named `$file`.
///
/// Offsets past `u32::MAX` saturate to `u32::MAX`.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position(u32::try_from($start).unwrap_or(u32::MAX), Arc::clone(&$file)),
            end: Position(u32::try_from($end).unwrap_or(u32::MAX), Arc::clone(&$file)),
        }
    };
}
