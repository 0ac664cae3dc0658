#![deny(missing_docs)]

//! # Output Formatting
//!
//! The engine emits logical lines only; everything about whitespace is
//! decided here, behind the [`Formatter`] seam, so a different formatter
//! can be swapped in without touching emission.

/// A strategy trait decoupling text formatting from interface emission.
pub trait Formatter {
    /// Normalizes whitespace and line breaks of the raw emitted text.
    fn format(&self, source: &str) -> String;
}

/// Default formatter: brace-driven two-space indentation.
///
/// - one logical line per output line, trimmed;
/// - blank lines dropped;
/// - comment interiors (`* ...`) aligned under their opening `/**`;
/// - braces inside comment lines do not affect the indent depth;
/// - a single trailing newline, and empty input stays empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

/// Indentation unit applied per nesting level.
const INDENT: &str = "  ";

impl Formatter for TextFormatter {
    fn format(&self, source: &str) -> String {
        let mut out = String::new();
        let mut depth: usize = 0;
        let mut in_comment = false;

        for raw in source.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let comment_line = in_comment || line.starts_with("/*");
            if line.starts_with("/*") && !line.contains("*/") {
                in_comment = true;
            } else if in_comment && line.contains("*/") {
                in_comment = false;
            }

            let closes_first = !comment_line && line.starts_with('}');
            let print_depth = if closes_first {
                depth.saturating_sub(1)
            } else {
                depth
            };

            for _ in 0..print_depth {
                out.push_str(INDENT);
            }
            if comment_line && line.starts_with('*') {
                out.push(' ');
            }
            out.push_str(line);
            out.push('\n');

            if !comment_line {
                let opens = line.matches('{').count();
                let closes = line.matches('}').count();
                depth = (depth + opens).saturating_sub(closes);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indents_by_brace_depth() {
        let raw = "declare namespace OpenAPI3 {\nexport interface User {\nemail?: string;\n}\n}";
        let formatted = TextFormatter.format(raw);
        assert_eq!(
            formatted,
            "declare namespace OpenAPI3 {\n  export interface User {\n    email?: string;\n  }\n}\n"
        );
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(TextFormatter.format(""), "");
        assert_eq!(TextFormatter.format("\n\n"), "");
    }

    #[test]
    fn test_comment_interior_alignment() {
        let raw = "export interface User {\n/**\n* The account email.\n*/\nemail?: string;\n}";
        let formatted = TextFormatter.format(raw);
        assert_eq!(
            formatted,
            "export interface User {\n  /**\n   * The account email.\n   */\n  email?: string;\n}\n"
        );
    }

    #[test]
    fn test_braces_in_comments_are_ignored() {
        let raw = "interface A {\n/**\n* shaped like { nested }\n*/\nx?: string;\n}";
        let formatted = TextFormatter.format(raw);
        assert!(formatted.ends_with("}\n"));
        assert!(formatted.contains("  x?: string;"));
    }
}
