//! Lexer, parser, and AST for **portolan overlay placement documents** (`.skin`).
//!
//! A skin document pins each overlay widget to a screen-relative anchor with a
//! pixel offset, split into `portrait` and `landscape` sections so a device
//! rotation can swap layouts without recompiling anything.
//!
//! This crate is intentionally dependency-free so skin files can be validated
//! by build tooling and editors without pulling in the overlay or engine code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `SkinDocument`, `Placement`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token`, `TokenWithPos` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use portolan_skin::parse_str;
//!
//! let src = r#"
//!     portrait {
//!         compass { anchor: right_top  offset: -28 92 }
//!         ruler   { anchor: left_bottom  offset: 12 -24 }
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.portrait.len(), 2);
//! assert_eq!(doc.portrait[0].widget, "compass");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Placement, Prop, SkinDocument, Value};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> SkinDocument { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_document() { ok(""); }
    #[test] fn empty_section() { ok("portrait { }"); }
    #[test] fn both_sections() {
        ok("portrait { compass { anchor: right_top } } landscape { compass { anchor: right_top } }");
    }
    #[test] fn placement_with_offset_pair() {
        let doc = ok("portrait { compass { anchor: right_top  offset: -28 92 } }");
        assert_eq!(doc.portrait[0].pair("offset"), Some((-28.0, 92.0)));
        assert_eq!(doc.portrait[0].ident("anchor"), Some("right_top"));
    }
    #[test] fn single_number_value() {
        let doc = ok("portrait { ruler { min_width: 60.5 } }");
        assert_eq!(doc.portrait[0].number("min_width"), Some(60.5));
    }
    #[test] fn negative_and_fractional() {
        let doc = ok("landscape { copyright { offset: -0.5 -12.25 } }");
        assert_eq!(doc.landscape[0].pair("offset"), Some((-0.5, -12.25)));
    }
    #[test] fn line_comment() {
        ok("// layout for phones\nportrait {\n    // north arrow\n    compass { anchor: right_top }\n}");
    }
    #[test] fn block_comment() {
        ok("/* header */ portrait { /* body */ compass { anchor: center } /* tail */ }");
    }
    #[test] fn repeated_section_appends() {
        let doc = ok("portrait { compass { anchor: center } } portrait { ruler { anchor: left_bottom } }");
        assert_eq!(doc.portrait.len(), 2);
        assert_eq!(doc.portrait[1].widget, "ruler");
    }
    #[test] fn duplicate_prop_last_wins() {
        let doc = ok("portrait { compass { anchor: center  anchor: right_top } }");
        assert_eq!(doc.portrait[0].ident("anchor"), Some("right_top"));
    }
    #[test] fn wrong_shape_lookup_is_none() {
        let doc = ok("portrait { compass { anchor: right_top } }");
        assert_eq!(doc.portrait[0].number("anchor"), None);
        assert_eq!(doc.portrait[0].pair("anchor"), None);
        assert_eq!(doc.portrait[0].ident("offset"), None);
    }
    #[test] fn full_document() {
        ok(r#"
            portrait {
                compass              { anchor: right_top     offset: -28 92 }
                ruler                { anchor: left_bottom   offset: 12 -24  min_width: 60 }
                copyright            { anchor: left_bottom   offset: 12 -6 }
                scale_label          { anchor: left_bottom   offset: 10 -44 }
                choose_position_mark { anchor: center        offset: 0 0 }
            }
            landscape {
                compass { anchor: right_top  offset: -40 56 }
                ruler   { anchor: left_bottom  offset: 18 -18 }
            }
        "#);
    }
    #[test] fn err_unknown_section() {
        let e = err("sideways { }");
        assert!(e.message.contains("unknown section"));
        assert_eq!(e.section, None);
    }
    #[test] fn err_unclosed_section() { err("portrait { compass { anchor: center }"); }
    #[test] fn err_unclosed_placement() { err("portrait { compass { anchor: center"); }
    #[test] fn err_missing_colon() { err("portrait { compass { anchor right_top } }"); }
    #[test] fn err_double_colon() { err("portrait { compass { anchor: : right_top } }"); }
    #[test] fn err_bare_number_at_top() { err("42"); }
    #[test] fn err_unterminated_block_comment() { err("portrait { /* oops }"); }
    #[test] fn err_stray_character() {
        let e = err("portrait { compass { anchor: right_top ; } }");
        assert_eq!(e.line, 1);
    }
    #[test] fn error_position_tracks_lines() {
        let e = err("portrait {\n    compass {\n        anchor right_top\n    }\n}");
        assert_eq!(e.line, 3);
    }
    #[test] fn error_names_the_enclosing_section() {
        let e = err("landscape { compass { anchor: : center } }");
        assert_eq!(e.section.as_deref(), Some("landscape"));
        assert!(e.to_string().contains(" in landscape:"));
    }
}
