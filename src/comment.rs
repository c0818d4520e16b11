//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Comment stripping that respects string literal boundaries and
//! preserves newlines (component D).
//!
//! This is a best-effort textual scan, not a full lexer: it never
//! fails, and an unterminated block comment or string just reflects
//! whatever state the scanner ended in, per spec.md §7.

use crate::lexer::{char_set, TrainCar};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum State {
    Code,
    InString,
    InLineComment,
    InBlockComment,
}

/// Removes `//` line comments and `/* */` block comments from `text`.
///
/// A `//` or `/*` inside a double-quoted string is not a comment
/// (quote state toggles on every `"`, including one preceded by a
/// backslash — this crate reproduces that limitation rather than
/// silently fixing it; see spec.md §4.D / §9). Newlines inside block
/// comments are preserved verbatim so downstream line numbers stay
/// stable.
pub fn strip_comments(text: &str) -> String {
    // Fast path: nothing that could start a comment.
    if !text.contains('/') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut car = TrainCar::new(text.chars());
    let mut state = State::Code;

    while let Some(c) = car.consume() {
        match state {
            State::InBlockComment => {
                if c == char_set::STAR && car.peek() == Some(&char_set::FWD_SLASH) {
                    car.consume();
                    state = State::Code;
                } else if char_set::is_newline(&c) {
                    out.push(c);
                }
                // `//` is inert inside a block comment (Verilog rule);
                // everything else is simply dropped.
            }
            State::InLineComment => {
                if char_set::is_newline(&c) {
                    out.push(c);
                    state = State::Code;
                }
                // all other characters on the comment line are dropped
            }
            State::InString => {
                out.push(c);
                if c == char_set::DOUBLE_QUOTE {
                    state = State::Code;
                }
            }
            State::Code => {
                if c == char_set::DOUBLE_QUOTE {
                    out.push(c);
                    state = State::InString;
                } else if c == char_set::FWD_SLASH && car.peek() == Some(&char_set::FWD_SLASH) {
                    car.consume();
                    state = State::InLineComment;
                } else if c == char_set::FWD_SLASH && car.peek() == Some(&char_set::STAR) {
                    car.consume();
                    state = State::InBlockComment;
                } else {
                    out.push(c);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_block_comment() {
        assert_eq!(strip_comments("a/*b*/c"), "ac");
    }

    #[test]
    fn strips_line_comment_and_keeps_newline() {
        assert_eq!(strip_comments("x // y\nz"), "x \nz");
    }

    #[test]
    fn string_literal_protects_slashes() {
        assert_eq!(strip_comments("\"a//b\""), "\"a//b\"");
        assert_eq!(strip_comments("\"a/*b*/c\""), "\"a/*b*/c\"");
    }

    #[test]
    fn block_comment_newlines_are_preserved() {
        let input = "a/*\n\n*/b";
        let stripped = strip_comments(input);
        assert_eq!(stripped, "a\n\nb");
        assert_eq!(
            input.matches('\n').count(),
            stripped.matches('\n').count()
        );
    }

    #[test]
    fn line_comment_inert_inside_block_comment() {
        assert_eq!(strip_comments("a/* // still a comment */b"), "ab");
    }

    #[test]
    fn no_slash_is_a_fast_path_no_op() {
        let input = "module foo;\nendmodule";
        assert_eq!(strip_comments(input), input);
    }

    #[test]
    fn idempotent() {
        let input = "a/*b*/c // d\ne";
        let once = strip_comments(input);
        let twice = strip_comments(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn escaped_quote_is_not_honored_as_an_escape() {
        // Matches the reference limitation: `\"` still toggles string state.
        let input = r#""a\"// not a comment to the reference"#;
        let stripped = strip_comments(input);
        assert_eq!(stripped, input);
    }
}
