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

//! Bus expression expansion (component E).
//!
//! Turns bracketed, comma-joined, colon-separated range expressions
//! into ordered lists of scalar references. Like [`crate::number`] and
//! [`crate::comment`], this never fails loudly: a malformed bracket
//! group is given a best-effort reading rather than raising an error.

use crate::lexer::TrainCar;
use crate::number::number_value;

/// How far into the current bracket group the scanner is.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum BracketState {
    Outside,
    ExpectBegin,
    ExpectEnd,
    ExpectStride,
}

/// One bracketed group's leading text plus its flattened expansion.
///
/// `indices` is the concatenation, in order, of every comma-separated
/// segment's expansion within this single bracket pair — e.g. for
/// `[31,5:4]` this is `["[31]", "[5]", "[4]"]`.
struct BracketGroup {
    pretext: String,
    indices: Vec<String>,
}

/// Expands a single `a`, `a:b`, or `a:b:s` range into the `[i]` strings
/// it denotes, inclusive on both ends, direction taken from `a` vs `b`
/// when no explicit stride is given (spec: "the reference uses
/// positive stride and lets direction dictate").
fn expand_range(a: i64, b: i64, stride: Option<i64>) -> Vec<i64> {
    let step = stride.unwrap_or(if a <= b { 1 } else { -1 });
    let mut out = Vec::new();
    if step == 0 {
        out.push(a);
        return out;
    }
    let mut cur = a;
    if step > 0 {
        while cur <= b {
            out.push(cur);
            cur += step;
        }
    } else {
        while cur >= b {
            out.push(cur);
            cur += step;
        }
    }
    out
}

/// Parses a segment endpoint, falling back to 0 (and logging the
/// fallback) for an endpoint that isn't a recognizable literal — the
/// bus expander never fails loudly, per spec.md §4.E.
fn endpoint(raw: &str) -> i64 {
    number_value(raw).unwrap_or_else(|| {
        log::trace!("bus endpoint {:?} is not a recognized literal, treating as 0", raw);
        0
    })
}

fn flush_segment(group: &mut BracketGroup, seg_state: BracketState, begin: &str, end: &str, stride: &str) {
    let a = endpoint(begin);
    match seg_state {
        BracketState::ExpectBegin => group.indices.push(format!("[{}]", a)),
        BracketState::ExpectEnd => {
            let b = endpoint(end);
            for i in expand_range(a, b, None) {
                group.indices.push(format!("[{}]", i));
            }
        }
        BracketState::ExpectStride => {
            let b = endpoint(end);
            let s = number_value(stride).unwrap_or_else(|| {
                log::trace!("bus stride {:?} is not a recognized literal, defaulting to 1", stride);
                1
            });
            for i in expand_range(a, b, Some(s)) {
                group.indices.push(format!("[{}]", i));
            }
        }
        BracketState::Outside => unreachable!("flush only happens inside a bracket group"),
    }
}

/// Expands a bus expression with any number of bracketed groups, each
/// holding one or more comma-separated `a`/`a:b`/`a:b:s` segments.
///
/// A string with no `[` is returned unchanged, as a single-element
/// list. Multiple bracket groups zip together, each cycling modulo its
/// own expansion length, per spec.md §4.E step 7.
pub fn split_bus(text: &str) -> Vec<String> {
    if !text.contains('[') {
        return vec![text.to_string()];
    }

    let mut groups: Vec<BracketGroup> = Vec::new();
    let mut pretext_buf = String::new();
    let mut state = BracketState::Outside;
    let mut begin = String::new();
    let mut end = String::new();
    let mut stride = String::new();

    let mut car = TrainCar::new(text.chars());
    while let Some(c) = car.consume() {
        match state {
            BracketState::Outside => {
                if c == '[' {
                    groups.push(BracketGroup {
                        pretext: std::mem::take(&mut pretext_buf),
                        indices: Vec::new(),
                    });
                    state = BracketState::ExpectBegin;
                } else {
                    pretext_buf.push(c);
                }
            }
            BracketState::ExpectBegin | BracketState::ExpectEnd | BracketState::ExpectStride => {
                match c {
                    ':' => {
                        state = match state {
                            BracketState::ExpectBegin => BracketState::ExpectEnd,
                            BracketState::ExpectEnd => BracketState::ExpectStride,
                            other => other, // a third colon is a no-op, best effort
                        };
                    }
                    ',' | ']' => {
                        let seg_state = state;
                        flush_segment(groups.last_mut().unwrap(), seg_state, &begin, &end, &stride);
                        begin.clear();
                        end.clear();
                        stride.clear();
                        state = if c == ']' {
                            BracketState::Outside
                        } else {
                            BracketState::ExpectBegin
                        };
                    }
                    _ => match state {
                        BracketState::ExpectBegin => begin.push(c),
                        BracketState::ExpectEnd => end.push(c),
                        BracketState::ExpectStride => stride.push(c),
                        BracketState::Outside => unreachable!(),
                    },
                }
            }
        }
    }
    // Whatever never got consumed back into a group's pretext is the
    // trailing suffix after the last `]` (or, for unterminated input,
    // simply has nothing appended to it).
    let trailing = pretext_buf;

    let max_size = groups
        .iter()
        .map(|g| g.indices.len().max(1))
        .max()
        .unwrap_or(1);

    let mut out = Vec::with_capacity(max_size);
    for i in 0..max_size {
        let mut s = String::new();
        for g in &groups {
            s.push_str(&g.pretext);
            if !g.indices.is_empty() {
                s.push_str(&g.indices[i % g.indices.len()]);
            }
        }
        s.push_str(&trailing);
        out.push(s);
    }
    out
}

/// Expands the simple `prefix[a:b]suffix` form: a single bracket pair,
/// no commas, no stride. A string without brackets (or with no closing
/// `]`) is returned unchanged, as a single-element list.
pub fn split_bus_nocomma(text: &str) -> Vec<String> {
    let open = match text.find('[') {
        Some(i) => i,
        None => return vec![text.to_string()],
    };
    let after_open = &text[open + 1..];
    let close_rel = match after_open.find(']') {
        Some(i) => i,
        None => {
            log::trace!("bus expression {:?} has no closing ']', returning it unchanged", text);
            return vec![text.to_string()];
        }
    };

    let prefix = &text[..open];
    let inner = &after_open[..close_rel];
    let suffix = &after_open[close_rel + 1..];

    let (a_str, b_str) = match inner.find(':') {
        Some(colon) => (&inner[..colon], &inner[colon + 1..]),
        None => (inner, inner),
    };
    let a = endpoint(a_str);
    let b = endpoint(b_str);

    expand_range(a, b, None)
        .into_iter()
        .map(|i| format!("{}[{}]{}", prefix, i, suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_colon_segments() {
        assert_eq!(split_bus("[31,5:4]"), vec!["[31]", "[5]", "[4]"]);
    }

    #[test]
    fn nocomma_descending_range() {
        assert_eq!(
            split_bus_nocomma("[31:29]"),
            vec!["[31]", "[30]", "[29]"]
        );
    }

    #[test]
    fn no_brackets_is_unchanged() {
        assert_eq!(split_bus("data"), vec!["data"]);
        assert_eq!(split_bus_nocomma("data"), vec!["data"]);
    }

    #[test]
    fn ascending_range() {
        assert_eq!(split_bus_nocomma("p[0:2]s"), vec!["p[0]s", "p[1]s", "p[2]s"]);
    }

    #[test]
    fn explicit_stride() {
        assert_eq!(split_bus("[0:6:2]"), vec!["[0]", "[2]", "[4]", "[6]"]);
    }

    #[test]
    fn multiple_groups_zip_and_cycle_modulo_length() {
        // The shorter group's indices cycle to match the longer group's length.
        assert_eq!(
            split_bus("a[1:0]b[3:0]c"),
            vec!["a[1]b[3]c", "a[0]b[2]c", "a[1]b[1]c", "a[0]b[0]c"]
        );
    }

    #[test]
    fn based_literals_as_endpoints() {
        assert_eq!(split_bus("['h2:'h0]"), vec!["[2]", "[1]", "[0]"]);
    }

    #[test]
    fn single_index_no_colon() {
        assert_eq!(split_bus("[7]"), vec!["[7]"]);
    }
}
