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

//! Verilog numeric literal interpretation (component C).
//!
//! A literal never fails loudly: a string that does not match any of
//! the recognized forms yields `None` from every `number_*` entry
//! point, it is never an `Err`. See spec.md §7 for the rationale.

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use num_bigint::BigUint;

/// Which of the four numeral bases (or the unsized-decimal shorthand)
/// a literal was written in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Base {
    Binary,
    Octal,
    Hex,
    Decimal,
    UnsizedDecimal,
}

/// A successfully-parsed Verilog numeric literal.
///
/// Carries the tag (width/signed/base) plus the raw digit text; the
/// three value projections (`value`, `bigint`, `bitvector`) are derived
/// lazily from `digits` rather than computed and stored redundantly up
/// front, per the "Number results as a tagged variant" redesign note.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Number {
    width: Option<u32>,
    signed: bool,
    base: Base,
    digits: String,
    /// Set only for the bare, unquoted decimal form with a leading `-`.
    negative: bool,
    /// True whenever the literal contained a `'`, regardless of whether
    /// explicit width digits preceded it. Distinct from `width.is_some()`
    /// so `number_bits` can honor spec.md §8's invariant ("non-none iff
    /// the literal contains `'`") even for unsized-but-based literals
    /// like `'h1b`, while `width` itself still reflects the true
    /// declared size (or its absence) for `bitvector`'s default-32 rule.
    has_quote: bool,
}

impl Number {
    /// Parses a Verilog literal per spec.md §4.C's grammar. Returns
    /// `None` for anything that matches neither a based literal nor a
    /// plain (optionally signed) decimal integer.
    pub fn parse(s: &str) -> Option<Number> {
        let cleaned: String = s.chars().filter(|c| *c != '_' && *c != ' ').collect();

        match cleaned.find('\'') {
            Some(quote_idx) => {
                let (width_digits, rest) = cleaned.split_at(quote_idx);
                let rest = &rest[1..]; // drop the quote itself

                let width = if width_digits.is_empty() {
                    None
                } else {
                    width_digits.parse::<u32>().ok()
                };

                let mut chars = rest.chars();
                let mut signed = false;
                let mut remaining = rest;
                if let Some(c) = chars.next() {
                    if c == 's' || c == 'S' {
                        signed = true;
                        remaining = &rest[1..];
                    }
                }

                let mut base_chars = remaining.chars();
                let (base, digits) = match base_chars.next() {
                    Some('b') | Some('B') => (Base::Binary, &remaining[1..]),
                    Some('o') | Some('O') => (Base::Octal, &remaining[1..]),
                    Some('h') | Some('H') => (Base::Hex, &remaining[1..]),
                    Some('d') | Some('D') => (Base::Decimal, &remaining[1..]),
                    // no base letter: the rest of the literal is decimal digits
                    _ => (Base::Decimal, remaining),
                };

                if digits.is_empty() || !digits.chars().all(|c| digit_value(base, c).is_some()) {
                    log::trace!("literal {:?} has no recognizable digits for its base", s);
                    return None;
                }

                Some(Number {
                    width,
                    signed,
                    base,
                    digits: digits.to_string(),
                    negative: false,
                    has_quote: true,
                })
            }
            None => {
                let (negative, digits) = match cleaned.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, cleaned.as_str()),
                };
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    log::trace!("literal {:?} matches neither a based literal nor a decimal integer", s);
                    return None;
                }
                Some(Number {
                    width: None,
                    signed: false,
                    base: Base::UnsizedDecimal,
                    digits: digits.to_string(),
                    negative,
                    has_quote: false,
                })
            }
        }
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// The width digits preceding `'`, per spec.md §4.C/§8: `None` iff
    /// the literal has no `'` at all; `Some(0)` for an unsized-but-based
    /// literal (a `'` with no width digits before it), `Some(n)` when
    /// explicit width digits were given.
    fn bits(&self) -> Option<u32> {
        if self.has_quote {
            Some(self.width.unwrap_or(0))
        } else {
            None
        }
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// The unsigned magnitude as an arbitrary-precision integer, computed
    /// once and shared by `value`, `bigint`, and `bitvector` so the three
    /// forms can never disagree on their low-order bits.
    fn magnitude(&self) -> BigUint {
        match self.base {
            Base::Decimal | Base::UnsizedDecimal => {
                let mut acc = BigUint::from(0u32);
                for c in self.digits.chars() {
                    let d = digit_value(self.base, c).expect("validated in parse");
                    acc = acc * 10u32 + d;
                }
                acc
            }
            Base::Binary | Base::Octal | Base::Hex => {
                let bits_per_digit = bits_per_digit(self.base);
                let mut acc = BigUint::from(0u32);
                for c in self.digits.chars() {
                    let d = digit_value(self.base, c).expect("validated in parse");
                    // The deliberate quirk (spec.md §4.C): octal accepts the
                    // hex digit alphabet and keeps only each digit's low 3 bits.
                    let masked = d & ((1u32 << bits_per_digit) - 1);
                    acc = (acc << bits_per_digit) | BigUint::from(masked);
                }
                acc
            }
        }
    }

    /// A native integer, ignoring the `s`/`S` signedness marker (positive-
    /// magnitude interpretation), except for the bare signed-decimal form
    /// (`-5`), which this is the only projection that honors.
    pub fn value(&self) -> i64 {
        let mag = self.magnitude();
        let truncated = biguint_low_bits(&mag, 64);
        let as_u64 = biguint_to_u64(&truncated);
        if self.negative {
            -(as_u64 as i64)
        } else {
            as_u64 as i64
        }
    }

    /// The arbitrary-precision unsigned magnitude, or `None` for the bare
    /// signed-decimal form (spec.md §4.C decimal semantics).
    pub fn bigint(&self) -> Option<BigUint> {
        if self.negative {
            None
        } else {
            Some(self.magnitude())
        }
    }

    /// The value as a fixed-width bit vector, `width()` bits wide (32 when
    /// unsized). Bits beyond the declared width are discarded silently.
    pub fn bitvector(&self) -> BitVec<u32, Lsb0> {
        let width = self.width.unwrap_or(32) as usize;
        let mag = self.magnitude();
        let mut out = BitVec::<u32, Lsb0>::repeat(false, width);
        for i in 0..width {
            if mag.bit(i as u64) {
                out.set(i, true);
            }
        }
        out
    }
}

fn bits_per_digit(base: Base) -> u32 {
    match base {
        Base::Binary => 1,
        Base::Octal => 3,
        Base::Hex => 4,
        Base::Decimal | Base::UnsizedDecimal => unreachable!("decimal is not bitwise"),
    }
}

/// Maps a single digit character to its numeric value for `base`.
///
/// The octal quirk lives here: it accepts the full hex alphabet
/// (`[0-9a-fA-F]`) instead of strictly `[0-7]`, per spec.md §4.C.
fn digit_value(base: Base, c: char) -> Option<u32> {
    match base {
        Base::Binary => c.to_digit(2),
        Base::Octal => c.to_digit(16),
        Base::Hex => c.to_digit(16),
        Base::Decimal | Base::UnsizedDecimal => c.to_digit(10),
    }
}

fn biguint_low_bits(n: &BigUint, bits: u32) -> BigUint {
    let mask = (BigUint::from(1u32) << bits) - 1u32;
    n & mask
}

fn biguint_to_u64(n: &BigUint) -> u64 {
    let bytes = n.to_bytes_le();
    let mut out = [0u8; 8];
    for (i, b) in bytes.iter().take(8).enumerate() {
        out[i] = *b;
    }
    u64::from_le_bytes(out)
}

/// Returns the width digits preceding `'`, or `None` iff the literal has
/// no `'` at all (e.g. a bare decimal). An unsized-but-based literal
/// (`'h1b`) has a `'` with no width digits before it and so is
/// `Some(0)`, not `None`.
pub fn number_bits(s: &str) -> Option<u32> {
    Number::parse(s).and_then(|n| n.bits())
}

/// True iff `'` is followed (after any underscores/spaces are stripped)
/// by `s` or `S`.
pub fn number_signed(s: &str) -> bool {
    Number::parse(s).map(|n| n.signed()).unwrap_or(false)
}

/// A native signed integer, ignoring signedness (positive-magnitude
/// interpretation) except for the bare `-123` decimal form.
pub fn number_value(s: &str) -> Option<i64> {
    Number::parse(s).map(|n| n.value())
}

/// An arbitrary-precision unsigned integer.
pub fn number_bigint(s: &str) -> Option<BigUint> {
    Number::parse(s).and_then(|n| n.bigint())
}

/// A fixed-width bit vector, `width` bits wide (32 when unsized).
pub fn number_bitvector(s: &str) -> Option<BitVec<u32, Lsb0>> {
    Number::parse(s).map(|n| n.bitvector())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sized_literals() {
        assert_eq!(number_value("4'b111"), Some(7));
        assert_eq!(number_bits("32'h1b"), Some(32));
        assert_eq!(number_signed("1'sh1"), true);
        assert_eq!(number_value("32'hfeed"), Some(65261));
    }

    #[test]
    fn unsized_based_literal_reports_zero_width_not_none() {
        // The literal contains `'`, so number_bits must be non-none even
        // though no width digits precede the quote (spec.md §8).
        assert_eq!(number_bits("'h1b"), Some(0));
        assert_eq!(number_value("'h1b"), Some(0x1b));
        // number_bitvector still defaults to 32 bits for an unsized literal.
        assert_eq!(number_bitvector("'h1b").unwrap().len(), 32);
    }

    #[test]
    fn bare_decimal_forms() {
        assert_eq!(number_value("42"), Some(42));
        assert_eq!(number_value("-5"), Some(-5));
        assert_eq!(number_bigint("-5"), None);
        assert_eq!(number_bits("42"), None);
    }

    #[test]
    fn octal_accepts_hex_digit_alphabet() {
        // 'f' is not a legal octal digit, but the quirk keeps its low 3 bits (7).
        assert_eq!(number_value("3'of"), Some(7));
        assert_eq!(number_value("3'o7"), Some(7));
    }

    #[test]
    fn decimal_with_explicit_base_letter() {
        assert_eq!(number_value("8'd200"), Some(200));
    }

    #[test]
    fn malformed_literal_returns_none() {
        assert_eq!(number_value("4'zzzz"), None);
        assert_eq!(number_value(""), None);
        assert_eq!(number_value("'b2"), None);
    }

    #[test]
    fn bitvector_defaults_to_32_bits_and_clips() {
        let bv = number_bitvector("'hffffffff1").unwrap();
        assert_eq!(bv.len(), 32);
        // only the low 32 bits of 0xffffffff1 survive: 0xfffffff1
        assert_eq!(bv[28..32].count_ones(), 4);
        assert_eq!(bv[0..4].count_ones(), 1); // low nibble of 0x...1 is 0001
        assert_eq!(number_bitvector("4'b1111").unwrap().len(), 4);
    }

    #[test]
    fn three_forms_agree_on_low_order_bits() {
        let n = Number::parse("8'hff").unwrap();
        assert_eq!(n.value(), 255);
        assert_eq!(n.bigint().unwrap(), BigUint::from(255u32));
        let bv = n.bitvector();
        assert!(bv.iter().all(|b| *b));
    }
}
