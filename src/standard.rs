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

//! The active language standard (component B: the "Standard Selector").
//!
//! Component A (keyword classification) consults [`Standard::subsets`]
//! to build the flattened keyword set for whichever standard is active;
//! this module owns the standard itself and the single piece of
//! process-wide mutable state the crate has.

use crate::error::Error;
use std::fmt::Display;
use std::sync::RwLock;

/// An IEEE-identified Verilog / SystemVerilog / Verilog-AMS revision.
///
/// Variants are declared oldest-first; [`Standard::subsets`] walks the
/// explicit predecessor chain below rather than comparing strings or
/// discriminant values, per the "encode as an enum with explicit
/// predecessor chain" redesign note.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Standard {
    Ieee1364_1995,
    Ieee1364_2001,
    Ieee1364_2005,
    Ieee1800_2005,
    Ieee1800_2009,
    Ieee1800_2012,
    Ieee1800_2017,
    Vams,
}

impl Standard {
    /// The canonical name used by [`Display`] and accepted back by [`Standard::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ieee1364_1995 => "1364-1995",
            Self::Ieee1364_2001 => "1364-2001",
            Self::Ieee1364_2005 => "1364-2005",
            Self::Ieee1800_2005 => "1800-2005",
            Self::Ieee1800_2009 => "1800-2009",
            Self::Ieee1800_2012 => "1800-2012",
            Self::Ieee1800_2017 => "1800-2017",
            Self::Vams => "VAMS",
        }
    }

    /// All standards this crate knows about, oldest-first.
    pub fn all() -> [Standard; 8] {
        [
            Self::Ieee1364_1995,
            Self::Ieee1364_2001,
            Self::Ieee1364_2005,
            Self::Ieee1800_2005,
            Self::Ieee1800_2009,
            Self::Ieee1800_2012,
            Self::Ieee1800_2017,
            Self::Vams,
        ]
    }

    /// The numerically greatest 1800 standard this crate supports.
    pub fn latest() -> Standard {
        Self::Ieee1800_2017
    }

    /// Parses a standard name, accepting the aliases from spec.md §4.B.
    ///
    /// Recognizes the canonical names (`as_str`), the bare-year aliases
    /// `1995`/`2001`, the legacy `1364-2001-noconfig` spelling, `sv31`
    /// for `1800-2005`, `latest`, and any string matching `V?AMS`
    /// case-insensitively.
    pub fn parse(s: &str) -> Result<Standard, Error> {
        let trimmed = s.trim();
        let canonical = match trimmed {
            "1364-1995" | "1995" => Self::Ieee1364_1995,
            "1364-2001" | "2001" | "1364-2001-noconfig" => Self::Ieee1364_2001,
            "1364-2005" => Self::Ieee1364_2005,
            "1800-2005" | "sv31" => Self::Ieee1800_2005,
            "1800-2009" => Self::Ieee1800_2009,
            "1800-2012" => Self::Ieee1800_2012,
            "1800-2017" => Self::Ieee1800_2017,
            "latest" => Self::latest(),
            _ => {
                if is_vams_spelling(trimmed) {
                    Self::Vams
                } else {
                    return Err(Error::BadStandard(s.to_string()));
                }
            }
        };
        Ok(canonical)
    }

    /// The predecessor this standard's table is layered directly on top of,
    /// per the union table in spec.md §4.B. `None` marks the bottom of a chain.
    fn predecessor(&self) -> Option<Standard> {
        match self {
            Self::Ieee1364_1995 => None,
            Self::Ieee1364_2001 => Some(Self::Ieee1364_1995),
            Self::Ieee1364_2005 => Some(Self::Ieee1364_2001),
            Self::Ieee1800_2005 => Some(Self::Ieee1364_2005),
            Self::Ieee1800_2009 => Some(Self::Ieee1800_2005),
            Self::Ieee1800_2012 => Some(Self::Ieee1800_2009),
            Self::Ieee1800_2017 => Some(Self::Ieee1800_2012),
            Self::Vams => Some(Self::Ieee1364_2005),
        }
    }

    /// The full set of standards unioned into this standard's flattened
    /// keyword set, including itself, oldest-last (this standard first).
    pub fn subsets(&self) -> Vec<Standard> {
        let mut out = vec![*self];
        let mut cur = *self;
        while let Some(p) = cur.predecessor() {
            out.push(p);
            cur = p;
        }
        out
    }
}

fn is_vams_spelling(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower == "vams" || lower == "ams"
}

impl Display for Standard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

lazy_static::lazy_static! {
    static ref ACTIVE: RwLock<Standard> = RwLock::new(Standard::latest());
}

/// Sets (if `s` is given) and returns the process-wide active standard.
///
/// With no argument, returns the current value without changing it.
/// Initial value at process start is [`Standard::latest`].
pub fn language_standard(s: Option<&str>) -> Result<Standard, Error> {
    match s {
        Some(name) => {
            let parsed = Standard::parse(name)?;
            let mut guard = ACTIVE.write().unwrap();
            *guard = parsed;
            log::debug!("active language standard set to {}", parsed);
            Ok(parsed)
        }
        None => Ok(*ACTIVE.read().unwrap()),
    }
}

/// The numerically greatest 1800 standard supported (`1800-2017`).
pub fn language_maximum() -> Standard {
    Standard::latest()
}

/// The currently active standard, read-only, without taking the alias-parsing path.
pub(crate) fn active_standard() -> Standard {
    *ACTIVE.read().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_latest() {
        assert_eq!(language_standard(None).unwrap(), Standard::Ieee1800_2017);
    }

    #[test]
    fn aliases_normalize() {
        assert_eq!(Standard::parse("1995").unwrap(), Standard::Ieee1364_1995);
        assert_eq!(Standard::parse("2001").unwrap(), Standard::Ieee1364_2001);
        assert_eq!(
            Standard::parse("1364-2001-noconfig").unwrap(),
            Standard::Ieee1364_2001
        );
        assert_eq!(Standard::parse("sv31").unwrap(), Standard::Ieee1800_2005);
        assert_eq!(Standard::parse("latest").unwrap(), Standard::Ieee1800_2017);
        assert_eq!(Standard::parse("VAMS").unwrap(), Standard::Vams);
        assert_eq!(Standard::parse("vams").unwrap(), Standard::Vams);
    }

    #[test]
    fn unknown_standard_errors() {
        assert_eq!(
            Standard::parse("not-a-standard"),
            Err(Error::BadStandard("not-a-standard".to_string()))
        );
    }

    #[test]
    fn subset_rules() {
        assert_eq!(
            Standard::Ieee1364_1995.subsets(),
            vec![Standard::Ieee1364_1995]
        );
        assert_eq!(
            Standard::Ieee1364_2005.subsets(),
            vec![
                Standard::Ieee1364_2005,
                Standard::Ieee1364_2001,
                Standard::Ieee1364_1995
            ]
        );
        assert_eq!(
            Standard::Ieee1800_2009.subsets(),
            vec![
                Standard::Ieee1800_2009,
                Standard::Ieee1800_2005,
                Standard::Ieee1364_2005,
                Standard::Ieee1364_2001,
                Standard::Ieee1364_1995
            ]
        );
        assert_eq!(
            Standard::Vams.subsets(),
            vec![
                Standard::Vams,
                Standard::Ieee1364_2005,
                Standard::Ieee1364_2001,
                Standard::Ieee1364_1995
            ]
        );
    }

    #[test]
    fn setting_standard_is_observable() {
        let _ = env_logger::try_init();
        language_standard(Some("1364-1995")).unwrap();
        assert_eq!(active_standard(), Standard::Ieee1364_1995);
        // restore default so other tests in this process see the usual state
        language_standard(Some("1800-2017")).unwrap();
    }
}
