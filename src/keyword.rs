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

//! Keyword / directive / gate-primitive classification (component A).
//!
//! Each of the 8 standards introduces its own set of symbols; a symbol
//! that survives into later standards is only recorded once, under the
//! standard that *introduced* it (spec.md §4.A's tie-break rule). The
//! per-standard tables below are kept as flat symbol lists (not already
//! unioned) — [`crate::standard::Standard::subsets`] does the union,
//! so adding a 9th standard only means adding one more table here and
//! one more predecessor link in `standard.rs`.

use crate::standard::Standard;
use std::collections::{HashMap, HashSet};

macro_rules! keyword_table {
    ($standard:expr, [$($sym:literal),* $(,)?]) => {
        [$(($sym, $standard)),*]
    };
}

// IEEE 1364-1995 (Verilog-95) reserved words.
const IEEE1364_1995: &[(&str, Standard)] = &keyword_table!(Standard::Ieee1364_1995, [
    "always", "and", "assign", "begin", "buf", "bufif0", "bufif1", "case", "casex", "casez",
    "cmos", "deassign", "default", "defparam", "disable", "edge", "else", "end", "endcase",
    "endfunction", "endmodule", "endprimitive", "endspecify", "endtable", "endtask", "event",
    "for", "force", "forever", "fork", "function", "highz0", "highz1", "if", "ifnone",
    "initial", "inout", "input", "integer", "join", "large", "macromodule", "medium", "module",
    "nand", "negedge", "nmos", "nor", "not", "notif0", "notif1", "or", "output", "parameter",
    "pmos", "posedge", "primitive", "pull0", "pull1", "pulldown", "pullup", "rcmos", "real",
    "realtime", "reg", "release", "repeat", "rnmos", "rpmos", "rtran", "rtranif0", "rtranif1",
    "scalared", "small", "specify", "specparam", "strong0", "strong1", "supply0", "supply1",
    "table", "task", "time", "tran", "tranif0", "tranif1", "tri", "tri0", "tri1", "triand",
    "trior", "trireg", "vectored", "wait", "wand", "weak0", "weak1", "while", "wire", "wor",
    "xnor", "xor",
]);

// IEEE 1364-2001 additions over 1364-1995.
const IEEE1364_2001: &[(&str, Standard)] = &keyword_table!(Standard::Ieee1364_2001, [
    "automatic", "cell", "config", "design", "endconfig", "endgenerate", "generate", "genvar",
    "incdir", "include", "instance", "liblist", "library", "localparam", "noshowcancelled",
    "pulsestyle_onevent", "pulsestyle_ondetect", "showcancelled", "signed", "unsigned", "use",
]);

// IEEE 1364-2005 additions over 1364-2001.
const IEEE1364_2005: &[(&str, Standard)] = &keyword_table!(Standard::Ieee1364_2005, [
    "uwire",
]);

// IEEE 1800-2005 (SystemVerilog) additions over 1364-2005.
const IEEE1800_2005: &[(&str, Standard)] = &keyword_table!(Standard::Ieee1800_2005, [
    "alias", "always_comb", "always_ff", "always_latch", "assert", "assume", "before", "bind",
    "bins", "binsof", "bit", "break", "byte", "chandle", "class", "clocking", "const",
    "constraint", "context", "continue", "cover", "covergroup", "coverpoint", "cross", "dist",
    "do", "endclass", "endclocking", "endgroup", "endinterface", "endpackage", "endprogram",
    "endproperty", "endsequence", "enum", "expect", "export", "extends", "extern", "final",
    "first_match", "foreach", "forkjoin", "iff", "ignore_bins", "illegal_bins", "import",
    "inside", "int", "interface", "intersect", "join_any", "join_none", "local", "logic",
    "longint", "matches", "modport", "new", "null", "package", "packed", "priority", "program",
    "property", "protected", "pure", "rand", "randc", "randcase", "randsequence", "ref",
    "return", "sequence", "shortint", "shortreal", "solve", "static", "string", "struct",
    "super", "tagged", "this", "throughout", "timeprecision", "timeunit", "type", "typedef",
    "union", "unique", "var", "virtual", "void", "wait_order", "wildcard", "with", "within",
]);

// IEEE 1800-2009 additions over 1800-2005.
const IEEE1800_2009: &[(&str, Standard)] = &keyword_table!(Standard::Ieee1800_2009, [
    "accept_on", "checker", "endchecker", "eventually", "global", "implies", "let",
    "reject_on", "restrict", "s_always", "s_eventually", "s_nexttime", "s_until",
    "s_until_with", "strong", "sync_accept_on", "sync_reject_on", "unique0", "until",
    "until_with", "untyped", "weak",
]);

// IEEE 1800-2012 additions over 1800-2009.
const IEEE1800_2012: &[(&str, Standard)] = &keyword_table!(Standard::Ieee1800_2012, [
    "implements", "interconnect", "nettype", "soft",
]);

// IEEE 1800-2017 made no reserved-word additions over 1800-2012.
const IEEE1800_2017: &[(&str, Standard)] = &[];

// Verilog-AMS additions over 1364-2005 (VAMS is not layered on any SystemVerilog standard).
const VAMS: &[(&str, Standard)] = &keyword_table!(Standard::Vams, [
    "above", "abs", "absdelay", "abstol", "access", "acos", "acosh", "aliasparam", "analog",
    "analysis", "asin", "asinh", "atan", "atan2", "atanh", "branch", "ceil", "connect",
    "connectmodule", "connectrules", "continuous", "cos", "cosh", "ddt", "ddt_nature", "ddx",
    "discipline", "discrete", "domain", "driver_update", "endconnectrules", "enddiscipline",
    "endnature", "endparamset", "exclude", "exp", "final_step", "flicker_noise", "floor",
    "flow", "from", "ground", "idt", "idt_nature", "inf", "initial_step", "laplace_nd",
    "laplace_np", "laplace_zd", "laplace_zp", "last_crossing", "limexp", "ln", "log", "max",
    "merged", "min", "nature", "net_resolution", "noise_table", "paramset", "potential", "pow",
    "resolveto", "sin", "sinh", "slew", "split", "sqrt", "tan", "tanh", "timer", "transition",
    "units", "white_noise", "wreal", "zi_nd", "zi_np", "zi_zd", "zi_zp",
]);

fn raw_table(standard: Standard) -> &'static [(&'static str, Standard)] {
    match standard {
        Standard::Ieee1364_1995 => IEEE1364_1995,
        Standard::Ieee1364_2001 => IEEE1364_2001,
        Standard::Ieee1364_2005 => IEEE1364_2005,
        Standard::Ieee1800_2005 => IEEE1800_2005,
        Standard::Ieee1800_2009 => IEEE1800_2009,
        Standard::Ieee1800_2012 => IEEE1800_2012,
        Standard::Ieee1800_2017 => IEEE1800_2017,
        Standard::Vams => VAMS,
    }
}

/// Compiler directives (spec.md §4.A), keyed without the leading backtick.
const COMPILER_DIRECTIVES: &[(&str, Standard)] = &[
    ("define", Standard::Ieee1364_1995),
    ("else", Standard::Ieee1364_1995),
    ("elsif", Standard::Ieee1364_1995),
    ("endif", Standard::Ieee1364_1995),
    ("ifdef", Standard::Ieee1364_1995),
    ("ifndef", Standard::Ieee1364_1995),
    ("include", Standard::Ieee1364_1995),
    ("resetall", Standard::Ieee1364_1995),
    ("timescale", Standard::Ieee1364_1995),
    ("celldefine", Standard::Ieee1364_1995),
    ("endcelldefine", Standard::Ieee1364_1995),
    ("default_nettype", Standard::Ieee1364_1995),
    ("unconnected_drive", Standard::Ieee1364_1995),
    ("nounconnected_drive", Standard::Ieee1364_1995),
    ("undef", Standard::Ieee1364_1995),
    ("line", Standard::Ieee1364_2001),
    ("pragma", Standard::Ieee1800_2005),
    ("undefineall", Standard::Ieee1800_2009),
    ("begin_keywords", Standard::Ieee1800_2009),
    ("end_keywords", Standard::Ieee1800_2009),
];

/// Gate primitive names (spec.md §4.A), identical across every standard.
const GATE_PRIMITIVES: &[&str] = &[
    "and", "buf", "bufif0", "bufif1", "cmos", "nand", "nmos", "nor", "not", "notif0", "notif1",
    "or", "pmos", "pulldown", "pullup", "rcmos", "rnmos", "rpmos", "rtran", "rtranif0",
    "rtranif1", "tran", "tranif0", "tranif1", "xnor", "xor",
];

lazy_static::lazy_static! {
    static ref DIRECTIVES: HashMap<&'static str, Standard> = COMPILER_DIRECTIVES.iter().copied().collect();
    static ref GATES: HashSet<&'static str> = GATE_PRIMITIVES.iter().copied().collect();

    /// One flattened `sym -> introducing standard` map per `Standard`, built once.
    /// Ties within a flattened set are resolved to the earliest standard by
    /// inserting oldest-last so later inserts (older standards) win; see
    /// `flatten_for`.
    static ref FLATTENED: HashMap<Standard, HashMap<&'static str, Standard>> = {
        Standard::all()
            .into_iter()
            .map(|s| (s, flatten_for(s)))
            .collect()
    };
}

fn flatten_for(standard: Standard) -> HashMap<&'static str, Standard> {
    let mut map = HashMap::new();
    // Walk from the active standard's own table back through predecessors
    // so that when a symbol appears in more than one unioned standard, the
    // later iteration (an older standard) overwrites with the earliest one.
    for member in standard.subsets().into_iter().rev() {
        for (sym, introduced) in raw_table(member) {
            map.insert(*sym, *introduced);
        }
    }
    map
}

/// Returns the flattened `sym -> introducing standard` view for
/// `standard`, or for the currently active standard if omitted.
pub fn language_keywords(standard: Option<Standard>) -> &'static HashMap<&'static str, Standard> {
    let standard = standard.unwrap_or_else(crate::standard::active_standard);
    FLATTENED.get(&standard).expect("every Standard has a flattened table")
}

/// Classifies `sym` as a keyword under the currently active standard
/// (or `standard`, if given), returning the standard that introduced it.
pub fn is_keyword(sym: &str, standard: Option<Standard>) -> Option<Standard> {
    language_keywords(standard).get(sym).copied()
}

/// Classifies `sym` (without its leading backtick) as a compiler directive.
/// Not affected by the active standard.
pub fn is_compdirect(sym: &str) -> Option<Standard> {
    let sym = sym.strip_prefix('`').unwrap_or(sym);
    DIRECTIVES.get(sym).copied()
}

/// Classifies `sym` as a gate primitive. Not affected by the active standard.
///
/// Gate primitives have existed, unchanged, since 1364-1995, so a match
/// always reports that standard.
pub fn is_gateprim(sym: &str) -> Option<Standard> {
    if GATES.contains(sym) {
        Some(Standard::Ieee1364_1995)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_is_earliest_standard_regardless_of_active() {
        assert_eq!(
            is_keyword("wire", Some(Standard::Ieee1364_1995)),
            Some(Standard::Ieee1364_1995)
        );
        assert_eq!(
            is_keyword("wire", Some(Standard::Ieee1800_2017)),
            Some(Standard::Ieee1364_1995)
        );
    }

    #[test]
    fn logic_requires_systemverilog() {
        assert_eq!(is_keyword("logic", Some(Standard::Ieee1364_1995)), None);
        assert_eq!(
            is_keyword("logic", Some(Standard::Ieee1800_2005)),
            Some(Standard::Ieee1800_2005)
        );
    }

    #[test]
    fn vams_keyword_is_not_in_sv() {
        assert_eq!(is_keyword("branch", Some(Standard::Ieee1800_2017)), None);
        assert_eq!(
            is_keyword("branch", Some(Standard::Vams)),
            Some(Standard::Vams)
        );
    }

    #[test]
    fn compiler_directives_ignore_active_standard() {
        assert_eq!(is_compdirect("`notundef"), None);
        assert_eq!(
            is_compdirect("`define"),
            Some(Standard::Ieee1364_1995)
        );
        // bare symbol (no backtick) is accepted the same way
        assert_eq!(is_compdirect("define"), Some(Standard::Ieee1364_1995));
    }

    #[test]
    fn gate_primitives_are_not_standard_dependent() {
        assert_eq!(is_gateprim("nand"), Some(Standard::Ieee1364_1995));
        assert_eq!(is_gateprim("module"), None);
    }

    #[test]
    fn unknown_symbol_is_never_a_keyword() {
        assert_eq!(is_keyword("totally_not_a_keyword", None), None);
    }
}
