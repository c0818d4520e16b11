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

//! A lexical and semantic utility core for Verilog, SystemVerilog, and
//! Verilog-AMS source text.
//!
//! This crate is a library, not a tool: it classifies symbols, parses
//! numeric literals, strips comments, and expands bus expressions, so
//! that a tokenizer, preprocessor, or code-transformation CLI built on
//! top of it doesn't have to re-derive any of that from the LRMs
//! itself. Every operation is a plain function re-exported from the
//! crate root; there is no client object to construct.
//!
//! The only mutable, process-wide state is the active language
//! standard (see [`language_standard`]) — everything else here is a
//! pure function of its arguments.

mod bus;
mod comment;
mod error;
mod keyword;
mod lexer;
mod number;
mod standard;

pub use bus::{split_bus, split_bus_nocomma};
pub use comment::strip_comments;
pub use error::Error;
pub use keyword::{is_compdirect, is_gateprim, is_keyword, language_keywords};
pub use number::{
    number_bigint, number_bits, number_bitvector, number_signed, number_value, Base, Number,
};
pub use standard::{language_maximum, language_standard, Standard};
