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

use thiserror::Error;

/// The only fatal error this crate raises.
///
/// Malformed numeric literals, malformed bus expressions, and malformed
/// comments/unterminated strings are all modeled as absent or
/// best-effort results, never as an `Error` — see the module docs on
/// [`crate::number`], [`crate::bus`], and [`crate::comment`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("unknown or unsupported language standard: {0:?}")]
    BadStandard(String),
}
