//! Logical connectives and their truth tables.
//!
//! Each connective is a fixed lookup table over `{F, T}`, indexed as
//! `TABLE[p][q]`:
//!
//! ```text
//! op        F,F  F,T  T,F  T,T
//! AND        F    F    F    T
//! OR         F    T    T    T
//! XOR        F    T    T    F
//! IMPLIES    T    T    F    T
//! IFF        T    F    F    T
//! NAND       T    T    T    F
//! NOR        T    F    F    F
//! ```

use std::fmt::{Display, Formatter};

type Table = [[bool; 2]; 2];

const NOT: [bool; 2] = [true, false];
const AND: Table = [[false, false], [false, true]];
const OR: Table = [[false, true], [true, true]];
const XOR: Table = [[false, true], [true, false]];
const IMPLIES: Table = [[true, true], [false, true]];
const IFF: Table = [[true, false], [false, true]];
const NAND: Table = [[true, true], [true, false]];
const NOR: Table = [[true, false], [false, false]];

#[inline]
fn lookup(table: &Table, p: bool, q: bool) -> bool {
    table[p as usize][q as usize]
}

pub fn logical_not(p: bool) -> bool {
    NOT[p as usize]
}

pub fn logical_and(p: bool, q: bool) -> bool {
    lookup(&AND, p, q)
}

pub fn logical_or(p: bool, q: bool) -> bool {
    lookup(&OR, p, q)
}

pub fn logical_xor(p: bool, q: bool) -> bool {
    lookup(&XOR, p, q)
}

/// Material implication `p → q`.
pub fn logical_implies(p: bool, q: bool) -> bool {
    lookup(&IMPLIES, p, q)
}

pub fn logical_iff(p: bool, q: bool) -> bool {
    lookup(&IFF, p, q)
}

pub fn logical_nand(p: bool, q: bool) -> bool {
    lookup(&NAND, p, q)
}

pub fn logical_nor(p: bool, q: bool) -> bool {
    lookup(&NOR, p, q)
}

/// Symbol used when rendering a negation.
pub const NOT_SYMBOL: char = '¬';

/// Kind of a two-operand connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryType {
    And,
    Or,
    Xor,
    Implies,
    Iff,
    Nand,
    Nor,
}

impl BinaryType {
    pub const ALL: [BinaryType; 7] = [
        BinaryType::And,
        BinaryType::Or,
        BinaryType::Xor,
        BinaryType::Implies,
        BinaryType::Iff,
        BinaryType::Nand,
        BinaryType::Nor,
    ];

    /// Applies the connective to already evaluated operands.
    pub fn apply(self, p: bool, q: bool) -> bool {
        match self {
            BinaryType::And => logical_and(p, q),
            BinaryType::Or => logical_or(p, q),
            BinaryType::Xor => logical_xor(p, q),
            BinaryType::Implies => logical_implies(p, q),
            BinaryType::Iff => logical_iff(p, q),
            BinaryType::Nand => logical_nand(p, q),
            BinaryType::Nor => logical_nor(p, q),
        }
    }

    /// Infix symbol of the connective.
    pub const fn symbol(self) -> char {
        match self {
            BinaryType::And => '∧',
            BinaryType::Or => '∨',
            BinaryType::Xor => '⊻',
            BinaryType::Implies => '→',
            BinaryType::Iff => '↔',
            BinaryType::Nand => '|',
            BinaryType::Nor => '↓',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BinaryType::And => "AND",
            BinaryType::Or => "OR",
            BinaryType::Xor => "XOR",
            BinaryType::Implies => "IMPLIES",
            BinaryType::Iff => "IFF",
            BinaryType::Nand => "NAND",
            BinaryType::Nor => "NOR",
        }
    }
}

impl Display for BinaryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
