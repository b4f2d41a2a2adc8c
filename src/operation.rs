//! Expression tree nodes.
//!
//! A tree is built from [`Operand`]s: each one is either an [`Atom`] leaf or
//! a shared, immutable [`Operation`] node. Nodes only point at nodes built
//! before them, so the structure is a DAG and sharing is safe: the same
//! atom (or the same sub-operation) may appear in many places.
//!
//! # Rendering
//!
//! Operations render in infix form. An operand is parenthesised iff it is
//! itself an operation; atoms are never parenthesised and precedence is
//! never relied upon:
//!
//! ```
//! use logic_rs::atom::Atom;
//! use logic_rs::operation::Operation;
//!
//! let p = Atom::new("P");
//! let q = Atom::new("Q");
//! let f = Operation::not(Operation::and(&p, &q));
//! assert_eq!(f.to_string(), "¬(P ∧ Q)");
//! ```

use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

use crate::atom::Atom;
use crate::connective::{BinaryType, NOT_SYMBOL};

/// A slot in the tree: a leaf atom or a nested operation.
#[derive(Clone)]
pub enum Operand {
    Atom(Atom),
    Op(Rc<Operation>),
}

/// Operand pair of a binary operation. Order matters for display and for
/// the non-commutative connectives.
#[derive(Debug, Clone)]
pub struct Operands {
    pub p: Operand,
    pub q: Operand,
}

/// A logical connective applied to one or two operands.
#[derive(Clone)]
pub enum Operation {
    Not(Operand),
    Binary(BinaryType, Operands),
}

// Constructors
impl Operation {
    pub fn not(p: impl Into<Operand>) -> Self {
        Operation::Not(p.into())
    }

    pub fn binary(op: BinaryType, p: impl Into<Operand>, q: impl Into<Operand>) -> Self {
        Operation::Binary(
            op,
            Operands {
                p: p.into(),
                q: q.into(),
            },
        )
    }

    pub fn and(p: impl Into<Operand>, q: impl Into<Operand>) -> Self {
        Self::binary(BinaryType::And, p, q)
    }

    pub fn or(p: impl Into<Operand>, q: impl Into<Operand>) -> Self {
        Self::binary(BinaryType::Or, p, q)
    }

    pub fn xor(p: impl Into<Operand>, q: impl Into<Operand>) -> Self {
        Self::binary(BinaryType::Xor, p, q)
    }

    pub fn implies(p: impl Into<Operand>, q: impl Into<Operand>) -> Self {
        Self::binary(BinaryType::Implies, p, q)
    }

    pub fn iff(p: impl Into<Operand>, q: impl Into<Operand>) -> Self {
        Self::binary(BinaryType::Iff, p, q)
    }

    pub fn nand(p: impl Into<Operand>, q: impl Into<Operand>) -> Self {
        Self::binary(BinaryType::Nand, p, q)
    }

    pub fn nor(p: impl Into<Operand>, q: impl Into<Operand>) -> Self {
        Self::binary(BinaryType::Nor, p, q)
    }
}

// Getters
impl Operation {
    /// Returns the binary connective, or `None` for a negation.
    pub fn binary_type(&self) -> Option<BinaryType> {
        match self {
            Operation::Not(_) => None,
            Operation::Binary(op, _) => Some(*op),
        }
    }

    /// Operands in left-to-right order.
    pub fn operands(&self) -> Vec<&Operand> {
        match self {
            Operation::Not(p) => vec![p],
            Operation::Binary(_, Operands { p, q }) => vec![p, q],
        }
    }
}

impl Operand {
    pub fn is_atom(&self) -> bool {
        matches!(self, Operand::Atom(_))
    }

    pub fn is_operation(&self) -> bool {
        matches!(self, Operand::Op(_))
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Operand::Atom(atom) => Some(atom),
            Operand::Op(_) => None,
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Operand::Atom(_) => None,
            Operand::Op(op) => Some(op),
        }
    }

    /// Returns the operands if this is a binary operation of the given kind.
    pub fn as_binary(&self, kind: BinaryType) -> Option<&Operands> {
        match self.as_operation()? {
            Operation::Binary(op, operands) if *op == kind => Some(operands),
            _ => None,
        }
    }

    /// Reference identity: `true` iff both operands are the very same atom or
    /// the very same operation node. Labels and structure are not compared.
    pub fn ptr_eq(&self, other: &Operand) -> bool {
        match (self, other) {
            (Operand::Atom(a), Operand::Atom(b)) => a.ptr_eq(b),
            (Operand::Op(a), Operand::Op(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Atom> for Operand {
    fn from(atom: Atom) -> Self {
        Operand::Atom(atom)
    }
}

impl From<&Atom> for Operand {
    fn from(atom: &Atom) -> Self {
        Operand::Atom(atom.clone())
    }
}

impl From<Operation> for Operand {
    fn from(op: Operation) -> Self {
        Operand::Op(Rc::new(op))
    }
}

impl From<Rc<Operation>> for Operand {
    fn from(op: Rc<Operation>) -> Self {
        Operand::Op(op)
    }
}

impl From<&Operand> for Operand {
    fn from(operand: &Operand) -> Self {
        operand.clone()
    }
}

fn fmt_child(operand: &Operand, f: &mut Formatter<'_>) -> std::fmt::Result {
    match operand {
        Operand::Atom(atom) => write!(f, "{}", atom),
        Operand::Op(op) => write!(f, "({})", op),
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Not(p) => {
                write!(f, "{}", NOT_SYMBOL)?;
                fmt_child(p, f)
            }
            Operation::Binary(op, Operands { p, q }) => {
                fmt_child(p, f)?;
                write!(f, " {} ", op.symbol())?;
                fmt_child(q, f)
            }
        }
    }
}

impl Debug for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self)
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Atom(atom) => Display::fmt(atom, f),
            Operand::Op(op) => Display::fmt(op, f),
        }
    }
}

impl Debug for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Atom(atom) => Debug::fmt(atom, f),
            Operand::Op(op) => Debug::fmt(op, f),
        }
    }
}
