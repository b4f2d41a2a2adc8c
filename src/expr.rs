//! The user-facing expression handle.
//!
//! An [`Expression`] wraps the current root of a tree. Combining it with an
//! atom or another expression never changes it: a new operation is built on
//! top of the wrapped roots and returned in a new `Expression`. Only the
//! NAND/NOR rewrites replace the root in place.
//!
//! ```
//! use logic_rs::atom::Atom;
//! use logic_rs::eval::Eval;
//!
//! let p = Atom::new("P");
//! let q = Atom::new("Q");
//! q.set_true();
//!
//! let f = !(&p & &q);
//! assert_eq!(f.to_string(), "¬(P ∧ Q)");
//! assert!(f.eval());
//! assert!(p.implies(&q).eval());
//! assert!(!p.iff(&q).eval());
//! ```

use std::fmt::{Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Not};

use log::debug;

use crate::atom::Atom;
use crate::connective::BinaryType;
use crate::error::{Error, Result};
use crate::eval::Eval;
use crate::operation::{Operand, Operation};
use crate::rewrite::{rewrite, Form};
use crate::truth_table::TruthTable;

/// A handle to the root of an expression tree.
#[derive(Clone)]
pub struct Expression {
    root: Operand,
}

impl Expression {
    pub fn new(root: impl Into<Operand>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Operand {
        &self.root
    }

    pub fn into_root(self) -> Operand {
        self.root
    }

    /// Replaces the root with its NAND-only equivalent.
    ///
    /// On error the expression is left unchanged.
    pub fn nand(&mut self) -> Result<()> {
        self.rewrite_in_place(Form::Nand)
    }

    /// Replaces the root with its NOR-only equivalent.
    ///
    /// On error the expression is left unchanged.
    pub fn nor(&mut self) -> Result<()> {
        self.rewrite_in_place(Form::Nor)
    }

    /// Returns the rewritten equivalent without touching `self`.
    pub fn to_form(&self, form: Form) -> Result<Expression> {
        rewrite(&self.root, form).map(Expression::new)
    }

    fn rewrite_in_place(&mut self, form: Form) -> Result<()> {
        let root = rewrite(&self.root, form)?;
        debug!("rewrite_in_place: {} => {}", self.root, root);
        self.root = root;
        Ok(())
    }

    /// Truth table with a column per sub-expression.
    pub fn truth_table_extended(&self, _atoms: &[Atom]) -> Result<TruthTable> {
        Err(Error::NotImplemented("extended truth table"))
    }

    pub fn venn_diagram(&self) -> Result<String> {
        Err(Error::NotImplemented("venn diagram"))
    }
}

fn combine(op: BinaryType, p: Operand, q: impl Into<Operand>) -> Expression {
    Expression::new(Operation::binary(op, p, q))
}

macro_rules! impl_combinators {
    ($t:ty) => {
        impl $t {
            pub fn and(&self, other: impl Into<Operand>) -> Expression {
                combine(BinaryType::And, self.into(), other)
            }

            pub fn or(&self, other: impl Into<Operand>) -> Expression {
                combine(BinaryType::Or, self.into(), other)
            }

            pub fn xor(&self, other: impl Into<Operand>) -> Expression {
                combine(BinaryType::Xor, self.into(), other)
            }

            pub fn implies(&self, other: impl Into<Operand>) -> Expression {
                combine(BinaryType::Implies, self.into(), other)
            }

            pub fn iff(&self, other: impl Into<Operand>) -> Expression {
                combine(BinaryType::Iff, self.into(), other)
            }

            /// Builds `self | other` directly, without rewriting anything.
            pub fn nand_with(&self, other: impl Into<Operand>) -> Expression {
                combine(BinaryType::Nand, self.into(), other)
            }

            /// Builds `self ↓ other` directly, without rewriting anything.
            pub fn nor_with(&self, other: impl Into<Operand>) -> Expression {
                combine(BinaryType::Nor, self.into(), other)
            }
        }

        impl Not for $t {
            type Output = Expression;

            fn not(self) -> Self::Output {
                Expression::new(Operation::not(self))
            }
        }

        impl Not for &$t {
            type Output = Expression;

            fn not(self) -> Self::Output {
                Expression::new(Operation::not(self))
            }
        }

        impl_binary_op!($t, BitAnd, bitand, And);
        impl_binary_op!($t, BitOr, bitor, Or);
        impl_binary_op!($t, BitXor, bitxor, Xor);
    };
}

macro_rules! impl_binary_op {
    ($t:ty, $trait:ident, $method:ident, $op:ident) => {
        impl<R: Into<Operand>> $trait<R> for $t {
            type Output = Expression;

            fn $method(self, rhs: R) -> Self::Output {
                combine(BinaryType::$op, self.into(), rhs)
            }
        }

        impl<R: Into<Operand>> $trait<R> for &$t {
            type Output = Expression;

            fn $method(self, rhs: R) -> Self::Output {
                combine(BinaryType::$op, self.into(), rhs)
            }
        }
    };
}

impl_combinators!(Atom);
impl_combinators!(Expression);

impl From<Expression> for Operand {
    fn from(expr: Expression) -> Self {
        expr.root
    }
}

impl From<&Expression> for Operand {
    fn from(expr: &Expression) -> Self {
        expr.root.clone()
    }
}

impl From<Atom> for Expression {
    fn from(atom: Atom) -> Self {
        Expression::new(atom)
    }
}

impl From<Operation> for Expression {
    fn from(op: Operation) -> Self {
        Expression::new(op)
    }
}

impl Eval for Expression {
    fn eval(&self) -> bool {
        self.root.eval()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.root, f)
    }
}

impl Debug for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root, f)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn atoms() -> (Atom, Atom) {
        let p = Atom::new("P");
        let q = Atom::with_value("Q", true);
        (p, q)
    }

    #[test]
    fn test_scenario_values() {
        let (p, q) = atoms();
        assert!(!(&p & &q).eval());
        assert!((&p | &q).eval());
        assert!((&p ^ &q).eval());
        assert!(p.implies(&q).eval());
        assert!(!p.iff(&q).eval());
    }

    #[test]
    fn test_methods_match_operators() {
        let (p, q) = atoms();
        assert_eq!(p.and(&q).to_string(), (&p & &q).to_string());
        assert_eq!(p.or(&q).to_string(), (&p | &q).to_string());
        assert_eq!(p.xor(&q).to_string(), (&p ^ &q).to_string());
        assert_eq!(p.nand_with(&q).to_string(), "P | Q");
        assert_eq!(p.nor_with(&q).to_string(), "P ↓ Q");
    }

    #[test]
    fn test_render() {
        let (p, q) = atoms();
        assert_eq!((&p & &q).to_string(), "P ∧ Q");
        assert_eq!((!(&p & &q)).to_string(), "¬(P ∧ Q)");
        assert_eq!((!&p).to_string(), "¬P");
        let f = (&p | &q).implies(!&q);
        assert_eq!(f.to_string(), "(P ∨ Q) → (¬Q)");
        assert_eq!(format!("{:?}", f), "'(P ∨ Q) → (¬Q)'");
        assert_eq!(Expression::from(p).to_string(), "P");
    }

    #[test]
    fn test_expression_contributes_its_root() {
        let (p, q) = atoms();
        let a = &p & &q;
        let b = a.or(&p);
        let operands = b.root().as_binary(BinaryType::Or).unwrap();
        assert!(operands.p.ptr_eq(a.root()));
        assert!(operands.q.as_atom().unwrap().ptr_eq(&p));
    }

    #[test]
    fn test_combining_does_not_change_operands() {
        let (p, q) = atoms();
        let a = &p & &q;
        let before = a.to_string();
        let _b = !&a;
        let _c = &a | &p;
        assert_eq!(a.to_string(), before);
    }

    #[test]
    fn test_mutation_is_observed() {
        let (p, q) = atoms();
        let f = &p & &q;
        assert!(!f.eval());
        p.set_true();
        assert!(f.eval());
    }

    #[test]
    fn test_nand_in_place() {
        let (p, q) = atoms();
        let mut f = &p & &q;
        f.nand().unwrap();
        assert_eq!(f.to_string(), "(P | Q) | (P | Q)");
        p.set_true();
        q.set_true();
        assert!(f.eval());
        q.set_false();
        assert!(!f.eval());
    }

    #[test]
    fn test_nor_in_place() {
        let (p, q) = atoms();
        let mut f = !(&p | &q);
        f.nor().unwrap();
        assert_eq!(f.to_string(), "((P ↓ Q) ↓ (P ↓ Q)) ↓ ((P ↓ Q) ↓ (P ↓ Q))");
        assert!(f.root().is_in_form(Form::Nor));
    }

    #[test]
    fn test_nand_twice_is_stable() {
        let (p, q) = atoms();
        let mut f = &p | !&q;
        f.nand().unwrap();
        let once = f.to_string();
        let root = f.root().clone();
        f.nand().unwrap();
        assert_eq!(f.to_string(), once);
        assert!(f.root().ptr_eq(&root));
    }

    #[test]
    fn test_unsupported_leaves_expression_unchanged() {
        let (p, q) = atoms();
        let mut f = !(&p ^ &q) & &p;
        let before = f.root().clone();
        let err = f.nand().unwrap_err();
        assert_eq!(
            err,
            Error::Unsupported {
                op: BinaryType::Xor,
                form: Form::Nand
            }
        );
        assert!(f.root().ptr_eq(&before));

        let mut g = p.implies(&q);
        assert!(g.nor().is_err());
        let mut h = p.iff(&q);
        assert!(h.nand().is_err());
    }

    #[test]
    fn test_to_form_is_persistent() {
        let (p, q) = atoms();
        let f = &p & &q;
        let g = f.to_form(Form::Nor).unwrap();
        assert_eq!(f.to_string(), "P ∧ Q");
        assert_eq!(g.to_string(), "(P ↓ P) ↓ (Q ↓ Q)");
    }

    #[test]
    fn test_not_implemented() {
        let (p, q) = atoms();
        let f = &p & &q;
        assert_eq!(
            f.truth_table_extended(&[p, q]).unwrap_err(),
            Error::NotImplemented("extended truth table")
        );
        assert_eq!(
            f.venn_diagram().unwrap_err(),
            Error::NotImplemented("venn diagram")
        );
    }
}
