use crate::atom::Atom;
use crate::connective::logical_not;
use crate::operation::{Operand, Operands, Operation};

/// Evaluation under the current values of the atoms.
///
/// Evaluation is lazy: nothing is cached, every call reads the atom cells
/// again, so changing an atom changes the result of every tree that
/// reaches it.
pub trait Eval {
    fn eval(&self) -> bool;
}

impl Eval for Atom {
    fn eval(&self) -> bool {
        self.value()
    }
}

impl Eval for Operand {
    fn eval(&self) -> bool {
        match self {
            Operand::Atom(atom) => atom.eval(),
            Operand::Op(op) => op.eval(),
        }
    }
}

impl Eval for Operation {
    fn eval(&self) -> bool {
        match self {
            Operation::Not(p) => logical_not(p.eval()),
            Operation::Binary(op, Operands { p, q }) => op.apply(p.eval(), q.eval()),
        }
    }
}
