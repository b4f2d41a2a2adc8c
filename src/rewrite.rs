//! Rewriting into a single functionally complete connective.
//!
//! Every NOT/AND/OR tree can be expressed using NAND only or NOR only:
//!
//! ```text
//! NOT(P)    →  NAND(P, P)                            NOR(P, P)
//! AND(P, Q) →  NAND(NAND(P, Q), NAND(P, Q))          NOR(NOR(P, P), NOR(Q, Q))
//! OR(P, Q)  →  NAND(NAND(P, P), NAND(Q, Q))          NOR(NOR(P, Q), NOR(P, Q))
//! ```
//!
//! A NAND node is already in NAND form and a NOR node in NOR form. Crossing
//! over (NAND to NOR-only, or NOR to NAND-only) expands to four gates:
//!
//! ```text
//! NAND(P, Q) → NOR(NOR(NOR(P, P), NOR(Q, Q)), NOR(NOR(P, P), NOR(Q, Q)))
//! ```
//!
//! When a NAND being rewritten to NOR has two NAND operands that share their
//! own operands (by identity), the result collapses to a two-level form,
//! which is what a previously NAND-rewritten AND/OR node looks like. The
//! mirror case for NOR to NAND is not recognised; NOR always expands fully.
//!
//! XOR, IMPLIES and IFF have no rewrite in either direction and yield
//! [`Error::Unsupported`]. Leaves (atoms) are kept as-is, so atom identity is
//! preserved across the rewritten tree.
//!
//! The rewrite is persistent: it builds new nodes and never touches the
//! input, so a failure part-way through leaves nothing half-rewritten.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use log::{debug, trace};

use crate::connective::BinaryType;
use crate::error::{Error, Result};
use crate::operation::{Operand, Operands, Operation};

/// Target form of a rewrite.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Form {
    Nand,
    Nor,
}

impl Form {
    /// The only connective allowed in this form.
    pub const fn connective(self) -> BinaryType {
        match self {
            Form::Nand => BinaryType::Nand,
            Form::Nor => BinaryType::Nor,
        }
    }
}

impl Display for Form {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.connective(), f)
    }
}

/// Rewrites `operand` into an equivalent tree using only the connective of `form`.
///
/// ```
/// use logic_rs::atom::Atom;
/// use logic_rs::operation::{Operand, Operation};
/// use logic_rs::rewrite::{rewrite, Form};
///
/// let p = Atom::new("P");
/// let q = Atom::new("Q");
/// let f = Operand::from(Operation::or(&p, &q));
/// let g = rewrite(&f, Form::Nand).unwrap();
/// assert_eq!(g.to_string(), "(P | P) | (Q | Q)");
/// ```
pub fn rewrite(operand: &Operand, form: Form) -> Result<Operand> {
    debug!("rewrite({}, {})", operand, form);
    Rewriter::new(form).rewrite(operand)
}

fn gate(op: BinaryType, p: &Operand, q: &Operand) -> Operand {
    Operation::binary(op, p, q).into()
}

/// `¬(P ∘ Q)` for the *other* connective, spelled with `op` only.
fn expand(op: BinaryType, p: &Operand, q: &Operand) -> Operand {
    let np = gate(op, p, p);
    let nq = gate(op, q, q);
    let inner = gate(op, &np, &nq);
    gate(op, &inner, &inner)
}

struct Rewriter {
    form: Form,
    /// Rewritten form of each input node, so that shared nodes are visited once
    /// and stay shared in the output.
    done: HashMap<*const Operation, Operand>,
}

impl Rewriter {
    fn new(form: Form) -> Self {
        Self {
            form,
            done: HashMap::new(),
        }
    }

    fn rewrite(&mut self, operand: &Operand) -> Result<Operand> {
        let op = match operand {
            Operand::Atom(_) => return Ok(operand.clone()),
            Operand::Op(op) => op,
        };

        let key = Rc::as_ptr(op);
        if let Some(result) = self.done.get(&key) {
            trace!("rewrite: reusing {}", result);
            return Ok(result.clone());
        }

        let result = self.rewrite_operation(op)?;
        self.done.insert(key, result.clone());
        Ok(result)
    }

    fn rewrite_operation(&mut self, node: &Rc<Operation>) -> Result<Operand> {
        let target = self.form.connective();

        let (kind, operands) = match node.as_ref() {
            Operation::Not(p) => {
                let p = self.rewrite(p)?;
                return Ok(gate(target, &p, &p));
            }
            Operation::Binary(kind, operands) => (*kind, operands),
        };

        match (kind, self.form) {
            (BinaryType::Xor | BinaryType::Implies | BinaryType::Iff, form) => {
                debug!("rewrite: {} has no {}-only form", kind, form);
                Err(Error::Unsupported { op: kind, form })
            }
            (BinaryType::And, Form::Nand) | (BinaryType::Or, Form::Nor) => {
                let (p, q) = self.rewrite_pair(operands)?;
                let inner = gate(target, &p, &q);
                Ok(gate(target, &inner, &inner))
            }
            (BinaryType::And, Form::Nor) | (BinaryType::Or, Form::Nand) => {
                let (p, q) = self.rewrite_pair(operands)?;
                Ok(gate(target, &gate(target, &p, &p), &gate(target, &q, &q)))
            }
            (BinaryType::Nand, Form::Nand) | (BinaryType::Nor, Form::Nor) => {
                let (p, q) = self.rewrite_pair(operands)?;
                if p.ptr_eq(&operands.p) && q.ptr_eq(&operands.q) {
                    Ok(Operand::Op(node.clone()))
                } else {
                    Ok(gate(target, &p, &q))
                }
            }
            (BinaryType::Nand, Form::Nor) => self.nand_to_nor(operands),
            (BinaryType::Nor, Form::Nand) => {
                let (p, q) = self.rewrite_pair(operands)?;
                Ok(expand(target, &p, &q))
            }
        }
    }

    fn rewrite_pair(&mut self, operands: &Operands) -> Result<(Operand, Operand)> {
        let p = self.rewrite(&operands.p)?;
        let q = self.rewrite(&operands.q)?;
        Ok((p, q))
    }

    fn nand_to_nor(&mut self, operands: &Operands) -> Result<Operand> {
        if let Some([a, b, c, d]) = doubled_nand_operands(operands) {
            debug!("nand_to_nor: collapsing {} | {}", operands.p, operands.q);
            let a = self.rewrite(a)?;
            let b = self.rewrite(b)?;
            let c = self.rewrite(c)?;
            let d = self.rewrite(d)?;
            let nor = BinaryType::Nor;
            return Ok(gate(nor, &gate(nor, &a, &b), &gate(nor, &c, &d)));
        }

        let (p, q) = self.rewrite_pair(operands)?;
        Ok(expand(BinaryType::Nor, &p, &q))
    }
}

/// Recognises a NAND of two NANDs whose operands are shared by identity in
/// one of three patterns, and returns `[a, b, c, d]` such that the node
/// equals `NOR(NOR(a, b), NOR(c, d))`.
fn doubled_nand_operands(operands: &Operands) -> Option<[&Operand; 4]> {
    let l = operands.p.as_binary(BinaryType::Nand)?;
    let r = operands.q.as_binary(BinaryType::Nand)?;

    if l.p.ptr_eq(&l.q) && r.p.ptr_eq(&l.q) {
        Some([&l.p, &r.p, &l.q, &r.q])
    } else if l.p.ptr_eq(&r.p) && l.q.ptr_eq(&r.q) {
        Some([&l.p, &r.p, &l.q, &r.q])
    } else if l.p.ptr_eq(&r.q) && l.q.ptr_eq(&r.p) {
        Some([&l.p, &r.q, &l.q, &r.p])
    } else {
        None
    }
}

impl Operand {
    /// Returns `true` if every operation reachable from here uses only the
    /// connective of `form`.
    pub fn is_in_form(&self, form: Form) -> bool {
        match self {
            Operand::Atom(_) => true,
            Operand::Op(op) => match op.as_ref() {
                Operation::Not(_) => false,
                Operation::Binary(kind, Operands { p, q }) => {
                    *kind == form.connective() && p.is_in_form(form) && q.is_in_form(form)
                }
            },
        }
    }
}
