//! Brute-force truth tables.
//!
//! Rows follow the order of [`permutations`] over `[false, true]`: a binary
//! counter starting from all-false, with the first atom as the most
//! significant digit.
//!
//! The printed form is:
//!
//! ```text
//!  P | Q | P ∧ Q
//!  F | F | F
//!  F | T | F
//!  T | F | F
//!  T | T | T
//! ```
//!
//! (every line starts with a space; result cells carry a trailing space).

use std::fmt::{Display, Formatter};

use log::{debug, trace};

use crate::atom::Atom;
use crate::eval::Eval;
use crate::expr::Expression;

/// All sequences of `length` items drawn from `domain`, in lexicographic
/// order of the positions in `domain`.
///
/// ```
/// use logic_rs::truth_table::permutations;
///
/// let rows = permutations(&[false, true], 2);
/// assert_eq!(rows, vec![
///     vec![false, false],
///     vec![false, true],
///     vec![true, false],
///     vec![true, true],
/// ]);
/// ```
pub fn permutations<T: Clone>(domain: &[T], length: usize) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    extend_permutations(domain, length, Vec::with_capacity(length), &mut result);
    result
}

fn extend_permutations<T: Clone>(domain: &[T], length: usize, prefix: Vec<T>, result: &mut Vec<Vec<T>>) {
    if prefix.len() == length {
        result.push(prefix);
        return;
    }
    for item in domain {
        let mut next = prefix.clone();
        next.push(item.clone());
        extend_permutations(domain, length, next, result);
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub inputs: Vec<bool>,
    pub output: bool,
}

/// Recorded values of an expression over every assignment of a list of atoms.
#[derive(Debug, Clone)]
pub struct TruthTable {
    labels: Vec<String>,
    expression: String,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Column labels, in the order the atoms were given.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Rendered form of the tabulated expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The result column.
    pub fn outputs(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.output).collect()
    }

    /// Number of assignments under which the expression is true.
    pub fn count_true(&self) -> usize {
        self.rows.iter().filter(|row| row.output).count()
    }
}

fn mark(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for label in &self.labels {
            write!(f, "{} | ", label)?;
        }
        writeln!(f, "{}", self.expression)?;

        for row in &self.rows {
            write!(f, " ")?;
            for &input in &row.inputs {
                write!(f, "{} | ", mark(input))?;
            }
            writeln!(f, "{} ", mark(row.output))?;
        }
        Ok(())
    }
}

impl Expression {
    /// Evaluates the expression under every assignment of `atoms`.
    ///
    /// The atoms are assigned in place, so after the call they hold the last
    /// assignment (all true). Atoms that do not occur in the expression are
    /// allowed; they simply do not influence the result column.
    pub fn truth_table(&self, atoms: &[Atom]) -> TruthTable {
        debug!("truth_table({}, {} atoms)", self, atoms.len());

        let rows = permutations(&[false, true], atoms.len())
            .into_iter()
            .map(|inputs| {
                for (atom, &value) in atoms.iter().zip(&inputs) {
                    atom.set(value);
                }
                let output = self.eval();
                trace!("{:?} -> {}", inputs, output);
                Row { inputs, output }
            })
            .collect();

        TruthTable {
            labels: atoms.iter().map(|atom| atom.to_string()).collect(),
            expression: self.to_string(),
            rows,
        }
    }

    /// Prints [`Expression::truth_table`] to stdout.
    pub fn print_truth_table(&self, atoms: &[Atom]) {
        print!("{}", self.truth_table(atoms));
    }
}
