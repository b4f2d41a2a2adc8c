//! # logic-rs: symbolic boolean logic in Rust
//!
//! **`logic-rs`** builds boolean expressions out of named atoms and the usual
//! connectives, evaluates them, prints truth tables, and rewrites them into
//! equivalent NAND-only or NOR-only form.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_rs::atom::Atom;
//! use logic_rs::eval::Eval;
//!
//! // 1. Create atoms (all start out false)
//! let p = Atom::new("P");
//! let q = Atom::new("Q");
//!
//! // 2. Combine them: `!`, `&`, `|`, `^`, or the named methods
//! let mut f = &p & &q;
//! assert_eq!(f.to_string(), "P ∧ Q");
//!
//! // 3. Evaluate under the current values
//! p.set_true();
//! q.set_true();
//! assert!(f.eval());
//!
//! // 4. Rewrite in place using NAND only
//! f.nand().unwrap();
//! assert_eq!(f.to_string(), "(P | Q) | (P | Q)");
//! assert!(f.eval());
//!
//! // 5. Tabulate over all assignments
//! let table = f.truth_table(&[p, q]);
//! assert_eq!(table.outputs(), vec![false, false, false, true]);
//! ```
//!
//! Atoms are shared handles: every expression that mentions an atom sees its
//! current value. XOR, IMPLIES and IFF evaluate normally but cannot be
//! rewritten; asking for it yields [`error::Error::Unsupported`].

pub mod atom;
pub mod connective;
pub mod error;
pub mod eval;
pub mod expr;
pub mod operation;
pub mod rewrite;
pub mod truth_table;

pub use atom::Atom;
pub use error::{Error, Result};
pub use eval::Eval;
pub use expr::Expression;
