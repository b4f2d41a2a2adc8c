//! Named boolean variables.
//!
//! An [`Atom`] is a cheap, clonable *handle*: cloning it does not copy the
//! variable, it creates another reference to the same one. Every expression
//! built from an atom observes later changes to its value, which is what lets
//! a truth table re-evaluate one tree under many assignments.

use std::cell::Cell;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

struct AtomCell {
    label: String,
    value: Cell<bool>,
}

/// A named, mutable boolean variable.
///
/// Two atoms are "the same atom" only if they are handles to the same
/// variable (see [`Atom::ptr_eq`]). Atoms with equal labels are still
/// distinct variables.
///
/// ```
/// use logic_rs::atom::Atom;
///
/// let p = Atom::new("P");
/// let alias = p.clone();
/// alias.set_true();
/// assert!(p.value());
/// ```
#[derive(Clone)]
pub struct Atom(Rc<AtomCell>);

impl Atom {
    /// Creates a new atom with value `false`.
    pub fn new(label: impl Display) -> Self {
        Self::with_value(label, false)
    }

    /// Creates a new atom with the given initial value.
    pub fn with_value(label: impl Display, value: bool) -> Self {
        Atom(Rc::new(AtomCell {
            label: label.to_string(),
            value: Cell::new(value),
        }))
    }

    pub fn label(&self) -> &str {
        &self.0.label
    }

    /// Returns the current value.
    pub fn value(&self) -> bool {
        self.0.value.get()
    }

    pub fn set(&self, value: bool) {
        self.0.value.set(value);
    }

    pub fn set_true(&self) {
        self.set(true);
    }

    pub fn set_false(&self) {
        self.set(false);
    }

    /// Returns `true` if both handles refer to the same variable.
    pub fn ptr_eq(&self, other: &Atom) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.label(), f)
    }
}
