//! End-to-end tests for expressions, truth tables and NAND/NOR rewriting.

use logic_rs::atom::Atom;
use logic_rs::connective::BinaryType;
use logic_rs::error::Error;
use logic_rs::eval::Eval;
use logic_rs::expr::Expression;
use logic_rs::rewrite::Form;
use logic_rs::truth_table::Row;

fn pq() -> (Atom, Atom) {
    (Atom::new("P"), Atom::new("Q"))
}

/// Asserts that `f` and `g` agree under every assignment of `atoms`.
fn assert_same_function(f: &Expression, g: &Expression, atoms: &[Atom]) {
    assert_eq!(
        f.truth_table(atoms).outputs(),
        g.truth_table(atoms).outputs(),
        "{} is not equivalent to {}",
        f,
        g
    );
}

// ─── Evaluation ────────────────────────────────────────────────────────────────

#[test]
fn scenario_p_false_q_true() {
    let (p, q) = pq();
    p.set_false();
    q.set_true();

    assert!(!(&p & &q).eval());
    assert!((&p | &q).eval());
    assert!((&p ^ &q).eval());
    assert!(p.implies(&q).eval());
    assert!(!p.iff(&q).eval());
}

#[test]
fn connectives_match_native_ops() {
    let (p, q) = pq();
    let exprs = [
        (BinaryType::And, p.and(&q)),
        (BinaryType::Or, p.or(&q)),
        (BinaryType::Xor, p.xor(&q)),
        (BinaryType::Implies, p.implies(&q)),
        (BinaryType::Iff, p.iff(&q)),
        (BinaryType::Nand, p.nand_with(&q)),
        (BinaryType::Nor, p.nor_with(&q)),
    ];
    for (vp, vq) in [(false, false), (false, true), (true, false), (true, true)] {
        p.set(vp);
        q.set(vq);
        for (op, f) in &exprs {
            let expected = match op {
                BinaryType::And => vp && vq,
                BinaryType::Or => vp || vq,
                BinaryType::Xor => vp != vq,
                BinaryType::Implies => !vp || vq,
                BinaryType::Iff => vp == vq,
                BinaryType::Nand => !(vp && vq),
                BinaryType::Nor => !(vp || vq),
            };
            assert_eq!(f.eval(), expected, "{} at ({}, {})", f, vp, vq);
        }
    }
}

#[test]
fn double_negation() {
    let p = Atom::new("P");
    let f = !!&p;
    for v in [false, true] {
        p.set(v);
        assert_eq!(f.eval(), v);
    }

    let mut g = f.clone();
    g.nand().unwrap();
    let mut h = f.clone();
    h.nor().unwrap();
    assert_same_function(&f, &g, &[p.clone()]);
    assert_same_function(&f, &h, &[p]);
}

#[test]
fn nested_expressions_share_atoms() {
    let (p, q) = pq();
    let r = Atom::new("R");
    let f = (&p & &q).or(!&r).implies(&p);
    r.set_true();
    // ((F ∧ F) ∨ F) → F
    assert!(f.eval());
    r.set_false();
    // ((F ∧ F) ∨ T) → F
    assert!(!f.eval());
    p.set_true();
    assert!(f.eval());
}

// ─── Rendering ─────────────────────────────────────────────────────────────────

#[test]
fn render_simple() {
    let (p, q) = pq();
    assert_eq!((&p & &q).to_string(), "P ∧ Q");
    assert_eq!((!(&p & &q)).to_string(), "¬(P ∧ Q)");
}

#[test]
fn render_parenthesises_operations_only() {
    let (p, q) = pq();
    let f = (!&p).iff(&q ^ &p).or(&q);
    assert_eq!(f.to_string(), "((¬P) ↔ (Q ⊻ P)) ∨ Q");
}

#[test]
fn render_any_displayable_label() {
    let a = Atom::new(1);
    let b = Atom::new('b');
    assert_eq!(a.nor_with(&b).to_string(), "1 ↓ b");
}

// ─── Truth tables ──────────────────────────────────────────────────────────────

#[test]
fn truth_table_and() {
    let (p, q) = pq();
    let f = &p & &q;
    let table = f.truth_table(&[p, q]);
    assert_eq!(
        table.rows(),
        &[
            Row { inputs: vec![false, false], output: false },
            Row { inputs: vec![false, true], output: false },
            Row { inputs: vec![true, false], output: false },
            Row { inputs: vec![true, true], output: true },
        ]
    );
}

#[test]
fn truth_table_text() {
    let (p, q) = pq();
    let r = Atom::new("R");
    let f = (&p | &q) & &r;
    let table = f.truth_table(&[p, q, r]);
    let text = table.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], " P | Q | R | (P ∨ Q) ∧ R");
    assert_eq!(lines[1], " F | F | F | F ");
    assert_eq!(lines[4], " F | T | T | T ");
    assert_eq!(lines[8], " T | T | T | T ");
    assert_eq!(table.count_true(), 3);
}

// ─── Rewriting ─────────────────────────────────────────────────────────────────

#[test]
fn nand_of_and_scenario() {
    let (p, q) = pq();
    let mut f = &p & &q;
    f.nand().unwrap();
    p.set_true();
    q.set_true();
    assert!(f.eval());
    q.set_false();
    assert!(!f.eval());
}

#[test]
fn rewrites_preserve_value() {
    let (p, q) = pq();
    let r = Atom::new("R");
    let atoms = [p.clone(), q.clone(), r.clone()];
    let exprs = [
        &p & &q,
        &p | &q,
        !&p,
        !(&p & &q) | &r,
        (&p | !&q) & !(&r | &p),
        p.nand_with(&q).and(&r),
        p.nor_with(!&q).or(&r),
        !!(&p & (&q | !&r)),
    ];
    for f in &exprs {
        for form in [Form::Nand, Form::Nor] {
            let g = f.to_form(form).unwrap();
            assert!(g.root().is_in_form(form), "{} is not {}-only", g, form);
            assert_same_function(f, &g, &atoms);
        }
    }
}

#[test]
fn rewrite_round_trip_between_forms() {
    let (p, q) = pq();
    let r = Atom::new("R");
    let atoms = [p.clone(), q.clone(), r.clone()];
    let f = (&p & !&q) | &r;

    let mut g = f.clone();
    g.nand().unwrap();
    g.nor().unwrap();
    assert!(g.root().is_in_form(Form::Nor));
    assert_same_function(&f, &g, &atoms);

    g.nand().unwrap();
    assert!(g.root().is_in_form(Form::Nand));
    assert_same_function(&f, &g, &atoms);
}

#[test]
fn nand_to_nor_collapses_doubled_operands() {
    let (p, q) = pq();
    let mut f = &p & &q;
    f.nand().unwrap();
    assert_eq!(f.to_string(), "(P | Q) | (P | Q)");
    f.nor().unwrap();
    assert_eq!(f.to_string(), "(P ↓ P) ↓ (Q ↓ Q)");
}

#[test]
fn nor_to_nand_expands_fully() {
    // Known asymmetry: the mirror collapse is not attempted for NOR → NAND.
    let (p, q) = pq();
    let mut f = &p | &q;
    f.nor().unwrap();
    assert_eq!(f.to_string(), "(P ↓ Q) ↓ (P ↓ Q)");
    f.nand().unwrap();
    let inner = "((P | P) | (Q | Q)) | ((P | P) | (Q | Q))";
    let negated = format!("({inner}) | ({inner})");
    let both = format!("({negated}) | ({negated})");
    assert_eq!(f.to_string(), format!("({both}) | ({both})"));
    assert!(f.root().is_in_form(Form::Nand));
}

#[test]
fn collapse_uses_identity_not_labels() {
    let (p, q) = pq();
    let other_p = Atom::new("P");
    let f = p.nand_with(&q).nand_with(other_p.nand_with(&q));
    let g = f.to_form(Form::Nor).unwrap();
    assert_ne!(g.to_string(), "(P ↓ P) ↓ (Q ↓ Q)");
    assert_same_function(&f, &g, &[p, q, other_p]);
}

#[test]
fn unsupported_rewrites() {
    let (p, q) = pq();
    let cases = [
        (BinaryType::Xor, &p ^ &q),
        (BinaryType::Implies, p.implies(&q)),
        (BinaryType::Iff, p.iff(&q)),
        (BinaryType::Xor, !(&p ^ &q) | &q),
        (BinaryType::Iff, (&p & &q).and(p.iff(!&q))),
    ];
    for (op, f) in cases {
        for form in [Form::Nand, Form::Nor] {
            let mut g = f.clone();
            let before = g.to_string();
            let result = match form {
                Form::Nand => g.nand(),
                Form::Nor => g.nor(),
            };
            assert_eq!(result, Err(Error::Unsupported { op, form }));
            assert_eq!(g.to_string(), before);
        }
    }
}

#[test]
fn not_implemented_seams() {
    let (p, q) = pq();
    let f = &p | &q;
    assert!(matches!(
        f.truth_table_extended(&[p, q]),
        Err(Error::NotImplemented(_))
    ));
    assert!(matches!(f.venn_diagram(), Err(Error::NotImplemented(_))));
}
