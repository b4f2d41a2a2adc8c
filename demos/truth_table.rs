use clap::{Parser, ValueEnum};

use logic_rs::atom::Atom;
use logic_rs::expr::Expression;
use logic_rs::rewrite::Form;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Preset {
    /// P ∧ Q
    And,
    /// P ∨ Q
    Or,
    /// P ⊻ Q
    Xor,
    /// P → Q
    Implies,
    /// P ↔ Q
    Iff,
    /// ¬(P ∧ Q) ∨ R
    Mixed,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Target {
    Nand,
    Nor,
}

impl From<Target> for Form {
    fn from(target: Target) -> Self {
        match target {
            Target::Nand => Form::Nand,
            Target::Nor => Form::Nor,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Expression to tabulate.
    #[arg(value_enum, default_value = "mixed")]
    preset: Preset,

    /// Rewrite into NAND-only or NOR-only form before tabulating.
    #[clap(long, value_enum)]
    rewrite: Option<Target>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build(preset: Preset, p: &Atom, q: &Atom, r: &Atom) -> Expression {
    match preset {
        Preset::And => p & q,
        Preset::Or => p | q,
        Preset::Xor => p ^ q,
        Preset::Implies => p.implies(q),
        Preset::Iff => p.iff(q),
        Preset::Mixed => !(p & q) | r,
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let p = Atom::new("P");
    let q = Atom::new("Q");
    let r = Atom::new("R");
    let mut f = build(args.preset, &p, &q, &r);
    println!("f = {}", f);

    let atoms = match args.preset {
        Preset::Mixed => vec![p, q, r],
        _ => vec![p, q],
    };
    f.print_truth_table(&atoms);

    if let Some(target) = args.rewrite {
        match Form::from(target) {
            Form::Nand => f.nand()?,
            Form::Nor => f.nor()?,
        }
        println!();
        println!("{}-only: {}", Form::from(target), f);
        f.print_truth_table(&atoms);
    }

    Ok(())
}
