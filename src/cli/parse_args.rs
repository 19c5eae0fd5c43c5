use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

/// The command of the cli.
///
/// Bit strings are positional within themselves: bit `i` of `--target` and `--init` refers to the
/// `i`-th state register in the order register updates appear in the synchronous block.
/// The inferred order is printed before translation so the assumption can be checked.
pub fn cli() -> Command {
    Command::new("reachcnf")
        .about("Translates a restricted AND/NOT gate netlist into a bounded reachability query in DIMACS CNF")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("netlist")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The netlist source file to translate."))

        .arg(Arg::new("target")
            .short('t')
            .long("target")
            .value_name("BITS")
            .required(true)
            .num_args(1)
            .help("The target-state bits, one 0/1 per state register.")
            .long_help("The target-state bits, one 0/1 per state register.

Bit i refers to the i-th register in the order update assignments appear in the synchronous block.
The inferred order is printed as `c State registers inferred …` before translation."))

        .arg(Arg::new("init")
            .short('i')
            .long("init")
            .value_name("BITS")
            .required(true)
            .num_args(1)
            .help("The initial-state bits, in the same order as --target."))

        .arg(Arg::new("unroll")
            .short('k')
            .long("unroll")
            .value_name("DEPTH")
            .value_parser(value_parser!(u32))
            .required(true)
            .num_args(1)
            .help("The number of clock transitions to unroll.")
            .long_help("The number of clock transitions to unroll.

Zero is permitted: the instance then has no transition clauses, and is satisfiable exactly when
the initial and target bits agree."))

        .arg(Arg::new("out_dir")
            .short('o')
            .long("out-dir")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .default_value(".")
            .num_args(1)
            .help("The directory to write out.dimacs, out.nodes, and out.sat into."))

        .arg(Arg::new("solver")
            .long("solver")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("A SAT solver executable, invoked as `<solver> <cnf path> <transcript path>`.")
            .long_help("A SAT solver executable, invoked as `<solver> <cnf path> <transcript path>`.

When absent the instance is written but not solved.
A non-zero solver exit is reported as a warning only, as minisat-style solvers encode SAT/UNSAT
in their exit code."))
}
