use std::path::PathBuf;

use reachcnf::{builder, config::Config, context::Context, solver};

mod parse_args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    // All of these are required or defaulted, so present after parsing.
    let netlist_path: &PathBuf = matches.get_one("netlist").unwrap();
    let target_bits: &String = matches.get_one("target").unwrap();
    let init_bits: &String = matches.get_one("init").unwrap();
    let unroll_depth: u32 = *matches.get_one("unroll").unwrap();
    let out_dir: &PathBuf = matches.get_one("out_dir").unwrap();
    let solver_path: Option<&PathBuf> = matches.get_one("solver");

    println!("c Reading netlist from {netlist_path:?}");

    let source = match read_source(netlist_path) {
        Ok(source) => source,
        Err(e) => {
            println!("c Failed to read netlist: {e}");
            std::process::exit(1);
        }
    };

    let netlist = match builder::extract(&source) {
        Ok(netlist) => netlist,
        Err(e) => {
            println!("c Extraction error: {e:?}");
            std::process::exit(1);
        }
    };

    // The single source of truth correlating the bit strings to registers.
    let order: Vec<&str> = netlist.state_registers().collect();
    println!(
        "c State registers inferred (bit order assumed to match): {}",
        order.join(" ")
    );

    let config = Config {
        source_name: netlist_path.display().to_string(),
        unroll_depth,
        init_bits: init_bits.clone(),
        target_bits: target_bits.clone(),
    };

    let mut ctx = Context::from_netlist(netlist, config);

    if let Err(e) = ctx.translate() {
        println!("c Translation error: {e:?}");
        std::process::exit(1);
    }

    if let Err(e) = std::fs::create_dir_all(out_dir) {
        // The writes below surface their own fatal error if the directory is truly unusable.
        println!("c Warning: could not create {out_dir:?}: {e}");
    }

    let dimacs_path = out_dir.join("out.dimacs");
    let nodes_path = out_dir.join("out.nodes");
    let transcript_path = out_dir.join("out.sat");

    if let Err(e) = ctx.write_instance(&dimacs_path, &nodes_path) {
        println!("c Write error: {e:?}");
        std::process::exit(1);
    }

    println!("c Wrote {dimacs_path:?} and {nodes_path:?}");

    if let Some(solver_path) = solver_path {
        match solver::run(solver_path, &dimacs_path, &transcript_path) {
            Ok(status) if status.success() => {
                println!("c Solver transcript written to {transcript_path:?}")
            }

            Ok(status) => {
                println!("c Warning: solver exited with {status} (SAT/UNSAT verdicts commonly use non-zero codes)");
                println!("c Solver transcript written to {transcript_path:?}")
            }

            Err(e) => {
                println!("c Failed to run solver {solver_path:?}: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Reads the netlist source, decompressing `.xz` files when the feature is enabled.
fn read_source(path: &PathBuf) -> std::io::Result<String> {
    #[cfg(feature = "xz")]
    if path.extension().is_some_and(|extension| extension == "xz") {
        use std::io::Read;
        let file = std::fs::File::open(path)?;
        let mut source = String::new();
        xz2::read::XzDecoder::new(file).read_to_string(&mut source)?;
        return Ok(source);
    }

    std::fs::read_to_string(path)
}
