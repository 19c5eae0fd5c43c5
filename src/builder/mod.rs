//! Extraction of a [Netlist] from restricted netlist source text.
//!
//! Extraction is a single forward scan over [comment-stripped](comments) lines, each line
//! [classified](scan) once.
//! A line containing `always` toggles into synchronous-block mode; a line containing an
//! end-of-block marker toggles out.
//! Inside the mode, `register <= signal;` assignments become update pairs.
//! Outside it, declarations extend the declared-name lists and gate instantiations become gates.
//!
//! The scan never rejects a whole file for one unrecognised line.
//! The single fatal condition is a file with no update pairs at all, as the rest of the pipeline
//! cannot unroll a transition relation without at least one state register.

pub mod comments;
pub mod scan;

use log::{debug, warn};

use crate::{
    misc::log::targets,
    structures::netlist::Netlist,
    types::err::{self, ErrorKind},
};

use comments::strip_comments;
use scan::{DeclKind, StatementLine, UpdateLine};

/// Extracts a [Netlist] from raw source text.
///
/// ```rust
/// # use reachcnf::builder;
/// let netlist = builder::extract("
/// input clock;
/// reg S0;
/// wire NS0;
/// not g0(NS0, S0);
/// always @(posedge clock)
///   S0 <= NS0;
/// end
/// ").unwrap();
///
/// assert_eq!(netlist.updates, vec![("S0".to_owned(), "NS0".to_owned())]);
/// ```
pub fn extract(source: &str) -> Result<Netlist, ErrorKind> {
    let stripped = strip_comments(source);

    let mut netlist = Netlist::default();
    let mut in_always = false;
    let mut skipped = 0_usize;

    for line in stripped.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Checked before the mode, so a block header both enters and re-enters the mode.
        if line.contains("always") {
            in_always = true;
            continue;
        }

        if in_always {
            match scan::update(line) {
                UpdateLine::BlockEnd => in_always = false,

                UpdateLine::Update { register, next } => {
                    netlist.updates.push((register, next));
                }

                UpdateLine::Unrecognised => skipped += 1,
            }
            continue;
        }

        match scan::statement(line) {
            StatementLine::Declaration { kind, names } => {
                let list = match kind {
                    DeclKind::Input => &mut netlist.inputs,
                    DeclKind::Output => &mut netlist.outputs,
                    DeclKind::Reg => &mut netlist.regs,
                    DeclKind::Wire => &mut netlist.wires,
                };
                list.extend(names);
            }

            StatementLine::Gate(gate) => netlist.gates.push(gate),

            StatementLine::Unrecognised => skipped += 1,
        }
    }

    debug!(target: targets::EXTRACTION, "Skipped {skipped} unrecognised lines");
    debug!(target: targets::EXTRACTION,
        "Extracted {} gates and {} update pairs",
        netlist.gates.len(),
        netlist.updates.len()
    );

    if netlist.updates.is_empty() {
        return Err(ErrorKind::from(err::MalformedSource::NoStateUpdates));
    }

    // An update to an undeclared register is suspicious but never silently renamed.
    for (register, _) in &netlist.updates {
        if !netlist.regs.iter().any(|declared| declared == register) {
            warn!(target: targets::EXTRACTION,
                "Update target {register} is not among the declared registers"
            );
        }
    }

    Ok(netlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::gate::GateKind;

    const STOPLIGHT: &str = "
module stoplight(clock, Ped);
  input Ped, clock;
  output light;
  reg S1, S0;
  wire NS1, NS0; // next state
  and g1(NS1, S1, S0);
  not g2(NS0, S0);
  /* the state update */
  always @(posedge clock)
  begin
    S1 <= NS1;
    S0 <= NS0;
  end
endmodule
";

    #[test]
    fn stoplight_netlist() {
        let netlist = extract(STOPLIGHT).unwrap();

        assert_eq!(netlist.inputs, vec!["Ped", "clock"]);
        assert_eq!(netlist.outputs, vec!["light"]);
        assert_eq!(netlist.regs, vec!["S1", "S0"]);
        assert_eq!(netlist.wires, vec!["NS1", "NS0"]);

        assert_eq!(netlist.gates.len(), 2);
        assert_eq!(netlist.gates[0].kind, GateKind::And);
        assert_eq!(netlist.gates[1].kind, GateKind::Not);

        assert_eq!(
            netlist.updates,
            vec![
                ("S1".to_owned(), "NS1".to_owned()),
                ("S0".to_owned(), "NS0".to_owned()),
            ]
        );
        let registers: Vec<_> = netlist.state_registers().collect();
        assert_eq!(registers, vec!["S1", "S0"]);
    }

    #[test]
    fn no_updates_is_fatal() {
        let result = extract("input a;\nwire b;\nnot g0(b, a);");
        assert_eq!(
            result,
            Err(ErrorKind::Source(err::MalformedSource::NoStateUpdates))
        );
    }

    #[test]
    fn unrecognised_lines_are_skipped() {
        // Malformed gates and stray syntax leave the recognised statements untouched.
        let netlist = extract(
            "
reg S0;
wire NS0;
not broken(NS0 S0;
not g0(NS0, S0);
assign x = y;
always @(posedge clock)
  S0 <= NS0;
end
",
        )
        .unwrap();

        assert_eq!(netlist.gates.len(), 1);
        assert_eq!(netlist.updates.len(), 1);
    }
}
