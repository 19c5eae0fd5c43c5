//! Serialisation of a finished translation: the variable dictionary and the DIMACS CNF instance.
//!
//! Both artifacts are written from the context alone, in formats fixed by contract:
//!
//! - The dictionary holds one `<id>:<signalName>,<timeframe>` line per variable, ascending by id,
//!   so a solver model can be read back against the circuit.
//! - The CNF file is standard DIMACS: `c` provenance comments, a `p cnf <vars> <clauses>` header,
//!   then one line per clause with its literals in stored order and a terminating `0`.
//!
//! Any I/O failure is fatal, as a partially written instance is meaningless to a solver.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{
    context::Context,
    misc::log::targets,
    types::err::{self, ErrorKind},
};

impl Context {
    /// Writes the variable dictionary to the given writer.
    pub fn write_dictionary(&self, writer: &mut impl Write) -> std::io::Result<()> {
        for (var, name, frame) in self.variable_db.nodes() {
            writeln!(writer, "{var}:{name},{frame}")?;
        }
        Ok(())
    }

    /// Writes the DIMACS CNF instance, with provenance comments, to the given writer.
    pub fn write_dimacs(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "c Reachability CNF generated by reachcnf")?;
        writeln!(writer, "c Source: {}", self.config.source_name)?;
        writeln!(writer, "c Unroll k = {}", self.config.unroll_depth)?;
        writeln!(writer, "c Target at time k = {}", self.config.target_bits)?;
        writeln!(
            writer,
            "p cnf {} {}",
            self.variable_db.count(),
            self.formula.clause_count()
        )?;

        for clause in self.formula.clauses() {
            for literal in clause {
                write!(writer, "{literal} ")?;
            }
            writeln!(writer, "0")?;
        }
        Ok(())
    }

    /// Writes both artifacts to the given paths, mapping I/O failure to the error taxonomy.
    pub fn write_instance(&self, dimacs: &Path, dictionary: &Path) -> Result<(), ErrorKind> {
        let to_dictionary_failure = |e: std::io::Error| {
            ErrorKind::from(err::OutputWriteFailure::Dictionary {
                path: dictionary.to_owned(),
                kind: e.kind(),
            })
        };
        let mut writer = BufWriter::new(File::create(dictionary).map_err(to_dictionary_failure)?);
        self.write_dictionary(&mut writer).map_err(to_dictionary_failure)?;
        writer.flush().map_err(to_dictionary_failure)?;

        let to_dimacs_failure = |e: std::io::Error| {
            ErrorKind::from(err::OutputWriteFailure::Dimacs {
                path: dimacs.to_owned(),
                kind: e.kind(),
            })
        };
        let mut writer = BufWriter::new(File::create(dimacs).map_err(to_dimacs_failure)?);
        self.write_dimacs(&mut writer).map_err(to_dimacs_failure)?;
        writer.flush().map_err(to_dimacs_failure)?;

        info!(target: targets::WRITER,
            "Wrote {} variables and {} clauses",
            self.variable_db.count(),
            self.formula.clause_count()
        );

        Ok(())
    }
}
