//! Line classification for the restricted netlist dialect.
//!
//! Each line of comment-stripped source is classified exactly once, into a structured
//! [StatementLine] or [UpdateLine], and the [extractor](crate::builder) consumes the
//! classification.
//! Classification is deliberately permissive: a line matching no recognised shape is
//! [StatementLine::Unrecognised] rather than an error, which tolerates module headers,
//! `endmodule`, and any other syntax outside the recognised subset.

use crate::structures::gate::{Gate, GateKind};

/// The declaration keyword of a [StatementLine::Declaration].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclKind {
    Input,
    Output,
    Reg,
    Wire,
}

impl DeclKind {
    /// Every declaration keyword, paired with the prefix (keyword and a space) that introduces it.
    const PREFIXED: [(DeclKind, &'static str); 4] = [
        (DeclKind::Input, "input "),
        (DeclKind::Output, "output "),
        (DeclKind::Reg, "reg "),
        (DeclKind::Wire, "wire "),
    ];
}

/// The classification of a line outside a synchronous block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StatementLine {
    /// A declaration: the keyword and every name token following it.
    Declaration { kind: DeclKind, names: Vec<String> },

    /// A gate instantiation.
    Gate(Gate),

    /// Anything else, skipped without complaint.
    Unrecognised,
}

/// The classification of a line inside a synchronous block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UpdateLine {
    /// A line containing an end-of-block marker.
    BlockEnd,

    /// A `register <= signal;` assignment.
    Update { register: String, next: String },

    /// Anything else, skipped without complaint.
    Unrecognised,
}

/// Classifies a trimmed, non-empty line outside a synchronous block.
pub fn statement(line: &str) -> StatementLine {
    for (kind, prefix) in DeclKind::PREFIXED {
        if let Some(rest) = line.strip_prefix(prefix) {
            return StatementLine::Declaration {
                kind,
                names: name_tokens(rest),
            };
        }
    }

    match gate(line) {
        Some(gate) => StatementLine::Gate(gate),
        None => StatementLine::Unrecognised,
    }
}

/// Classifies a trimmed, non-empty line inside a synchronous block.
pub fn update(line: &str) -> UpdateLine {
    if line.contains("end") {
        return UpdateLine::BlockEnd;
    }

    // Whitespace is insignificant in an assignment, so drop it before matching `lhs<=rhs;`.
    let packed: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    match packed.split_once("<=") {
        Some((register, next)) => UpdateLine::Update {
            register: register.to_owned(),
            next: next.strip_suffix(';').unwrap_or(next).to_owned(),
        },

        None => UpdateLine::Unrecognised,
    }
}

/// Every alphanumeric/underscore token of the given text, in order.
///
/// Commas, whitespace, terminators, and anything else all act as separators, which tolerates
/// varied declaration spacing and punctuation.
pub fn name_tokens(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            current.push(c);
        } else if !current.is_empty() {
            names.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        names.push(current);
    }

    names
}

/// Parses a gate instantiation such as `and g1(n14, S2, n13);`.
///
/// The instance name between the keyword and the parenthesis is ignored.
/// The first element of the parenthesised list is the gate's output, the rest its inputs.
/// A mismatched or missing parenthesis, or fewer than two elements, mean the line is not a gate.
/// Neither is a parse error.
fn gate(line: &str) -> Option<Gate> {
    let keyword = line.split(' ').next()?;
    let kind = GateKind::from_keyword(keyword)?;
    if !line.contains(' ') {
        return None;
    }

    let open = line.find('(')?;
    let close = line.rfind(')')?;
    if close <= open {
        return None;
    }

    let elements: Vec<&str> = line[open + 1..close].split(',').map(str::trim).collect();
    if elements.len() < 2 {
        return None;
    }

    Some(Gate {
        kind,
        out: elements[0].to_owned(),
        ins: elements[1..].iter().map(|name| (*name).to_owned()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_tolerate_punctuation() {
        let line = statement("input  Ped ,clock;");
        let StatementLine::Declaration { kind, names } = line else {
            panic!("not a declaration");
        };
        assert_eq!(kind, DeclKind::Input);
        assert_eq!(names, vec!["Ped", "clock"]);
    }

    #[test]
    fn gate_with_inputs() {
        let line = statement("and g1(n14, S2, n13);");
        let StatementLine::Gate(gate) = line else {
            panic!("not a gate");
        };
        assert_eq!(gate.kind, GateKind::And);
        assert_eq!(gate.out, "n14");
        assert_eq!(gate.ins, vec!["S2", "n13"]);
    }

    #[test]
    fn gate_with_missing_parenthesis_is_unrecognised() {
        assert_eq!(statement("and g1 n14, S2;"), StatementLine::Unrecognised);
        assert_eq!(statement("and g1(n14, S2;"), StatementLine::Unrecognised);
        assert_eq!(statement("and g1)n14, S2(;"), StatementLine::Unrecognised);
    }

    #[test]
    fn module_header_is_unrecognised() {
        assert_eq!(statement("module stoplight(clock, Ped);"), StatementLine::Unrecognised);
    }

    #[test]
    fn update_assignment_ignores_spacing() {
        let line = update("S3  <=   NS3 ;");
        assert_eq!(
            line,
            UpdateLine::Update {
                register: "S3".to_owned(),
                next: "NS3".to_owned(),
            }
        );
    }

    #[test]
    fn end_marker_closes_a_block() {
        assert_eq!(update("end"), UpdateLine::BlockEnd);
    }
}
