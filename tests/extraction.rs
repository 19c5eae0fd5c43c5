use reachcnf::{builder, types::err::{ErrorKind, MalformedSource}};

mod extraction {
    use super::*;

    #[test]
    fn comments_do_not_reach_the_scanner() {
        let netlist = builder::extract(
            "
reg S0; // reg S1;
/* wire hidden;
not g9(hidden, S0); */
wire NS0;
not g0(NS0, S0);
always @(posedge clock)
  S0 <= NS0; /* S1 <= NS1; */
end
",
        )
        .unwrap();

        assert_eq!(netlist.regs, vec!["S0"]);
        assert_eq!(netlist.wires, vec!["NS0"]);
        assert_eq!(netlist.gates.len(), 1);
        assert_eq!(netlist.updates, vec![("S0".to_owned(), "NS0".to_owned())]);
    }

    #[test]
    fn declarations_accumulate_across_lines() {
        let netlist = builder::extract(
            "
input a;
input b, c;
reg S0;
wire NS0;
always @*
  S0 <= NS0;
end
",
        )
        .unwrap();

        assert_eq!(netlist.inputs, vec!["a", "b", "c"]);
    }

    #[test]
    fn updates_to_undeclared_registers_are_kept() {
        // Never silently renamed or dropped; a warning is logged instead.
        let netlist = builder::extract(
            "
wire NS0;
always @*
  S0 <= NS0;
end
",
        )
        .unwrap();

        assert_eq!(netlist.updates, vec![("S0".to_owned(), "NS0".to_owned())]);
    }

    #[test]
    fn file_without_updates_is_malformed() {
        let source = "
input a, b;
wire y;
and g0(y, a, b);
";
        assert_eq!(
            builder::extract(source),
            Err(ErrorKind::Source(MalformedSource::NoStateUpdates))
        );
    }
}
