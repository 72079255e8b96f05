mod check;
mod engines;
mod list;
mod measure;

const USAGE: &'static str = "\
A tool for inspecting and running the regexbench cases outside of criterion.

USAGE:
    regexbench <command> ...

COMMANDS:
    check     Run every selected engine once per case and verify the result.
    engines   List the enabled regex engines.
    list      List the benchmark cases.
    measure   Time repeated searches and report the mean time per search.

For rigorous measurements, use 'cargo bench' instead of 'measure'.
";

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    let cmd = crate::args::next_as_command(USAGE, p)?;
    match &*cmd {
        "check" => check::run(p),
        "engines" => engines::run(p),
        "list" => list::run(p),
        "measure" => measure::run(p),
        unk => anyhow::bail!("unrecognized command '{unk}'"),
    }
}
