use std::io::{stdout, Write};

use {bstr::ByteSlice, lexopt::Parser, regexbench::case};

use crate::args;

pub fn run(p: &mut Parser) -> anyhow::Result<()> {
    const USAGE: &'static str = "\
Lists the benchmark cases in table order.

Each line has the case name followed by the outcomes it supports. With
--verbose, each case also shows its pattern and the input for each outcome.

USAGE:
    regexbench list [options]

TIP:
    use -h for short docs and --help for long docs

OPTIONS:
%options%
";

    let mut common = args::common::Config::default();
    args::configure(p, USAGE, &mut [&mut common])?;

    let mut out = stdout().lock();
    for case in case::all() {
        let outcomes: Vec<String> =
            case.outcomes().map(|found| found.to_string()).collect();
        writeln!(out, "{:<16}{}", case.name(), outcomes.join(","))?;
        if !common.verbose {
            continue;
        }
        let pattern = case.pattern().as_bytes().as_bstr();
        writeln!(out, "    pattern: {:?}", pattern)?;
        for found in case.outcomes() {
            let input = case.input(found)?;
            writeln!(
                out,
                "    found={}: {:?}",
                found,
                input.as_bytes().as_bstr()
            )?;
        }
    }
    Ok(())
}
