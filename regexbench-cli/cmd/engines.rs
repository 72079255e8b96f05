use std::io::{stdout, Write};

use {lexopt::Parser, regexbench::engine};

use crate::args;

pub fn run(p: &mut Parser) -> anyhow::Result<()> {
    const USAGE: &'static str = "\
Lists every enabled regex engine along with the haystack representation it
searches: 'bytes', 'text' or 'decoded' (bytes decoded to a fresh string on
every search).

Engines backed by C libraries are only listed when this tool is built with
the corresponding feature, i.e., 're-onig' or 're-pcre2'.

USAGE:
    regexbench engines
";

    args::configure(p, USAGE, &mut [])?;
    let mut wtr = tabwriter::TabWriter::new(stdout().lock());
    for engine in engine::all() {
        writeln!(wtr, "{}\t{}", engine.name(), engine.input())?;
    }
    wtr.flush()?;
    Ok(())
}
