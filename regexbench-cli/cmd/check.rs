use std::io::{stdout, Write};

use {
    lexopt::Parser,
    regexbench::{ErrorKind, Instance},
};

use crate::{
    args,
    util::{self, Table},
};

pub fn run(p: &mut Parser) -> anyhow::Result<()> {
    const USAGE: &'static str = "\
Runs one search per selected engine for every selected (case, outcome)
combination and verifies that each engine reports the expected outcome.

Each row reports 'ok', 'rejected' (the engine does not support the pattern's
syntax, so it is excluded from the comparison), 'MISMATCH' (the engine gave
the wrong answer) or 'ERROR' (the engine failed to search). This command
fails if any row is a mismatch or an error.

USAGE:
    regexbench check [options]

TIP:
    use -h for short docs and --help for long docs

OPTIONS:
%options%
";

    let mut common = args::common::Config::default();
    let mut select = args::select::Config::default();
    args::configure(p, USAGE, &mut [&mut common, &mut select])?;

    let combos = select.combinations()?;
    let engines = select.engines()?;
    let mut table = Table::empty();
    let (mut ok, mut rejected, mut failed) = (0usize, 0usize, 0usize);
    let mut wtr = tabwriter::TabWriter::new(stdout());
    let (_, time) = util::timeitr(|| -> anyhow::Result<()> {
        for &(case, found) in combos.iter() {
            let inst = Instance::with_engines(case.name(), found, &engines)?;
            for &engine in engines.iter() {
                let result = match inst.searcher(engine.name()) {
                    Err(err) if err.is_compile_rejected() => {
                        rejected += 1;
                        if common.quiet {
                            continue;
                        }
                        if common.verbose {
                            format!("rejected ({})", err)
                        } else {
                            "rejected".to_string()
                        }
                    }
                    Err(err) => return Err(err.into()),
                    Ok(searcher) => match searcher.verify() {
                        Ok(_) => {
                            ok += 1;
                            if common.quiet {
                                continue;
                            }
                            "ok".to_string()
                        }
                        Err(err) => {
                            failed += 1;
                            match *err.kind() {
                                ErrorKind::OutcomeMismatch { .. } => {
                                    "MISMATCH".to_string()
                                }
                                _ => format!("ERROR ({})", err),
                            }
                        }
                    },
                };
                writeln!(
                    wtr,
                    "{}\t{}\t{}\t{}",
                    case.name(),
                    found,
                    engine.name(),
                    result,
                )?;
            }
        }
        Ok(())
    })?;
    wtr.flush()?;
    table.add("combinations", combos.len());
    table.add("engines", engines.len());
    table.add("ok", ok);
    table.add("rejected", rejected);
    table.add("failed", failed);
    table.add("check time", time);
    if common.table() {
        table.print(stdout())?;
    }
    anyhow::ensure!(
        failed == 0,
        "{} search(es) did not report the expected outcome",
        failed,
    );
    Ok(())
}
