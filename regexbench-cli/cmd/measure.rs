use std::{
    hint::black_box,
    io::{stdout, Write},
    time::Duration,
};

use {
    lexopt::{Arg, Parser},
    regexbench::Instance,
};

use crate::{
    args::{self, Configurable, Usage},
    util::{self, Table},
};

pub fn run(p: &mut Parser) -> anyhow::Result<()> {
    const USAGE: &'static str = "\
Times repeated searches for every selected (case, outcome) combination and
engine, and prints the mean time per search.

Every search result is verified. An engine that reports the wrong outcome
stops the run, since its timing would be meaningless. Engines that reject a
case's pattern are skipped for that case.

This is meant for quick, ad hoc comparisons. It does no warm up and no
statistical analysis. Use 'cargo bench' for that.

USAGE:
    regexbench measure [options]

TIP:
    use -h for short docs and --help for long docs

OPTIONS:
%options%
";

    let mut common = args::common::Config::default();
    let mut select = args::select::Config::default();
    let mut measure = Config::default();
    args::configure(p, USAGE, &mut [&mut common, &mut select, &mut measure])?;

    let combos = select.combinations()?;
    let engines = select.engines()?;
    let repeat = measure.repeat();
    anyhow::ensure!(repeat > 0, "--repeat must be greater than zero");

    let mut table = Table::empty();
    let mut setup = Duration::ZERO;
    let mut searching = Duration::ZERO;
    let mut wtr = tabwriter::TabWriter::new(stdout());
    for &(case, found) in combos.iter() {
        let (inst, time) = util::timeitr(|| {
            Instance::with_engines(case.name(), found, &engines)
        })?;
        setup += time;
        for searcher in inst.searchers() {
            // Check once up front so that a wrong engine is reported before
            // spending any time on it.
            searcher.verify()?;
            let (result, total) = util::timeit(|| {
                for _ in 0..repeat {
                    black_box(searcher.verify()?);
                }
                Ok::<(), regexbench::Error>(())
            });
            result?;
            searching += total;
            log::debug!(
                "{}/{}/{}: {:?} for {} searches",
                searcher.engine().name(),
                case.name(),
                found,
                total,
                repeat,
            );
            if !common.quiet {
                let mean = util::mean(total, repeat);
                writeln!(
                    wtr,
                    "{}\t{}\t{}\t{} ns",
                    case.name(),
                    found,
                    searcher.engine().name(),
                    mean.as_nanos(),
                )?;
            }
        }
    }
    wtr.flush()?;
    table.add("combinations", combos.len());
    table.add("engines", engines.len());
    table.add("searches per engine", repeat);
    table.add("setup time", setup);
    table.add("search time", searching);
    if common.table() {
        table.print(stdout())?;
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Config {
    repeat: Option<u32>,
}

impl Config {
    fn repeat(&self) -> u32 {
        self.repeat.unwrap_or(10_000)
    }
}

impl Configurable for Config {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Long("repeat") => {
                self.repeat = Some(args::parse(p, "--repeat")?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &[Usage] = &[Usage::new(
            "--repeat <n>",
            "Search this many times per engine.",
            r#"
Run this many searches for each engine on each selected combination. The
reported time is the total divided by this number. By default, this is set to
10000.
"#,
        )];
        USAGES
    }
}
