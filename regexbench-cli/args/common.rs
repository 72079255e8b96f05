use lexopt::{Arg, Parser};

use crate::args::{Configurable, Usage};

/// Flags that control how much a command prints.
#[derive(Debug, Default)]
pub struct Config {
    pub quiet: bool,
    pub verbose: bool,
    pub no_table: bool,
}

impl Config {
    pub fn table(&self) -> bool {
        !self.no_table
    }
}

impl Configurable for Config {
    fn configure(
        &mut self,
        _: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('q') | Arg::Long("quiet") => {
                self.quiet = true;
            }
            Arg::Long("verbose") => {
                self.verbose = true;
            }
            Arg::Long("no-table") => {
                self.no_table = true;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &'static [Usage] = &[
            Usage::new(
                "-q, --quiet",
                "Only print failures.",
                r#"
Suppress the per-row output of a command and print only rows that represent a
failure, e.g., an engine that reported the wrong outcome.
"#,
            ),
            Usage::new(
                "--verbose",
                "Add more output.",
                r#"
Print more detail. For 'list', this includes each case's pattern and inputs.
For 'check', this includes the reason an engine rejected a pattern.
"#,
            ),
            Usage::new(
                "--no-table",
                "Omit the summary table.",
                r#"
Most commands finish by printing a small table summarizing what they did,
such as how long setup took. This flag suppresses that table.
"#,
            ),
        ];
        USAGES
    }
}
