use std::{
    fmt::{Debug, Display, Write},
    str::FromStr,
};

use {
    anyhow::Context,
    lexopt::{Arg, Parser, ValueExt},
};

pub mod common;
pub mod select;

/// A group of flags that can be parsed from the command line.
///
/// Each command builds the groups it needs and hands them all to
/// `configure`, which offers every argument to each group in turn.
pub trait Configurable: Debug {
    /// Consume `arg` (and its value from `p`, if it has one) if this group
    /// recognizes it. Returns false if the argument belongs to someone else.
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool>;

    fn usage(&self) -> &[Usage];
}

/// Parse every remaining argument into the given targets.
///
/// `-h` and `--help` print `usage` with `%options%` replaced by the short or
/// long documentation of every target's flags.
pub fn configure(
    p: &mut Parser,
    usage: &str,
    targets: &mut [&mut dyn Configurable],
) -> anyhow::Result<()> {
    while let Some(arg) = p.next()? {
        if let Arg::Short('h') | Arg::Long("help") = arg {
            let mut usages = vec![];
            for t in targets.iter() {
                usages.extend_from_slice(t.usage());
            }
            usages.sort_by_key(|u| u.sort_key());
            let options = if arg == Arg::Short('h') {
                Usage::short(&usages)
            } else {
                Usage::long(&usages)
            };
            let usage = usage.replace("%options%", &options);
            anyhow::bail!("{}", usage.trim());
        }
        // 'arg' borrows from 'p', which the targets need mutably. So we
        // take an owned copy of any long flag name first.
        let long_flag: Option<String> = match arg {
            Arg::Long(name) => Some(name.to_string()),
            _ => None,
        };
        let mut arg = match long_flag {
            Some(ref flag) => Arg::Long(flag),
            None => match arg {
                Arg::Short(c) => Arg::Short(c),
                Arg::Long(_) => unreachable!(),
                Arg::Value(value) => Arg::Value(value),
            },
        };
        let mut recognized = false;
        for t in targets.iter_mut() {
            if t.configure(p, &mut arg)? {
                recognized = true;
                break;
            }
        }
        if !recognized {
            return Err(arg.unexpected().into());
        }
    }
    Ok(())
}

/// Read the next argument as the name of a sub-command.
///
/// If there is no next argument, or if it is `-h`/`--help`, then the usage
/// is returned as an error so that it gets printed.
pub fn next_as_command(usage: &str, p: &mut Parser) -> anyhow::Result<String> {
    let usage = usage.trim();
    let arg = match p.next()? {
        Some(arg) => arg,
        None => anyhow::bail!("{usage}"),
    };
    let cmd = match arg {
        Arg::Value(cmd) => cmd.string()?,
        Arg::Short('h') | Arg::Long("help") => anyhow::bail!("{usage}"),
        arg => return Err(arg.unexpected().into()),
    };
    Ok(cmd)
}

/// Parse the value of the flag `flag_name` into a `T`.
pub fn parse<T>(p: &mut Parser, flag_name: &'static str) -> anyhow::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display + Debug + Send + Sync + 'static,
{
    let value = p.value().context(flag_name)?;
    let value = match value.to_str() {
        Some(value) => value,
        None => {
            let err = lexopt::Error::NonUnicodeValue(value.into());
            return Err(anyhow::Error::from(err).context(flag_name));
        }
    };
    value.parse().map_err(|err| anyhow::Error::msg(err).context(flag_name))
}

/// The documentation for one flag.
#[derive(Clone, Copy, Debug)]
pub struct Usage {
    /// How the flag is written, e.g., `-c, --case <name>`.
    pub format: &'static str,
    /// A one line description.
    pub short: &'static str,
    /// A longer description, possibly several paragraphs.
    pub long: &'static str,
}

impl Usage {
    pub const fn new(
        format: &'static str,
        short: &'static str,
        long: &'static str,
    ) -> Usage {
        Usage { format, short, long }
    }

    /// Flags are sorted by their long name when they have one.
    fn sort_key(&self) -> &'static str {
        self.format.split_once(", ").map(|(_, long)| long).unwrap_or(self.format)
    }

    /// Two columns: each flag's format and its short description.
    pub fn short(usages: &[Usage]) -> String {
        const GAP: usize = 2;

        let width = usages.iter().map(|u| u.format.len()).max().unwrap_or(0);
        let mut out = String::new();
        for u in usages.iter() {
            let pad = " ".repeat(GAP + width - u.format.len());
            // Writing to a String never fails.
            let _ = writeln!(out, "    {}{}{}", u.format, pad, u.short);
        }
        out
    }

    /// Each flag's format followed by its long description, wrapped and
    /// indented beneath it.
    pub fn long(usages: &[Usage]) -> String {
        let wrap = textwrap::Options::new(79)
            .initial_indent("        ")
            .subsequent_indent("        ");
        let mut out = String::new();
        for (i, u) in usages.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "    {}", u.format);
            for (j, paragraph) in u.long.trim().split("\n\n").enumerate() {
                if j > 0 {
                    out.push('\n');
                }
                let flat = paragraph.replace('\n', " ");
                for line in textwrap::wrap(&flat, &wrap) {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
        out
    }
}
