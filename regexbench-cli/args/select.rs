use {
    lexopt::{Arg, Parser},
    regexbench::{
        case::{self, Case},
        engine::{self, Engine},
    },
};

use crate::args::{self, Configurable, Usage};

/// Flags that narrow down which combinations and engines a command runs.
///
/// With no flags, every valid (case, outcome) combination and every enabled
/// engine is selected.
#[derive(Debug, Default)]
pub struct Config {
    cases: Vec<String>,
    engines: Vec<String>,
    found: Option<bool>,
}

impl Config {
    /// Returns the selected (case, outcome) combinations in table order.
    ///
    /// Naming a case that doesn't exist is an error. So is naming a case
    /// along with an outcome it doesn't support, since that combination
    /// could never be measured.
    pub fn combinations(&self) -> anyhow::Result<Vec<(&'static Case, bool)>> {
        for name in self.cases.iter() {
            let case = match case::find(name) {
                Some(case) => case,
                None => anyhow::bail!("unknown case '{}'", name),
            };
            if let Some(found) = self.found {
                if !case.supports(found) {
                    // Let the library phrase the error.
                    case::resolve(name, found)?;
                }
            }
        }
        let selected = case::combinations()
            .filter(|&(case, found)| {
                let case_ok = self.cases.is_empty()
                    || self.cases.iter().any(|name| name == case.name());
                let found_ok = self.found.map_or(true, |want| want == found);
                case_ok && found_ok
            })
            .collect();
        Ok(selected)
    }

    /// Returns the selected engines in their canonical order.
    pub fn engines(&self) -> anyhow::Result<Vec<&'static dyn Engine>> {
        for name in self.engines.iter() {
            engine::find(name)?;
        }
        let selected = engine::all()
            .iter()
            .copied()
            .filter(|e| {
                self.engines.is_empty()
                    || self.engines.iter().any(|name| name == e.name())
            })
            .collect();
        Ok(selected)
    }
}

impl Configurable for Config {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('c') | Arg::Long("case") => {
                self.cases.push(args::parse(p, "-c/--case")?);
            }
            Arg::Short('e') | Arg::Long("engine") => {
                self.engines.push(args::parse(p, "-e/--engine")?);
            }
            Arg::Long("found") => {
                self.found = Some(args::parse(p, "--found")?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &'static [Usage] = &[
            Usage::new(
                "-c, --case <name>",
                "Select a case by name.",
                r#"
Select a benchmark case by its name, e.g., 'extract a1'. This flag may be
given multiple times to select multiple cases. When absent, every case is
selected.

Use 'regexbench list' to see the names of all cases.
"#,
            ),
            Usage::new(
                "-e, --engine <name>",
                "Select an engine by name.",
                r#"
Select a regex engine by its name, e.g., 'regex' or 'fancy+decode'. This flag
may be given multiple times to select multiple engines. When absent, every
enabled engine is selected.

Use 'regexbench engines' to see the names of all enabled engines.
"#,
            ),
            Usage::new(
                "--found <true|false>",
                "Select only one outcome.",
                r#"
Select only the combinations whose expected outcome is the one given. When
absent, both outcomes are selected for every case that supports them.

It is an error to combine this with -c/--case when the named case does not
support the outcome given.
"#,
            ),
        ];
        USAGES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_by_default() {
        let config = Config::default();
        assert_eq!(
            case::combinations().count(),
            config.combinations().unwrap().len(),
        );
        assert_eq!(engine::all().len(), config.engines().unwrap().len());
    }

    #[test]
    fn one_outcome() {
        let config = Config { found: Some(false), ..Config::default() };
        let combos = config.combinations().unwrap();
        assert!(combos.iter().all(|&(_, found)| !found));
        assert!(combos.iter().any(|&(c, _)| c.name() == "a.*a.*i"));
        assert!(combos.iter().all(|&(c, _)| c.name() != "extract 0"));
    }

    #[test]
    fn invalid_combination_is_an_error() {
        let config = Config {
            cases: vec!["extract 0".to_string()],
            found: Some(false),
            ..Config::default()
        };
        let err = config.combinations().unwrap_err();
        assert!(err.to_string().contains("invalid combination"), "{}", err);
    }

    #[test]
    fn unknown_names_are_errors() {
        let config =
            Config { cases: vec!["nope".to_string()], ..Config::default() };
        assert!(config.combinations().is_err());
        let config =
            Config { engines: vec!["nope".to_string()], ..Config::default() };
        assert!(config.engines().is_err());
    }
}
