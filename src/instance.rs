use crate::{
    case::{self, Case},
    engine::{self, Engine, Haystack, Search},
    error::Error,
};

/// Everything needed to benchmark one (case, outcome) combination.
///
/// An instance owns the input derived for the outcome and one compiled
/// pattern per engine that accepted it. Engines that rejected the pattern
/// keep their rejection instead, and are never measured: asking to search
/// with one reports the rejection rather than a made up answer.
///
/// Instances are built once per combination and then searched many times.
/// They are never shared between combinations, since both the input and
/// the compiled patterns differ.
pub struct Instance {
    case: &'static Case,
    found: bool,
    input: String,
    compiled: Vec<Compiled>,
}

struct Compiled {
    engine: &'static dyn Engine,
    result: Result<Box<dyn Search>, Error>,
}

impl Instance {
    /// Set up the given case and outcome for every enabled engine.
    pub fn new(name: &str, found: bool) -> Result<Instance, Error> {
        Instance::with_engines(name, found, engine::all())
    }

    /// Set up the given case and outcome for only the given engines.
    ///
    /// This fails if the case doesn't exist or doesn't support `found`. An
    /// engine rejecting the pattern is not a failure.
    pub fn with_engines(
        name: &str,
        found: bool,
        engines: &[&'static dyn Engine],
    ) -> Result<Instance, Error> {
        let resolved = case::resolve(name, found)?;
        let case = resolved.case();
        let mut compiled = Vec::with_capacity(engines.len());
        for &engine in engines {
            let result = match engine.compile(case.pattern()) {
                Ok(search) => Ok(search),
                Err(err) if err.is_compile_rejected() => {
                    log::debug!(
                        "excluding {} from case '{}': {}",
                        engine.name(),
                        case.name(),
                        err,
                    );
                    Err(err)
                }
                Err(err) => return Err(err),
            };
            compiled.push(Compiled { engine, result });
        }
        log::trace!(
            "set up case '{}' (found={}) with {} of {} engines",
            case.name(),
            found,
            compiled.iter().filter(|c| c.result.is_ok()).count(),
            compiled.len(),
        );
        Ok(Instance { case, found, input: resolved.into_input(), compiled })
    }

    pub fn case(&self) -> &'static Case {
        self.case
    }

    /// The expected outcome of every search.
    pub fn found(&self) -> bool {
        self.found
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn haystack(&self) -> Haystack<'_> {
        Haystack::new(&self.input)
    }

    /// Returns a searcher for every engine that accepted the pattern, in
    /// the order the engines were given.
    pub fn searchers(&self) -> impl Iterator<Item = Searcher<'_>> + '_ {
        self.compiled.iter().filter_map(move |c| {
            c.result.as_ref().ok().map(|search| self.searcher_for(c, &**search))
        })
    }

    /// Returns every engine that rejected the pattern along with its
    /// rejection.
    pub fn rejections(
        &self,
    ) -> impl Iterator<Item = (&'static dyn Engine, &Error)> + '_ {
        self.compiled
            .iter()
            .filter_map(|c| c.result.as_ref().err().map(|err| (c.engine, err)))
    }

    /// Returns the searcher for the named engine.
    ///
    /// If the engine rejected the pattern, then its rejection is returned.
    /// If this instance wasn't set up with the engine, then an unknown
    /// engine error is returned.
    pub fn searcher(&self, engine: &str) -> Result<Searcher<'_>, Error> {
        let c = self
            .compiled
            .iter()
            .find(|c| c.engine.name() == engine)
            .ok_or_else(|| Error::unknown_engine(engine))?;
        match c.result {
            Ok(ref search) => Ok(self.searcher_for(c, &**search)),
            Err(ref err) => Err(err.clone()),
        }
    }

    /// Run one search with the named engine.
    pub fn execute(&self, engine: &str) -> Result<bool, Error> {
        self.searcher(engine)?.execute()
    }

    /// Run one search with every engine that accepted the pattern and
    /// check each result against the expected outcome.
    pub fn verify_all(&self) -> Result<(), Error> {
        for searcher in self.searchers() {
            searcher.verify()?;
        }
        Ok(())
    }

    fn searcher_for<'i>(
        &'i self,
        c: &'i Compiled,
        search: &'i dyn Search,
    ) -> Searcher<'i> {
        Searcher {
            case: self.case,
            expected: self.found,
            engine: c.engine,
            search,
            haystack: self.haystack(),
        }
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let accepted: Vec<&str> =
            self.searchers().map(|s| s.engine().name()).collect();
        f.debug_struct("Instance")
            .field("case", &self.case.name())
            .field("found", &self.found)
            .field("input", &self.input)
            .field("accepted", &accepted)
            .finish()
    }
}

/// One engine's compiled pattern bound to an instance's input.
///
/// This is what a benchmark runner calls repeatedly.
#[derive(Clone, Copy)]
pub struct Searcher<'i> {
    case: &'static Case,
    expected: bool,
    engine: &'static dyn Engine,
    search: &'i dyn Search,
    haystack: Haystack<'i>,
}

impl<'i> Searcher<'i> {
    pub fn engine(&self) -> &'static dyn Engine {
        self.engine
    }

    pub fn case(&self) -> &'static Case {
        self.case
    }

    /// Run exactly one search and return whether the pattern was found.
    pub fn execute(&self) -> Result<bool, Error> {
        self.search.search(&self.haystack)
    }

    /// Run exactly one search and check the result.
    ///
    /// A result that differs from the expected outcome is returned as an
    /// outcome mismatch error. Callers must treat that as fatal.
    pub fn verify(&self) -> Result<bool, Error> {
        let found = self.execute()?;
        if found != self.expected {
            return Err(Error::outcome_mismatch(
                self.engine.name(),
                self.case.name(),
                self.expected,
            ));
        }
        Ok(found)
    }
}

impl<'i> std::fmt::Debug for Searcher<'i> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("case", &self.case.name())
            .field("engine", &self.engine.name())
            .field("expected", &self.expected)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    struct Always(bool);

    impl Engine for Always {
        fn name(&self) -> &'static str {
            if self.0 {
                "always"
            } else {
                "never"
            }
        }

        fn input(&self) -> engine::Input {
            engine::Input::Text
        }

        fn compile(&self, _: &str) -> Result<Box<dyn Search>, Error> {
            Ok(Box::new(Answer(self.0)))
        }
    }

    struct Answer(bool);

    impl Search for Answer {
        fn search(&self, _: &Haystack<'_>) -> Result<bool, Error> {
            Ok(self.0)
        }
    }

    struct Picky;

    impl Engine for Picky {
        fn name(&self) -> &'static str {
            "picky"
        }

        fn input(&self) -> engine::Input {
            engine::Input::Bytes
        }

        fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
            Err(Error::compile(self.name(), format!("no thanks: {}", pattern)))
        }
    }

    static ALWAYS: Always = Always(true);
    static NEVER: Always = Always(false);
    static PICKY: Picky = Picky;

    #[test]
    fn wrong_engine_is_a_mismatch() {
        let inst =
            Instance::with_engines("[0-9]+", false, &[&ALWAYS, &NEVER])
                .unwrap();
        assert_eq!(Ok(false), inst.searcher("never").unwrap().verify());
        let err = inst.searcher("always").unwrap().verify().unwrap_err();
        assert_eq!(
            &ErrorKind::OutcomeMismatch {
                engine: "always",
                case: "[0-9]+",
                expected: false,
            },
            err.kind(),
        );
        assert!(inst.verify_all().is_err());
    }

    #[test]
    fn rejecting_engine_is_excluded() {
        let inst =
            Instance::with_engines("extract 0", true, &[&PICKY, &ALWAYS])
                .unwrap();
        let names: Vec<&str> =
            inst.searchers().map(|s| s.engine().name()).collect();
        assert_eq!(vec!["always"], names);
        let rejected: Vec<&str> =
            inst.rejections().map(|(e, _)| e.name()).collect();
        assert_eq!(vec!["picky"], rejected);
        assert!(inst.execute("picky").unwrap_err().is_compile_rejected());
        assert!(inst.verify_all().is_ok());
    }

    #[test]
    fn unknown_engine() {
        let inst = Instance::with_engines("x", true, &[&ALWAYS]).unwrap();
        assert_eq!(
            &ErrorKind::UnknownEngine { name: "never".to_string() },
            inst.execute("never").unwrap_err().kind(),
        );
    }

    #[test]
    fn invalid_combination_fails_setup() {
        let err = Instance::new("extract 1", false).unwrap_err();
        assert_eq!(
            &ErrorKind::InvalidCombination { case: "extract 1", found: false },
            err.kind(),
        );
    }

    #[test]
    fn haystack_views_agree() {
        let inst = Instance::with_engines("^https?://", true, &[]).unwrap();
        let haystack = inst.haystack();
        assert_eq!("http://www.facebook.com", haystack.text());
        assert_eq!(b"http://www.facebook.com", haystack.bytes());
        assert_eq!(0, inst.searchers().count());
    }
}
