use crate::{
    engine::{Engine, Haystack, Input, Search},
    error::Error,
};

/// The `fancy-regex` crate, a backtracking engine that supports
/// look-around and backreferences. Patterns without such features are
/// handed to the `regex` crate wholesale.
#[derive(Clone, Copy, Debug)]
pub struct Fancy;

impl Engine for Fancy {
    fn name(&self) -> &'static str {
        "fancy"
    }

    fn input(&self) -> Input {
        Input::Text
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
        let re = fancy_regex::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(re))
    }
}

impl Search for fancy_regex::Regex {
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error> {
        // The only failure here is running into the backtrack limit.
        self.is_match(haystack.text())
            .map_err(|err| Error::search(Fancy.name(), err))
    }
}
