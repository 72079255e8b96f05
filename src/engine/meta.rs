use regex_automata::{meta, Anchored, Input as SearchInput};

use crate::{
    engine::{Engine, Haystack, Input, Search},
    error::Error,
};

/// The meta regex engine from `regex-automata`, searching `&[u8]`.
///
/// This is what the `regex` crate uses internally, but driven through the
/// lower level `Input` API so that the anchor mode is stated rather than
/// defaulted.
#[derive(Clone, Copy, Debug)]
pub struct Meta;

impl Engine for Meta {
    fn name(&self) -> &'static str {
        "meta"
    }

    fn input(&self) -> Input {
        Input::Bytes
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
        let re = meta::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(re))
    }
}

impl Search for meta::Regex {
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error> {
        let input = SearchInput::new(haystack.bytes()).anchored(Anchored::No);
        Ok(self.is_match(input))
    }
}
