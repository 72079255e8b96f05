use pcre2::bytes::RegexBuilder;

use crate::{
    engine::{Engine, Haystack, Input, Search},
    error::Error,
};

/// PCRE2, through the `pcre2` crate, searching `&[u8]`.
///
/// The JIT is used when the library was built with it.
#[derive(Clone, Copy, Debug)]
pub struct Pcre2;

impl Engine for Pcre2 {
    fn name(&self) -> &'static str {
        "pcre2"
    }

    fn input(&self) -> Input {
        Input::Bytes
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
        let re = RegexBuilder::new()
            .jit_if_available(true)
            .build(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(re))
    }
}

impl Search for pcre2::bytes::Regex {
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error> {
        self.is_match(haystack.bytes())
            .map_err(|err| Error::search("pcre2", err))
    }
}
