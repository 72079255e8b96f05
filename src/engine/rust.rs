use crate::{
    engine::{Engine, Haystack, Input, Search},
    error::Error,
};

/// The `regex` crate's top-level API, searching `&str`.
#[derive(Clone, Copy, Debug)]
pub struct Regex;

impl Engine for Regex {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn input(&self) -> Input {
        Input::Text
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
        let re = regex::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(re))
    }
}

impl Search for regex::Regex {
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error> {
        Ok(self.is_match(haystack.text()))
    }
}

/// The `regex` crate's byte oriented API, searching `&[u8]`.
///
/// Unicode mode stays enabled, so `\w` and friends mean the same thing
/// they do for [`Regex`].
#[derive(Clone, Copy, Debug)]
pub struct RegexBytes;

impl Engine for RegexBytes {
    fn name(&self) -> &'static str {
        "regex-bytes"
    }

    fn input(&self) -> Input {
        Input::Bytes
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
        let re = regex::bytes::RegexBuilder::new(pattern)
            .unicode(true)
            .build()
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(re))
    }
}

impl Search for regex::bytes::Regex {
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error> {
        Ok(self.is_match(haystack.bytes()))
    }
}
