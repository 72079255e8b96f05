use crate::{
    engine::{Engine, Haystack, Input, Search},
    error::Error,
};

/// The `regex-lite` crate.
///
/// Since regex-lite has no API for searching byte slices, this always
/// searches `&str`.
#[derive(Clone, Copy, Debug)]
pub struct Lite;

impl Engine for Lite {
    fn name(&self) -> &'static str {
        "regex-lite"
    }

    fn input(&self) -> Input {
        Input::Text
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
        let re = regex_lite::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(re))
    }
}

impl Search for regex_lite::Regex {
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error> {
        Ok(self.is_match(haystack.text()))
    }
}
