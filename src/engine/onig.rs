use onig::{RegexOptions, SearchOptions, Syntax};

use crate::{
    engine::{Engine, Haystack, Input, Search},
    error::Error,
};

/// Oniguruma, through the `onig` crate, using its Java syntax.
#[derive(Clone, Copy, Debug)]
pub struct Onig;

impl Engine for Onig {
    fn name(&self) -> &'static str {
        "onig"
    }

    fn input(&self) -> Input {
        Input::Text
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
        let re = onig::Regex::with_options(
            pattern,
            RegexOptions::REGEX_OPTION_NONE,
            Syntax::java(),
        )
        .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(re))
    }
}

impl Search for onig::Regex {
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error> {
        // Gah. onig's is_match is anchored, but search is not.
        let text = haystack.text();
        let at = self.search_with_options(
            text,
            0,
            text.len(),
            SearchOptions::SEARCH_OPTION_NONE,
            None,
        );
        Ok(at.is_some())
    }
}
