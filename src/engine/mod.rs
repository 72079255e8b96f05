/*!
Adapters that present every regex engine through one two-phase interface.

An [`Engine`] compiles a pattern into a [`Search`], and a `Search` runs
exactly one unanchored search over a [`Haystack`], reporting whether the
pattern occurs anywhere in it. Patterns that need anchoring say so with
`^`/`$`, so every adapter must put its engine into "search" mode
explicitly rather than relying on that engine's default. (Oniguruma's
`is_match`, for example, is anchored at the start.)

Engines differ in what they search: some take raw bytes and some take
`&str`. A `Haystack` carries both views of the same input, so neither
representation costs anything per call. The one exception is the
explicitly named `+decode` variants, which decode the bytes into a fresh
`String` on every call to measure what that conversion costs.
*/

use crate::error::Error;

pub use self::{
    decode::Decode, fancy::Fancy, lite::Lite, meta::Meta, rust::Regex,
    rust::RegexBytes,
};

#[cfg(feature = "re-onig")]
pub use self::onig::Onig;
#[cfg(feature = "re-pcre2")]
pub use self::pcre2::Pcre2;

mod decode;
mod fancy;
mod lite;
mod meta;
#[cfg(feature = "re-onig")]
mod onig;
#[cfg(feature = "re-pcre2")]
mod pcre2;
mod rust;

/// A regex engine that can compile patterns.
///
/// Implementations are expected to be cheap, stateless values. All state
/// lives in what `compile` returns.
pub trait Engine: Sync {
    /// A unique, stable name used to select and report this engine.
    fn name(&self) -> &'static str;

    /// The representation of the haystack this engine searches.
    fn input(&self) -> Input;

    /// Compile the given pattern.
    ///
    /// If the engine doesn't support the pattern's syntax, then this
    /// returns an error for which `Error::is_compile_rejected` is true.
    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error>;
}

/// A compiled pattern.
pub trait Search {
    /// Report whether the pattern occurs anywhere in the haystack.
    ///
    /// This performs exactly one search. It returns an error only when the
    /// engine itself fails, e.g., when a backtracking limit is exceeded.
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error>;
}

/// What an engine searches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Input {
    /// The UTF-8 encoded bytes of the input.
    Bytes,
    /// The input as a `&str`.
    Text,
    /// A `String` decoded from the bytes on every search.
    Decoded,
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match *self {
            Input::Bytes => "bytes",
            Input::Text => "text",
            Input::Decoded => "decoded",
        };
        write!(f, "{}", name)
    }
}

/// An input, viewed both as text and as its UTF-8 encoding.
#[derive(Clone, Copy, Debug)]
pub struct Haystack<'h> {
    text: &'h str,
}

impl<'h> Haystack<'h> {
    pub fn new(text: &'h str) -> Haystack<'h> {
        Haystack { text }
    }

    pub fn text(&self) -> &'h str {
        self.text
    }

    pub fn bytes(&self) -> &'h [u8] {
        self.text.as_bytes()
    }
}

static ENGINES: &[&dyn Engine] = &[
    &Regex,
    &RegexBytes,
    &Lite,
    &Meta,
    &Fancy,
    &Decode::new("fancy+decode", Fancy),
    #[cfg(feature = "re-onig")]
    &Onig,
    #[cfg(feature = "re-pcre2")]
    &Pcre2,
];

/// Returns every enabled engine, in a fixed order.
pub fn all() -> &'static [&'static dyn Engine] {
    ENGINES
}

/// Look up an enabled engine by name.
pub fn find(name: &str) -> Result<&'static dyn Engine, Error> {
    ENGINES
        .iter()
        .copied()
        .find(|e| e.name() == name)
        .ok_or_else(|| Error::unknown_engine(name))
}
