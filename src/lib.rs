/*!
This crate compares the search performance of several regex engines on a
fixed table of patterns and inputs taken from real queries.

The table lives in [`case`]. Each case names a pattern and, for each outcome
it supports, the input to search. The engines live in [`engine`], each one
an adapter that compiles a pattern and then runs a single unanchored search
that reports whether the pattern was found.

An [`Instance`] ties the two together: it resolves one (case, outcome)
combination, compiles the pattern with every engine that accepts its
syntax and hands out a [`Searcher`] per engine for a benchmark runner to
call repeatedly. Every result is checked against the expected outcome, since
a fast engine that gives the wrong answer isn't worth timing.

# Example

```no_run
use regexbench::{case, Instance};

for (case, found) in case::combinations() {
    let instance = Instance::new(case.name(), found)?;
    for searcher in instance.searchers() {
        searcher.verify()?;
    }
}
# Ok::<(), regexbench::Error>(())
```

# Crate features

* **re-onig** - Adds an engine backed by Oniguruma via the `onig` crate.
* **re-pcre2** - Adds an engine backed by PCRE2 via the `pcre2` crate.

Both build a C library, so neither is enabled by default.
*/

#![deny(missing_debug_implementations)]

pub use crate::{
    engine::{Engine, Haystack, Search},
    error::{Error, ErrorKind},
    instance::{Instance, Searcher},
};

pub mod case;
pub mod engine;
mod error;
mod instance;
