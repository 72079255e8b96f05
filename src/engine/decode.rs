use crate::{
    engine::{Engine, Haystack, Input, Search},
    error::{Error, ErrorKind},
};

/// Wraps a text oriented engine such that every search first decodes the
/// haystack's bytes into a freshly allocated `String`.
///
/// This exists to measure the cost of converting from bytes on every call,
/// as a caller that only has bytes would have to. It is a separately named
/// engine so that the conversion is never mixed into the timings of the
/// wrapped engine by accident.
#[derive(Clone, Copy, Debug)]
pub struct Decode<E> {
    name: &'static str,
    engine: E,
}

impl<E: Engine> Decode<E> {
    pub const fn new(name: &'static str, engine: E) -> Decode<E> {
        Decode { name, engine }
    }
}

impl<E: Engine> Engine for Decode<E> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn input(&self) -> Input {
        Input::Decoded
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
        let inner = match self.engine.compile(pattern) {
            Ok(inner) => inner,
            Err(err) => {
                // Report rejections under our own name, since that's the
                // engine the caller asked for.
                if let ErrorKind::CompileRejected { ref message, .. } =
                    *err.kind()
                {
                    return Err(Error::compile(self.name, message));
                }
                return Err(err);
            }
        };
        Ok(Box::new(DecodeSearch { name: self.name, inner }))
    }
}

struct DecodeSearch {
    name: &'static str,
    inner: Box<dyn Search>,
}

impl Search for DecodeSearch {
    fn search(&self, haystack: &Haystack<'_>) -> Result<bool, Error> {
        let text = String::from_utf8(haystack.bytes().to_vec())
            .map_err(|err| Error::search(self.name, err))?;
        self.inner.search(&Haystack::new(&text)).map_err(|err| {
            if let ErrorKind::Search { ref message, .. } = *err.kind() {
                return Error::search(self.name, message);
            }
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl Engine for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn input(&self) -> Input {
            Input::Text
        }

        fn compile(&self, pattern: &str) -> Result<Box<dyn Search>, Error> {
            if pattern.starts_with('(') {
                return Err(Error::compile(self.name(), "unbalanced"));
            }
            Ok(Box::new(Failing))
        }
    }

    impl Search for Failing {
        fn search(&self, _: &Haystack<'_>) -> Result<bool, Error> {
            Err(Error::search("failing", "backtrack limit exceeded"))
        }
    }

    #[test]
    fn search_errors_carry_decode_name() {
        let decode = Decode::new("failing+decode", Failing);
        let re = match decode.compile("abc") {
            Ok(re) => re,
            Err(err) => panic!("{}", err),
        };
        let err = re.search(&Haystack::new("abc")).unwrap_err();
        assert_eq!(
            &ErrorKind::Search {
                engine: "failing+decode",
                message: "backtrack limit exceeded".to_string(),
            },
            err.kind(),
        );
    }

    #[test]
    fn rejections_carry_decode_name() {
        let decode = Decode::new("failing+decode", Failing);
        let err = match decode.compile("(abc") {
            Ok(_) => panic!("'(abc' was accepted"),
            Err(err) => err,
        };
        assert_eq!(
            &ErrorKind::CompileRejected {
                engine: "failing+decode",
                message: "unbalanced".to_string(),
            },
            err.kind(),
        );
    }
}
