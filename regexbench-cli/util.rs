use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Time an arbitrary operation.
pub fn timeit<T>(run: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let t = run();
    (t, start.elapsed())
}

/// Like `timeit`, but for operations that can fail. The duration is only
/// returned on success.
pub fn timeitr<T, E>(
    run: impl FnOnce() -> Result<T, E>,
) -> Result<(T, Duration), E> {
    let (result, time) = timeit(run);
    Ok((result?, time))
}

/// Divide a total duration evenly over `count` operations.
///
/// A count of zero yields a zero duration.
pub fn mean(total: Duration, count: u32) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    total / count
}

/// Right aligned `label: value` pairs, printed after a command's main output
/// to summarize what it did.
#[derive(Debug)]
pub struct Table {
    pairs: Vec<(String, Box<dyn std::fmt::Debug>)>,
}

impl Table {
    pub fn empty() -> Table {
        Table { pairs: vec![] }
    }

    pub fn add<D: std::fmt::Debug + 'static>(&mut self, label: &str, value: D) {
        self.pairs.push((label.to_string(), Box::new(value)));
    }

    pub fn print<W: io::Write>(&self, wtr: W) -> io::Result<()> {
        let mut wtr = tabwriter::TabWriter::new(wtr)
            .alignment(tabwriter::Alignment::Right);
        for (label, value) in self.pairs.iter() {
            writeln!(wtr, "{label}:\t{value:?}")?;
        }
        wtr.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(Duration::ZERO, mean(Duration::from_secs(1), 0));
        assert_eq!(
            Duration::from_millis(250),
            mean(Duration::from_secs(1), 4),
        );
    }

    #[test]
    fn table_aligns_labels() {
        let mut table = Table::empty();
        table.add("engines", 6);
        table.add("combinations", 34);
        let mut out = vec![];
        table.print(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(2, lines.len());
        assert!(lines[0].trim_start().starts_with("engines:"));
        assert!(lines[0].ends_with('6'), "{:?}", lines[0]);
        assert!(lines[1].trim_start().starts_with("combinations:"));
        assert!(lines[1].ends_with("34"), "{:?}", lines[1]);
    }
}
