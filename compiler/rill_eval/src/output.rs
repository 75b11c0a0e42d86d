//! Where `show` output goes.

/// Receives one line per executed `show` statement.
///
/// The default sink writes to stdout; tests plug in a `Vec<String>` to
/// assert on program output.
pub trait OutputSink {
    fn show(&mut self, text: &str);
}

/// Writes each shown value to stdout, one per line.
#[derive(Default, Debug)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Collects shown lines for assertions.
impl OutputSink for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}
