//! Line sinks for help output.

use std::io::{self, Write};

/// Append-only line writer. Each call emits one line.
pub trait Ui {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory.
impl Ui for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes lines to any `io::Write`, e.g. a locked stdout.
pub struct WriterUi<W: Write> {
    out: W,
}

impl<W: Write> WriterUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Ui for WriterUi<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_ui_terminates_lines() {
        let mut ui = WriterUi::new(Vec::new());
        ui.write_line("first").unwrap();
        ui.write_line("").unwrap();
        ui.write_line("second").unwrap();
        assert_eq!(String::from_utf8(ui.into_inner()).unwrap(), "first\n\nsecond\n");
    }
}
