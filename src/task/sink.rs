use std::io::{self, Write};

/// Line-oriented sink for computed report values.
///
/// Computations write through a sink instead of an ambient console stream,
/// so harnesses can capture output.
pub trait OutputSink {
    /// Write one line, excluding the terminator.
    fn write_line(&mut self, line: &str);
}

/// Sink writing to process stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        // a closed stdout must not fail the report
        let _ = writeln!(out, "{line}");
    }
}

/// Sink forwarding lines into a flume channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: flume::Sender<String>,
}

impl ChannelSink {
    /// Unbounded channel sink plus its receiving half.
    pub fn unbounded() -> (Self, flume::Receiver<String>) {
        let (tx, rx) = flume::unbounded();
        (Self { tx }, rx)
    }
}

impl OutputSink for ChannelSink {
    fn write_line(&mut self, line: &str) {
        // a dropped receiver means nobody is reading the report
        let _ = self.tx.send(line.to_string());
    }
}

impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelSink, OutputSink};

    #[test]
    fn channel_sink_hands_lines_to_the_receiver() {
        let (mut sink, rx) = ChannelSink::unbounded();
        sink.write_line("one");
        sink.write_line("two");
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn vec_sink_captures_lines_in_order() {
        let mut lines: Vec<String> = Vec::new();
        lines.write_line("a");
        lines.write_line("b");
        assert_eq!(lines, vec!["a", "b"]);
    }
}
