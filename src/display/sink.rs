//! Output sinks for display updates.

use std::fmt;
use std::io::{self, Stdout, Write};

use super::DisplayText;

/// Output format for [`WriterSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// One human-readable line: `text`, or `text (tooltip)`.
    #[default]
    Text,
    /// One JSON object per line: `{"text":..,"tooltip":..}`.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// The rendering surface a widget forwards its updates to.
///
/// Implementations must be `Send` so a widget can move onto its refresh task.
pub trait DisplaySink: Send {
    /// Renders one update.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the surface cannot be written. Callers log
    /// it and keep going; a failed render never stops the refresh loop.
    fn render(&mut self, display: &DisplayText) -> io::Result<()>;
}

/// Sink writing one line per update to any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    format: OutputFormat,
}

impl WriterSink<Stdout> {
    /// Creates a sink writing to standard output.
    #[must_use]
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W> WriterSink<W>
where
    W: Write + Send,
{
    /// Creates a sink over the given writer.
    #[must_use]
    pub const fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Returns the configured format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> DisplaySink for WriterSink<W>
where
    W: Write + Send,
{
    fn render(&mut self, display: &DisplayText) -> io::Result<()> {
        match self.format {
            OutputFormat::Text if display.tooltip.is_empty() => {
                writeln!(self.writer, "{}", display.text)?;
            }
            OutputFormat::Text => {
                writeln!(self.writer, "{} ({})", display.text, display.tooltip)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, display)?;
                writeln!(self.writer)?;
            }
        }

        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_all(format: OutputFormat, displays: &[DisplayText]) -> String {
        let mut sink = WriterSink::new(Vec::new(), format);
        for display in displays {
            sink.render(display).unwrap();
        }
        String::from_utf8(sink.into_inner()).unwrap()
    }

    /// A writer that refuses every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn text_includes_tooltip_in_parentheses() {
        let output = render_all(
            OutputFormat::Text,
            &[DisplayText::new("192.168.1.42", "eth0")],
        );

        assert_eq!(output, "192.168.1.42 (eth0)\n");
    }

    #[test]
    fn text_omits_empty_tooltip() {
        let output = render_all(OutputFormat::Text, &[DisplayText::new("No IP found", "")]);

        assert_eq!(output, "No IP found\n");
    }

    #[test]
    fn json_writes_one_object_per_line() {
        let output = render_all(
            OutputFormat::Json,
            &[
                DisplayText::new("10.0.0.9", "eth0"),
                DisplayText::new("No IP found", ""),
            ],
        );

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, serde_json::json!({"text": "10.0.0.9", "tooltip": "eth0"}));

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second, serde_json::json!({"text": "No IP found", "tooltip": ""}));
    }

    #[test]
    fn write_failure_is_reported() {
        let mut sink = WriterSink::new(BrokenPipe, OutputFormat::Text);

        let error = sink.render(&DisplayText::new("10.0.0.9", "eth0")).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn format_defaults_to_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(WriterSink::stdout(OutputFormat::Json).format(), OutputFormat::Json);
    }

    #[test]
    fn format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
