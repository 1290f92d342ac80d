use std::io::{self, Write};

use base64::Engine;

/// Destination for the copy-movie-id action. Injected so rendering code can
/// run against a capture buffer outside a real terminal.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard access via the OSC 52 escape sequence, which most modern
/// terminal emulators honor without needing a display server.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ClipboardWriter for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{}\x07", encoded)?;
        self.out.flush()
    }
}
