use crate::diagnostic::Diagnostic;

/// Receives the parser trace (through `io::Write`) and every diagnostic as
/// soon as it is found.
pub trait ParseFeedback: std::io::Write {
    fn diagnostic(&mut self, diagnostic: &Diagnostic);
}

#[derive(Default)]
pub struct SilentParseFeedback();

impl ParseFeedback for SilentParseFeedback {
    fn diagnostic(&mut self, _diagnostic: &Diagnostic) {}
}

impl std::io::Write for SilentParseFeedback {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
