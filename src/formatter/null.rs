use std::io;

use super::Formatter;
use crate::event::Event;

/// Formatter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormatter;

impl Formatter for NullFormatter {
    fn handle(&mut self, _event: &Event<'_>) -> io::Result<()> {
        Ok(())
    }
}
