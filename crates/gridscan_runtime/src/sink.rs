//! Response reporting.

/// Where human-readable responses to the invoking operator go.
///
/// The external command layer supplies the implementation (chat reply,
/// console line, RCON packet); the engine only ever pushes strings.
pub trait ResponseSink {
    /// Delivers one message to the operator.
    fn respond(&mut self, message: &str);
}

/// A sink that collects messages in memory, for tests and batch callers.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    messages: Vec<String>,
}

impl BufferSink {
    /// Creates an empty buffer sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl ResponseSink for BufferSink {
    fn respond(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
