use std::borrow::Cow;

/// Builds the single frame a publisher sends: topic and data joined by one space.
///
/// Subscribers filter on raw prefix bytes, so a subscription to `t1` also
/// matches frames published on `t10`.
pub fn encode_frame(topic: &str, data: &str) -> String {
    format!("{topic} {data}")
}

/// A frame as delivered to a subscriber, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Received {
    frame: Vec<u8>,
}

impl Received {
    pub fn new(frame: Vec<u8>) -> Self {
        Self { frame }
    }

    /// Everything before the first space, or the whole frame if it has none.
    pub fn topic(&self) -> &[u8] {
        match self.split_at_space() {
            Some(at) => &self.frame[..at],
            None => &self.frame,
        }
    }

    /// Everything after the first space; empty if the frame has no space.
    pub fn payload(&self) -> &[u8] {
        match self.split_at_space() {
            Some(at) => &self.frame[at + 1..],
            None => &[],
        }
    }

    /// Lossy UTF-8 rendering for log lines.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.frame)
    }

    fn split_at_space(&self) -> Option<usize> {
        self.frame.iter().position(|b| *b == b' ')
    }
}
