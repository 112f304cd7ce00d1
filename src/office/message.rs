//! The message record held in a post office box.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boundary marker wrapped around a rendered message block.
const BOUNDARY: &str = "----------------------------------------";

/// Boundary marker used instead when the message is urgent.
const URGENT_BOUNDARY: &str = "!!!!!!!!!!!!!!!  URGENT  !!!!!!!!!!!!!!!";

/// One piece of correspondence between two users.
///
/// A message is created by the caller and handed to
/// [`PostOffice::deliver`](crate::office::PostOffice::deliver), which takes
/// ownership. After delivery the only state change the office ever makes is
/// flipping `read` from `false` to `true` during inbox retrieval; the flag is
/// never reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub sender: String,
    pub recipient: String,
    pub title: String,
    pub body: String,
    /// Urgent messages are delivered to the front of the recipient's box.
    pub urgent: bool,
    /// Read state. Starts `false`, set once by inbox retrieval.
    pub read: bool,
    pub sent_at: DateTime<Utc>,
    /// When the message was first read, if it has been.
    pub read_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a normal-priority message. The read flag always starts false.
    pub fn new(sender: &str, recipient: &str, title: &str, body: &str) -> Self {
        Self {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            urgent: false,
            read: false,
            sent_at: Utc::now(),
            read_at: None,
        }
    }

    /// Create an urgent message, delivered ahead of everything already
    /// waiting in the recipient's box.
    pub fn urgent(sender: &str, recipient: &str, title: &str, body: &str) -> Self {
        Self {
            urgent: true,
            ..Self::new(sender, recipient, title, body)
        }
    }

    /// Character length of the body. The title is not counted.
    pub fn body_len(&self) -> usize {
        self.body.chars().count()
    }

    /// Flip the message to read. Idempotent: the flag and the `read_at`
    /// stamp are only set on the first call.
    pub(crate) fn mark_read(&mut self) {
        if !self.read {
            self.read = true;
            self.read_at = Some(Utc::now());
        }
    }
}

impl fmt::Display for Message {
    /// Render the message as a human-readable block delimited by a boundary
    /// line before and after. Urgent messages swap in an attention-grabbing
    /// boundary; any terminal coloring is left to the presentation layer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let boundary = if self.urgent { URGENT_BOUNDARY } else { BOUNDARY };
        writeln!(f, "{boundary}")?;
        writeln!(f, "Message: {}", self.title)?;
        writeln!(f, "Sender: {}", self.sender)?;
        writeln!(f, "Recipient: {}", self.recipient)?;
        writeln!(f, "Body: {}", self.body)?;
        write!(f, "{boundary}")
    }
}
