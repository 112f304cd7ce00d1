//! # Post Office Module
//!
//! The in-memory mailbox store. A [`PostOffice`] is bound at construction to
//! a fixed set of usernames and owns one box per user: an ordered sequence of
//! [`Message`] values.
//!
//! Three operations cover the message lifecycle:
//!
//! - [`PostOffice::deliver`] - priority insertion (urgent messages go to the
//!   front of the box) with a store-wide, strictly increasing delivery id.
//! - [`PostOffice::read_inbox`] - retrieval over a front-anchored window,
//!   flipping unread messages to read and returning exactly those.
//! - [`PostOffice::search_inbox`] - pure, case-sensitive substring search
//!   over title and body.
//!
//! The store is strictly sequential: every operation is a single bounded
//! synchronous step. Wrapping it for concurrent use means one lock (or one
//! single-writer actor) per office, since delivery and retrieval both
//! read-then-write box state and the id counter must stay gap-free.

use log::debug;
use std::collections::{HashMap, VecDeque};

use crate::logutil::escape_log;

pub mod errors;
pub mod message;

pub use errors::OfficeError;
pub use message::Message;

/// An in-memory post office: one box per registered username.
///
/// The username set is fixed at construction; boxes are never added,
/// removed, or emptied afterwards. Messages persist in their box for the
/// lifetime of the office.
#[derive(Debug, Clone)]
pub struct PostOffice {
    /// Id handed out by the most recent successful delivery. Starts at 0,
    /// so the first delivered message gets id 1.
    next_id: u64,
    boxes: HashMap<String, VecDeque<Message>>,
}

impl PostOffice {
    /// Create an office with one empty box per username.
    pub fn new<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let boxes = usernames
            .into_iter()
            .map(|user| (user.into(), VecDeque::new()))
            .collect();
        Self { next_id: 0, boxes }
    }

    /// Deliver a message into its recipient's box and return the delivery id.
    ///
    /// Urgent messages are inserted at the front of the box, ahead of
    /// everything already waiting there (so the most recently delivered
    /// urgent message is always first). Normal messages append to the back.
    ///
    /// The id counter is shared across all boxes and increments by exactly
    /// one per successful delivery. The id is purely an acknowledgment to
    /// the caller; it is not stored on the message.
    ///
    /// Fails with [`OfficeError::UnknownRecipient`] if the recipient has no
    /// registered box, in which case the counter does not advance.
    pub fn deliver(&mut self, message: Message) -> Result<u64, OfficeError> {
        let mailbox = self
            .boxes
            .get_mut(&message.recipient)
            .ok_or_else(|| OfficeError::UnknownRecipient(message.recipient.clone()))?;

        self.next_id += 1;
        debug!(
            "delivery {}: {} -> {} urgent={} title=\"{}\"",
            self.next_id,
            escape_log(&message.sender),
            escape_log(&message.recipient),
            message.urgent,
            escape_log(&message.title)
        );

        if message.urgent {
            mailbox.push_front(message);
        } else {
            mailbox.push_back(message);
        }
        Ok(self.next_id)
    }

    /// Read a user's inbox, front first, marking messages as read.
    ///
    /// Examines up to `limit` messages from the front of the box (`None`
    /// means the whole box). Every unread message in that window is flipped
    /// to read and included in the result, in box order; messages already
    /// read are skipped, and messages past the window are left untouched.
    ///
    /// Calling again with the same arguments and no intervening delivery
    /// returns an empty vec. An empty box or a limit of zero also yield an
    /// empty vec without error.
    ///
    /// Fails with [`OfficeError::UnknownUser`] for an unregistered username.
    pub fn read_inbox(
        &mut self,
        username: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, OfficeError> {
        let mailbox = self
            .boxes
            .get_mut(username)
            .ok_or_else(|| OfficeError::UnknownUser(username.to_string()))?;

        let window = limit.unwrap_or(mailbox.len());
        let mut newly_read = Vec::new();
        for message in mailbox.iter_mut().take(window) {
            if !message.read {
                message.mark_read();
                newly_read.push(message.clone());
            }
        }
        debug!(
            "read_inbox {}: {} newly read (window {:?})",
            escape_log(username),
            newly_read.len(),
            limit
        );
        Ok(newly_read)
    }

    /// Find every message in a user's box whose title or body contains
    /// `query` as an exact, case-sensitive substring.
    ///
    /// Searches the whole box in its current order, read or unread alike,
    /// and never changes any read flag.
    ///
    /// Fails with [`OfficeError::UnknownUser`] for an unregistered username.
    pub fn search_inbox(&self, username: &str, query: &str) -> Result<Vec<Message>, OfficeError> {
        let mailbox = self
            .boxes
            .get(username)
            .ok_or_else(|| OfficeError::UnknownUser(username.to_string()))?;

        Ok(mailbox
            .iter()
            .filter(|message| message.title.contains(query) || message.body.contains(query))
            .cloned()
            .collect())
    }

    /// An ordered view of a user's whole box. Pure; read flags are left
    /// alone.
    pub fn inbox(&self, username: &str) -> Result<Vec<&Message>, OfficeError> {
        let mailbox = self
            .boxes
            .get(username)
            .ok_or_else(|| OfficeError::UnknownUser(username.to_string()))?;
        Ok(mailbox.iter().collect())
    }

    /// Number of messages in a user's box, read or not.
    pub fn inbox_size(&self, username: &str) -> Result<usize, OfficeError> {
        Ok(self.inbox(username)?.len())
    }

    /// Number of unread messages waiting in a user's box.
    pub fn unread_count(&self, username: &str) -> Result<usize, OfficeError> {
        Ok(self
            .inbox(username)?
            .iter()
            .filter(|message| !message.read)
            .count())
    }

    /// Whether a username has a registered box.
    pub fn is_registered(&self, username: &str) -> bool {
        self.boxes.contains_key(username)
    }

    /// The registered usernames, in no particular order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.boxes.keys().map(String::as_str)
    }
}
