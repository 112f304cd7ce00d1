//! Inbox retrieval and read-state transition tests

use pigeonhole::office::{Message, OfficeError, PostOffice};

#[test]
fn read_is_idempotent_to_empty() {
    let mut office = PostOffice::new(["Newman"]);
    office
        .deliver(Message::new("Jerry", "Newman", "t1", "b1"))
        .expect("deliver");
    office
        .deliver(Message::new("Jerry", "Newman", "t2", "b2"))
        .expect("deliver");

    let first = office.read_inbox("Newman", None).expect("first read");
    assert_eq!(first.len(), 2);
    assert!(office.read_inbox("Newman", None).expect("second read").is_empty());
}

#[test]
fn limited_window_leaves_the_rest_unread() {
    let mut office = PostOffice::new(["Newman"]);
    office
        .deliver(Message::new("Jerry", "Newman", "front", "b1"))
        .expect("deliver");
    office
        .deliver(Message::new("Jerry", "Newman", "back", "b2"))
        .expect("deliver");

    let windowed = office.read_inbox("Newman", Some(1)).expect("read window");
    assert_eq!(windowed.len(), 1);
    assert_eq!(windowed[0].title, "front");

    // The second message was outside the window and stays unread.
    assert_eq!(office.unread_count("Newman").expect("unread"), 1);

    let rest = office.read_inbox("Newman", None).expect("read rest");
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].title, "back");
}

#[test]
fn window_skips_already_read_messages() {
    let mut office = PostOffice::new(["Newman"]);
    for title in ["t1", "t2", "t3"] {
        office
            .deliver(Message::new("Jerry", "Newman", title, "body"))
            .expect("deliver");
    }

    office.read_inbox("Newman", Some(1)).expect("read front");

    // A wider window re-examines the front message but must not return it.
    let next = office.read_inbox("Newman", Some(2)).expect("read wider");
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].title, "t2");
}

#[test]
fn read_flags_are_monotonic() {
    let mut office = PostOffice::new(["Newman"]);
    office
        .deliver(Message::new("Jerry", "Newman", "t", "b"))
        .expect("deliver");

    office.read_inbox("Newman", None).expect("read");
    office.read_inbox("Newman", None).expect("read again");
    office.search_inbox("Newman", "b").expect("search");

    let inbox = office.inbox("Newman").expect("inbox");
    assert!(inbox[0].read);
    assert!(inbox[0].read_at.is_some());
}

#[test]
fn empty_box_and_zero_limit_yield_empty_results() {
    let mut office = PostOffice::new(["Newman"]);
    assert!(office.read_inbox("Newman", None).expect("read empty").is_empty());
    assert!(office
        .read_inbox("Newman", Some(5))
        .expect("read empty window")
        .is_empty());

    office
        .deliver(Message::new("Jerry", "Newman", "t", "b"))
        .expect("deliver");
    assert!(office
        .read_inbox("Newman", Some(0))
        .expect("zero window")
        .is_empty());
    assert_eq!(office.unread_count("Newman").expect("unread"), 1);
}

#[test]
fn unknown_user_is_rejected() {
    let mut office = PostOffice::new(["Newman"]);
    let err = office.read_inbox("Kramer", None).expect_err("no box");
    assert_eq!(err, OfficeError::UnknownUser("Kramer".to_string()));
    assert_eq!(err.to_string(), "unknown user: Kramer");
}

#[test]
fn urgent_delivery_after_read_is_picked_up_next() {
    let mut office = PostOffice::new(["Newman"]);
    office
        .deliver(Message::new("Jerry", "Newman", "old", "b"))
        .expect("deliver");
    office.read_inbox("Newman", None).expect("read");

    office
        .deliver(Message::urgent("Jerry", "Newman", "breaking", "b"))
        .expect("deliver urgent");

    // Even a limit-1 window sees the urgent message first.
    let next = office.read_inbox("Newman", Some(1)).expect("read");
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].title, "breaking");
}
