//! Property-based tests for the chat client state machine.
//!
//! Verifies the log-ordering and draft-guard invariants under arbitrary
//! event sequences and drafts.

use chatter_client::{
    ChatClient, ClientAction, ClientEvent, SendPolicy, STATUS_CONNECTED, STATUS_EXITING,
};
use proptest::prelude::*;

fn client(policy: SendPolicy) -> ChatClient {
    ChatClient::new(policy, "ws://127.0.0.1:3000/ws")
}

/// Drive a full connection lifecycle and return the resulting log.
fn lifecycle_log(messages: &[String]) -> Vec<String> {
    let mut client = client(SendPolicy::default());
    let _ = client.handle(ClientEvent::Opened);
    for msg in messages {
        let _ = client.handle(ClientEvent::MessageReceived(msg.clone()));
    }
    let _ = client.handle(ClientEvent::Closed);
    client.log().to_vec()
}

proptest! {
    /// For events [open, m1, .., mN, close] the log is exactly
    /// ["Connected", m1, .., mN, "Exiting"].
    #[test]
    fn prop_lifecycle_log_matches_arrival_order(
        messages in prop::collection::vec(".*", 0..50)
    ) {
        let log = lifecycle_log(&messages);

        prop_assert_eq!(log.len(), messages.len() + 2);
        prop_assert_eq!(&log[0], STATUS_CONNECTED);
        prop_assert_eq!(&log[log.len() - 1], STATUS_EXITING);
        prop_assert_eq!(&log[1..log.len() - 1], messages.as_slice());
    }

    /// Message entries are never reordered or dropped, whatever the
    /// interleaving of sends between them.
    #[test]
    fn prop_sends_never_perturb_the_log(
        messages in prop::collection::vec(".*", 1..30),
        drafts in prop::collection::vec(".*", 1..30),
    ) {
        let mut client = client(SendPolicy::default());
        let _ = client.handle(ClientEvent::Opened);

        let mut draft_iter = drafts.iter();
        for msg in &messages {
            if let Some(d) = draft_iter.next() {
                let mut draft = d.clone();
                let _ = client.send(&mut draft);
            }
            let _ = client.handle(ClientEvent::MessageReceived(msg.clone()));
        }

        prop_assert_eq!(&client.log()[1..], messages.as_slice());
    }

    /// Under RejectEmpty, a transmit happens iff the draft is non-empty,
    /// and the draft ends empty on transmit and untouched otherwise.
    #[test]
    fn prop_reject_empty_guard(draft in ".*") {
        let mut client = client(SendPolicy::RejectEmpty);
        let mut buffer = draft.clone();
        let actions = client.send(&mut buffer);

        if draft.is_empty() {
            prop_assert!(actions.is_empty());
            prop_assert_eq!(buffer, draft);
        } else {
            prop_assert_eq!(
                actions,
                vec![ClientAction::Transmit(draft), ClientAction::Render]
            );
            prop_assert_eq!(buffer, "");
        }
    }

    /// Under AllowEmpty, every draft is transmitted and reset, including "".
    #[test]
    fn prop_allow_empty_always_transmits(draft in ".*") {
        let mut client = client(SendPolicy::AllowEmpty);
        let mut buffer = draft.clone();
        let actions = client.send(&mut buffer);

        prop_assert_eq!(
            actions,
            vec![ClientAction::Transmit(draft), ClientAction::Render]
        );
        prop_assert_eq!(buffer, "");
    }
}

/// The end-to-end scenario from the client's observable contract.
#[test]
fn scenario_connect_send_receive_close() {
    let mut client = client(SendPolicy::default());

    let _ = client.handle(ClientEvent::Opened);
    assert_eq!(client.log(), [STATUS_CONNECTED]);

    let mut draft = String::from("hi");
    let actions = client.send(&mut draft);
    assert_eq!(actions, vec![ClientAction::Transmit("hi".into()), ClientAction::Render]);
    assert_eq!(draft, "");

    let _ = client.handle(ClientEvent::MessageReceived("hello back".into()));
    assert_eq!(client.log(), [STATUS_CONNECTED, "hello back"]);

    let _ = client.handle(ClientEvent::Closed);
    assert_eq!(client.log(), [STATUS_CONNECTED, "hello back", STATUS_EXITING]);
}
