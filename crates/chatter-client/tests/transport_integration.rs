//! Integration tests for the WebSocket transport.
//!
//! These tests verify the real transport layer by connecting actual
//! WebSocket clients to actual in-process WebSocket servers.

#![cfg(feature = "transport")]

use std::time::Duration;

use chatter_client::{ClientEvent, transport};
use futures::{SinkExt, StreamExt};
use tokio::{net::TcpListener, time::timeout};
use tokio_tungstenite::{accept_async, tungstenite::Message};

/// Bind a listener on an ephemeral port and return it with its ws:// URL.
async fn bind_server() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("ws://{}/ws", listener.local_addr().unwrap());
    (listener, url)
}

/// Receive the next event from the transport, bounded by a timeout.
async fn next_event(client: &mut transport::ConnectedClient) -> ClientEvent {
    timeout(Duration::from_secs(5), client.events.recv())
        .await
        .expect("event within timeout")
        .expect("event channel open")
}

#[tokio::test]
async fn opened_precedes_messages_and_close() {
    let (listener, url) = bind_server().await;

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        ws.send(Message::Text("welcome".into())).await.unwrap();
        ws.close(None).await.unwrap();
    });

    let mut client = transport::connect(&url).unwrap();

    assert_eq!(next_event(&mut client).await, ClientEvent::Opened);
    assert_eq!(next_event(&mut client).await, ClientEvent::MessageReceived("welcome".into()));
    assert_eq!(next_event(&mut client).await, ClientEvent::Closed);
}

#[tokio::test]
async fn outgoing_text_reaches_the_server() {
    let (listener, url) = bind_server().await;

    // Echo server: sends back the first text frame it receives.
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        while let Some(Ok(msg)) = ws.next().await {
            if let Message::Text(text) = msg {
                ws.send(Message::Text(text)).await.unwrap();
                break;
            }
        }
    });

    let mut client = transport::connect(&url).unwrap();
    assert_eq!(next_event(&mut client).await, ClientEvent::Opened);

    client.outgoing.send("hi".to_string()).await.unwrap();

    assert_eq!(next_event(&mut client).await, ClientEvent::MessageReceived("hi".into()));
}

#[tokio::test]
async fn failed_connect_yields_closed_without_opened() {
    // Bind then drop the listener so the port refuses connections.
    let (listener, url) = bind_server().await;
    drop(listener);

    let mut client = transport::connect(&url).unwrap();

    assert_eq!(next_event(&mut client).await, ClientEvent::Closed);
}

#[tokio::test]
async fn binary_frames_are_ignored() {
    let (listener, url) = bind_server().await;

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        ws.send(Message::Binary(vec![0xde, 0xad])).await.unwrap();
        ws.send(Message::Text("after binary".into())).await.unwrap();
        ws.close(None).await.unwrap();
    });

    let mut client = transport::connect(&url).unwrap();

    assert_eq!(next_event(&mut client).await, ClientEvent::Opened);
    // The binary frame is dropped; the next event is the following text.
    assert_eq!(
        next_event(&mut client).await,
        ClientEvent::MessageReceived("after binary".into())
    );
    assert_eq!(next_event(&mut client).await, ClientEvent::Closed);
}

#[tokio::test]
async fn invalid_urls_are_rejected_up_front() {
    assert!(matches!(
        transport::connect("http://127.0.0.1:3000/ws"),
        Err(transport::TransportError::UnsupportedScheme(_))
    ));
    assert!(matches!(
        transport::connect("not a url"),
        Err(transport::TransportError::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn client_stops_cleanly() {
    let (listener, url) = bind_server().await;

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        while ws.next().await.is_some() {}
    });

    let client = transport::connect(&url).unwrap();

    // Stop should not panic.
    client.stop();

    tokio::time::sleep(Duration::from_millis(50)).await;
}
