//! Session driver tests against a scripted in-process server.

#![allow(clippy::unwrap_used)]

use groupmail_smtp::{Address, Error, Session};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Spawns a one-shot server that plays `replies` in order and records every
/// line the client sends.
///
/// The first reply is written as the greeting before anything is read.
/// After answering `DATA` with a `354` reply, lines are consumed up to and
/// including the `.` terminator before the next reply is written.
async fn scripted_server(replies: Vec<&'static str>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = stream.into_split();
        let mut lines = BufReader::new(read_half).lines();
        let mut log = Vec::new();

        let mut replies = replies.into_iter();
        let greeting = replies.next().unwrap();
        write_half.write_all(greeting.as_bytes()).await.unwrap();

        loop {
            let Some(reply) = replies.next() else { break };
            let Some(line) = lines.next_line().await.unwrap() else {
                break;
            };
            let in_data = line == "DATA" && reply.starts_with("354");
            log.push(line);
            write_half.write_all(reply.as_bytes()).await.unwrap();

            if in_data {
                while let Some(payload_line) = lines.next_line().await.unwrap() {
                    let done = payload_line == ".";
                    log.push(payload_line);
                    if done {
                        break;
                    }
                }
                let ack = replies.next().unwrap();
                write_half.write_all(ack.as_bytes()).await.unwrap();
            }
        }

        log
    });

    (format!("127.0.0.1:{}", addr.port()), handle)
}

fn split_host_port(addr: &str) -> (String, u16) {
    let (host, port) = addr.rsplit_once(':').unwrap();
    (host.to_string(), port.parse().unwrap())
}

#[tokio::test]
async fn full_session_emits_expected_command_sequence() {
    let (addr, server) = scripted_server(vec![
        "220 relay.example.com ESMTP\r\n",
        "250 relay.example.com\r\n",
        "250 sender ok\r\n",
        "250 recipient ok\r\n",
        "250 recipient ok\r\n",
        "354 end with .\r\n",
        "250 queued\r\n",
        "221 bye\r\n",
    ])
    .await;
    let (host, port) = split_host_port(&addr);

    let mut session = Session::connect(&host, port, "groupmail").await.unwrap();
    let from = Address::new("alice@example.com").unwrap();
    let recipients = vec![
        Address::new("bob@example.com").unwrap(),
        Address::new("carol@example.com").unwrap(),
    ];
    session
        .send(&from, &recipients, b"Subject: hi\n\nhello\n")
        .await
        .unwrap();
    session.quit().await.unwrap();

    let log = server.await.unwrap();
    assert_eq!(
        log,
        vec![
            "EHLO groupmail",
            "MAIL FROM:<alice@example.com>",
            "RCPT TO:<bob@example.com>",
            "RCPT TO:<carol@example.com>",
            "DATA",
            "Subject: hi",
            "",
            "hello",
            ".",
            "QUIT",
        ]
    );
}

#[tokio::test]
async fn multi_line_ehlo_reply_is_consumed() {
    let (addr, server) = scripted_server(vec![
        "220 relay.example.com ESMTP\r\n",
        "250-relay.example.com\r\n250-SIZE 35882577\r\n250 HELP\r\n",
        "221 bye\r\n",
    ])
    .await;
    let (host, port) = split_host_port(&addr);

    let session = Session::connect(&host, port, "groupmail").await.unwrap();
    session.quit().await.unwrap();

    let log = server.await.unwrap();
    assert_eq!(log, vec!["EHLO groupmail", "QUIT"]);
}

#[tokio::test]
async fn bad_greeting_aborts_connection() {
    let (addr, _server) = scripted_server(vec!["554 no service\r\n"]).await;
    let (host, port) = split_host_port(&addr);

    let err = Session::connect(&host, port, "groupmail")
        .await
        .unwrap_err();
    match err {
        Error::UnexpectedReply { expected, line } => {
            assert_eq!(expected.as_u16(), 220);
            assert_eq!(line, "554 no service");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rejected_recipient_stops_the_send() {
    let (addr, server) = scripted_server(vec![
        "220 relay.example.com ESMTP\r\n",
        "250 relay.example.com\r\n",
        "250 sender ok\r\n",
        "550 mailbox unavailable\r\n",
        "221 bye\r\n",
    ])
    .await;
    let (host, port) = split_host_port(&addr);

    let mut session = Session::connect(&host, port, "groupmail").await.unwrap();
    let from = Address::new("alice@example.com").unwrap();
    let recipients = vec![
        Address::new("bob@example.com").unwrap(),
        Address::new("carol@example.com").unwrap(),
    ];

    let err = session
        .send(&from, &recipients, b"Subject: hi\n\nhello\n")
        .await
        .unwrap_err();
    match &err {
        Error::UnexpectedReply { expected, line } => {
            assert_eq!(expected.as_u16(), 250);
            assert_eq!(line, "550 mailbox unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_protocol());

    // The connection is left open; cleanup is an explicit quit().
    session.quit().await.unwrap();

    let log = server.await.unwrap();
    assert_eq!(
        log,
        vec![
            "EHLO groupmail",
            "MAIL FROM:<alice@example.com>",
            "RCPT TO:<bob@example.com>",
            "QUIT",
        ]
    );
}

#[tokio::test]
async fn quit_reports_malformed_reply_but_releases_the_socket() {
    let (addr, server) = scripted_server(vec![
        "220 relay.example.com ESMTP\r\n",
        "250 relay.example.com\r\n",
        "999 confused\r\n",
    ])
    .await;
    let (host, port) = split_host_port(&addr);

    let session = Session::connect(&host, port, "groupmail").await.unwrap();
    let err = session.quit().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedReply { .. }));

    // quit() consumed the session, so the server sees the stream close.
    let log = server.await.unwrap();
    assert_eq!(log, vec!["EHLO groupmail", "QUIT"]);
}

#[tokio::test]
async fn dotted_payload_lines_are_stuffed() {
    let (addr, server) = scripted_server(vec![
        "220 relay.example.com ESMTP\r\n",
        "250 relay.example.com\r\n",
        "250 sender ok\r\n",
        "250 recipient ok\r\n",
        "354 end with .\r\n",
        "250 queued\r\n",
        "221 bye\r\n",
    ])
    .await;
    let (host, port) = split_host_port(&addr);

    let mut session = Session::connect(&host, port, "groupmail").await.unwrap();
    let from = Address::new("alice@example.com").unwrap();
    let recipients = vec![Address::new("bob@example.com").unwrap()];
    session
        .send(&from, &recipients, b"Subject: hi\n\n.hidden\n")
        .await
        .unwrap();
    session.quit().await.unwrap();

    let log = server.await.unwrap();
    assert_eq!(
        log,
        vec![
            "EHLO groupmail",
            "MAIL FROM:<alice@example.com>",
            "RCPT TO:<bob@example.com>",
            "DATA",
            "Subject: hi",
            "",
            "..hidden",
            ".",
            "QUIT",
        ]
    );
}
