//! Headless renderer: feeds a script of `"<sender id>, <body>"` lines into a
//! transcript and prints one rendered row per message.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AppConfig;
use crate::presentation::BubbleVariant;
use crate::transcript::{InputMode, Transcript, TranscriptSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Serialize)]
pub struct RenderedRow<'a> {
    pub index: usize,
    pub variant: BubbleVariant,
    pub header: Option<&'a str>,
    pub header_height: f32,
    pub sender_id: &'a str,
    pub body: &'a str,
    pub sent_at: DateTime<Utc>,
}

pub fn replay<R: BufRead>(
    mut reader: R,
    transcript: &mut Transcript,
    config: &AppConfig,
) -> io::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    let mut buf = Vec::new();
    let mut line_no: usize = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let raw = buf
            .strip_suffix(b"\n")
            .map(|rest| rest.strip_suffix(b"\r").unwrap_or(rest))
            .unwrap_or(buf.as_slice());
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(err) => {
                log::warn!("Skipping line {line_no}: not valid UTF-8 ({err})");
                summary.rejected += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match transcript.submit(line, InputMode::SenderPrefixed, |id| {
            config.display_name_for(id)
        }) {
            Ok(_) => summary.accepted += 1,
            Err(err) => {
                log::warn!("Skipping line {line_no}: {err}");
                summary.rejected += 1;
            }
        }
    }

    log::info!(
        "Replay finished: {} accepted, {} rejected",
        summary.accepted,
        summary.rejected
    );
    Ok(summary)
}

pub fn render_rows<S, W>(source: &S, format: RowFormat, writer: &mut W) -> io::Result<()>
where
    S: TranscriptSource + ?Sized,
    W: Write,
{
    for index in 0..source.count() {
        let message = source.message_at(index);
        let row = source.row_at(index);

        match format {
            RowFormat::Text => match row.header {
                None => writeln!(writer, "[out] {}", message.body())?,
                Some(header) => writeln!(
                    writer,
                    "[in] {header} ({:.0}): {}",
                    row.header_height,
                    message.body()
                )?,
            },
            RowFormat::Json => {
                let rendered = RenderedRow {
                    index,
                    variant: row.variant,
                    header: row.header,
                    header_height: row.header_height,
                    sender_id: message.sender_id(),
                    body: message.body(),
                    sent_at: message.sent_at(),
                };
                serde_json::to_writer(&mut *writer, &rendered)?;
                writeln!(writer)?;
            }
        }
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SessionIdentity;

    const SCRIPT: &str = "1234, hi there\r\n\nbob, hey\nno separator here\n, nobody\ncarol, hello, all\n";

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.contacts.insert("bob".into(), "Bob".into());
        config
    }

    fn replayed() -> Transcript {
        let config = config();
        let mut transcript = Transcript::new(config.session.clone());
        let summary = replay(SCRIPT.as_bytes(), &mut transcript, &config).unwrap();
        assert_eq!(
            summary,
            ReplaySummary {
                accepted: 3,
                rejected: 2
            }
        );
        transcript
    }

    #[test]
    fn replay_skips_blank_and_malformed_lines() {
        let transcript = replayed();

        assert_eq!(transcript.count(), 3);
        assert_eq!(transcript.message_at(0).sender_display_name(), "Cindy");
        assert_eq!(transcript.message_at(1).sender_display_name(), "Bob");
        assert_eq!(transcript.message_at(2).sender_display_name(), "carol");
        assert_eq!(transcript.message_at(2).body(), "hello, all");
    }

    #[test]
    fn renders_text_rows() {
        let transcript = replayed();
        let mut out = Vec::new();
        render_rows(&transcript, RowFormat::Text, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[out] hi there\n[in] Bob (15): hey\n[in] carol (15): hello, all\n"
        );
    }

    #[test]
    fn renders_json_rows() {
        let transcript = replayed();
        let mut out = Vec::new();
        render_rows(&transcript, RowFormat::Json, &mut out).unwrap();

        let rows: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["variant"], "outgoing");
        assert_eq!(rows[0]["header"], serde_json::Value::Null);
        assert_eq!(rows[0]["header_height"], 0.0);
        assert_eq!(rows[1]["variant"], "incoming");
        assert_eq!(rows[1]["header"], "Bob");
        assert_eq!(rows[1]["header_height"], 15.0);
        assert_eq!(rows[1]["sender_id"], "bob");
        assert_eq!(rows[2]["index"], 2);
    }

    #[test]
    fn undecodable_line_is_skipped_not_fatal() {
        let config = config();
        let mut transcript = Transcript::new(config.session.clone());

        let summary = replay(
            &b"bob, hi\n\xff\xfe\ncarol, yo"[..],
            &mut transcript,
            &config,
        )
        .unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                accepted: 2,
                rejected: 1
            }
        );
        assert_eq!(transcript.message_at(1).sender_id(), "carol");
        assert_eq!(transcript.message_at(1).body(), "yo");

        let mut out = Vec::new();
        render_rows(&transcript, RowFormat::Text, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[in] Bob (15): hi\n[in] carol (15): yo\n"
        );
    }

    #[test]
    fn crlf_line_endings_are_not_part_of_the_body() {
        let config = config();
        let mut transcript = Transcript::new(config.session.clone());

        replay(&b"bob, hey\r\n"[..], &mut transcript, &config).unwrap();
        assert_eq!(transcript.message_at(0).body(), "hey");
    }

    #[test]
    fn empty_transcript_renders_nothing() {
        let transcript = Transcript::new(SessionIdentity::default());
        let mut out = Vec::new();
        render_rows(&transcript, RowFormat::Text, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
