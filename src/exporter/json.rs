// file: src/exporter/json.rs
// description: json export utilities for chat transcripts

use crate::chat::ChatSession;
use crate::error::Result;
use crate::models::Message;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ExportedTranscript {
    pub session_id: Uuid,
    pub exported_at: String,
    pub message_count: usize,
    pub messages: Vec<Message>,
}

pub struct TranscriptExporter;

impl TranscriptExporter {
    /// Write a session transcript as JSON to `path`, creating parent
    /// directories as needed. Returns the number of messages written.
    pub fn export(session: &ChatSession, path: &Path, pretty: bool) -> Result<usize> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let transcript = ExportedTranscript {
            session_id: session.id(),
            exported_at: Utc::now().to_rfc3339(),
            message_count: session.messages().len(),
            messages: session.messages().to_vec(),
        };

        let json = if pretty {
            serde_json::to_string_pretty(&transcript)?
        } else {
            serde_json::to_string(&transcript)?
        };

        fs::write(path, json)?;

        info!(
            "Exported {} messages to {}",
            transcript.message_count,
            path.display()
        );
        Ok(transcript.message_count)
    }

    /// Default export path for a session under `output_dir`.
    pub fn default_path(output_dir: &Path, session_id: Uuid) -> PathBuf {
        output_dir.join(format!("transcript-{session_id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChatConfig, MatcherConfig};
    use crate::matcher::FaqMatcher;
    use crate::models::{FaqCatalog, FaqEntry};
    use tempfile::tempdir;

    fn sample_session() -> ChatSession {
        let catalog = FaqCatalog::new(vec![FaqEntry::new("What is DR?", "An eye disease.")]);
        let matcher = FaqMatcher::new(
            catalog,
            MatcherConfig {
                threshold: 0.25,
                fallback: "Please rephrase.".to_string(),
            },
        );
        ChatSession::new(
            matcher,
            ChatConfig {
                greeting: "Hello!".to_string(),
                reply_delay_ms: 0,
            },
        )
    }

    #[test]
    fn test_export_writes_transcript() {
        let mut session = sample_session();
        session.respond("what is dr");

        let dir = tempdir().unwrap();
        let path = dir.path().join("transcript.json");
        let count = TranscriptExporter::export(&session, &path, true).unwrap();

        assert_eq!(count, 3);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"message_count\": 3"));
        assert!(content.contains("An eye disease."));
    }

    #[test]
    fn test_export_creates_parent_dirs() {
        let session = sample_session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deep/transcript.json");

        assert!(TranscriptExporter::export(&session, &path, false).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_default_path_includes_session_id() {
        let id = Uuid::new_v4();
        let path = TranscriptExporter::default_path(Path::new("./exports"), id);
        assert!(path.to_string_lossy().contains(&id.to_string()));
    }
}
