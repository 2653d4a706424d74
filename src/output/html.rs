//! Styled HTML rendering of a transcript.
//!
//! Produces a single self-contained page: inline CSS, no scripts, no
//! external assets. Message content is escaped and newlines become `<br>`;
//! this module is templating only and adds no semantics of its own.

use std::fs;
use std::path::Path;

use crate::error::{ChatliftError, Result};
use crate::message::Role;
use crate::transcript::Transcript;

/// Renders a transcript as a complete HTML document.
pub fn render(transcript: &Transcript) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(HEADER);
    out.push_str(&format!(
        r#"        <div class="export-header">
            <h1 class="export-title">Conversation Export</h1>
            <p class="export-subtitle">Exported with {}</p>
            <div class="export-timestamp">{}</div>
        </div>

        <div class="conversation">
"#,
        escape_html(&transcript.meta().exported_by),
        transcript.meta().timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
    ));

    for message in transcript.messages() {
        let (role_class, role_display) = match message.role() {
            Role::User => ("user-message", "👤 User"),
            Role::Assistant => ("assistant-message", "🤖 Assistant"),
            Role::Unknown => ("unknown-message", "❓ Unknown"),
        };
        out.push_str(&format!(
            r#"            <div class="message {role_class}" data-message="{index}">
                <div class="message-role">{role_display}</div>
                <div class="message-content">{content}</div>
            </div>
"#,
            index = message.index(),
            content = content_html(message.content()),
        ));
    }

    out.push_str(&format!(
        r#"        </div>

        <div class="stats-bar">
            📊 <strong>{total}</strong> messages total &bull;
            👤 <strong>{users}</strong> user &bull;
            🤖 <strong>{assistants}</strong> assistant
        </div>
    </div>
</body>
</html>
"#,
        total = transcript.len(),
        users = transcript.user_count(),
        assistants = transcript.assistant_count(),
    ));

    out
}

/// Writes the rendered page to `path`.
pub fn write_html(transcript: &Transcript, path: &Path) -> Result<()> {
    let html = render(transcript);
    fs::write(path, html).map_err(|source| ChatliftError::delivery(path, source))
}

/// Escapes text for safe embedding in markup.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escaped message content with newlines rendered as line breaks.
fn content_html(content: &str) -> String {
    escape_html(content).replace('\n', "<br>")
}

const HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Conversation Export</title>
    <style>
        :root {
            --text-color: #deddda;
            --user-color: #ff6b6b;
            --assistant-color: #4ecdc4;
            --unknown-color: #999999;
        }
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #1a1a1a 0%, #2d2d2d 100%);
            color: var(--text-color);
            margin: 0;
            padding: 20px;
            line-height: 1.6;
            min-height: 100vh;
        }
        .export-container { max-width: 900px; margin: 0 auto; }
        .export-header { text-align: center; margin-bottom: 30px; }
        .export-title { margin-bottom: 4px; }
        .export-subtitle { color: #888; margin: 4px 0; }
        .export-timestamp { color: #666; font-size: 14px; }
        .message {
            padding: 16px 20px;
            margin-bottom: 16px;
            border-radius: 10px;
            border-left: 4px solid var(--unknown-color);
            background: rgba(255, 255, 255, 0.04);
        }
        .user-message { border-left-color: var(--user-color); background: #2d1b1b; }
        .assistant-message { border-left-color: var(--assistant-color); background: #1b2d2a; }
        .message-role { font-weight: 600; margin-bottom: 8px; font-size: 14px; }
        .message-content { white-space: pre-wrap; overflow-wrap: break-word; }
        .stats-bar {
            margin-top: 30px;
            padding: 14px 20px;
            border-radius: 10px;
            background: rgba(0, 0, 0, 0.5);
            text-align: center;
            font-size: 14px;
            color: #aaa;
        }
    </style>
</head>
<body>
    <div class="export-container">
"#;
