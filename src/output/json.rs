//! JSON artifact writers and the compressed-payload restore path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{ChatliftError, Result};
use crate::message::Message;
use crate::transcript::{Compression, Meta, Transcript};

/// Note embedded in compressed artifacts for human readers.
const COMPRESSED_NOTE: &str =
    "LZW compressed numeric codes, joined by comma. Run the decode action to restore the conversation.";

/// Wire shape of a compressed artifact.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompressedRecord {
    meta: Meta,
    compressed_content: String,
    note: String,
}

/// Serializes a transcript as the pretty-printed `{meta, conversation}` record.
pub fn to_json(transcript: &Transcript) -> Result<String> {
    Ok(serde_json::to_string_pretty(transcript)?)
}

/// Writes the uncompressed record to `path`.
pub fn write_json(transcript: &Transcript, path: &Path) -> Result<()> {
    let json = to_json(transcript)?;
    fs::write(path, json).map_err(|source| ChatliftError::delivery(path, source))
}

/// Serializes a transcript as the compressed `{meta, compressedContent, note}`
/// record.
///
/// Only the conversation array goes through the codec; it is serialized
/// compactly first so the codes carry no pretty-printing padding. The meta
/// block stays in clear with [`Compression::Dictionary`] stamped.
pub fn to_compressed_json(transcript: &Transcript) -> Result<String> {
    let conversation = serde_json::to_string(transcript.messages())?;
    let compressed_content = codec::compress_to_string(&conversation);

    let mut meta = transcript.meta().clone();
    meta.compression = Compression::Dictionary;

    let record = CompressedRecord {
        meta,
        compressed_content,
        note: COMPRESSED_NOTE.to_string(),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Writes the compressed record to `path`.
pub fn write_compressed_json(transcript: &Transcript, path: &Path) -> Result<()> {
    let json = to_compressed_json(transcript)?;
    fs::write(path, json).map_err(|source| ChatliftError::delivery(path, source))
}

/// Restores a compressed artifact to an uncompressed [`Transcript`].
///
/// The embedded code string is parsed and decoded back into the
/// conversation array. The metadata of the result is recomputed from what
/// actually decoded rather than trusted: `messageCount` reflects the
/// restored conversation, the compression mode returns to
/// [`Compression::None`], and `exportedBy` is restamped by this tool. The
/// original extraction timestamp and URL are preserved.
///
/// # Errors
///
/// Returns [`ChatliftError::InvalidPayload`] when the input is not a
/// compressed-export record, and [`ChatliftError::MalformedStream`] when
/// the embedded codes do not decode.
pub fn decode_payload(json: &str) -> Result<Transcript> {
    let record: CompressedRecord = serde_json::from_str(json)
        .map_err(|err| ChatliftError::invalid_payload(err.to_string()))?;

    if record.meta.compression != Compression::Dictionary {
        return Err(ChatliftError::invalid_payload(format!(
            "record is marked `{}`, not a dictionary-compressed export",
            record.meta.compression
        )));
    }

    let conversation = codec::decompress_from_string(&record.compressed_content)?;
    let messages: Vec<Message> = serde_json::from_str(&conversation)?;

    Ok(Transcript::new(record.meta.url, record.meta.timestamp, messages))
}

/// Reads a compressed artifact from disk and restores it.
///
/// # Errors
///
/// [`ChatliftError::Io`] if the file cannot be read, plus every
/// [`decode_payload`] condition.
pub fn read_compressed_json(path: &Path) -> Result<Transcript> {
    let json = fs::read_to_string(path)?;
    decode_payload(&json)
}
