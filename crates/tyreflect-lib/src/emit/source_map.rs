//! Source Map revision 3.
//!
//! Lines and columns are zero-based. Columns count UTF-16 code units, which is
//! what JavaScript tooling expects.

use serde::{Deserialize, Serialize};

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const VLQ_SHIFT: u32 = 5;
const VLQ_CONTINUATION: i64 = 1 << VLQ_SHIFT;
const VLQ_MASK: i64 = VLQ_CONTINUATION - 1;

/// A serialized position mapping from emitted code back to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<String>>,
    #[serde(default)]
    pub names: Vec<String>,
    pub mappings: String,
}

/// One decoded mapping segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub generated_line: u32,
    pub generated_column: u32,
    pub source: u32,
    pub original_line: u32,
    pub original_column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("invalid base64 digit `{0}` in mappings")]
    InvalidDigit(char),
    #[error("mappings end inside a VLQ value")]
    Truncated,
    #[error("segment with {0} fields (expected 1, 4 or 5)")]
    FieldCount(usize),
    #[error("negative position in mappings")]
    Negative,
}

impl SourceMap {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Decode `mappings` into absolute positions, ordered by generated
    /// position. Segments without an original position are dropped.
    pub fn decode(&self) -> Result<Vec<Mapping>, MappingError> {
        let mut out = Vec::new();
        let mut source = 0i64;
        let mut original_line = 0i64;
        let mut original_column = 0i64;

        for (line, group) in self.mappings.split(';').enumerate() {
            let mut generated_column = 0i64;
            for segment in group.split(',').filter(|s| !s.is_empty()) {
                let fields = decode_segment(segment)?;
                generated_column += fields[0];
                match fields.len() {
                    1 => continue,
                    4 | 5 => {
                        source += fields[1];
                        original_line += fields[2];
                        original_column += fields[3];
                    }
                    n => return Err(MappingError::FieldCount(n)),
                }

                out.push(Mapping {
                    generated_line: line as u32,
                    generated_column: non_negative(generated_column)?,
                    source: non_negative(source)?,
                    original_line: non_negative(original_line)?,
                    original_column: non_negative(original_column)?,
                });
            }
        }

        Ok(out)
    }

    /// The mapping in effect at a generated position: the last segment on
    /// `line` that starts at or before `column`.
    pub fn lookup(&self, line: u32, column: u32) -> Result<Option<Mapping>, MappingError> {
        let mappings = self.decode()?;
        Ok(mappings
            .into_iter()
            .rev()
            .find(|m| m.generated_line == line && m.generated_column <= column))
    }
}

fn non_negative(value: i64) -> Result<u32, MappingError> {
    u32::try_from(value).map_err(|_| MappingError::Negative)
}

fn decode_segment(segment: &str) -> Result<Vec<i64>, MappingError> {
    let mut fields = Vec::with_capacity(5);
    let mut value = 0i64;
    let mut shift = 0u32;

    for ch in segment.chars() {
        let digit = BASE64
            .iter()
            .position(|&b| b as char == ch)
            .ok_or(MappingError::InvalidDigit(ch))? as i64;
        value += (digit & VLQ_MASK) << shift;
        if digit & VLQ_CONTINUATION != 0 {
            shift += VLQ_SHIFT;
            continue;
        }
        let magnitude = value >> 1;
        fields.push(if value & 1 == 1 { -magnitude } else { magnitude });
        value = 0;
        shift = 0;
    }

    if shift != 0 {
        return Err(MappingError::Truncated);
    }
    Ok(fields)
}

pub(crate) fn encode_vlq(out: &mut String, value: i64) {
    let mut vlq = if value < 0 { ((-value) << 1) | 1 } else { value << 1 };
    loop {
        let mut digit = vlq & VLQ_MASK;
        vlq >>= VLQ_SHIFT;
        if vlq > 0 {
            digit |= VLQ_CONTINUATION;
        }
        out.push(BASE64[digit as usize] as char);
        if vlq == 0 {
            break;
        }
    }
}

/// Accumulates segments line by line and encodes them relative to each other.
#[derive(Debug, Default)]
pub(crate) struct MappingsBuilder {
    lines: Vec<Vec<Segment>>,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    generated_column: u32,
    original_line: u32,
    original_column: u32,
}

impl MappingsBuilder {
    pub fn add(&mut self, generated: Position, original: Position) {
        let line = generated.line as usize;
        if self.lines.len() <= line {
            self.lines.resize_with(line + 1, Vec::new);
        }
        let segments = &mut self.lines[line];
        if segments
            .last()
            .is_some_and(|s| s.generated_column == generated.column)
        {
            return;
        }
        segments.push(Segment {
            generated_column: generated.column,
            original_line: original.line,
            original_column: original.column,
        });
    }

    pub fn finish(self) -> String {
        let mut out = String::new();
        let mut prev_line = 0i64;
        let mut prev_column = 0i64;

        for (i, segments) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            let mut prev_generated = 0i64;
            for (j, segment) in segments.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                encode_vlq(&mut out, segment.generated_column as i64 - prev_generated);
                encode_vlq(&mut out, 0);
                encode_vlq(&mut out, segment.original_line as i64 - prev_line);
                encode_vlq(&mut out, segment.original_column as i64 - prev_column);
                prev_generated = segment.generated_column as i64;
                prev_line = segment.original_line as i64;
                prev_column = segment.original_column as i64;
            }
        }

        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Advance over `text`.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += ch.len_utf16() as u32;
            }
        }
    }
}
