//! Code emission: applies edits to the original text and maps positions back.
//!
//! Text between edits is copied verbatim. Each copied chunk gets a mapping
//! segment at its start and at every line start inside it; synthesized text
//! maps to the start of the range it replaced.
//!
//! Entry point: [`emit`].

mod edit;
pub mod source_map;


pub use edit::Edit;
pub use source_map::{Mapping, MappingError, SourceMap};

use source_map::{MappingsBuilder, Position};

use crate::{Error, Result};

/// Rewritten code plus its map back to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub code: String,
    pub source_map: SourceMap,
}

/// Apply `edits` to `source`.
///
/// Edits may arrive in any order; they are sorted by position and must not
/// overlap. Insertions at the start of a replaced range come first.
pub fn emit(
    source: &str,
    file: &str,
    mut edits: Vec<Edit>,
    include_content: bool,
) -> Result<Emitted> {
    edits.sort_by_key(|edit| (edit.range.start, edit.range.end));
    if let Some(pair) = edits.windows(2).find(|pair| pair[0].overlaps(&pair[1])) {
        return Err(Error::OverlappingEdits {
            first: pair[0].range.clone(),
            second: pair[1].range.clone(),
        });
    }

    let mut emitter = Emitter::new(source.len());
    let mut cursor = 0;
    for edit in &edits {
        emitter.copy(&source[cursor..edit.range.start]);
        emitter.synthesize(&edit.replacement);
        emitter.skip(&source[edit.range.clone()]);
        cursor = edit.range.end;
    }
    emitter.copy(&source[cursor..]);

    let Emitter { code, mappings, .. } = emitter;
    let source_map = SourceMap {
        version: 3,
        file: Some(file.to_owned()),
        sources: vec![file.to_owned()],
        sources_content: include_content.then(|| vec![source.to_owned()]),
        names: Vec::new(),
        mappings: mappings.finish(),
    };

    Ok(Emitted { code, source_map })
}

struct Emitter {
    code: String,
    mappings: MappingsBuilder,
    generated: Position,
    original: Position,
}

impl Emitter {
    fn new(capacity: usize) -> Self {
        Self {
            code: String::with_capacity(capacity),
            mappings: MappingsBuilder::default(),
            generated: Position::default(),
            original: Position::default(),
        }
    }

    /// Original text, carried over with its positions.
    fn copy(&mut self, text: &str) {
        for piece in text.split_inclusive('\n') {
            if !is_line_break(piece) {
                self.mappings.add(self.generated, self.original);
            }
            self.generated.advance(piece);
            self.original.advance(piece);
            self.code.push_str(piece);
        }
    }

    /// New text, mapped to the current original position.
    fn synthesize(&mut self, text: &str) {
        for piece in text.split_inclusive('\n') {
            if !is_line_break(piece) {
                self.mappings.add(self.generated, self.original);
            }
            self.generated.advance(piece);
            self.code.push_str(piece);
        }
    }

    /// Original text that was replaced.
    fn skip(&mut self, text: &str) {
        self.original.advance(text);
    }
}

fn is_line_break(piece: &str) -> bool {
    matches!(piece, "\n" | "\r\n")
}
