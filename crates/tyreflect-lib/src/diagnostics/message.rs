use std::ops::Range;

/// Diagnostic kinds, errors first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Parse failures: the file is not transformed at all
    SyntaxError,
    MissingToken,

    // A construct was recognized but left unchanged
    UnsupportedTypeNode,
    UntypedReducer,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::SyntaxError | Self::MissingToken => Severity::Error,
            Self::UnsupportedTypeNode | Self::UntypedReducer => Severity::Warning,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedTypeNode => Some(
                "supported: scalar names (`u32`, `str`, ...), `boolean`, `number`, `string`, \
                 `T[]`, `Array<T>` and type names",
            ),
            Self::UntypedReducer => {
                Some("annotate every parameter, e.g. `(amount: u64, memo: str) => ...`")
            }
            _ => None,
        }
    }

    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax error",
            Self::MissingToken => "missing token",
            Self::UnsupportedTypeNode => "unsupported type annotation",
            Self::UntypedReducer => "reducer handler has no parameter types",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::MissingToken => "expected `{}`".to_string(),
            Self::UnsupportedTypeNode => "unsupported type annotation `{}`".to_string(),
            Self::UntypedReducer => {
                "`{}` handler has no parameter types; it would register without argument types"
                    .to_string()
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Byte range shown to the user (underlined in output).
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(str::to_owned).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            self.range.start,
            self.range.end,
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.range.start, related.range.end
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
