use std::{fmt, sync::LazyLock};

use regex::RegexSet;

/// Extension of a file that gets converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceExtension {
    Js,
    Jsx,
}

/// Extension written in place of a [`SourceExtension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetExtension {
    Ts,
    Tsx,
}

impl SourceExtension {
    pub const ALL: [SourceExtension; 2] = [SourceExtension::Js, SourceExtension::Jsx];

    /// Suffix including the leading dot.
    pub fn suffix(self) -> &'static str {
        match self {
            SourceExtension::Js => ".js",
            SourceExtension::Jsx => ".jsx",
        }
    }
}

impl TargetExtension {
    pub fn suffix(self) -> &'static str {
        match self {
            TargetExtension::Ts => ".ts",
            TargetExtension::Tsx => ".tsx",
        }
    }
}

impl fmt::Display for SourceExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl fmt::Display for TargetExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

// <Name>, <Name attr>, <div>, <div attr>, <>, </>, <Name ... />
static MARKUP: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"<[A-Z][A-Za-z0-9_.]*(\s[^<>]*)?>",
        r"<[a-z][A-Za-z0-9_-]*(\s[^<>]*)?>",
        r"<>",
        r"</>",
        r"<[A-Z][A-Za-z0-9_.]*(\s[^<>]*)?/>",
    ])
    .unwrap_or_else(|e| panic!("invalid markup pattern: {e}"))
});

/// Whether `content` looks like it contains JSX.
pub fn has_markup(content: &str) -> bool {
    MARKUP.is_match(content)
}

/// Pick the TypeScript extension for a source file.
///
/// `.jsx` always becomes `.tsx`. A `.js` file becomes `.tsx` only when its
/// content trips one of the markup heuristics in [`has_markup`].
pub fn classify(source: SourceExtension, content: &str) -> TargetExtension {
    match source {
        SourceExtension::Jsx => TargetExtension::Tsx,
        SourceExtension::Js if has_markup(content) => TargetExtension::Tsx,
        SourceExtension::Js => TargetExtension::Ts,
    }
}
