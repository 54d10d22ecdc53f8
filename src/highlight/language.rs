use std::path::Path;

/// Languages the highlighter knows keywords for. Everything other than the
/// keyword set (strings, comments, numbers) is shared by all of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Java,
    Python,
    JavaScript,
    #[default]
    PlainText,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Java,
        Language::Python,
        Language::JavaScript,
        Language::PlainText,
    ];

    /// Pick a language from a file extension (without the leading dot), ignoring case.
    /// Unknown extensions are plain text.
    pub fn from_extension(extension: &str) -> Language {
        match extension.to_ascii_lowercase().as_str() {
            "java" => Language::Java,
            "py" => Language::Python,
            "js" => Language::JavaScript,
            _ => Language::PlainText,
        }
    }

    /// Pick a language from the extension of a file name or path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Language {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Language::from_extension)
            .unwrap_or_default()
    }

    /// The reserved words of this language
    pub fn keywords(self) -> &'static KeywordSet {
        match self {
            Language::Java => &JAVA,
            Language::Python => &PYTHON,
            Language::JavaScript => &JAVASCRIPT,
            Language::PlainText => &PLAIN_TEXT,
        }
    }
}

/// An immutable set of reserved words. Matching against it is case-sensitive.
#[derive(Debug, PartialEq, Eq)]
pub struct KeywordSet {
    words: &'static [&'static str],
}

impl KeywordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

static PLAIN_TEXT: KeywordSet = KeywordSet { words: &[] };

static JAVA: KeywordSet = KeywordSet {
    words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
        "null",
    ],
};

static PYTHON: KeywordSet = KeywordSet {
    words: &[
        "False", "None", "True", "and", "as", "assert", "break", "class", "continue", "def",
        "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
        "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
        "while", "with", "yield", "async", "await",
    ],
};

static JAVASCRIPT: KeywordSet = KeywordSet {
    words: &[
        "abstract", "arguments", "await", "boolean", "break", "byte", "case", "catch", "char",
        "class", "const", "continue", "debugger", "default", "delete", "do", "double", "else",
        "enum", "eval", "export", "extends", "false", "final", "finally", "float", "for",
        "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
        "let", "long", "native", "new", "null", "package", "private", "protected", "public",
        "return", "short", "static", "super", "switch", "synchronized", "this", "throw", "throws",
        "transient", "true", "try", "typeof", "var", "void", "volatile", "while", "with", "yield",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_from_file_name() {
        assert_eq!(Language::from_path("Main.java"), Language::Java);
        assert_eq!(Language::from_path("/tmp/SCRIPT.PY"), Language::Python);
        assert_eq!(Language::from_path("app.min.js"), Language::JavaScript);
        assert_eq!(Language::from_path("notes.txt"), Language::PlainText);
        assert_eq!(Language::from_path("Makefile"), Language::PlainText);
    }

    #[test]
    fn keyword_tables() {
        assert_eq!(Language::Java.keywords().len(), 53);
        assert_eq!(Language::Python.keywords().len(), 35);
        assert_eq!(Language::JavaScript.keywords().len(), 64);
        assert!(Language::PlainText.keywords().is_empty());

        assert!(Language::Python.keywords().contains("True"));
        assert!(!Language::Python.keywords().contains("true"));
        assert!(Language::JavaScript.keywords().contains("typeof"));
        assert!(!Language::Java.keywords().contains("typeof"));
    }
}
