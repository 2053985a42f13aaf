/// Number of fields per row: the group label plus one cell per vowel.
const FIELDS: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("{0} source has no rows")]
    Empty(&'static str),
    #[error("{name} line {line}: expected 6 fields, found {found}")]
    FieldCount {
        name: &'static str,
        line: usize,
        found: usize,
    },
    #[error("row count mismatch: {hiragana} hiragana rows vs {romanization} romanization rows")]
    RowCount { hiragana: usize, romanization: usize },
    #[error("line {line}: group {hiragana:?} does not match {romanization:?}")]
    GroupMismatch {
        line: usize,
        hiragana: String,
        romanization: String,
    },
    #[error("line {line}, column {column}: cell is empty in only one source")]
    CellMismatch { line: usize, column: usize },
    #[error("line {line}, column {column}: {cell:?} is not a single kana")]
    NotSingleKana {
        line: usize,
        column: usize,
        cell: String,
    },
    #[error("missing group row: {0}")]
    MissingGroup(&'static str),
    #[error("mora table already initialized")]
    AlreadyInitialized,
}

/// One consonant-group row of a raw source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line number in the source text
    pub line: usize,
    /// Group label from the first column (e.g. "k")
    pub group: String,
    /// Vowel cells a/i/u/e/o; empty where the syllabary has a gap
    pub cells: Vec<String>,
}

/// Parse a comma-separated source into group rows, skipping the header.
///
/// Blank lines are ignored. Trailing whitespace is stripped from every field.
pub fn parse_source(name: &'static str, text: &str) -> Result<Vec<SourceRow>, FormatError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l));

    let (header_line, header) = lines.next().ok_or(FormatError::Empty(name))?;
    let found = header.split(',').count();
    if found != FIELDS {
        return Err(FormatError::FieldCount {
            name,
            line: header_line,
            found,
        });
    }

    let mut rows = Vec::new();
    for (line, text) in lines {
        let mut fields: Vec<String> = text.split(',').map(|f| f.trim_end().to_string()).collect();
        if fields.len() != FIELDS {
            return Err(FormatError::FieldCount {
                name,
                line,
                found: fields.len(),
            });
        }
        let cells = fields.split_off(1);
        let group = fields.remove(0);
        rows.push(SourceRow { line, group, cells });
    }

    if rows.is_empty() {
        return Err(FormatError::Empty(name));
    }
    Ok(rows)
}
