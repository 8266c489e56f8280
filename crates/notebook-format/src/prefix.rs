//! Line-prefixing shared by the outline and py-percent renderers.

/// Prefixes applied to a block of source lines by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPrefixes {
    /// Used when the block has exactly one line.
    pub single: &'static str,
    pub first: &'static str,
    pub interior: &'static str,
    pub last: &'static str,
}

impl BlockPrefixes {
    /// Every line gets the same prefix, regardless of position.
    pub const fn uniform(prefix: &'static str) -> Self {
        Self {
            single: prefix,
            first: prefix,
            interior: prefix,
            last: prefix,
        }
    }
}

/// Prefix each line according to its position in the block. Line content
/// is carried verbatim after the prefix.
pub fn decorate(lines: &[String], prefixes: &BlockPrefixes) -> Vec<String> {
    match lines.len() {
        0 => Vec::new(),
        1 => vec![format!("{}{}", prefixes.single, lines[0])],
        len => lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let prefix = if idx == 0 {
                    prefixes.first
                } else if idx == len - 1 {
                    prefixes.last
                } else {
                    prefixes.interior
                };
                format!("{prefix}{line}")
            })
            .collect(),
    }
}
