use std::fmt;

/// String helpers that count in characters, never in bytes.
pub trait StrExt {
    /// The first `count` characters; the whole string when shorter.
    fn beginning(&self, count: usize) -> &str;

    /// The last `count` characters; the whole string when shorter.
    fn ending(&self, count: usize) -> &str;

    /// Deletes every occurrence of each word.
    fn remove_words(&self, words: &[&str]) -> String;

    /// Keeps only the characters present in `keep`.
    fn retain_chars(&self, keep: &str) -> String;

    /// Number of line breaks, counting a CRLF pair as one break.
    fn number_of_lines(&self) -> usize;
}

impl StrExt for str {
    fn beginning(&self, count: usize) -> &str {
        match self.char_indices().nth(count) {
            Some((at, _)) => &self[..at],
            None => self,
        }
    }

    fn ending(&self, count: usize) -> &str {
        let total = self.chars().count();
        if total <= count {
            return self;
        }
        match self.char_indices().nth(total - count) {
            Some((at, _)) => &self[at..],
            None => self,
        }
    }

    fn remove_words(&self, words: &[&str]) -> String {
        let mut result = self.to_string();
        for word in words {
            result = result.replace(word, "");
        }
        result
    }

    fn retain_chars(&self, keep: &str) -> String {
        self.chars().filter(|c| keep.contains(*c)).collect()
    }

    fn number_of_lines(&self) -> usize {
        let mut count = 0;
        let mut hit: Option<(usize, char)> = None;

        for (i, c) in self.chars().enumerate() {
            if c == '\r' || c == '\n' {
                // The second half of a CRLF (or LFCR) pair is absorbed
                // into the break counted for the first half.
                let absorbed = hit.map_or(false, |(at, prev)| at + 1 == i && prev != c);
                if !absorbed {
                    count += 1;
                    hit = Some((i, c));
                }
            }
        }

        count
    }
}

/// Separator-aware string accumulator: the separator lands only between
/// items, each item can carry a prefix and suffix, and the rendered result
/// can be wrapped in begin/end strings.
#[derive(Debug, Default)]
pub struct Joiner {
    buffer: String,
    separator: String,
    prefix: Option<String>,
    suffix: Option<String>,
    begin: Option<String>,
    end: Option<String>,
    count: usize,
}

impl Joiner {
    pub fn new(separator: impl Into<String>) -> Self {
        Joiner {
            separator: separator.into(),
            ..Joiner::default()
        }
    }

    /// Prefix prepended to every added item.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Suffix appended to every added item.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Strings wrapped around the whole rendered result.
    pub fn bounds(mut self, begin: impl Into<String>, end: impl Into<String>) -> Self {
        self.begin = Some(begin.into());
        self.end = Some(end.into());
        self
    }

    /// Appends one item with separator, prefix, and suffix handling.
    pub fn add(&mut self, text: &str) -> &mut Self {
        if self.count > 0 {
            self.buffer.push_str(&self.separator);
        }
        if let Some(prefix) = &self.prefix {
            self.buffer.push_str(prefix);
        }
        self.buffer.push_str(text);
        if let Some(suffix) = &self.suffix {
            self.buffer.push_str(suffix);
        }
        self.count += 1;
        self
    }

    /// Appends when `text` is present; a `None` is skipped without
    /// consuming a separator slot.
    pub fn add_opt(&mut self, text: Option<&str>) -> &mut Self {
        if let Some(text) = text {
            self.add(text);
        }
        self
    }

    /// Appends verbatim, bypassing separator and affix handling.
    pub fn add_raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Number of items added so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(begin) = &self.begin {
            f.write_str(begin)?;
        }
        f.write_str(&self.buffer)?;
        if let Some(end) = &self.end {
            f.write_str(end)?;
        }
        Ok(())
    }
}
