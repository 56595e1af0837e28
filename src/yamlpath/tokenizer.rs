//! YAMLPath string tokenizer.
//!
//! Splits a path string into raw, unclassified tokens. Dot-delimited paths
//! (`hash.child.key`) and slash-delimited paths (`/hash/child/key`) are both
//! accepted; the leading `/` selects the slash form.

use super::error::NavigationError;

/// A raw path token prior to classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text accumulated between separators. `verbatim` is set when any part
    /// of it was quoted or escaped.
    Key { text: String, verbatim: bool },
    /// A bracket clause, including the enclosing `[` and `]`.
    Bracket(String),
}

#[cfg(test)]
impl Token {
    /// Creates an unquoted key token.
    pub fn plain(text: impl Into<String>) -> Self {
        Token::Key {
            text: text.into(),
            verbatim: false,
        }
    }

    /// Creates a quoted (or escaped) key token.
    pub fn quoted(text: impl Into<String>) -> Self {
        Token::Key {
            text: text.into(),
            verbatim: true,
        }
    }
}

/// Tokenizer over a single path string.
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
    separator: char,
    tokens: Vec<Token>,
    buffer: String,
    verbatim: bool,
}

impl Tokenizer {
    /// Creates a new tokenizer for the given path string.
    pub fn new(path: &str) -> Self {
        let mut input: Vec<char> = path.chars().collect();
        let separator = if input.first() == Some(&'/') {
            input.remove(0);
            '/'
        } else {
            '.'
        };
        Self {
            input,
            position: 0,
            separator,
            tokens: Vec::new(),
            buffer: String::new(),
            verbatim: false,
        }
    }

    /// Tokenizes the path string into raw tokens.
    pub fn tokenize(path: &str) -> Result<Vec<Token>, NavigationError> {
        Tokenizer::new(path).run()
    }

    fn run(mut self) -> Result<Vec<Token>, NavigationError> {
        while let Some(ch) = self.next() {
            match ch {
                c if c == self.separator => self.flush(),
                '\\' => {
                    let escaped = self.next().ok_or(NavigationError::DanglingEscape)?;
                    self.buffer.push(escaped);
                    self.verbatim = true;
                }
                '\'' | '"' => self.read_quoted(ch)?,
                '[' => {
                    self.flush();
                    let clause = self.read_bracket()?;
                    self.tokens.push(Token::Bracket(clause));
                }
                c => self.buffer.push(c),
            }
        }
        self.flush();
        Ok(self.tokens)
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Everything from `start` to the end of input.
    fn tail_from(&self, start: usize) -> String {
        self.input[start..].iter().collect()
    }

    /// Emits the pending key buffer if it holds anything.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.tokens.push(Token::Key {
                text,
                verbatim: self.verbatim,
            });
        }
        self.verbatim = false;
    }

    /// Reads a quoted run after its opening `quote`, appending the content
    /// to the pending key buffer.
    fn read_quoted(&mut self, quote: char) -> Result<(), NavigationError> {
        let start = self.position - 1;
        self.verbatim = true;
        loop {
            match self.next() {
                Some(ch) if ch == quote => return Ok(()),
                Some('\\') => match self.next() {
                    Some(escaped) => self.buffer.push(escaped),
                    None => break,
                },
                Some(ch) => self.buffer.push(ch),
                None => break,
            }
        }
        Err(NavigationError::Unterminated {
            terminator: quote,
            remainder: self.tail_from(start),
        })
    }

    /// Reads a bracket clause after its opening `[`. No nesting.
    fn read_bracket(&mut self) -> Result<String, NavigationError> {
        let start = self.position - 1;
        let mut clause = String::from('[');
        while let Some(ch) = self.next() {
            clause.push(ch);
            if ch == ']' {
                return Ok(clause);
            }
        }
        Err(NavigationError::Unterminated {
            terminator: ']',
            remainder: self.tail_from(start),
        })
    }
}
