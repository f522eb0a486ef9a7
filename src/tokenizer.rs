// Two kinds of tokens: regular tokens (bare words and double-quoted
// strings) and literal tokens (single-quoted strings). The distinction
// matters downstream: variable substitution applies to regular tokens only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Regular,
    Literal,
}

impl TokenKind {
    // Two-letter tag used when rendering a token line.
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Regular => "reg",
            TokenKind::Literal => "lit",
        }
    }
}

// A token holds its fully decoded value: quotes stripped, escapes resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
}

impl Quote {
    fn closes(self, c: char) -> bool {
        match self {
            Quote::Double => c == '"',
            Quote::Single => c == '\'',
        }
    }

    fn kind(self) -> TokenKind {
        match self {
            Quote::Double => TokenKind::Regular,
            Quote::Single => TokenKind::Literal,
        }
    }
}

// Scanner state. Backslash carries the quote mode to resume, so the escape
// always returns to whichever quoted span it was entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Whitespace,
    Word,
    Quoted(Quote),
    Backslash(Quote),
}

// Effect of one transition on the pending buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Nothing,
    Push(char),
    Flush(TokenKind),
}

// One step of the state machine. Pure: the caller applies the action to
// its pending buffer and token list.
pub fn step(state: State, c: char) -> (State, Action) {
    match state {
        State::Whitespace => match c {
            '"' => (State::Quoted(Quote::Double), Action::Nothing),
            '\'' => (State::Quoted(Quote::Single), Action::Nothing),
            ' ' => (State::Whitespace, Action::Nothing),
            _ => (State::Word, Action::Push(c)),
        },
        State::Word => match c {
            ' ' => (State::Whitespace, Action::Flush(TokenKind::Regular)),
            // Entering a quote mid-word keeps the pending buffer, so the
            // quoted span appends to the same token.
            '"' => (State::Quoted(Quote::Double), Action::Nothing),
            '\'' => (State::Quoted(Quote::Single), Action::Nothing),
            _ => (State::Word, Action::Push(c)),
        },
        State::Quoted(quote) => match c {
            c if quote.closes(c) => (State::Whitespace, Action::Flush(quote.kind())),
            '\\' => (State::Backslash(quote), Action::Nothing),
            _ => (State::Quoted(quote), Action::Push(c)),
        },
        State::Backslash(quote) => {
            let decoded = match c {
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                'b' => '\u{0008}',
                'f' => '\u{000C}',
                'v' => '\u{000B}',
                // Anything else passes through unchanged.
                _ => c,
            };
            (State::Quoted(quote), Action::Push(decoded))
        }
    }
}

pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending = String::new();
    let mut state = State::Whitespace;

    // One synthetic trailing space so a word still in progress at end of
    // input gets flushed. A span left open at that point (unterminated
    // quote or escape) swallows the space instead and is never flushed.
    for c in line.chars().chain(std::iter::once(' ')) {
        let (next, action) = step(state, c);
        match action {
            Action::Nothing => {}
            Action::Push(c) => pending.push(c),
            Action::Flush(kind) => tokens.push(Token {
                kind,
                value: std::mem::take(&mut pending),
            }),
        }
        state = next;
    }

    tokens
}
