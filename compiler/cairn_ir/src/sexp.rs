//! S-expression text form.
//!
//! ```text
//! (top
//!   (trait T
//!     (typeparams (typeparam X))
//!     (classbody
//!       (fieldlet v (explicit) (type (fqtype (typepath (typetraitname T (typeargs))) (typeparamname X (typeargs)))) (dontcare)))))
//! ```
//!
//! Every form is `(keyword [identifier] child*)`. Named kinds take exactly
//! one identifier atom, unnamed kinds take none. `;` starts a comment that
//! runs to the end of the line.

use crate::{Ast, Kind, NodeId, ShapeError, Span, SpanError, StringInterner};

/// Error reading the text form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str, span: Span },

    #[error("unexpected `{found}`, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
    },

    #[error("unknown node kind `{keyword}`")]
    UnknownKind { keyword: String, span: Span },

    #[error("`{kind}` requires an identifier")]
    MissingName { kind: Kind, span: Span },

    #[error("program must be a single `(top ...)` form")]
    ExpectedTop { span: Span },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Span(#[from] SpanError),
}

impl ParseError {
    /// Location the error points at.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedEof { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnknownKind { span, .. }
            | ParseError::MissingName { span, .. }
            | ParseError::ExpectedTop { span } => *span,
            ParseError::Shape(err) => err.span,
            ParseError::Span(_) => Span::DUMMY,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Atom,
}

struct Lexer<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    fn new(src: &'src str) -> Self {
        Lexer { src, pos: 0 }
    }

    fn skip_trivia(&mut self) {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b';' => {
                    while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                b if b.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Next token with its byte range, `None` at end of input.
    fn next(&mut self) -> Option<(Token, std::ops::Range<usize>)> {
        self.skip_trivia();
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let token = match *bytes.get(start)? {
            b'(' => {
                self.pos += 1;
                Token::Open
            }
            b')' => {
                self.pos += 1;
                Token::Close
            }
            _ => {
                while self.pos < bytes.len()
                    && !bytes[self.pos].is_ascii_whitespace()
                    && !matches!(bytes[self.pos], b'(' | b')' | b';')
                {
                    self.pos += 1;
                }
                Token::Atom
            }
        };
        Some((token, start..self.pos))
    }

    fn peek(&self) -> Option<(Token, std::ops::Range<usize>)> {
        Lexer {
            src: self.src,
            pos: self.pos,
        }
        .next()
    }

    fn text(&self, range: std::ops::Range<usize>) -> &'src str {
        &self.src[range]
    }

    fn eof_span(&self) -> Result<Span, SpanError> {
        Span::try_from_range(self.src.len()..self.src.len())
    }
}

/// A form that has been opened but not yet closed.
struct Open {
    node: NodeId,
    start: usize,
}

/// Read a program, then check its shape.
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len()))]
pub fn parse_program(src: &str, interner: &StringInterner) -> Result<Ast, ParseError> {
    let mut ast = Ast::with_capacity(src.len());
    let mut lexer = Lexer::new(src);
    let mut stack: Vec<Open> = Vec::new();

    match lexer.next() {
        Some((Token::Open, open)) => match lexer.next() {
            Some((Token::Atom, kw)) if lexer.text(kw.clone()) == Kind::Top.as_str() => {
                stack.push(Open {
                    node: ast.root(),
                    start: open.start,
                });
            }
            Some((_, range)) => {
                return Err(ParseError::ExpectedTop {
                    span: Span::try_from_range(range)?,
                })
            }
            None => {
                return Err(ParseError::UnexpectedEof {
                    expected: "`top`",
                    span: lexer.eof_span()?,
                })
            }
        },
        Some((_, range)) => {
            return Err(ParseError::ExpectedTop {
                span: Span::try_from_range(range)?,
            })
        }
        None => {
            return Err(ParseError::UnexpectedEof {
                expected: "`(top`",
                span: lexer.eof_span()?,
            })
        }
    }

    while let Some(open) = stack.last() {
        let parent = open.node;
        let Some((token, range)) = lexer.next() else {
            return Err(ParseError::UnexpectedEof {
                expected: "`)`",
                span: lexer.eof_span()?,
            });
        };

        match token {
            Token::Close => {
                let start = open.start;
                ast.set_span(parent, Span::try_from_range(start..range.end)?);
                stack.pop();
            }
            Token::Atom => {
                return Err(ParseError::UnexpectedToken {
                    found: lexer.text(range.clone()).to_owned(),
                    expected: "`(` or `)`",
                    span: Span::try_from_range(range)?,
                });
            }
            Token::Open => {
                let node = read_head(&mut lexer, &mut ast, interner, range.start)?;
                ast.push_child(parent, node);
                stack.push(Open {
                    node,
                    start: range.start,
                });
            }
        }
    }

    if let Some((_, range)) = lexer.next() {
        return Err(ParseError::UnexpectedToken {
            found: lexer.text(range.clone()).to_owned(),
            expected: "end of input",
            span: Span::try_from_range(range)?,
        });
    }

    ast.validate()?;
    Ok(ast)
}

/// Read `keyword [identifier]` after an opening paren and allocate the node.
fn read_head(
    lexer: &mut Lexer<'_>,
    ast: &mut Ast,
    interner: &StringInterner,
    open: usize,
) -> Result<NodeId, ParseError> {
    let (kind, kw_range) = match lexer.next() {
        Some((Token::Atom, range)) => {
            let keyword = lexer.text(range.clone());
            match Kind::from_keyword(keyword) {
                Some(Kind::Top) | None => {
                    return Err(ParseError::UnknownKind {
                        keyword: keyword.to_owned(),
                        span: Span::try_from_range(range)?,
                    })
                }
                Some(kind) => (kind, range),
            }
        }
        Some((_, range)) => {
            return Err(ParseError::UnexpectedToken {
                found: lexer.text(range.clone()).to_owned(),
                expected: "node kind",
                span: Span::try_from_range(range)?,
            })
        }
        None => {
            return Err(ParseError::UnexpectedEof {
                expected: "node kind",
                span: lexer.eof_span()?,
            })
        }
    };

    let mut name = crate::Name::EMPTY;
    if kind.is_named() {
        match lexer.peek() {
            Some((Token::Atom, range)) => {
                lexer.next();
                name = interner.intern(lexer.text(range));
            }
            _ => {
                return Err(ParseError::MissingName {
                    kind,
                    span: Span::try_from_range(open..kw_range.end)?,
                })
            }
        }
    }

    Ok(ast.alloc(kind, name, Span::try_from_range(open..kw_range.end)?))
}
