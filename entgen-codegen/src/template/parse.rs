//! Parser for text template sources.

use super::TemplateError;

/// A parsed text template.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTemplate {
    name: String,
    source_name: String,
    pub(crate) nodes: Vec<Node>,
}

impl TextTemplate {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File (or other origin) the template was parsed from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Parse every template defined in `text`.
    ///
    /// A source without `define` blocks is a single template named `stem`.
    /// Sources with `define` blocks may hold nothing but whitespace and
    /// comments outside of them.
    pub fn parse_all(
        source_name: &str,
        stem: &str,
        text: &str,
    ) -> Result<Vec<TextTemplate>, TemplateError> {
        Parser::new(source_name, stem).parse(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RangeTarget {
    Fields,
    Edges,
    Entities,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Text(String),
    Var { path: String },
    Range { target: RangeTarget, body: Vec<Node> },
    Include { name: String },
}

#[derive(Debug, PartialEq)]
enum Token {
    Text(String),
    Action { body: String, line: usize },
}

/// Split `text` into literal text and `{{ ... }}` actions, applying the
/// `{{-` / `-}}` trim markers and dropping comments.
fn lex(source_name: &str, text: &str) -> Result<Vec<Token>, TemplateError> {
    let mut tokens = Vec::new();
    let mut rest = text;
    let mut line = 1;
    let mut trim_next = false;

    while let Some(start) = rest.find("{{") {
        let action_line = line + count_lines(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            return Err(TemplateError::syntax(
                source_name,
                action_line,
                "unclosed action",
            ));
        };

        let mut inner = &after_open[..end];
        let mut before = &rest[..start];
        if trim_next {
            before = before.trim_start();
        }
        if let Some(stripped) = inner
            .strip_prefix('-')
            .filter(|s| s.starts_with(char::is_whitespace))
        {
            inner = stripped;
            before = before.trim_end();
        }
        trim_next = false;
        if let Some(stripped) = inner
            .strip_suffix('-')
            .filter(|s| s.ends_with(char::is_whitespace))
        {
            inner = stripped;
            trim_next = true;
        }

        if !before.is_empty() {
            tokens.push(Token::Text(before.to_string()));
        }

        let body = inner.trim();
        let is_comment = body.starts_with("/*") && body.ends_with("*/") && body.len() >= 4;
        if !is_comment {
            tokens.push(Token::Action {
                body: body.to_string(),
                line: action_line,
            });
        }

        let consumed = start + 2 + end + 2;
        line += count_lines(&rest[..consumed]);
        rest = &rest[consumed..];
    }

    let tail = if trim_next { rest.trim_start() } else { rest };
    if !tail.is_empty() {
        tokens.push(Token::Text(tail.to_string()));
    }
    Ok(tokens)
}

fn count_lines(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count()
}

enum Frame {
    Define {
        name: String,
        line: usize,
        nodes: Vec<Node>,
    },
    Range {
        target: RangeTarget,
        line: usize,
        nodes: Vec<Node>,
    },
}

struct Parser<'a> {
    source_name: &'a str,
    stem: &'a str,
    stack: Vec<Frame>,
    top: Vec<Node>,
    /// Line of the first non-blank content outside of any define block
    stray: Option<usize>,
    defines: Vec<TextTemplate>,
}

impl<'a> Parser<'a> {
    fn new(source_name: &'a str, stem: &'a str) -> Self {
        Self {
            source_name,
            stem,
            stack: Vec::new(),
            top: Vec::new(),
            stray: None,
            defines: Vec::new(),
        }
    }

    fn parse(mut self, text: &str) -> Result<Vec<TextTemplate>, TemplateError> {
        let mut last_line = 1;
        for token in lex(self.source_name, text)? {
            match token {
                Token::Text(text) => {
                    let blank = text.trim().is_empty();
                    self.push(Node::Text(text), blank, last_line);
                }
                Token::Action { body, line } => {
                    last_line = line;
                    self.action(&body, line)?;
                }
            }
        }

        if let Some(frame) = self.stack.last() {
            let (line, what) = match frame {
                Frame::Define { name, line, .. } => (*line, format!("define \"{name}\"")),
                Frame::Range { line, .. } => (*line, "range".to_string()),
            };
            return Err(self.error(line, format!("unterminated {{{{ {what} }}}}")));
        }

        if self.defines.is_empty() {
            return Ok(vec![TextTemplate {
                name: self.stem.to_string(),
                source_name: self.source_name.to_string(),
                nodes: self.top,
            }]);
        }
        if let Some(line) = self.stray {
            return Err(self.error(line, "content outside of {{ define }} blocks"));
        }
        Ok(self.defines)
    }

    fn action(&mut self, body: &str, line: usize) -> Result<(), TemplateError> {
        let (keyword, arg) = match body.split_once(char::is_whitespace) {
            Some((keyword, arg)) => (keyword, arg.trim()),
            None => (body, ""),
        };

        match keyword {
            "define" => {
                if !self.stack.is_empty() {
                    return Err(self.error(line, "define is only allowed at the top level"));
                }
                let name = self.quoted(arg, line)?;
                self.stack.push(Frame::Define {
                    name,
                    line,
                    nodes: Vec::new(),
                });
            }
            "range" => {
                let target = match arg {
                    "fields" => RangeTarget::Fields,
                    "edges" => RangeTarget::Edges,
                    "entities" => RangeTarget::Entities,
                    other => {
                        return Err(TemplateError::InvalidRange {
                            template: self.current_name().to_string(),
                            target: other.to_string(),
                        });
                    }
                };
                self.stack.push(Frame::Range {
                    target,
                    line,
                    nodes: Vec::new(),
                });
            }
            "end" if arg.is_empty() => match self.stack.pop() {
                Some(Frame::Define { name, nodes, .. }) => {
                    self.defines.push(TextTemplate {
                        name,
                        source_name: self.source_name.to_string(),
                        nodes,
                    });
                }
                Some(Frame::Range { target, nodes, .. }) => {
                    self.push(Node::Range { target, body: nodes }, false, line);
                }
                None => return Err(self.error(line, "unexpected {{ end }}")),
            },
            "template" => {
                let name = self.quoted(arg, line)?;
                self.push(Node::Include { name }, false, line);
            }
            path if arg.is_empty() && is_variable_path(path) => {
                self.push(
                    Node::Var {
                        path: path.to_string(),
                    },
                    false,
                    line,
                );
            }
            _ => return Err(self.error(line, format!("unsupported action '{body}'"))),
        }
        Ok(())
    }

    fn push(&mut self, node: Node, blank: bool, line: usize) {
        match self.stack.last_mut() {
            Some(Frame::Define { nodes, .. } | Frame::Range { nodes, .. }) => nodes.push(node),
            None => {
                if !blank && self.stray.is_none() {
                    self.stray = Some(line);
                }
                self.top.push(node);
            }
        }
    }

    fn current_name(&self) -> &str {
        self.stack
            .iter()
            .find_map(|frame| match frame {
                Frame::Define { name, .. } => Some(name.as_str()),
                Frame::Range { .. } => None,
            })
            .unwrap_or(self.stem)
    }

    fn quoted(&self, arg: &str, line: usize) -> Result<String, TemplateError> {
        arg.strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .filter(|s| !s.is_empty() && !s.contains('"'))
            .map(str::to_string)
            .ok_or_else(|| self.error(line, format!("expected a quoted template name, found '{arg}'")))
    }

    fn error(&self, line: usize, message: impl Into<String>) -> TemplateError {
        TemplateError::syntax(self.source_name, line, message)
    }
}

fn is_variable_path(path: &str) -> bool {
    path.split('.').all(|segment| {
        segment.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
            && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}
