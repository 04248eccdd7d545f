//! Template text with pronoun placeholders.
//!
//! ```text
//! {Subject} likes {object}self.
//! ╰───────╯       ╰──────╯
//!  capitalized     as stored
//! ```
//!
//! A placeholder names a grammatical form (`subject`, `possessiveAdjective`,
//! `rfx`, ...) or any surface pronoun (`{him}`, `{Their}`), which is mapped
//! to its form through the pronoun source at render time. `{{` and `}}` are
//! literal braces.

use std::fmt;
use std::mem;

use layered_pronouns::{PronounForm, PronounResult};

use crate::{PronounSource, TemplateError, TemplateResult};

/// How a substituted value is cased, taken from the placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseHint {
    /// First letter lowercase: the value as stored.
    AsIs,
    /// First letter uppercase: capitalize the first grapheme.
    Capitalized,
    /// Every letter uppercase (more than one): uppercase the whole value.
    Upper,
}

impl CaseHint {
    /// Derive the hint from the letters of a placeholder token.
    pub fn from_token(token: &str) -> Self {
        let mut letters = token.chars().filter(|c| c.is_alphabetic());
        match letters.next() {
            Some(first) if first.is_uppercase() => {
                let rest: Vec<char> = letters.collect();
                if !rest.is_empty() && rest.iter().all(|c| c.is_uppercase()) {
                    Self::Upper
                } else {
                    Self::Capitalized
                }
            }
            _ => Self::AsIs,
        }
    }
}

/// One placeholder: its token and the case hint derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    token: String,
    case: CaseHint,
}

impl Placeholder {
    pub fn new(token: impl Into<String>) -> TemplateResult<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(TemplateError::EmptyPlaceholder);
        }
        let case = CaseHint::from_token(&token);
        Ok(Self { token, case })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn case(&self) -> CaseHint {
        self.case
    }

    /// The form this placeholder stands for.
    ///
    /// Form names win over surface pronouns; surface pronouns are tried as
    /// written, then lowercased.
    pub fn form<S: PronounSource + ?Sized>(&self, source: &S) -> PronounResult<PronounForm> {
        if let Some(form) = PronounForm::from_name(&self.token) {
            return Ok(form);
        }

        match source.identify(&self.token) {
            Ok(form) => Ok(form),
            Err(err) => {
                let lower = self.token.to_lowercase();
                if lower == self.token {
                    return Err(err);
                }
                source.identify(&lower).map_err(|_| err)
            }
        }
    }
}

/// A piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Parsed template: literal text interleaved with placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `{placeholder}` syntax.
    pub fn parse(text: &str) -> TemplateResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut token = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, '{')) => {
                                return Err(TemplateError::Parse {
                                    position: pos,
                                    message: "nested '{' inside placeholder".to_string(),
                                });
                            }
                            Some((_, c)) => token.push(c),
                            None => {
                                return Err(TemplateError::Parse {
                                    position: pos,
                                    message: "unclosed placeholder: expected '}'".to_string(),
                                });
                            }
                        }
                    }

                    if token.trim().is_empty() {
                        return Err(TemplateError::Parse {
                            position: pos,
                            message: "empty placeholder".to_string(),
                        });
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(Placeholder::new(token)?));
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => {
                    return Err(TemplateError::Parse {
                        position: pos,
                        message: "unmatched '}'".to_string(),
                    });
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Build from literal segments surrounding ordered placeholder names.
    ///
    /// There must be exactly one more literal than placeholders; literals
    /// are taken verbatim.
    ///
    /// ```
    /// use layered_pronoun_template::Template;
    ///
    /// let template = Template::from_parts(["", " likes ", "self."], ["Subject", "object"]).unwrap();
    /// assert_eq!(template.to_string(), "{Subject} likes {object}self.");
    /// ```
    pub fn from_parts<L, P>(literals: L, placeholders: P) -> TemplateResult<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
        let placeholders = placeholders
            .into_iter()
            .map(Placeholder::new)
            .collect::<TemplateResult<Vec<_>>>()?;

        if literals.len() != placeholders.len() + 1 {
            return Err(TemplateError::Shape {
                literals: literals.len(),
                placeholders: placeholders.len(),
            });
        }

        let mut segments = Vec::with_capacity(literals.len() + placeholders.len());
        let mut literals = literals.into_iter();
        for placeholder in placeholders {
            if let Some(literal) = literals.next().filter(|l| !l.is_empty()) {
                segments.push(Segment::Literal(literal));
            }
            segments.push(Segment::Placeholder(placeholder));
        }
        if let Some(literal) = literals.next().filter(|l| !l.is_empty()) {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholders in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    f.write_str(&text.replace('{', "{{").replace('}', "}}"))?
                }
                Segment::Placeholder(placeholder) => write!(f, "{{{}}}", placeholder.token)?,
            }
        }
        Ok(())
    }
}
