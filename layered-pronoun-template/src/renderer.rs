//! Rendering templates against a pronoun source.

use layered_pronouns::PronounRecord;
use unicode_segmentation::UnicodeSegmentation;

use crate::{CaseHint, PronounSource, Segment, Template, TemplateResult};

/// Renders templates with one pronoun record per render.
///
/// Every placeholder of a render is filled from the same record, so a
/// sentence never mixes "he" with "her". Each placeholder takes the primary
/// entry of its form.
///
/// ```
/// use layered_pronoun_template::TemplateRenderer;
/// use layered_pronouns::Registry;
///
/// let registry = Registry::new();
/// let group = registry.create_group("she", "/").unwrap();
/// let renderer = TemplateRenderer::new(&group);
/// assert_eq!(renderer.render_str("{Subject} did it {reflexive}.").unwrap(), "She did it herself.");
/// ```
#[derive(Debug)]
pub struct TemplateRenderer<'s, S: ?Sized> {
    source: &'s S,
}

impl<'s, S: PronounSource + ?Sized> TemplateRenderer<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    /// Pick a record from the source and fill every placeholder from it.
    pub fn render(&self, template: &Template) -> TemplateResult<String> {
        let record = self.source.pick()?;
        tracing::trace!("rendering template with '{}'", record.identity());
        self.render_record(template, &record)
    }

    /// Parse and render in one step.
    pub fn render_str(&self, text: &str) -> TemplateResult<String> {
        self.render(&Template::parse(text)?)
    }

    /// Fill every placeholder from `record`, using the source only to
    /// identify surface-pronoun placeholders.
    pub fn render_record(&self, template: &Template, record: &PronounRecord) -> TemplateResult<String> {
        let mut out = String::new();
        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let form = placeholder.form(self.source)?;
                    out.push_str(&apply_case(record.primary(form), placeholder.case()));
                }
            }
        }
        Ok(out)
    }
}

/// Apply a placeholder's case hint to a substituted value.
pub fn apply_case(value: &str, case: CaseHint) -> String {
    match case {
        CaseHint::AsIs => value.to_string(),
        CaseHint::Upper => value.to_uppercase(),
        CaseHint::Capitalized => {
            let mut graphemes = value.graphemes(true);
            match graphemes.next() {
                Some(first) => first.to_uppercase() + graphemes.as_str(),
                None => String::new(),
            }
        }
    }
}

impl Template {
    /// Render against `source`; see [`TemplateRenderer`].
    pub fn render<S: PronounSource + ?Sized>(&self, source: &S) -> TemplateResult<String> {
        TemplateRenderer::new(source).render(self)
    }
}

/// Parse `text` and render it against `source`.
pub fn render_str<S: PronounSource + ?Sized>(text: &str, source: &S) -> TemplateResult<String> {
    TemplateRenderer::new(source).render_str(text)
}
