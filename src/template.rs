//! The page template and its placeholder tokens.
//!
//! A [`Template`] is an immutable HTML string. It's built once per run, either
//! from the input document's `template` key or from the page shipped in
//! `static/page.html`, and then handed by reference to the renderer.

const BUILTIN_PAGE: &str = include_str!("../static/page.html");

/// Literal markers replaced during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    ElementId,
    Timestamp,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [
        Placeholder::Title,
        Placeholder::ElementId,
        Placeholder::Timestamp,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Placeholder::Title => "{{TITLE}}",
            Placeholder::ElementId => "{{ELEMENT_ID}}",
            Placeholder::Timestamp => "{{TIMESTAMP}}",
        }
    }

    /// The placeholder whose token starts `text`, if any.
    pub fn at_start_of(text: &str) -> Option<Placeholder> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.token()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The page template compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PAGE)
    }

    /// Use the document's own template when it carries one.
    pub fn from_document(template: Option<&str>) -> Self {
        match template {
            Some(t) => Self::new(t),
            None => Self::builtin(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.source.contains(placeholder.token())
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::builtin()
    }
}
