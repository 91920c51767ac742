//! Placeholder substitution.
//!
//! Rendering is a single left-to-right pass over the template. Each
//! placeholder occurrence is replaced exactly once and substituted text is
//! never scanned again, so a title like `"Notes on {{ELEMENT_ID}}"` comes out
//! verbatim instead of picking up the element id. Tokens that aren't known
//! placeholders (`{{AUTHOR}}`) are copied through untouched.
//!
//! No escaping is applied: values are inserted as-is.

use crate::template::{Placeholder, Template};
use crate::types::{PageSpec, RenderedPage};
use chrono::{Local, NaiveDateTime};
use std::path::Path;

/// `{{TIMESTAMP}}` format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Per-run values shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    generated_at: String,
}

impl RenderContext {
    /// Capture the local wall clock once for the whole run.
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(time: NaiveDateTime) -> Self {
        Self {
            generated_at: time.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.generated_at
    }
}

/// Render one page into `output_dir`.
pub fn render_page(
    template: &Template,
    spec: &PageSpec,
    ctx: &RenderContext,
    output_dir: &Path,
) -> RenderedPage {
    let content = substitute(template.as_str(), move |p| match p {
        Placeholder::Title => spec.title.as_str(),
        Placeholder::ElementId => spec.element_id.as_str(),
        Placeholder::Timestamp => ctx.timestamp(),
    });
    RenderedPage {
        title: spec.title.clone(),
        element_id: spec.element_id.clone(),
        filename: spec.filename.clone(),
        path: output_dir.join(&spec.filename),
        content,
    }
}

/// Replace every placeholder in `source` with the value `lookup` returns.
pub fn substitute<'a>(source: &str, lookup: impl Fn(Placeholder) -> &'a str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match Placeholder::at_start_of(tail) {
            Some(p) => {
                out.push_str(lookup(p));
                rest = &tail[p.token().len()..];
            }
            None => {
                // Only one brace: `{{{TITLE}}` still has a token at +1.
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn ctx() -> RenderContext {
        RenderContext::at(
            NaiveDate::from_ymd_opt(2025, 3, 7)
                .unwrap()
                .and_hms_opt(9, 5, 2)
                .unwrap(),
        )
    }

    fn spec(title: &str, element_id: &str) -> PageSpec {
        PageSpec {
            title: title.into(),
            element_id: element_id.into(),
            filename: "observer.html".into(),
        }
    }

    #[test]
    fn timestamp_format() {
        assert_eq!(ctx().timestamp(), "2025-03-07 09:05:02");
    }

    #[test]
    fn replaces_title_and_element_id() {
        let t = Template::new("<title>{{TITLE}}</title><span>{{ELEMENT_ID}}</span>");
        let s = spec("Observer Theory", "text-observer");
        let page = render_page(&t, &s, &ctx(), Path::new("pages"));
        assert_eq!(
            page.content,
            "<title>Observer Theory</title><span>text-observer</span>"
        );
        assert_eq!(page.path, PathBuf::from("pages/observer.html"));
    }

    #[test]
    fn replaces_every_occurrence() {
        let t = Template::new("{{TITLE}} / {{TITLE}} / {{TITLE}}");
        let page = render_page(&t, &spec("X", "e"), &ctx(), Path::new("."));
        assert_eq!(page.content, "X / X / X");
    }

    #[test]
    fn replaces_timestamp() {
        let t = Template::new("Generated: {{TIMESTAMP}}");
        let page = render_page(&t, &spec("X", "e"), &ctx(), Path::new("."));
        assert_eq!(page.content, "Generated: 2025-03-07 09:05:02");
    }

    #[test]
    fn template_without_timestamp_is_fine() {
        let t = Template::new("<h1>{{TITLE}}</h1>");
        let page = render_page(&t, &spec("X", "e"), &ctx(), Path::new("."));
        assert_eq!(page.content, "<h1>X</h1>");
    }

    #[test]
    fn unknown_placeholders_are_left_verbatim() {
        let t = Template::new("{{AUTHOR}} wrote {{TITLE}}");
        let page = render_page(&t, &spec("X", "e"), &ctx(), Path::new("."));
        assert_eq!(page.content, "{{AUTHOR}} wrote X");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let t = Template::new("<h1>{{TITLE}}</h1><span>{{ELEMENT_ID}}</span>");
        let page = render_page(
            &t,
            &spec("Notes on {{ELEMENT_ID}}", "{{TITLE}}"),
            &ctx(),
            Path::new("."),
        );
        assert_eq!(
            page.content,
            "<h1>Notes on {{ELEMENT_ID}}</h1><span>{{TITLE}}</span>"
        );
    }

    #[test]
    fn rendering_twice_is_identical() {
        let t = Template::builtin();
        let s = spec("Observer {{TITLE}} Theory", "text-observer");
        let a = render_page(&t, &s, &ctx(), Path::new("pages"));
        let b = render_page(&t, &s, &ctx(), Path::new("pages"));
        assert_eq!(a.content, b.content);
    }

    #[test]
    fn values_are_not_escaped() {
        let t = Template::new("<h1>{{TITLE}}</h1>");
        let page = render_page(&t, &spec("A & <B>", "e"), &ctx(), Path::new("."));
        assert_eq!(page.content, "<h1>A & <B></h1>");
    }

    #[test]
    fn extra_leading_brace() {
        let out = substitute("{{{TITLE}}}", |_| "X");
        assert_eq!(out, "{X}");
    }

    #[test]
    fn lone_braces_and_multibyte_text() {
        let out = substitute("{{ ← {{TITLE}} → }}", |_| "Ωmega");
        assert_eq!(out, "{{ ← Ωmega → }}");
    }
}
