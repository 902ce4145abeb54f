//! Edit form renderer
//!
//! Produces a self-contained `<form>`: the anti-forgery token, the title and
//! tags inputs, then one `.acf-field` block per field descriptor. Controls are
//! named so that [`SubmissionPayload`](crate::form::SubmissionPayload) can read
//! them back: `post_title`, `post_tags`, `acf[key]` and `acf[key][]`.

use super::escape::Escaper;
use super::style::EDITOR_STYLES;
use crate::config::FormConfig;
use crate::form::{META_NAMESPACE, TAGS_FIELD, TITLE_FIELD};
use crate::model::{FieldDescriptor, FieldKind};
use std::fmt::{self, Write};
use std::sync::Arc;

/// Renders the edit form
#[derive(Clone)]
pub struct FormRenderer {
    escaper: Arc<dyn Escaper>,
    config: FormConfig,
    token_field: String,
}

impl FormRenderer {
    pub fn new(
        escaper: Arc<dyn Escaper>,
        config: FormConfig,
        token_field: impl Into<String>,
    ) -> Self {
        Self { escaper, config, token_field: token_field.into() }
    }

    /// Render the form for the given token, current title, comma-joined tags and fields
    pub fn render(
        &self,
        token: &str,
        title: &str,
        tags_text: &str,
        fields: &[FieldDescriptor],
    ) -> String {
        let mut out = String::with_capacity(1024 + fields.len() * 256);
        let _ = self.write_form(&mut out, token, title, tags_text, fields);
        if self.config.include_styles {
            out.push_str(EDITOR_STYLES);
        }
        out
    }

    fn write_form(
        &self,
        out: &mut String,
        token: &str,
        title: &str,
        tags_text: &str,
        fields: &[FieldDescriptor],
    ) -> fmt::Result {
        let e = &self.escaper;

        writeln!(out, r#"<form method="post" class="cpt-editor">"#)?;
        writeln!(
            out,
            r#"<input type="hidden" id="{field}" name="{field}" value="{token}">"#,
            field = e.attr(&self.token_field),
            token = e.attr(token)
        )?;
        writeln!(out, "<h2>{}</h2>", e.html(&self.config.heading))?;

        writeln!(out, "<label>Title</label>")?;
        writeln!(
            out,
            r#"<input type="text" name="{}" value="{}">"#,
            TITLE_FIELD,
            e.attr(title)
        )?;

        writeln!(out, "<label>Tags</label>")?;
        writeln!(
            out,
            r#"<input type="text" name="{}" value="{}" placeholder="{}">"#,
            TAGS_FIELD,
            e.attr(tags_text),
            e.attr(&self.config.tags_placeholder)
        )?;

        for field in fields {
            self.write_field(out, field)?;
        }

        writeln!(out, r#"<button type="submit">{}</button>"#, e.html(&self.config.submit_label))?;
        writeln!(out, "</form>")
    }

    fn write_field(&self, out: &mut String, field: &FieldDescriptor) -> fmt::Result {
        let e = &self.escaper;
        let name = e.attr(&format!("{}[{}]", META_NAMESPACE, field.key()));
        let value = &field.value;

        writeln!(out, r#"<div class="acf-field">"#)?;
        writeln!(out, "<label>{}</label>", e.html(field.label()))?;

        match field.kind() {
            FieldKind::Text | FieldKind::Email | FieldKind::Url | FieldKind::Number => {
                self.write_input(out, field.kind().type_name(), &name, value.as_text())?;
            }
            FieldKind::ColorPicker => self.write_input(out, "color", &name, value.as_text())?,
            FieldKind::DatePicker => self.write_input(out, "date", &name, value.as_text())?,
            FieldKind::Textarea => {
                // Browsers drop one newline right after the opening tag
                writeln!(
                    out,
                    "<textarea name=\"{}\">\n{}</textarea>",
                    name,
                    e.textarea(value.as_text())
                )?;
            }
            FieldKind::TrueFalse => {
                writeln!(
                    out,
                    r#"<input type="checkbox" name="{}" value="1"{}>"#,
                    name,
                    checked(value.is_checked())
                )?;
            }
            FieldKind::Select => {
                writeln!(out, r#"<select name="{}">"#, name)?;
                let has_match = field.choices().iter().any(|c| value.is_selected(&c.value));
                if !has_match {
                    writeln!(out, r#"<option value="" selected></option>"#)?;
                }
                for choice in field.choices() {
                    writeln!(
                        out,
                        r#"<option value="{}"{}>{}</option>"#,
                        e.attr(&choice.value),
                        if value.is_selected(&choice.value) { " selected" } else { "" },
                        e.html(&choice.label)
                    )?;
                }
                writeln!(out, "</select>")?;
            }
            FieldKind::Radio => {
                for choice in field.choices() {
                    self.write_option_box(
                        out,
                        "radio",
                        &name,
                        &choice.value,
                        &choice.label,
                        value.is_selected(&choice.value),
                    )?;
                }
            }
            FieldKind::Checkbox => {
                let list_name = format!("{}[]", name);
                for choice in field.choices() {
                    self.write_option_box(
                        out,
                        "checkbox",
                        &list_name,
                        &choice.value,
                        &choice.label,
                        value.is_selected(&choice.value),
                    )?;
                }
            }
            FieldKind::Unsupported(type_name) => {
                writeln!(
                    out,
                    r#"<em>Field type "{}" is not supported yet.</em>"#,
                    e.html(type_name)
                )?;
            }
        }

        writeln!(out, "</div>")
    }

    fn write_input(
        &self,
        out: &mut String,
        input_type: &str,
        name: &str,
        value: &str,
    ) -> fmt::Result {
        writeln!(
            out,
            r#"<input type="{}" name="{}" value="{}">"#,
            self.escaper.attr(input_type),
            name,
            self.escaper.attr(value)
        )
    }

    fn write_option_box(
        &self,
        out: &mut String,
        input_type: &str,
        name: &str,
        value: &str,
        label: &str,
        is_checked: bool,
    ) -> fmt::Result {
        writeln!(
            out,
            r#"<label class="inline"><input type="{}" name="{}" value="{}"{}> {}</label>"#,
            input_type,
            name,
            self.escaper.attr(value),
            checked(is_checked),
            self.escaper.html(label)
        )
    }
}

fn checked(is_checked: bool) -> &'static str {
    if is_checked {
        " checked"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlEscaper;
    use crate::model::{FieldSpec, FieldValue};

    fn renderer() -> FormRenderer {
        let config = FormConfig { include_styles: false, ..FormConfig::default() };
        FormRenderer::new(Arc::new(HtmlEscaper), config, "cpt_editor_nonce")
    }

    fn field(spec: FieldSpec, value: FieldValue) -> FieldDescriptor {
        FieldDescriptor::new(spec, value)
    }

    #[test]
    fn test_base_form() {
        let html = renderer().render("tok123", "Draft", "a,b", &[]);

        assert!(html.starts_with(r#"<form method="post" class="cpt-editor">"#));
        assert!(html.contains(
            r#"<input type="hidden" id="cpt_editor_nonce" name="cpt_editor_nonce" value="tok123">"#
        ));
        assert!(html.contains("<h2>Edit Post</h2>"));
        assert!(html.contains(r#"<input type="text" name="post_title" value="Draft">"#));
        assert!(html.contains(
            r#"<input type="text" name="post_tags" value="a,b" placeholder="Comma separated">"#
        ));
        assert!(html.contains(r#"<button type="submit">Update</button>"#));
        assert!(!html.contains("acf-field"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_styles_are_optional() {
        let renderer = FormRenderer::new(Arc::new(HtmlEscaper), FormConfig::default(), "n");
        assert!(renderer.render("t", "", "", &[]).contains("<style>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let fields = [
            field(
                FieldSpec::new("note", "Note <b>", FieldKind::Textarea),
                FieldValue::Text("</textarea><script>".to_string()),
            ),
            field(
                FieldSpec::new("sub", "Sub", FieldKind::Text),
                FieldValue::Text(r#"" onfocus="x"#.to_string()),
            ),
        ];
        let html = renderer().render("t", r#"A "quoted" <title>"#, "x&y", &fields);

        assert!(html.contains(r#"value="A &quot;quoted&quot; &lt;title&gt;""#));
        assert!(html.contains(r#"value="x&amp;y""#));
        assert!(html.contains("<label>Note &lt;b&gt;</label>"));
        assert!(html
            .contains("<textarea name=\"acf[note]\">\n&lt;/textarea&gt;&lt;script&gt;</textarea>"));
        assert!(html.contains(r#"value="&quot; onfocus=&quot;x""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_text_like_inputs() {
        let fields = [
            field(
                FieldSpec::new("mail", "Mail", FieldKind::Email),
                FieldValue::Text("a@b.c".into()),
            ),
            field(FieldSpec::new("n", "N", FieldKind::Number), FieldValue::Text("5".into())),
            field(
                FieldSpec::new("c", "C", FieldKind::ColorPicker),
                FieldValue::Text("#ff0000".into()),
            ),
            field(
                FieldSpec::new("d", "D", FieldKind::DatePicker),
                FieldValue::Text("2026-01-31".into()),
            ),
        ];
        let html = renderer().render("t", "", "", &fields);

        assert!(html.contains(r#"<input type="email" name="acf[mail]" value="a@b.c">"#));
        assert!(html.contains(r#"<input type="number" name="acf[n]" value="5">"#));
        assert!(html.contains(r##"<input type="color" name="acf[c]" value="#ff0000">"##));
        assert!(html.contains(r#"<input type="date" name="acf[d]" value="2026-01-31">"#));
    }

    #[test]
    fn test_boolean_checkbox() {
        let on = field(FieldSpec::new("f", "F", FieldKind::TrueFalse), FieldValue::Flag(true));
        let off = field(FieldSpec::new("g", "G", FieldKind::TrueFalse), FieldValue::Flag(false));
        let html = renderer().render("t", "", "", &[on, off]);

        assert!(html.contains(r#"<input type="checkbox" name="acf[f]" value="1" checked>"#));
        assert!(html.contains(r#"<input type="checkbox" name="acf[g]" value="1">"#));
    }

    #[test]
    fn test_select_and_radio() {
        let spec = FieldSpec::new("size", "Size", FieldKind::Select)
            .with_choice("s", "Small")
            .with_choice("l", "Large");
        let selected = field(spec.clone(), FieldValue::Choice("l".to_string()));
        let html = renderer().render("t", "", "", &[selected]);
        assert!(html.contains(r#"<select name="acf[size]">"#));
        assert!(html.contains(r#"<option value="s">Small</option>"#));
        assert!(html.contains(r#"<option value="l" selected>Large</option>"#));
        assert!(!html.contains(r#"<option value="" selected>"#));

        let unset = field(spec, FieldValue::Absent);
        let html = renderer().render("t", "", "", &[unset]);
        assert!(html.contains(r#"<option value="" selected></option>"#));

        let radio = FieldSpec::new("tone", "Tone", FieldKind::Radio)
            .with_choice("warm", "Warm")
            .with_choice("cold", "Cold");
        let html =
            renderer().render("t", "", "", &[field(radio, FieldValue::Choice("cold".into()))]);
        assert!(html.contains(
            r#"<label class="inline"><input type="radio" name="acf[tone]" value="warm"> Warm</label>"#
        ));
        assert!(html.contains(
            r#"<label class="inline"><input type="radio" name="acf[tone]" value="cold" checked> Cold</label>"#
        ));
    }

    #[test]
    fn test_multi_choice_checkboxes() {
        let spec = FieldSpec::new("colors", "Colors", FieldKind::Checkbox)
            .with_choice("r", "Red")
            .with_choice("g", "Green");
        let html = renderer().render(
            "t",
            "",
            "",
            &[field(spec, FieldValue::Choices(vec!["g".to_string()]))],
        );

        assert!(html.contains(
            r#"<label class="inline"><input type="checkbox" name="acf[colors][]" value="r"> Red</label>"#
        ));
        assert!(html.contains(
            r#"<label class="inline"><input type="checkbox" name="acf[colors][]" value="g" checked> Green</label>"#
        ));
    }

    #[test]
    fn test_unsupported_type_notice() {
        let gallery = field(
            FieldSpec::new("photos", "Photos", FieldKind::Unsupported("gallery".to_string())),
            FieldValue::Absent,
        );
        let html = renderer().render("t", "", "", &[gallery]);

        assert!(html.contains(r#"<em>Field type "gallery" is not supported yet.</em>"#));
        assert!(!html.contains("acf[photos]"));
    }
}
