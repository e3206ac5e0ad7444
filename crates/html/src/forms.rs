//! Form controls that sit outside the form builder: password inputs,
//! search buttons, URL-driven selects and the styled file picker.

use crate::atts::{Atts, parse_atts};
use crate::builder::HtmlBuilder;
use formwork_types::{AttributeStore, escape};

const NO_FILE: &str = "No file selected...";

#[derive(Debug, Clone)]
pub struct FormHelpers {
    html: HtmlBuilder,
}

impl FormHelpers {
    pub fn new(html: HtmlBuilder) -> Self {
        Self { html }
    }

    pub fn html(&self) -> &HtmlBuilder {
        &self.html
    }

    /// `<input type="password">`.
    pub fn passphrase(&self, name: &str, value: Option<&str>, atts: impl Into<Atts>) -> String {
        let mut store = AttributeStore::new();
        store.set("name", name).set("type", "password").set("value", value);
        store.merge(&parse_atts(atts, None));
        format!("<input{store}>")
    }

    /// A plain `<button>` with the default button classes.
    pub fn button(&self, label: &str, atts: impl Into<Atts>) -> String {
        self.html.button(label, atts, "button", false)
    }

    /// A search button with a magnifier icon unless another icon is given.
    pub fn search_button(&self, label: &str, atts: impl Into<Atts>) -> String {
        let mut atts = parse_atts(atts, Some("btn btn-default btn-sm"));
        if !atts.has("icon") {
            atts.set("icon", "fa-search");
        }
        self.html.button(label, atts, "button", false)
    }

    /// A danger-styled delete link.
    pub fn delete(&self, url: &str, atts: impl Into<Atts>) -> String {
        let atts = parse_atts(atts, Some("btn btn-danger btn-sm"));
        self.html.delete_link(url, None, atts, false)
    }

    /// A labelled select whose change navigates to `base_url` with
    /// `query_param` set to the chosen value. Scripts read the target from
    /// the `data-base-url` and `data-query-param` attributes.
    pub fn url_select<'a>(
        &self,
        label: &str,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
        query_param: &str,
        selected: Option<&str>,
        base_url: &str,
    ) -> String {
        let mut select = AttributeStore::with_class("form-control url-select");
        select
            .set("data-base-url", base_url)
            .set("data-query-param", query_param);

        let options: String = options
            .into_iter()
            .map(|(value, text)| {
                let mut option = AttributeStore::new();
                option.set("selected", selected == Some(value)).set("value", value);
                format!("<option{option}>{}</option>", escape(text))
            })
            .collect();

        format!(
            r#"<label class="control-label">{}</label><select{select}>{options}</select>"#,
            escape(label)
        )
    }

    /// A hidden-style file input with a label showing the current file.
    ///
    /// The label's `data-title` holds the "change" and "select" captions
    /// separated by `|`; its inner span shows `value` or a placeholder.
    pub fn file_picker(&self, name: &str, label: &str, value: Option<&str>, class: Option<&str>) -> String {
        let mut caption = AttributeStore::with_class("control-label");
        caption.set("for", name);

        let mut input = AttributeStore::new();
        input.set("name", name).set("type", "file").set("id", name);
        if let Some(class) = class {
            input.add_class(class);
        }

        let mut picker = AttributeStore::new();
        picker
            .set("data-title", "Change File|Select File")
            .set("for", name);
        let current = value.filter(|v| !v.is_empty()).unwrap_or(NO_FILE);

        format!(
            r#"<div class="file-picker"><label{caption}>{}</label><input{input}><label{picker}><span data-title="{}"></span></label></div>"#,
            escape(label),
            escape(current)
        )
    }
}
