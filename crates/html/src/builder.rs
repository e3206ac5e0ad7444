//! Link and button helpers.

use crate::atts::{Atts, parse_atts};
use formwork_traits::UrlGenerator;
use formwork_types::{AttributeStore, escape};
use std::sync::Arc;

const BUTTON_CLASS: &str = "btn btn-sm";
const DELETE_ICON: &str = "fa-trash-o";

/// Anything that can produce URLs for its own actions (`edit`, `delete`).
pub trait Routable {
    fn url(&self, action: &str) -> String;
}

/// One entry of an [`HtmlBuilder::action_buttons`] group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub url: String,
    pub icon: Option<String>,
    /// Appended to `btn`.
    pub class: Option<String>,
    /// HTTP verb for a submitting button, stored as `data-method`.
    pub method: Option<String>,
    pub attributes: AttributeStore,
}

impl ActionButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub struct HtmlBuilder {
    url: Arc<dyn UrlGenerator>,
}

impl HtmlBuilder {
    pub fn new(url: Arc<dyn UrlGenerator>) -> Self {
        Self { url }
    }

    pub fn url_generator(&self) -> &Arc<dyn UrlGenerator> {
        &self.url
    }

    /// An anchor to `url`, resolved through the URL generator.
    ///
    /// The title defaults to the resolved URL and is escaped. Recognised
    /// attributes: `icon` (font-awesome class rendered before the title),
    /// `prepend`/`append` (raw markup around the content) and `data-method`
    /// (adds `data-submit` pointing at the URL).
    pub fn link(&self, url: &str, title: Option<&str>, atts: impl Into<Atts>, secure: bool) -> String {
        let url = self.url.to(url, secure);
        let mut atts = parse_atts(atts, None);
        let title = escape(title.unwrap_or(&url)).into_owned();
        let icon = icon_markup(&mut atts);
        if atts.has("data-method") {
            atts.set("data-submit", url.as_str());
        }
        let prepend = atts.pull("prepend").unwrap_or_default();
        let append = atts.pull("append").unwrap_or_default();

        format!(
            r#"<a href="{}"{atts}>{prepend}{icon}{title}{append}</a>"#,
            escape(&url)
        )
    }

    /// A `<tag>` button. Classes default to `btn btn-sm`; the label is
    /// emitted as-is.
    pub fn button(&self, label: &str, atts: impl Into<Atts>, tag: &str, submit: bool) -> String {
        let mut atts = parse_atts(atts, Some(BUTTON_CLASS));
        let icon = icon_markup(&mut atts);
        if submit {
            atts.set("type", "submit");
        }
        format!("<{tag}{atts}>{icon}{label}</{tag}>")
    }

    /// A button-styled anchor. Submitting links and links carrying a
    /// `data-method` also get `data-submit`.
    pub fn btn_link(&self, label: &str, url: &str, atts: impl Into<Atts>, submit: bool) -> String {
        let mut atts = parse_atts(atts, Some(BUTTON_CLASS));
        if submit || atts.has("data-method") {
            atts.set("data-submit", url);
        }
        atts.set("href", url);
        self.button(label, atts, "a", false)
    }

    pub fn submit_link(&self, label: &str, url: &str, atts: impl Into<Atts>) -> String {
        self.btn_link(label, url, atts, true)
    }

    /// A `data-method="delete"` link with a trash icon unless another icon
    /// is given. The label defaults to `Delete`.
    pub fn delete_link(&self, url: &str, label: Option<&str>, atts: impl Into<Atts>, secure: bool) -> String {
        let mut atts = parse_atts(atts, None);
        atts.set("data-method", "delete");
        if !atts.has("icon") {
            atts.set("icon", DELETE_ICON);
        }
        self.link(url, Some(label.unwrap_or("Delete")), atts, secure)
    }

    /// The default Edit and Delete buttons for `model`, after any `extra`
    /// buttons, in a small button group.
    pub fn action_buttons(&self, model: &dyn Routable, extra: Vec<ActionButton>) -> String {
        let mut buttons = extra;
        for default in default_actions(model) {
            if !buttons.iter().any(|b| b.label == default.label) {
                buttons.push(default);
            }
        }

        let body: String = buttons.into_iter().map(|b| self.action_button(b)).collect();
        format!(r#"<div class="btn-group btn-group-sm">{body}</div>"#)
    }

    fn action_button(&self, button: ActionButton) -> String {
        let mut atts = AttributeStore::with_class("btn");
        if let Some(class) = &button.class {
            atts.add_class(class);
        }
        if let Some(icon) = &button.icon {
            atts.set("icon", icon.as_str());
        }
        let submit = button.method.is_some();
        if let Some(method) = &button.method {
            atts.set("data-method", method.as_str());
        }
        atts.merge(&button.attributes);
        self.btn_link(&button.label, &button.url, atts, submit)
    }
}

fn default_actions(model: &dyn Routable) -> [ActionButton; 2] {
    [
        ActionButton::new("Edit", model.url("edit"))
            .icon("fa-edit")
            .class("btn-default"),
        ActionButton::new("Delete", model.url("delete"))
            .icon(DELETE_ICON)
            .class("btn-danger")
            .method("delete"),
    ]
}

fn icon_markup(atts: &mut AttributeStore) -> String {
    match atts.pull("icon") {
        Some(icon) => format!(r#"<i class="fa {}"></i> "#, escape(&icon)),
        None => String::new(),
    }
}
