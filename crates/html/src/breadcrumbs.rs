use crate::atts::{Atts, parse_atts};
use crate::builder::HtmlBuilder;
use formwork_types::{AttributeStore, escape};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub title: String,
    pub url: Option<String>,
    pub attributes: AttributeStore,
}

/// An ordered breadcrumb trail. Each crumb renders as a `<span>`, linked
/// through [`HtmlBuilder::link`] when it has a URL.
#[derive(Debug, Clone)]
pub struct BreadCrumbs {
    html: HtmlBuilder,
    crumbs: Vec<Crumb>,
}

impl BreadCrumbs {
    pub fn new(html: HtmlBuilder) -> Self {
        Self {
            html,
            crumbs: Vec::new(),
        }
    }

    pub fn add(&mut self, title: &str, url: Option<&str>, atts: impl Into<Atts>) -> &mut Self {
        self.crumbs.push(Crumb {
            title: title.to_string(),
            url: url.map(str::to_string),
            attributes: parse_atts(atts, None),
        });
        self
    }

    /// Adds several `(title, url)` crumbs in order.
    pub fn add_many<'a>(&mut self, crumbs: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> &mut Self {
        for (title, url) in crumbs {
            self.add(title, url, ());
        }
        self
    }

    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn render(&self) -> String {
        self.crumbs
            .iter()
            .map(|crumb| {
                let inner = match &crumb.url {
                    Some(url) => self
                        .html
                        .link(url, Some(&crumb.title), crumb.attributes.clone(), false),
                    None => escape(&crumb.title).into_owned(),
                };
                format!("<span>{inner}</span>")
            })
            .collect()
    }
}

impl fmt::Display for BreadCrumbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
