//! Markup helpers that live beside the form builder: links and buttons,
//! a handful of standalone form controls, and breadcrumb trails.

mod atts;
mod breadcrumbs;
mod builder;
mod forms;

pub use atts::{Atts, parse_atts};
pub use breadcrumbs::{BreadCrumbs, Crumb};
pub use builder::{ActionButton, HtmlBuilder, Routable};
pub use forms::FormHelpers;
