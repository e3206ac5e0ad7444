mod common;

use common::fixtures::*;
use common::{TestResult, init_logging};
use formwork_core::naming::{compute_name, dot_name};
use formwork::{AttributeStore, BaseNames, Element, Field, LazyValue, NameSegment, Prop, Value};
use serde_json::json;

#[test]
fn test_name_composition() {
    init_logging();
    let chain = BaseNames::Chain(vec!["user".into(), 1usize.into()]);
    assert_eq!(compute_name(Some("email"), &chain, false).as_deref(), Some("user[1][email]"));

    let reset = BaseNames::Chain(vec!["a".into(), NameSegment::Reset, "b".into()]);
    assert_eq!(compute_name(Some("c"), &reset, false).as_deref(), Some("b[c]"));

    assert_eq!(compute_name(Some("tags"), &chain, true).as_deref(), Some("user[1][tags][]"));
    assert_eq!(compute_name(Some("x"), &BaseNames::Suppressed, true).as_deref(), Some("x[]"));
}

#[test]
fn test_dot_name_round_trip() {
    let chain = BaseNames::Chain(vec!["a".into(), "b".into()]);
    let name = compute_name(Some("c"), &chain, false).unwrap_or_default();
    assert_eq!(dot_name(&name), "a.b.c");
}

#[test]
fn test_field_names_follow_properties() {
    init_logging();
    let mut field = Field::make(json!({"slug": "city"}), Value::Null);
    assert_eq!(field.name().as_deref(), Some("city"));

    field.add_name("address", true).add_name("home", false);
    assert_eq!(field.name().as_deref(), Some("address[home][city]"));
    assert_eq!(field.dot_name().as_deref(), Some("address.home.city"));

    field.set_property("name", "town");
    assert_eq!(field.name().as_deref(), Some("address[home][town]"));

    field.set_property("baseNames", false);
    field.add_name("ignored", true);
    assert_eq!(field.name().as_deref(), Some("town"));

    field.set_property("name", false);
    assert_eq!(field.name(), None);
}

#[test]
fn test_generic_set_routes_properties_and_attributes() {
    let mut field = Field::new();
    field.set("label", "Name").set("placeholder", "Your name").set("rowable", false);

    assert!(field.is_property("label"));
    assert!(!field.is_property("placeholder"));
    assert_eq!(field.attr_text("placeholder").as_deref(), Some("Your name"));
    assert!(!field.is_rowable());
    assert_eq!(field.get("placeholder", Value::Null), json!("Your name"));
    assert_eq!(field.get("missing", json!("fallback")), json!("fallback"));
}

#[test]
fn test_label_tracks_field_name() {
    let mut field = Field::make(json!({"slug": "email", "label": "E-mail"}), Value::Null);
    field.add_name("user", true);

    let label = field.label().map(|l| l.attr_text("for"));
    assert_eq!(label, Some(Some("user[email]".to_string())));
}

#[test]
fn test_lazy_property_resolves_on_read() {
    let field = Field::new().with_prop(
        "description",
        Prop::from(LazyValue::new(|| json!("computed later"))),
    );
    assert_eq!(field.description().as_deref(), Some("computed later"));
}

#[test]
fn test_attribute_merge_is_idempotent() {
    let mut store: AttributeStore = [("id", "a"), ("class", "x y")].into_iter().collect();
    let before = store.to_attribute_string();
    store.merge(&AttributeStore::new());
    assert_eq!(store.to_attribute_string(), before);

    store.add_class("x").add_class("x");
    assert_eq!(store.classes(), ["x", "y"]);
}

#[test]
fn test_standalone_field_through_context() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut field = formwork.field(
        json!({"slug": "bio", "tag": "textarea", "value": "Hi & bye", "description": "Short"}),
        json!({"rows": 3}),
    );
    field.on_render(|element| {
        element.add_class("autosize");
    });

    assert_eq!(
        field.html()?,
        concat!(
            r#"<div class="form-group"><textarea rows="3" class="autosize" name="bio">Hi &amp; bye</textarea>"#,
            "\n",
            r#"<div class="field-description">Short</div></div>"#
        )
    );
    Ok(())
}

#[test]
fn test_element_appendages_render_in_place() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut group = formwork.element(json!({"tag": "span", "value": "@"}), json!({"class": "addon"}));
    group.append(Element::make(json!({"tag": "em", "value": "example.com"}), Value::Null));
    group.prepend_with(json!({"tag": "b", "value": "user"}), Value::Null);

    assert_eq!(
        group.html()?,
        "<b>user</b>\n<span class=\"addon\">@</span>\n<em>example.com</em>"
    );
    Ok(())
}
