mod common;

use common::assertions::count;
use common::fixtures::*;
use common::{TestResult, init_logging};
use formwork::{FieldArgs, Form, FormError, FormworkError, Value};
use serde_json::json;

#[test]
fn test_empty_form_renders_open_and_close() -> TestResult {
    init_logging();
    let formwork = formwork()?;

    let html = formwork.form().html()?;
    assert_eq!(html, format!("<form method=\"POST\">\n\n{}\n</form>", token_field()));
    Ok(())
}

#[test]
fn test_fields_without_row_get_own_rows() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form();
    form.text("first", Value::Null, json!({}));
    form.text("last", Value::Null, json!({}));

    let token = token_field();
    let html = form.html()?;
    assert_eq!(
        html,
        [
            "<form method=\"POST\">",
            r#"<div class="field-row row"><div class="form-group col-md-12"><input name="first" type="text"></input></div></div>"#,
            r#"<div class="field-row row"><div class="form-group col-md-12"><input name="last" type="text"></input></div></div>"#,
            token.as_str(),
            "</form>",
        ]
        .join("\n")
    );
    Ok(())
}

#[test]
fn test_shared_row_divides_columns() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form();
    form.text("city", Value::Null, json!({"row": "address"}));
    form.text("zip", Value::Null, json!({"row": "address"}));
    form.text("country", Value::Null, json!({}));

    let html = form.html()?;
    assert_eq!(count(&html, "field-row row"), 2);
    assert_eq!(count(&html, "col-md-6"), 2);
    assert_eq!(count(&html, "col-md-12"), 1);
    Ok(())
}

#[test]
fn test_fixed_columns_per_row() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork
        .form()
        .with_properties(json!({"sizeColumnsByRow": false, "perRow": 3}));
    form.text("only", Value::Null, json!({}));

    assert_html_contains!(form.html()?, r#"<div class="form-group col-md-4">"#);
    Ok(())
}

#[test]
fn test_hidden_method_bypasses_base_field_name() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form().with_properties(json!({"baseFieldName": "order"}));
    form.email("email", Value::Null, json!({}));
    form.hidden("_method", "PUT", json!({"baseNames": false}));

    let html = form.html()?;
    assert!(html.starts_with("<form method=\"POST\">\n"));
    assert_html_contains!(html, r#"<input name="order[email]" type="email"></input>"#);
    assert_html_contains!(html, r#"<input name="_method" type="hidden" value="PUT"></input>"#);
    assert_html_not_contains!(html, "order[_method]");
    Ok(())
}

#[test]
fn test_spoofed_method_injects_hidden_field() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let form = formwork.form().with_attributes(json!({"method": "delete", "action": "/orders/4"}));

    let html = form.html()?;
    assert!(html.starts_with(concat!(
        "<form method=\"POST\" action=\"/orders/4\">\n",
        r#"<input type="hidden" name="_method" value="DELETE"></input>"#
    )));
    assert_eq!(count(&html, "_method"), 1);
    Ok(())
}

#[test]
fn test_nested_and_multiple_names() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form().with_properties(json!({"baseFieldName": "user"}));
    form.email("email", Value::Null, json!({"baseNames": ["1"]}));
    form.text("nick", Value::Null, json!({"baseNames": ["profile", false, "alias"]}));
    form.select("roles", json!([]), json!({"multiple": true, "options": ["admin", "editor"]}));

    let html = form.html()?;
    assert_html_contains!(html, r#"name="user[1][email]""#);
    assert_html_contains!(html, r#"name="alias[nick]""#);
    assert_html_contains!(
        html,
        r#"<select name="user[roles][]" multiple="multiple"><option value="admin">admin</option><option value="editor">editor</option></select>"#
    );
    Ok(())
}

#[test]
fn test_failed_submission_repopulates_and_flags_errors() -> TestResult {
    init_logging();
    let formwork = formwork_after_submit(
        r#"{"user.email": ["Already taken."]}"#,
        json!({"user": {"email": "old@example.com"}}),
    )?;
    let mut form = formwork.form().with_properties(json!({"baseFieldName": "user"}));
    form.email("email", "new@example.com", json!({"label": "Email"}));

    let html = form.html()?;
    assert_html_contains!(
        html,
        concat!(
            r#"<div class="form-group col-md-12 has-error">"#,
            r#"<label for="user[email]" class="field-label">Email</label>"#,
            "\n",
            r#"<input name="user[email]" type="email" value="old@example.com"></input>"#,
            "\n",
            r#"<div class="error-msg">Already taken.</div></div>"#
        )
    );
    Ok(())
}

#[test]
fn test_checkbox_options() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form();
    form.checkbox("colors", json!(["red"]), json!({"options": {"red": "Red", "blue": "Blue"}}));

    let html = form.html()?;
    assert_html_contains!(
        html,
        concat!(
            r#"<label><input name="colors" type="checkbox" value="red" checked="checked"></input> Red</label>"#,
            r#"<label><input name="colors" type="checkbox" value="blue"></input> Blue</label>"#
        )
    );
    Ok(())
}

#[test]
fn test_submit_and_files() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form().with_properties(json!({"files": true}));
    form.file("avatar", Value::Null, json!({}));
    form.submit("Save", json!({}));

    let html = form.html()?;
    assert!(html.starts_with(r#"<form method="POST" enctype="multipart/form-data">"#));
    assert_html_contains!(html, r#"<button class="btn btn-primary" type="submit">Save</button>"#);
    // The submit button renders after the rows.
    let button = html.find("<button").unwrap_or_default();
    let avatar = html.find(r#"name="avatar""#).unwrap_or_default();
    assert!(avatar < button);
    Ok(())
}

#[test]
fn test_unknown_field_type() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form();

    let err = form.input("hologram", "x", Value::Null, json!({})).unwrap_err();
    assert!(matches!(err, FormError::UnknownFieldType(ref name) if name == "hologram"));
    assert!(form.add("y", json!({"type": "nope"})).is_err());
    assert!(form.is_empty());
    Ok(())
}

#[test]
fn test_macros_from_context() -> TestResult {
    init_logging();
    let formwork = formwork::Formwork::builder()
        .with_html_renderer()
        .with_macro("address", |form: &mut Form, args: FieldArgs| {
            for part in ["street", "city"] {
                form.text(part, Value::Null, json!({"baseNames": [args.slug.clone()]}));
            }
            Ok(())
        })
        .build()?;
    let mut form = formwork.form();
    form.call("address", "shipping", Value::Null, json!({}))?;
    form.call("email", "contact", Value::Null, json!({}))?;

    assert_eq!(form.len(), 3);
    let html = formwork.render_form(&form)?;
    assert_html_contains!(html, r#"name="shipping[street]""#);
    assert_html_contains!(html, r#"name="shipping[city]""#);
    assert_html_contains!(html, r#"name="contact" type="email""#);
    Ok(())
}

#[test]
fn test_macro_name_works_as_field_type() -> TestResult {
    init_logging();
    let formwork = formwork::Formwork::builder()
        .with_html_renderer()
        .with_csrf(std::sync::Arc::new(formwork::StaticToken::new(TOKEN)))
        .with_macro("money", |form: &mut Form, args: FieldArgs| {
            form.number(&args.slug, args.value, args.properties)
                .set_attr("step", "0.01");
            Ok(())
        })
        .build()?;
    let mut form = formwork.form();
    form.add("price", json!({"type": "money", "value": 5}))?;
    form.input("money", "cost", Value::Null, json!({}))?;

    let html = form.html()?;
    assert_eq!(count(&html, r#"step="0.01""#), 2);
    assert_html_contains!(html, r#"name="price" type="number" value="5""#);
    assert_html_contains!(html, r#"name="cost" type="number""#);

    let err = form.add("tax", json!({"type": "percent"})).unwrap_err();
    assert!(matches!(err, FormError::UnknownFieldType(ref name) if name == "percent"));
    assert_eq!(form.len(), 2);
    Ok(())
}

#[test]
fn test_string_order_sorts_numerically() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form();
    form.text("third", Value::Null, json!({"order": "10"}));
    form.text("first", Value::Null, json!({"order": "2"}));
    form.text("second", Value::Null, json!({"order": 3}));

    let html = form.html()?;
    let position = |name: &str| html.find(&format!(r#"name="{name}""#)).unwrap_or_default();
    assert!(position("first") < position("second"));
    assert!(position("second") < position("third"));
    Ok(())
}

#[test]
fn test_render_callbacks_leave_form_untouched() -> TestResult {
    init_logging();
    let formwork = formwork()?;
    let mut form = formwork.form();
    form.text("name", Value::Null, json!({}));
    form.on_render_field(|field| {
        field.add_class("input-sm");
    });
    form.on_render_form(|form| {
        form.set_attr("id", "signup");
    });

    let first = form.html()?;
    assert_html_contains!(first, r#"<form id="signup" method="POST">"#);
    assert_html_contains!(first, r#"<input class="input-sm" name="name" type="text"></input>"#);
    assert_eq!(form.html()?, first);
    assert!(form.attr_text("id").is_none());
    Ok(())
}

#[test]
fn test_missing_renderer_is_an_error() -> TestResult {
    init_logging();
    let formwork = formwork::Formwork::builder().build()?;
    let form = formwork.form();

    assert!(form.html().is_err());
    assert!(matches!(
        formwork.render_form(&form),
        Err(FormworkError::RendererNotConfigured)
    ));
    Ok(())
}
