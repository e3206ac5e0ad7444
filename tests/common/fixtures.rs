use formwork::{
    BaseUrlGenerator, Formwork, FormworkError, InMemoryOldInput, MessageBag, StaticToken,
};
use serde_json::Value;
use std::sync::Arc;

pub const TOKEN: &str = "test-token";

/// A context with the HTML renderer and a fixed CSRF token.
pub fn formwork() -> Result<Formwork, FormworkError> {
    Formwork::builder()
        .with_html_renderer()
        .with_csrf(Arc::new(StaticToken::new(TOKEN)))
        .with_url_generator(Arc::new(url_generator()))
        .build()
}

/// Same as [`formwork`], plus the request state of a failed submission.
pub fn formwork_after_submit(errors: &str, old_input: Value) -> Result<Formwork, FormworkError> {
    Formwork::builder()
        .with_html_renderer()
        .with_csrf(Arc::new(StaticToken::new(TOKEN)))
        .with_errors(Arc::new(MessageBag::from_json(errors)?))
        .with_old_input(Arc::new(InMemoryOldInput::new(old_input)))
        .build()
}

pub fn url_generator() -> BaseUrlGenerator {
    match BaseUrlGenerator::new("https://shop.example.com") {
        Ok(url) => url,
        Err(e) => panic!("fixture base URL is invalid: {e}"),
    }
}

pub fn token_field() -> String {
    format!(r#"<input type="hidden" name="_token" value="{TOKEN}"></input>"#)
}
