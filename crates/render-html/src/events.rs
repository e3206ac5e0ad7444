//! Render events.
//!
//! The renderer announces `form.rendering:<kind>` before and
//! `form.rendered:<kind>` after each element, and
//! `form.field.rendering:<field-type>` before a field's markup is built.

use formwork_core::RenderTarget;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Listener key that receives every event.
pub const ANY_EVENT: &str = "*";

pub struct RenderEvent<'a> {
    pub name: &'a str,
    pub target: RenderTarget<'a>,
}

pub type Listener = Arc<dyn Fn(&RenderEvent<'_>) + Send + Sync>;

#[derive(Clone, Default)]
pub struct EventDispatcher {
    listeners: IndexMap<String, Vec<Listener>>,
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: IndexMap<_, _> = self.listeners.iter().map(|(k, v)| (k, v.len())).collect();
        f.debug_struct("EventDispatcher").field("listeners", &counts).finish()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, event: impl Into<String>, listener: Listener) {
        self.listeners.entry(event.into()).or_default().push(listener);
    }

    pub fn fire(&self, action: &str, kind: &str, target: RenderTarget<'_>) {
        let name = format!("form.{action}:{kind}");
        log::trace!("Firing '{}'", name);
        let event = RenderEvent { name: &name, target };
        let exact = self.listeners.get(name.as_str()).into_iter().flatten();
        let any = self.listeners.get(ANY_EVENT).into_iter().flatten();
        for listener in exact.chain(any) {
            listener(&event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
