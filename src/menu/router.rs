use anyhow::Result;

pub struct EventRoute {
    pub pattern: EventPattern,
    pub handler: Box<dyn Fn(&str) -> Result<HandlerResult> + Send + Sync>,
}

pub enum EventPattern {
    Exact(String),
    Prefix(String),
}

impl EventPattern {
    pub fn matches(&self, event_id: &str) -> bool {
        match self {
            EventPattern::Exact(s) => s == event_id,
            EventPattern::Prefix(p) => event_id.starts_with(p),
        }
    }
}

pub enum HandlerResult {
    Continue,
    Quit,
}

/// Maps menu-item ids to their action handlers. Rebuilt together with the
/// menu; the first matching route wins.
pub struct EventRouter {
    routes: Vec<EventRoute>,
}

impl EventRouter {
    pub fn new(routes: Vec<EventRoute>) -> Self {
        Self { routes }
    }

    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(&self, event_id: &str) -> Result<HandlerResult> {
        for route in &self.routes {
            if route.pattern.matches(event_id) {
                return (route.handler)(event_id);
            }
        }

        log::warn!("No route found for event: {}", event_id);
        Ok(HandlerResult::Continue)
    }
}
