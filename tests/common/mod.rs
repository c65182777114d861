//! Shared test backend: records every call the registrar makes.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use serde_json::Value;

use route_provider::{RouteHandle, RouterBackend};

/// Everything the registrar attached to one route.
#[derive(Debug, Default, Clone)]
pub struct RouteRecord {
    pub pattern: String,
    pub controller: String,
    pub bound_name: String,
    pub methods: String,
    pub values: Vec<(String, Value)>,
    pub asserts: Vec<(String, String)>,
    pub converts: Vec<(String, Value)>,
    pub before: Vec<String>,
    pub after: Vec<String>,
    pub https_only: bool,
}

impl RouteRecord {
    /// The effective route name: the bound name, or the engine default
    /// (`GET_POST_test` style) when the registrar bound an empty one.
    pub fn effective_name(&self) -> String {
        if !self.bound_name.is_empty() {
            return self.bound_name.clone();
        }

        let suffix: String = self
            .pattern
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        format!("{}_{}", self.methods.replace('|', "_"), suffix)
    }
}

type SharedRecord = Rc<RefCell<RouteRecord>>;

/// Handle returned by [`RecordingRouter::mount`]; writes into the record
/// the router keeps.
pub struct RecordingHandle(SharedRecord);

impl RouteHandle for RecordingHandle {
    type Hook = String;

    fn bind(&mut self, name: &str) {
        self.0.borrow_mut().bound_name = name.to_string();
    }

    fn method(&mut self, methods: &str) {
        self.0.borrow_mut().methods = methods.to_string();
    }

    fn value(&mut self, param: &str, default: &Value) {
        self.0
            .borrow_mut()
            .values
            .push((param.to_string(), default.clone()));
    }

    fn assert(&mut self, param: &str, pattern: &str) {
        self.0
            .borrow_mut()
            .asserts
            .push((param.to_string(), pattern.to_string()));
    }

    fn convert(&mut self, param: &str, converter: &Value) {
        self.0
            .borrow_mut()
            .converts
            .push((param.to_string(), converter.clone()));
    }

    fn before(&mut self, hook: String) {
        self.0.borrow_mut().before.push(hook);
    }

    fn after(&mut self, hook: String) {
        self.0.borrow_mut().after.push(hook);
    }

    fn require_https(&mut self) {
        self.0.borrow_mut().https_only = true;
    }
}

/// In-memory routing engine standing in for a real one.
#[derive(Default)]
pub struct RecordingRouter {
    routes: Vec<SharedRecord>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Snapshot of the route registered at `index`, in registration order.
    pub fn route(&self, index: usize) -> RouteRecord {
        self.routes[index].borrow().clone()
    }

    pub fn by_name(&self, name: &str) -> Option<RouteRecord> {
        self.routes
            .iter()
            .map(|record| record.borrow().clone())
            .find(|record| record.effective_name() == name)
    }
}

impl RouterBackend for RecordingRouter {
    type Handle = RecordingHandle;

    fn mount(&mut self, pattern: &str, controller: &str) -> RecordingHandle {
        let record = Rc::new(RefCell::new(RouteRecord {
            pattern: pattern.to_string(),
            controller: controller.to_string(),
            ..Default::default()
        }));
        self.routes.push(Rc::clone(&record));
        RecordingHandle(record)
    }
}

/// Initialize tracing once so `RUST_LOG=debug cargo test` shows the
/// registrar's events.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
