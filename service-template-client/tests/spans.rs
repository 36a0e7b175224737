//! Span coverage of dispatched calls.

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use service_template_client::{
    RequestInit, Response, Service, ServiceError, ServiceSpec, Transport, TransportError,
};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

#[derive(Default)]
struct Seen {
    spans: Vec<&'static str>,
    urls: Vec<String>,
}

#[derive(Clone, Default)]
struct SpanRecorder {
    seen: Arc<Mutex<Seen>>,
}

impl SpanRecorder {
    fn spans(&self) -> Vec<&'static str> {
        self.seen.lock().unwrap().spans.clone()
    }

    fn urls(&self) -> Vec<String> {
        self.seen.lock().unwrap().urls.clone()
    }
}

#[derive(Default)]
struct UrlVisitor {
    url: Option<String>,
}

impl Visit for UrlVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "url" {
            self.url = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "url" {
            self.url = Some(format!("{value:?}"));
        }
    }
}

impl Subscriber for SpanRecorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, attrs: &Attributes<'_>) -> Id {
        let mut seen = self.seen.lock().unwrap();
        seen.spans.push(attrs.metadata().name());
        Id::from_u64(seen.spans.len() as u64)
    }

    fn record(&self, _span: &Id, values: &Record<'_>) {
        let mut visitor = UrlVisitor::default();
        values.record(&mut visitor);
        if let Some(url) = visitor.url {
            self.seen.lock().unwrap().urls.push(url);
        }
    }

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, _event: &Event<'_>) {}

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

struct TextTransport;

#[async_trait]
impl Transport for TextTransport {
    async fn send(&self, _url: &str, _init: RequestInit) -> Result<Response, TransportError> {
        Ok(http::Response::builder()
            .header("content-type", "text/plain")
            .body(Bytes::from_static(b"ok"))?)
    }
}

#[derive(Serialize)]
struct Lookup {
    id: Option<u32>,
}

#[tokio::test]
async fn resolved_url_is_recorded_on_call_span() {
    let recorder = SpanRecorder::default();
    let _guard = tracing::subscriber::set_default(recorder.clone());

    let service = Service::with_transport(TextTransport);
    let lookup = service.create(ServiceSpec::<Lookup>::from_template("/items/:id").unwrap());
    lookup.call(Lookup { id: Some(4) }).await.unwrap();

    assert_eq!(recorder.spans(), vec!["service_call"]);
    assert_eq!(recorder.urls(), vec!["/items/4"]);
}

#[tokio::test]
async fn call_span_covers_url_resolution_failures() {
    let recorder = SpanRecorder::default();
    let _guard = tracing::subscriber::set_default(recorder.clone());

    let service = Service::with_transport(TextTransport);
    let lookup = service.create(ServiceSpec::<Lookup>::from_template("/items/:id").unwrap());
    let result = lookup.call(Lookup { id: None }).await;

    assert!(matches!(result, Err(ServiceError::Expand(_))));
    assert_eq!(recorder.spans(), vec!["service_call"]);
    assert!(recorder.urls().is_empty());
}
