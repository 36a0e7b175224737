//! Descriptions of remote calls.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::FutureExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use service_template::UrlComponents;

use crate::error::ServiceError;
use crate::initializer::Initializer;
use crate::request::RequestInit;
use crate::transform::{Decoded, Transform, boxed_default, boxed_json};
use crate::transport::Response;

type InitResult = Result<RequestInit, ServiceError>;

type UrlRenderer<Req> = Arc<dyn Fn(&Req) -> Result<String, ServiceError> + Send + Sync>;

enum UrlSource<Req> {
    Initializer(Initializer<Req, String>),
    Template {
        components: Arc<UrlComponents>,
        render: UrlRenderer<Req>,
    },
}

/// Describes how to turn a request payload into a call and its result.
///
/// A spec has a URL (literal, computed, deferred, or a parsed template filled
/// from the payload), an optional request init, and a transform. Without a
/// custom transform the response is decoded by
/// [`default_transform`](crate::default_transform) into [`Decoded`].
///
/// # Examples
///
/// ```
/// use http::Method;
/// use serde::{Deserialize, Serialize};
/// use service_template_client::{Initializer, RequestInit, ServiceSpec};
///
/// #[derive(Serialize)]
/// struct GetUser {
///     name: String,
/// }
///
/// #[derive(Deserialize)]
/// struct User {
///     login: String,
/// }
///
/// // URL computed from the payload, JSON result
/// let by_fn = ServiceSpec::new(Initializer::from_fn(|req: &GetUser| {
///     format!("https://api.github.com/users/{}", req.name)
/// }))
/// .with_json::<User>();
///
/// // URL filled from the payload's fields
/// let by_template = ServiceSpec::<GetUser>::from_template("https://api.github.com/users/:name")
///     .unwrap()
///     .with_init(RequestInit::new().with_method(Method::GET))
///     .with_json::<User>();
/// assert!(by_template.template().unwrap().has_path_variables());
/// ```
pub struct ServiceSpec<Req, Res = Decoded> {
    url: UrlSource<Req>,
    init: Option<Initializer<Req, InitResult>>,
    transform: Transform<Res>,
}

impl<Req> ServiceSpec<Req, Decoded> {
    /// Creates a spec from a URL initializer.
    #[must_use]
    pub fn new(url: impl Into<Initializer<Req, String>>) -> Self {
        Self {
            url: UrlSource::Initializer(url.into()),
            init: None,
            transform: boxed_default(),
        }
    }

    /// Creates a spec whose URL is a template filled from the payload.
    ///
    /// The payload is serialized with serde; path variables and dynamic query
    /// parameters are looked up by name among its top-level fields. Strings
    /// are inserted verbatim, numbers and booleans in their JSON text form.
    /// A unit payload supplies no fields.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidTemplate` if the template cannot be
    /// parsed.
    pub fn from_template(template: &str) -> Result<Self, ServiceError>
    where
        Req: Serialize,
    {
        let components =
            Arc::new(UrlComponents::parse(template).map_err(ServiceError::InvalidTemplate)?);
        let render_components = Arc::clone(&components);
        let render: UrlRenderer<Req> =
            Arc::new(move |request: &Req| render_from_payload(&render_components, request));

        Ok(Self {
            url: UrlSource::Template { components, render },
            init: None,
            transform: boxed_default(),
        })
    }
}

impl<Req, Res> ServiceSpec<Req, Res> {
    /// Sets the request init.
    ///
    /// Accepts a plain [`RequestInit`], any infallible initializer, or a
    /// fallible one built with [`Initializer::try_from_fn`]. Without one,
    /// requests use the service's default method and headers.
    #[must_use]
    pub fn with_init(mut self, init: impl Into<Initializer<Req, InitResult>>) -> Self {
        self.init = Some(init.into());
        self
    }

    /// Replaces the transform.
    #[must_use]
    pub fn with_transform<R, F, Fut>(self, transform: F) -> ServiceSpec<Req, R>
    where
        F: Fn(Response) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, ServiceError>> + Send + 'static,
    {
        ServiceSpec {
            url: self.url,
            init: self.init,
            transform: Arc::new(move |response| transform(response).boxed()),
        }
    }

    /// Deserializes the response body as JSON into `T`.
    #[must_use]
    pub fn with_json<T>(self) -> ServiceSpec<Req, T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        ServiceSpec {
            url: self.url,
            init: self.init,
            transform: boxed_json(),
        }
    }

    /// Returns the parsed template, if the URL comes from one.
    #[must_use]
    pub fn template(&self) -> Option<&UrlComponents> {
        match &self.url {
            UrlSource::Template { components, .. } => Some(components),
            UrlSource::Initializer(_) => None,
        }
    }

    pub(crate) async fn resolve_url(&self, request: &Req) -> Result<String, ServiceError> {
        match &self.url {
            UrlSource::Initializer(init) => Ok(init.resolve(request).await),
            UrlSource::Template { render, .. } => render(request),
        }
    }

    pub(crate) async fn resolve_init(
        &self,
        request: &Req,
    ) -> Result<Option<RequestInit>, ServiceError> {
        match &self.init {
            Some(init) => init.resolve(request).await.map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn transform(&self) -> &Transform<Res> {
        &self.transform
    }
}

impl<Req, Res> fmt::Debug for ServiceSpec<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ServiceSpec");
        match &self.url {
            UrlSource::Initializer(init) => s.field("url", init),
            UrlSource::Template { components, .. } => s.field("template", &components.as_str()),
        };
        s.field("init", &self.init).finish_non_exhaustive()
    }
}

fn render_from_payload<Req: Serialize>(
    components: &UrlComponents,
    request: &Req,
) -> Result<String, ServiceError> {
    let payload = serde_json::to_value(request).map_err(|e| ServiceError::InvalidPayload {
        reason: e.to_string(),
    })?;

    let fields = match &payload {
        Value::Object(map) => Some(map),
        Value::Null => None,
        _ => {
            return Err(ServiceError::InvalidPayload {
                reason: "payload must serialize to an object".to_string(),
            });
        }
    };

    let url = components.expand(|name| fields.and_then(|map| map.get(name)).and_then(scalar_text))?;
    Ok(url)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
