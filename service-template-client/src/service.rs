//! The dispatcher that turns specs into callables.

use std::fmt;
use std::sync::Arc;

use service_template::parse_url_template;
use tracing::{Instrument, Span, debug, debug_span, field};
use url::Url;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::request::RequestInit;
use crate::spec::ServiceSpec;
use crate::transport::Transport;

/// Creates callables from [`ServiceSpec`]s.
///
/// A service owns one transport and one configuration and shares both with
/// every callable it creates. Creating a callable performs no I/O.
///
/// # Examples
///
/// ```no_run
/// use serde::{Deserialize, Serialize};
/// use service_template_client::{Service, ServiceSpec};
///
/// #[derive(Serialize)]
/// struct GetUser {
///     name: String,
/// }
///
/// #[derive(Debug, Deserialize)]
/// struct User {
///     login: String,
/// }
///
/// # async fn run() -> Result<(), service_template_client::ServiceError> {
/// let service = Service::new();
/// let get_user = service.create(
///     ServiceSpec::<GetUser>::from_template("https://api.github.com/users/:name")?
///         .with_json::<User>(),
/// );
///
/// let user = get_user.call(GetUser { name: "ferris".into() }).await?;
/// println!("{}", user.login);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Service {
    transport: Arc<dyn Transport>,
    config: Arc<ServiceConfig>,
}

impl Service {
    /// Creates a service backed by [`ReqwestTransport`](crate::ReqwestTransport).
    #[cfg(feature = "reqwest")]
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(crate::transport::ReqwestTransport::new())
    }

    /// Creates a service backed by the given transport.
    #[must_use]
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(ServiceConfig::default()),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Turns a spec into a callable.
    #[must_use]
    pub fn create<Req, Res>(&self, spec: ServiceSpec<Req, Res>) -> CallableService<Req, Res> {
        CallableService {
            spec: Arc::new(spec),
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

#[cfg(feature = "reqwest")]
impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A typed remote call created by [`Service::create`].
///
/// Cloning is cheap; clones share the `ServiceSpec`, transport and configuration.
pub struct CallableService<Req, Res> {
    spec: Arc<ServiceSpec<Req, Res>>,
    transport: Arc<dyn Transport>,
    config: Arc<ServiceConfig>,
}

impl<Req, Res> CallableService<Req, Res> {
    /// Performs the call for a request payload.
    ///
    /// The URL and request init are resolved from the payload, the URL is
    /// validated (and joined onto the base URL when relative), the transport
    /// sends the request, and the `ServiceSpec` transform produces the result.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the URL or request init cannot be resolved,
    /// the URL is invalid, the transport fails, or the transform rejects the
    /// response.
    pub async fn call(&self, request: Req) -> Result<Res, ServiceError> {
        let span = debug_span!("service_call", url = field::Empty);
        self.dispatch(&request).instrument(span).await
    }

    /// Performs the call with the payload's default value.
    ///
    /// # Errors
    ///
    /// See [`CallableService::call`].
    pub async fn call_default(&self) -> Result<Res, ServiceError>
    where
        Req: Default,
    {
        self.call(Req::default()).await
    }

    /// Returns the `ServiceSpec` this callable was created from.
    #[must_use]
    pub fn spec(&self) -> &ServiceSpec<Req, Res> {
        &self.spec
    }

    async fn dispatch(&self, request: &Req) -> Result<Res, ServiceError> {
        let url = self.spec.resolve_url(request).await.inspect_err(|e| {
            debug!(error = %e, "cannot resolve request URL");
        })?;
        Span::current().record("url", url.as_str());
        let url = self.resolve_against_base(url)?;

        let mut init = self
            .spec
            .resolve_init(request)
            .await
            .inspect_err(|e| debug!(error = %e, "cannot build request init"))?
            .unwrap_or_else(|| RequestInit::new().with_method(self.config.default_method.clone()));
        init.merge_default_headers(&self.config.default_headers);

        debug!(method = %init.method(), url = %url, "sending request");
        let response = self.transport.send(&url, init).await?;
        debug!(status = %response.status(), "received response");

        (self.spec.transform())(response).await
    }

    fn resolve_against_base(&self, url: String) -> Result<String, ServiceError> {
        let components = parse_url_template(&url).map_err(ServiceError::InvalidUrl)?;
        if components.is_absolute() {
            return Ok(url);
        }

        let Some(base) = &self.config.base_url else {
            return Ok(url);
        };

        let joined: Url = base
            .join(&url)
            .map_err(|e| ServiceError::InvalidBaseUrl {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        debug!(base = %base, joined = %joined, "resolved relative URL");
        Ok(joined.into())
    }
}

impl<Req, Res> Clone for CallableService<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            spec: Arc::clone(&self.spec),
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

impl<Req, Res> fmt::Debug for CallableService<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableService")
            .field("spec", &self.spec)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
