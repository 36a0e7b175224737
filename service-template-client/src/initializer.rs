//! Values that may be literal, computed from the request, or deferred.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::ServiceError;
use crate::request::RequestInit;

/// A value of type `T` supplied in one of four shapes.
///
/// Every shape is resolved the same way by [`Initializer::resolve`], so a
/// spec can use whichever is convenient for its URL or request init.
///
/// # Examples
///
/// ```
/// use service_template_client::Initializer;
///
/// struct GetUser {
///     name: String,
/// }
///
/// let literal: Initializer<GetUser, String> = "https://api.github.com/users/ferris".into();
/// let computed = Initializer::from_fn(|req: &GetUser| {
///     format!("https://api.github.com/users/{}", req.name)
/// });
///
/// let req = GetUser { name: "ferris".to_string() };
/// let a = futures::executor::block_on(literal.resolve(&req));
/// let b = futures::executor::block_on(computed.resolve(&req));
/// assert_eq!(a, b);
/// ```
pub enum Initializer<Req, T> {
    /// A fixed value.
    Value(T),
    /// A value produced once by a future and shared by every call.
    Deferred(Shared<BoxFuture<'static, T>>),
    /// A value computed from the request.
    Function(Arc<dyn Fn(&Req) -> T + Send + Sync>),
    /// A value computed asynchronously from the request.
    AsyncFunction(Arc<dyn Fn(&Req) -> BoxFuture<'static, T> + Send + Sync>),
}

impl<Req, T> Initializer<Req, T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Wraps a fixed value.
    #[must_use]
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wraps a future whose output is awaited on first use and then reused.
    #[must_use]
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::Deferred(future.boxed().shared())
    }

    /// Wraps a function of the request.
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Req) -> T + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Wraps an async function of the request.
    ///
    /// The returned future must not borrow the request; clone what it needs.
    #[must_use]
    pub fn from_async_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(&Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::AsyncFunction(Arc::new(move |req: &Req| f(req).boxed()))
    }

    /// Resolves the value for a request.
    pub async fn resolve(&self, request: &Req) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Deferred(shared) => shared.clone().await,
            Self::Function(f) => f(request),
            Self::AsyncFunction(f) => f(request).await,
        }
    }
}

impl<Req, T> Initializer<Req, Result<T, ServiceError>>
where
    T: Clone + Send + Sync + 'static,
{
    /// Wraps a fallible function of the request.
    ///
    /// An `Err` fails the call before anything is sent.
    #[must_use]
    pub fn try_from_fn<F>(f: F) -> Self
    where
        F: Fn(&Req) -> Result<T, ServiceError> + Send + Sync + 'static,
    {
        Self::from_fn(f)
    }

    /// Wraps a fallible async function of the request.
    #[must_use]
    pub fn try_from_async_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(&Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ServiceError>> + Send + 'static,
    {
        Self::from_async_fn(f)
    }
}

impl<Req, T: Clone> Clone for Initializer<Req, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Deferred(shared) => Self::Deferred(shared.clone()),
            Self::Function(f) => Self::Function(Arc::clone(f)),
            Self::AsyncFunction(f) => Self::AsyncFunction(Arc::clone(f)),
        }
    }
}

impl<Req, T: fmt::Debug> fmt::Debug for Initializer<Req, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred"),
            Self::Function(_) => f.write_str("Function"),
            Self::AsyncFunction(_) => f.write_str("AsyncFunction"),
        }
    }
}

impl<Req> From<&str> for Initializer<Req, String> {
    fn from(url: &str) -> Self {
        Self::Value(url.to_string())
    }
}

impl<Req> From<String> for Initializer<Req, String> {
    fn from(url: String) -> Self {
        Self::Value(url)
    }
}

impl<Req> From<RequestInit> for Initializer<Req, Result<RequestInit, ServiceError>> {
    fn from(init: RequestInit) -> Self {
        Self::Value(Ok(init))
    }
}

impl<Req: 'static> From<Initializer<Req, RequestInit>>
    for Initializer<Req, Result<RequestInit, ServiceError>>
{
    fn from(init: Initializer<Req, RequestInit>) -> Self {
        match init {
            Initializer::Value(value) => Self::Value(Ok(value)),
            Initializer::Deferred(shared) => {
                Self::Deferred(shared.map(Ok::<_, ServiceError>).boxed().shared())
            }
            Initializer::Function(f) => Self::Function(Arc::new(move |req: &Req| Ok::<_, ServiceError>(f(req)))),
            Initializer::AsyncFunction(f) => Self::AsyncFunction(Arc::new(move |req: &Req| {
                f(req).map(Ok::<_, ServiceError>).boxed()
            })),
        }
    }
}
