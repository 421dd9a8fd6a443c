//! Route handlers and matching.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::parser::{HttpRequest, Method};
use crate::server::{HttpResponse, Error};

/// Type alias for a boxed future that returns a Result<HttpResponse, Error>.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>;

/// Type alias for a handler function that takes an HttpRequest and the store
/// and returns a HandlerFuture.
pub type HandlerFn<S> = Arc<dyn Fn(HttpRequest, Arc<S>) -> HandlerFuture + Send + Sync>;

/// The condition a request has to meet for a route to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// The path equals this string.
    Exact(&'static str),
    /// The path contains this string anywhere.
    Contains(&'static str),
    /// The method matches and the path contains this string.
    MethodContains(Method, &'static str),
    /// The method matches, whatever the path.
    AnyPath(Method),
}

impl RouteMatch {
    /// Check a request against this condition.
    pub fn matches(&self, request: &HttpRequest) -> bool {
        match self {
            RouteMatch::Exact(path) => request.path == *path,
            RouteMatch::Contains(needle) => request.path.contains(needle),
            RouteMatch::MethodContains(method, needle) => {
                request.method == *method && request.path.contains(needle)
            }
            RouteMatch::AnyPath(method) => request.method == *method,
        }
    }
}

impl fmt::Display for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMatch::Exact(path) => write!(f, "* {path}"),
            RouteMatch::Contains(needle) => write!(f, "* *{needle}*"),
            RouteMatch::MethodContains(method, needle) => write!(f, "{method} *{needle}*"),
            RouteMatch::AnyPath(method) => write!(f, "{method} *"),
        }
    }
}

/// Represents a route in the HTTP server.
pub struct Route<S> {
    /// Name used when logging the route table.
    pub name: &'static str,
    /// The condition to match.
    pub matcher: RouteMatch,
    /// The handler function.
    pub handler: HandlerFn<S>,
}

impl<S: Send + Sync + 'static> Route<S> {
    /// Create a route from an async handler function.
    pub fn new<F, Fut>(name: &'static str, matcher: RouteMatch, handler: F) -> Self
    where
        F: Fn(HttpRequest, Arc<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        let handler: HandlerFn<S> = Arc::new(move |req: HttpRequest, store: Arc<S>| -> HandlerFuture {
            Box::pin(handler(req, store))
        });

        Self {
            name,
            matcher,
            handler,
        }
    }

    /// Check whether this route handles the request.
    pub fn matches(&self, request: &HttpRequest) -> bool {
        self.matcher.matches(request)
    }
}

impl<S> fmt::Display for Route<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {}", self.name, self.matcher)
    }
}
