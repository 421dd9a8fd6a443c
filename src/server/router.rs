//! Ordered, first-match-wins request dispatch.

use std::sync::Arc;

use log::{debug, error};

use crate::parser::{HttpRequest, Method};
use crate::server::handler::{Route, RouteMatch};
use crate::server::{routes, FileStore, HttpResponse, StatusCode};

/// Selects a handler for each request and turns its result into a response.
///
/// Override routes are checked before the regular table. The table itself is
/// evaluated in insertion order and the first matching route wins. Requests
/// nothing matches, and handlers that fail, get an empty 404.
pub struct Router<S> {
    store: Arc<S>,
    routes: Vec<Route<S>>,
    overrides: Vec<Route<S>>,
}

impl<S: FileStore> Router<S> {
    /// Create a router with no routes.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            routes: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Create a router with the standard route table.
    ///
    /// | Order | Match                          | Handler      |
    /// |-------|--------------------------------|--------------|
    /// | 1     | path is `/`                    | empty 200    |
    /// | 2     | path contains `/echo/`         | echo         |
    /// | 3     | path contains `/user-agent`    | user agent   |
    /// | 4     | GET and path contains `/files` | read file    |
    ///
    /// Any POST overrides the table and stores its body as a file.
    pub fn with_default_routes(store: S) -> Self {
        let mut router = Self::new(store);
        router.add_route(Route::new("root", RouteMatch::Exact("/"), routes::root::<S>));
        router.add_route(Route::new("echo", RouteMatch::Contains("/echo/"), routes::echo::<S>));
        router.add_route(Route::new("user-agent", RouteMatch::Contains("/user-agent"), routes::user_agent::<S>));
        router.add_route(Route::new(
            "read-file",
            RouteMatch::MethodContains(Method::GET, "/files"),
            routes::read_file::<S>,
        ));
        router.add_override(Route::new("write-file", RouteMatch::AnyPath(Method::POST), routes::write_file::<S>));
        router
    }

    /// Append a route to the table. Earlier routes take priority.
    pub fn add_route(&mut self, route: Route<S>) {
        self.routes.push(route);
    }

    /// Add a route that is consulted before the whole table.
    pub fn add_override(&mut self, route: Route<S>) {
        self.overrides.push(route);
    }

    /// All routes in evaluation order, overrides first.
    pub fn routes(&self) -> impl Iterator<Item = &Route<S>> {
        self.overrides.iter().chain(self.routes.iter())
    }

    /// The store handed to every handler.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Find the route that handles `request`.
    pub fn route_for(&self, request: &HttpRequest) -> Option<&Route<S>> {
        self.routes().find(|route| route.matches(request))
    }

    /// Dispatch a request and produce its response.
    ///
    /// Never fails: every error ends up as an empty 404.
    pub async fn dispatch(&self, request: HttpRequest) -> HttpResponse {
        let Some(route) = self.route_for(&request) else {
            debug!("No route for {line}", line = request.start_line());
            return HttpResponse::new(StatusCode::NotFound);
        };

        let line = request.start_line();
        match (route.handler)(request, Arc::clone(&self.store)).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => {
                debug!("{line} via {name}: {e}", name = route.name);
                HttpResponse::new(StatusCode::NotFound)
            }
            Err(e) => {
                error!("{line} via {name} failed: {e}", name = route.name);
                HttpResponse::new(StatusCode::NotFound)
            }
        }
    }
}
