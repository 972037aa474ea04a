//! Router assembly for the credo credential service.
//!
//! Wires the port implementations into the four HTTP endpoints and applies
//! the CORS and trace layers. Everything request-scoped is shared through
//! `Clone`; the blocklist and signing secret are read-only after startup.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use credo_adapters::{
    config::AllowedOrigins,
    http::routes::{health, login, me, register},
};
use credo_core::{AccountStore, Blocklist, CredentialHasher, MxResolver, TokenService};

pub mod tracing;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled credential service: three identity routes plus liveness.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Wire the port implementations into a router.
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal Arc for thread-safe sharing.
    /// Each route is given only the state it needs.
    pub fn new<S, M, H, T>(
        account_store: S,
        blocklist: Arc<Blocklist>,
        mx_resolver: M,
        hasher: H,
        token_service: T,
    ) -> Self
    where
        S: AccountStore + Clone + 'static,
        M: MxResolver + Clone + 'static,
        H: CredentialHasher + Clone + 'static,
        T: TokenService + Clone + 'static,
    {
        let router = Router::new()
            // Register needs the store plus all three email gates
            .route("/api/register", post(register::<S, M, H>))
            .with_state((
                account_store.clone(),
                blocklist,
                mx_resolver,
                hasher.clone(),
            ))
            // Login needs the store, hasher and token service
            .route("/api/login", post(login::<S, H, T>))
            .with_state((account_store, hasher, token_service.clone()))
            // Me only needs the token service
            .route("/api/me", get(me::<T>))
            .with_state(token_service)
            .route("/health", get(health));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finalize the router, restricting CORS to the configured origins.
    pub fn into_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        ::tracing::info!("credo listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
