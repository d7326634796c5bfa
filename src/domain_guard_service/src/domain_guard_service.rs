use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use domain_guard_adapters::{
    AdminStrings,
    config::{AllowedOrigins, routes},
};
use domain_guard_axum::{
    require_capability,
    routes::{
        AdminState, domain_list_editor, health_check, register_customer, register_user,
        render_settings, save_settings,
    },
};
use domain_guard_core::{CapabilityValidator, OptionStore, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Registration endpoints guarded by the email domain allow-list, plus the
/// admin page that edits the list.
pub struct DomainGuardService {
    router: Router,
}

impl DomainGuardService {
    /// Create a new DomainGuardService
    ///
    /// # Arguments
    /// * `user_store` - Account storage of the host site
    /// * `option_store` - Key/value settings storage holding the allow-list
    /// * `validator` - Gate for the admin routes
    /// * `strings` - Text of the admin page
    ///
    /// Stores implement Clone via internal Arc<RwLock> or a pool, so every
    /// route gets its own handle.
    pub fn new<U, S, V>(user_store: U, option_store: S, validator: V, strings: AdminStrings) -> Self
    where
        U: UserStore + Clone + 'static,
        S: OptionStore + Clone + 'static,
        V: CapabilityValidator,
    {
        let admin = Router::new()
            .route(
                routes::ADMIN_SETTINGS,
                get(render_settings::<S>).post(save_settings::<S>),
            )
            .with_state(AdminState::new(option_store.clone(), strings))
            .route_layer(from_fn_with_state(validator, require_capability::<V>));

        let router = Router::new()
            // Both sign-up flows go through the same gate
            .route(routes::REGISTER, post(register_user::<U, S>))
            .route(routes::SHOP_REGISTER, post(register_customer::<U, S>))
            .with_state((user_store, option_store))
            .route(routes::DOMAIN_LIST_EDITOR_SCRIPT, get(domain_list_editor))
            .route(routes::HEALTH, get(health_check))
            .merge(admin);

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

    /// Convert the service into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);
        serve(listener, router).await
    }
}

/// Serve an already assembled router.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    tracing::info!("Domain guard listening on {}", listener.local_addr()?);

    axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
        .serve(router.into_make_service())
        .await
}
