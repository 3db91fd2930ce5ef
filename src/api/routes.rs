//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, AnimalResponse, CreateAnimalRequest, CreateAnimalResponse, ErrorResponse, HealthResponse,
    LocationDto, MessageResponse, UpdateAnimalRequest, UpdateAnimalResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menagerie API",
        version = "0.1.0",
        description = "CRUD service for animal records",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_animals,
        handlers::create_animal,
        handlers::update_animal,
        handlers::delete_animal,
    ),
    components(
        schemas(
            HealthResponse,
            AnimalResponse,
            LocationDto,
            CreateAnimalRequest,
            UpdateAnimalRequest,
            CreateAnimalResponse,
            UpdateAnimalResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "animals", description = "Animal record management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (health is generic - it pings the store)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health::<D>));

    // Animal routes (generic over Database)
    let animal_routes = routes!(D => {
        get "/api/animals" => handlers::list_animals,
        post "/api/animals" => handlers::create_animal,
        put "/api/animals/{id}" => handlers::update_animal,
        delete "/api/animals/{id}" => handlers::delete_animal,
    });

    system_routes
        .merge(animal_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
