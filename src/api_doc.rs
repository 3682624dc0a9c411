use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{CreateItemRequest, Item, UpdateItemRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-items-api",
        version = "1.0.0",
        description = "A small items CRUD API backed by a local JSON file"
    ),
    paths(
        handlers::root::root_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(schemas(Item, CreateItemRequest, UpdateItemRequest, ErrorResponse)),
    tags(
        (name = "meta", description = "Service banner"),
        (name = "items", description = "Item CRUD operations")
    )
)]
pub struct ApiDoc;
