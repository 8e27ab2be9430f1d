use crate::Store;
use actix_web::{Responder, get, post, web};
use coffer_server_core::models::CreatedResponse;
use coffer_store::RecordData;

const COLLECTIONS: &str = "collections";

/// List every record of a collection, each with its `id`
#[utoipa::path(
    tag = COLLECTIONS,
    params(
        ("resource" = String, Path, description = "Collection name"),
    ),
    responses(
        (status = 200, description = "Records in ascending id order", body = Vec<Object>, example = json!([{"id": 1, "name": "Toyota Corolla"}, {"id": 2, "name": "Honda Civic"}])),
        (status = 404, description = "Collection is empty or does not exist", body = coffer_server_core::ErrorResponse),
    )
)]
#[get("/{resource}")]
pub async fn list_collection(
    resource: web::Path<String>,
    store: Store,
) -> crate::Result<impl Responder> {
    let records = store.list_collection(&resource)?;
    Ok(web::Json(records))
}

/// Store a new record, creating the collection on first use
#[utoipa::path(
    tag = COLLECTIONS,
    params(
        ("resource" = String, Path, description = "Collection name"),
    ),
    request_body(content = inline(Object), description = "Any JSON object", example = json!({"name": "Luke Skywalker"})),
    responses(
        (status = 200, description = "Record stored", body = CreatedResponse),
        (status = 400, description = "Body is not a JSON object", body = coffer_server_core::ErrorResponse),
    )
)]
#[post("/{resource}")]
pub async fn create_record(
    resource: web::Path<String>,
    body: web::Json<RecordData>,
    store: Store,
) -> crate::Result<impl Responder> {
    let created = store.create_record(&resource, body.into_inner())?;
    Ok(web::Json(CreatedResponse::from(created)))
}
