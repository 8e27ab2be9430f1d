use crate::Store;
use actix_web::{HttpResponse, Responder, delete, get, put, web};
use coffer_store::{RecordData, RecordId};

const RECORDS: &str = "records";

#[derive(serde::Deserialize)]
pub struct RecordPath {
    pub resource: String,
    pub id: RecordId,
}

/// Fetch the stored body of a record
#[utoipa::path(
    tag = RECORDS,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "Collection name"),
        ("id" = u64, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "Stored body, without the id", body = inline(Object), example = json!({"name": "Luke Skywalker"})),
        (status = 404, description = "Record does not exist", body = coffer_server_core::ErrorResponse),
    )
)]
#[get("/{resource}/{id:\\d+}")]
pub async fn get_record(
    path: web::Path<RecordPath>,
    store: Store,
) -> crate::Result<impl Responder> {
    let record = store.get_record(&path.resource, path.id)?;
    Ok(web::Json(record))
}

/// Replace the whole body of a record
#[utoipa::path(
    tag = RECORDS,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "Collection name"),
        ("id" = u64, Path, description = "Record id"),
    ),
    request_body(content = inline(Object), description = "Replacement JSON object", example = json!({"name": "Han Solo"})),
    responses(
        (status = 200, description = "Record replaced"),
        (status = 400, description = "Body is not a JSON object", body = coffer_server_core::ErrorResponse),
        (status = 404, description = "Record does not exist", body = coffer_server_core::ErrorResponse),
    )
)]
#[put("/{resource}/{id:\\d+}")]
pub async fn replace_record(
    path: web::Path<RecordPath>,
    body: web::Json<RecordData>,
    store: Store,
) -> crate::Result<impl Responder> {
    store.replace_record(&path.resource, path.id, body.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}

/// Delete a record; deleting a missing record also succeeds
#[utoipa::path(
    tag = RECORDS,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "Collection name"),
        ("id" = u64, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "Record is gone"),
    )
)]
#[delete("/{resource}/{id:\\d+}")]
pub async fn delete_record(
    path: web::Path<RecordPath>,
    store: Store,
) -> crate::Result<impl Responder> {
    store.delete_record(&path.resource, path.id)?;
    Ok(HttpResponse::Ok().finish())
}
