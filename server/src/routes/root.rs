use crate::Store;
use actix_web::{HttpResponse, Responder, delete, get, web};

const ROOT: &str = "root";

/// List the key of every live record
///
/// Collections appear in the order they were first written to; records
/// within a collection in ascending id order.
#[utoipa::path(
    tag = ROOT,
    responses(
        (status = 200, description = "Keys of all live records", body = Vec<String>, example = json!(["/cars/1", "/trucks/1"])),
    )
)]
#[get("/")]
pub async fn list_keys(store: Store) -> crate::Result<impl Responder> {
    let keys = store.list_all_keys()?;
    Ok(web::Json(keys))
}

/// Remove every collection and record
#[utoipa::path(
    tag = ROOT,
    responses(
        (status = 200, description = "Store emptied, ids restart at 1"),
    )
)]
#[delete("/")]
pub async fn reset(store: Store) -> crate::Result<impl Responder> {
    store.reset()?;
    Ok(HttpResponse::Ok().finish())
}
