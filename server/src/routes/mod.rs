pub mod collections;
pub mod records;
pub mod root;

/// Fallback for paths no route matches, e.g. a non-numeric record id.
pub async fn not_found(req: actix_web::HttpRequest) -> crate::Result<actix_web::HttpResponse> {
    Err(crate::Error::InvalidPath(req.path().to_string()))
}
