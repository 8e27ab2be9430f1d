use actix_web::{App, HttpServer, web};
use coffer_store::ResourceStore;
use utoipa::{Modify, OpenApi, PartialSchema};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "coffer", description = "Coffer resource store API")
    ),
    modifiers(&SharedErrorsAddon),
)]
pub struct ApiDoc;

struct SharedErrorsAddon;

impl Modify for SharedErrorsAddon {
    fn modify(
        &self,
        openapi: &mut utoipa::openapi::OpenApi,
    ) {
        openapi
            .components
            .get_or_insert_with(Default::default)
            .schemas
            .insert(
                "ErrorResponse".into(),
                coffer_server_core::ErrorResponse::schema(),
            );
    }
}

/// Malformed or non-object bodies become `Error::InvalidBody`. Bodies are
/// parsed whatever their declared content type.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| crate::Error::InvalidBody(err.to_string()).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, req| crate::Error::InvalidPath(req.path().to_string()).into())
}

#[macro_export]
macro_rules! bind_app {
    (
        $store: ident,
        $docs: ident,
    ) => {
        move || {
            let (app, api) = App::new()
                .into_utoipa_app()
                .openapi(ApiDoc::openapi())
                .app_data($store.clone())
                .app_data($crate::app::json_config())
                .app_data($crate::app::path_config())
                // Root
                .service(root::list_keys)
                .service(root::reset)
                // Collections
                .service(collections::list_collection)
                .service(collections::create_record)
                // Records
                .service(records::get_record)
                .service(records::replace_record)
                .service(records::delete_record)
                .split_for_parts();

            let app = app.default_service(web::to($crate::routes::not_found));

            // `/api-docs/*` never collides with a record route: ids are numeric
            if $docs {
                app.service(Redoc::with_url("/api-docs/redoc", api.clone()))
                    .service(
                        RapiDoc::with_openapi("/api-docs/openapi.json", api)
                            .path("/api-docs/rapidoc"),
                    )
            } else {
                app
            }
        }
    };
}

pub async fn start_server(config: crate::config::Config) -> crate::Result<()> {
    use crate::routes::*;
    use utoipa_actix_web::AppExt;
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable};

    let store = web::Data::new(ResourceStore::new());
    let docs = config.docs;
    let addr = config.addr;

    tracing::info!("starting server on http://{addr}");
    if docs {
        tracing::info!("api docs at http://{addr}/api-docs/redoc");
    }

    let mut server = HttpServer::new(bind_app!(store, docs,));
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind(&addr)?
        .run()
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
