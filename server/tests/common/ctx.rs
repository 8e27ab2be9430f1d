//! Test store context - one shared store behind the real app

use actix_web::{App, dev::ServiceResponse, http::Method, test, web};
use coffer_server::{
    app::ApiDoc,
    bind_app,
    routes::{collections, records, root},
};
use coffer_store::ResourceStore;
use serde_json::Value;
use utoipa::OpenApi;
use utoipa_actix_web::AppExt;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};

use super::RequestBuilder;

/// Test context holding the store every request in a test shares
pub struct TestStoreCtx {
    pub store: web::Data<ResourceStore>,
    pub docs: bool,
}

impl TestStoreCtx {
    /// Create a context around an empty store
    pub fn new() -> Self {
        coffer_testing::logging();
        Self {
            store: web::Data::new(ResourceStore::new()),
            docs: true,
        }
    }

    /// Create a context whose app does not mount the api docs
    pub fn without_docs() -> Self {
        Self {
            docs: false,
            ..Self::new()
        }
    }

    /// The same app `start_server` runs, around this context's store
    pub async fn app(
        &self
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    > {
        let store = self.store.clone();
        let docs = self.docs;

        test::init_service(bind_app!(store, docs,)()).await
    }

    // Helper methods for common test setups

    /// POST `data` to `/{resource}` and return the created id
    pub async fn create(
        &self,
        resource: &str,
        data: Value,
    ) -> u64 {
        let created: Value = self
            .post(&format!("/{resource}"))
            .json(&data)
            .send()
            .await
            .assert_ok()
            .json();
        created["id"]
            .as_u64()
            .unwrap()
    }

    /// DELETE `/`, emptying the store
    pub async fn reset(&self) {
        self.delete("/")
            .send()
            .await
            .assert_ok();
    }
}

// Convenience methods for making requests
impl TestStoreCtx {
    /// Start a GET request builder
    pub fn get<'a>(
        &'a self,
        path: &str,
    ) -> RequestBuilder<'a> {
        RequestBuilder::new(self, Method::GET, path)
    }

    /// Start a POST request builder
    pub fn post<'a>(
        &'a self,
        path: &str,
    ) -> RequestBuilder<'a> {
        RequestBuilder::new(self, Method::POST, path)
    }

    /// Start a DELETE request builder
    pub fn delete<'a>(
        &'a self,
        path: &str,
    ) -> RequestBuilder<'a> {
        RequestBuilder::new(self, Method::DELETE, path)
    }

    /// Start a PUT request builder
    pub fn put<'a>(
        &'a self,
        path: &str,
    ) -> RequestBuilder<'a> {
        RequestBuilder::new(self, Method::PUT, path)
    }
}
