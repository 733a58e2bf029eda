//! `/tenant` endpoints.

use fieldops_core::file::FileUpload;
use fieldops_core::forms::TenantForm;
use fieldops_core::models::Tenant;
use fieldops_core::query::TenantQuery;
use fieldops_core::response::{DataResponse, Paginated};
use fieldops_core::types::DbId;

use crate::client::{ApiClient, BinaryResponse};
use crate::error::ClientError;
use crate::request::{optional_part, ApiRequest, RequestBody};
use crate::resources::IMAGE_ACCEPT;

pub const TENANT_PATH: &str = "/tenant";

/// Multipart field carrying the tenant logo.
pub const LOGO_FIELD: &str = "image";

/// `GET /tenant?page=&limit=&search=&is_active=`
pub fn list_request(query: &TenantQuery) -> Result<ApiRequest, ClientError> {
    ApiRequest::get(TENANT_PATH).with_query(query)
}

/// `GET /tenant/{id}`
pub fn get_request(id: DbId) -> ApiRequest {
    ApiRequest::get(format!("{TENANT_PATH}/{id}"))
}

/// `PUT /tenant/{id}`: full replace of name, address, phone and `is_active`,
/// with the logo as file part `image` when one is attached.
pub fn update_request(
    id: DbId,
    form: &TenantForm,
    logo: Option<FileUpload>,
) -> Result<ApiRequest, ClientError> {
    let body = RequestBody::form(form, optional_part(LOGO_FIELD, logo))?;
    Ok(ApiRequest::put(format!("{TENANT_PATH}/{id}")).with_body(body))
}

/// `DELETE /tenant/{id}` (soft delete on the backend).
pub fn delete_request(id: DbId) -> ApiRequest {
    ApiRequest::delete(format!("{TENANT_PATH}/{id}"))
}

/// `GET /tenant/{id}/logo`
pub fn logo_request(id: DbId) -> ApiRequest {
    ApiRequest::get(format!("{TENANT_PATH}/{id}/logo")).with_header("Accept", IMAGE_ACCEPT)
}

#[derive(Debug, Clone, Copy)]
pub struct TenantApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn tenants(&self) -> TenantApi<'_> {
        TenantApi { client: self }
    }
}

impl TenantApi<'_> {
    pub async fn list(&self, query: &TenantQuery) -> Result<Paginated<Tenant>, ClientError> {
        self.client.send_json(list_request(query)?).await
    }

    pub async fn get(&self, id: DbId) -> Result<DataResponse<Tenant>, ClientError> {
        self.client.send_json(get_request(id)).await
    }

    pub async fn update(
        &self,
        id: DbId,
        form: &TenantForm,
        logo: Option<FileUpload>,
    ) -> Result<DataResponse<Tenant>, ClientError> {
        self.client.send_json(update_request(id, form, logo)?).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        self.client.send_empty(delete_request(id)).await
    }

    /// Raw logo image bytes.
    pub async fn logo(&self, id: DbId) -> Result<BinaryResponse, ClientError> {
        self.client.send_bytes(logo_request(id)).await
    }
}
