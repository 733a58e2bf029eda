//! `/customer` and `/service-connection` endpoints.

use fieldops_core::forms::CustomerForm;
use fieldops_core::models::Customer;
use fieldops_core::photo::PhotoSlots;
use fieldops_core::query::CustomerQuery;
use fieldops_core::response::{DataResponse, Paginated};
use fieldops_core::types::DbId;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::request::{ApiRequest, FilePart, RequestBody};

pub const CUSTOMER_PATH: &str = "/customer";
pub const SERVICE_CONNECTION_PATH: &str = "/service-connection";

/// `GET /customer?page=&limit=&search=&status=&package_name=`
pub fn list_request(query: &CustomerQuery) -> Result<ApiRequest, ClientError> {
    ApiRequest::get(CUSTOMER_PATH).with_query(query)
}

/// `POST /customer`
///
/// Every filled photo slot becomes a file part named after its slot type
/// (`ktp`, `rumah_depan`, ...). With no photos the form goes out as JSON.
pub fn create_request(form: &CustomerForm, photos: &PhotoSlots) -> Result<ApiRequest, ClientError> {
    let files = photos
        .attachments()
        .map(|(ty, file)| FilePart::new(ty.as_str(), file.clone()))
        .collect();
    Ok(ApiRequest::post(CUSTOMER_PATH).with_body(RequestBody::form(form, files)?))
}

/// `DELETE /customer/{id}`
pub fn delete_request(id: DbId) -> ApiRequest {
    ApiRequest::delete(format!("{CUSTOMER_PATH}/{id}"))
}

/// `DELETE /service-connection/{id}`
pub fn delete_service_connection_request(id: DbId) -> ApiRequest {
    ApiRequest::delete(format!("{SERVICE_CONNECTION_PATH}/{id}"))
}

/// Customer endpoints bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct CustomerApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn customers(&self) -> CustomerApi<'_> {
        CustomerApi { client: self }
    }
}

impl CustomerApi<'_> {
    pub async fn list(&self, query: &CustomerQuery) -> Result<Paginated<Customer>, ClientError> {
        self.client.send_json(list_request(query)?).await
    }

    pub async fn create(
        &self,
        form: &CustomerForm,
        photos: &PhotoSlots,
    ) -> Result<DataResponse<Customer>, ClientError> {
        self.client.send_json(create_request(form, photos)?).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        self.client.send_empty(delete_request(id)).await
    }

    pub async fn delete_service_connection(&self, id: DbId) -> Result<(), ClientError> {
        self.client
            .send_empty(delete_service_connection_request(id))
            .await
    }
}
