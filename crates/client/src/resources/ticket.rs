//! `/ticket` endpoints.

use fieldops_core::file::FileUpload;
use fieldops_core::forms::{TicketForm, TicketUpdateForm};
use fieldops_core::models::{Ticket, TicketHistory};
use fieldops_core::query::TicketQuery;
use fieldops_core::response::{DataResponse, Paginated};
use fieldops_core::types::DbId;

use crate::client::{ApiClient, BinaryResponse};
use crate::error::ClientError;
use crate::request::{optional_part, ApiRequest, RequestBody};
use crate::resources::IMAGE_ACCEPT;

pub const TICKET_PATH: &str = "/ticket";

/// Multipart field carrying the photo attached to a ticket update.
pub const IMAGE_FIELD: &str = "image";

/// `GET /ticket?page=&limit=&search=`
pub fn list_request(query: &TicketQuery) -> Result<ApiRequest, ClientError> {
    ApiRequest::get(TICKET_PATH).with_query(query)
}

/// `POST /ticket` with a JSON body.
pub fn create_request(form: &TicketForm) -> Result<ApiRequest, ClientError> {
    Ok(ApiRequest::post(TICKET_PATH).with_body(RequestBody::json(form)?))
}

/// `GET /ticket/{id}`
pub fn get_request(id: DbId) -> ApiRequest {
    ApiRequest::get(format!("{TICKET_PATH}/{id}"))
}

/// `GET /ticket/{id}/history`
pub fn history_request(id: DbId) -> ApiRequest {
    ApiRequest::get(format!("{TICKET_PATH}/{id}/history"))
}

/// `GET /ticket/history/{history_id}/image`
pub fn history_image_request(history_id: DbId) -> ApiRequest {
    ApiRequest::get(format!("{TICKET_PATH}/history/{history_id}/image"))
        .with_header("Accept", IMAGE_ACCEPT)
}

/// `PUT /ticket/{id}`: JSON, or multipart when a photo is attached.
pub fn update_request(
    id: DbId,
    form: &TicketUpdateForm,
    image: Option<FileUpload>,
) -> Result<ApiRequest, ClientError> {
    let body = RequestBody::form(form, optional_part(IMAGE_FIELD, image))?;
    Ok(ApiRequest::put(format!("{TICKET_PATH}/{id}")).with_body(body))
}

#[derive(Debug, Clone, Copy)]
pub struct TicketApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn tickets(&self) -> TicketApi<'_> {
        TicketApi { client: self }
    }
}

impl TicketApi<'_> {
    pub async fn list(&self, query: &TicketQuery) -> Result<Paginated<Ticket>, ClientError> {
        self.client.send_json(list_request(query)?).await
    }

    pub async fn create(&self, form: &TicketForm) -> Result<DataResponse<Ticket>, ClientError> {
        self.client.send_json(create_request(form)?).await
    }

    pub async fn get(&self, id: DbId) -> Result<DataResponse<Ticket>, ClientError> {
        self.client.send_json(get_request(id)).await
    }

    pub async fn history(&self, id: DbId) -> Result<DataResponse<Vec<TicketHistory>>, ClientError> {
        self.client.send_json(history_request(id)).await
    }

    /// Image attached to one history entry.
    pub async fn history_image(&self, history_id: DbId) -> Result<BinaryResponse, ClientError> {
        self.client.send_bytes(history_image_request(history_id)).await
    }

    pub async fn update(
        &self,
        id: DbId,
        form: &TicketUpdateForm,
        image: Option<FileUpload>,
    ) -> Result<DataResponse<Ticket>, ClientError> {
        self.client.send_json(update_request(id, form, image)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldops_core::status::{TicketPriority, TicketStatus};
    use reqwest::Method;

    fn update_form() -> TicketUpdateForm {
        TicketUpdateForm {
            title: "No signal".to_string(),
            description: "LOS light red".to_string(),
            status: TicketStatus::Resolved,
            priority: TicketPriority::High,
            assigned_to: Some(7),
            note: Some("Replaced patch cord".to_string()),
        }
    }

    #[test]
    fn list_with_search() {
        let query = TicketQuery {
            page: Some(3),
            limit: None,
            search: Some("los".to_string()),
        };
        let request = list_request(&query).unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/ticket");
        assert_eq!(
            request.query,
            vec![
                ("page".to_string(), "3".to_string()),
                ("search".to_string(), "los".to_string()),
            ]
        );
    }

    #[test]
    fn create_is_json() {
        let form = TicketForm {
            customer_id: 10,
            title: "No signal".to_string(),
            description: "LOS light red".to_string(),
            priority: TicketPriority::Urgent,
        };
        let request = create_request(&form).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/ticket");
        let RequestBody::Json(body) = &request.body else {
            panic!("expected json body");
        };
        assert_eq!(body["priority"], "URGENT");
    }

    #[test]
    fn read_paths() {
        assert_eq!(get_request(5).path, "/ticket/5");
        assert_eq!(history_request(5).path, "/ticket/5/history");

        let image = history_image_request(31);
        assert_eq!(image.method, Method::GET);
        assert_eq!(image.path, "/ticket/history/31/image");
        assert_eq!(image.header("Accept"), Some(IMAGE_ACCEPT));
    }

    #[test]
    fn update_without_image_is_json() {
        let request = update_request(5, &update_form(), None).unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/ticket/5");
        assert!(!request.body.is_multipart());
    }

    #[test]
    fn update_with_image_is_multipart() {
        let image = FileUpload::new("fix.jpg", "image/jpeg", vec![0xFF, 0xD8]);
        let request = update_request(5, &update_form(), Some(image)).unwrap();

        let RequestBody::Multipart(body) = &request.body else {
            panic!("expected multipart body");
        };
        assert_eq!(body.field("status"), Some("RESOLVED"));
        assert_eq!(body.field("assigned_to"), Some("7"));
        assert_eq!(body.field("note"), Some("Replaced patch cord"));
        assert!(body.file(IMAGE_FIELD).is_some());
    }
}
