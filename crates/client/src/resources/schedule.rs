//! `/schedule` endpoints.

use fieldops_core::forms::ScheduleForm;
use fieldops_core::models::Schedule;
use fieldops_core::query::ScheduleQuery;
use fieldops_core::response::DataResponse;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::request::{ApiRequest, RequestBody};

pub const SCHEDULE_PATH: &str = "/schedule";

/// `GET /schedule?month=&year=&status=&technician_id=`
pub fn list_request(query: &ScheduleQuery) -> Result<ApiRequest, ClientError> {
    ApiRequest::get(SCHEDULE_PATH).with_query(query)
}

/// `POST /schedule` with a JSON body.
pub fn create_request(form: &ScheduleForm) -> Result<ApiRequest, ClientError> {
    Ok(ApiRequest::post(SCHEDULE_PATH).with_body(RequestBody::json(form)?))
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn schedules(&self) -> ScheduleApi<'_> {
        ScheduleApi { client: self }
    }
}

impl ScheduleApi<'_> {
    /// Schedules are calendar data and come back unpaginated.
    pub async fn list(&self, query: &ScheduleQuery) -> Result<DataResponse<Vec<Schedule>>, ClientError> {
        self.client.send_json(list_request(query)?).await
    }

    pub async fn create(&self, form: &ScheduleForm) -> Result<DataResponse<Schedule>, ClientError> {
        self.client.send_json(create_request(form)?).await
    }
}
