//! `/user` and `/auth/register` endpoints.

use fieldops_core::file::FileUpload;
use fieldops_core::forms::{RegisterUserForm, UserUpdateForm};
use fieldops_core::models::User;
use fieldops_core::query::UserQuery;
use fieldops_core::response::{DataResponse, Paginated};
use fieldops_core::types::DbId;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::request::{optional_part, ApiRequest, RequestBody};

pub const USER_PATH: &str = "/user";
pub const REGISTER_PATH: &str = "/auth/register";

/// Multipart field carrying the profile picture.
pub const AVATAR_FIELD: &str = "avatar";

/// `GET /user?page=&limit=&search=&role=`
pub fn list_request(query: &UserQuery) -> Result<ApiRequest, ClientError> {
    ApiRequest::get(USER_PATH).with_query(query)
}

/// `POST /auth/register` with a JSON body.
pub fn register_request(form: &RegisterUserForm) -> Result<ApiRequest, ClientError> {
    Ok(ApiRequest::post(REGISTER_PATH).with_body(RequestBody::json(form)?))
}

/// `GET /user/{id}`
pub fn get_request(id: DbId) -> ApiRequest {
    ApiRequest::get(format!("{USER_PATH}/{id}"))
}

/// `PUT /user/{id}`: JSON, or multipart when an avatar is attached.
pub fn update_request(
    id: DbId,
    form: &UserUpdateForm,
    avatar: Option<FileUpload>,
) -> Result<ApiRequest, ClientError> {
    let body = RequestBody::form(form, optional_part(AVATAR_FIELD, avatar))?;
    Ok(ApiRequest::put(format!("{USER_PATH}/{id}")).with_body(body))
}

/// `DELETE /user/{id}`
pub fn delete_request(id: DbId) -> ApiRequest {
    ApiRequest::delete(format!("{USER_PATH}/{id}"))
}

#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> UserApi<'_> {
        UserApi { client: self }
    }
}

impl UserApi<'_> {
    pub async fn list(&self, query: &UserQuery) -> Result<Paginated<User>, ClientError> {
        self.client.send_json(list_request(query)?).await
    }

    pub async fn register(&self, form: &RegisterUserForm) -> Result<DataResponse<User>, ClientError> {
        self.client.send_json(register_request(form)?).await
    }

    pub async fn get(&self, id: DbId) -> Result<DataResponse<User>, ClientError> {
        self.client.send_json(get_request(id)).await
    }

    pub async fn update(
        &self,
        id: DbId,
        form: &UserUpdateForm,
        avatar: Option<FileUpload>,
    ) -> Result<DataResponse<User>, ClientError> {
        self.client.send_json(update_request(id, form, avatar)?).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        self.client.send_empty(delete_request(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldops_core::status::UserRole;
    use reqwest::Method;

    fn update_form() -> UserUpdateForm {
        UserUpdateForm {
            name: "Andi".to_string(),
            email: "andi@example.com".to_string(),
            phone: None,
            role: UserRole::Technician,
            is_active: true,
        }
    }

    #[test]
    fn list_by_role() {
        let query = UserQuery {
            role: Some(UserRole::Technician),
            ..UserQuery::default()
        };
        let request = list_request(&query).unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/user");
        assert_eq!(request.query_value("role"), Some("TECHNICIAN"));
        assert_eq!(request.query.len(), 1);
    }

    #[test]
    fn register_posts_to_auth() {
        let form = RegisterUserForm {
            name: "Andi".to_string(),
            email: "andi@example.com".to_string(),
            password: "long-enough".to_string(),
            phone: None,
            role: UserRole::Admin,
            tenant_id: Some(2),
        };
        let request = register_request(&form).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/auth/register");
        let RequestBody::Json(body) = &request.body else {
            panic!("expected json body");
        };
        assert_eq!(body["role"], "ADMIN");
        assert_eq!(body["tenant_id"], 2);
    }

    #[test]
    fn get_and_delete_paths() {
        assert_eq!(get_request(8).path, "/user/8");
        assert_eq!(delete_request(8).method, Method::DELETE);
        assert_eq!(delete_request(8).path, "/user/8");
    }

    #[test]
    fn update_switches_encoding_on_avatar() {
        let json = update_request(8, &update_form(), None).unwrap();
        assert_eq!(json.method, Method::PUT);
        assert_eq!(json.path, "/user/8");
        assert!(!json.body.is_multipart());

        let avatar = FileUpload::new("me.png", "image/png", vec![1]);
        let multipart = update_request(8, &update_form(), Some(avatar)).unwrap();
        let RequestBody::Multipart(body) = &multipart.body else {
            panic!("expected multipart body");
        };
        assert_eq!(body.field("role"), Some("TECHNICIAN"));
        assert_eq!(body.field("phone"), Some(""));
        assert!(body.file(AVATAR_FIELD).is_some());
    }
}
