use crate::models::StatusCheck;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct StatusCheckCreate {
    #[validate(length(min = 1, message = "client_name is required"))]
    pub client_name: String,
}

impl StatusCheckCreate {
    pub fn into_status_check(self) -> StatusCheck {
        StatusCheck::new(self.client_name)
    }
}
