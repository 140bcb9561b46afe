use crate::api::{
    ApiClient, ApiError, ChangePasswordRequest, MessageResponse, VerificationCodeRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn request_code(
        &self,
        request: &VerificationCodeRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.request_verification_code(request).await
    }

    pub async fn confirm(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.confirm_password_change(request).await
    }
}
