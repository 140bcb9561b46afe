use super::{
    client::{map_message_response, ApiClient},
    types::{ApiError, ChangePasswordRequest, MessageResponse, VerificationCodeRequest},
};

impl ApiClient {
    /// Asks the backend to e-mail a verification code. Also used for resends.
    pub async fn request_verification_code(
        &self,
        request: &VerificationCodeRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/validacion/validarMail").await;
        let response = self.send(self.post(&url).json(request)).await?;
        map_message_response(response).await
    }

    pub async fn confirm_password_change(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint("/validacion/cambiarContrasena").await;
        let response = self.send(self.post(&url).json(request)).await?;
        map_message_response(response).await
    }
}
