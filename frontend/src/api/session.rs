use super::{
    client::{map_message_response, map_typed_response, ApiClient},
    types::{ApiError, SessionUser},
};

impl ApiClient {
    pub async fn get_session(&self) -> Result<SessionUser, ApiError> {
        let url = self.endpoint("/auth/me").await;
        let response = self
            .send(self.get(&url).headers(self.auth_headers()))
            .await?;
        map_typed_response(response).await
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let response = self
            .send(
                self.post(&url)
                    .headers(self.auth_headers())
                    .json(&serde_json::json!({})),
            )
            .await?;
        map_message_response(response).await?;
        Self::clear_stored_session();
        Ok(())
    }
}
