use sublate_bridge::notification::{InputField, NotificationType};

/// Minimum plausible length of a YouTube API key.
const MIN_API_KEY_LENGTH: usize = 20;

/// Handles an incoming configuration request (see
/// [`sublate_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: super::AppContextHandle) {
    let config = {
        let state = context.state.read().await;
        state.config.clone()
    };
    context
        .send(sublate_bridge::MessageFromBackend::ConfigurationResponse(
            config,
        ))
        .await;
}

/// Validates a user-supplied API key, returning the trimmed key or a
/// user-facing rejection message.
fn validate_api_key(api_key: &str) -> Result<&str, &'static str> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err("API-ключ не может быть пустым.");
    }
    if api_key.len() < MIN_API_KEY_LENGTH {
        return Err("API-ключ слишком короткий.");
    }
    Ok(api_key)
}

/// Handles an API key update request and persists it to config.
pub async fn handle_api_key_update(context: super::AppContextHandle, api_key: String) {
    let api_key = match validate_api_key(&api_key) {
        Ok(api_key) => api_key.to_string(),
        Err(message) => {
            // Rejections stay attached to the key field until corrected.
            context.send_field_error(InputField::ApiKey, message).await;
            return;
        }
    };

    let config = {
        let mut state = context.state.write().await;
        state.config.playback_config.api_key = Some(api_key);
        state.config.clone()
    };

    // persist the updated key so it is remembered across runs
    match crate::config::save_config(&config).await {
        Ok(()) => {
            context
                .send_notification(NotificationType::Success, "API-ключ сохранён.")
                .await;
        }
        Err(error) => {
            log::error!("Failed to persist the API key: {error}");
            context
                .send_notification(NotificationType::Error, "Не удалось сохранить API-ключ.")
                .await;
        }
    }
}
