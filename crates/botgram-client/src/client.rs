//! The HTTP transport: one POST per API method call.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use botgram_types::{
    BotCommand, File, Message, ResponseParameters, Update, User, WebhookInfo,
};

use crate::error::Error;
use crate::methods::{
    AnswerCallbackQueryRequest, GetFileRequest, GetUpdatesRequest, SendChatActionRequest,
    SendMessageRequest, SetMyCommandsRequest, SetWebhookRequest,
};

/// Default API host; overridable for local Bot API servers.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Response envelope common to every API call.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    pub error_code: Option<i64>,
    pub description: Option<String>,
    pub parameters: Option<ResponseParameters>,
}

/// A Telegram Bot API client bound to one bot token.
///
/// Explicitly constructed and owned; cloning is cheap and clones share
/// the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// `{api_url}/bot{token}`, precomputed.
    base_url: String,
    /// `{api_url}/file/bot{token}`, for file downloads.
    file_base_url: String,
}

impl Client {
    /// Create a client for the given bot token using a fresh
    /// `reqwest::Client` and the public API host.
    pub fn new(token: &str) -> Self {
        Self::with_client(token, reqwest::Client::new(), DEFAULT_API_URL)
    }

    /// Create a client with a caller-supplied HTTP client and API host.
    pub fn with_client(token: &str, http: reqwest::Client, api_url: &str) -> Self {
        let api_url = api_url.trim_end_matches('/');
        Self {
            http,
            base_url: format!("{api_url}/bot{token}"),
            file_base_url: format!("{api_url}/file/bot{token}"),
        }
    }

    /// Perform one API call: serialize `payload` (an empty JSON object
    /// when absent), POST it, and unwrap the response envelope.
    ///
    /// No retry, no rate limiting; `retry_after` hints are passed
    /// through inside [`Error::Remote`] for the caller to act on.
    pub async fn call<P, R>(&self, method: &str, payload: Option<&P>) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{method}", self.base_url);
        debug!(method, "telegram api call");

        let request = match payload {
            Some(payload) => self.http.post(&url).json(payload),
            None => self
                .http
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .body("{}"),
        };

        let body = request.send().await?.bytes().await?;
        parse_response(&body)
    }

    /// Basic information about the bot.
    pub async fn get_me(&self) -> Result<User, Error> {
        self.call::<(), _>("getMe", None).await
    }

    /// Fetch pending updates. Used by the polling loop; callers that
    /// want a continuous stream should use
    /// [`UpdatePoller`](crate::polling::UpdatePoller) instead.
    pub async fn get_updates(&self, request: &GetUpdatesRequest) -> Result<Vec<Update>, Error> {
        request.validate()?;
        self.call("getUpdates", Some(request)).await
    }

    /// Send a text message. Returns the sent [`Message`].
    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<Message, Error> {
        request.validate()?;
        self.call("sendMessage", Some(request)).await
    }

    /// Answer a callback query sent from an inline keyboard.
    pub async fn answer_callback_query(
        &self,
        request: &AnswerCallbackQueryRequest,
    ) -> Result<bool, Error> {
        request.validate()?;
        self.call("answerCallbackQuery", Some(request)).await
    }

    /// Send a chat action such as "typing"; the status is shown for
    /// 5 seconds or until the bot's next message.
    pub async fn send_chat_action(&self, chat_id: i64, action: &str) -> Result<bool, Error> {
        let request = SendChatActionRequest {
            chat_id,
            action: action.to_string(),
        };
        self.call("sendChatAction", Some(&request)).await
    }

    /// Replace the bot's command list shown in client autocomplete
    /// menus.
    pub async fn set_my_commands(&self, request: &SetMyCommandsRequest) -> Result<bool, Error> {
        request.validate()?;
        self.call("setMyCommands", Some(request)).await
    }

    /// The bot's current command list.
    pub async fn get_my_commands(&self) -> Result<Vec<BotCommand>, Error> {
        self.call::<(), _>("getMyCommands", None).await
    }

    /// Basic information about a file, including the `file_path`
    /// accepted by [`Client::download_file`].
    pub async fn get_file(&self, file_id: &str) -> Result<File, Error> {
        let request = GetFileRequest {
            file_id: file_id.to_string(),
        };
        self.call("getFile", Some(&request)).await
    }

    /// Download a file's bytes by the `file_path` from
    /// [`Client::get_file`].
    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>, Error> {
        let url = format!("{}/{file_path}", self.file_base_url);
        let bytes = self.http.get(&url).send().await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Point update delivery at an HTTPS webhook instead of
    /// `getUpdates`. Returns true on success.
    pub async fn set_webhook(&self, request: &SetWebhookRequest) -> Result<bool, Error> {
        request.validate()?;
        self.call("setWebhook", Some(request)).await
    }

    /// Remove webhook integration, switching back to `getUpdates`.
    pub async fn delete_webhook(&self) -> Result<bool, Error> {
        self.call::<(), _>("deleteWebhook", None).await
    }

    /// Current webhook status; `url` is empty when the bot uses long
    /// polling.
    pub async fn get_webhook_info(&self) -> Result<WebhookInfo, Error> {
        self.call::<(), _>("getWebhookInfo", None).await
    }
}

/// Unwrap a response envelope: the `result` payload when `ok`,
/// otherwise the remote error.
fn parse_response<R: DeserializeOwned>(body: &[u8]) -> Result<R, Error> {
    let envelope: ApiResponse<R> = serde_json::from_slice(body)?;

    if !envelope.ok {
        return Err(Error::Remote {
            code: envelope.error_code.unwrap_or_default(),
            description: envelope
                .description
                .unwrap_or_else(|| "unknown error".to_string()),
            parameters: envelope.parameters,
        });
    }

    envelope.result.ok_or_else(|| {
        Error::Decode(<serde_json::Error as serde::de::Error>::custom(
            "ok envelope without result",
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok_envelope() {
        let body = br#"{"ok": true, "result": {"id": 1, "is_bot": true, "first_name": "echo"}}"#;
        let user: User = parse_response(body).unwrap();
        assert_eq!(user.id, 1);
        assert!(user.is_bot);
    }

    #[test]
    fn test_parse_error_envelope() {
        let body = br#"{
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 17",
            "parameters": {"retry_after": 17}
        }"#;
        let err = parse_response::<User>(body).unwrap_err();
        match err {
            Error::Remote {
                code,
                description,
                parameters,
            } => {
                assert_eq!(code, 429);
                assert!(description.starts_with("Too Many Requests"));
                assert_eq!(parameters.unwrap().retry_after, Some(17));
            }
            other => panic!("expected remote error, got {other}"),
        }
    }

    #[test]
    fn test_parse_error_envelope_without_description() {
        let body = br#"{"ok": false}"#;
        let err = parse_response::<bool>(body).unwrap_err();
        assert!(matches!(err, Error::Remote { code: 0, .. }));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_response::<User>(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_parse_ok_envelope_without_result() {
        let err = parse_response::<User>(br#"{"ok": true}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_parse_bool_result() {
        let ok: bool = parse_response(br#"{"ok": true, "result": true}"#).unwrap();
        assert!(ok);
    }

    #[test]
    fn test_base_urls() {
        let client = Client::with_client(
            "123:abc",
            reqwest::Client::new(),
            "https://api.telegram.org/",
        );
        assert_eq!(client.base_url, "https://api.telegram.org/bot123:abc");
        assert_eq!(
            client.file_base_url,
            "https://api.telegram.org/file/bot123:abc"
        );
    }
}
