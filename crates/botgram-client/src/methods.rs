//! Request payloads for the API methods.
//!
//! Validation mirrors the documented server-side limits and runs
//! before any network I/O, surfacing [`Error::InvalidRequest`]
//! synchronously to the caller.

use serde::Serialize;

use botgram_types::{
    BotCommand, BotCommandScope, MessageEntity, ParseMode, ReplyMarkup, UpdateKind,
};

use crate::error::Error;

/// Payload for `getUpdates`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUpdatesRequest {
    /// Identifier of the first update to be returned; earlier updates
    /// are forgotten by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Max number of updates per batch, 1-100; server default is 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
    /// Long-poll hold time in seconds; 0 means short polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Server-side filter; absent means all kinds except `chat_member`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateKind>>,
}

impl GetUpdatesRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(limit) = self.limit {
            if !(1..=100).contains(&limit) {
                return Err(Error::InvalidRequest(format!(
                    "getUpdates limit must be within 1..=100, got {limit}"
                )));
            }
        }
        Ok(())
    }
}

/// Payload for `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    /// Text of the message, 1-4096 characters.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    /// Send silently; users receive a notification with no sound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

/// Longest message text the server accepts, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

impl SendMessageRequest {
    /// A plain text message with every optional field unset.
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
            disable_notification: None,
            protect_content: None,
            reply_to_message_id: None,
            allow_sending_without_reply: None,
            reply_markup: None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.text.is_empty() {
            return Err(Error::InvalidRequest(
                "sendMessage text must not be empty".to_string(),
            ));
        }
        let chars = self.text.chars().count();
        if chars > MAX_MESSAGE_LENGTH {
            return Err(Error::InvalidRequest(format!(
                "sendMessage text must be at most {MAX_MESSAGE_LENGTH} characters, got {chars}"
            )));
        }
        Ok(())
    }
}

/// Payload for `answerCallbackQuery`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerCallbackQueryRequest {
    pub callback_query_id: String,
    /// Notification text, 0-200 characters; nothing is shown when
    /// absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Show an alert instead of a notification at the top of the chat
    /// screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Max client-side cache time for the result, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i64>,
}

impl AnswerCallbackQueryRequest {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if let Some(ref text) = self.text {
            let chars = text.chars().count();
            if chars > 200 {
                return Err(Error::InvalidRequest(format!(
                    "answerCallbackQuery text must be at most 200 characters, got {chars}"
                )));
            }
        }
        Ok(())
    }
}

/// Payload for `sendChatAction`.
#[derive(Debug, Clone, Serialize)]
pub struct SendChatActionRequest {
    pub chat_id: i64,
    /// Action string, e.g. "typing" or "upload_photo".
    pub action: String,
}

/// Payload for `setMyCommands`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyCommandsRequest {
    pub commands: Vec<BotCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    /// Two-letter ISO 639-1 language code; applies to all users from
    /// the given scope when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SetMyCommandsRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if self.commands.len() > 100 {
            return Err(Error::InvalidRequest(format!(
                "setMyCommands accepts at most 100 commands, got {}",
                self.commands.len()
            )));
        }
        Ok(())
    }
}

/// Payload for `getFile`.
#[derive(Debug, Clone, Serialize)]
pub struct GetFileRequest {
    pub file_id: String,
}

/// Payload for `setWebhook`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetWebhookRequest {
    /// HTTPS URL to send updates to.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Max simultaneous connections for update delivery, 1-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl SetWebhookRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if self.url.is_empty() {
            return Err(Error::InvalidRequest(
                "setWebhook url is required".to_string(),
            ));
        }
        if let Some(max) = self.max_connections {
            if !(1..=100).contains(&max) {
                return Err(Error::InvalidRequest(format!(
                    "setWebhook max_connections must be within 1..=100, got {max}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_updates_limit_bounds() {
        let mut request = GetUpdatesRequest::default();
        assert!(request.validate().is_ok());

        request.limit = Some(100);
        assert!(request.validate().is_ok());

        request.limit = Some(0);
        assert!(matches!(
            request.validate(),
            Err(Error::InvalidRequest(_))
        ));

        request.limit = Some(101);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_get_updates_serializes_only_set_fields() {
        let request = GetUpdatesRequest {
            offset: Some(8),
            timeout: Some(30),
            allowed_updates: Some(vec![UpdateKind::Message, UpdateKind::CallbackQuery]),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"offset":8,"timeout":30,"allowed_updates":["message","callback_query"]}"#
        );
    }

    #[test]
    fn test_send_message_text_bounds() {
        assert!(SendMessageRequest::new(1, "hi").validate().is_ok());

        let empty = SendMessageRequest::new(1, "");
        assert!(matches!(empty.validate(), Err(Error::InvalidRequest(_))));

        // 4096 multi-byte chars are fine; the limit counts characters,
        // not bytes.
        let at_limit = SendMessageRequest::new(1, "\u{0411}".repeat(4096));
        assert!(at_limit.validate().is_ok());

        let over = SendMessageRequest::new(1, "a".repeat(4097));
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_answer_callback_query_text_bound() {
        let mut request = AnswerCallbackQueryRequest::new("q1");
        assert!(request.validate().is_ok());

        request.text = Some("a".repeat(200));
        assert!(request.validate().is_ok());

        request.text = Some("a".repeat(201));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_set_webhook_validation() {
        let missing_url = SetWebhookRequest::default();
        assert!(matches!(
            missing_url.validate(),
            Err(Error::InvalidRequest(_))
        ));

        let request = SetWebhookRequest {
            url: "https://example.org/hook".to_string(),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let bad_connections = SetWebhookRequest {
            url: "https://example.org/hook".to_string(),
            max_connections: Some(0),
            ..Default::default()
        };
        assert!(bad_connections.validate().is_err());
    }

    #[test]
    fn test_set_my_commands_bound() {
        let request = SetMyCommandsRequest {
            commands: vec![BotCommand::new("help", "Show available commands")],
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let too_many = SetMyCommandsRequest {
            commands: (0..101)
                .map(|i| BotCommand::new(format!("c{i}"), "x"))
                .collect(),
            ..Default::default()
        };
        assert!(too_many.validate().is_err());
    }
}
