//! Serde tests for the schema types.

use super::*;

#[test]
fn test_update_with_message() {
    let json = r#"{
        "update_id": 10000,
        "message": {
            "message_id": 1365,
            "from": {"id": 1111, "is_bot": false, "first_name": "Ada"},
            "chat": {"id": 1111, "type": "private", "first_name": "Ada"},
            "date": 1441645532,
            "text": "/start"
        }
    }"#;
    let update: Update = serde_json::from_str(json).unwrap();
    assert_eq!(update.update_id, 10000);
    assert_eq!(update.kind(), Some(UpdateKind::Message));
    let msg = update.message.unwrap();
    assert_eq!(msg.text.as_deref(), Some("/start"));
    assert!(msg.chat.is_private());
}

#[test]
fn test_update_with_callback_query() {
    let json = r#"{
        "update_id": 10001,
        "callback_query": {
            "id": "4382bfdwdsb323b2d9",
            "from": {"id": 1111, "is_bot": false, "first_name": "Ada"},
            "chat_instance": "-91237403",
            "data": "page:2"
        }
    }"#;
    let update: Update = serde_json::from_str(json).unwrap();
    assert_eq!(update.kind(), Some(UpdateKind::CallbackQuery));
    assert_eq!(
        update.callback_query.unwrap().data.as_deref(),
        Some("page:2")
    );
}

#[test]
fn test_update_kind_wire_names() {
    assert_eq!(
        serde_json::to_string(&UpdateKind::EditedChannelPost).unwrap(),
        r#""edited_channel_post""#
    );
    assert_eq!(
        serde_json::to_string(&UpdateKind::PreCheckoutQuery).unwrap(),
        r#""pre_checkout_query""#
    );
    let kind: UpdateKind = serde_json::from_str(r#""chat_join_request""#).unwrap();
    assert_eq!(kind, UpdateKind::ChatJoinRequest);
}

#[test]
fn test_chat_group_detection() {
    let group: Chat = serde_json::from_str(r#"{"id": -100123, "type": "group"}"#).unwrap();
    assert!(group.is_group());

    let supergroup: Chat =
        serde_json::from_str(r#"{"id": -100456, "type": "supergroup", "title": "rustaceans"}"#)
            .unwrap();
    assert!(supergroup.is_group());
    assert_eq!(supergroup.title.as_deref(), Some("rustaceans"));

    let private: Chat = serde_json::from_str(r#"{"id": 789, "type": "private"}"#).unwrap();
    assert!(!private.is_group());
    assert!(private.is_private());
}

#[test]
fn test_message_with_photo_sizes() {
    let json = r#"{
        "message_id": 3,
        "chat": {"id": 100, "type": "private"},
        "date": 1441645532,
        "photo": [
            {"file_id": "small", "file_unique_id": "s", "width": 90, "height": 90, "file_size": 1000},
            {"file_id": "large", "file_unique_id": "l", "width": 800, "height": 800, "file_size": 20000}
        ],
        "caption": "Check this out"
    }"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert!(msg.text.is_none());
    let photos = msg.photo.as_ref().unwrap();
    assert_eq!(photos.last().unwrap().file_id, "large");
    assert_eq!(msg.text_or_caption(), Some("Check this out"));
}

#[test]
fn test_message_reply_chain() {
    let json = r#"{
        "message_id": 2,
        "chat": {"id": 100, "type": "private"},
        "date": 1441645600,
        "text": "pong",
        "reply_to_message": {
            "message_id": 1,
            "chat": {"id": 100, "type": "private"},
            "date": 1441645532,
            "text": "ping"
        }
    }"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg.reply_to_message.unwrap().text.as_deref(), Some("ping"));
}

#[test]
fn test_chat_member_tagged_by_status() {
    let admin: ChatMember = serde_json::from_str(
        r#"{
            "status": "administrator",
            "user": {"id": 42, "is_bot": false, "first_name": "Grace"},
            "can_be_edited": false,
            "is_anonymous": false,
            "can_manage_chat": true,
            "can_delete_messages": true,
            "can_manage_video_chats": false,
            "can_restrict_members": true,
            "can_promote_members": false,
            "can_change_info": true,
            "can_invite_users": true,
            "custom_title": "mod"
        }"#,
    )
    .unwrap();
    assert_eq!(admin.user().id, 42);
    match admin {
        ChatMember::Administrator(m) => {
            assert!(m.can_manage_chat);
            assert_eq!(m.custom_title.as_deref(), Some("mod"));
        }
        other => panic!("expected administrator, got {other:?}"),
    }

    let banned: ChatMember = serde_json::from_str(
        r#"{
            "status": "kicked",
            "user": {"id": 7, "is_bot": false, "first_name": "X"},
            "until_date": 0
        }"#,
    )
    .unwrap();
    assert!(matches!(banned, ChatMember::Banned(ref m) if m.until_date == 0));
}

#[test]
fn test_reply_markup_untagged_roundtrip() {
    let markup = ReplyMarkup::from(InlineKeyboardMarkup {
        inline_keyboard: vec![vec![InlineKeyboardButton {
            text: "Next".to_string(),
            callback_data: Some("page:2".to_string()),
            ..Default::default()
        }]],
    });
    let json = serde_json::to_string(&markup).unwrap();
    // Untagged: serializes as the bare markup object, no wrapper.
    assert_eq!(
        json,
        r#"{"inline_keyboard":[[{"text":"Next","callback_data":"page:2"}]]}"#
    );

    let remove: ReplyMarkup =
        serde_json::from_str(r#"{"remove_keyboard": true, "selective": true}"#).unwrap();
    assert!(matches!(remove, ReplyMarkup::ReplyKeyboardRemove(_)));

    let force: ReplyMarkup = serde_json::from_str(r#"{"force_reply": true}"#).unwrap();
    assert!(matches!(force, ReplyMarkup::ForceReply(_)));
}

#[test]
fn test_parse_mode_wire_names() {
    assert_eq!(serde_json::to_string(&ParseMode::Html).unwrap(), r#""HTML""#);
    assert_eq!(
        serde_json::to_string(&ParseMode::MarkdownV2).unwrap(),
        r#""MarkdownV2""#
    );
    let mode: ParseMode = serde_json::from_str(r#""Markdown""#).unwrap();
    assert_eq!(mode, ParseMode::Markdown);
}

#[test]
fn test_inline_query_result_article_serializes_kind() {
    let article = InlineQueryResult::Article(InlineQueryResultArticle {
        kind: InlineQueryResultKind::Article,
        id: "r1".to_string(),
        title: "Rust".to_string(),
        input_message_content: InputMessageContent::Text(InputTextMessageContent {
            message_text: "hello".to_string(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
        }),
        reply_markup: None,
        url: None,
        hide_url: None,
        description: None,
        thumb_url: None,
        thumb_width: None,
        thumb_height: None,
    });
    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["type"], "article");
    assert_eq!(json["input_message_content"]["message_text"], "hello");
}

#[test]
fn test_input_message_content_venue_not_mistaken_for_location() {
    let json = r#"{
        "latitude": 52.5,
        "longitude": 13.4,
        "title": "Office",
        "address": "Unter den Linden 1"
    }"#;
    let content: InputMessageContent = serde_json::from_str(json).unwrap();
    assert!(matches!(content, InputMessageContent::Venue(_)));

    let json = r#"{"latitude": 52.5, "longitude": 13.4}"#;
    let content: InputMessageContent = serde_json::from_str(json).unwrap();
    assert!(matches!(content, InputMessageContent::Location(_)));
}

#[test]
fn test_cached_photo_distinct_from_url_photo() {
    let cached: InlineQueryResult = serde_json::from_str(
        r#"{"type": "photo", "id": "p1", "photo_file_id": "abc"}"#,
    )
    .unwrap();
    assert!(matches!(cached, InlineQueryResult::CachedPhoto(_)));

    let by_url: InlineQueryResult = serde_json::from_str(
        r#"{"type": "photo", "id": "p2", "photo_url": "https://x/p.jpg", "thumb_url": "https://x/t.jpg"}"#,
    )
    .unwrap();
    assert!(matches!(by_url, InlineQueryResult::Photo(_)));
}

#[test]
fn test_passport_element_error_tagged_by_source() {
    let err = PassportElementError::Files {
        kind: EncryptedPassportElementKind::UtilityBill,
        file_hashes: vec!["h1".to_string(), "h2".to_string()],
        message: "blurry scan".to_string(),
    };
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["source"], "files");
    assert_eq!(json["type"], "utility_bill");
}

#[test]
fn test_bot_command_scope_wire_shape() {
    let scope = BotCommandScope::ChatMember {
        chat_id: -100123,
        user_id: 42,
    };
    let json = serde_json::to_value(&scope).unwrap();
    assert_eq!(json["type"], "chat_member");
    assert_eq!(json["chat_id"], -100123);

    let default: BotCommandScope = serde_json::from_str(r#"{"type": "default"}"#).unwrap();
    assert!(matches!(default, BotCommandScope::Default));
}

#[test]
fn test_user_display_name() {
    let with_username: User = serde_json::from_str(
        r#"{"id": 1, "is_bot": false, "first_name": "Ada", "username": "countess"}"#,
    )
    .unwrap();
    assert_eq!(with_username.display_name(), "@countess");

    let full_name: User = serde_json::from_str(
        r#"{"id": 2, "is_bot": false, "first_name": "Ada", "last_name": "Lovelace"}"#,
    )
    .unwrap();
    assert_eq!(full_name.display_name(), "Ada Lovelace");
}

#[test]
fn test_optional_fields_skipped_on_serialize() {
    let user = User {
        id: 9,
        is_bot: true,
        first_name: "echo".to_string(),
        last_name: None,
        username: None,
        language_code: None,
        can_join_groups: None,
        can_read_all_group_messages: None,
        supports_inline_queries: None,
    };
    assert_eq!(
        serde_json::to_string(&user).unwrap(),
        r#"{"id":9,"is_bot":true,"first_name":"echo"}"#
    );
}

#[test]
fn test_webhook_info_long_poll_mode() {
    let json = r#"{"url": "", "has_custom_certificate": false, "pending_update_count": 3}"#;
    let info: WebhookInfo = serde_json::from_str(json).unwrap();
    assert!(info.url.is_empty());
    assert_eq!(info.pending_update_count, 3);
    assert!(info.allowed_updates.is_none());
}

#[test]
fn test_response_parameters_passthrough() {
    let json = r#"{"retry_after": 17}"#;
    let params: ResponseParameters = serde_json::from_str(json).unwrap();
    assert_eq!(params.retry_after, Some(17));
    assert!(params.migrate_to_chat_id.is_none());
}
