//! # botgram-types
//!
//! Plain data types mirroring the Telegram Bot API JSON schema
//! (Bot API 5.7 surface plus the web-app additions).
//! Docs: <https://core.telegram.org/bots/api>
//!
//! These are passive records: `serde` derives plus a handful of small
//! accessors. All request/transport behavior lives in `botgram-client`.

pub mod chat;
pub mod command;
pub mod game;
pub mod inline;
pub mod keyboard;
pub mod media;
pub mod message;
pub mod passport;
pub mod payments;
pub mod poll;
pub mod response;
pub mod sticker;
pub mod update;
pub mod user;
pub mod webhook;

#[cfg(test)]
mod tests;

pub use chat::{
    Chat, ChatAdministratorRights, ChatInviteLink, ChatJoinRequest, ChatKind, ChatLocation,
    ChatMember, ChatMemberAdministrator, ChatMemberBanned, ChatMemberLeft, ChatMemberMember,
    ChatMemberOwner, ChatMemberRestricted, ChatMemberUpdated, ChatPermissions, ChatPhoto,
};
pub use command::{BotCommand, BotCommandScope};
pub use game::{CallbackGame, Game, GameHighScore};
pub use inline::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InlineQueryResultAudio, InlineQueryResultCachedAudio, InlineQueryResultCachedDocument,
    InlineQueryResultCachedGif, InlineQueryResultCachedMpeg4Gif, InlineQueryResultCachedPhoto,
    InlineQueryResultCachedSticker, InlineQueryResultCachedVideo, InlineQueryResultCachedVoice,
    InlineQueryResultContact, InlineQueryResultDocument, InlineQueryResultGame,
    InlineQueryResultGif, InlineQueryResultKind, InlineQueryResultLocation,
    InlineQueryResultMpeg4Gif, InlineQueryResultPhoto, InlineQueryResultVenue,
    InlineQueryResultVideo, InlineQueryResultVoice, InputContactMessageContent,
    InputInvoiceMessageContent, InputLocationMessageContent, InputMessageContent,
    InputTextMessageContent, InputVenueMessageContent, SentWebAppMessage,
};
pub use keyboard::{
    CallbackQuery, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardButtonPollType, LoginUrl, MenuButton, ReplyKeyboardMarkup, ReplyKeyboardRemove,
    ReplyMarkup, WebAppInfo,
};
pub use media::{
    Animation, Audio, Contact, Document, File, Location, PhotoSize, Venue, Video, VideoNote,
    Voice,
};
pub use message::{
    Dice, Message, MessageAutoDeleteTimerChanged, MessageEntity, MessageEntityKind, MessageId,
    ParseMode, ProximityAlertTriggered, VideoChatEnded, VideoChatParticipantsInvited,
    VideoChatScheduled, VideoChatStarted, WebAppData,
};
pub use passport::{
    EncryptedCredentials, EncryptedPassportElement, EncryptedPassportElementKind, PassportData,
    PassportElementError, PassportFile,
};
pub use payments::{
    Invoice, LabeledPrice, OrderInfo, PreCheckoutQuery, ShippingAddress, ShippingOption,
    ShippingQuery, SuccessfulPayment,
};
pub use poll::{Poll, PollAnswer, PollKind, PollOption};
pub use response::ResponseParameters;
pub use sticker::{MaskPoint, MaskPosition, Sticker, StickerSet};
pub use update::{Update, UpdateKind};
pub use user::{User, UserProfilePhotos};
pub use webhook::WebhookInfo;
