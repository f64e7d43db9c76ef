//! # botgram-client
//!
//! HTTP transport and the long-polling update loop for the Telegram
//! Bot API. The schema types live in `botgram-types`.
//!
//! ```no_run
//! use botgram_client::{Client, PollerConfig, UpdatePoller};
//! use botgram_client::methods::SendMessageRequest;
//!
//! # async fn run() -> Result<(), botgram_client::Error> {
//! let client = Client::new("123456:secret");
//! let me = client.get_me().await?;
//! println!("logged in as @{}", me.username.unwrap_or_default());
//!
//! let poller = UpdatePoller::new(client.clone(), PollerConfig::default());
//! let (mut updates, handle) = poller.start()?;
//! while let Some(update) = updates.recv().await {
//!     if let Some(msg) = update.message {
//!         if let Some(text) = msg.text {
//!             client
//!                 .send_message(&SendMessageRequest::new(msg.chat.id, text))
//!                 .await?;
//!         }
//!     }
//! }
//! handle.stop();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod methods;
pub mod polling;

pub use client::Client;
pub use error::Error;
pub use polling::{PollerConfig, PollerHandle, UpdatePoller, UpdateSource};
