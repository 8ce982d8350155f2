//! Button actions
//!
//! Every button on a roster message, or on the control panel offered after a
//! conflict, carries a codec token naming the action. Join and decline act on
//! the message the button sits on; cancel and close are sent from an ephemeral
//! panel, so their token carries the roster message id.

use std::collections::BTreeMap;

use roster_common::codec::{self, CodecError};
use roster_core::{DomainError, Snowflake};

/// Codec key holding the action name
pub const CUSTOM_ID_KEY: &str = "customID";

/// Codec key holding the roster message id for panel actions
pub const MESSAGE_ID_KEY: &str = "messageID";

const JOIN: &str = "roster/join";
const DECLINE: &str = "roster/decline";
const CANCEL: &str = "roster/cancel";
const CLOSE: &str = "roster/close";

/// A decoded button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    Join,
    Decline,
    Cancel { message_id: Snowflake },
    Close { message_id: Snowflake },
}

impl RosterAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Join => JOIN,
            Self::Decline => DECLINE,
            Self::Cancel { .. } => CANCEL,
            Self::Close { .. } => CLOSE,
        }
    }

    /// Encode this action as a button token
    pub fn to_token(&self) -> Result<String, CodecError> {
        let mut items = BTreeMap::new();
        items.insert(CUSTOM_ID_KEY.to_string(), self.name().to_string());
        if let Self::Cancel { message_id } | Self::Close { message_id } = self {
            items.insert(MESSAGE_ID_KEY.to_string(), message_id.to_string());
        }
        codec::encode(&items)
    }

    /// Decode a button token
    pub fn from_token(token: &str) -> Result<Self, CodecError> {
        let items = codec::decode(token)?;

        let name = items
            .get(CUSTOM_ID_KEY)
            .ok_or_else(|| CodecError::MalformedToken(format!("missing {CUSTOM_ID_KEY}")))?;

        match name.as_str() {
            JOIN => Ok(Self::Join),
            DECLINE => Ok(Self::Decline),
            CANCEL => Ok(Self::Cancel {
                message_id: message_id(&items)?,
            }),
            CLOSE => Ok(Self::Close {
                message_id: message_id(&items)?,
            }),
            other => Err(CodecError::MalformedToken(format!("unknown action {other:?}"))),
        }
    }

    /// The roster message this action targets, given the message the button was on
    pub fn target_message(&self, origin: Snowflake) -> Snowflake {
        match self {
            Self::Join | Self::Decline => origin,
            Self::Cancel { message_id } | Self::Close { message_id } => *message_id,
        }
    }
}

fn message_id(items: &BTreeMap<String, String>) -> Result<Snowflake, CodecError> {
    let raw = items
        .get(MESSAGE_ID_KEY)
        .ok_or_else(|| CodecError::MalformedToken(format!("missing {MESSAGE_ID_KEY}")))?;

    raw.parse()
        .map_err(|_| CodecError::MalformedToken(format!("invalid {MESSAGE_ID_KEY} {raw:?}")))
}

/// Tokens for the buttons rendered on a roster message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterButtons {
    pub join: String,
    pub decline: String,
}

pub fn roster_buttons() -> Result<RosterButtons, CodecError> {
    Ok(RosterButtons {
        join: RosterAction::Join.to_token()?,
        decline: RosterAction::Decline.to_token()?,
    })
}

/// The follow-up action to offer after `err`, if any.
///
/// The author is offered close; a participant repeating their answer is
/// offered cancel.
pub fn control_panel_for(err: &DomainError, message_id: Snowflake) -> Option<RosterAction> {
    match err {
        DomainError::AuthorCannotAct => Some(RosterAction::Close { message_id }),
        DomainError::AlreadyJoined | DomainError::AlreadyDeclined => {
            Some(RosterAction::Cancel { message_id })
        }
        _ => None,
    }
}
