use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Who a transcript entry is attributed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// Label shown above a chat bubble.
    pub fn display_name(&self) -> String {
        match self {
            Role::User => return Config::get(ConfigKey::Username),
            Role::Bot => return Config::get(ConfigKey::BotName),
        }
    }
}
