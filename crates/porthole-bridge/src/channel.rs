//! The channel allow-list.
//!
//! Every name that may cross the bridge is a variant here. A string from
//! the presentation side reaches a host handler only after it parses into
//! a variant that accepts requests.

use std::fmt;
use std::str::FromStr;

use porthole_common::BridgeError;

/// Which way a channel carries messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Presentation sends, nothing comes back.
    PresentationToHost,
    /// Presentation sends a request and awaits exactly one response.
    RequestResponse,
    /// Host pushes to presentation subscribers.
    HostToPresentation,
}

/// Every channel known to the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    NotifyHost,
    GetAppInfo,
    GetSystemInfo,
    ShowDialog,
    HostToPresentation,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::NotifyHost,
        Channel::GetAppInfo,
        Channel::GetSystemInfo,
        Channel::ShowDialog,
        Channel::HostToPresentation,
    ];

    /// Wire name of the channel.
    pub fn name(self) -> &'static str {
        match self {
            Channel::NotifyHost => "notify-host",
            Channel::GetAppInfo => "get-app-info",
            Channel::GetSystemInfo => "get-system-info",
            Channel::ShowDialog => "show-dialog",
            Channel::HostToPresentation => "host-to-presentation",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Channel::NotifyHost => Direction::PresentationToHost,
            Channel::GetAppInfo | Channel::GetSystemInfo | Channel::ShowDialog => {
                Direction::RequestResponse
            }
            Channel::HostToPresentation => Direction::HostToPresentation,
        }
    }

    /// Look up a channel by its exact wire name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Channel> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Parse a name the presentation side wants to `invoke`.
    ///
    /// Only request/response channels qualify; anything else, including
    /// known one-way channels, is an `InvalidChannel`.
    pub fn invokable(name: &str) -> Result<Channel, BridgeError> {
        match Self::from_name(name) {
            Some(channel) if channel.direction() == Direction::RequestResponse => Ok(channel),
            _ => Err(BridgeError::InvalidChannel(name.to_string())),
        }
    }

    /// Names accepted by `invoke`, in declaration order.
    pub fn invokable_names() -> Vec<&'static str> {
        Self::ALL
            .into_iter()
            .filter(|c| c.direction() == Direction::RequestResponse)
            .map(Channel::name)
            .collect()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::from_name(s).ok_or_else(|| BridgeError::InvalidChannel(s.to_string()))
    }
}
