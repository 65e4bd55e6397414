//! Source-to-destination identifier tables.
//!
//! The tables are built once by whoever enumerated the migrated users and
//! rooms, then shared read-only across renders.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::LookupError;

/// A single identifier mapping.
pub type Table = BTreeMap<String, String>;

/// The four lookup tables, as they appear in a tables file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTables {
    #[serde(rename = "userLUT")]
    users: Table,
    #[serde(rename = "nameLUT")]
    names: Table,
    #[serde(rename = "roomLUT")]
    rooms: Table,
    #[serde(rename = "roomLUT2")]
    aliases: Table,
}

/// Immutable bundle of identifier tables.
///
/// Deserializing goes through [`LookupTables::new`], so a decoded bundle is
/// always consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTables")]
pub struct LookupTables {
    users: Table,
    names: Table,
    rooms: Table,
    aliases: Table,
}

/// A user mention that resolved to a destination account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserTarget<'a> {
    pub id: &'a str,
    pub display_name: &'a str,
}

/// A channel mention that resolved to a destination room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomTarget<'a> {
    pub room_id: &'a str,
    pub local_alias: &'a str,
    pub domain: &'a str,
}

impl RoomTarget<'_> {
    /// Full room alias, e.g. `#general:example.org`.
    pub fn alias(&self) -> String {
        format!("#{}:{}", self.local_alias, self.domain)
    }
}

impl LookupTables {
    /// Build the bundle, checking that every user has a display name and
    /// every room has a domain and an alias.
    pub fn new(
        users: Table,
        names: Table,
        rooms: Table,
        aliases: Table,
    ) -> Result<Self, LookupError> {
        for (source_id, dest_id) in &users {
            if !names.contains_key(dest_id) {
                return Err(LookupError::MissingDisplayName {
                    source_id: source_id.clone(),
                    dest_id: dest_id.clone(),
                });
            }
        }

        for (channel_id, room_id) in &rooms {
            if room_domain(room_id).is_none() {
                return Err(LookupError::RoomWithoutDomain {
                    channel_id: channel_id.clone(),
                    room_id: room_id.clone(),
                });
            }
            if !aliases.contains_key(channel_id) {
                return Err(LookupError::MissingRoomAlias {
                    channel_id: channel_id.clone(),
                });
            }
        }

        Ok(Self::unchecked(users, names, rooms, aliases))
    }

    /// Build the bundle without validation.
    ///
    /// Inconsistent entries are treated as missing by [`user`](Self::user)
    /// and [`room`](Self::room).
    pub fn unchecked(users: Table, names: Table, rooms: Table, aliases: Table) -> Self {
        Self {
            users,
            names,
            rooms,
            aliases,
        }
    }

    /// Resolve a source user id.
    pub fn user(&self, source_id: &str) -> Option<UserTarget<'_>> {
        let id = self.users.get(source_id)?;
        let display_name = self.names.get(id)?;
        Some(UserTarget { id, display_name })
    }

    /// Resolve a source channel id.
    pub fn room(&self, channel_id: &str) -> Option<RoomTarget<'_>> {
        let room_id = self.rooms.get(channel_id)?;
        let domain = room_domain(room_id)?;
        let local_alias = self.aliases.get(channel_id)?;
        Some(RoomTarget {
            room_id,
            local_alias,
            domain,
        })
    }
}

impl TryFrom<RawTables> for LookupTables {
    type Error = LookupError;

    fn try_from(raw: RawTables) -> Result<Self, Self::Error> {
        Self::new(raw.users, raw.names, raw.rooms, raw.aliases)
    }
}

/// Everything after the first colon of a room id.
fn room_domain(room_id: &str) -> Option<&str> {
    room_id.split_once(':').map(|(_, domain)| domain)
}
