//! Error types.
//!
//! Rendering itself never fails; these only surface at the boundaries where
//! input is decoded or lookup tables are assembled.

/// Error decoding a rich text payload.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Malformed JSON, or a known element missing a required field.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The root object is a block of some other kind.
    #[error("expected a rich_text block, found `{0}`")]
    NotRichText(String),
}

/// Cross-table inconsistency found while building a [`LookupTables`](crate::LookupTables).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// A `userLUT` value has no `nameLUT` entry.
    #[error("user `{source_id}` maps to `{dest_id}`, which has no display name")]
    MissingDisplayName { source_id: String, dest_id: String },

    /// A `roomLUT` value lacks the `:domain` part.
    #[error("channel `{channel_id}` maps to room `{room_id}`, which has no domain")]
    RoomWithoutDomain { channel_id: String, room_id: String },

    /// A `roomLUT` key has no `roomLUT2` alias.
    #[error("channel `{channel_id}` has a room but no alias")]
    MissingRoomAlias { channel_id: String },
}

/// Top-level error for the command line tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// JSON lookup table file could not be decoded or failed validation.
    #[error("cannot read lookup tables: {0}")]
    TablesJson(#[from] serde_json::Error),

    /// TOML lookup table file could not be decoded or failed validation.
    #[error("cannot read lookup tables: {0}")]
    TablesToml(#[from] toml::de::Error),
}
