use base64::{
    Engine,
    prelude::BASE64_STANDARD,
};

use crate::{
    error::{
        DecodingError,
        EncodingError,
    },
    teams::Team,
};

/// Encodes a team into a share token.
///
/// The token is the team's JSON in UTF-8, encoded as standard Base64 with padding. Encoding the
/// same team always yields the same token.
pub fn encode_team(team: &Team) -> Result<String, EncodingError> {
    let json = serde_json::to_vec(team)?;
    Ok(BASE64_STANDARD.encode(json))
}

/// Decodes a share token back into a team.
///
/// Only the shape of the team is checked. Business rules, like the roster size, are left to
/// [`crate::teams::TeamValidator`].
pub fn decode_team(token: &str) -> Result<Team, DecodingError> {
    let bytes = BASE64_STANDARD
        .decode(token)
        .map_err(DecodingError::InvalidToken)?;
    let json = String::from_utf8(bytes).map_err(DecodingError::InvalidText)?;
    serde_json::from_str(&json).map_err(DecodingError::InvalidTeam)
}
