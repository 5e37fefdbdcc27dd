use std::borrow::Cow;

use percent_encoding::{
    AsciiSet,
    NON_ALPHANUMERIC,
    percent_decode_str,
    utf8_percent_encode,
};

use crate::{
    codec::{
        decode_team,
        encode_team,
    },
    config::ShareOptions,
    error::EncodingError,
    teams::Team,
};

/// Characters escaped in a query component.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()` is escaped, so Base64's `+`, `/`, and `=`
/// always are.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

impl ShareOptions {
    /// Builds the share URL for a team.
    ///
    /// `base_url` overrides the configured origin.
    pub fn share_url(&self, team: &Team, base_url: Option<&str>) -> Result<String, EncodingError> {
        let token = encode_team(team)?;
        Ok(format!(
            "{}{}?{}={}",
            base_url.unwrap_or(&self.base_url),
            self.view_path,
            utf8_percent_encode(&self.query_param, COMPONENT),
            utf8_percent_encode(&token, COMPONENT),
        ))
    }

    /// Reads the team out of a share URL.
    ///
    /// Returns [`None`] if the URL carries no token or the token does not decode.
    pub fn team_from_url(&self, url: &str) -> Option<Team> {
        let Some(value) = query_value(url, &self.query_param) else {
            log::warn!("share URL has no {} parameter", self.query_param);
            return None;
        };
        let token = match percent_decode_str(&value).decode_utf8() {
            Ok(token) => token,
            Err(err) => {
                log::warn!("share URL token is not valid UTF-8: {err}");
                return None;
            }
        };
        match decode_team(&token) {
            Ok(team) => Some(team),
            Err(err) => {
                log::warn!("failed to decode team from share URL: {err}");
                None
            }
        }
    }
}

/// Builds the share URL for a team with the default options.
///
/// Without a `base_url`, the URL is relative.
pub fn generate_share_url(team: &Team, base_url: Option<&str>) -> Result<String, EncodingError> {
    ShareOptions::default().share_url(team, base_url)
}

/// Reads the team out of a share URL built with the default options.
pub fn team_from_url(url: &str) -> Option<Team> {
    ShareOptions::default().team_from_url(url)
}

/// Decodes one `application/x-www-form-urlencoded` component.
fn decode_form_component(component: &str) -> Option<String> {
    let component = component.replace('+', " ");
    percent_decode_str(&component)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Finds the first value of a query parameter.
fn query_value(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split_once('#').map_or(query, |(query, _)| query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode_form_component(key)? == name {
                decode_form_component(value)
            } else {
                None
            }
        })
}
