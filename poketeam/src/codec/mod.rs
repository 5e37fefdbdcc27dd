mod share_url;
mod token;

pub use share_url::{
    generate_share_url,
    team_from_url,
};
pub use token::{
    decode_team,
    encode_team,
};
