use chrono::{
    DateTime,
    Utc,
};
use poketeam::teams::{
    BattleFormat,
    Pokemon,
    Team,
};
use poketeam_data::{
    Gender,
    Nature,
    StatTable,
};

fn timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().to_utc()
}

/// A Pokémon with a fixed id and one move.
pub fn pokemon(id: &str, species_id: u32, species: &str) -> Pokemon {
    let mut pokemon = Pokemon::new(species_id, species, "", vec!["でんこうせっか".to_owned()]);
    pokemon.id = id.to_owned();
    pokemon
}

/// A fully specified team with Japanese text and every optional field.
pub fn sample_team() -> Team {
    let mut garchomp = Pokemon::new(
        445,
        "ガブリアス",
        "さめはだ",
        vec![
            "じしん".to_owned(),
            "げきりん".to_owned(),
            "つるぎのまい".to_owned(),
        ],
    );
    garchomp.id = "1714566896789-garchomp".to_owned();
    garchomp.nickname = Some("ガブ".to_owned());
    garchomp.gender = Some(Gender::Male);
    garchomp.item = Some("こだわりスカーフ".to_owned());
    garchomp.nature = Some(Nature::Jolly);
    garchomp.evs = Some(StatTable {
        hp: 4,
        attack: 252,
        speed: 252,
        ..Default::default()
    });
    garchomp.ivs = Some(StatTable::uniform(31));
    garchomp.shiny = Some(true);

    let mut blissey = Pokemon::new(
        242,
        "ハピナス",
        "しぜんかいふく",
        vec!["タマゴうみ".to_owned(), "ちきゅうなげ".to_owned()],
    );
    blissey.id = "1714566896790-blissey".to_owned();
    blissey.level = 100;
    blissey.gender = Some(Gender::Female);

    Team {
        id: "team-1714566896789".to_owned(),
        name: "ドラゴン統一 🐉".to_owned(),
        pokemon: vec![garchomp, blissey],
        created_at: timestamp("2024-05-01T12:34:56.789Z"),
        updated_at: timestamp("2024-05-02T08:00:00.000Z"),
        format: Some(BattleFormat::Singles),
    }
}

/// A team with all six slots filled.
pub fn full_team() -> Team {
    let mut team = Team::new("フルパーティ");
    for i in 0..6 {
        team.pokemon.push(pokemon(&format!("slot-{i}"), 25, "ピカチュウ"));
    }
    team
}
