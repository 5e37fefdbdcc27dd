use std::path::Path;

use assert_matches::assert_matches;
use poketeam_data::{
    DataStore,
    MoveIndex,
    Type,
    learnable_moves,
    search_learnable_moves,
    search_species,
};
use poketeam_local_data::LocalDataStore;
use pretty_assertions::assert_eq;

fn data_store() -> LocalDataStore {
    LocalDataStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data")).unwrap()
}

#[test]
fn fails_for_missing_root_directory() {
    assert_matches!(LocalDataStore::new("/does/not/exist"), Err(err) => {
        assert!(err.to_string().contains("does not exist"));
    });
}

#[test]
fn fails_for_undefined_environment_variable() {
    assert_matches!(
        LocalDataStore::new_from_env("POKETEAM_TEST_UNDEFINED_DATA_DIR"),
        Err(err) => {
            assert_eq!(err.to_string(), "POKETEAM_TEST_UNDEFINED_DATA_DIR not defined");
        }
    );
}

#[test]
fn loads_species_in_dataset_order() {
    let data = data_store();
    assert_eq!(data.species_count(), 7);
    assert_eq!(
        data.all_species_ids(&|_| true).unwrap(),
        vec![6, 25, 242, 445, 479, 10008, 10034]
    );
    assert_matches!(data.get_species(445), Ok(Some(species)) => {
        assert_eq!(species.name_ja, "ガブリアス");
        assert_eq!(species.types, vec![Type::Dragon, Type::Ground]);
        assert_eq!(species.base_stats.attack, 130);
    });
    assert_matches!(data.get_species(9999), Ok(None));
}

#[test]
fn filters_species() {
    let data = data_store();
    assert_eq!(
        data.all_species_ids(&|species| species.types.contains(&Type::Fire))
            .unwrap(),
        vec![6, 10008, 10034]
    );
}

#[test]
fn searches_species_by_any_name() {
    let data = data_store();
    let names = |term: &str| {
        search_species(&data, term, 10)
            .unwrap()
            .into_iter()
            .map(|species| species.name_ja)
            .collect::<Vec<_>>()
    };
    assert_eq!(names("リザードン"), vec!["リザードン", "メガリザードンX"]);
    assert_eq!(names("rotom"), vec!["ロトム", "ヒートロトム"]);
    assert_eq!(names("242"), vec!["ハピナス"]);
    assert_eq!(names(""), Vec::<String>::new());
    assert_eq!(search_species(&data, "o", 2).unwrap().len(), 2);
}

#[test]
fn variants_fall_back_to_base_species_moves() {
    let data = data_store();
    let names = |id: u32| {
        learnable_moves(&data, id)
            .unwrap()
            .into_iter()
            .map(|move_data| move_data.name_ja)
            .collect::<Vec<_>>()
    };
    assert_eq!(names(479), vec!["10まんボルト", "ボルトチェンジ"]);
    assert_eq!(names(10008), names(479));
    assert_eq!(names(10034), names(6));
    assert_eq!(names(9999), Vec::<String>::new());
}

#[test]
fn searches_learnable_moves_excluding_selected() {
    let data = data_store();
    let found = search_learnable_moves(&data, 6, "ほのお", &["かえんほうしゃ".to_owned()], 10)
        .unwrap()
        .into_iter()
        .map(|move_data| move_data.name_ja)
        .collect::<Vec<_>>();
    assert_eq!(found, vec!["オーバーヒート"]);
}

#[test]
fn builds_move_index_over_all_species() {
    let data = data_store();
    let index = MoveIndex::new(&data).unwrap();
    assert_eq!(index.len(), 12);
    assert_eq!(index.move_type("げきりん"), Some(Type::Dragon));
    assert_eq!(index.move_type("ちきゅうなげ"), Some(Type::Fighting));
    assert_eq!(index.get("タマゴうみ").map(|data| data.pp), Some(5));
}
