use super::*;
use mission::catalog::planet_by_id;

#[test]
fn dialog_shows_seven_tiles_in_order() {
    let mars = planet_by_id("mars").expect("mars");
    let tiles = stat_tiles(mars);
    let labels: Vec<_> = tiles.iter().map(|t| t.label).collect();
    assert_eq!(
        labels,
        vec!["Typ", "Średnica", "Odległość", "Grawitacja", "Temperatura", "Misje", "Zagrożenie"]
    );
    assert!(tiles.iter().all(|t| !t.tooltip.is_empty()));
}

#[test]
fn tiles_use_display_formatting() {
    let mars = planet_by_id("mars").expect("mars");
    let tiles = stat_tiles(mars);
    assert_eq!(tiles[0].value, "Planeta skalista");
    assert!(tiles[1].value.ends_with(" km"));
    assert!(tiles[2].value.ends_with(" mln km"));
    assert!(tiles[3].value.ends_with('g'));
    assert_eq!(tiles[5].value, mars.missions_count.to_string());
    assert_eq!(tiles[6].value, format!("{}/10", mars.danger_level));
}
