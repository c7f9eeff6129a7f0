//! The event batch is the contract with presentation layers outside Rust;
//! these tests pin its JSON shape.

use dmqh::core::{Game, Grid, ScriptedRng};
use dmqh::types::{Direction, GameEvents};

#[test]
fn reset_batch_json_shape() {
    let mut game = Game::with_seed(1);
    let v = serde_json::to_value(game.reset()).unwrap();

    for key in ["statics", "spawns", "moves", "merges", "score", "gameOver"] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["spawns"].as_array().unwrap().len(), 2);
    assert_eq!(v["score"]["score"], 0);
    assert!(v["score"]["difference"].is_null());
    assert_eq!(v["gameOver"], false);
}

#[test]
fn play_batch_json_shape() {
    let grid = Grid::from_rows([[1, 1, 2, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
    let mut game = Game::from_parts(grid, 0, ScriptedRng::first_cell());
    let events = game.play(Direction::Right).unwrap();
    let v = serde_json::to_value(&events).unwrap();

    let merge = &v["merges"][0];
    for key in ["x0", "y0", "x1", "y1", "x", "y", "value0", "value"] {
        assert!(merge.get(key).is_some(), "merge missing {key}");
    }
    assert_eq!(merge["value0"], 1);
    assert_eq!(merge["value"], 2);

    assert_eq!(v["moves"][0]["x0"], 2);
    assert_eq!(v["moves"][0]["x"], 3);
    assert_eq!(v["statics"][0]["value"], 4);
    assert_eq!(v["score"]["difference"], 2);
}

#[test]
fn batch_survives_json_roundtrip() {
    let mut game = Game::with_seed(9);
    game.reset();
    let events = Direction::ALL
        .into_iter()
        .find_map(|direction| game.play(direction))
        .expect("a fresh game always has a legal move");

    let json = serde_json::to_string(&events).unwrap();
    let back: GameEvents = serde_json::from_str(&json).unwrap();
    assert_eq!(back, events);
}

#[test]
fn direction_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "\"left\"");
    let d: Direction = serde_json::from_str("\"up\"").unwrap();
    assert_eq!(d, Direction::Up);
}
