//! JSON shapes shared with existing clients.
//!
//! The box set travels as an object whose keys are themselves JSON encoded
//! `{"x":..,"y":..}` positions mapped to `{}`. Only `encode_game` and
//! `decode_game` know about that, the rest of the crate sees a `BTreeSet<Pos>`.

use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::data::{Description, Dir, MapCell, Pos};
use crate::grid::Grid;
use crate::state::GameState;

#[derive(Debug)]
pub enum WireErr {
    Json(serde_json::Error),
    Position(String, serde_json::Error),
}

impl Display for WireErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WireErr::Json(err) => write!(f, "{}", err),
            WireErr::Position(key, err) => write!(f, "Invalid position {}: {}", key, err),
        }
    }
}

impl Error for WireErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WireErr::Json(err) => Some(err),
            WireErr::Position(_, err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for WireErr {
    fn from(err: serde_json::Error) -> Self {
        WireErr::Json(err)
    }
}

/// `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePos {
    pub x: i32,
    pub y: i32,
}

impl From<Pos> for WirePos {
    fn from(pos: Pos) -> Self {
        WirePos { x: pos.c, y: pos.r }
    }
}

impl From<WirePos> for Pos {
    fn from(pos: WirePos) -> Self {
        Pos::new(pos.y, pos.x)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGame {
    pub static_layer: Vec<Vec<MapCell>>,
    // older clients send the field capitalized
    #[serde(default, alias = "ComputerSet")]
    pub computer_set: BTreeMap<String, Empty>,
    pub player: WirePos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRequest {
    pub game: WireGame,
    pub direction: Dir,
}

pub fn encode_game(state: &GameState) -> Result<WireGame, WireErr> {
    let grid = state.grid();
    let static_layer = (0..grid.rows())
        .map(|r| {
            (0..grid.cols(r))
                .map(|c| grid.get(Pos::new(r as i32, c as i32)).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut computer_set = BTreeMap::new();
    for &pos in state.boxes() {
        let key = serde_json::to_string(&WirePos::from(pos))?;
        computer_set.insert(key, Empty {});
    }

    Ok(WireGame {
        static_layer,
        computer_set,
        player: state.player_pos().into(),
    })
}

pub fn decode_game(game: WireGame) -> Result<GameState, WireErr> {
    let mut boxes = BTreeSet::new();
    for key in game.computer_set.keys() {
        let pos: WirePos =
            serde_json::from_str(key).map_err(|err| WireErr::Position(key.clone(), err))?;
        boxes.insert(pos.into());
    }
    Ok(GameState::from_parts(
        Grid::new(game.static_layer),
        boxes,
        game.player.into(),
    ))
}

pub fn parse_game(input: &str) -> Result<GameState, WireErr> {
    decode_game(serde_json::from_str(input)?)
}

pub fn parse_description(input: &str) -> Result<Description, WireErr> {
    Ok(serde_json::from_str(input)?)
}

pub fn parse_step_request(input: &str) -> Result<(GameState, Dir), WireErr> {
    let request: StepRequest = serde_json::from_str(input)?;
    Ok((decode_game(request.game)?, request.direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn encoding_game() {
        let state: GameState = r"
####
#@$.#
####
"
        .parse()
        .unwrap();
        let value = serde_json::to_value(encode_game(&state).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "staticLayer": [
                    ["wall", "wall", "wall", "wall"],
                    ["wall", "", "", "target", "wall"],
                    ["wall", "wall", "wall", "wall"],
                ],
                "computerSet": { r#"{"x":2,"y":1}"#: {} },
                "player": { "x": 1, "y": 1 },
            })
        );
    }

    #[test]
    fn decoding_game() {
        let input = r#"{
            "staticLayer": [["wall", "wall", "wall"], ["wall", "target", ""]],
            "computerSet": { "{\"x\":1,\"y\":1}": {}, "{\"y\":1,\"x\":2}": {} },
            "player": { "x": 2, "y": 0 }
        }"#;
        let state = parse_game(input).unwrap();
        assert_eq!(state.player_pos(), Pos::new(0, 2));
        assert_eq!(
            state.boxes().iter().cloned().collect::<Vec<_>>(),
            vec![Pos::new(1, 1), Pos::new(1, 2)]
        );
        assert_eq!(state.grid().get(Pos::new(1, 1)), Some(MapCell::Target));
        assert_eq!(state.grid().get(Pos::new(1, 2)), Some(MapCell::Empty));
    }

    #[test]
    fn capitalized_computer_set() {
        let input = r#"{
            "staticLayer": [["", ""]],
            "ComputerSet": { "{\"x\":1,\"y\":0}": {} },
            "player": { "x": 0, "y": 0 }
        }"#;
        let state = parse_game(input).unwrap();
        assert!(state.boxes().contains(&Pos::new(0, 1)));
    }

    #[test]
    fn round_trip_through_text() {
        let state: GameState = r"
#####
#+$ #
# *$.#
#####
"
        .parse()
        .unwrap();
        let text = serde_json::to_string(&encode_game(&state).unwrap()).unwrap();
        let decoded = parse_game(&text).unwrap();
        assert_eq!(decoded, state);
        assert_eq!(decoded.key(), state.key());
    }

    #[test]
    fn invalid_input() {
        // wrong nesting
        assert!(parse_description(r#"[["wall"]]"#).is_err());
        assert!(parse_description(r#"[[["lava"]]]"#).is_err());
        assert!(parse_game(r#"{"staticLayer": [["water"]], "player": {"x":0,"y":0}}"#).is_err());
        assert!(parse_game(r#"{"staticLayer": [[""]]}"#).is_err());

        let err = parse_game(
            r#"{"staticLayer": [[""]], "computerSet": {"0,0": {}}, "player": {"x":0,"y":0}}"#,
        )
        .unwrap_err();
        match err {
            WireErr::Position(ref key, _) => {
                assert_eq!(key, "0,0");
                assert!(err.source().is_some());
                assert!(err.to_string().starts_with("Invalid position 0,0: "));
            }
            _ => panic!("unexpected error: {}", err),
        }

        assert!(parse_step_request(
            r#"{"game": {"staticLayer": [[""]], "player": {"x":0,"y":0}}, "direction": "north"}"#
        )
        .is_err());
    }

    #[test]
    fn parsing_step_request() {
        let (state, dir) = parse_step_request(
            r#"{"game": {"staticLayer": [["", ""]], "computerSet": {}, "player": {"x":0,"y":0}}, "direction": "right"}"#,
        )
        .unwrap();
        assert_eq!(dir, Dir::Right);
        assert_eq!(state.player_pos(), Pos::new(0, 0));
        assert!(state.boxes().is_empty());
    }
}
