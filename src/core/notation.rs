//! Textual move grammar for human input.
//!
//! | Phase    | Form                                   |
//! |----------|----------------------------------------|
//! | Prepare  | `(x,y)`                                |
//! | Activate | `n0 n1 … nk`                           |
//! | Plant    | `[(x1,y1),(x2,y2)]+[(x3,y3),(x4,y4)]`  |
//! | Grow     | `(x1,y1)+(x2,y2)`                      |
//!
//! An empty line (or `-`) is `Empty` and `surrender` concedes, in any phase.
//! Coordinates are `(column,row)` in the storage grid. Whitespace inside
//! coordinate forms is ignored.

use smallvec::SmallVec;

use super::error::MoveParseError;
use super::hex::Hex;
use super::moves::{Move, PlantPair};
use super::state::Phase;

/// Parse a move for the given phase.
///
/// ```
/// use rust_psynth::core::{parse_move, Hex, Move, Phase};
///
/// assert_eq!(parse_move("(2, 0)", Phase::Prepare).unwrap(), Move::Prepare(Hex::new(2, 0)));
/// assert_eq!(parse_move("", Phase::Grow).unwrap(), Move::Empty);
/// assert!(parse_move("(2,0", Phase::Prepare).is_err());
/// ```
pub fn parse_move(input: &str, phase: Phase) -> Result<Move, MoveParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(Move::Empty);
    }
    if trimmed.eq_ignore_ascii_case("surrender") {
        return Ok(Move::Surrender);
    }

    match phase {
        Phase::Prepare => parse_hex(&compact(trimmed))
            .map(Move::Prepare)
            .ok_or_else(|| MoveParseError::new(input, "expected (x,y)")),
        Phase::Activate => parse_counts(trimmed)
            .map(Move::Activate)
            .ok_or_else(|| MoveParseError::new(input, "expected whitespace-separated counts")),
        Phase::Plant => compact(trimmed)
            .split('+')
            .map(parse_pair)
            .collect::<Option<SmallVec<_>>>()
            .map(Move::Plant)
            .ok_or_else(|| MoveParseError::new(input, "expected [(x1,y1),(x2,y2)]+...")),
        Phase::Grow => compact(trimmed)
            .split('+')
            .map(parse_hex)
            .collect::<Option<SmallVec<_>>>()
            .map(Move::Grow)
            .ok_or_else(|| MoveParseError::new(input, "expected (x1,y1)+(x2,y2)+...")),
    }
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_hex(s: &str) -> Option<Hex> {
    let inner = s.strip_prefix('(')?.strip_suffix(')')?;
    let (col, row) = inner.split_once(',')?;
    Some(Hex::new(col.parse().ok()?, row.parse().ok()?))
}

fn parse_pair(s: &str) -> Option<PlantPair> {
    let inner = s.strip_prefix('[')?.strip_suffix(']')?;
    let split = inner.find(')')? + 1;
    let (from, rest) = inner.split_at(split);
    let to = rest.strip_prefix(',')?;
    Some(PlantPair::new(parse_hex(from)?, parse_hex(to)?))
}

fn parse_counts(s: &str) -> Option<SmallVec<[u32; 6]>> {
    s.split_whitespace().map(|tok| tok.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_surrender_any_phase() {
        for phase in [Phase::Prepare, Phase::Activate, Phase::Plant, Phase::Grow] {
            assert_eq!(parse_move("  ", phase).unwrap(), Move::Empty);
            assert_eq!(parse_move("-", phase).unwrap(), Move::Empty);
            assert_eq!(parse_move("Surrender", phase).unwrap(), Move::Surrender);
        }
    }

    #[test]
    fn test_activate_counts() {
        assert_eq!(parse_move("1 0  2", Phase::Activate).unwrap(), Move::activate(&[1, 0, 2]));
        assert!(parse_move("1 x 2", Phase::Activate).is_err());
        assert!(parse_move("-1 0", Phase::Activate).is_err());
    }

    #[test]
    fn test_plant_pairs() {
        let mv = parse_move("[(3,3),(3,1)] + [(4,4),(5,5)]", Phase::Plant).unwrap();
        assert_eq!(
            mv,
            Move::plant([
                PlantPair::new(Hex::new(3, 3), Hex::new(3, 1)),
                PlantPair::new(Hex::new(4, 4), Hex::new(5, 5)),
            ])
        );
    }

    #[test]
    fn test_plant_malformed() {
        assert!(parse_move("[(3,3)(3,1)]", Phase::Plant).is_err());
        assert!(parse_move("(3,3),(3,1)", Phase::Plant).is_err());
        assert!(parse_move("[(3,3),(3,1)]+", Phase::Plant).is_err());
    }

    #[test]
    fn test_grow_list() {
        let mv = parse_move("(1,2)+(3,4)", Phase::Grow).unwrap();
        assert_eq!(mv, Move::grow([Hex::new(1, 2), Hex::new(3, 4)]));
        assert!(parse_move("(1,2)+3,4", Phase::Grow).is_err());
    }

    #[test]
    fn test_phase_decides_grammar() {
        // a single coordinate is a Grow in the Grow phase, not a Prepare
        assert_eq!(parse_move("(1,1)", Phase::Grow).unwrap(), Move::grow([Hex::new(1, 1)]));
        assert!(parse_move("(1,1)", Phase::Activate).is_err());
    }

    #[test]
    fn test_display_roundtrip_for_each_form() {
        let cases = [
            (Move::Prepare(Hex::new(0, 2)), Phase::Prepare),
            (Move::activate(&[2, 1, 0]), Phase::Activate),
            (Move::plant([PlantPair::new(Hex::new(1, 1), Hex::new(1, 0))]), Phase::Plant),
            (Move::grow([Hex::new(1, 1), Hex::new(0, 1)]), Phase::Grow),
        ];
        for (mv, phase) in cases {
            assert_eq!(parse_move(&mv.to_string(), phase).unwrap(), mv);
        }
    }

    #[test]
    fn test_error_carries_input() {
        let err = parse_move("garbage", Phase::Prepare).unwrap_err();
        assert_eq!(err.input, "garbage");
        assert!(err.to_string().contains("cannot parse"));
    }
}
