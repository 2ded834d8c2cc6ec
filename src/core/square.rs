use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::error::{InvalidSquareError, InvalidSquareReason};

/// Side length of the board.
pub const BOARD_SIZE: i32 = 8;

/// `(file + rank) % 2` value that marks a dark square. With `1`, "a1" is light.
pub const DARK_PARITY: i32 = 1;

const FILES: &[u8; 8] = b"abcdefgh";
const RANKS: &[u8; 8] = b"12345678";

/// One square of the board.
///
/// `file` and `rank` are signed so that malformed records can be represented and
/// rejected by validation instead of wrapping silently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Square {
    pub file: i32,
    pub rank: i32,
    pub id: String,
    pub is_dark: bool,
}

impl Square {
    /// The square at `(file, rank)`, or an error if it is off the board.
    pub fn new(file: i32, rank: i32) -> Result<Square, InvalidSquareError> {
        let reject = |reason| InvalidSquareError {
            file,
            rank,
            id: String::new(),
            reason,
        };
        if !(0..BOARD_SIZE).contains(&file) {
            return Err(reject(InvalidSquareReason::FileOutOfRange));
        }
        if !(0..BOARD_SIZE).contains(&rank) {
            return Err(reject(InvalidSquareReason::RankOutOfRange));
        }
        Ok(Square::on_board(file, rank))
    }

    /// Builds a square whose coordinates are already known to be on the board.
    pub(crate) fn on_board(file: i32, rank: i32) -> Square {
        debug_assert!(Coord::new(file, rank).on_board(BOARD_SIZE));
        Square {
            file,
            rank,
            id: algebraic(file, rank),
            is_dark: is_dark(file, rank),
        }
    }

    /// Parses an algebraic name such as `"e4"`.
    pub fn parse(id: &str) -> Result<Square, InvalidSquareError> {
        let unparsable = || InvalidSquareError {
            file: -1,
            rank: -1,
            id: id.to_owned(),
            reason: InvalidSquareReason::Unparsable,
        };
        let &[f, r] = id.as_bytes() else {
            return Err(unparsable());
        };
        let file = FILES.iter().position(|&c| c == f).ok_or_else(unparsable)?;
        let rank = RANKS.iter().position(|&c| c == r).ok_or_else(unparsable)?;
        Ok(Square::on_board(file as i32, rank as i32))
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.file, self.rank)
    }

    /// Checks that this record describes a real square and that its id and
    /// color agree with its coordinates.
    pub fn validate(&self) -> Result<(), InvalidSquareError> {
        let reject = |reason| InvalidSquareError {
            file: self.file,
            rank: self.rank,
            id: self.id.clone(),
            reason,
        };
        if !(0..BOARD_SIZE).contains(&self.file) {
            return Err(reject(InvalidSquareReason::FileOutOfRange));
        }
        if !(0..BOARD_SIZE).contains(&self.rank) {
            return Err(reject(InvalidSquareReason::RankOutOfRange));
        }
        let expected = algebraic(self.file, self.rank);
        if self.id != expected {
            return Err(reject(InvalidSquareReason::IdMismatch { expected }));
        }
        if self.is_dark != is_dark(self.file, self.rank) {
            return Err(reject(InvalidSquareReason::IsDarkMismatch));
        }
        Ok(())
    }
}

/// Algebraic name of an on-board square: file letter, then 1-based rank digit.
pub(crate) fn algebraic(file: i32, rank: i32) -> String {
    let mut s = String::with_capacity(2);
    s.push(FILES[file as usize] as char);
    s.push(RANKS[rank as usize] as char);
    s
}

#[inline]
pub fn is_dark(file: i32, rank: i32) -> bool {
    (file + rank).rem_euclid(2) == DARK_PARITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_names_corners() {
        assert_eq!(algebraic(0, 0), "a1");
        assert_eq!(algebraic(7, 7), "h8");
        assert_eq!(algebraic(3, 3), "d4");
    }

    #[test]
    fn parse_inverts_algebraic() {
        let sq = Square::parse("f3").unwrap();
        assert_eq!((sq.file, sq.rank), (5, 2));
        assert_eq!(sq.id, "f3");
        assert!(Square::parse("i1").is_err());
        assert!(Square::parse("a9").is_err());
        assert!(Square::parse("a10").is_err());
        assert!(Square::parse("").is_err());
    }

    #[test]
    fn a1_is_light_and_neighbours_alternate() {
        assert!(!is_dark(0, 0));
        assert!(is_dark(0, 1));
        assert!(is_dark(1, 0));
        assert!(!is_dark(7, 7));
    }

    #[test]
    fn validate_rejects_each_malformation() {
        let mut sq = Square::on_board(2, 5);
        assert!(sq.validate().is_ok());

        sq.id = "c5".to_owned();
        let err = sq.validate().unwrap_err();
        assert_eq!(
            err.reason,
            InvalidSquareReason::IdMismatch {
                expected: "c6".to_owned()
            }
        );

        let off = Square {
            file: 2,
            rank: -1,
            id: "c0".to_owned(),
            is_dark: false,
        };
        assert_eq!(
            off.validate().unwrap_err().reason,
            InvalidSquareReason::RankOutOfRange
        );
    }

    #[test]
    fn validate_rejects_flipped_color() {
        let mut a1 = Square::on_board(0, 0);
        a1.is_dark = true;
        assert_eq!(
            a1.validate().unwrap_err().reason,
            InvalidSquareReason::IsDarkMismatch
        );
    }

    #[test]
    fn parse_error_has_no_coordinates_in_message() {
        let msg = Square::parse("z9").unwrap_err().to_string();
        assert_eq!(msg, "invalid square \"z9\": not an algebraic square name");
    }

    #[test]
    fn new_checks_bounds() {
        assert!(Square::new(7, 0).is_ok());
        assert_eq!(
            Square::new(8, 0).unwrap_err().reason,
            InvalidSquareReason::FileOutOfRange
        );
    }
}
