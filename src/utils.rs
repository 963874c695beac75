use crate::engine::Board;

/// Parses an array of string slices into a `Board` object.
///
/// Each string slice in the input array represents a row on the board,
/// starting from row 0. The board's dimensions are taken from the input:
/// `s.len()` rows and the character count of the first row as columns.
/// Every row must have the same length.
///
/// Valid characters for cells are:
/// - '*': a bomb
/// - '.': a clear cell
///
/// Any other character will result in an error. The returned board is
/// treated as already placed, so it must contain at least one bomb and at
/// least one clear cell.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of the
///   board, starting from the top (row 0).
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(String)` if:
///     - The input is empty or the first row has no characters.
///     - Any row's length differs from the first row's.
///     - An unrecognized character (not `'*'` or `'.'`) is encountered.
///     - The bomb count is invalid (no bombs, or no clear cells).
///
/// # Examples
/// ```
/// use bombfinder::utils::board_from_str_array;
///
/// let board_str = [
///     "*..", // Row 0
///     ".*.", // Row 1
/// ];
/// let board = board_from_str_array(&board_str).unwrap();
/// assert_eq!(board.rows(), 2);
/// assert_eq!(board.cols(), 3);
/// assert_eq!(board.bomb_count(), 2);
/// assert!(board.is_bomb(0, 0));
/// assert!(!board.is_bomb(0, 1));
///
/// let invalid_char_str = ["*.X"];
/// assert!(board_from_str_array(&invalid_char_str).is_err());
///
/// let ragged_rows = ["*..", ".."];
/// assert!(board_from_str_array(&ragged_rows).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, String> {
    if s.is_empty() {
        return Err("Board layout needs at least one row".to_string());
    }
    let rows = s.len();
    let cols = s[0].chars().count();
    if cols == 0 {
        return Err("Board layout rows must not be empty".to_string());
    }

    let mut bombs = Vec::with_capacity(rows * cols);
    for (r, row_str) in s.iter().enumerate() {
        let row_len = row_str.chars().count();
        if row_len != cols {
            return Err(format!(
                "Row {} has {} characters (expected {})",
                r, row_len, cols
            ));
        }
        for (c, ch) in row_str.chars().enumerate() {
            match ch {
                '*' => bombs.push(true),
                '.' => bombs.push(false),
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        ch, r, c
                    ))
                }
            }
        }
    }
    Board::from_bombs(rows, cols, bombs)
}
