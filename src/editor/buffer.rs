use tracing::debug;

/// Byte value that stands for the line terminator.
///
/// Reading the virtual slot yields this value, and writing it splits the
/// current line.
pub const NEWLINE: u8 = b'\n';

/// Byte inserted when the cursor grows a line past either edge.
pub const DEFAULT_FILLER: u8 = b'a';

/// One record of the buffer: raw bytes, no decoding.
pub type Line = Vec<u8>;

/// What the cursor sees at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A stored byte.
    Byte(u8),
    /// The virtual slot one past the last byte of a line.
    EndOfLine,
}

impl Slot {
    /// Arithmetic value of the slot; the virtual slot counts as [`NEWLINE`].
    pub const fn value(self) -> u8 {
        match self {
            Self::Byte(byte) => byte,
            Self::EndOfLine => NEWLINE,
        }
    }
}

/// Cursor position in the byte grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index. Doubles as the current-line index.
    pub row: usize,
    /// Zero-based byte index, `0..=len(line)`.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at row 0, column 0.
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A grid of byte lines edited through a tape-style cursor.
///
/// The grid always holds at least one line and the cursor always addresses
/// either a stored byte or the virtual slot of its line. Moving past any edge
/// grows the grid instead of stopping, writing the terminator splits a line,
/// and writing anything else at the virtual slot pulls the next line up.
pub struct ByteGrid {
    lines: Vec<Line>,
    cursor: Cursor,
    filler: u8,
    dirty: bool,
}

impl ByteGrid {
    /// Create a grid from loaded lines. An empty list becomes one empty line.
    pub fn from_lines(mut lines: Vec<Line>) -> Self {
        if lines.is_empty() {
            lines.push(Line::new());
        }
        Self {
            lines,
            cursor: Cursor::new(),
            filler: DEFAULT_FILLER,
            dirty: false,
        }
    }

    /// Create a grid holding a single empty line.
    pub fn empty() -> Self {
        Self::from_lines(Vec::new())
    }

    /// Use `filler` for bytes created by edge movement.
    ///
    /// The terminator can't be a filler; it is rejected and the default kept.
    pub fn with_filler(mut self, filler: u8) -> Self {
        if filler == NEWLINE {
            tracing::warn!("terminator byte rejected as filler, keeping default");
        } else {
            self.filler = filler;
        }
        self
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Byte used when movement grows a line.
    pub const fn filler(&self) -> u8 {
        self.filler
    }

    /// Whether the grid has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the grid as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines. Never zero.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Bytes of a line, if it exists.
    pub fn line(&self, row: usize) -> Option<&[u8]> {
        self.lines.get(row).map(Vec::as_slice)
    }

    /// Bytes of the line under the cursor.
    pub fn current_line(&self) -> &[u8] {
        &self.lines[self.cursor.row]
    }

    /// Read the slot at a position. `None` past the virtual slot.
    pub fn read_at(&self, row: usize, col: usize) -> Option<Slot> {
        let line = self.lines.get(row)?;
        match col.cmp(&line.len()) {
            std::cmp::Ordering::Less => Some(Slot::Byte(line[col])),
            std::cmp::Ordering::Equal => Some(Slot::EndOfLine),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// Read the slot under the cursor.
    pub fn current_slot(&self) -> Slot {
        let line = self.current_line();
        line.get(self.cursor.col)
            .map_or(Slot::EndOfLine, |&byte| Slot::Byte(byte))
    }

    /// Write a byte at the cursor.
    ///
    /// - [`NEWLINE`] splits the line: bytes before the cursor move to a new
    ///   line inserted above, the byte under the cursor is consumed, and the
    ///   cursor lands on column 0 of the new line.
    /// - Any other byte over a stored byte replaces it.
    /// - Any other byte at the virtual slot is appended and the following
    ///   line, if any, is joined onto the current one.
    pub fn write(&mut self, value: u8) {
        let col = self.cursor.col;
        let len = self.current_line().len();
        if value == NEWLINE {
            self.split();
        } else if col < len {
            self.lines[self.cursor.row][col] = value;
        } else {
            self.merge(value);
        }
        self.dirty = true;
    }

    /// Add one to the byte under the cursor; 255 is deleted instead of wrapping.
    pub fn increment(&mut self) {
        match self.current_slot() {
            Slot::Byte(u8::MAX) => self.delete_at_cursor(),
            slot => self.write(slot.value() + 1),
        }
    }

    /// Subtract one from the byte under the cursor; 0 is deleted instead of wrapping.
    pub fn decrement(&mut self) {
        match self.current_slot() {
            Slot::Byte(0) => self.delete_at_cursor(),
            slot => self.write(slot.value() - 1),
        }
    }

    /// Move the cursor in the given direction, growing the grid at its edges.
    ///
    /// - Left at column 0 inserts a filler byte at the front of the line.
    /// - Right at the virtual slot appends a filler byte and steps past it.
    /// - Down from the last line appends an empty line; lands on column 0.
    /// - Up from the first line inserts an empty line above; lands on the
    ///   virtual slot of the line above.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// Move cursor to a specific row and column, clamped to existing content.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor.row = row.min(self.lines.len() - 1);
        self.cursor.col = col.min(self.current_line().len());
    }

    // --- Private helpers ---

    fn split(&mut self) {
        let row = self.cursor.row;
        let col = self.cursor.col;
        let current = &mut self.lines[row];
        let head: Line = current.drain(..col).collect();
        if !current.is_empty() {
            current.remove(0);
        }
        self.lines.insert(row, head);
        self.cursor.col = 0;
        debug!(row, col, "split line");
    }

    fn merge(&mut self, value: u8) {
        let row = self.cursor.row;
        self.lines[row].push(value);
        if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].extend_from_slice(&next);
            debug!(row, absorbed = next.len(), "merged next line");
        }
    }

    fn delete_at_cursor(&mut self) {
        let col = self.cursor.col;
        let line = &mut self.lines[self.cursor.row];
        // The virtual slot has no stored byte to remove.
        if col < line.len() {
            line.remove(col);
            self.dirty = true;
        }
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else {
            let filler = self.filler;
            self.lines[self.cursor.row].insert(0, filler);
            self.dirty = true;
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col == self.current_line().len() {
            let filler = self.filler;
            self.lines[self.cursor.row].push(filler);
            self.dirty = true;
        }
        self.cursor.col += 1;
    }

    fn move_up(&mut self) {
        if self.cursor.row == 0 {
            self.lines.insert(0, Line::new());
            self.dirty = true;
        } else {
            self.cursor.row -= 1;
        }
        self.cursor.col = self.current_line().len();
    }

    fn move_down(&mut self) {
        if self.cursor.row + 1 == self.lines.len() {
            self.lines.push(Line::new());
            self.dirty = true;
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
    }
}

impl Default for ByteGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for ByteGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteGrid")
            .field("lines", &format_args!("{} lines", self.lines.len()))
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(lines: &[&[u8]]) -> ByteGrid {
        ByteGrid::from_lines(lines.iter().map(|l| l.to_vec()).collect())
    }

    fn contents(grid: &ByteGrid) -> Vec<&[u8]> {
        grid.lines().iter().map(Vec::as_slice).collect()
    }

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_grid_has_one_line() {
        let grid = ByteGrid::empty();
        assert_eq!(grid.line_count(), 1);
        assert_eq!(grid.line(0), Some(&b""[..]));
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_from_empty_lines_substitutes_empty_line() {
        let grid = ByteGrid::from_lines(Vec::new());
        assert_eq!(contents(&grid), vec![&b""[..]]);
    }

    #[test]
    fn test_read_at_stored_byte_and_virtual_slot() {
        let grid = grid(&[b"ab"]);
        assert_eq!(grid.read_at(0, 1), Some(Slot::Byte(b'b')));
        assert_eq!(grid.read_at(0, 2), Some(Slot::EndOfLine));
        assert_eq!(grid.read_at(0, 3), None);
        assert_eq!(grid.read_at(1, 0), None);
    }

    #[test]
    fn test_virtual_slot_reads_as_newline() {
        assert_eq!(Slot::EndOfLine.value(), NEWLINE);
        assert_eq!(Slot::Byte(7).value(), 7);
    }

    #[test]
    fn test_new_grid_is_clean() {
        let grid = grid(&[b"hello"]);
        assert!(!grid.is_dirty());
    }

    #[test]
    fn test_write_marks_dirty_and_mark_clean_resets() {
        let mut grid = grid(&[b"hello"]);
        grid.write(b'j');
        assert!(grid.is_dirty());
        grid.mark_clean();
        assert!(!grid.is_dirty());
    }

    // --- Writing ---

    #[test]
    fn test_write_overwrites_in_place() {
        let mut grid = grid(&[b"hello"]);
        grid.write(b'j');
        assert_eq!(contents(&grid), vec![&b"jello"[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_write_newline_mid_line_consumes_byte() {
        let mut grid = grid(&[b"hello world"]);
        grid.move_to(0, 5);
        grid.write(NEWLINE);
        assert_eq!(contents(&grid), vec![&b"hello"[..], &b"world"[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_write_newline_at_virtual_slot_adds_empty_line() {
        let mut grid = grid(&[b"ab"]);
        grid.move_cursor(Direction::Right);
        grid.move_cursor(Direction::Right);
        assert_eq!(grid.cursor(), Cursor::at(0, 2));

        grid.write(NEWLINE);
        assert_eq!(contents(&grid), vec![&b"ab"[..], &b""[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_write_newline_at_start_consumes_first_byte() {
        let mut grid = grid(&[b"xyz"]);
        grid.write(NEWLINE);
        assert_eq!(contents(&grid), vec![&b""[..], &b"yz"[..]]);
    }

    #[test]
    fn test_write_at_virtual_slot_merges_next_line() {
        let mut grid = grid(&[b"ab", b"cd"]);
        grid.move_to(0, 2);
        grid.write(b'X');
        assert_eq!(contents(&grid), vec![&b"abXcd"[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 2));
        assert_eq!(grid.current_slot(), Slot::Byte(b'X'));
    }

    #[test]
    fn test_write_at_virtual_slot_of_last_line_appends() {
        let mut grid = grid(&[b"ab"]);
        grid.move_to(0, 2);
        grid.write(b'!');
        assert_eq!(contents(&grid), vec![&b"ab!"[..]]);
        assert_eq!(grid.line_count(), 1);
    }

    #[test]
    fn test_split_then_merge_restores_line() {
        let mut grid = grid(&[b"hello world"]);
        grid.move_to(0, 5);
        let consumed = grid.current_slot().value();
        grid.write(NEWLINE);

        for _ in 0..5 {
            grid.move_cursor(Direction::Right);
        }
        assert_eq!(grid.current_slot(), Slot::EndOfLine);
        grid.write(consumed);

        assert_eq!(contents(&grid), vec![&b"hello world"[..]]);
    }

    // --- Increment / decrement ---

    #[test]
    fn test_increment_and_decrement_adjust_byte() {
        let mut grid = grid(&[b"b"]);
        grid.increment();
        assert_eq!(grid.current_slot(), Slot::Byte(b'c'));
        grid.decrement();
        grid.decrement();
        assert_eq!(grid.current_slot(), Slot::Byte(b'a'));
    }

    #[test]
    fn test_increment_max_deletes_instead_of_wrapping() {
        let mut grid = grid(&[&[b'a', 255, b'z']]);
        grid.move_to(0, 1);
        grid.increment();
        assert_eq!(contents(&grid), vec![&b"az"[..]]);
        assert_eq!(grid.current_slot(), Slot::Byte(b'z'));
    }

    #[test]
    fn test_decrement_zero_deletes_instead_of_wrapping() {
        let mut grid = grid(&[&[0, b'q']]);
        grid.decrement();
        assert_eq!(contents(&grid), vec![&b"q"[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_decrement_at_virtual_slot_writes_nine() {
        let mut grid = grid(&[b"x"]);
        grid.move_to(0, 1);
        assert_eq!(grid.current_slot().value(), NEWLINE);
        grid.decrement();
        assert_eq!(contents(&grid), vec![&b"x\t"[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_increment_at_virtual_slot_merges_with_eleven() {
        let mut grid = grid(&[b"a", b"b"]);
        grid.move_to(0, 1);
        grid.increment();
        assert_eq!(contents(&grid), vec![&[b'a', 11, b'b'][..]]);
    }

    #[test]
    fn test_increment_nine_splits_line() {
        let mut grid = grid(&[b"a\tb"]);
        grid.move_to(0, 1);
        grid.increment();
        assert_eq!(contents(&grid), vec![&b"a"[..], &b"b"[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_delete_at_virtual_slot_is_noop() {
        let mut grid = grid(&[b"ab", b"cd"]);
        grid.move_to(0, 2);
        grid.delete_at_cursor();
        assert_eq!(contents(&grid), vec![&b"ab"[..], &b"cd"[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 2));
        assert!(!grid.is_dirty());
    }

    // --- Cursor movement: left/right ---

    #[test]
    fn test_move_left_decreases_col() {
        let mut grid = grid(&[b"hello"]);
        grid.move_to(0, 3);
        grid.move_cursor(Direction::Left);
        assert_eq!(grid.cursor(), Cursor::at(0, 2));
        assert_eq!(grid.current_line(), b"hello");
    }

    #[test]
    fn test_move_left_at_start_grows_line() {
        let mut grid = grid(&[b"hello"]);
        grid.move_cursor(Direction::Left);
        assert_eq!(grid.current_line(), b"ahello");
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
        assert_eq!(grid.current_slot(), Slot::Byte(DEFAULT_FILLER));
    }

    #[test]
    fn test_move_right_increases_col() {
        let mut grid = grid(&[b"hello"]);
        grid.move_cursor(Direction::Right);
        assert_eq!(grid.cursor(), Cursor::at(0, 1));
        assert_eq!(grid.current_line(), b"hello");
    }

    #[test]
    fn test_move_right_at_virtual_slot_grows_line() {
        let mut grid = grid(&[b"hi"]);
        grid.move_to(0, 2);
        grid.move_cursor(Direction::Right);
        assert_eq!(grid.current_line(), b"hia");
        assert_eq!(grid.cursor(), Cursor::at(0, 3));
        assert_eq!(grid.current_slot(), Slot::EndOfLine);
    }

    #[test]
    fn test_custom_filler_is_used_for_growth() {
        let mut grid = grid(&[b""]).with_filler(b'.');
        grid.move_cursor(Direction::Right);
        grid.move_cursor(Direction::Left);
        grid.move_cursor(Direction::Left);
        assert_eq!(grid.current_line(), b"..");
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_newline_filler_is_rejected() {
        let grid = ByteGrid::empty().with_filler(NEWLINE);
        assert_eq!(grid.filler(), DEFAULT_FILLER);
    }

    // --- Cursor movement: up/down ---

    #[test]
    fn test_move_down_lands_on_column_zero() {
        let mut grid = grid(&[b"hello", b"world"]);
        grid.move_to(0, 3);
        grid.move_cursor(Direction::Down);
        assert_eq!(grid.cursor(), Cursor::at(1, 0));
        assert_eq!(grid.line_count(), 2);
    }

    #[test]
    fn test_move_down_from_last_line_appends_line() {
        let mut grid = grid(&[b"hello"]);
        grid.move_cursor(Direction::Down);
        assert_eq!(contents(&grid), vec![&b"hello"[..], &b""[..]]);
        assert_eq!(grid.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_up_lands_on_virtual_slot_above() {
        let mut grid = grid(&[b"hello", b"hi"]);
        grid.move_to(1, 1);
        grid.move_cursor(Direction::Up);
        assert_eq!(grid.cursor(), Cursor::at(0, 5));
        assert_eq!(grid.current_slot(), Slot::EndOfLine);
    }

    #[test]
    fn test_move_up_from_first_line_inserts_line() {
        let mut grid = grid(&[b"hello"]);
        grid.move_to(0, 2);
        grid.move_cursor(Direction::Up);
        assert_eq!(contents(&grid), vec![&b""[..], &b"hello"[..]]);
        assert_eq!(grid.cursor(), Cursor::at(0, 0));
    }

    // --- move_to ---

    #[test]
    fn test_move_to_clamps_row_and_col() {
        let mut grid = grid(&[b"hello", b"hi"]);
        grid.move_to(100, 100);
        assert_eq!(grid.cursor(), Cursor::at(1, 2));
    }

    // --- Invariants under arbitrary command sequences ---

    #[derive(Debug, Clone)]
    enum Op {
        Move(Direction),
        Increment,
        Decrement,
        Write(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Move(Direction::Up)),
            Just(Op::Move(Direction::Down)),
            Just(Op::Move(Direction::Left)),
            Just(Op::Move(Direction::Right)),
            Just(Op::Increment),
            Just(Op::Decrement),
            any::<u8>().prop_map(Op::Write),
            Just(Op::Write(NEWLINE)),
        ]
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_in_bounds(
            lines in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..5),
            ops in prop::collection::vec(op_strategy(), 0..64),
        ) {
            let mut grid = ByteGrid::from_lines(lines);
            for op in ops {
                match op {
                    Op::Move(direction) => grid.move_cursor(direction),
                    Op::Increment => grid.increment(),
                    Op::Decrement => grid.decrement(),
                    Op::Write(byte) => grid.write(byte),
                }
                let cursor = grid.cursor();
                prop_assert!(grid.line_count() >= 1);
                prop_assert!(cursor.row < grid.line_count());
                prop_assert!(cursor.col <= grid.current_line().len());
            }
        }

        #[test]
        fn prop_edge_moves_grow_line_by_one(line in prop::collection::vec(any::<u8>(), 0..16)) {
            let len = line.len();
            let mut grid = ByteGrid::from_lines(vec![line]);
            grid.move_cursor(Direction::Left);
            prop_assert_eq!(grid.current_line().len(), len + 1);
            prop_assert_eq!(grid.cursor().col, 0);

            grid.move_to(0, len + 1);
            grid.move_cursor(Direction::Right);
            prop_assert_eq!(grid.current_line().len(), len + 2);
            prop_assert_eq!(grid.cursor().col, len + 2);
        }
    }
}
