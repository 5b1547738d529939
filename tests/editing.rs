use bytetape::editor::{ByteGrid, Cursor, Direction, Slot, persist};
use bytetape::prelude::Viewport;

fn grid(lines: &[&[u8]]) -> ByteGrid {
    ByteGrid::from_lines(lines.iter().map(|l| l.to_vec()).collect())
}

#[test]
fn test_newline_at_virtual_slot_opens_empty_line() {
    let mut grid = grid(&[b"ab"]);
    grid.move_cursor(Direction::Right);
    grid.move_cursor(Direction::Right);
    assert_eq!(grid.current_slot(), Slot::EndOfLine);

    grid.write(b'\n');
    assert_eq!(grid.lines(), &[b"ab".to_vec(), Vec::new()]);
    assert_eq!(grid.cursor(), Cursor::at(0, 0));
}

#[test]
fn test_byte_at_virtual_slot_joins_next_line() {
    let mut grid = grid(&[b"ab", b"cd"]);
    grid.move_to(0, 2);
    grid.write(b'X');
    assert_eq!(grid.lines(), &[b"abXcd".to_vec()]);
    assert_eq!(grid.cursor(), Cursor::at(0, 2));
}

#[test]
fn test_decrement_at_virtual_slot_writes_tab() {
    let mut grid = grid(&[b"x"]);
    grid.move_to(0, 1);
    grid.decrement();
    assert_eq!(grid.lines(), &[b"x\t".to_vec()]);
}

#[test]
fn test_edit_session_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tape.bin");
    std::fs::write(&path, b"hello\nworld\n").unwrap();

    let mut grid = persist::load(&path).unwrap();
    grid.move_cursor(Direction::Down);
    for _ in 0..5 {
        grid.move_cursor(Direction::Right);
    }
    grid.write(b'!');
    grid.move_to(0, 0);
    grid.increment();
    persist::save(&grid, &path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"iello\nworld!\n");
}

#[test]
fn test_missing_file_starts_empty_and_is_created_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let mut grid = persist::load(&path).unwrap();
    assert_eq!(grid.lines(), &[Vec::<u8>::new()]);
    grid.move_cursor(Direction::Right);
    persist::save(&grid, &path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"a\n");
}

#[test]
fn test_viewport_follows_cursor_growth() {
    let mut grid = ByteGrid::empty().with_filler(b'.');
    let mut viewport = Viewport::new(3, 5);
    for _ in 0..12 {
        grid.move_cursor(Direction::Right);
    }
    viewport.scroll_to(&grid, 4);
    assert_eq!(grid.current_line(), b"............");
    assert_eq!(viewport.first_col(), 8);
    assert_eq!(viewport.cursor_offset(&grid, 4), Some((4, 0)));
}
