use keygrid::core::codec::{self, BoardCodec, DelimitedCodec};
use keygrid::core::values::{VALUE_LEN, ValueSource};
use keygrid::core::{Board, BoardEngine, Cell, Row, SortOrder};

// ============================================================================
// Helper Functions
// ============================================================================

/// Values that count upward in base 95 over printable ASCII, so every call
/// differs and the output is predictable.
#[derive(Default)]
struct CountingValues {
    next: u32,
}

impl ValueSource for CountingValues {
    fn generate(&mut self) -> String {
        let mut n = self.next;
        self.next += 1;
        let mut chars = [' '; VALUE_LEN];
        for slot in chars.iter_mut().rev() {
            *slot = char::from(b' ' + (n % 95) as u8);
            n /= 95;
        }
        chars.iter().collect()
    }
}

fn counting_engine() -> BoardEngine<CountingValues, DelimitedCodec> {
    BoardEngine::new(CountingValues::default(), DelimitedCodec)
}

fn is_printable_triplet(s: &str) -> bool {
    s.chars().count() == 3 && s.chars().all(|c| (' '..='~').contains(&c))
}

// ============================================================================
// Codec Scenarios
// ============================================================================

#[test]
fn test_created_board_survives_serialize_deserialize() {
    let mut engine = BoardEngine::seeded(5);
    let board = engine.create_board(2, 3);
    let decoded = codec::deserialize(&codec::serialize(&board)).unwrap();
    assert_eq!(decoded.board.row_count(), 2);
    assert!(decoded.board.rows().iter().all(|r| r.column_count() == 3));
    assert_eq!(decoded.board, board);
    assert!(decoded.malformed.is_empty());
}

#[test]
fn test_round_trip_many_generated_boards() {
    for seed in 0..25 {
        let mut engine = BoardEngine::seeded(seed);
        let rows = 1 + (seed as usize % 4);
        let columns = 1 + (seed as usize % 5);
        let board = engine.create_board(rows, columns);
        let text = DelimitedCodec.encode(&board);
        assert_eq!(DelimitedCodec.decode(&text).unwrap().board, board, "seed {seed}");
    }
}

#[test]
fn test_single_line_file() {
    let decoded = codec::deserialize("k1\x1Dv1\x1Fk2\x1Dv2\x1F").unwrap();
    assert_eq!(decoded.board.row_count(), 1);
    assert_eq!(
        decoded.board.rows()[0].cells,
        vec![Cell::new("k1", "v1"), Cell::new("k2", "v2")]
    );
}

#[test]
fn test_damaged_line_loads_short_row() {
    let text = "a\x1D1\x1Fb\x1D2\x1F\nc\x1D3\x1Fbroken\x1F\n";
    let decoded = codec::deserialize(text).unwrap();
    assert_eq!(decoded.board.row_count(), 2);
    assert_eq!(decoded.board.rows()[1].column_count(), 1);
    assert_eq!(decoded.malformed.len(), 1);
    assert_eq!(decoded.malformed[0].raw, "broken");
}

// ============================================================================
// Engine Scenarios
// ============================================================================

#[test]
fn test_search_finds_planted_value() {
    let mut engine = counting_engine();
    let mut board = engine.create_board(3, 3);
    let mut rows = board.take_rows();
    rows[1].cells[2] = Cell::new("v_", "1");
    board.set_rows(rows);

    let report = engine.search(&board, "v_1");
    assert_eq!(report.occurrences(), 1);
    let hit = &report.matches[0];
    assert_eq!((hit.row, hit.column, hit.start, hit.end), (2, 3, 1, 3));
}

#[test]
fn test_insert_adds_exactly_one_row() {
    let mut engine = counting_engine();
    let mut board = engine.create_board(3, 2);
    for (cells, index) in [(5, 0), (1, 2), (2, 5)] {
        let before = board.row_count();
        engine.insert_row(&mut board, cells, index).unwrap();
        assert_eq!(board.row_count(), before + 1);
        assert_eq!(board.rows()[index].column_count(), cells);
    }
}

#[test]
fn test_edit_touches_one_value() {
    let mut engine = counting_engine();
    let mut board = engine.create_board(2, 2);
    let before = board.clone();
    let outcome = engine.edit(&mut board, 0, 1).unwrap();

    assert!(is_printable_triplet(&outcome.current));
    assert_ne!(outcome.previous, outcome.current);
    assert_eq!(board.cell(0, 1).unwrap().key, before.cell(0, 1).unwrap().key);
    assert_eq!(board.cell(0, 1).unwrap().value, outcome.current);
    for (r, c) in [(0, 0), (1, 0), (1, 1)] {
        assert_eq!(board.cell(r, c), before.cell(r, c));
    }
}

#[test]
fn test_sort_then_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sorted.txt");
    let mut engine = BoardEngine::seeded(99);
    let mut board = engine.create_board(4, 4);

    engine.sort(&mut board, SortOrder::Ascending);
    engine.save_board(&board, &path).unwrap();
    let reloaded = engine.load_board(&path).unwrap().unwrap();
    assert_eq!(reloaded, board);

    let firsts: Vec<String> = reloaded.rows().iter().filter_map(Row::first_concat).collect();
    assert!(firsts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_empty_board_saves_as_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    let engine = BoardEngine::seeded(1);
    engine.save_board(&Board::default(), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    assert_eq!(engine.load_board(&path).unwrap(), None);
    assert_eq!(engine.render(&Board::default()), "");
}
