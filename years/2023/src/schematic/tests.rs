use super::{Cell, Pos, Schematic, SchematicError, Symbol};

const CANONICAL: [&str; 10] = [
    "467..114..",
    "...*......",
    "..35..633.",
    "......#...",
    "617*......",
    ".....+.58.",
    "..592.....",
    "......755.",
    "...$.*....",
    ".664.598..",
];

fn sums(lines: &[&str]) -> (u128, u128) {
    let schematic = Schematic::from_lines(lines).unwrap();
    let extraction = schematic.extract().unwrap();
    (
        extraction.part_number_sum(),
        extraction.gear_ratio_sum(&schematic),
    )
}

#[test]
fn test_canonical() {
    assert_eq!(sums(&CANONICAL), (4361, 467835));
}

#[test]
fn test_canonical_part_numbers() {
    let schematic = Schematic::from_lines(CANONICAL).unwrap();
    let extraction = schematic.extract().unwrap();

    let parts = extraction
        .part_numbers()
        .map(|token| token.value)
        .collect::<Vec<_>>();

    assert_eq!(parts, [467, 35, 633, 617, 592, 755, 664, 598]);
    assert_eq!(extraction.tokens().len(), 10);
}

#[test]
fn test_canonical_gears() {
    let schematic = Schematic::from_lines(CANONICAL).unwrap();
    let extraction = schematic.extract().unwrap();

    let ratios = schematic
        .gears()
        .map(|gear| (gear, extraction.gear_ratio(&schematic, gear)))
        .collect::<Vec<_>>();

    assert_eq!(
        ratios,
        [
            (Pos::new(1, 3), 16345),
            (Pos::new(4, 3), 0),
            (Pos::new(8, 5), 451490),
        ]
    );
}

#[test]
fn test_single_row_gear() {
    assert_eq!(sums(&["12*34"]), (46, 408));
}

#[test]
fn test_far_symbol() {
    assert_eq!(sums(&["5.....*.."]), (0, 0));
}

#[test]
fn test_no_symbols() {
    assert_eq!(sums(&["123..45", "..6...7"]), (0, 0));
}

#[test]
fn test_no_digits() {
    assert_eq!(sums(&["..*..", "#...."]), (0, 0));
}

#[test]
fn test_empty() {
    let schematic = Schematic::from_lines(Vec::<&str>::new()).unwrap();
    assert_eq!(schematic.rows_len(), 0);
    assert_eq!(schematic.columns_len(), 0);

    let extraction = schematic.extract().unwrap();
    assert!(extraction.tokens().is_empty());
    assert!(extraction.adjacent().is_empty());
    assert_eq!(extraction.part_number_sum(), 0);
    assert_eq!(extraction.gear_ratio_sum(&schematic), 0);
}

#[test]
fn test_corner_adjacency() {
    // Only the last digit touches the symbol, diagonally.
    assert_eq!(sums(&["123.", "...#"]), (123, 0));
    assert_eq!(sums(&["123..", "....#"]), (0, 0));
}

#[test]
fn test_three_tokens_gear() {
    assert_eq!(sums(&["1.2", ".*.", "3.."]), (6, 0));
}

#[test]
fn test_gear_same_token_twice() {
    // A single token touching the gear at several cells counts once.
    assert_eq!(sums(&["123", ".*.", "..."]), (123, 0));
    assert_eq!(sums(&["123", ".*.", ".4."]), (127, 492));
}

#[test]
fn test_duplicate_values_are_distinct() {
    assert_eq!(sums(&["5*5"]), (10, 25));
    assert_eq!(sums(&["77.", ".*.", "77."]), (154, 5929));
}

#[test]
fn test_right_edge_run() {
    let schematic = Schematic::from_lines(["..12", "...*"]).unwrap();
    let extraction = schematic.extract().unwrap();

    let [token] = extraction.tokens() else {
        panic!("expected one token: {:?}", extraction.tokens());
    };

    assert_eq!((token.row, token.start, token.end, token.value), (0, 2, 3, 12));
    assert_eq!(extraction.part_number_sum(), 12);
    assert_eq!(extraction.gear_ratio_sum(&schematic), 0);
}

#[test]
fn test_runs_do_not_span_rows() {
    let schematic = Schematic::from_lines(["..1", "2.."]).unwrap();
    let extraction = schematic.extract().unwrap();

    let values = extraction
        .tokens()
        .iter()
        .map(|token| (token.row, token.value))
        .collect::<Vec<_>>();

    assert_eq!(values, [(0, 1), (1, 2)]);
}

#[test]
fn test_idempotent() {
    let schematic = Schematic::from_lines(CANONICAL).unwrap();
    let extraction = schematic.extract().unwrap();

    let first = (
        extraction.part_number_sum(),
        extraction.gear_ratio_sum(&schematic),
    );

    let second = (
        extraction.part_number_sum(),
        extraction.gear_ratio_sum(&schematic),
    );

    assert_eq!(first, second);
}

#[test]
fn test_concurrent_queries() {
    let schematic = Schematic::from_lines(CANONICAL).unwrap();
    let extraction = schematic.extract().unwrap();

    let (a, b) = std::thread::scope(|s| {
        let b = s.spawn(|| extraction.gear_ratio_sum(&schematic));
        let a = s.spawn(|| extraction.part_number_sum());
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!((a, b), (4361, 467835));
}

#[test]
fn test_ragged() {
    let error = Schematic::from_lines(["123", "45", "678"]).unwrap_err();

    assert_eq!(
        error,
        SchematicError::Ragged {
            row: 1,
            expected: 3,
            actual: 2
        }
    );

    assert_eq!(
        error.to_string(),
        "malformed grid: row 1 has 2 columns, but expected 3"
    );
}

#[test]
fn test_wide_numbers() {
    assert_eq!(sums(&["4294967296*"]), (4294967296, 0));
    assert_eq!(
        sums(&["18446744073709551615*18446744073709551615"]),
        (36893488147419103230, 340282366920938463426481119284349108225)
    );
}

#[test]
fn test_overflow() {
    let schematic = Schematic::from_lines([".18446744073709551616"]).unwrap();

    assert_eq!(
        schematic.extract().unwrap_err(),
        SchematicError::Overflow { row: 0, col: 1 }
    );
}

#[test]
fn test_cells() {
    let schematic = Schematic::from_lines(["7.*", "#.."]).unwrap();

    assert_eq!(schematic.get(Pos::new(0, 0)), Some(Cell::Digit(7)));
    assert_eq!(schematic.get(Pos::new(0, 1)), Some(Cell::Space));
    assert_eq!(
        schematic.get(Pos::new(0, 2)),
        Some(Cell::Symbol(Symbol::Gear))
    );
    assert_eq!(
        schematic.get(Pos::new(1, 0)),
        Some(Cell::Symbol(Symbol::Other(b'#')))
    );
    assert_eq!(schematic.get(Pos::new(0, 3)), None);
    assert_eq!(schematic.get(Pos::new(2, 0)), None);
}

#[test]
fn test_neighbours() {
    let schematic = Schematic::from_lines(["...", "...", "..."]).unwrap();

    let corner = schematic.neighbours(Pos::new(0, 0)).collect::<Vec<_>>();
    assert_eq!(corner, [Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);

    assert_eq!(schematic.neighbours(Pos::new(1, 1)).count(), 8);
    assert_eq!(schematic.neighbours(Pos::new(2, 1)).count(), 5);
}
