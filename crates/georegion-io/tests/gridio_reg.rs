//! Map I/O regression test
//!
//! Reads the map fixtures, writes them back, and checks dimensions, line
//! ending handling and malformed-input reporting.
//!
//! Run with:
//! ```
//! cargo test -p georegion-io --test gridio_reg
//! ```

use georegion_core::GridConfig;
use georegion_io::{read_grid_file, read_grid_from_bytes, write_grid_to_bytes};
use georegion_test::{RegParams, load_test_map, test_data_path};

#[test]
fn gridio_reg() {
    let mut rp = RegParams::new("gridio");

    let rooms = load_test_map("rooms.txt").expect("load rooms.txt");

    // Index 1: written map matches golden
    rp.write_grid_and_check(&rooms).expect("write rooms");

    // Index 2: CRLF map reads the same as LF
    let rooms_crlf = load_test_map("rooms_crlf.txt").expect("load rooms_crlf.txt");
    rp.compare_grids(&rooms, &rooms_crlf);

    // Index 3, 4: dimensions
    rp.compare_values(20.0, rooms.width() as f64, 0.0);
    rp.compare_values(10.0, rooms.height() as f64, 0.0);

    // Index 5, 6: last line without newline
    let strip = load_test_map("strip.txt").expect("load strip.txt");
    rp.compare_values(5.0, strip.width() as f64, 0.0);
    rp.compare_values(1.0, strip.height() as f64, 0.0);

    // Index 7: empty file gives an empty grid
    let empty = load_test_map("empty.txt").expect("load empty.txt");
    rp.compare_values(0.0, empty.height() as f64, 0.0);

    // Index 8: bytes written equal the file's bytes
    let written = write_grid_to_bytes(&rooms).expect("write to bytes");
    let original = std::fs::read(test_data_path("rooms.txt")).expect("read rooms.txt");
    rp.compare_strings(&original, &written);

    // Index 9: written text reads back to the same grid
    let reread = read_grid_from_bytes(&written, &GridConfig::default()).expect("reread");
    rp.compare_grids(&rooms, &reread);

    assert!(rp.cleanup(), "gridio regression test failed");
}

#[test]
fn ragged_map_is_malformed() {
    let err = read_grid_file(test_data_path("ragged.txt"), &GridConfig::default()).unwrap_err();
    assert!(err.is_malformed_grid());
    assert!(!err.is_source_unavailable());
    eprintln!("ragged.txt: {}", err);
}

#[test]
fn missing_map_is_unavailable() {
    let err = read_grid_file(test_data_path("missing.txt"), &GridConfig::default()).unwrap_err();
    assert!(err.is_source_unavailable());
    assert!(!err.is_malformed_grid());
}

#[test]
fn crlf_kept_when_stripping_disabled() {
    let config = GridConfig::default().with_strip_carriage_return(false);
    let grid = read_grid_file(test_data_path("rooms_crlf.txt"), &config).expect("read crlf");
    assert_eq!(grid.width(), 21);
    assert_eq!(grid.get(0, 20), Some(b'\r'));
}
