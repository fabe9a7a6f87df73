//! Line reader round-trip tests
//!
//! Lines written verbatim to a stream must read back unchanged, across the
//! initial buffer size and its doublings.

use georegion_io::{INITIAL_LINE_CAPACITY, Line, LineReader};
use proptest::prelude::*;
use std::io::Cursor;

fn line_of(len: usize) -> Vec<u8> {
    (0..len).map(|i| b"abc#. "[i % 6]).collect()
}

#[test]
fn roundtrip_boundary_lengths() {
    let lengths = [
        0,
        1,
        INITIAL_LINE_CAPACITY - 1,
        INITIAL_LINE_CAPACITY,
        INITIAL_LINE_CAPACITY + 1,
        10_000,
    ];

    let mut data = Vec::new();
    for &len in &lengths {
        data.extend_from_slice(&line_of(len));
        data.push(b'\n');
    }

    let mut reader = LineReader::new(Cursor::new(data));
    for &len in &lengths {
        let bytes = reader.read_line().unwrap().into_bytes().unwrap();
        assert_eq!(bytes, line_of(len), "length {len}");
    }
    assert_eq!(reader.read_line().unwrap(), Line::EndOfStream);
    assert_eq!(reader.lines_read(), lengths.len());
}

#[test]
fn roundtrip_without_final_newline() {
    for len in [1, INITIAL_LINE_CAPACITY, 10_000] {
        let mut reader = LineReader::new(Cursor::new(line_of(len)));
        assert_eq!(reader.read_line().unwrap(), Line::Text(line_of(len)));
        assert_eq!(reader.read_line().unwrap(), Line::EndOfStream);
    }
}

#[test]
fn very_long_line() {
    let len = 1 << 20;
    let mut data = line_of(len);
    data.push(b'\n');
    let mut reader = LineReader::new(Cursor::new(data));
    match reader.read_line().unwrap() {
        Line::Text(bytes) => assert_eq!(bytes.len(), len),
        other => panic!("unexpected {other:?}"),
    }
}

proptest! {
    #[test]
    fn lines_roundtrip(
        lines in proptest::collection::vec(
            proptest::collection::vec(any::<u8>().prop_filter("no newline", |b| *b != b'\n'), 0..300),
            0..8,
        ),
        final_newline in any::<bool>(),
    ) {
        let mut data = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            data.extend_from_slice(line);
            if i + 1 < lines.len() || final_newline {
                data.push(b'\n');
            }
        }

        let read: Vec<Vec<u8>> = LineReader::new(Cursor::new(data))
            .collect::<Result<_, _>>()
            .unwrap();

        // A final empty line without a newline is indistinguishable from
        // end of stream
        let mut expected = lines.clone();
        if !final_newline && expected.last().is_some_and(|l| l.is_empty()) {
            expected.pop();
        }
        prop_assert_eq!(read, expected);
    }
}
