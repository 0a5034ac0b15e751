use wordcount_core::{parallel_count_words, WordTally, DEFAULT_PARALLEL_CHUNK};

fn count_words(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

fn tally_in_chunks(bytes: &[u8], chunk_len: usize) -> u64 {
    let mut tally = WordTally::new();
    for chunk in bytes.chunks(chunk_len) {
        tally.feed(chunk);
    }
    tally.finish()
}

#[test]
fn mixed_whitespace_runs_count_as_single_separators() {
    let body = "a  b\tc\n\nd";
    assert_eq!(count_words(body), 4);
    assert_eq!(tally_in_chunks(body.as_bytes(), body.len()), 4);
}

#[test]
fn leading_and_trailing_whitespace_adds_nothing() {
    assert_eq!(tally_in_chunks(b"  \n hello world \r\n", 64), 2);
    assert_eq!(tally_in_chunks(b"", 8), 0);
    assert_eq!(tally_in_chunks(b" \t\n\x0b\x0c\r ", 3), 0);
}

#[test]
fn count_is_independent_of_chunk_boundaries() {
    let body = "The quick\u{a0}brown fox\u{3000}jumps över the lazy dög\u{2028}again ";
    let expected = count_words(body);
    assert_eq!(expected, 10);
    for chunk_len in 1..=body.len() {
        assert_eq!(
            tally_in_chunks(body.as_bytes(), chunk_len),
            expected,
            "chunk_len={chunk_len}"
        );
    }
}

#[test]
fn word_spanning_chunks_is_counted_once() {
    let mut tally = WordTally::new();
    tally.feed(b"hel");
    tally.feed(b"lo wo");
    tally.feed(b"rld");
    assert_eq!(tally.words(), 2);
    assert_eq!(tally.finish(), 2);
}

#[test]
fn invalid_utf8_is_part_of_a_word() {
    assert_eq!(tally_in_chunks(b"ab\xff\xfecd ef", 2), 2);
    assert_eq!(tally_in_chunks(b"\xff \xfe", 1), 2);
}

#[test]
fn truncated_sequence_at_end_of_stream_still_counts() {
    // First byte of a three-byte sequence with nothing after it.
    assert_eq!(tally_in_chunks(b"word \xe3", 1), 2);
}

#[test]
fn hundred_word_document() {
    let body = vec!["lorem"; 100].join(" ");
    assert_eq!(tally_in_chunks(body.as_bytes(), 7), 100);
}

#[test]
fn parallel_count_matches_streaming_tally() {
    let small = "alpha beta\tgamma\n\ndelta";
    let large = "lorem ipsum dolor\u{a0}sit amet, consectetur\r\n".repeat(5_000);
    for body in [small.to_string(), large] {
        let expected = tally_in_chunks(body.as_bytes(), 4096);
        assert_eq!(parallel_count_words(body.as_bytes(), DEFAULT_PARALLEL_CHUNK), expected);
        assert_eq!(parallel_count_words(body.as_bytes(), 16), expected);
        assert_eq!(parallel_count_words(body.as_bytes(), 1), expected);
    }
}

#[test]
fn parallel_split_inside_a_whitespace_run() {
    // The midpoint of this body falls inside the long run of spaces.
    let body = format!("one two{}three four", " ".repeat(40));
    let bytes = body.as_bytes();
    assert_eq!(parallel_count_words(bytes, 8), 4);
    for chunk_size in 1..bytes.len() {
        assert_eq!(parallel_count_words(bytes, chunk_size), 4, "chunk_size={chunk_size}");
    }
}

#[test]
fn parallel_count_handles_unsplittable_and_odd_bodies() {
    assert_eq!(parallel_count_words(b"", 1), 0);
    assert_eq!(parallel_count_words(&[b'x'; 1000], 10), 1);
    assert_eq!(parallel_count_words(b"          ", 2), 0);
    // Multi-byte whitespace is never a split point but still separates words.
    let body = "a\u{3000}b\u{3000}c\u{3000}d";
    assert_eq!(parallel_count_words(body.as_bytes(), 2), 4);
    assert_eq!(parallel_count_words(b"ab\xff \xfecd ef", 3), 3);
}
