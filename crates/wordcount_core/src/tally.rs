/// Body size below which [`parallel_count_words`] stops splitting.
pub const DEFAULT_PARALLEL_CHUNK: usize = 20_000;

/// Streaming whitespace word counter.
///
/// A word is a maximal run of non-whitespace characters, whitespace being
/// `char::is_whitespace`. Chunks may split UTF-8 sequences anywhere; the
/// incomplete tail is carried into the next `feed`. Bytes that are not valid
/// UTF-8 count as part of a word.
#[derive(Debug, Default, Clone)]
pub struct WordTally {
    words: u64,
    in_word: bool,
    pending: Vec<u8>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        let joined: Vec<u8>;
        let input: &[u8] = if self.pending.is_empty() {
            chunk
        } else {
            let mut carried = std::mem::take(&mut self.pending);
            carried.extend_from_slice(chunk);
            joined = carried;
            &joined
        };

        let (complete, tail) = input.split_at(incomplete_tail_start(input));
        self.scan(complete);
        self.pending.extend_from_slice(tail);
    }

    /// Words seen so far, not counting a carried partial sequence.
    pub fn words(&self) -> u64 {
        self.words
    }

    pub fn finish(mut self) -> u64 {
        // A truncated sequence at end of stream is just invalid bytes.
        let tail = std::mem::take(&mut self.pending);
        self.scan(&tail);
        self.words
    }

    fn scan(&mut self, bytes: &[u8]) {
        for chunk in bytes.utf8_chunks() {
            for c in chunk.valid().chars() {
                self.step(c.is_whitespace());
            }
            if !chunk.invalid().is_empty() {
                self.step(false);
            }
        }
    }

    fn step(&mut self, whitespace: bool) {
        if whitespace {
            self.in_word = false;
        } else if !self.in_word {
            self.in_word = true;
            self.words += 1;
        }
    }
}

/// Count words in a body held in memory, splitting it recursively at ASCII
/// whitespace and counting the halves on the rayon pool.
///
/// Bodies of at most `chunk_size` bytes, or with no whitespace to split at,
/// are counted sequentially. Gives the same result as [`WordTally`].
pub fn parallel_count_words(bytes: &[u8], chunk_size: usize) -> u64 {
    if bytes.len() <= chunk_size.max(1) {
        return sequential_count(bytes);
    }
    let Some(split) = whitespace_split(bytes) else {
        return sequential_count(bytes);
    };
    let (left, right) = bytes.split_at(split);
    let (left, right) = rayon::join(
        || parallel_count_words(left, chunk_size),
        || parallel_count_words(right, chunk_size),
    );
    left + right
}

fn sequential_count(bytes: &[u8]) -> u64 {
    let mut tally = WordTally::new();
    tally.feed(bytes);
    tally.finish()
}

/// A split point near the middle where one side ends or begins with an ASCII
/// whitespace byte, so no word straddles it. ASCII bytes never occur inside a
/// multi-byte UTF-8 sequence. Always strictly between `0` and `bytes.len()`.
fn whitespace_split(bytes: &[u8]) -> Option<usize> {
    let mid = bytes.len() / 2;
    if let Some(offset) = bytes[mid..].iter().position(u8::is_ascii_whitespace) {
        // Right half starts with the whitespace byte.
        return Some(mid + offset);
    }
    // Left half ends with the whitespace byte.
    bytes[..mid]
        .iter()
        .rposition(u8::is_ascii_whitespace)
        .map(|index| index + 1)
}

/// Index where a trailing, not yet complete UTF-8 sequence begins, or `bytes.len()`.
fn incomplete_tail_start(bytes: &[u8]) -> usize {
    let len = bytes.len();
    for back in 1..=len.min(3) {
        let byte = bytes[len - back];
        if byte & 0xC0 == 0x80 {
            continue;
        }
        let needed = match byte {
            0xF0..=0xFF => 4,
            0xE0..=0xEF => 3,
            0xC0..=0xDF => 2,
            _ => 1,
        };
        return if needed > back { len - back } else { len };
    }
    len
}
