use crate::types::Chunk;

/// Words per chunk sent to the per-chunk summary request.
pub const CHUNK_WORDS: usize = 500;

/// Split `text` on whitespace and partition the words into consecutive
/// chunks of `chunk_words` words; only the last chunk may be shorter.
pub fn split_into_chunks(text: &str, chunk_words: usize) -> Vec<Chunk> {
    let words: Vec<&str> = text.split_whitespace().collect();

    words
        .chunks(chunk_words.max(1))
        .enumerate()
        .map(|(index, words)| Chunk {
            index,
            text: words.join(" "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    fn rejoined(chunks: &[Chunk]) -> Vec<String> {
        chunks
            .iter()
            .flat_map(|c| c.text.split(' ').map(str::to_string))
            .collect()
    }

    #[test]
    fn empty_text_has_no_chunks() {
        assert!(split_into_chunks("", CHUNK_WORDS).is_empty());
        assert!(split_into_chunks(" \n\t ", CHUNK_WORDS).is_empty());
    }

    #[test]
    fn short_text_is_one_chunk() {
        let chunks = split_into_chunks(&words(42), CHUNK_WORDS);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].text, words(42));
    }

    #[test]
    fn exact_multiple_has_no_trailing_chunk() {
        let chunks = split_into_chunks(&words(1000), CHUNK_WORDS);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.text.split(' ').count() == 500));
    }

    #[test]
    fn last_chunk_holds_the_remainder() {
        let chunks = split_into_chunks(&words(1201), CHUNK_WORDS);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.text.split(' ').count()).collect();
        assert_eq!(sizes, vec![500, 500, 201]);
        assert_eq!(
            chunks.iter().map(|c| c.part()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn chunks_partition_the_words_exactly() {
        for n in [1, 499, 500, 501, 999, 1500, 2345] {
            let text = words(n);
            let chunks = split_into_chunks(&text, CHUNK_WORDS);
            let original: Vec<String> = text.split_whitespace().map(str::to_string).collect();
            assert_eq!(rejoined(&chunks), original, "n = {n}");
        }
    }

    #[test]
    fn irregular_whitespace_is_collapsed() {
        let chunks = split_into_chunks("  one\ttwo\n\nthree   four ", 3);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "one two three");
        assert_eq!(chunks[1].text, "four");
    }
}
