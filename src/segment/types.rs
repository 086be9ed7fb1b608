use std::ops::Range;

/// A segmented, filtered unit of the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    index: usize,
    text: String,
    span: Range<usize>,
    char_span: Range<usize>,
    keywords: Vec<String>,
}

impl Sentence {
    /// Creates a sentence. `index` is 1-based; `span` and `char_span` locate
    /// the text in the document in bytes and in chars respectively.
    pub fn new(
        index: usize,
        text: String,
        span: Range<usize>,
        char_span: Range<usize>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            index,
            text,
            span,
            char_span,
            keywords,
        }
    }

    /// 1-based position among the kept sentences.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range of the trimmed sentence inside the original document.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Char (Unicode scalar) range of the trimmed sentence inside the document.
    ///
    /// This is what clients indexing the text as a string of characters expect.
    pub fn char_span(&self) -> Range<usize> {
        self.char_span.clone()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Retrieval query built from all keywords.
    pub fn query(&self) -> String {
        self.keywords.join(" ")
    }

    /// Retrieval query built from the first `n` keywords.
    pub fn short_query(&self, n: usize) -> String {
        self.keywords
            .iter()
            .take(n)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
