//! The segmentation interface under test

/// Splits text into grapheme clusters
///
/// Implementations return the clusters in order; concatenated they must
/// reproduce `text`.
pub trait Segmenter {
    /// Segment `text` into clusters
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<T: Segmenter + ?Sized> Segmenter for &T {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).segment(text)
    }
}

impl<T: Segmenter + ?Sized> Segmenter for Box<T> {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).segment(text)
    }
}

/// Extended grapheme clusters from `unicode-segmentation`
#[cfg(feature = "unicode-segmentation")]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeGraphemes;

#[cfg(feature = "unicode-segmentation")]
impl Segmenter for UnicodeGraphemes {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        use unicode_segmentation::UnicodeSegmentation;

        text.graphemes(true).collect()
    }
}
