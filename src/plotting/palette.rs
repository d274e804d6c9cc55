/// Cycles through a fixed list of colours, one per call
///
/// Lines are coloured in the order they are added, so the palette order decides which curve
/// gets which colour.
#[derive(Debug, Clone)]
pub struct ColorSource<C> {
    colors: Vec<C>,
    index: usize,
}
impl<C: Clone> ColorSource<C> {
    /// Creates a source that starts at the first colour and wraps around at the end
    #[must_use]
    pub fn new(colors: Vec<C>) -> Self {
        Self { colors, index: 0 }
    }

    /// Returns the next colour, or `None` if the palette is empty
    pub fn next_color(&mut self) -> Option<C> {
        let color = self.colors.get(self.index).cloned()?;
        self.index = (self.index + 1) % self.colors.len();
        Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut source = ColorSource::new(vec!["blue", "red", "green"]);
        let drawn: Vec<_> = (0..4).filter_map(|_| source.next_color()).collect();
        assert_eq!(drawn, vec!["blue", "red", "green", "blue"]);
    }

    #[test]
    fn empty_palette() {
        let mut source: ColorSource<u8> = ColorSource::new(vec![]);
        assert_eq!(source.next_color(), None);
    }
}
