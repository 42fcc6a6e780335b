use rand::Rng;

/// A uniformly shuffled sequence of bank indices that can be drawn from.
///
/// Fisher–Yates gives every permutation equal probability, so taking the
/// first `n` draws is an unbiased `n`-subset of the bank.
pub struct Drawpile {
    order: Vec<usize>,
    cursor: usize,
}

impl Drawpile {
    /// Build a shuffled pile over the indices `0..len`.
    pub fn new_shuffled<R: Rng>(rng: &mut R, len: usize) -> Self {
        let mut order: Vec<usize> = (0..len).collect();

        // Fisher-Yates shuffle
        for i in (1..order.len()).rev() {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }

        Drawpile { order, cursor: 0 }
    }

    /// Draw one index; panics if the pile is exhausted.
    pub fn draw(&mut self) -> usize {
        assert!(self.cursor < self.order.len(), "Drawpile exhausted");
        let idx = self.order[self.cursor];
        self.cursor += 1;
        idx
    }

    /// Draw `n` indices at once.
    pub fn draw_n(&mut self, n: usize) -> Vec<usize> {
        (0..n).map(|_| self.draw()).collect()
    }

    /// Indices still available.
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }
}
