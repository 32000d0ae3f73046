/// An allocator for reusable integer ids.
#[derive(Default, Debug)]
pub struct Bitfield {
    words: Vec<u64>,
}

impl Bitfield {
    /// Returns the smallest id not currently in use.
    pub fn acquire(&mut self) -> u32 {
        for (n, word) in self.words.iter_mut().enumerate() {
            if *word != u64::MAX {
                let bit = word.trailing_ones();
                *word |= 1 << bit;
                return n as u32 * 64 + bit;
            }
        }
        self.words.push(1);
        (self.words.len() as u32 - 1) * 64
    }

    /// Marks a specific id as in use.
    pub fn take(&mut self, id: u32) {
        let n = (id / 64) as usize;
        if self.words.len() <= n {
            self.words.resize(n + 1, 0);
        }
        self.words[n] |= 1 << (id % 64);
    }

    pub fn release(&mut self, id: u32) {
        let n = (id / 64) as usize;
        if let Some(word) = self.words.get_mut(n) {
            *word &= !(1 << (id % 64));
        }
    }
}
