/// Half-open index range `[start, end)` into the number list, owned by one
/// counting worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ChunkRange {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl ChunkRange {
    pub(crate) fn len(&self) -> usize {
        self.end - self.start
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub(crate) type PrimeCount = usize;
