use heap_arena::Segment;

/// Address-ordered collection of free segments.
///
/// The list is kept sorted by ascending `start` so that neighbors can be
/// detected and coalesced, and so that the first-fit scan visits candidates
/// in address order. Scans are linear by design; the segment count stays
/// small in this simulation.
///
/// # Invariants
/// - `start` values are strictly increasing in stored order.
/// - Segments are pairwise disjoint and every `len` is non-zero.
/// - After [`coalesce`](Self::coalesce), no two consecutive segments abut.
#[derive(Debug, Default)]
pub struct FreeList {
    segments: Vec<Segment>,
}

impl FreeList {
    /// A free list holding the single segment `{0, capacity}`.
    pub fn spanning(capacity: usize) -> Self {
        Self {
            segments: vec![Segment::new(0, capacity)],
        }
    }

    /// Index of the first segment with `len >= size`, in address order.
    ///
    /// First fit: the first match wins even when a tighter fit exists later.
    pub fn first_fit(&self, size: usize) -> Option<usize> {
        self.segments.iter().position(|seg| seg.len >= size)
    }

    /// Carve `size` bytes from the front of the segment at `index` and
    /// return the carved range.
    ///
    /// The residual keeps the tail of the original range. An exact fit
    /// consumes the segment entirely, so no zero-length residual survives.
    pub fn carve(&mut self, index: usize, size: usize) -> Segment {
        debug_assert!(size > 0 && size <= self.segments[index].len);
        let carved = Segment::new(self.segments[index].start, size);
        if size == self.segments[index].len {
            self.segments.remove(index);
        } else {
            self.segments[index].start += size;
            self.segments[index].len -= size;
        }
        carved
    }

    /// Insert `seg` at its address-ordered position.
    ///
    /// The insertion point is the first segment whose `start` exceeds
    /// `seg.start`, or the tail when none does.
    pub fn insert(&mut self, seg: Segment) {
        let at = self
            .segments
            .iter()
            .position(|existing| existing.start > seg.start)
            .unwrap_or(self.segments.len());
        self.segments.insert(at, seg);
    }

    /// Merge every pair of exactly abutting segments.
    ///
    /// A freshly grown segment is compared against its new successor before
    /// the scan advances, so the list is maximally merged on return.
    /// Idempotent; returns the number of merges performed.
    pub fn coalesce(&mut self) -> usize {
        let mut merged = 0;
        let mut i = 0;
        while i + 1 < self.segments.len() {
            if self.segments[i].abuts(self.segments[i + 1]) {
                self.segments[i].len += self.segments[i + 1].len;
                self.segments.remove(i + 1);
                merged += 1;
            } else {
                i += 1;
            }
        }
        merged
    }

    /// Total free bytes across all segments.
    pub fn total_bytes(&self) -> usize {
        self.segments.iter().map(|seg| seg.len).sum()
    }

    /// The segments in ascending address order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts(list: &FreeList) -> Vec<usize> {
        list.segments().iter().map(|seg| seg.start).collect()
    }

    #[test]
    fn spanning_covers_the_whole_arena() {
        let list = FreeList::spanning(1024);
        assert_eq!(list.segments(), &[Segment::new(0, 1024)]);
        assert_eq!(list.total_bytes(), 1024);
    }

    #[test]
    fn first_fit_takes_the_first_match_not_the_tightest() {
        let mut list = FreeList::default();
        list.insert(Segment::new(0, 200));
        list.insert(Segment::new(300, 100));

        // both segments fit, the earlier (larger) one wins
        assert_eq!(list.first_fit(100), Some(0));
        // only the later one fits... nothing beyond 200 exists
        assert_eq!(list.first_fit(150), Some(0));
        assert_eq!(list.first_fit(201), None);
    }

    #[test]
    fn first_fit_accepts_an_exact_length_match() {
        let mut list = FreeList::default();
        list.insert(Segment::new(0, 100));
        assert_eq!(list.first_fit(100), Some(0));
        assert_eq!(list.first_fit(101), None);
    }

    #[test]
    fn carve_takes_the_front_and_keeps_the_tail() {
        let mut list = FreeList::spanning(1024);

        let carved = list.carve(0, 100);

        assert_eq!(carved, Segment::new(0, 100));
        assert_eq!(list.segments(), &[Segment::new(100, 924)]);
    }

    #[test]
    fn exact_fit_carve_removes_the_segment() {
        let mut list = FreeList::default();
        list.insert(Segment::new(0, 100));
        list.insert(Segment::new(300, 824));

        let carved = list.carve(0, 100);

        assert_eq!(carved, Segment::new(0, 100));
        // no zero-length residual may survive
        assert_eq!(list.segments(), &[Segment::new(300, 824)]);
    }

    #[test]
    fn insert_keeps_ascending_start_order() {
        let mut list = FreeList::default();
        list.insert(Segment::new(300, 50));
        list.insert(Segment::new(0, 50));
        list.insert(Segment::new(100, 50));
        list.insert(Segment::new(500, 50));

        assert_eq!(starts(&list), vec![0, 100, 300, 500]);
    }

    #[test]
    fn coalesce_merges_abutting_neighbors_only() {
        let mut list = FreeList::default();
        list.insert(Segment::new(0, 100));
        list.insert(Segment::new(300, 824));

        assert_eq!(list.coalesce(), 0);
        assert_eq!(starts(&list), vec![0, 300]);
    }

    #[test]
    fn coalesce_reexamines_a_grown_segment() {
        // three mutually abutting segments collapse in a single pass
        let mut list = FreeList::default();
        list.insert(Segment::new(0, 100));
        list.insert(Segment::new(100, 200));
        list.insert(Segment::new(300, 724));

        assert_eq!(list.coalesce(), 2);
        assert_eq!(list.segments(), &[Segment::new(0, 1024)]);
    }

    #[test]
    fn coalesce_is_idempotent() {
        let mut list = FreeList::default();
        list.insert(Segment::new(0, 100));
        list.insert(Segment::new(100, 100));
        list.insert(Segment::new(400, 100));

        assert_eq!(list.coalesce(), 1);
        assert_eq!(list.coalesce(), 0);
        assert_eq!(list.segments(), &[Segment::new(0, 200), Segment::new(400, 100)]);
    }
}
