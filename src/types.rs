pub type Label = String;
pub type Count = i64;

/// Position of a label within the multiset that owns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct LabelId(usize);

impl LabelId {
    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        LabelId(index)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}
