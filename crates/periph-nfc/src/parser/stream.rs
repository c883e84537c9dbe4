use winnow::{Bytes, Partial};

pub type Stream<'i> = Partial<&'i Bytes>;

pub fn new(b: &[u8]) -> Stream<'_> {
    Partial::new(Bytes::new(b))
}

pub trait StreamExt {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StreamExt for Stream<'_> {
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}
