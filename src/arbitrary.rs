use crate::Pointer;
use alloc::{boxed::Box, string::String, vec::Vec};
use quickcheck::Arbitrary;

impl Arbitrary for Pointer {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = usize::arbitrary(g) % g.size();
        (0..size).fold(Pointer::empty(), |ptr, _| {
            ptr.append_property(&String::arbitrary(g))
        })
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let tokens: Vec<String> = self.tokens().map(String::from).collect();
        Box::new((0..tokens.len()).map(move |i| {
            tokens
                .iter()
                .enumerate()
                .filter_map(|(j, token)| (i != j).then_some(token.as_str()))
                .fold(Pointer::empty(), |ptr, token| ptr.append_property(token))
        }))
    }
}
