//! Rating-ordered view over the catalog.
//!
//! A [`RatingRanker`] is built per query from the live products, then drained
//! highest rating first. Products with equal ratings come out in catalog
//! order. Ratings are compared with [`f64::total_cmp`].

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::product::Product;

struct Ranked<'a> {
    seq: usize,
    product: &'a Product,
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.product
            .rating
            .total_cmp(&other.product.rating)
            // Max-heap: the lower sequence number must compare greater.
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}

/// Max-heap of products keyed by rating, consumed by iteration.
pub struct RatingRanker<'a> {
    heap: BinaryHeap<Ranked<'a>>,
}

impl<'a> RatingRanker<'a> {
    /// Builds the ranking from products given in catalog order.
    pub fn new<I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let heap = products
            .into_iter()
            .enumerate()
            .map(|(seq, product)| Ranked { seq, product })
            .collect();
        Self { heap }
    }

    /// Highest-rated product not yet yielded.
    pub fn peek(&self) -> Option<&'a Product> {
        self.heap.peek().map(|r| r.product)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<'a> Iterator for RatingRanker<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop().map(|r| r.product)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl ExactSizeIterator for RatingRanker<'_> {}
