//! Ordered collection of collected items.
//!
//! Grows only via pickup in normal play. Indexed access signals absence
//! with `None` rather than panicking.

#[derive(Debug, Clone)]
pub struct Inventory<T> {
    items: Vec<T>,
}

impl<T> Inventory<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends; insertion order is the display order.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Inventory<T> {
    /// Removes the first structural match; no-op when absent.
    pub fn remove(&mut self, item: &T) {
        if let Some(index) = self.items.iter().position(|i| i == item) {
            self.items.remove(index);
        }
    }
}

impl<T> Default for Inventory<T> {
    fn default() -> Self {
        Self::new()
    }
}
