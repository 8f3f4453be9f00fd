//! Collection building with a positional selection DSL.
//!
//! A [`CollectionBuilder`] holds one mutation slot per element. Selector
//! methods choose which positions subsequent [`with`](CollectionBuilder::with)
//! calls affect. Relative selectors (`the_next`, `the_previous`) continue from
//! the range the previous selector resolved to.

pub mod selector;

use crate::error::{Error, SelectionError};
use chrono::Utc;
use fabrication_core::Shape;
use fabrication_generator::{GeneratorRegistry, InstanceBuilder, Mutation};
use selector::{resolve, IndexRange, Selector};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Size of a collection unless [`CollectionBuilder::of_size`] says otherwise.
pub const DEFAULT_COLLECTION_SIZE: usize = 5;

/// Builds a fixed-size collection of `T`, mutating chosen positions.
///
/// # Example
///
/// ```ignore
/// let people = CollectionBuilder::<Person>::new()
///     .all()
///     .with(|p| p.name = "bob".into())?
///     .the_first(2)
///     .with(|p| p.title = Some("Mr".into()))?
///     .the_last(1)
///     .with(|p| p.title = Some("Miss".into()))?
///     .fabricate()?;
/// ```
pub struct CollectionBuilder<T: Shape> {
    registry: GeneratorRegistry,
    size: usize,
    slots: Vec<Vec<Mutation<T>>>,
    selector: Selector,
    anchor: IndexRange,
    /// Indices of the current selector, resolved on the first `with`
    resolved: Option<Vec<usize>>,
}

impl<T: Shape> CollectionBuilder<T> {
    /// Builder of [`DEFAULT_COLLECTION_SIZE`] elements using the default registry.
    pub fn new() -> Self {
        Self::with_registry(GeneratorRegistry::default())
    }

    /// Builder of [`DEFAULT_COLLECTION_SIZE`] elements using `registry`.
    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        let mut builder = Self {
            registry,
            size: 0,
            slots: Vec::new(),
            selector: Selector::All,
            anchor: IndexRange::full(0),
            resolved: None,
        };
        builder.reset(DEFAULT_COLLECTION_SIZE);
        builder
    }

    /// Resize the collection.
    ///
    /// Discards every attached mutation and resets the anchor to cover the
    /// whole collection. The active selector stays active and is resolved
    /// again against the new size on the next `with`.
    pub fn of_size(&mut self, size: usize) -> Result<&mut Self, SelectionError> {
        if size == 0 {
            return Err(SelectionError::EmptyCollection);
        }
        debug!(shape = T::NAME, size, "Resizing collection");
        self.reset(size);
        Ok(self)
    }

    fn reset(&mut self, size: usize) {
        self.size = size;
        self.slots = (0..size).map(|_| Vec::new()).collect();
        self.anchor = IndexRange::full(size);
        self.resolved = None;
    }

    /// Select every element.
    pub fn all(&mut self) -> &mut Self {
        self.select(Selector::All)
    }

    /// Select the first `n` elements.
    pub fn the_first(&mut self, n: i64) -> &mut Self {
        self.select(Selector::First(n))
    }

    /// Select from just past the last selected range through `n` more
    /// elements, `n + 1` in total.
    pub fn the_next(&mut self, n: i64) -> &mut Self {
        self.select(Selector::Next(n))
    }

    /// Select the last `n` elements.
    pub fn the_last(&mut self, n: i64) -> &mut Self {
        self.select(Selector::Last(n))
    }

    /// Select the element just before the last selected range and the `n`
    /// preceding it, `n + 1` in total.
    pub fn the_previous(&mut self, n: i64) -> &mut Self {
        self.select(Selector::Previous(n))
    }

    /// Select the element at `index`.
    pub fn the_nth(&mut self, index: i64) -> &mut Self {
        self.select(Selector::Nth(index))
    }

    /// Select positions `start` through `end`, both inclusive.
    pub fn the_slice(&mut self, start: i64, end: i64) -> &mut Self {
        self.select(Selector::Slice { start, end })
    }

    /// Select every `n`th element: positions `n - 1`, `2n - 1`, and so on.
    pub fn every_nth(&mut self, n: i64) -> &mut Self {
        self.select(Selector::EveryNth(n))
    }

    /// Select every position `predicate` accepts.
    pub fn predicated<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(usize) -> bool + 'static,
    {
        self.select(Selector::Predicate(Rc::new(predicate)))
    }

    /// Select `n` distinct random positions.
    ///
    /// The seed is taken from the clock when the selector is activated, so
    /// every `with` until the next selector hits the same positions.
    pub fn random(&mut self, n: i64) -> &mut Self {
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        self.random_seeded(n, seed)
    }

    /// Select `n` distinct positions drawn deterministically from `seed`.
    pub fn random_seeded(&mut self, n: i64, seed: u64) -> &mut Self {
        self.select(Selector::Random { count: n, seed })
    }

    /// Activate an explicit selector.
    ///
    /// The named entry points above are shorthands for this.
    pub fn select(&mut self, selector: Selector) -> &mut Self {
        self.selector = selector;
        self.resolved = None;
        self
    }

    /// Attach `mutation` to every position the current selector covers.
    ///
    /// The selector is resolved on the first call and reused by later calls
    /// until another selector is activated. A failed resolution attaches
    /// nothing and leaves the builder unchanged.
    pub fn with<F>(&mut self, mutation: F) -> Result<&mut Self, SelectionError>
    where
        F: Fn(&mut T) + 'static,
    {
        self.attach(Rc::new(mutation))
    }

    /// Alias of [`with`](Self::with).
    pub fn and<F>(&mut self, mutation: F) -> Result<&mut Self, SelectionError>
    where
        F: Fn(&mut T) + 'static,
    {
        self.with(mutation)
    }

    fn attach(&mut self, mutation: Mutation<T>) -> Result<&mut Self, SelectionError> {
        if self.resolved.is_none() {
            let resolution = resolve(&self.selector, self.size, self.anchor)?;
            debug!(
                shape = T::NAME,
                selector = ?self.selector,
                indices = ?resolution.indices,
                "Resolved selector"
            );
            if let Some(anchor) = resolution.anchor {
                self.anchor = anchor;
            }
            self.resolved = Some(resolution.indices);
        }

        let indices = self.resolved.as_deref().unwrap_or_default();
        for &index in indices {
            self.slots[index].push(Rc::clone(&mutation));
        }
        Ok(self)
    }

    /// Build the collection.
    ///
    /// Each element is populated from the registry and then receives its
    /// slot's mutations in attachment order. Every call yields fresh
    /// instances.
    pub fn fabricate(&self) -> Result<Vec<T>, Error> {
        debug!(shape = T::NAME, size = self.size, "Fabricating collection");
        self.slots
            .iter()
            .map(|slot| {
                InstanceBuilder::with_mutations(self.registry.clone(), slot.clone())
                    .fabricate()
                    .map_err(Error::from)
            })
            .collect()
    }

    /// Number of elements the collection will hold.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The range relative selectors continue from.
    pub fn anchor(&self) -> IndexRange {
        self.anchor
    }

    /// The active selector.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Positions the active selector resolved to, if it has been used.
    pub fn selected(&self) -> Option<&[usize]> {
        self.resolved.as_deref()
    }

    /// Number of mutations attached to the element at `index`.
    pub fn slot_len(&self, index: usize) -> Option<usize> {
        self.slots.get(index).map(Vec::len)
    }

    /// The registry used for default values.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }
}

impl<T: Shape> Default for CollectionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Shape> fmt::Debug for CollectionBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionBuilder")
            .field("shape", &T::NAME)
            .field("size", &self.size)
            .field("selector", &self.selector)
            .field("anchor", &self.anchor)
            .field("resolved", &self.resolved)
            .finish()
    }
}
