//! An in-memory, fixed-capacity table of courses
//!
//! The [`CourseTable`] knows nothing about files or the console. It is an
//! open-addressed hash table keyed by course number, resolving collisions by
//! scanning forward to the next free slot. It never grows: once every slot is
//! taken, inserting a new course number fails with [`Error::Full`].

use std::num::NonZeroUsize;

use tracing::instrument;

use crate::domain::Course;

/// The number of slots a table has unless configured otherwise.
pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(17).unwrap();

/// A fixed-capacity table of courses, keyed by course number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTable {
    slots: Vec<Option<Course>>,
    len: usize,
}

impl Default for CourseTable {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl CourseTable {
    /// Creates an empty table with the given number of slots.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            slots: vec![None; capacity.get()],
            len: 0,
        }
    }

    /// The total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of courses currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no courses.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The home slot of a course number: the sum of its character codes,
    /// modulo the capacity.
    fn slot_for(&self, number: &str) -> usize {
        let sum = number
            .chars()
            .fold(0usize, |acc, c| acc.wrapping_add(c as usize));
        sum % self.slots.len()
    }

    /// The slot indices visited when looking for `number`, starting at its
    /// home slot and wrapping around once.
    fn slots_from_home(&self, number: &str) -> impl Iterator<Item = usize> + use<> {
        let start = self.slot_for(number);
        let capacity = self.slots.len();
        (0..capacity).map(move |offset| (start + offset) % capacity)
    }

    /// Inserts a course, replacing any existing course with the same number.
    ///
    /// Returns the replaced course, if there was one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Full`] if the course number is new and every slot is
    /// already occupied.
    #[instrument(level = "trace", skip(self, course), fields(number = %course.number()))]
    pub fn insert(&mut self, course: Course) -> Result<Option<Course>, Error> {
        let target = self.slots_from_home(course.number()).find(|&i| {
            self.slots[i]
                .as_ref()
                .is_none_or(|existing| existing.number() == course.number())
        });

        let Some(index) = target else {
            return Err(Error::Full {
                capacity: self.capacity(),
            });
        };

        let replaced = self.slots[index].replace(course);
        if replaced.is_none() {
            self.len += 1;
        }
        Ok(replaced)
    }

    /// Looks up a course by its exact course number.
    ///
    /// The scan stops at the first empty slot, or after visiting every slot
    /// once.
    #[must_use]
    pub fn search(&self, number: &str) -> Option<&Course> {
        for index in self.slots_from_home(number) {
            match &self.slots[index] {
                None => return None,
                Some(course) if course.number() == number => return Some(course),
                Some(_) => {}
            }
        }
        None
    }

    /// Returns `true` if a course with this number is stored.
    #[must_use]
    pub fn contains(&self, number: &str) -> bool {
        self.search(number).is_some()
    }

    /// Iterates over the stored courses in slot order.
    ///
    /// This is hash order, not insertion order and not sorted.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.slots.iter().flatten()
    }

    /// Returns a copy of every stored course, in slot order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Course> {
        self.iter().cloned().collect()
    }

    /// Removes every course. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }
}

impl<'a> IntoIterator for &'a CourseTable {
    type Item = &'a Course;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<Course>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}

/// Errors raised by [`CourseTable`] operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// There is no free slot for a new course number.
    #[error("Course table is full (capacity {capacity})")]
    Full {
        /// The number of slots in the table.
        capacity: usize,
    },
}
