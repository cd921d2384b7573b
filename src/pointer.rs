use std::cell::Cell;
use std::rc::Rc;

use crate::vector::Vec2;

/// The most recent pointer position.
///
/// Input handlers `set` it as events arrive; the frame loop reads it once per frame.
/// Clones share the same position. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct Pointer(Rc<Cell<Vec2>>);

impl Pointer {
    pub fn new(position: Vec2) -> Self {
        Self(Rc::new(Cell::new(position)))
    }

    pub fn set(&self, position: Vec2) {
        self.0.set(position)
    }

    pub fn get(&self) -> Vec2 {
        self.0.get()
    }
}
