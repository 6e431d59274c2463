use crate::core::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(rows: i32, columns: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { i: rows, j: columns },
        }
    }

    pub fn rows(&self) -> i32 {
        self.extent.i
    }

    pub fn columns(&self) -> i32 {
        self.extent.j
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.extent.i && pos.j >= 0 && pos.j < self.extent.j
    }

    pub fn area(&self) -> i32 {
        self.extent.i * self.extent.j
    }
}
