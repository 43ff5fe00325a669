use vek::Vec2;

use crate::error::{Error, Result};

/// Row-major 2-D buffer. Position `(x, y)` lives at `y * width + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    raw: Vec<T>,
    size: Vec2<i32>,
}

fn check_extent(size: Vec2<i32>) -> Result<usize> {
    if size.x < 0 || size.y < 0 {
        return Err(Error::InvalidExtent {
            expected: size.map(|e| e.max(0)),
            actual: size,
        });
    }
    Ok(size.x as usize * size.y as usize)
}

impl<T> Grid<T> {
    pub fn new(size: Vec2<i32>, default: T) -> Result<Self>
    where
        T: Clone,
    {
        let len = check_extent(size)?;
        Ok(Self {
            raw: vec![default; len],
            size,
        })
    }

    pub fn populate_from(size: Vec2<i32>, mut f: impl FnMut(Vec2<i32>) -> T) -> Result<Self> {
        let len = check_extent(size)?;
        let mut raw = Vec::with_capacity(len);
        for y in 0..size.y {
            raw.extend((0..size.x).map(|x| f(Vec2::new(x, y))));
        }
        Ok(Self { raw, size })
    }

    pub fn from_raw(size: Vec2<i32>, raw: Vec<T>) -> Result<Self> {
        if raw.len() != check_extent(size)? {
            return Err(Error::InvalidExtent {
                expected: size,
                actual: Vec2::new(i32::try_from(raw.len()).unwrap_or(i32::MAX), 1),
            });
        }
        Ok(Self { raw, size })
    }

    pub fn size(&self) -> Vec2<i32> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x as usize
    }

    pub fn height(&self) -> usize {
        self.size.y as usize
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn index(&self, pos: Vec2<i32>) -> Option<usize> {
        if (0..self.size.x).contains(&pos.x) && (0..self.size.y).contains(&pos.y) {
            Some(pos.y as usize * self.width() + pos.x as usize)
        } else {
            None
        }
    }

    fn pos(&self, idx: usize) -> Vec2<i32> {
        let w = self.width().max(1);
        Vec2::new((idx % w) as i32, (idx / w) as i32)
    }

    pub fn get(&self, pos: Vec2<i32>) -> Option<&T> {
        let idx = self.index(pos)?;
        Some(&self.raw[idx])
    }

    pub fn get_mut(&mut self, pos: Vec2<i32>) -> Option<&mut T> {
        let idx = self.index(pos)?;
        Some(&mut self.raw[idx])
    }

    /// Returns the previous value, or `None` if `pos` is out of bounds.
    pub fn set(&mut self, pos: Vec2<i32>, value: T) -> Option<T> {
        self.get_mut(pos).map(|slot| std::mem::replace(slot, value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2<i32>, &T)> + '_ {
        self.raw
            .iter()
            .enumerate()
            .map(move |(i, e)| (self.pos(i), e))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Vec2<i32>, &mut T)> + '_ {
        let w = self.width().max(1);
        self.raw
            .iter_mut()
            .enumerate()
            .map(move |(i, e)| (Vec2::new((i % w) as i32, (i / w) as i32), e))
    }

    pub fn row(&self, y: usize) -> &[T] {
        let w = self.width();
        &self.raw[y * w..(y + 1) * w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height()).map(move |y| self.row(y))
    }

    pub fn column(&self, x: usize) -> impl Iterator<Item = &T> + '_ {
        let w = self.width();
        (0..self.height()).map(move |y| &self.raw[y * w + x])
    }

    pub fn map<U>(&self, mut f: impl FnMut(Vec2<i32>, &T) -> U) -> Grid<U> {
        Grid {
            raw: self.iter().map(|(pos, e)| f(pos, e)).collect(),
            size: self.size,
        }
    }

    // transpose()[(y, x)] == self[(x, y)]
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        let (w, h) = (self.width(), self.height());
        let mut raw = Vec::with_capacity(self.raw.len());
        for x in 0..w {
            raw.extend((0..h).map(|y| self.raw[y * w + x].clone()));
        }
        Self {
            raw,
            size: Vec2::new(self.size.y, self.size.x),
        }
    }

    pub fn raw(&self) -> &[T] {
        &self.raw
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [T] {
        &mut self.raw
    }

    pub fn into_raw(self) -> Vec<T> {
        self.raw
    }
}
