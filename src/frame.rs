// Copyright (c) 2026 rezky_nightky

#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pixels: Vec<bool>,
    dirty_all: bool,
    dirty_map: Vec<bool>,
    dirty: Vec<usize>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![false; len],
            dirty_all: true,
            dirty_map: vec![false; len],
            dirty: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
        self.dirty_all = true;
        self.dirty_map.fill(false);
        self.dirty.clear();
    }

    pub fn is_dirty_all(&self) -> bool {
        self.dirty_all
    }

    pub fn dirty_indices(&self) -> &[usize] {
        &self.dirty
    }

    pub fn clear_dirty(&mut self) {
        if self.dirty_all {
            self.dirty_all = false;
            self.dirty_map.fill(false);
            self.dirty.clear();
            return;
        }

        for &i in &self.dirty {
            if let Some(v) = self.dirty_map.get_mut(i) {
                *v = false;
            }
        }
        self.dirty.clear();
    }

    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<bool> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn pixel_at_index(&self, i: usize) -> bool {
        self.pixels.get(i).copied().unwrap_or(false)
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    pub fn set(&mut self, x: u16, y: u16, lit: bool) {
        if let Some(i) = self.index(x, y) {
            if self.pixels[i] == lit {
                return;
            }

            self.pixels[i] = lit;
            if !self.dirty_all && !self.dirty_map[i] {
                self.dirty_map[i] = true;
                self.dirty.push(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_makes_pixels_dark() {
        let mut f = Frame::new(2, 2);
        f.set(0, 0, true);
        assert_eq!(f.get(0, 0), Some(true));
        f.clear();
        assert_eq!(f.get(0, 0), Some(false));
        assert!(f.is_dirty_all());
    }

    #[test]
    fn set_tracks_each_changed_pixel_once() {
        let mut f = Frame::new(3, 3);
        f.clear_dirty();
        f.set(1, 1, true);
        f.set(1, 1, true);
        f.set(2, 0, false);
        assert_eq!(f.dirty_indices(), &[4]);
        f.set(1, 1, false);
        assert_eq!(f.dirty_indices(), &[4]);
        f.clear_dirty();
        assert!(f.dirty_indices().is_empty());
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut f = Frame::new(2, 2);
        f.set(5, 0, true);
        assert_eq!(f.get(5, 0), None);
        assert_eq!(f.lit_count(), 0);
    }
}
