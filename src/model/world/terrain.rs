use super::chunk::CHUNK_SIZE;

/// Column heights for a chunk, indexed `[x][z]`.
///
/// A column of height `h` is filled from the bottom of the rendered chunk up to
/// world height `h`. Heights outside `0..16` are allowed: `-1` empties the
/// column, anything from `15` up fills it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    heights: [[i32; CHUNK_SIZE]; CHUNK_SIZE],
}

impl HeightMap {
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> i32) -> Self {
        let mut heights = [[0; CHUNK_SIZE]; CHUNK_SIZE];
        for (x, column) in heights.iter_mut().enumerate() {
            for (z, h) in column.iter_mut().enumerate() {
                *h = f(x, z);
            }
        }
        Self { heights }
    }

    pub fn flat(height: i32) -> Self {
        Self::from_fn(|_, _| height)
    }

    /// Stepped hill peaking at column (8, 8).
    pub fn pyramid() -> Self {
        let top = CHUNK_SIZE as i32 - 1;
        Self::from_fn(|x, z| top - (8 - x as i32).abs() - (8 - z as i32).abs())
    }

    pub fn height(&self, x: usize, z: usize) -> i32 {
        self.heights[x][z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pyramid_peaks_in_the_middle() {
        let map = HeightMap::pyramid();
        assert_eq!(map.height(8, 8), 15);
        assert_eq!(map.height(0, 0), -1);
        assert_eq!(map.height(15, 8), 8);
        assert_eq!(map.height(8, 0), 7);
    }

    #[test]
    fn flat_map_is_uniform() {
        let map = HeightMap::flat(4);
        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                assert_eq!(map.height(x, z), 4);
            }
        }
    }
}
