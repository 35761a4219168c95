use rand::Rng;

use super::config::{Orientation, OverlayConfig};

/// Smallest line thickness in pixels (inclusive).
pub const MIN_THICKNESS: i32 = 6;
/// Largest line thickness in pixels (exclusive).
pub const MAX_THICKNESS: i32 = 13;

/// Precomputed offsets and thicknesses for every line of an overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineLayout {
    /// Sorted main-axis offsets. Empty when lines are evenly spaced.
    pub positions: Vec<i32>,
    /// One thickness per line, each in `MIN_THICKNESS..MAX_THICKNESS`.
    pub thicknesses: Vec<i32>,
    /// Gap between evenly spaced lines (`extent / line_count`).
    pub spacing: i32,
}

impl LineLayout {
    /// Lay out `config.line_count` lines on a `width` x `height` surface.
    ///
    /// Both dimensions must be positive; callers only compute a layout once
    /// the surface has a concrete size.
    pub fn compute<R: Rng + ?Sized>(
        config: &OverlayConfig,
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Self {
        let extent = config.orientation.extent(width, height);
        let count = config.line_count;

        let mut positions = Vec::with_capacity(if config.randomize { count } else { 0 });
        let mut thicknesses = Vec::with_capacity(count);
        for _ in 0..count {
            if config.randomize {
                positions.push(rng.gen_range(0..extent));
            }
            thicknesses.push(rng.gen_range(MIN_THICKNESS..MAX_THICKNESS));
        }
        positions.sort_unstable();

        let spacing = if count == 0 {
            0
        } else {
            extent / i32::try_from(count).unwrap_or(i32::MAX)
        };

        Self {
            positions,
            thicknesses,
            spacing,
        }
    }

    pub fn len(&self) -> usize {
        self.thicknesses.len()
    }

    /// Main-axis offset of line `index`.
    pub fn offset(&self, index: usize) -> i32 {
        match self.positions.get(index) {
            Some(&pos) => pos,
            None => index as i32 * self.spacing,
        }
    }
}

/// Axis-aligned rectangle in surface pixels, right/bottom exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Rectangle of a line at `offset` with the given `thickness`, spanning
    /// the full cross axis of a `width` x `height` surface.
    pub fn line(
        orientation: Orientation,
        offset: i32,
        thickness: i32,
        width: i32,
        height: i32,
    ) -> Self {
        match orientation {
            Orientation::Vertical => Rect {
                left: offset,
                top: 0,
                right: offset + thickness,
                bottom: height,
            },
            Orientation::Horizontal => Rect {
                left: 0,
                top: offset,
                right: width,
                bottom: offset + thickness,
            },
        }
    }

    #[cfg(test)]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[cfg(test)]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn config(line_count: usize, orientation: Orientation, randomize: bool) -> OverlayConfig {
        OverlayConfig {
            colors: vec!["green".into()],
            line_count,
            orientation,
            randomize,
            ..Default::default()
        }
    }

    #[test]
    fn even_spacing_uses_integer_division() {
        let mut rng = StdRng::seed_from_u64(7);
        let layout = LineLayout::compute(&config(7, Orientation::Vertical, false), 1000, 50, &mut rng);

        assert!(layout.positions.is_empty());
        assert_eq!(layout.spacing, 142);
        for n in 0..7 {
            assert_eq!(layout.offset(n), n as i32 * (1000 / 7));
        }
    }

    #[test]
    fn horizontal_spacing_uses_height() {
        let mut rng = StdRng::seed_from_u64(1);
        let layout =
            LineLayout::compute(&config(4, Orientation::Horizontal, false), 10, 400, &mut rng);
        let offsets: Vec<_> = (0..4).map(|i| layout.offset(i)).collect();
        assert_eq!(offsets, vec![0, 100, 200, 300]);
    }

    #[test]
    fn random_positions_are_sorted_and_in_range() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout =
                LineLayout::compute(&config(25, Orientation::Vertical, true), 640, 480, &mut rng);

            assert_eq!(layout.positions.len(), 25);
            assert!(layout.positions.windows(2).all(|w| w[0] <= w[1]));
            assert!(layout.positions.iter().all(|&p| (0..640).contains(&p)));
            for (i, &pos) in layout.positions.iter().enumerate() {
                assert_eq!(layout.offset(i), pos);
            }
        }
    }

    #[test]
    fn thicknesses_stay_in_range() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let randomize = seed % 2 == 0;
            let layout =
                LineLayout::compute(&config(40, Orientation::Horizontal, randomize), 300, 300, &mut rng);

            assert_eq!(layout.len(), 40);
            assert!(
                layout
                    .thicknesses
                    .iter()
                    .all(|&t| (MIN_THICKNESS..MAX_THICKNESS).contains(&t))
            );
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let cfg = config(10, Orientation::Vertical, true);
        let a = LineLayout::compute(&cfg, 800, 600, &mut StdRng::seed_from_u64(42));
        let b = LineLayout::compute(&cfg, 800, 600, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn line_rects_span_cross_axis() {
        let v = Rect::line(Orientation::Vertical, 100, 8, 300, 200);
        assert_eq!(v, Rect { left: 100, top: 0, right: 108, bottom: 200 });
        assert_eq!((v.width(), v.height()), (8, 200));

        let h = Rect::line(Orientation::Horizontal, 50, 6, 300, 200);
        assert_eq!(h, Rect { left: 0, top: 50, right: 300, bottom: 56 });
    }
}
