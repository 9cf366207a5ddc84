//! Dictionary size and code width, advanced in lockstep.

use tracing::trace;

use crate::Code;

/// Width needed to address `size` entries, `ceil(log2(size))`, never below one bit.
pub fn initial_width(size: usize) -> u8 {
    let bits = usize::BITS - size.saturating_sub(1).leading_zeros();
    bits.max(1) as u8
}

/// Dictionary size together with the current code width.
///
/// Both directions call [`CodeSpace::grow`] once per dictionary entry: the
/// encoder right after writing a code, the decoder right before reading the
/// next one. That keeps the widths of every code identical on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeSpace {
    size: usize,
    width: u8,
}

impl CodeSpace {
    /// Starts from a dictionary holding `size` entries.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            width: initial_width(size),
        }
    }

    /// Number of assigned codes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bits per code at this point of the stream.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Largest size the current width covers without widening.
    fn capacity(&self) -> usize {
        (1usize << self.width) - 1
    }

    /// Adds one bit of width if the size has outgrown the current one.
    pub fn maybe_widen(&mut self) -> bool {
        if self.size > self.capacity() {
            self.width += 1;
            trace!(size = self.size, width = self.width, "code width increased");
            true
        } else {
            false
        }
    }

    /// Reserves the next code, widening first when needed.
    pub fn grow(&mut self) -> Code {
        self.maybe_widen();
        let code = self.size as Code;
        self.size += 1;
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_width_is_ceil_log2() {
        assert_eq!(initial_width(0), 1);
        assert_eq!(initial_width(1), 1);
        assert_eq!(initial_width(2), 1);
        assert_eq!(initial_width(3), 2);
        assert_eq!(initial_width(4), 2);
        assert_eq!(initial_width(5), 3);
        assert_eq!(initial_width(8), 3);
        assert_eq!(initial_width(9), 4);
        assert_eq!(initial_width(256), 8);
        assert_eq!(initial_width(257), 9);
    }

    #[test]
    fn grow_hands_out_dense_codes() {
        let mut space = CodeSpace::new(3);
        assert_eq!(space.grow(), 3);
        assert_eq!(space.grow(), 4);
        assert_eq!(space.grow(), 5);
        assert_eq!(space.size(), 6);
    }

    #[test]
    fn widens_exactly_when_size_passes_power_of_two_minus_one() {
        let mut space = CodeSpace::new(2);
        assert_eq!(space.width(), 1);
        let mut previous = space.width();
        for _ in 0..600 {
            let size_before = space.size();
            let widened = space.maybe_widen();
            assert_eq!(widened, size_before > (1usize << previous) - 1);
            space.size += 1;
            assert!(space.width() >= previous);
            assert!(space.width() <= previous + 1);
            previous = space.width();
        }
    }

    #[test]
    fn every_reserved_code_fits_its_width() {
        for start in 1..40 {
            let mut space = CodeSpace::new(start);
            for _ in 0..300 {
                let code = space.grow();
                assert!(u64::from(code) < 1u64 << space.width(), "code {code} width {}", space.width());
                // The width is never larger than needed for the newest code.
                if space.width() > 1 {
                    assert!(u64::from(code) >= 1u64 << (space.width() - 2));
                }
            }
        }
    }

    #[test]
    fn boundary_sizes() {
        // Starting at exactly a power of two forces a widen on the first grow.
        let mut space = CodeSpace::new(4);
        assert_eq!(space.width(), 2);
        assert_eq!(space.grow(), 4);
        assert_eq!(space.width(), 3);

        // One below stays put, then widens on the following grow.
        let mut space = CodeSpace::new(7);
        assert_eq!(space.width(), 3);
        assert_eq!(space.grow(), 7);
        assert_eq!(space.width(), 3);
        assert_eq!(space.grow(), 8);
        assert_eq!(space.width(), 4);
    }
}
