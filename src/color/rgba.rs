use rand::Rng;

/// Straight-alpha RGBA color with byte channels.
///
/// Every constructor floors and clamps its inputs to `[0, 255]`, so any color
/// derived through the operators below is valid by construction. Premultiplied
/// channels are computed on demand by [`Color::pr`] and friends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[inline]
fn channel(v: f64) -> u8 {
    // The float-to-int cast saturates and maps NaN to 0.
    v.floor().clamp(0.0, 255.0) as u8
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgba8(0, 0, 0, 255);
    pub const WHITE: Self = Self::from_rgba8(255, 255, 255, 255);

    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: channel(a),
        }
    }

    /// Opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 255.0)
    }

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Premultiplied RGBA8, rounded the same way as hosts expect for blits.
    pub fn to_premul_rgba8(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            (((u16::from(c) * u16::from(a)) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }

    #[inline]
    pub fn pr(self) -> f64 {
        f64::from(self.r) * f64::from(self.a) / 255.0
    }

    #[inline]
    pub fn pg(self) -> f64 {
        f64::from(self.g) * f64::from(self.a) / 255.0
    }

    #[inline]
    pub fn pb(self) -> f64 {
        f64::from(self.b) * f64::from(self.a) / 255.0
    }

    #[inline]
    pub fn pa(self) -> f64 {
        f64::from(self.a) * f64::from(self.a) / 255.0
    }

    fn channels(self) -> [f64; 4] {
        [
            f64::from(self.r),
            f64::from(self.g),
            f64::from(self.b),
            f64::from(self.a),
        ]
    }

    fn from_channels(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Additive compositing of `other` premultiplied by its own alpha.
    pub fn add(self, other: Self) -> Self {
        Self::new(
            f64::from(self.r) + other.pr(),
            f64::from(self.g) + other.pg(),
            f64::from(self.b) + other.pb(),
            f64::from(self.a) + other.pa(),
        )
    }

    /// Literal per-channel product, saturating at 255.
    ///
    /// There is no `/255` normalization, so two non-trivial colors usually
    /// saturate to white.
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            f64::from(self.r) * f64::from(other.r),
            f64::from(self.g) * f64::from(other.g),
            f64::from(self.b) * f64::from(other.b),
            f64::from(self.a) * f64::from(other.a),
        )
    }

    /// Source-over compositing with `other` on top of `self`.
    pub fn blend(self, other: Self) -> Self {
        if other.a == 0 {
            return self;
        }
        if self.a == 0 {
            return other;
        }

        let top_a = f64::from(other.a);
        let under = f64::from(self.a) * (255.0 - top_a) / 255.0;
        let out_a = top_a + under;

        let mix = |top: u8, bottom: u8| (f64::from(top) * top_a + f64::from(bottom) * under) / out_a;
        Self::new(
            mix(other.r, self.r),
            mix(other.g, self.g),
            mix(other.b, self.b),
            out_a,
        )
    }

    /// Per-channel linear interpolation; `t` outside `[0, 1]` returns an endpoint.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }

        let a = self.channels();
        let b = other.channels();
        Self::from_channels(std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t))
    }

    /// Perturbs the color channels with probability `coverage`.
    ///
    /// `saturation` mixes one shared offset (0.0, monochrome grain) with
    /// independent per-channel offsets (1.0, colored grain). Offsets are drawn
    /// from `[-intensity, intensity]`. Alpha is untouched.
    pub fn add_noise<R: Rng + ?Sized>(
        self,
        intensity: f64,
        saturation: f64,
        coverage: f64,
        rng: &mut R,
    ) -> Self {
        if rng.random::<f64>() >= coverage {
            return self;
        }

        let mut offset = || (rng.random::<f64>() * 2.0 - 1.0) * intensity;
        let shared = offset() * (1.0 - saturation);
        let r = f64::from(self.r) + shared + offset() * saturation;
        let g = f64::from(self.g) + shared + offset() * saturation;
        let b = f64::from(self.b) + shared + offset() * saturation;
        Self::new(r, g, b, f64::from(self.a))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgba.rs"]
mod tests;
