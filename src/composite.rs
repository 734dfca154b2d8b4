//! Pairwise combination of two child sources sampled at the same point.

use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    source::{BoxedSource, ColorSource},
};

macro_rules! pairwise_source {
    ($(#[$doc:meta])* $name:ident, $op:ident) => {
        $(#[$doc])*
        pub struct $name {
            a: BoxedSource,
            b: BoxedSource,
        }

        impl $name {
            /// The canvas is taken from `a`.
            pub fn new<A, B>(a: A, b: B) -> Self
            where
                A: ColorSource + 'static,
                B: ColorSource + 'static,
            {
                Self {
                    a: Box::new(a),
                    b: Box::new(b),
                }
            }
        }

        impl ColorSource for $name {
            fn canvas(&self) -> Canvas {
                self.a.canvas()
            }

            fn sample(&self, x: f64, y: f64) -> Color {
                self.a.get_color(x, y).$op(self.b.get_color(x, y))
            }
        }
    };
}

pairwise_source!(
    /// `a.add(b)`: premultiplied additive compositing.
    Add,
    add
);
pairwise_source!(
    /// `a.multiply(b)`: literal channel product.
    Multiply,
    multiply
);
pairwise_source!(
    /// `a.blend(b)`: `b` composited over `a`.
    Blend,
    blend
);

/// `a.lerp(b, t)` with a constant `t`.
pub struct Lerp {
    a: BoxedSource,
    b: BoxedSource,
    t: f64,
}

impl Lerp {
    pub fn new<A, B>(a: A, b: B, t: f64) -> Self
    where
        A: ColorSource + 'static,
        B: ColorSource + 'static,
    {
        Self {
            a: Box::new(a),
            b: Box::new(b),
            t,
        }
    }
}

impl ColorSource for Lerp {
    fn canvas(&self) -> Canvas {
        self.a.canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.a.get_color(x, y).lerp(self.b.get_color(x, y), self.t)
    }
}

#[cfg(test)]
#[path = "../tests/unit/composite/ops.rs"]
mod tests;
