use std::str::FromStr;

use crate::{
    color::rgba::Color,
    foundation::error::{TesseraError, TesseraResult},
};

impl Color {
    /// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or
    /// `rgba(r, g, b, a)` where `a` is in `[0, 1]`.
    pub fn parse(s: &str) -> TesseraResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(body, true);
        }
        if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(body, false);
        }

        Err(TesseraError::color_parse(format!(
            "unrecognized color \"{s}\" (expected #hex, rgb(...) or rgba(...))"
        )))
    }

    /// `#rrggbbaa`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_hex(hex: &str) -> TesseraResult<Color> {
    fn nibble(c: char, src: &str) -> TesseraResult<u8> {
        c.to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| TesseraError::color_parse(format!("invalid hex digit in \"#{src}\"")))
    }

    let digits = hex
        .chars()
        .map(|c| nibble(c, hex))
        .collect::<TesseraResult<Vec<u8>>>()?;

    let (r, g, b, a) = match digits.as_slice() {
        [r, g, b] => (r * 17, g * 17, b * 17, 255),
        [r, g, b, a] => (r * 17, g * 17, b * 17, a * 17),
        [r1, r0, g1, g0, b1, b0] => (r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, 255),
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            (r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, a1 << 4 | a0)
        }
        _ => {
            return Err(TesseraError::color_parse(format!(
                "hex color \"#{hex}\" must have 3, 4, 6 or 8 digits"
            )));
        }
    };
    Ok(Color::from_rgba8(r, g, b, a))
}

fn parse_functional(body: &str, with_alpha: bool) -> TesseraResult<Color> {
    let parts = body
        .split(',')
        .map(|p| {
            let p = p.trim();
            p.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TesseraError::color_parse(format!("invalid color component \"{p}\"")))
        })
        .collect::<TesseraResult<Vec<f64>>>()?;

    match (parts.as_slice(), with_alpha) {
        ([r, g, b], false) => Ok(Color::rgb(*r, *g, *b)),
        ([r, g, b, a], true) => Ok(Color::new(*r, *g, *b, a * 255.0)),
        _ => Err(TesseraError::color_parse(format!(
            "expected {} components in \"{body}\"",
            if with_alpha { 4 } else { 3 }
        ))),
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Obj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "opaque")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn opaque() -> f64 {
            255.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Color::parse(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Color::new(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Color::new(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;
