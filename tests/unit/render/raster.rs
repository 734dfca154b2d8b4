use super::*;
use crate::foundation::core::Canvas;

struct Coords(Canvas);

impl ColorSource for Coords {
    fn canvas(&self) -> Canvas {
        self.0
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        Color::new(x * 10.0, y * 10.0, 0.0, 255.0)
    }
}

#[test]
fn serial_and_parallel_rasterization_match() {
    let src = Coords(Canvas::new(7.0, 5.0));
    let serial = rasterize(&src, &RenderSettings::default()).unwrap();
    let parallel = rasterize(
        &src,
        &RenderSettings {
            threading: RenderThreading {
                parallel: true,
                threads: Some(2),
            },
            antialias: false,
        },
    )
    .unwrap();
    assert_eq!(serial, parallel);
    assert_eq!(serial, src.generate_image());
}

#[test]
fn rasterized_bitmap_resamples_to_same_colors() {
    let src = Coords(Canvas::new(6.0, 4.0));
    let bmp = src.generate_image();
    for y in 0..4 {
        for x in 0..6 {
            let (fx, fy) = (f64::from(x), f64::from(y));
            assert_eq!(bmp.get_color(fx, fy), src.get_color(fx, fy));
        }
    }
}

#[test]
fn antialias_setting_averages_half_pixel_offsets() {
    let src = Coords(Canvas::new(4.0, 4.0));
    let settings = RenderSettings {
        antialias: true,
        ..RenderSettings::default()
    };
    let bmp = rasterize(&src, &settings).unwrap();
    // Each nested half-lerp floors: r = floor(12.5), g = floor(22.5).
    assert_eq!(bmp.pixel(1, 2), Some(Color::from_rgba8(12, 22, 0, 255)));
}

#[test]
fn generate_into_clips_to_surface() {
    let src = Coords(Canvas::new(3.0, 3.0));
    let mut surface = Bitmap::new(4, 4);
    src.generate_into(&mut surface, 2, -1);
    assert_eq!(surface.pixel(0, 0), Some(Color::TRANSPARENT));
    assert_eq!(surface.pixel(2, 0), Some(src.get_color(0.0, 1.0)));
    assert_eq!(surface.pixel(3, 1), Some(src.get_color(1.0, 2.0)));
    assert_eq!(surface.pixel(2, 2), Some(Color::TRANSPARENT));
}

#[test]
fn settings_load_from_partial_json() {
    let s = RenderSettings::from_json(r#"{"threading": {"parallel": true}}"#).unwrap();
    assert!(s.threading.parallel);
    assert_eq!(s.threading.threads, None);
    assert!(!s.antialias);
    assert!(RenderSettings::from_json("{not json").is_err());
}
