//! Word cloud rendering.
//!
//! Words are sized by relative frequency and placed largest first along an
//! Archimedean spiral from the canvas centre. A word that does not fit is
//! retried at a smaller size and dropped once it would fall below the
//! minimum font size.

use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};
use log::debug;

use crate::config::WordCloudConfig;
use crate::error::{BindoError, Result};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

const PALETTE: [Rgb<u8>; 6] = [
    Rgb([68, 1, 84]),
    Rgb([59, 82, 139]),
    Rgb([33, 145, 140]),
    Rgb([94, 201, 98]),
    Rgb([222, 143, 5]),
    Rgb([204, 51, 63]),
];

/// Factor applied to the font size after a failed placement.
const SHRINK_FACTOR: f32 = 0.9;

/// Spiral parameters: angle step in radians and radial growth per radian.
const SPIRAL_ANGLE_STEP: f32 = 0.1;
const SPIRAL_GROWTH: f32 = 1.5;

/// Gap kept between neighbouring words, in pixels.
const PADDING: u32 = 2;

/// A word positioned on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub count: usize,
    pub font_size: f32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Pixels claimed by placed words, padded by [`PADDING`].
///
/// A summed-area table over the occupied pixels answers "is this box free"
/// in constant time, independent of how many words are already placed.
struct OccupancyMap {
    width: usize,
    height: usize,
    occupied: Vec<bool>,
    // (width + 1) x (height + 1), first row and column stay zero
    integral: Vec<u32>,
}

impl OccupancyMap {
    fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        OccupancyMap {
            width,
            height,
            occupied: vec![false; width * height],
            integral: vec![0; (width + 1) * (height + 1)],
        }
    }

    fn occupy(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x0 = x.saturating_sub(PADDING) as usize;
        let y0 = y.saturating_sub(PADDING) as usize;
        let x1 = ((x + width + PADDING) as usize).min(self.width);
        let y1 = ((y + height + PADDING) as usize).min(self.height);
        for row in y0..y1 {
            self.occupied[row * self.width + x0..row * self.width + x1].fill(true);
        }

        let stride = self.width + 1;
        for row in y0..self.height {
            let mut row_sum = self.integral[(row + 1) * stride + x0]
                - self.integral[row * stride + x0];
            for col in x0..self.width {
                row_sum += self.occupied[row * self.width + col] as u32;
                self.integral[(row + 1) * stride + col + 1] =
                    self.integral[row * stride + col + 1] + row_sum;
            }
        }
    }

    /// The box must lie inside the canvas.
    fn is_free(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let stride = self.width + 1;
        let (x0, y0) = (x as usize, y as usize);
        let (x1, y1) = (x0 + width as usize, y0 + height as usize);
        let at = |row: usize, col: usize| self.integral[row * stride + col];

        at(y1, x1) + at(y0, x0) == at(y0, x1) + at(y1, x0)
    }
}

/// Compute font sizes and positions for ranked words.
///
/// `measure` returns the pixel width and height of a word at a font size.
/// Words are expected in descending count order; zero counts and empty
/// words are ignored.
pub fn layout<M>(words: &[(String, usize)], config: &WordCloudConfig, measure: M) -> Vec<PlacedWord>
where
    M: Fn(&str, f32) -> (u32, u32),
{
    let mut placed: Vec<PlacedWord> = Vec::new();

    let words: Vec<&(String, usize)> = words
        .iter()
        .filter(|(text, count)| *count > 0 && !text.is_empty())
        .take(config.max_words)
        .collect();
    let Some(max_count) = words.iter().map(|(_, count)| *count).max() else {
        return placed;
    };

    let mut occupancy = OccupancyMap::new(config.width, config.height);
    let scaling = config.relative_scaling;
    let mut font_size = config.height as f32 / 2.0;
    let mut last_ratio = 1.0f32;

    for (text, count) in words {
        let ratio = *count as f32 / max_count as f32;
        font_size *= scaling * (ratio / last_ratio) + (1.0 - scaling);
        last_ratio = ratio;

        let mut size = font_size;
        let mut position = None;
        // A non-positive minimum would never end the shrinking.
        while size > 0.0 && size >= config.min_font_size {
            let (width, height) = measure(text, size);
            if let Some((x, y)) = find_position(&occupancy, width, height) {
                position = Some((x, y, width, height));
                break;
            }
            size *= SHRINK_FACTOR;
        }

        match position {
            Some((x, y, width, height)) => {
                // Later words never grow past a word that had to shrink.
                font_size = size;
                occupancy.occupy(x, y, width, height);
                placed.push(PlacedWord {
                    text: text.clone(),
                    count: *count,
                    font_size: size,
                    x,
                    y,
                    width,
                    height,
                });
            }
            None => debug!("no room for {text:?} in word cloud"),
        }
    }

    placed
}

fn find_position(occupancy: &OccupancyMap, width: u32, height: u32) -> Option<(u32, u32)> {
    let (canvas_width, canvas_height) = (occupancy.width as u32, occupancy.height as u32);
    if width == 0 || height == 0 || width > canvas_width || height > canvas_height {
        return None;
    }

    let center_x = (canvas_width / 2) as f32;
    let center_y = (canvas_height / 2) as f32;
    let max_radius = (center_x * center_x + center_y * center_y).sqrt() + width.max(height) as f32;

    let mut angle = 0.0f32;
    loop {
        let radius = SPIRAL_GROWTH * angle;
        if radius > max_radius {
            return None;
        }

        let left = center_x + radius * angle.cos() - width as f32 / 2.0;
        let top = center_y + radius * angle.sin() - height as f32 / 2.0;
        angle += SPIRAL_ANGLE_STEP;

        if left < 0.0 || top < 0.0 {
            continue;
        }
        let (x, y) = (left as u32, top as u32);
        if x + width > canvas_width || y + height > canvas_height {
            continue;
        }
        if occupancy.is_free(x, y, width, height) {
            return Some((x, y));
        }
    }
}

/// Renders ranked words into a PNG word cloud.
pub struct WordCloudRenderer {
    config: WordCloudConfig,
    font: FontVec,
}

impl WordCloudRenderer {
    /// Load the configured font.
    ///
    /// # Errors
    ///
    /// Returns [`BindoError::Config`] if the canvas settings are invalid and
    /// [`BindoError::Render`] if the font cannot be read or parsed.
    pub fn new(config: WordCloudConfig) -> Result<Self> {
        config.validate()?;
        let bytes = fs::read(&config.font_path).map_err(|e| {
            BindoError::render(format!(
                "failed to read font {}: {}",
                config.font_path.display(),
                e
            ))
        })?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| {
            BindoError::render(format!(
                "failed to parse font {}: {}",
                config.font_path.display(),
                e
            ))
        })?;

        Ok(Self { config, font })
    }

    /// Get the word cloud settings.
    pub fn config(&self) -> &WordCloudConfig {
        &self.config
    }

    /// Pixel width and height of a word at a font size.
    pub fn measure(&self, text: &str, font_size: f32) -> (u32, u32) {
        let scaled = self.font.as_scaled(PxScale::from(font_size));

        let mut width = 0.0f32;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }

        (width.ceil() as u32, scaled.height().ceil() as u32)
    }

    /// Draw the ranked words onto a new canvas.
    ///
    /// # Errors
    ///
    /// Returns [`BindoError::Render`] if no word could be placed.
    pub fn render(&self, words: &[(String, usize)]) -> Result<RgbImage> {
        let placed = layout(words, &self.config, |text, size| self.measure(text, size));
        if placed.is_empty() {
            return Err(BindoError::render("no words to draw"));
        }

        let mut canvas = RgbImage::from_pixel(self.config.width, self.config.height, BACKGROUND);
        for (i, word) in placed.iter().enumerate() {
            self.draw_word(&mut canvas, word, PALETTE[i % PALETTE.len()]);
        }
        debug!("drew {} of {} words", placed.len(), words.len());

        Ok(canvas)
    }

    /// Render the ranked words and save them as PNG.
    pub fn save(&self, words: &[(String, usize)], path: &Path) -> Result<()> {
        let canvas = self.render(words)?;
        canvas
            .save(path)
            .map_err(|e| BindoError::render(format!("failed to save {}: {}", path.display(), e)))
    }

    fn draw_word(&self, canvas: &mut RgbImage, word: &PlacedWord, color: Rgb<u8>) {
        let scale = PxScale::from(word.font_size);
        let scaled = self.font.as_scaled(scale);
        let baseline = word.y as f32 + scaled.ascent();

        let mut caret = word.x as f32;
        let mut previous: Option<GlyphId> = None;
        for c in word.text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + gx as i64;
                let py = bounds.min.y as i64 + gy as i64;
                if px < 0 || py < 0 || px >= canvas.width() as i64 || py >= canvas.height() as i64 {
                    return;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                let coverage = coverage.clamp(0.0, 1.0);
                for channel in 0..3 {
                    let blended = pixel.0[channel] as f32 * (1.0 - coverage)
                        + color.0[channel] as f32 * coverage;
                    pixel.0[channel] = blended.round() as u8;
                }
            });
        }
    }
}

impl std::fmt::Debug for WordCloudRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCloudRenderer")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    /// Fixed-pitch metrics: every character is `0.6 * size` wide.
    fn monospace(text: &str, size: f32) -> (u32, u32) {
        let width = (text.chars().count() as f32 * size * 0.6).ceil() as u32;
        (width, size.ceil() as u32)
    }

    fn ranked(words: &[(&str, usize)]) -> Vec<(String, usize)> {
        words.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    fn padded_overlap(a: &PlacedWord, b: &PlacedWord) -> bool {
        a.x < b.x + b.width + PADDING
            && b.x < a.x + a.width + PADDING
            && a.y < b.y + b.height + PADDING
            && b.y < a.y + a.height + PADDING
    }

    fn fixture_font() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf")
    }

    #[test]
    fn test_layout_in_bounds_without_overlap() {
        let config = WordCloudConfig::default();
        let words = ranked(&[
            ("하늘", 40),
            ("가을", 30),
            ("바람", 22),
            ("구름", 15),
            ("달빛", 9),
            ("들판", 5),
            ("노을", 3),
            ("호수", 1),
        ]);

        let placed = layout(&words, &config, monospace);
        assert!(!placed.is_empty());

        for (i, word) in placed.iter().enumerate() {
            assert!(word.x + word.width <= config.width);
            assert!(word.y + word.height <= config.height);
            assert!(word.font_size >= config.min_font_size);
            for other in &placed[i + 1..] {
                assert!(!padded_overlap(word, other));
            }
        }
    }

    #[test]
    fn test_font_sizes_follow_rank() {
        let config = WordCloudConfig::default();
        let words = ranked(&[("하늘", 100), ("가을", 50), ("바람", 10)]);

        let placed = layout(&words, &config, monospace);

        assert_eq!(placed[0].text, "하늘");
        for pair in placed.windows(2) {
            assert!(pair[0].font_size >= pair[1].font_size);
        }
    }

    #[test]
    fn test_max_words_and_zero_counts() {
        let config = WordCloudConfig {
            max_words: 2,
            ..Default::default()
        };
        let words = ranked(&[("하늘", 3), ("가을", 2), ("바람", 1)]);
        assert_eq!(layout(&words, &config, monospace).len(), 2);

        let words = ranked(&[("하늘", 0), ("", 4)]);
        assert!(layout(&words, &config, monospace).is_empty());
    }

    #[test]
    fn test_word_too_wide_is_skipped() {
        let config = WordCloudConfig {
            width: 40,
            height: 40,
            ..Default::default()
        };
        let words = ranked(&[("아주아주아주아주아주긴단어", 1)]);

        assert!(layout(&words, &config, monospace).is_empty());
    }

    #[test]
    fn test_zero_min_font_size_terminates() {
        let config = WordCloudConfig {
            width: 40,
            height: 40,
            min_font_size: 0.0,
            ..Default::default()
        };
        let words = ranked(&[("아주아주아주아주아주긴단어", 1)]);

        let placed = layout(&words, &config, monospace);

        assert_eq!(placed.len(), 1);
        assert!(placed[0].font_size < WordCloudConfig::default().min_font_size);
        assert!(placed[0].x + placed[0].width <= 40);
    }

    #[test]
    fn test_crowded_canvas_drops_words() {
        let config = WordCloudConfig {
            width: 80,
            height: 40,
            min_font_size: 4.0,
            ..Default::default()
        };
        let words: Vec<(String, usize)> = (0..100)
            .map(|i| (format!("단어{i}"), 200 - i))
            .collect();

        let placed = layout(&words, &config, monospace);

        assert!(!placed.is_empty());
        assert!(placed.len() < words.len());
        for (i, word) in placed.iter().enumerate() {
            assert!(word.x + word.width <= config.width);
            assert!(word.y + word.height <= config.height);
            for other in &placed[i + 1..] {
                assert!(!padded_overlap(word, other));
            }
        }
    }

    #[test]
    fn test_occupancy_map_respects_padding() {
        let mut occupancy = OccupancyMap::new(50, 50);
        assert!(occupancy.is_free(0, 0, 50, 50));

        occupancy.occupy(10, 10, 10, 10);

        assert!(!occupancy.is_free(15, 15, 1, 1));
        assert!(!occupancy.is_free(20 + PADDING - 1, 10, 5, 5));
        assert!(occupancy.is_free(20 + PADDING, 10, 5, 5));
        assert!(occupancy.is_free(0, 30, 50, 20));
    }

    #[test]
    fn test_invalid_canvas_rejected_before_loading_font() {
        let config = WordCloudConfig {
            font_path: fixture_font(),
            min_font_size: 0.0,
            ..Default::default()
        };

        let err = WordCloudRenderer::new(config).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_render_draws_words() {
        let config = WordCloudConfig {
            font_path: fixture_font(),
            ..Default::default()
        };
        let renderer = WordCloudRenderer::new(config).unwrap();
        let words = ranked(&[("rust", 5), ("cargo", 3), ("crate", 1)]);

        let (width, height) = renderer.measure("rust", 40.0);
        assert!(width > 0 && height > 0);

        let canvas = renderer.render(&words).unwrap();
        assert_eq!(canvas.dimensions(), (800, 400));
        assert!(canvas.pixels().any(|pixel| *pixel != BACKGROUND));
    }

    #[test]
    fn test_missing_font() {
        let config = WordCloudConfig {
            font_path: PathBuf::from("/nonexistent/NanumGothic.ttf"),
            ..Default::default()
        };

        let err = WordCloudRenderer::new(config).unwrap_err();
        assert!(matches!(err, BindoError::Render(_)));
    }

    #[test]
    fn test_invalid_font_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"not a font").unwrap();
        let config = WordCloudConfig {
            font_path: file.path().to_path_buf(),
            ..Default::default()
        };

        assert!(WordCloudRenderer::new(config).is_err());
    }
}
