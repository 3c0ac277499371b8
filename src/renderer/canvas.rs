use super::Swatch;

/// Palette-indexed raster surface. Drawing calls take inclusive corner
/// coordinates and silently clip anything outside the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Swatch) -> Self {
        let data = vec![background.index(); width * height];
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self, background: Swatch) {
        self.data.fill(background.index());
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, swatch: Swatch) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = swatch.index();
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Swatch> {
        if x < self.width && y < self.height {
            Swatch::from_index(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Signed variant of `set_pixel` used by the shape routines.
    pub fn plot(&mut self, x: i32, y: i32, swatch: Swatch) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize, swatch);
        }
    }

    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, swatch: Swatch) {
        // Clamp once so huge off-canvas rectangles stay cheap.
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        let y1 = y1.min(self.height as i32 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_pixel(x as usize, y as usize, swatch);
            }
        }
    }

    /// Outline drawn inward: a `stroke` of 3 covers the three outermost rings.
    pub fn stroke_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, stroke: u32, swatch: Swatch) {
        for i in 0..stroke as i32 {
            let (left, top, right, bottom) = (x0 + i, y0 + i, x1 - i, y1 - i);
            if left > right || top > bottom {
                break;
            }
            self.fill_rect(left, top, right, top, swatch);
            self.fill_rect(left, bottom, right, bottom, swatch);
            self.fill_rect(left, top, left, bottom, swatch);
            self.fill_rect(right, top, right, bottom, swatch);
        }
    }

    pub fn rectangle(
        &mut self,
        (x0, y0, x1, y1): (i32, i32, i32, i32),
        fill: Option<Swatch>,
        outline: Option<(Swatch, u32)>,
    ) {
        if let Some(fill) = fill {
            self.fill_rect(x0, y0, x1, y1, fill);
        }
        if let Some((swatch, stroke)) = outline {
            self.stroke_rect(x0, y0, x1, y1, stroke, swatch);
        }
    }

    /// One-pixel Bresenham line, both endpoints included.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, swatch: Swatch) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y, swatch);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, swatch: Swatch) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.plot(cx + dx, cy + dy, swatch);
                }
            }
        }
    }

    pub fn count(&self, swatch: Swatch) -> usize {
        self.data.iter().filter(|&&v| v == swatch.index()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = Canvas::new(10, 5, Swatch::Background);
        assert_eq!(canvas.data().len(), 50);
        assert_eq!(canvas.count(Swatch::Background), 50);
        assert_eq!(canvas.get_pixel(10, 0), None);
    }

    #[test]
    fn test_rectangle_bounds_are_inclusive() {
        let mut canvas = Canvas::new(10, 10, Swatch::Background);
        canvas.rectangle((2, 2, 4, 5), Some(Swatch::Furniture), None);
        assert_eq!(canvas.count(Swatch::Furniture), 3 * 4);
        assert_eq!(canvas.get_pixel(4, 5), Some(Swatch::Furniture));
        assert_eq!(canvas.get_pixel(5, 5), Some(Swatch::Background));
    }

    #[test]
    fn test_stroke_is_drawn_inward() {
        let mut canvas = Canvas::new(20, 20, Swatch::Background);
        canvas.rectangle((0, 0, 9, 9), Some(Swatch::Interior), Some((Swatch::Wall, 3)));
        assert_eq!(canvas.get_pixel(0, 0), Some(Swatch::Wall));
        assert_eq!(canvas.get_pixel(2, 5), Some(Swatch::Wall));
        assert_eq!(canvas.get_pixel(3, 5), Some(Swatch::Interior));
        assert_eq!(canvas.get_pixel(10, 5), Some(Swatch::Background));
        // 10x10 minus the 4x4 core
        assert_eq!(canvas.count(Swatch::Wall), 100 - 16);
    }

    #[test]
    fn test_drawing_off_canvas_is_clipped() {
        let mut canvas = Canvas::new(8, 8, Swatch::Background);
        canvas.fill_rect(-5, -5, 100, 2, Swatch::Door);
        canvas.fill_circle(-10, -10, 3, Swatch::Handle);
        canvas.line(-3, 7, 20, 7, Swatch::Divider);
        assert_eq!(canvas.count(Swatch::Door), 8 * 3);
        assert_eq!(canvas.count(Swatch::Handle), 0);
        assert_eq!(canvas.count(Swatch::Divider), 8);
    }

    #[test]
    fn test_vertical_line_and_circle() {
        let mut canvas = Canvas::new(16, 16, Swatch::Background);
        canvas.line(3, 1, 3, 10, Swatch::Divider);
        assert_eq!(canvas.count(Swatch::Divider), 10);

        canvas.fill_circle(10, 10, 3, Swatch::Handle);
        assert_eq!(canvas.get_pixel(10, 7), Some(Swatch::Handle));
        assert_eq!(canvas.get_pixel(13, 13), Some(Swatch::Background));
        assert_eq!(canvas.count(Swatch::Handle), 29);
    }

    #[test]
    fn test_clear_resets_every_pixel() {
        let mut canvas = Canvas::new(4, 4, Swatch::Background);
        canvas.fill_rect(0, 0, 3, 3, Swatch::Wall);
        canvas.clear(Swatch::Background);
        assert_eq!(canvas.count(Swatch::Background), 16);
    }
}
