pub struct Image {
    pub width: usize,
    pub height: usize,
    rgb: Vec<u8>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            rgb: vec![0u8; width * height * 3],
        }
    }

    pub fn plot(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8) {
        let k = (y * self.width + x) * 3;
        self.rgb[k] = r;
        self.rgb[k + 1] = g;
        self.rgb[k + 2] = b;
    }

    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    pub fn save(&self, filename: &str) {
        image::save_buffer(
            filename,
            &self.rgb,
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgb8,
        )
        .expect("unable to save image");
    }
}
