//! `Surface` backed by a browser `CanvasRenderingContext2d`

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Sprite, Surface, TextStyle};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    ball_sprite: Option<HtmlImageElement>,
}

impl CanvasSurface {
    /// Wrap the canvas' 2D context. Fails if the browser will not hand one out.
    pub fn new(
        canvas: &HtmlCanvasElement,
        ball_sprite: Option<HtmlImageElement>,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, ball_sprite })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) -> bool {
        let image = match sprite {
            Sprite::Ball => self.ball_sprite.as_ref(),
        };
        let Some(image) = image.filter(|img| img.complete() && img.natural_width() > 0) else {
            return false;
        };
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image, x as f64, y as f64, w as f64, h as f64,
            )
            .is_ok()
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(style.align);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.fill_text(text, x as f64, y as f64).ok();
    }
}
