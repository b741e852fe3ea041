use opencv::{core::Mat, highgui, prelude::*};

use crate::error::Result;

/// Where intermediate and final images get rendered.
pub trait DisplaySink {
    fn show(&mut self, title: &str, image: &Mat) -> Result<()>;
}

/// Renders through highgui: one resizable window per title, sized to a
/// quarter of the shown image's native dimensions, blocking on a key press
/// so the window gets painted before the pipeline moves on.
pub struct WindowSink;

impl DisplaySink for WindowSink {
    fn show(&mut self, title: &str, image: &Mat) -> Result<()> {
        let size = image.size()?;
        highgui::named_window(title, highgui::WINDOW_NORMAL)?;
        highgui::resize_window(title, size.width / 4, size.height / 4)?;
        highgui::imshow(title, image)?;
        highgui::wait_key(0)?;
        Ok(())
    }
}

/// Records shown images instead of opening windows.
#[derive(Default)]
pub struct CaptureSink {
    pub shown: Vec<(String, Mat)>,
}

impl DisplaySink for CaptureSink {
    fn show(&mut self, title: &str, image: &Mat) -> Result<()> {
        self.shown.push((title.to_string(), image.clone()));
        Ok(())
    }
}
