use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::supersampling::SubPixelOffset;
use crate::core::data::viewport::ViewportState;

/// Width of the plane, in plane units, spanned by the frame at zoom 1.
pub const PLANE_SPAN: f64 = 4.0;

/// Maps a (sub-)pixel position to plane coordinates.
///
/// Both axes use the horizontal scale `PLANE_SPAN / width`, so one pixel is
/// square in the plane whatever the frame's aspect ratio. The frame centre maps
/// to the viewport offset.
#[must_use]
pub fn pixel_to_plane_coords(
    pixel_position: Point,
    sub_pixel: SubPixelOffset,
    pixel_rect: PixelRect,
    viewport: &ViewportState,
) -> Complex {
    let width = pixel_rect.width() as f64;
    let height = pixel_rect.height() as f64;
    let scale = (PLANE_SPAN / width) * viewport.zoom();

    let relative_pixel_x = (pixel_position.x as i64 - pixel_rect.top_left().x as i64) as f64;
    let relative_pixel_y = (pixel_position.y as i64 - pixel_rect.top_left().y as i64) as f64;

    Complex {
        real: (relative_pixel_x + sub_pixel.dx - width / 2.0) * scale + viewport.offset_x(),
        imag: (relative_pixel_y + sub_pixel.dy - height / 2.0) * scale + viewport.offset_y(),
    }
}
