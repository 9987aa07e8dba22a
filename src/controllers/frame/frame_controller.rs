use log::{debug, info};
use std::time::{Duration, Instant};

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::compute_frame::compute_frame::compute_frame_into;
use crate::core::actions::compute_frame::frame_request::FrameRequest;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::viewport::{ViewCommand, ViewportState};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::palette::coefficients::ColourCoefficients;
use crate::core::palette::palette::Palette;

#[derive(Debug)]
pub enum FrameControllerError<E> {
    Frame(FrameBufferError),
    Presenter(E),
}

impl<E: std::fmt::Display> std::fmt::Display for FrameControllerError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameControllerError::Frame(e) => write!(f, "frame error: {}", e),
            FrameControllerError::Presenter(e) => write!(f, "presenter error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for FrameControllerError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameControllerError::Frame(e) => Some(e),
            FrameControllerError::Presenter(e) => Some(e),
        }
    }
}

/// Owns the view state, the palette and the frame buffer, and drives one
/// render-then-present cycle per call to [`FrameController::render`].
///
/// View changes are applied between frames only; a frame in progress always
/// sees one consistent request.
pub struct FrameController<P: FramePresenterPort> {
    presenter: P,
    request: FrameRequest,
    palette: Palette,
    frame: FrameBuffer,
    frames_rendered: u64,
}

impl<P: FramePresenterPort> FrameController<P> {
    pub fn new(presenter: P, fractal: FractalKinds, palette: Palette) -> Self {
        Self::with_request(
            presenter,
            FrameRequest::new(fractal, ViewportState::default()),
            palette,
        )
    }

    pub fn with_request(presenter: P, request: FrameRequest, palette: Palette) -> Self {
        Self {
            presenter,
            frame: FrameBuffer::new(request.pixel_rect),
            request,
            palette,
            frames_rendered: 0,
        }
    }

    /// Computes a full frame for the current view and hands it to the presenter.
    ///
    /// Returns how long the computation took, excluding presentation.
    pub fn render(&mut self) -> Result<Duration, FrameControllerError<P::Error>> {
        let start = Instant::now();

        compute_frame_into(&self.request, &self.palette, &mut self.frame)
            .map_err(FrameControllerError::Frame)?;

        let render_duration = start.elapsed();
        self.frames_rendered += 1;

        info!(
            "rendered {} frame {} (zoom {}, offset {}, {}) in {:?}",
            self.request.fractal,
            self.frames_rendered,
            self.request.viewport.zoom(),
            self.request.viewport.offset_x(),
            self.request.viewport.offset_y(),
            render_duration
        );

        self.presenter
            .present(&self.frame)
            .map_err(FrameControllerError::Presenter)?;

        Ok(render_duration)
    }

    /// Presents the most recent frame again without recomputing it.
    pub fn present(&mut self) -> Result<(), FrameControllerError<P::Error>> {
        self.presenter
            .present(&self.frame)
            .map_err(FrameControllerError::Presenter)
    }

    pub fn apply(&mut self, command: ViewCommand) {
        self.request.viewport.apply(command);
        debug!("{:?} -> {:?}", command, self.request.viewport);
    }

    pub fn set_palette(&mut self, coefficients: ColourCoefficients) {
        self.palette = Palette::build(coefficients);
        debug!("rebuilt palette with {} colours from {:?}", self.palette.len(), coefficients);
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.request.viewport
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKinds {
        self.request.fractal
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_frame::compute_frame::compute_frame_serial;
    use crate::core::data::pixel_rect::PixelRect;
    use std::fmt;

    #[derive(Debug, Default)]
    struct StubRecordingPresenter {
        frames: Vec<FrameBuffer>,
    }

    impl FramePresenterPort for StubRecordingPresenter {
        type Error = std::io::Error;

        fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct StubPresenterError;

    impl fmt::Display for StubPresenterError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "surface lost")
        }
    }

    impl std::error::Error for StubPresenterError {}

    struct StubFailingPresenter;

    impl FramePresenterPort for StubFailingPresenter {
        type Error = StubPresenterError;

        fn present(&mut self, _: &FrameBuffer) -> Result<(), Self::Error> {
            Err(StubPresenterError)
        }
    }

    fn small_controller(fractal: FractalKinds) -> FrameController<StubRecordingPresenter> {
        let request = FrameRequest::new(fractal, ViewportState::default())
            .with_pixel_rect(PixelRect::from_size(40, 30).unwrap());

        FrameController::with_request(StubRecordingPresenter::default(), request, Palette::default())
    }

    #[test]
    fn new_controller_uses_default_view() {
        let controller = FrameController::new(
            StubRecordingPresenter::default(),
            FractalKinds::Julia,
            Palette::default(),
        );

        assert_eq!(controller.viewport(), ViewportState::default());
        assert_eq!(controller.fractal(), FractalKinds::Julia);
        assert_eq!(controller.frame().pixel_rect().width(), 800);
        assert_eq!(controller.frames_rendered(), 0);
    }

    #[test]
    fn render_presents_the_computed_frame() {
        let mut controller = small_controller(FractalKinds::Mandelbrot);

        controller.render().unwrap();

        let expected = compute_frame_serial(&controller.request, &Palette::default());
        assert_eq!(controller.presenter_mut().frames, vec![expected]);
        assert_eq!(controller.frames_rendered(), 1);
    }

    #[test]
    fn view_commands_change_the_next_frame() {
        let mut controller = small_controller(FractalKinds::Mandelbrot);

        controller.render().unwrap();
        controller.apply(ViewCommand::ZoomIn);
        controller.apply(ViewCommand::PanRight);
        controller.render().unwrap();

        assert_eq!(controller.viewport().zoom(), 0.8);
        let frames = &controller.presenter_mut().frames;
        assert_eq!(frames.len(), 2);
        assert_ne!(frames[0], frames[1]);
    }

    #[test]
    fn set_palette_rebuilds_colours() {
        let mut controller = small_controller(FractalKinds::Tricorn);
        let coefficients = ColourCoefficients {
            r_mult: 1,
            g_mult: 1,
            b_mult: 1,
            r_shift: 0,
            g_shift: 0,
            b_shift: 0,
        };

        controller.set_palette(coefficients);

        assert_eq!(controller.palette().coefficients(), coefficients);
        assert_eq!(controller.palette(), &Palette::build(coefficients));
    }

    #[test]
    fn present_repeats_last_frame_without_rendering() {
        let mut controller = small_controller(FractalKinds::Newton);

        controller.render().unwrap();
        controller.present().unwrap();

        let frames = &controller.presenter_mut().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frames[1]);
        assert_eq!(controller.frames_rendered(), 1);
    }

    #[test]
    fn presenter_failure_is_reported() {
        let request = FrameRequest::default().with_pixel_rect(PixelRect::from_size(8, 6).unwrap());
        let mut controller =
            FrameController::with_request(StubFailingPresenter, request, Palette::default());

        let result = controller.render();

        assert!(matches!(result, Err(FrameControllerError::Presenter(StubPresenterError))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "presenter error: surface lost"
        );
    }
}
