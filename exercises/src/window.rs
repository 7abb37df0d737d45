use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;
use std::time::Instant;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use gl_wrapper::renderer::GlRenderer;

/// Window with a current GL 3.3 core context, driving a per-frame callback.
pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl App {
    pub fn new(title: &str) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(800, 600)))
            .with_title(title);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| configs.next().unwrap())
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        let handle = Some(window.raw_window_handle());
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(handle);

        let gl_window = GlWindow::new(window, &gl_config);

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| {
            gl_display
                .get_proc_address(CString::new(s).unwrap().as_c_str())
                .cast()
        });

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
        })
    }

    /// Runs the event loop, calling `frame` with the elapsed seconds on every
    /// redraw. Returns only through process exit; Escape or closing the
    /// window ends the loop.
    pub fn run<F>(self, mut frame: F) -> !
    where
        F: FnMut(&mut GlRenderer, f32) + 'static,
    {
        let App {
            event_loop,
            gl_context,
            gl_window,
        } = self;

        let mut renderer = GlRenderer::new();
        let size = gl_window.window.inner_size();
        renderer.resize(size.width, size.height);

        let start = Instant::now();

        event_loop.run(move |event, _window_target, control_flow| {
            control_flow.set_poll();
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if size.width != 0 && size.height != 0 {
                            gl_window.surface.resize(
                                &gl_context,
                                NonZeroU32::new(size.width).unwrap(),
                                NonZeroU32::new(size.height).unwrap(),
                            );
                            renderer.resize(size.width, size.height);
                            log::debug!("window resized to {}x{}", size.width, size.height);
                        }
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                            && input.state == ElementState::Pressed
                        {
                            log::debug!("escape pressed, closing window");
                            control_flow.set_exit();
                        }
                    }
                    WindowEvent::CloseRequested => {
                        control_flow.set_exit();
                    }
                    _ => (),
                },
                Event::MainEventsCleared => {
                    gl_window.window.request_redraw();
                }
                Event::RedrawRequested(_) => {
                    frame(&mut renderer, start.elapsed().as_secs_f32());
                    gl_window.surface.swap_buffers(&gl_context).unwrap();
                }
                _ => (),
            }
        })
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    fn new(window: Window, config: &Config) -> Self {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).unwrap(),
            NonZeroU32::new(height).unwrap(),
        );

        let surface = unsafe {
            config
                .display()
                .create_window_surface(config, &attrs)
                .unwrap()
        };

        Self { window, surface }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create window: {0}")]
    Display(String),
    #[error("display builder returned no window")]
    NoWindow,
    #[error(transparent)]
    Context(#[from] glutin::error::Error),
}
