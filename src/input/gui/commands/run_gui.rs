use std::marker::PhantomData;

use log::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::explorer::ExplorerController;
use crate::core::data::Viewport;
use crate::input::cli::ExplorerSettings;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    settings: ExplorerSettings,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, settings: ExplorerSettings) -> Self {
        Self {
            presenter_factory,
            settings,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed or rendering fails.
    pub fn execute(self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        let window_settings = &self.settings.window;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(&window_settings.title)
                .with_inner_size(LogicalSize::new(
                    f64::from(window_settings.width),
                    f64::from(window_settings.height),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, window_settings)?;
        info!(
            "rendering with {} shaders, frames go to {}",
            presenter.precision().label(),
            self.settings.controller.output_dir.display()
        );

        let size = window.inner_size();
        let controller = ExplorerController::new(
            self.settings.controller.clone(),
            Viewport::new(size.width, size.height),
        );
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut failure: Option<GuiError> = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, _) = app.handle_window_event(window, event);

                let result = match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                        Ok(())
                    }
                    WindowEvent::RedrawRequested => app.frame(window),
                    WindowEvent::Resized(size) => app.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height)
                    }
                    _ => {
                        app.queue_window_event(event, egui_consumed);
                        Ok(())
                    }
                };

                if let Err(e) = result {
                    error!("{e}");
                    failure = Some(e);
                    elwt.exit();
                }
            }
            // The fractal redraws every frame so the rendered zoom keeps stepping.
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
