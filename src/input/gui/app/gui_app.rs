use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::debug;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::controllers::explorer::{ExplorerController, InputEvent, OverlayMode};
use crate::input::gui::app::explorer_input::{
    ExplorerInputState, KeyAction, mouse_button, mouse_wheel, pointer_moved,
};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::target_prompt::TargetPrompt;
use crate::input::gui::errors::GuiError;

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    pub controller: ExplorerController,
    input: ExplorerInputState,
    prompt: TargetPrompt,
    pending: Vec<InputEvent>,
    last_frame: Option<Instant>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: ExplorerController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            scale_factor,
            presenter,
            controller,
            input: ExplorerInputState::default(),
            prompt: TargetPrompt::default(),
            pending: Vec::new(),
            last_frame: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs one frame: apply queued input, advance the rendered zoom (capturing
    /// with the parameters about to be presented), then draw.
    pub fn frame(&mut self, window: &Window) -> Result<(), GuiError> {
        let now = Instant::now();
        if let Some(last) = self.last_frame {
            self.controller.record_frame_time(now - last);
        }
        self.last_frame = Some(now);

        self.controller.apply_events(self.pending.drain(..));
        self.controller.advance_frame(&mut self.presenter);

        let egui_output = self.update_ui(window);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        let params = self.controller.render_params();
        self.presenter.render(egui_output, &self.egui_ctx, &params)?;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.pending.push(InputEvent::Resized { width, height });

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let overlay = self.controller.overlay();
        let rendering = matches!(overlay.mode, OverlayMode::RenderedZoom { .. });
        let precision = self.presenter.precision().label();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot Explorer")
                .default_pos([10.0, 10.0])
                .default_size([320.0, 240.0])
                .show(ctx, |ui| {
                    for line in overlay.lines() {
                        ui.monospace(line);
                    }
                    ui.label(format!("Shader: {precision}"));

                    ui.separator();
                    ui.label("Rendered zoom target (0, 0 = cursor):");
                    ui.horizontal(|ui| {
                        ui.label("Real:");
                        ui.text_edit_singleline(&mut self.prompt.real);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Imag:");
                        ui.text_edit_singleline(&mut self.prompt.imag);
                    });

                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(!rendering, egui::Button::new("Start (R)"))
                            .clicked()
                        {
                            self.pending.extend(self.prompt.submit());
                        }
                        if ui
                            .add_enabled(rendering, egui::Button::new("Cancel (Esc)"))
                            .clicked()
                        {
                            self.pending.push(InputEvent::CancelRenderedZoom);
                        }
                    });

                    if let Some(message) = self.prompt.error() {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                    if let Some(message) = &overlay.capture_error {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Queues explorer input for the next frame. Presses that egui claimed stay
    /// with egui; releases and cursor motion always reach the controller.
    pub fn queue_window_event(&mut self, event: &WindowEvent, egui_consumed: bool) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pending.push(pointer_moved(*position));
            }
            WindowEvent::CursorLeft { .. } => {
                self.pending.push(InputEvent::PrimaryButton { pressed: false });
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = mouse_button(*button, *state) {
                    let pressed = matches!(event, InputEvent::PrimaryButton { pressed: true });
                    if !(pressed && egui_consumed) {
                        self.pending.push(event);
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                self.pending.extend(mouse_wheel(*delta));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    let text_editing = self.egui_ctx.wants_keyboard_input();
                    match self.input.handle_key_event(key_code, event.state, text_editing) {
                        Some(KeyAction::Input(event)) => self.pending.push(event),
                        Some(KeyAction::StartRenderedZoomFromPrompt) => {
                            self.pending.extend(self.prompt.submit());
                        }
                        None => {}
                    }
                }
            }
            WindowEvent::Focused(false) => {
                debug!("focus lost, releasing held input");
                self.input.reset();
                self.pending.push(InputEvent::PrimaryButton { pressed: false });
            }
            _ => {}
        }
    }
}
