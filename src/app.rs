use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use log::debug;
use std::time::{Duration, Instant};
use zeroize::Zeroize;

use crate::clipboard::{ClipboardSink, EguiClipboard, copy_result};
use crate::error::{ClipboardError, GenerationError};
use crate::notification::{
    NO_CLASS_SELECTED, NOTHING_TO_COPY, NotificationKind, Notifications, PASSWORD_COPIED,
    PASSWORD_GENERATED,
};
use crate::password::{CharacterClass, GenerationRequest, classify};
use crate::settings::AppSettings;
use crate::stepper::{LengthStepper, StepOutcome};

const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x66, 0xFF, 0x66);
const WARNING_COLOR: Color32 = Color32::from_rgb(0xFF, 0x35, 0x5E);

/// The main eframe app struct
pub struct PassGenApp {
    // Password generation toggles
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
    pub length: LengthStepper,

    // Last result shown in the output box
    pub generated_password: String,

    // Toasts
    pub notifications: Notifications,

    pub settings: AppSettings,
}

impl PassGenApp {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            use_lowercase: settings.include_lowercase,
            use_uppercase: settings.include_uppercase,
            use_numbers: settings.include_numbers,
            use_symbols: settings.include_symbols,
            length: LengthStepper::new(settings.default_length),
            generated_password: String::new(),
            notifications: Notifications::new(settings.toast_duration()),
            settings,
        }
    }
}

impl Default for PassGenApp {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

impl App for PassGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Instant::now();
        self.notifications.prune(now);

        // Ctrl+G: Generate password, Escape: clear result
        let (generate_pressed, clear_pressed) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::G),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if generate_pressed {
            self.generate();
        }
        if clear_pressed {
            self.clear();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_main_ui(ui);
        });

        self.show_toasts(ctx, now);

        // Keep repainting while toasts are counting down
        if !self.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

// ----------------------------------------------------------
impl PassGenApp {
    /// Snapshot of the current toggles and length
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.use_lowercase,
            self.use_uppercase,
            self.use_numbers,
            self.use_symbols,
            self.length.value(),
        )
    }

    /// Generate a password into the output box and toast the outcome
    pub fn generate(&mut self) {
        let request = self.request();
        self.generated_password.zeroize();
        match request.generate() {
            Ok(password) => {
                debug!(
                    "generated {} characters from {:?}",
                    password.len(),
                    request.selected_classes()
                );
                self.generated_password = password;
                self.notifications.success(PASSWORD_GENERATED);
            }
            Err(GenerationError::NoClassSelected) => {
                self.notifications.warning(NO_CLASS_SELECTED);
            }
        }
    }

    /// Copy the output box to `sink`; the box is cleared on success
    pub fn copy<S: ClipboardSink + ?Sized>(&mut self, sink: &mut S) {
        match copy_result(&mut self.generated_password, sink) {
            Ok(()) => self.notifications.success(PASSWORD_COPIED),
            Err(ClipboardError::NothingToCopy) => self.notifications.warning(NOTHING_TO_COPY),
            Err(e) => self.notifications.warning(e.to_string()),
        }
    }

    pub fn clear(&mut self) {
        self.generated_password.zeroize();
    }

    pub fn increment_length(&mut self) -> StepOutcome {
        let outcome = self.length.increment();
        self.report_step(outcome);
        outcome
    }

    pub fn decrement_length(&mut self) -> StepOutcome {
        let outcome = self.length.decrement();
        self.report_step(outcome);
        outcome
    }

    fn report_step(&mut self, outcome: StepOutcome) {
        if let Some(msg) = outcome.warning() {
            self.notifications.warning(msg);
        }
    }

    fn toggle_mut(&mut self, class: CharacterClass) -> &mut bool {
        match class {
            CharacterClass::Lowercase => &mut self.use_lowercase,
            CharacterClass::Uppercase => &mut self.use_uppercase,
            CharacterClass::Number => &mut self.use_numbers,
            CharacterClass::Symbol => &mut self.use_symbols,
        }
    }

    fn show_main_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("Password Generator")
                    .size(22.0)
                    .color(Color32::WHITE),
            );
        });
        ui.separator();

        // Output box
        ui.group(|ui| {
            ui.set_min_height(28.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                if self.generated_password.is_empty() {
                    ui.colored_label(Color32::GRAY, "Your password will appear here");
                }
                for c in self.generated_password.chars() {
                    ui.label(
                        RichText::new(c.to_string())
                            .monospace()
                            .size(18.0)
                            .color(class_color(classify(c))),
                    );
                }
            });
        });

        ui.horizontal(|ui| {
            if ui.button("Copy").clicked() {
                let ctx = ui.ctx().clone();
                self.copy(&mut EguiClipboard::new(&ctx));
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }
        });

        ui.separator();

        // Length stepper
        ui.horizontal(|ui| {
            ui.label("Length:");
            if ui.button("-").clicked() {
                self.decrement_length();
            }
            ui.monospace(format!("{:>2}", self.length.value()));
            if ui.button("+").clicked() {
                self.increment_length();
            }
        });

        // Toggles for character sets
        for class in CharacterClass::ALL {
            ui.checkbox(self.toggle_mut(class), class.label());
        }

        ui.separator();
        ui.vertical_centered(|ui| {
            if ui
                .button(RichText::new("Generate Password").size(18.0))
                .clicked()
            {
                self.generate();
            }
        });
    }

    fn show_toasts(&self, ctx: &egui::Context, now: Instant) {
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .show(ctx, |ui| {
                for toast in self.notifications.active(now) {
                    let fill = match toast.kind {
                        NotificationKind::Success => SUCCESS_COLOR,
                        NotificationKind::Warning => WARNING_COLOR,
                    };
                    egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                        ui.label(RichText::new(&toast.message).color(Color32::BLACK));
                    });
                }
            });
    }
}

fn class_color(class: Option<CharacterClass>) -> Color32 {
    match class {
        Some(CharacterClass::Lowercase) => Color32::WHITE,
        Some(CharacterClass::Uppercase) => Color32::LIGHT_BLUE,
        Some(CharacterClass::Number) => Color32::LIGHT_GREEN,
        Some(CharacterClass::Symbol) => Color32::YELLOW,
        None => Color32::GRAY,
    }
}


// Wipe the shown password on Drop
impl Drop for PassGenApp {
    fn drop(&mut self) {
        self.generated_password.zeroize();
    }
}
