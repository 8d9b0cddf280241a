use anyhow::{Context, Result};
use eframe::egui::FontData;
use egui::FontFamily;
use log::{error, info};

use crate::config::{AppConfig, Theme};
use crate::models::events::Action;
use crate::models::view::View;
use state::AppState;

pub mod results;
mod screens;
pub mod state;

const CUSTOM_FONT: &str = "custom";

pub struct PollApp {
    heading: String,
    state: AppState,
}

impl PollApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        if let Some(path) = &config.font_path {
            match install_font(&cc.egui_ctx, path) {
                Ok(()) => info!("Loaded font {}", path.display()),
                Err(e) => error!("{:#}", e),
            }
        }
        apply_theme(&cc.egui_ctx, config.theme());

        Self {
            heading: config.window.title,
            state: AppState::new(config.timestamp_format),
        }
    }
}

impl eframe::App for PollApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = ui_main(ctx, &self.heading, &self.state);
        for action in actions {
            self.state.apply(action);
        }
    }
}

fn install_font(ctx: &egui::Context, path: &std::path::Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        CUSTOM_FONT.to_owned(),
        FontData::from_owned(bytes).into(),
    );
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, CUSTOM_FONT.to_owned());
    }
    ctx.set_fonts(fonts);
    Ok(())
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        Theme::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
        Theme::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
        Theme::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
        Theme::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
    }
}

/// Draws one frame from `state` and returns the actions the user triggered in it.
pub fn ui_main(ctx: &egui::Context, heading: &str, state: &AppState) -> Vec<Action> {
    let mut actions = Vec::new();
    let blocked = state.notice.is_some();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::Frame::default()
            .outer_margin(egui::vec2(0.0, 4.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(heading);
                });
                ui.add_space(4.0);
                ui.add_enabled_ui(!blocked, |ui| {
                    ui.horizontal(|ui| {
                        let current = state.view.current;
                        if ui
                            .selectable_label(current == View::Create, "Create Poll")
                            .clicked()
                        {
                            actions.push(Action::ShowCreate);
                        }
                        if ui
                            .selectable_label(current == View::List, "View Polls")
                            .clicked()
                        {
                            actions.push(Action::ShowList);
                        }
                        if state.view.selected.is_some()
                            && ui
                                .selectable_label(current == View::Results, "Results")
                                .clicked()
                        {
                            actions.push(Action::ShowSelectedResults);
                        }
                    });
                });
            });
    });

    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Polls: {}", state.polls.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let votes: u64 = state.polls.iter().map(|poll| poll.total_votes).sum();
                ui.label(format!("Votes cast: {}", votes));
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(!blocked, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match state.view.current {
                    View::Create => screens::create_form(ui, &state.draft, &mut actions),
                    View::List => screens::poll_list(ui, &state.polls, &mut actions),
                    View::Results => {
                        screens::poll_results(ui, state.selected_poll(), &mut actions)
                    }
                });
        });
    });

    if let Some(message) = &state.notice {
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    actions.push(Action::DismissNotice);
                }
            });
    }

    actions
}
