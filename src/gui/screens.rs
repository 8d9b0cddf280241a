use egui::{Align, Layout, RichText};

use super::results::ResultsSummary;
use crate::models::draft::Draft;
use crate::models::events::Action;
use crate::models::poll::Poll;
use crate::store::PollStore;

pub fn create_form(ui: &mut egui::Ui, draft: &Draft, actions: &mut Vec<Action>) {
    ui.heading("Create a New Poll");
    ui.add_space(12.0);

    ui.label(RichText::new("Poll Question").strong());
    let mut title = draft.title.clone();
    let title_edit = egui::TextEdit::singleline(&mut title)
        .hint_text("Enter your question here")
        .desired_width(f32::INFINITY);
    if ui.add(title_edit).changed() {
        actions.push(Action::SetTitle(title));
    }
    ui.add_space(12.0);

    ui.label(RichText::new("Options").strong());
    for (index, option) in draft.options.iter().enumerate() {
        ui.horizontal(|ui| {
            let mut text = option.clone();
            let width = ui.available_width() - 36.0;
            let edit = egui::TextEdit::singleline(&mut text)
                .hint_text(format!("Option {}", index + 1))
                .desired_width(width);
            if ui.add(edit).changed() {
                actions.push(Action::SetOptionText { index, text });
            }
            if ui.button("✕").on_hover_text("Remove option").clicked() {
                actions.push(Action::RemoveOption { index });
            }
        });
    }
    if ui.button("+ Add Option").clicked() {
        actions.push(Action::AddOption);
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Create Poll").clicked() {
                actions.push(Action::SubmitDraft);
            }
        });
    });
}

pub fn poll_list(ui: &mut egui::Ui, polls: &PollStore, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.heading("Available Polls");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("+ New Poll").clicked() {
                actions.push(Action::ShowCreate);
            }
        });
    });
    ui.add_space(12.0);

    if polls.is_empty() {
        ui.weak("No polls have been created yet.");
        return;
    }

    for poll in polls.iter() {
        poll_card(ui, poll, actions);
        ui.add_space(8.0);
    }
}

fn poll_card(ui: &mut egui::Ui, poll: &Poll, actions: &mut Vec<Action>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(&poll.title).strong().size(16.0));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Delete").clicked() {
                    actions.push(Action::DeletePoll(poll.id));
                }
                if ui.button("Results").clicked() {
                    actions.push(Action::ShowResults(poll.id));
                }
            });
        });
        ui.weak(format!("Created: {}", poll.created));
        ui.weak(format!("Total votes: {}", poll.total_votes));
        ui.add_space(4.0);

        // One click on an option is one vote.
        for (index, option) in poll.options.iter().enumerate() {
            let width = ui.available_width();
            let button = egui::Button::new(&option.text);
            if ui.add_sized([width, 24.0], button).clicked() {
                actions.push(Action::CastVote {
                    poll: poll.id,
                    option: index,
                });
            }
        }
    });
}

pub fn poll_results(ui: &mut egui::Ui, poll: Option<&Poll>, actions: &mut Vec<Action>) {
    let Some(poll) = poll else {
        ui.label("Poll not found");
        return;
    };
    let summary = ResultsSummary::of(poll);

    ui.horizontal(|ui| {
        ui.heading(summary.title);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Back to Polls").clicked() {
                actions.push(Action::ShowList);
            }
        });
    });
    ui.weak(format!("Created: {}", summary.created));
    ui.weak(format!("Total votes: {}", summary.total_votes));
    ui.add_space(12.0);

    match summary.rows {
        None => {
            ui.weak("No votes have been cast yet.");
        }
        Some(rows) => {
            for row in rows {
                ui.horizontal(|ui| {
                    ui.label(row.text);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("{} votes ({}%)", row.votes, row.percent));
                    });
                });
                ui.add(egui::ProgressBar::new(row.percent as f32 / 100.0));
                ui.add_space(8.0);
            }
        }
    }
}
