use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use perceptron_forager::simulation::{ControlMode, SimulationState};
use perceptron_forager::{Agent, DeathCause, Statistics, WorldGrid, sense};

/// Stats panel: run controls, lifetime counters, and the live agent
pub fn ui_system(
    mut contexts: EguiContexts,
    mut simulation_state: ResMut<SimulationState>,
    mut control_mode: ResMut<ControlMode>,
    stats: Res<Statistics>,
    world: Res<WorldGrid>,
    agent: Res<Agent>,
) {
    egui::Window::new("Simulation Info")
        .default_pos(egui::pos2(10.0, 10.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                let button_text = if *simulation_state == SimulationState::Running {
                    "⏸ Pause"
                } else {
                    "▶ Resume"
                };

                if ui.button(button_text).clicked() {
                    *simulation_state = if *simulation_state == SimulationState::Running {
                        SimulationState::Paused
                    } else {
                        SimulationState::Running
                    };
                }

                let mode_text = match *control_mode {
                    ControlMode::Autonomous => "Mode: perceptron",
                    ControlMode::Manual => "Mode: manual",
                };
                if ui.button(mode_text).clicked() {
                    *control_mode = control_mode.toggled();
                }
            });

            ui.separator();
            ui.heading("Statistics");
            ui.separator();

            ui.label(format!("Ticks: {}", stats.ticks));
            ui.label(format!("Episodes finished: {}", stats.deaths()));
            ui.label(format!("Longest life: {} ticks", stats.longest_life));
            ui.label(format!("Most food eaten: {}", stats.most_food_eaten));

            ui.separator();
            ui.label("Deaths:");
            for cause in DeathCause::ALL {
                ui.label(format!("  {}: {}", cause, stats.deaths_by(cause)));
            }

            ui.separator();
            ui.heading("Agent");
            ui.separator();

            ui.label(format!("Position: ({}, {})", agent.x, agent.y));
            ui.label(format!("Facing: {}", agent.facing));
            ui.label(format!("Age: {} ticks", agent.age));
            ui.label(format!("Food eaten: {}", agent.food_eaten));

            resource_bar(ui, "Stamina", agent.stamina, agent.max_stamina, agent.stamina_ratio());
            resource_bar(ui, "Oxygen", agent.oxygen, agent.max_oxygen, agent.oxygen_ratio());
            resource_bar(ui, "Heat", agent.heat, agent.max_heat, agent.heat_ratio());

            ui.separator();
            ui.label("Senses:");
            let input = sense(&world, &agent);
            let mut any = false;
            for name in input.names() {
                ui.monospace(format!("  {}", name));
                any = true;
            }
            if !any {
                ui.colored_label(egui::Color32::GRAY, "  (none)");
            }

            ui.separator();
            ui.label("Controls:");
            ui.label("• F / B / L / R - Step (manual mode)");
            ui.label("• N - Wait one tick (manual mode)");
            ui.label("• Tab - Toggle perceptron / manual");
            ui.label("• Space - Pause / resume");
            ui.label("• Enter - New episode");
            ui.label("• Mouse Wheel / Middle Mouse / Home - Camera");
            ui.label("• C - Follow the agent");
        });
}

fn resource_bar(ui: &mut egui::Ui, label: &str, value: i32, max: i32, ratio: f32) {
    ui.label(format!("{}: {} / {}", label, value, max));
    ui.add(egui::ProgressBar::new(ratio).text(format!("{}%", (ratio * 100.0) as u32)));
}
