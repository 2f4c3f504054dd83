use crate::*;
use chess_lib::view::{AnalysisMode, ParameterControl, Trigger};

/// Dropdown over every analysis mode. Returns the newly picked mode.
pub fn add_mode_selector<M: AnalysisMode>(ui: &mut egui::Ui, current: M) -> Option<M> {
    let mut selected = current;
    egui::ComboBox::from_id_salt("analysis_mode")
        .selected_text(current.label())
        .width(constants::CONTROL_WIDTH)
        .show_ui(ui, |ui| {
            for mode in M::ALL.iter() {
                ui.selectable_value(&mut selected, *mode, mode.label());
            }
        });
    (selected != current).then_some(selected)
}

/// One labelled dropdown per control. Returns whether any selection changed.
pub fn add_parameter_controls(ui: &mut egui::Ui, controls: &mut [ParameterControl]) -> bool {
    let mut changed = false;
    for control in controls.iter_mut() {
        ui.vertical(|ui| {
            ui.label(control.label);
            let selected_text = control.selected_value().unwrap_or_default().to_string();
            egui::ComboBox::from_id_salt(control.key)
                .selected_text(selected_text)
                .width(constants::CONTROL_WIDTH)
                .show_ui(ui, |ui| {
                    for (index, option) in control.options.iter().enumerate() {
                        changed |= ui
                            .selectable_value(&mut control.selected, Some(index), option.as_str())
                            .changed();
                    }
                });
        });
    }
    changed
}

/// Button for [`Trigger::Button`] modes. Returns whether it was pressed.
pub fn add_trigger(ui: &mut egui::Ui, trigger: Trigger) -> bool {
    match trigger {
        Trigger::OnChange => false,
        Trigger::Button(label) => ui
            .vertical(|ui| {
                ui.label("");
                ui.button(label).clicked()
            })
            .inner,
    }
}
