use crate::canvas::CanvasHost;
use crate::chart::Chart;
use crate::error::{RenderError, SelectionError};

/// Renders a chart for the current selection. `Ok(None)` means no matching
/// record exists.
pub type Renderer<D> = fn(&D, &Selection) -> Result<Option<Chart>, RenderError>;

/// What makes the mounted controls render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Any change of a parameter control renders immediately.
    OnChange,
    /// Renders when the button with this label is pressed.
    Button(&'static str),
}

/// One analysis view of a dashboard. The first variant (`Default`) is
/// entered at startup.
pub trait AnalysisMode: Copy + PartialEq + Default + std::fmt::Debug + 'static {
    type Data: 'static;

    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// Builds this mode's parameter controls, each set to its first option.
    fn mount(&self, data: &Self::Data) -> Vec<ParameterControl>;

    fn trigger(&self) -> Trigger;

    fn renderer(&self) -> Renderer<Self::Data>;
}

/// A dropdown feeding one named value into the [`Selection`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterControl {
    pub key: &'static str,
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl ParameterControl {
    pub fn new(key: &'static str, label: &'static str, options: Vec<String>) -> Self {
        let selected = if options.is_empty() { None } else { Some(0) };
        Self {
            key,
            label,
            options,
            selected,
        }
    }

    pub fn from_static(key: &'static str, label: &'static str, options: &[&str]) -> Self {
        Self::new(key, label, options.iter().map(|o| o.to_string()).collect())
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }
}

/// Snapshot of the values of the mounted controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    values: Vec<(&'static str, Option<String>)>,
}

impl Selection {
    pub fn from_controls(controls: &[ParameterControl]) -> Self {
        Self {
            values: controls
                .iter()
                .map(|control| (control.key, control.selected_value().map(String::from)))
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with(mut self, key: &'static str, value: &str) -> Self {
        self.values.retain(|(k, _)| *k != key);
        self.values.push((key, Some(value.to_string())));
        self
    }

    /// The selected value for `key`, rejecting unset or blank values.
    pub fn get(&self, key: &'static str) -> Result<&str, SelectionError> {
        let value = self
            .values
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, value)| value.as_deref())
            .ok_or(SelectionError::Missing(key))?;
        if value.trim().is_empty() {
            return Err(SelectionError::Empty(key));
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderOutcome {
    Displayed,
    NotFound,
}

/// Active mode plus the controls mounted for it.
#[derive(Debug)]
pub struct ViewSelector<M: AnalysisMode> {
    mode: M,
    controls: Vec<ParameterControl>,
}

impl<M: AnalysisMode> ViewSelector<M> {
    pub fn new(data: &M::Data) -> Self {
        let mode = M::default();
        tracing::info!(mode = mode.label(), "entering initial mode");
        Self {
            mode,
            controls: mode.mount(data),
        }
    }

    pub fn mode(&self) -> M {
        self.mode
    }

    pub fn controls(&self) -> &[ParameterControl] {
        &self.controls
    }

    /// Switches to `mode`, replacing every mounted control. Selecting the
    /// active mode keeps the current controls and returns `false`.
    pub fn select_mode(&mut self, mode: M, data: &M::Data) -> bool {
        if mode == self.mode {
            return false;
        }
        tracing::info!(from = self.mode.label(), to = mode.label(), "switching mode");
        self.controls = mode.mount(data);
        self.mode = mode;
        true
    }

    /// Points the control named `key` at option `index`.
    pub fn select(&mut self, key: &'static str, index: usize) -> Result<(), SelectionError> {
        let control = self
            .controls
            .iter_mut()
            .find(|control| control.key == key)
            .ok_or(SelectionError::Missing(key))?;
        if index >= control.options.len() {
            return Err(SelectionError::Invalid {
                control: key,
                value: index.to_string(),
            });
        }
        control.selected = Some(index);
        Ok(())
    }

    /// Like [`Self::select`], looking the option up by its text.
    pub fn select_value(&mut self, key: &'static str, value: &str) -> Result<(), SelectionError> {
        let index = self
            .controls
            .iter()
            .find(|control| control.key == key)
            .ok_or(SelectionError::Missing(key))?
            .options
            .iter()
            .position(|option| option == value)
            .ok_or_else(|| SelectionError::Invalid {
                control: key,
                value: value.to_string(),
            })?;
        self.select(key, index)
    }

    pub fn controls_mut(&mut self) -> &mut [ParameterControl] {
        &mut self.controls
    }

    pub fn selection(&self) -> Selection {
        Selection::from_controls(&self.controls)
    }

    /// Runs the active mode's renderer. A found chart replaces the one on
    /// `canvas`; a miss leaves `canvas` untouched.
    pub fn render(
        &self,
        data: &M::Data,
        canvas: &mut CanvasHost,
    ) -> Result<RenderOutcome, RenderError> {
        let selection = self.selection();
        match (self.mode.renderer())(data, &selection)? {
            Some(chart) => {
                canvas.display(chart);
                Ok(RenderOutcome::Displayed)
            }
            None => {
                tracing::warn!(mode = self.mode.label(), ?selection, "No data found.");
                Ok(RenderOutcome::NotFound)
            }
        }
    }
}
