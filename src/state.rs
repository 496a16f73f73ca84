//! Calculator state: the editable fields, the last projection and which view
//! is showing.
//!
//! Every mutation goes through [`Calculator`]. The projection only changes on a
//! successful [`Calculator::calculate`] or on [`Calculator::reset`].

use tracing::{debug, info};

use crate::amount::Amount;
use crate::engine::{self, SavingsResult};
use crate::error::ValidationError;

pub const DEFAULT_FREQUENCY: &str = "1";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    FormVisible,
    ResultsVisible,
}

/// The two currency fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OldHabitCost,
    NewHabitCost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    old_habit_cost: Amount,
    new_habit_cost: Amount,
    frequency: String,
    savings: SavingsResult,
    mode: DisplayMode,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            old_habit_cost: Amount::default(),
            new_habit_cost: Amount::default(),
            frequency: DEFAULT_FREQUENCY.to_string(),
            savings: SavingsResult::default(),
            mode: DisplayMode::FormVisible,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the digits of `text` in `field`; everything else is discarded.
    pub fn set_amount(&mut self, field: Field, text: &str) {
        let amount = Amount::sanitize(text);
        debug!(?field, digits = amount.as_str(), "amount edited");
        *self.amount_mut(field) = amount;
    }

    /// Stores `text` as typed. Checked only when calculating.
    pub fn set_frequency(&mut self, text: &str) {
        debug!(frequency = text, "frequency edited");
        self.frequency = text.to_string();
    }

    pub fn pop_amount(&mut self, field: Field) {
        self.amount_mut(field).pop();
    }

    pub fn pop_frequency(&mut self) {
        self.frequency.pop();
    }

    pub fn amount(&self, field: Field) -> &Amount {
        match field {
            Field::OldHabitCost => &self.old_habit_cost,
            Field::NewHabitCost => &self.new_habit_cost,
        }
    }

    fn amount_mut(&mut self, field: Field) -> &mut Amount {
        match field {
            Field::OldHabitCost => &mut self.old_habit_cost,
            Field::NewHabitCost => &mut self.new_habit_cost,
        }
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn savings(&self) -> &SavingsResult {
        &self.savings
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Runs the engine on the current fields. On failure nothing changes.
    pub fn calculate(&mut self) -> Result<&SavingsResult, ValidationError> {
        let savings = engine::calculate(
            self.old_habit_cost.as_str(),
            self.new_habit_cost.as_str(),
            &self.frequency,
        )
        .inspect_err(|_| {
            debug!(
                old = self.old_habit_cost.as_str(),
                new = self.new_habit_cost.as_str(),
                frequency = %self.frequency,
                "rejected compute input"
            )
        })?;

        info!(weekly = savings.weekly, yearly = savings.yearly, "savings calculated");
        self.savings = savings;
        self.mode = DisplayMode::ResultsVisible;
        Ok(&self.savings)
    }

    pub fn reset(&mut self) {
        info!("calculator reset");
        *self = Self::default();
    }

    /// The chart is only drawn for a positive weekly saving.
    pub fn chart_visible(&self) -> bool {
        self.mode == DisplayMode::ResultsVisible && self.savings.weekly > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(old: &str, new: &str, frequency: &str) -> Calculator {
        let mut calc = Calculator::new();
        calc.set_amount(Field::OldHabitCost, old);
        calc.set_amount(Field::NewHabitCost, new);
        calc.set_frequency(frequency);
        calc
    }

    #[test]
    fn starts_on_the_form_with_defaults() {
        let calc = Calculator::new();
        assert_eq!(calc.mode(), DisplayMode::FormVisible);
        assert!(calc.amount(Field::OldHabitCost).is_unset());
        assert!(calc.amount(Field::NewHabitCost).is_unset());
        assert_eq!(calc.frequency(), "1");
        assert!(calc.savings().is_zero());
    }

    #[test]
    fn amounts_are_sanitized_and_frequency_is_not() {
        let mut calc = Calculator::new();
        calc.set_amount(Field::OldHabitCost, "Rp. 25.000,50");
        calc.set_frequency("3.7x");
        assert_eq!(calc.amount(Field::OldHabitCost).as_str(), "2500050");
        assert_eq!(calc.frequency(), "3.7x");

        calc.set_amount(Field::NewHabitCost, "-");
        assert!(calc.amount(Field::NewHabitCost).is_unset());
    }

    #[test]
    fn successful_calculate_shows_results() {
        let mut calc = filled("50000", "20000", "7");
        let weekly = calc.calculate().unwrap().weekly;
        assert_eq!(weekly, 210_000.0);
        assert_eq!(calc.mode(), DisplayMode::ResultsVisible);
        assert!(calc.chart_visible());
    }

    #[test]
    fn failed_calculate_leaves_everything_in_place() {
        let mut calc = filled("50000", "20000", "7");
        calc.calculate().unwrap();
        let before = *calc.savings();

        calc.set_amount(Field::OldHabitCost, "");
        calc.set_frequency("abc");
        assert_eq!(calc.calculate(), Err(ValidationError));
        assert_eq!(*calc.savings(), before);
        assert_eq!(calc.mode(), DisplayMode::ResultsVisible);
    }

    #[test]
    fn failed_first_calculate_stays_on_form() {
        let mut calc = filled("", "abc", "1");
        assert!(calc.calculate().is_err());
        assert_eq!(calc.mode(), DisplayMode::FormVisible);
        assert!(calc.savings().is_zero());
    }

    #[test]
    fn reset_clears_everything() {
        let mut calc = filled("10000", "15000", "2");
        calc.calculate().unwrap();
        calc.reset();
        assert_eq!(calc, Calculator::default());
        assert_eq!(calc.mode(), DisplayMode::FormVisible);
        assert!(calc.savings().is_zero());

        calc.reset();
        assert_eq!(calc, Calculator::default());
    }

    #[test]
    fn chart_hidden_for_non_positive_savings() {
        let mut calc = filled("10000", "15000", "2");
        calc.calculate().unwrap();
        assert_eq!(calc.mode(), DisplayMode::ResultsVisible);
        assert!(!calc.chart_visible());

        let mut even = filled("10000", "10000", "5");
        even.calculate().unwrap();
        assert!(!even.chart_visible());
    }

    #[test]
    fn pop_removes_the_last_character() {
        let mut calc = filled("1234", "", "12");
        calc.pop_amount(Field::OldHabitCost);
        calc.pop_frequency();
        assert_eq!(calc.amount(Field::OldHabitCost).as_str(), "123");
        assert_eq!(calc.frequency(), "1");

        calc.pop_amount(Field::NewHabitCost);
        assert!(calc.amount(Field::NewHabitCost).is_unset());
    }
}
