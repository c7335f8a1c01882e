//! The request-scoped form model and its transition rule.

use magbranch_components::electrical::open_circuit::{
    OpenCircuitError, OpenCircuitInput, OpenCircuitOutput, OpenCircuitTest,
};
use magbranch_core::{Component, ConstraintError, NonNegative, StrictlyPositive};
use serde::{Deserialize, Serialize};
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Power},
    power::watt,
};

/// One submission of the calculator form, in fixed SI units.
///
/// A fresh instance is deserialized from every request body; nothing is
/// shared across requests or retained between submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCircuitForm {
    /// Open-circuit voltage in volts.
    pub v0: f64,

    /// Open-circuit current in amperes.
    pub i0: f64,

    /// Open-circuit power in watts.
    pub w0: f64,
}

impl Default for OpenCircuitForm {
    fn default() -> Self {
        let input = OpenCircuitInput::default();
        Self {
            v0: input.voltage.get::<volt>(),
            i0: input.current.get::<ampere>(),
            w0: input.power.get::<watt>(),
        }
    }
}

impl From<&OpenCircuitForm> for OpenCircuitInput {
    fn from(form: &OpenCircuitForm) -> Self {
        Self {
            voltage: ElectricPotential::new::<volt>(form.v0),
            current: ElectricCurrent::new::<ampere>(form.i0),
            power: Power::new::<watt>(form.w0),
        }
    }
}

/// The outcome of one calculate action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Both parameters were derived; the page shows the success banner.
    Success(OpenCircuitOutput),

    /// The submission was rejected; the page shows this text in the error
    /// banner.
    Error(String),
}

/// Applies the calculate action to one submitted form.
///
/// A zero `I0` is rejected here, before the component is invoked. The other
/// fields are validated server side as well, even though the page already
/// enforces `min="0"` on every input.
pub fn submit(form: &OpenCircuitForm) -> Outcome {
    match evaluate(form) {
        Ok(output) => Outcome::Success(output),
        Err(message) => Outcome::Error(message),
    }
}

fn evaluate(form: &OpenCircuitForm) -> Result<OpenCircuitOutput, String> {
    if let Err(err) = StrictlyPositive::new(form.i0) {
        return Err(match err {
            ConstraintError::Zero => OpenCircuitError::ZeroCurrent.to_string(),
            _ => field_message("Open Circuit Current (I0)", err),
        });
    }
    check_non_negative("Open Circuit Voltage (V0)", form.v0)?;
    check_non_negative("Open Circuit Power (W0)", form.w0)?;

    OpenCircuitTest
        .call(form.into())
        .map_err(|err| err.to_string())
}

fn check_non_negative(field: &str, value: f64) -> Result<(), String> {
    NonNegative::new(value)
        .map(drop)
        .map_err(|err| field_message(field, err))
}

fn field_message(field: &str, err: ConstraintError) -> String {
    format!("{field}: {err}.")
}
