use magbranch_core::Component;
use serde::{Serialize, Serializer};
use thiserror::Error;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance, Power, Ratio},
    power::watt,
    ratio::ratio,
};

/// Component for deriving a transformer's shunt-branch parameters from an
/// open-circuit test.
///
/// With the secondary winding open, the measured voltage `V0`, current `I0`,
/// and real power `W0` determine the core-loss resistance `R0` and the
/// magnetizing reactance `X0` of the equivalent circuit:
///
/// 1. Power factor: `pf = W0 / (V0 * I0)`
/// 2. Core-loss current: `Iw = I0 * pf`
/// 3. Magnetizing current: `Im = I0 * sqrt(1 - pf^2)`
/// 4. `R0 = V0 / Iw`
/// 5. `X0 = V0 / Im`
pub struct OpenCircuitTest;

/// Input structure for the [`OpenCircuitTest`] component.
///
/// All three quantities are measured at the primary terminals with the
/// secondary open. Voltage and power must be non-negative; current must be
/// strictly positive for the power factor to be defined.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenCircuitInput {
    /// The open-circuit terminal voltage, `V0`.
    pub voltage: ElectricPotential,

    /// The open-circuit line current, `I0`.
    pub current: ElectricCurrent,

    /// The open-circuit real power, `W0`.
    pub power: Power,
}

impl Default for OpenCircuitInput {
    fn default() -> Self {
        OpenCircuitInput {
            voltage: ElectricPotential::new::<volt>(230.0),
            current: ElectricCurrent::new::<ampere>(1.0),
            power: Power::new::<watt>(100.0),
        }
    }
}

/// Output structure for the [`OpenCircuitTest`] component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenCircuitOutput {
    /// The equivalent core-loss resistance, `R0`, in ohms.
    #[serde(serialize_with = "serialize_resistance")]
    pub core_loss_resistance: ElectricalResistance,

    /// The equivalent magnetizing reactance, `X0`, in ohms.
    #[serde(serialize_with = "serialize_resistance")]
    pub magnetizing_reactance: ElectricalResistance,
}

/// Errors returned by the [`OpenCircuitTest`] component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpenCircuitError {
    /// The measured current is zero, leaving the power factor undefined.
    #[error("Open Circuit Current (I0) must be greater than zero.")]
    ZeroCurrent,

    /// The measurements are inconsistent with a passive shunt branch, so the
    /// formula has no defined result.
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(MeasurementIssue),
}

/// The physical condition that makes an open-circuit measurement invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasurementIssue {
    /// `V0 = 0` makes the power factor undefined.
    #[error("power factor is undefined at zero voltage")]
    ZeroVoltage,

    /// `W0 = 0` gives a zero power factor, leaving no core-loss current to
    /// derive `R0` from.
    #[error("zero power factor leaves no core-loss current")]
    ZeroPowerFactor,

    /// `W0 > V0 * I0` gives a power factor above one, which no passive load
    /// can produce.
    #[error("real power exceeds apparent power (power factor > 1)")]
    PowerExceedsApparent,

    /// A power factor of exactly one leaves no magnetizing current to derive
    /// `X0` from.
    #[error("unity power factor leaves no magnetizing current")]
    UnityPowerFactor,
}

impl Component for OpenCircuitTest {
    type Input = OpenCircuitInput;
    type Output = OpenCircuitOutput;
    type Error = OpenCircuitError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let OpenCircuitInput {
            voltage,
            current,
            power,
        } = input;

        if current.get::<ampere>() == 0.0 {
            return Err(OpenCircuitError::ZeroCurrent);
        }
        if voltage.get::<volt>() == 0.0 {
            return Err(OpenCircuitError::InvalidMeasurement(
                MeasurementIssue::ZeroVoltage,
            ));
        }

        let power_factor: Ratio = power / (voltage * current);
        let power_factor = power_factor.get::<ratio>();
        if power_factor > 1.0 {
            return Err(OpenCircuitError::InvalidMeasurement(
                MeasurementIssue::PowerExceedsApparent,
            ));
        }

        let core_loss_current = current * power_factor;
        let magnetizing_current = current * (1.0 - power_factor * power_factor).sqrt();

        if magnetizing_current.get::<ampere>() == 0.0 {
            return Err(OpenCircuitError::InvalidMeasurement(
                MeasurementIssue::UnityPowerFactor,
            ));
        }
        if core_loss_current.get::<ampere>() == 0.0 {
            return Err(OpenCircuitError::InvalidMeasurement(
                MeasurementIssue::ZeroPowerFactor,
            ));
        }

        Ok(Self::Output {
            core_loss_resistance: voltage / core_loss_current,
            magnetizing_reactance: voltage / magnetizing_current,
        })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_resistance<S>(
    resistance: &ElectricalResistance,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(resistance.get::<ohm>())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn input(volts: f64, amperes: f64, watts: f64) -> OpenCircuitInput {
        OpenCircuitInput {
            voltage: ElectricPotential::new::<volt>(volts),
            current: ElectricCurrent::new::<ampere>(amperes),
            power: Power::new::<watt>(watts),
        }
    }

    #[test]
    fn reference_test_measurement() {
        let output = OpenCircuitTest.call(input(230.0, 1.0, 100.0)).unwrap();

        assert_relative_eq!(
            output.core_loss_resistance.get::<ohm>(),
            529.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            output.magnetizing_reactance.get::<ohm>(),
            255.40,
            epsilon = 1e-2
        );
    }

    #[test]
    fn two_ampere_measurement() {
        let output = OpenCircuitTest.call(input(400.0, 2.0, 300.0)).unwrap();

        assert_relative_eq!(
            output.core_loss_resistance.get::<ohm>(),
            533.33,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            output.magnetizing_reactance.get::<ohm>(),
            215.74,
            epsilon = 1e-2
        );
    }

    #[test]
    fn matches_closed_form_formula() {
        let cases = [
            (230.0, 1.0, 100.0),
            (400.0, 2.0, 300.0),
            (11000.0, 0.6, 1250.0),
            (0.5, 0.01, 0.002),
        ];

        for (volts, amperes, watts) in cases {
            let output = OpenCircuitTest.call(input(volts, amperes, watts)).unwrap();

            let power_factor = watts / (volts * amperes);
            let expected_r = volts / (amperes * power_factor);
            let expected_x = volts / (amperes * (1.0 - power_factor * power_factor).sqrt());

            assert_relative_eq!(
                output.core_loss_resistance.get::<ohm>(),
                expected_r,
                max_relative = 1e-9
            );
            assert_relative_eq!(
                output.magnetizing_reactance.get::<ohm>(),
                expected_x,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        let first = OpenCircuitTest.call(input(230.0, 1.0, 100.0)).unwrap();
        let second = OpenCircuitTest.call(input(230.0, 1.0, 100.0)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn zero_current_is_rejected_before_the_arithmetic() {
        for (volts, watts) in [(230.0, 100.0), (0.0, 0.0), (400.0, 0.0)] {
            let result = OpenCircuitTest.call(input(volts, 0.0, watts));
            assert_eq!(result, Err(OpenCircuitError::ZeroCurrent));
        }
    }

    #[test]
    fn zero_current_message_is_the_user_facing_text() {
        assert_eq!(
            OpenCircuitError::ZeroCurrent.to_string(),
            "Open Circuit Current (I0) must be greater than zero."
        );
    }

    #[test]
    fn zero_voltage_is_a_domain_error() {
        let result = OpenCircuitTest.call(input(0.0, 1.0, 100.0));
        assert_eq!(
            result,
            Err(OpenCircuitError::InvalidMeasurement(
                MeasurementIssue::ZeroVoltage
            ))
        );
    }

    #[test]
    fn power_above_apparent_power_is_a_domain_error() {
        let result = OpenCircuitTest.call(input(230.0, 1.0, 300.0));
        assert_eq!(
            result,
            Err(OpenCircuitError::InvalidMeasurement(
                MeasurementIssue::PowerExceedsApparent
            ))
        );
    }

    #[test]
    fn unity_power_factor_is_a_domain_error() {
        let result = OpenCircuitTest.call(input(100.0, 1.0, 100.0));
        assert_eq!(
            result,
            Err(OpenCircuitError::InvalidMeasurement(
                MeasurementIssue::UnityPowerFactor
            ))
        );
    }

    #[test]
    fn zero_power_is_a_domain_error() {
        let result = OpenCircuitTest.call(input(230.0, 1.0, 0.0));
        assert_eq!(
            result,
            Err(OpenCircuitError::InvalidMeasurement(
                MeasurementIssue::ZeroPowerFactor
            ))
        );
    }

    #[test]
    fn output_serializes_in_ohms() {
        let output = OpenCircuitTest.call(input(230.0, 1.0, 100.0)).unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_relative_eq!(
            json["core_loss_resistance"].as_f64().unwrap(),
            529.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            json["magnetizing_reactance"].as_f64().unwrap(),
            255.40,
            epsilon = 1e-2
        );
    }
}
