use crate::core::calculator::Calculator;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct Computation {
    pub operation: String,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Computation {
    fn new(operation: &str, x: f64, y: f64, value: f64) -> Self {
        Self {
            operation: operation.to_string(),
            x,
            y,
            value,
        }
    }
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.value)
    }
}

/// Runs the fixed demonstration sequence against a calculator and
/// collects one labeled computation per step.
pub struct Demo {
    calc: Calculator,
}

impl Demo {
    pub fn new(calc: Calculator) -> Self {
        Self { calc }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    pub fn run(&mut self) -> Result<Vec<Computation>> {
        let mut report = Vec::with_capacity(4);

        tracing::debug!("Running addition step");
        let sum = self.calc.add(5.0, 3.0);
        report.push(Computation::new("Addition", 5.0, 3.0, sum));

        tracing::debug!("Running subtraction step");
        let difference = self.calc.subtract(10.0, 4.0);
        report.push(Computation::new("Subtraction", 10.0, 4.0, difference));

        tracing::debug!("Running multiplication step");
        let product = self.calc.multiply(6.0, 7.0);
        report.push(Computation::new("Multiplication", 6.0, 7.0, product));

        tracing::debug!("Running division step");
        let quotient = self.calc.divide(20.0, 5.0)?;
        report.push(Computation::new("Division", 20.0, 5.0, quotient));

        Ok(report)
    }
}
