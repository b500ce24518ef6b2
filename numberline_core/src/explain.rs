// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three-step explanation: where we start, how we move, where we land.

use alloc::format;
use alloc::string::String;

use crate::input::Inputs;
use crate::path::JumpStyle;

/// Which way the walker steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StepDirection {
    /// Non-negative movement: forward, to the right.
    Forward,
    /// Negative movement: backward, to the left.
    Backward,
}

impl StepDirection {
    /// Direction of travel for a movement.
    #[must_use]
    pub fn for_delta(delta: i64) -> Self {
        if delta >= 0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// The side of the line the walker heads toward.
    #[must_use]
    pub fn side(self) -> &'static str {
        match self {
            Self::Forward => "derecha",
            Self::Backward => "izquierda",
        }
    }

    /// Sign word for the movement.
    #[must_use]
    pub fn sign_word(self) -> &'static str {
        match self {
            Self::Forward => "positivo",
            Self::Backward => "negativo",
        }
    }
}

/// The narrative for a complete addition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Narrative {
    /// Where the walk starts.
    pub start: i64,
    /// The movement as typed.
    pub delta: i64,
    /// Number of unit steps, `|delta|`.
    pub magnitude: u64,
    /// Which way the steps go.
    pub direction: StepDirection,
    /// The path style the narrative points at; always agrees with the drawn path.
    pub style: JumpStyle,
    /// Where the walk ends.
    pub sum: i64,
}

/// Builds the narrative, or `None` while the inputs are incomplete.
///
/// A zero movement is explained like any other: zero steps forward.
#[must_use]
pub fn explain(inputs: &Inputs) -> Option<Narrative> {
    let addition = inputs.addition()?;
    Some(Narrative {
        start: addition.start,
        delta: addition.delta,
        magnitude: addition.delta.unsigned_abs(),
        direction: StepDirection::for_delta(addition.delta),
        style: JumpStyle::for_delta(addition.delta),
        sum: addition.sum,
    })
}

impl Narrative {
    /// Step 1: the starting point.
    #[must_use]
    pub fn start_step(&self) -> String {
        format!(
            "Empezamos en el número {}. Ese es nuestro punto de partida en la recta.",
            self.start
        )
    }

    /// Step 2: the movement, its direction, and which path to look at.
    #[must_use]
    pub fn move_step(&self) -> String {
        format!(
            "Le sumamos {}. Como es un número {}, damos {} pasos hacia la {}. \
             (Observa la línea {} en la recta numérica)",
            self.delta,
            self.direction.sign_word(),
            self.magnitude,
            self.direction.side(),
            self.style.color_name(),
        )
    }

    /// Step 3: the landing point.
    #[must_use]
    pub fn arrive_step(&self) -> String {
        format!(
            "¡Aterrizamos en el {}! Ese es nuestro resultado final.",
            self.sum
        )
    }

    /// All three steps in order.
    #[must_use]
    pub fn steps(&self) -> [String; 3] {
        [self.start_step(), self.move_step(), self.arrive_step()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_has_no_narrative() {
        assert_eq!(explain(&Inputs::new(Some(1), None)), None);
        assert_eq!(explain(&Inputs::new(None, Some(1))), None);
    }

    #[test]
    fn backward_move() {
        let n = explain(&Inputs::new(Some(3), Some(-5))).unwrap();
        assert_eq!(n.magnitude, 5);
        assert_eq!(n.direction, StepDirection::Backward);
        assert_eq!(n.style, JumpStyle::Negative);
        assert_eq!(n.sum, -2);

        let [first, second, third] = n.steps();
        assert!(first.contains(" 3."));
        assert!(second.contains("negativo"));
        assert!(second.contains("damos 5 pasos hacia la izquierda"));
        assert!(second.contains("línea roja"));
        assert!(third.contains("-2"));
    }

    #[test]
    fn forward_move_points_at_blue_path() {
        let n = explain(&Inputs::new(Some(-10), Some(4))).unwrap();
        assert_eq!(n.direction, StepDirection::Forward);
        assert!(n.move_step().contains("hacia la derecha"));
        assert!(n.move_step().contains("línea azul"));
    }

    #[test]
    fn zero_move_is_zero_steps_forward() {
        let n = explain(&Inputs::new(Some(7), Some(0))).unwrap();
        assert_eq!(n.magnitude, 0);
        assert_eq!(n.direction, StepDirection::Forward);
        assert!(n.move_step().contains("damos 0 pasos"));
        assert_eq!(n.sum, 7);
    }

    #[test]
    fn extreme_magnitude() {
        let n = explain(&Inputs::new(Some(0), Some(i64::MIN))).unwrap();
        assert_eq!(n.magnitude, 1_u64 << 63);
    }
}
