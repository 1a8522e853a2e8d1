//! Argument parsing helpers for command actions.
//!
//! Every failure maps to [`ConsoleError::InvalidArguments`] so actions can use `?`.

use std::str::FromStr;

use crate::domain::{Color, ConsoleError, SceneGraph, Vec3};

/// Parse a finite float.
pub fn number(token: &str) -> Result<f32, ConsoleError> {
    token
        .parse::<f32>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ConsoleError::InvalidArguments)
}

/// Parse a float that must be strictly positive.
pub fn positive(token: &str) -> Result<f32, ConsoleError> {
    number(token).and_then(|n| if n > 0.0 { Ok(n) } else { Err(ConsoleError::InvalidArguments) })
}

/// Parse a float that must be zero or more.
pub fn non_negative(token: &str) -> Result<f32, ConsoleError> {
    number(token).and_then(|n| if n >= 0.0 { Ok(n) } else { Err(ConsoleError::InvalidArguments) })
}

/// Parse three consecutive tokens as a vector.
pub fn vec3(tokens: &[&str]) -> Result<Vec3, ConsoleError> {
    match tokens {
        [x, y, z] => Ok(Vec3::new(number(x)?, number(y)?, number(z)?)),
        _ => Err(ConsoleError::InvalidArguments),
    }
}

/// Parse three tokens as an RGB color with components in `[0, 1]`.
pub fn color(tokens: &[&str]) -> Result<Color, ConsoleError> {
    let Vec3 { x: r, y: g, z: b } = vec3(tokens)?;
    if [r, g, b].iter().all(|c| (0.0..=1.0).contains(c)) {
        Ok(Color { r, g, b })
    } else {
        Err(ConsoleError::InvalidArguments)
    }
}

/// Parse a keyword argument.
pub fn keyword<T: FromStr<Err = ConsoleError>>(token: &str) -> Result<T, ConsoleError> {
    token.parse()
}

/// Parse an `on`/`off` switch.
pub fn switch(token: &str) -> Result<bool, ConsoleError> {
    match token {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(ConsoleError::InvalidArguments),
    }
}

/// Resolve a node name in `scene`.
pub fn node<S: SceneGraph>(scene: &S, name: &str) -> Result<S::NodeId, ConsoleError> {
    scene.find_node(name).ok_or(ConsoleError::TargetNotFound)
}
