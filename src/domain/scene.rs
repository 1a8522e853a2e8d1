//! Scene handle contract and the value types commands pass through it.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ConsoleError;

/// What the dispatcher needs from a scene: nothing but a presence check.
pub trait Scene {
    /// False while there is no active content to operate on.
    fn is_initialized(&self) -> bool;
}

/// Mutation surface used by the standard command actions.
///
/// Methods that take a node id return `false`/`None` when the id no longer
/// refers to a live node.
pub trait SceneGraph: Scene {
    type NodeId: Copy + fmt::Debug;

    /// Recursive search below the root; first match in pre-order wins.
    fn find_node(&self, name: &str) -> Option<Self::NodeId>;

    /// Names of all nodes below the root, pre-order.
    fn node_names(&self) -> Vec<String>;

    /// Create a node with `geometry` at the origin, attached to the root.
    fn spawn(&mut self, name: &str, geometry: Geometry) -> Option<Self::NodeId>;

    /// Destroy a node together with its subtree.
    fn remove(&mut self, node: Self::NodeId) -> bool;

    fn position(&self, node: Self::NodeId) -> Option<Vec3>;

    fn set_position(&mut self, node: Self::NodeId, position: Vec3) -> bool;

    fn translate(&mut self, node: Self::NodeId, offset: Vec3) -> bool {
        match self.position(node) {
            Some(current) => self.set_position(node, current + offset),
            None => false,
        }
    }

    fn set_color(&mut self, node: Self::NodeId, color: Color) -> bool;

    fn set_light(&mut self, node: Self::NodeId, light: Option<LightKind>) -> bool;

    fn set_physics_body(&mut self, node: Self::NodeId, body: Option<BodyType>) -> bool;

    /// Returns false when the node is gone or has no physics body.
    fn apply_force(&mut self, node: Self::NodeId, force: Vec3, mode: ForceMode) -> bool;

    /// Returns false when the node is gone or has no physics body.
    fn apply_torque(&mut self, node: Self::NodeId, torque: Vec3, mode: ForceMode) -> bool;

    fn set_gravity(&mut self, gravity: Vec3);

    fn set_camera_control(&mut self, enabled: bool);

    /// Rotate the camera by `radians` around `axis`.
    fn rotate_camera(&mut self, axis: Axis, radians: f32);
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Diffuse color, each component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        length: f32,
        chamfer: f32,
    },
    Sphere {
        radius: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Omni,
    Directional,
    Spot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Static,
    Dynamic,
    Kinematic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    Impulse,
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

// Keyword arguments parse case-sensitively; anything else is invalid input.
macro_rules! keyword_enum {
    ($ty:ty { $($word:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = ConsoleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($word => Ok($variant),)+
                    _ => Err(ConsoleError::InvalidArguments),
                }
            }
        }
    };
}

keyword_enum!(LightKind {
    "ambient" => LightKind::Ambient,
    "omni" => LightKind::Omni,
    "directional" => LightKind::Directional,
    "spot" => LightKind::Spot,
});

keyword_enum!(BodyType {
    "static" => BodyType::Static,
    "dynamic" => BodyType::Dynamic,
    "kinematic" => BodyType::Kinematic,
});

keyword_enum!(ForceMode {
    "impulse" => ForceMode::Impulse,
    "continuous" => ForceMode::Continuous,
});

keyword_enum!(Axis {
    "x" => Axis::X,
    "y" => Axis::Y,
    "z" => Axis::Z,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_keywords_when_parsing_then_maps_variants() {
        assert_eq!("omni".parse::<LightKind>(), Ok(LightKind::Omni));
        assert_eq!("kinematic".parse::<BodyType>(), Ok(BodyType::Kinematic));
        assert_eq!("impulse".parse::<ForceMode>(), Ok(ForceMode::Impulse));
        assert_eq!("z".parse::<Axis>(), Ok(Axis::Z));
    }

    #[test]
    fn given_unknown_keyword_when_parsing_then_invalid_arguments() {
        assert_eq!("Omni".parse::<LightKind>(), Err(ConsoleError::InvalidArguments));
        assert_eq!("w".parse::<Axis>(), Err(ConsoleError::InvalidArguments));
    }

    #[test]
    fn given_vectors_when_adding_then_componentwise() {
        let sum = Vec3::new(1.0, 2.0, 3.0) + Vec3::from([0.5, -2.0, 0.0]);
        assert_eq!(sum, Vec3::new(1.5, 0.0, 3.0));
        assert_eq!(sum.to_string(), "(1.5, 0, 3)");
    }
}
