//! # Record Model
//!
//! A [`Solid`] is a property bag: an owner label, a density, and a [`Shape`]
//! carrying the variant-specific numeric fields. Nothing here does geometry.
//!
//! | Variant  | Fields (rendering order)      |
//! |----------|-------------------------------|
//! | Sphere   | radius                        |
//! | Box      | a, b, c                       |
//! | Cylinder | x, y, z, radius, height       |
//!
//! Fields are addressed by name through [`Solid::get_field`], which is what
//! lets the condition evaluator in [`crate::attributes`] stay variant-agnostic.

use crate::attributes::{FieldValue, OWNER};
use std::fmt;
use std::str::FromStr;

/// The variant tag of a solid, without its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Box,
    Cylinder,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Sphere, ShapeKind::Box, ShapeKind::Cylinder];

    /// Display name used in renderings.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Box => "Box",
            ShapeKind::Cylinder => "Cylinder",
        }
    }

    /// Numeric fields of this variant, in rendering order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Sphere => &["radius"],
            ShapeKind::Box => &["a", "b", "c"],
            ShapeKind::Cylinder => &["x", "y", "z", "radius", "height"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    /// Case-insensitive. `parallelepiped` is accepted as an alias for `box`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sphere" => Ok(ShapeKind::Sphere),
            "box" | "parallelepiped" => Ok(ShapeKind::Box),
            "cylinder" => Ok(ShapeKind::Cylinder),
            _ => Err(format!("Unknown shape type: {}", s)),
        }
    }
}

/// Variant-specific fields of a solid.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f64,
    },
    Box {
        a: f64,
        b: f64,
        c: f64,
    },
    Cylinder {
        x: f64,
        y: f64,
        z: f64,
        radius: f64,
        height: f64,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
        }
    }

    /// Looks up a numeric field by its lowercase name.
    fn number(&self, name: &str) -> Option<f64> {
        match (self, name) {
            (Shape::Sphere { radius }, "radius") => Some(*radius),
            (Shape::Box { a, .. }, "a") => Some(*a),
            (Shape::Box { b, .. }, "b") => Some(*b),
            (Shape::Box { c, .. }, "c") => Some(*c),
            (Shape::Cylinder { x, .. }, "x") => Some(*x),
            (Shape::Cylinder { y, .. }, "y") => Some(*y),
            (Shape::Cylinder { z, .. }, "z") => Some(*z),
            (Shape::Cylinder { radius, .. }, "radius") => Some(*radius),
            (Shape::Cylinder { height, .. }, "height") => Some(*height),
            _ => None,
        }
    }
}

/// One record in the container.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub owner: String,
    pub density: f64,
    pub shape: Shape,
}

impl Solid {
    pub fn new(shape: Shape, density: f64, owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            density,
            shape,
        }
    }

    pub fn sphere(radius: f64, density: f64, owner: impl Into<String>) -> Self {
        Self::new(Shape::Sphere { radius }, density, owner)
    }

    pub fn cuboid(a: f64, b: f64, c: f64, density: f64, owner: impl Into<String>) -> Self {
        Self::new(Shape::Box { a, b, c }, density, owner)
    }

    pub fn cylinder(
        (x, y, z): (f64, f64, f64),
        radius: f64,
        height: f64,
        density: f64,
        owner: impl Into<String>,
    ) -> Self {
        Self::new(
            Shape::Cylinder {
                x,
                y,
                z,
                radius,
                height,
            },
            density,
            owner,
        )
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Get a field by name (case-insensitive).
    ///
    /// `owner` is the only text field; `density` and the variant fields are
    /// numbers. Returns `None` when this variant has no such field.
    pub fn get_field(&self, name: &str) -> Option<FieldValue> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            OWNER => Some(FieldValue::Text(self.owner.clone())),
            "density" => Some(FieldValue::Number(self.density)),
            other => self.shape.number(other).map(FieldValue::Number),
        }
    }

    /// Human-readable rendering, optionally prefixed with a reason
    /// (e.g. "Added").
    pub fn render(&self, reason: &str) -> String {
        let body = match &self.shape {
            Shape::Sphere { radius } => format!("Sphere: Radius={}", radius),
            Shape::Box { a, b, c } => format!("Box: a={}, b={}, c={}", a, b, c),
            Shape::Cylinder {
                x,
                y,
                z,
                radius,
                height,
            } => format!(
                "Cylinder: (x={}, y={}, z={}), Radius={}, Height={}",
                x, y, z, radius, height
            ),
        };
        let body = format!("{}, Density={}, Owner={}", body, self.density, self.owner);

        if reason.is_empty() {
            body
        } else {
            format!("{} {}", reason, body)
        }
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}
