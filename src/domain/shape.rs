//! Geometric shape model
//!
//! A [`Shape`] is a [`GeometricObject`] (color, filled flag, creation time)
//! plus a [`ShapeKind`] payload. Area and perimeter come from the
//! [`Measurable`] capability, implemented per variant.

use std::f64::consts::PI;
use std::fmt;

use chrono::{DateTime, Local};

pub const DEFAULT_COLOR: &str = "white";

/// Format used when rendering the creation timestamp, e.g. `Tue Jan 02 03:04:05 +01:00 2024`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Area and perimeter of a closed figure.
pub trait Measurable {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

/// Attributes shared by every shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricObject {
    color: String,
    filled: bool,
    created_at: DateTime<Local>,
}

impl GeometricObject {
    /// White, unfilled, created now.
    pub fn new() -> Self {
        Self::with_style(DEFAULT_COLOR, false)
    }

    pub fn with_style(color: impl Into<String>, filled: bool) -> Self {
        Self::with_timestamp(color, filled, Local::now())
    }

    /// Construct with an explicit creation time.
    pub fn with_timestamp(
        color: impl Into<String>,
        filled: bool,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            color: color.into(),
            filled,
            created_at,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

impl Default for GeometricObject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GeometricObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created on {}\nColor: {}\nFilled: {}",
            self.created_at.format(TIMESTAMP_FORMAT),
            self.color,
            self.filled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Measurable for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // {:?} keeps the decimal point: 5.0, not 5
        write!(f, "Circle: radius={:?}", self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Measurable for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle: width={:?}, height={:?}", self.width, self.height)
    }
}

/// Variant payload of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl ShapeKind {
    /// Variant name, lowercase.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Rectangle(_) => "rectangle",
        }
    }
}

impl Measurable for ShapeKind {
    fn area(&self) -> f64 {
        match self {
            ShapeKind::Circle(c) => c.area(),
            ShapeKind::Rectangle(r) => r.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            ShapeKind::Circle(c) => c.perimeter(),
            ShapeKind::Rectangle(r) => r.perimeter(),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle(c) => fmt::Display::fmt(c, f),
            ShapeKind::Rectangle(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl From<Circle> for ShapeKind {
    fn from(c: Circle) -> Self {
        ShapeKind::Circle(c)
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(r: Rectangle) -> Self {
        ShapeKind::Rectangle(r)
    }
}

/// A circle or rectangle together with its base attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    base: GeometricObject,
    kind: ShapeKind,
}

impl Shape {
    /// Shape with default base attributes (white, unfilled, created now).
    pub fn new(kind: impl Into<ShapeKind>) -> Self {
        Self::from_parts(GeometricObject::new(), kind)
    }

    pub fn with_style(kind: impl Into<ShapeKind>, color: impl Into<String>, filled: bool) -> Self {
        Self::from_parts(GeometricObject::with_style(color, filled), kind)
    }

    pub fn from_parts(base: GeometricObject, kind: impl Into<ShapeKind>) -> Self {
        Self {
            base,
            kind: kind.into(),
        }
    }

    pub fn circle(radius: f64) -> Self {
        Self::new(Circle { radius })
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(Rectangle { width, height })
    }

    /// Unit circle.
    pub fn default_circle() -> Self {
        Self::new(Circle::default())
    }

    /// Unit square.
    pub fn default_rectangle() -> Self {
        Self::new(Rectangle::default())
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ShapeKind {
        &mut self.kind
    }

    pub fn color(&self) -> &str {
        self.base.color()
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.base.set_color(color);
    }

    pub fn is_filled(&self) -> bool {
        self.base.is_filled()
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.base.set_filled(filled);
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.base.created_at()
    }
}

impl Measurable for Shape {
    fn area(&self) -> f64 {
        self.kind.area()
    }

    fn perimeter(&self) -> f64 {
        self.kind.perimeter()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.kind, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().unwrap()
    }

    #[test]
    fn test_geometric_object_defaults() {
        let base = GeometricObject::new();
        assert_eq!(base.color(), "white");
        assert!(!base.is_filled());
    }

    #[test]
    fn test_geometric_object_setters_keep_timestamp() {
        let mut base = GeometricObject::with_timestamp("red", true, fixed_time());
        base.set_color("blue");
        base.set_filled(false);
        assert_eq!(base.color(), "blue");
        assert!(!base.is_filled());
        assert_eq!(base.created_at(), fixed_time());
    }

    #[test]
    fn test_geometric_object_display() {
        let base = GeometricObject::with_timestamp("red", true, fixed_time());
        let rendered = base.to_string();
        assert!(rendered.starts_with("Created on Tue Jan 02 03:04:05 "), "{}", rendered);
        assert!(rendered.ends_with(" 2024\nColor: red\nFilled: true"), "{}", rendered);
    }

    #[test]
    fn test_circle_measures() {
        let c = Circle { radius: 5.0 };
        assert!((c.area() - 78.5398).abs() < 1e-4);
        assert!((c.perimeter() - 31.4159).abs() < 1e-4);
    }

    #[test]
    fn test_rectangle_measures() {
        let r = Rectangle {
            width: 4.0,
            height: 6.0,
        };
        assert_eq!(r.area(), 24.0);
        assert_eq!(r.perimeter(), 20.0);
    }

    #[test]
    fn test_large_radius_renders_in_full() {
        assert_eq!(
            Circle { radius: 1e7 }.to_string(),
            "Circle: radius=10000000.0"
        );
    }

    #[test]
    fn test_negative_dimensions_propagate() {
        let r = Rectangle {
            width: -2.0,
            height: 3.0,
        };
        assert_eq!(r.area(), -6.0);
        assert_eq!(r.perimeter(), 2.0);
        assert!(Circle { radius: -1.0 }.perimeter() < 0.0);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            Shape::default_circle().kind(),
            &ShapeKind::Circle(Circle { radius: 1.0 })
        );
        assert_eq!(Shape::default_rectangle().area(), 1.0);
        assert_eq!(Shape::default_rectangle().color(), DEFAULT_COLOR);
    }

    #[test]
    fn test_shape_display_prefixes_variant_line() {
        let base = GeometricObject::with_timestamp("blue", false, fixed_time());
        let shape = Shape::from_parts(
            base.clone(),
            Rectangle {
                width: 4.0,
                height: 6.0,
            },
        );
        assert_eq!(
            shape.to_string(),
            format!("Rectangle: width=4.0, height=6.0\n{}", base)
        );
    }

    #[test]
    fn test_kind_mut_updates_measures() {
        let mut shape = Shape::circle(1.0);
        if let ShapeKind::Circle(c) = shape.kind_mut() {
            c.radius = 2.0;
        }
        assert!((shape.area() - 4.0 * PI).abs() < 1e-12);
        assert_eq!(shape.kind().name(), "circle");
    }
}
