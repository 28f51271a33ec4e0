//! The Bridge pattern walkthrough: shapes decoupled from their colors.
//!
//! The abstraction ([`Shape`]) holds its implementor ([`Color`]) behind a
//! trait object, so both hierarchies can grow without touching each other.

use std::fmt;

/// Implementor side of the bridge: a fill color a shape can be drawn in.
pub trait Color: Send + Sync {
    /// Returns the color's display name.
    fn name(&self) -> &'static str;
}

/// The color red.
#[derive(Debug, Clone, Copy, Default)]
pub struct Red;

impl Color for Red {
    fn name(&self) -> &'static str {
        "Red"
    }
}

/// The color blue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blue;

impl Color for Blue {
    fn name(&self) -> &'static str {
        "Blue"
    }
}

/// Abstraction side of the bridge: something that can be drawn.
pub trait Shape {
    /// Returns the narration line for drawing this shape.
    fn draw(&self) -> String;
}

/// A circle drawn in some color.
pub struct Circle {
    color: Box<dyn Color>,
}

impl Circle {
    /// Creates a circle with the given fill color.
    #[must_use]
    pub fn new(color: impl Color + 'static) -> Self {
        Self {
            color: Box::new(color),
        }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("Drawing a Circle in {} color.", self.color.name())
    }
}

impl fmt::Debug for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circle")
            .field("color", &self.color.name())
            .finish()
    }
}

/// A square drawn in some color.
pub struct Square {
    color: Box<dyn Color>,
}

impl Square {
    /// Creates a square with the given fill color.
    #[must_use]
    pub fn new(color: impl Color + 'static) -> Self {
        Self {
            color: Box::new(color),
        }
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        format!("Drawing a Square in {} color.", self.color.name())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Square")
            .field("color", &self.color.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_combine_with_any_color() {
        assert_eq!(Circle::new(Red).draw(), "Drawing a Circle in Red color.");
        assert_eq!(Square::new(Blue).draw(), "Drawing a Square in Blue color.");
        assert_eq!(Circle::new(Blue).draw(), "Drawing a Circle in Blue color.");
        assert_eq!(Square::new(Red).draw(), "Drawing a Square in Red color.");
    }

    #[test]
    fn test_shapes_behind_trait_objects() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(Red)),
            Box::new(Square::new(Blue)),
        ];
        let lines: Vec<String> = shapes.iter().map(|s| s.draw()).collect();
        assert_eq!(
            lines,
            vec![
                "Drawing a Circle in Red color.".to_string(),
                "Drawing a Square in Blue color.".to_string(),
            ]
        );
    }
}
